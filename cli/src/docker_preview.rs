//! `gen-docker-pr-preview`: turns the tag list of a PR image build into a
//! comment-ready preview.

use std::io::Read;
use std::io::Write;

use anyhow::Context;
use clap::Parser;
use release_tools_preview::render_preview;
use release_tools_preview::split_tags;

use crate::args::Verbosity;

#[derive(Debug, Parser)]
#[command(
    name = "gen-docker-pr-preview",
    version,
    about = "Format Docker image tags read from stdin as a PR preview"
)]
pub struct Cli {
    #[command(flatten)]
    pub verbosity: Verbosity,

    /// Accepted and ignored; tags only come from stdin.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<String>,
}

/// Reads tags from `stdin` and writes the preview to `stdout`.
///
/// Input that is not valid UTF-8 is decoded lossily rather than rejected.
pub fn run(stdin: &mut impl Read, stdout: &mut impl Write) -> anyhow::Result<()> {
    let mut raw = Vec::new();
    stdin
        .read_to_end(&mut raw)
        .context("failed to read tags from stdin")?;
    let input = String::from_utf8_lossy(&raw);

    let tags = split_tags(&input);
    tracing::debug!("read {} tag(s)", tags.len());

    stdout.write_all(render_preview(&tags).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn preview(input: &[u8]) -> String {
        let mut stdout = Vec::new();
        run(&mut &input[..], &mut stdout).expect("run preview");
        String::from_utf8(stdout).expect("utf-8 output")
    }

    #[test]
    fn stray_arguments_are_accepted() {
        let cli = Cli::try_parse_from(["gen-docker-pr-preview", "img:1", "--flag", "-x"])
            .expect("stray arguments must not be a usage error");
        assert_eq!(cli.ignored, vec!["img:1", "--flag", "-x"]);
        assert_eq!(cli.verbosity.verbose, 0);
    }

    #[test]
    fn empty_stdin_reports_no_tags() {
        assert_eq!(preview(b""), "No tags found\n");
    }

    #[test]
    fn crlf_input_is_split_per_line() {
        assert_eq!(
            preview(b"img:1\r\nimg:2\r\n"),
            "Docker images for this PR are available:\n```\nimg:1\nimg:2\n```\nTo try locally, run:\n```\ndocker pull img:1\n```\n"
        );
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let output = preview(b"img:\xff\n");
        assert!(output.starts_with("Docker image for this PR are available:\n"));
        assert!(output.contains("docker pull img:\u{fffd}\n"));
    }
}
