//! Pull-request preview text for Docker image tags.
//!
//! The preview is posted as CI output or as a PR comment, so it is plain text
//! with Markdown code fences around the tag list and the `docker pull`
//! example.

pub const NO_TAGS_MESSAGE: &str = "No tags found";

const FENCE: &str = "```";

/// Splits `input` into tags, one per line.
///
/// Lines end at `\n`, `\r\n`, `\r` and the other Unicode line boundaries
/// (`\x0b`, `\x0c`, `\x1c`..`\x1e`, `\u{85}`, `\u{2028}`, `\u{2029}`). A
/// terminator at the very end does not produce a trailing empty tag, but empty
/// lines in between are kept.
pub fn split_tags(input: &str) -> Vec<&str> {
    let mut tags = Vec::new();
    let mut start = 0;
    let mut chars = input.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_line_boundary(ch) {
            continue;
        }
        tags.push(&input[start..idx]);
        let mut end = idx + ch.len_utf8();
        if ch == '\r'
            && let Some(&(next_idx, '\n')) = chars.peek()
        {
            chars.next();
            end = next_idx + 1;
        }
        start = end;
    }

    if start < input.len() {
        tags.push(&input[start..]);
    }
    tags
}

fn is_line_boundary(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Renders the preview for `tags`, newline-terminated.
///
/// The first tag is the one used in the `docker pull` example.
pub fn render_preview<S: AsRef<str>>(tags: &[S]) -> String {
    let Some(first) = tags.first() else {
        return format!("{NO_TAGS_MESSAGE}\n");
    };

    let plural = if tags.len() > 1 { "s" } else { "" };
    let mut out = format!("Docker image{plural} for this PR are available:\n{FENCE}\n");
    for tag in tags {
        out.push_str(tag.as_ref());
        out.push('\n');
    }
    out.push_str(&format!(
        "{FENCE}\nTo try locally, run:\n{FENCE}\ndocker pull {first}\n{FENCE}\n",
        first = first.as_ref()
    ));
    out
}

/// Convenience wrapper: [`split_tags`] followed by [`render_preview`].
pub fn preview_from_input(input: &str) -> String {
    render_preview(&split_tags(input))
}
