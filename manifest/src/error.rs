use std::path::PathBuf;

/// Failures raised while loading, querying or persisting a [`crate::Manifest`].
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The manifest file does not exist (`FileNotFound`).
    #[error("manifest not found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read manifest {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML (`ParseError`).
    #[error("failed to parse manifest {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml_edit::TomlError,
    },

    /// `package` or `package.version` is absent (`MissingField`).
    #[error("manifest {} has no `{field}` field", path.display())]
    MissingField { path: PathBuf, field: &'static str },

    /// The field exists with the wrong TOML type.
    #[error("manifest {} has `{field}` of type {found}, expected {expected}", path.display())]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("failed to write manifest {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ManifestError {
    pub(crate) fn read(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            ManifestError::NotFound { path }
        } else {
            ManifestError::Read { path, source }
        }
    }
}
