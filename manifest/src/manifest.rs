use std::path::Path;
use std::path::PathBuf;

use toml_edit::DocumentMut;
use toml_edit::Item;
use toml_edit::TableLike;
use toml_edit::Value;

use crate::ManifestError;

/// Manifest location used when the caller does not name one, relative to the
/// current working directory.
pub const DEFAULT_MANIFEST_PATH: &str = "Cargo.toml";

const PACKAGE_KEY: &str = "package";
const VERSION_KEY: &str = "version";
const PACKAGE_VERSION_FIELD: &str = "package.version";

/// A Cargo manifest held as a format-preserving TOML document.
///
/// Edits go through [`toml_edit`], so comments, key order and whitespace of
/// everything other than the edited value survive a [`Manifest::write`].
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    doc: DocumentMut,
}

/// Outcome of comparing the recorded `package.version` with a target version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionStatus {
    Matches,
    /// `recorded` is `None` when `package.version` is not a string, such as
    /// `version.workspace = true`.
    Differs { recorded: Option<String> },
}

impl VersionStatus {
    /// Whether the manifest has to be rewritten to carry the target version.
    pub fn needs_update(&self) -> bool {
        matches!(self, VersionStatus::Differs { .. })
    }
}

impl Manifest {
    /// Reads and parses the manifest at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ManifestError> {
        let path = path.into();
        tracing::debug!("reading manifest {}", path.display());
        let contents =
            std::fs::read_to_string(&path).map_err(|err| ManifestError::read(path.clone(), err))?;
        Self::parse(path, &contents)
    }

    /// Parses `contents` as the manifest that lives at `path`.
    ///
    /// Nothing is read from disk; `path` is only remembered for error messages
    /// and for [`Manifest::write`].
    pub fn parse(path: impl Into<PathBuf>, contents: &str) -> Result<Self, ManifestError> {
        let path = path.into();
        match contents.parse::<DocumentMut>() {
            Ok(doc) => Ok(Self { path, doc }),
            Err(source) => Err(ManifestError::Parse { path, source }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the string stored at `package.version`.
    pub fn package_version(&self) -> Result<&str, ManifestError> {
        let package = self.package_table()?;
        let item = package
            .get(VERSION_KEY)
            .filter(|item| !item.is_none())
            .ok_or_else(|| self.missing_field(PACKAGE_VERSION_FIELD))?;
        item.as_str()
            .ok_or_else(|| self.invalid_field(PACKAGE_VERSION_FIELD, "string", item))
    }

    /// Compares `package.version` against `target` with plain string equality.
    ///
    /// A value that is present but not a string never equals `target`.
    pub fn compare_version(&self, target: &str) -> Result<VersionStatus, ManifestError> {
        let recorded = match self.package_version() {
            Ok(recorded) => recorded,
            Err(ManifestError::InvalidField {
                field: PACKAGE_VERSION_FIELD,
                found,
                ..
            }) => {
                tracing::info!("`{PACKAGE_VERSION_FIELD}` is a {found}, treating it as a mismatch");
                return Ok(VersionStatus::Differs { recorded: None });
            }
            Err(err) => return Err(err),
        };
        if recorded == target {
            Ok(VersionStatus::Matches)
        } else {
            Ok(VersionStatus::Differs {
                recorded: Some(recorded.to_string()),
            })
        }
    }

    /// Sets `package.version` to `version`, creating the key when the
    /// `package` table lacks it.
    ///
    /// An existing string keeps its surrounding whitespace and trailing
    /// comment. Any other value kind is replaced by a plain string.
    pub fn set_package_version(&mut self, version: &str) -> Result<(), ManifestError> {
        let package = self.package_table_mut()?;
        match package.get_mut(VERSION_KEY).filter(|item| !item.is_none()) {
            Some(Item::Value(existing)) => {
                let decor = existing.decor().clone();
                let mut replacement = Value::from(version);
                *replacement.decor_mut() = decor;
                *existing = replacement;
            }
            Some(other) => {
                tracing::info!(
                    "replacing {} at `{PACKAGE_VERSION_FIELD}` with a string",
                    other.type_name()
                );
                *other = toml_edit::value(version);
            }
            None => {
                tracing::info!("adding missing `{PACKAGE_VERSION_FIELD}`");
                package.insert(VERSION_KEY, toml_edit::value(version));
            }
        }
        Ok(())
    }

    /// Writes the document back to the path it was loaded from.
    pub fn write(&self) -> Result<(), ManifestError> {
        std::fs::write(&self.path, self.doc.to_string()).map_err(|source| ManifestError::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!("wrote manifest {}", self.path.display());
        Ok(())
    }

    fn package_table(&self) -> Result<&dyn TableLike, ManifestError> {
        let item = self
            .doc
            .get(PACKAGE_KEY)
            .filter(|item| !item.is_none())
            .ok_or_else(|| self.missing_field(PACKAGE_KEY))?;
        item.as_table_like()
            .ok_or_else(|| self.invalid_field(PACKAGE_KEY, "table", item))
    }

    fn package_table_mut(&mut self) -> Result<&mut dyn TableLike, ManifestError> {
        self.package_table()?;
        let path = &self.path;
        self.doc
            .get_mut(PACKAGE_KEY)
            .and_then(Item::as_table_like_mut)
            .ok_or_else(|| ManifestError::MissingField {
                path: path.clone(),
                field: PACKAGE_KEY,
            })
    }

    fn missing_field(&self, field: &'static str) -> ManifestError {
        ManifestError::MissingField {
            path: self.path.clone(),
            field,
        }
    }

    fn invalid_field(
        &self,
        field: &'static str,
        expected: &'static str,
        found: &Item,
    ) -> ManifestError {
        ManifestError::InvalidField {
            path: self.path.clone(),
            field,
            expected,
            found: found.type_name(),
        }
    }
}

impl std::fmt::Display for Manifest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.doc)
    }
}
