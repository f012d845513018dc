//! Format-preserving access to the `package.version` field of a Cargo
//! manifest.
//!
//! The manifest is held as a [`toml_edit::DocumentMut`], so rewriting the
//! version leaves comments, key order and whitespace elsewhere in the file
//! untouched.

mod error;
mod manifest;

pub use error::ManifestError;
pub use manifest::DEFAULT_MANIFEST_PATH;
pub use manifest::Manifest;
pub use manifest::VersionStatus;
