// SPDX-License-Identifier: PMPL-1.0-or-later

//! Fatal errors for a generate or validate run.
//!
//! Shape and invariant violations inside a readable document are not
//! errors here; they are reported as findings by [`crate::validate`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a readable property list: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: plist::Error,
    },

    #[error("failed to encode property list: {source}")]
    Encode {
        #[source]
        source: plist::Error,
    },

    #[error("invalid config {}: {detail}", path.display())]
    Config { path: PathBuf, detail: String },
}

impl CatalogError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            CatalogError::NotFound { path }
        } else {
            CatalogError::Io { path, source }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn missing_file_maps_to_not_found() {
        let err = CatalogError::io("missing.plist", Error::from(ErrorKind::NotFound));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "file not found: missing.plist");
    }

    #[test]
    fn other_io_errors_keep_their_source() {
        let err = CatalogError::io("locked.plist", Error::from(ErrorKind::PermissionDenied));
        assert!(!err.is_not_found());
        assert!(err.to_string().starts_with("I/O error on locked.plist"));
    }
}
