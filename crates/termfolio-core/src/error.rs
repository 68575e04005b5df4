//! Error types for the terminal core.

use thiserror::Error;

/// Virtual filesystem errors.
///
/// Never surfaces as a fault to terminal users: the interpreter renders it as
/// an output line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    /// No file with this exact name exists.
    #[error("{0}: No such file or directory")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = VfsError::NotFound("nofile.xyz".to_string());
        assert_eq!(err.to_string(), "nofile.xyz: No such file or directory");
    }
}
