//! Validation functions for JSON Pointer.

use thiserror::Error;

/// Maximum allowed pointer string length.
const MAX_POINTER_LENGTH: usize = 1024;

/// Maximum allowed path depth.
const MAX_PATH_LENGTH: usize = 256;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("POINTER_INVALID")]
    PointerInvalid,
    #[error("POINTER_TOO_LONG")]
    PointerTooLong,
    #[error("PATH_TOO_LONG")]
    PathTooLong,
}

/// Validate a JSON Pointer string.
///
/// # Errors
///
/// Returns an error if:
/// - The pointer is non-empty but doesn't start with `/`
/// - The pointer exceeds the maximum length (1024 characters)
///
/// # Example
///
/// ```
/// use json_mutate_json_pointer::validate_json_pointer;
///
/// validate_json_pointer("").unwrap();          // root is valid
/// validate_json_pointer("/foo/bar").unwrap();  // valid absolute pointer
/// validate_json_pointer("foo").unwrap_err();   // missing leading /
/// ```
pub fn validate_json_pointer(pointer: &str) -> Result<(), ValidationError> {
    if pointer.is_empty() {
        return Ok(());
    }
    if !pointer.starts_with('/') {
        return Err(ValidationError::PointerInvalid);
    }
    if pointer.len() > MAX_POINTER_LENGTH {
        return Err(ValidationError::PointerTooLong);
    }
    Ok(())
}

/// Validate a parsed path (array of path steps).
///
/// Every string is a legal step, so the only failure is exceeding the
/// maximum depth (256 steps).
///
/// # Example
///
/// ```
/// use json_mutate_json_pointer::validate_path;
///
/// validate_path(&["foo".to_string(), "bar".to_string()]).unwrap();
/// validate_path(&(0..300).map(|i| i.to_string()).collect::<Vec<_>>()).unwrap_err();
/// ```
pub fn validate_path(path: &[String]) -> Result<(), ValidationError> {
    if path.len() > MAX_PATH_LENGTH {
        return Err(ValidationError::PathTooLong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pointer_is_root() {
        assert!(validate_json_pointer("").is_ok());
    }

    #[test]
    fn absolute_pointers_pass() {
        assert!(validate_json_pointer("/").is_ok());
        assert!(validate_json_pointer("/foo").is_ok());
        assert!(validate_json_pointer("/foo/bar").is_ok());
    }

    #[test]
    fn missing_leading_slash_fails() {
        assert_eq!(
            validate_json_pointer("foo"),
            Err(ValidationError::PointerInvalid)
        );
        assert_eq!(
            validate_json_pointer("foo/bar"),
            Err(ValidationError::PointerInvalid)
        );
    }

    #[test]
    fn overlong_pointer_fails() {
        let long_pointer = "/".to_string() + &"a".repeat(2000);
        assert_eq!(
            validate_json_pointer(&long_pointer),
            Err(ValidationError::PointerTooLong)
        );
    }

    #[test]
    fn short_path_passes() {
        let path = vec!["foo".to_string(), "bar".to_string()];
        assert!(validate_path(&path).is_ok());
    }

    #[test]
    fn overlong_path_fails() {
        let path: Vec<String> = (0..300).map(|i| i.to_string()).collect();
        assert_eq!(validate_path(&path), Err(ValidationError::PathTooLong));
    }

    #[test]
    fn max_length_path_passes() {
        let path: Vec<String> = (0..256).map(|i| i.to_string()).collect();
        assert!(validate_path(&path).is_ok());
    }
}
