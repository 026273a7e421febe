//! Validation of user input before it is used to derive filesystem paths.

use crate::error::{ForgeError, Result};

/// Validate a project name.
///
/// Names become directory names and Python module names, so they must
/// be non-empty identifiers: ASCII alphanumeric characters and
/// underscores only, not starting with a digit.
///
/// # Returns
/// * `Ok(())` if valid
/// * `Err(ForgeError::Validation)` with the reason if invalid
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ForgeError::Validation(
            "Project name cannot be empty".to_string(),
        ));
    }

    let mut chars = name.chars();
    if let Some(first) = chars.next() {
        if first.is_ascii_digit() {
            return Err(ForgeError::Validation(
                "Project name cannot start with a digit".to_string(),
            ));
        }
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ForgeError::Validation(format!(
            "Project name '{}' contains invalid characters (only alphanumeric and '_' allowed)",
            name
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_project_name_valid() {
        assert!(validate_project_name("myapp").is_ok());
        assert!(validate_project_name("my_app").is_ok());
        assert!(validate_project_name("_private").is_ok());
        assert!(validate_project_name("app2").is_ok());
    }

    #[test]
    fn test_validate_project_name_empty() {
        assert!(validate_project_name("").is_err());
    }

    #[test]
    fn test_validate_project_name_leading_digit() {
        assert!(validate_project_name("2app").is_err());
    }

    #[test]
    fn test_validate_project_name_invalid_characters() {
        assert!(validate_project_name("my app").is_err());
        assert!(validate_project_name("my-app").is_err());
        assert!(validate_project_name("app!").is_err());
        assert!(validate_project_name("app.name").is_err());
        assert!(validate_project_name("app\n").is_err());
    }
}
