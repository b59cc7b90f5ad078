//! Validation utilities for Azure resource identifiers and wait settings
//!
//! Identifiers are interpolated into `az` argument lists and probe command
//! templates, so they are checked against Azure naming rules before use.

use anyhow::Result;

/// Maximum length for container group names
pub const CONTAINER_GROUP_NAME_MAX_LENGTH: usize = 63;

/// Maximum length for resource group names
pub const RESOURCE_GROUP_NAME_MAX_LENGTH: usize = 90;

/// Non-alphanumeric characters allowed in resource group names
const RESOURCE_GROUP_ALLOWED_CHARS: &[char] = &['-', '_', '.', '(', ')'];

/// Validate an Azure container group name
///
/// Container group names must:
/// - Not be empty
/// - Not exceed 63 characters
/// - Contain only lowercase letters, digits and hyphens
/// - Not start or end with a hyphen, nor contain consecutive hyphens
pub fn validate_container_group_name(name: &str, field_name: &str) -> Result<()> {
    if name.is_empty() {
        anyhow::bail!("{} cannot be empty", field_name);
    }

    if name.len() > CONTAINER_GROUP_NAME_MAX_LENGTH {
        anyhow::bail!(
            "{} exceeds maximum container group name length ({} > {})",
            field_name,
            name.len(),
            CONTAINER_GROUP_NAME_MAX_LENGTH
        );
    }

    let invalid_chars: Vec<char> = name
        .chars()
        .filter(|c| !c.is_ascii_lowercase() && !c.is_ascii_digit() && *c != '-')
        .collect();

    if !invalid_chars.is_empty() {
        anyhow::bail!(
            "{} contains invalid characters: {:?} (allowed: a-z, 0-9, -)",
            field_name,
            invalid_chars
        );
    }

    if name.starts_with('-') || name.ends_with('-') {
        anyhow::bail!("{} cannot start or end with a hyphen", field_name);
    }

    if name.contains("--") {
        anyhow::bail!("{} cannot contain consecutive hyphens", field_name);
    }

    Ok(())
}

/// Validate an Azure resource group name
///
/// Resource group names allow alphanumerics, underscores, hyphens, periods
/// and parentheses, up to 90 characters, and cannot end in a period.
pub fn validate_resource_group_name(name: &str, field_name: &str) -> Result<()> {
    if name.is_empty() {
        anyhow::bail!("{} cannot be empty", field_name);
    }

    if name.len() > RESOURCE_GROUP_NAME_MAX_LENGTH {
        anyhow::bail!(
            "{} exceeds maximum resource group name length ({} > {})",
            field_name,
            name.len(),
            RESOURCE_GROUP_NAME_MAX_LENGTH
        );
    }

    let invalid_chars: Vec<char> = name
        .chars()
        .filter(|c| !c.is_ascii_alphanumeric() && !RESOURCE_GROUP_ALLOWED_CHARS.contains(c))
        .collect();

    if !invalid_chars.is_empty() {
        anyhow::bail!(
            "{} contains invalid characters: {:?} (allowed: a-z, A-Z, 0-9, -, _, ., (, ))",
            field_name,
            invalid_chars
        );
    }

    if name.ends_with('.') {
        anyhow::bail!("{} cannot end with a period", field_name);
    }

    Ok(())
}

/// Validate configuration numeric values are within reasonable bounds
pub fn validate_numeric_range(value: u64, field_name: &str, min: u64, max: u64) -> Result<()> {
    if value < min || value > max {
        anyhow::bail!(
            "{} must be between {} and {}, got: {}",
            field_name,
            min,
            max,
            value
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_container_group_name_valid() {
        assert!(validate_container_group_name("flyway-migrate", "name").is_ok());
        assert!(validate_container_group_name("ci-app-dev-01", "name").is_ok());
        assert!(validate_container_group_name("a", "name").is_ok());
    }

    #[test]
    fn test_validate_container_group_name_invalid() {
        // Empty
        assert!(validate_container_group_name("", "name").is_err());

        // Uppercase and other characters
        assert!(validate_container_group_name("Flyway", "name").is_err());
        assert!(validate_container_group_name("flyway_migrate", "name").is_err());
        assert!(validate_container_group_name("flyway migrate", "name").is_err());

        // Hyphen placement
        assert!(validate_container_group_name("-flyway", "name").is_err());
        assert!(validate_container_group_name("flyway-", "name").is_err());
        assert!(validate_container_group_name("flyway--migrate", "name").is_err());

        // Too long
        let long_name = "a".repeat(64);
        assert!(validate_container_group_name(&long_name, "name").is_err());
    }

    #[test]
    fn test_validate_resource_group_name() {
        assert!(validate_resource_group_name("rg-app-dev", "resource_group").is_ok());
        assert!(validate_resource_group_name("RG_App.(prod)", "resource_group").is_ok());

        assert!(validate_resource_group_name("", "resource_group").is_err());
        assert!(validate_resource_group_name("rg-app.", "resource_group").is_err());
        assert!(validate_resource_group_name("rg app", "resource_group").is_err());
        assert!(validate_resource_group_name("rg;rm -rf", "resource_group").is_err());

        let long_name = "r".repeat(91);
        assert!(validate_resource_group_name(&long_name, "resource_group").is_err());
    }

    #[test]
    fn test_validate_numeric_range() {
        // Valid values
        assert!(validate_numeric_range(10, "interval_secs", 1, 3600).is_ok());
        assert!(validate_numeric_range(1, "interval_secs", 1, 3600).is_ok());
        assert!(validate_numeric_range(3600, "interval_secs", 1, 3600).is_ok());

        // Invalid values
        assert!(validate_numeric_range(0, "interval_secs", 1, 3600).is_err());
        assert!(validate_numeric_range(3601, "interval_secs", 1, 3600).is_err());
    }
}
