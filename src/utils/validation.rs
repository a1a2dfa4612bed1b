use crate::utils::error::{CatalogError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(CatalogError::invalid_field(field_name, "Value cannot be empty"));
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CatalogError::invalid_field(
            field_name,
            format!("Value must be a finite number, got {}", value),
        ));
    }
    if value < 0.0 {
        return Err(CatalogError::invalid_field(
            field_name,
            format!("Value must be zero or more, got {}", value),
        ));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "Skiing").is_ok());
        assert!(validate_non_empty_string("name", "").is_err());
        assert!(validate_non_empty_string("name", "   ").is_ok());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("cost", 0.0).is_ok());
        assert!(validate_non_negative("cost", 45.5).is_ok());
        assert!(validate_non_negative("cost", -0.01).is_err());
        assert!(validate_non_negative("cost", f64::NAN).is_err());
        assert!(validate_non_negative("cost", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("export.output_dir", "./out").is_ok());
        assert!(validate_path("export.output_dir", "").is_err());
        assert!(validate_path("export.output_dir", "a\0b").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("input.max_name_length", 25, 1).is_ok());
        assert!(validate_positive_number("input.max_name_length", 0, 1).is_err());
    }
}
