// src/shared/validation.rs

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("slug may only contain lowercase letters, digits and '-'")]
    InvalidSlug,

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

pub const MAX_SLUG_LEN: usize = 150;
pub const MAX_TITLE_LEN: usize = 200;

/// Slugs are compared case-insensitively, so they are stored trimmed and
/// lower-cased.
pub fn normalize_slug(slug: &str) -> String {
    slug.trim().to_lowercase()
}

pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    let slug = normalize_slug(slug);

    if slug.is_empty() {
        return Err(ValidationError::Required("slug"));
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(ValidationError::TooLong {
            field: "slug",
            max: MAX_SLUG_LEN,
        });
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ValidationError::InvalidSlug);
    }

    Ok(())
}

pub fn validate_required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(())
    }
}

pub fn validate_max_len(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        Err(ValidationError::TooLong { field, max })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_is_normalized_before_validation() {
        assert_eq!(normalize_slug("  My-Project "), "my-project");
        assert!(validate_slug("  My-Project ").is_ok());
    }

    #[test]
    fn test_empty_slug_rejected() {
        assert_eq!(validate_slug("   "), Err(ValidationError::Required("slug")));
    }

    #[test]
    fn test_slug_with_spaces_rejected() {
        assert_eq!(validate_slug("my project"), Err(ValidationError::InvalidSlug));
    }

    #[test]
    fn test_required_and_max_len() {
        assert!(validate_required("title", "x").is_ok());
        assert_eq!(
            validate_required("title", " "),
            Err(ValidationError::Required("title"))
        );
        assert!(validate_max_len("title", "abc", 2).is_err());
    }
}
