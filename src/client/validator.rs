use crate::error::ValidationError;

/// Check composer fields before anything goes on the wire.
///
/// Content is checked first; the first failure wins.
pub fn validate(kind: &str, content: &str) -> Result<(), ValidationError> {
    if content.trim().is_empty() {
        return Err(ValidationError::EmptyContent);
    }
    if kind.trim().is_empty() {
        return Err(ValidationError::MissingType);
    }
    Ok(())
}
