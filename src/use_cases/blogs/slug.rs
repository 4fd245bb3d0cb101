use crate::UseCaseError;

/// Lowercase ASCII alphanumerics joined by single hyphens.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

pub(crate) fn resolve_slug(slug: Option<&str>, title: &str) -> Result<String, UseCaseError> {
    let slug = slugify(slug.unwrap_or(title));
    match slug.is_empty() {
        true => Err(UseCaseError::BadRequest(
            "A slug could not be derived; use letters or digits.".to_string(),
        )),
        false => Ok(slug),
    }
}
