use crate::schema::WebGateConfig;

/// Schemes the browser already owns. Registering one of these as the
/// private scheme would hijack real traffic.
const RESERVED_SCHEMES: &[&str] = &["http", "https", "file", "about", "data", "javascript", "blob"];

/// RFC 3986: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
pub fn is_valid_scheme_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

pub(crate) fn validate_scheme(errors: &mut Vec<String>, config: &WebGateConfig) {
    let name = &config.scheme.name;
    if !is_valid_scheme_name(name) {
        errors.push(format!("scheme.name = {name:?} is not a valid URL scheme"));
        return;
    }
    if RESERVED_SCHEMES.contains(&name.to_ascii_lowercase().as_str()) {
        errors.push(format!("scheme.name = {name:?} is reserved by the browser"));
    }
}
