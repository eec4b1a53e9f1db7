use crate::schema::WebGateConfig;

pub(crate) fn validate_navigation(errors: &mut Vec<String>, config: &WebGateConfig) {
    if config
        .navigation
        .blocked_prefixes
        .iter()
        .any(|p| p.trim().is_empty())
    {
        // An empty prefix would match, and therefore block, every URL.
        errors.push("navigation.blocked_prefixes contains an empty prefix".into());
    }
}
