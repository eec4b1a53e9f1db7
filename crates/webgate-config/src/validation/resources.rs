use crate::schema::WebGateConfig;

pub(crate) fn validate_resources(errors: &mut Vec<String>, config: &WebGateConfig) {
    for (name, path) in &config.resources.entries {
        if name.trim().is_empty() {
            errors.push("resources.entries contains an empty symbolic name".into());
        }
        if path.trim().is_empty() {
            errors.push(format!("resources.entries.{name:?} has an empty path"));
        }
    }
}
