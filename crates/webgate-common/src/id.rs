use serde::{Deserialize, Serialize};
use std::fmt;

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Identifies one embedded view. Each view owns its own resource registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ViewId(String);

impl ViewId {
    pub fn new() -> Self {
        Self(new_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ViewId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_id_is_valid_uuid() {
        let id = new_id();
        let parsed = uuid::Uuid::parse_str(&id);
        assert!(parsed.is_ok());
        assert_eq!(parsed.unwrap().get_version_num(), 4);
    }

    #[test]
    fn view_id_is_unique() {
        assert_ne!(ViewId::new(), ViewId::new());
    }

    #[test]
    fn view_id_display() {
        let vid = ViewId::new();
        assert_eq!(vid.to_string(), vid.as_str());
    }

    #[test]
    fn view_id_serialization() {
        let vid = ViewId::new();
        let json = serde_json::to_string(&vid).unwrap();
        let deserialized: ViewId = serde_json::from_str(&json).unwrap();
        assert_eq!(vid, deserialized);
    }

    #[test]
    fn view_id_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        let v1 = ViewId::new();
        set.insert(v1.clone());
        set.insert(v1);
        assert_eq!(set.len(), 1);
    }
}
