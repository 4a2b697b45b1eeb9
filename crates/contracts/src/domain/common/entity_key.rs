use crate::shared::metadata::EntityKeyKind;
use serde_json::Value;
use std::fmt;

/// Slug or numeric id addressing a single resource
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityKey {
    kind: EntityKeyKind,
    value: String,
}

impl EntityKey {
    pub fn new(kind: EntityKeyKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn slug(value: impl Into<String>) -> Self {
        Self::new(EntityKeyKind::Slug, value)
    }

    pub fn id(value: impl Into<String>) -> Self {
        Self::new(EntityKeyKind::Id, value)
    }

    pub fn kind(&self) -> EntityKeyKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Read the key attribute out of a fetched entity payload
    pub fn from_entity(kind: EntityKeyKind, entity: &Value) -> Option<Self> {
        let value = match entity.get(kind.param_name())? {
            Value::String(s) if !s.is_empty() => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        Some(Self::new(kind, value))
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_from_entity() {
        let admission = json!({"id": 4, "slug": "fall-intake"});
        assert_eq!(
            EntityKey::from_entity(EntityKeyKind::Slug, &admission),
            Some(EntityKey::slug("fall-intake"))
        );
        assert_eq!(
            EntityKey::from_entity(EntityKeyKind::Id, &admission),
            Some(EntityKey::id("4"))
        );
        assert_eq!(EntityKey::from_entity(EntityKeyKind::Slug, &json!({"slug": ""})), None);
    }

    #[test]
    fn test_keys_hash_by_kind_and_value() {
        use std::collections::HashSet;

        let keys: HashSet<EntityKey> = [
            EntityKey::slug("4"),
            EntityKey::id("4"),
            EntityKey::id("4"),
        ]
        .into_iter()
        .collect();
        assert_eq!(keys.len(), 2);
    }
}
