//! Ordered property map.
//!
//! # Responsibilities
//! - Preserve insertion order (the protocol order) across inserts and merges
//! - Replace-in-place on key collision so an override keeps the original
//!   key position, matching shallow-spread semantics
//!
//! # Design Decisions
//! - Plain `Vec<(String, Prop)>`; prop maps are small (tens of keys), so
//!   linear scans beat hashing and keep ordering explicit

use crate::props::entry::Prop;

/// Ordered association list of named props.
#[derive(Debug, Default)]
pub struct Props {
    entries: Vec<(String, Prop)>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a prop. An existing key is overwritten in place, keeping its
    /// original position; a new key appends.
    pub fn insert(&mut self, key: impl Into<String>, prop: Prop) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = prop,
            None => self.entries.push((key, prop)),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, prop: Prop) -> Self {
        self.insert(key, prop);
        self
    }

    /// Merge `other` into `self`, entry by entry; `other` wins on collision.
    pub fn merge(&mut self, other: Props) {
        for (key, prop) in other.entries {
            self.insert(key, prop);
        }
    }

    /// Remove and return the prop stored under `key`, if any.
    pub fn take(&mut self, key: &str) -> Option<Prop> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn get(&self, key: &str) -> Option<&Prop> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, p)| p)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Prop)> {
        self.entries.iter().map(|(k, p)| (k.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl IntoIterator for Props {
    type Item = (String, Prop);
    type IntoIter = std::vec::IntoIter<(String, Prop)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(String, Prop)> for Props {
    fn from_iter<I: IntoIterator<Item = (String, Prop)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (key, prop) in iter {
            props.insert(key, prop);
        }
        props
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_preserves_order() {
        let mut props = Props::new();
        props.insert("d", Prop::value(json!(1)));
        props.insert("a", Prop::value(json!(2)));
        props.insert("c", Prop::value(json!(3)));

        let keys: Vec<&str> = props.keys().collect();
        assert_eq!(keys, vec!["d", "a", "c"]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut props = Props::new();
        props.insert("a", Prop::value(json!(1)));
        props.insert("b", Prop::value(json!(2)));
        props.insert("a", Prop::value(json!(9)));

        let keys: Vec<&str> = props.keys().collect();
        assert_eq!(keys, vec!["a", "b"]); // "a" did not move to the back
        match props.get("a") {
            Some(Prop::Value(v)) => assert_eq!(v, &json!(9)),
            other => panic!("unexpected prop: {:?}", other),
        }
    }

    #[test]
    fn test_merge_other_wins() {
        let mut shared = Props::new()
            .with("a", Prop::value(json!("shared")))
            .with("b", Prop::value(json!("shared")));
        let explicit = Props::new().with("b", Prop::value(json!("explicit")));

        shared.merge(explicit);

        match shared.get("b") {
            Some(Prop::Value(v)) => assert_eq!(v, &json!("explicit")),
            other => panic!("unexpected prop: {:?}", other),
        }
        assert_eq!(shared.len(), 2);
    }

    #[test]
    fn test_take_removes_entry() {
        let mut props = Props::new().with("a", Prop::value(json!(1)));
        assert!(props.take("a").is_some());
        assert!(props.take("a").is_none());
        assert!(props.is_empty());
    }
}
