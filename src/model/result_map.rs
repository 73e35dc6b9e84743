//! Insertion-ordered mapping from dependency name to audit result.

use super::DependencyResult;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Dependency results keyed by name, iterated in insertion order.
///
/// Names are case-sensitive. Inserting a name that is already present replaces
/// its result and keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultMap {
    entries: Vec<(String, DependencyResult)>,
    index: HashMap<String, usize>,
}

impl ResultMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a result, returning the previous result for the same name.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        result: DependencyResult,
    ) -> Option<DependencyResult> {
        let name = name.into();
        match self.index.get(&name) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, result)),
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, result));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&DependencyResult> {
        self.index.get(name).map(|&position| &self.entries[position].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DependencyResult)> {
        self.entries
            .iter()
            .map(|(name, result)| (name.as_str(), result))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl<K: Into<String>> FromIterator<(K, DependencyResult)> for ResultMap {
    fn from_iter<I: IntoIterator<Item = (K, DependencyResult)>>(iter: I) -> Self {
        let mut map = ResultMap::new();
        for (name, result) in iter {
            map.insert(name, result);
        }
        map
    }
}

impl Serialize for ResultMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, result) in &self.entries {
            map.serialize_entry(name, result)?;
        }
        map.end()
    }
}

struct ResultMapVisitor;

impl<'de> Visitor<'de> for ResultMapVisitor {
    type Value = ResultMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from dependency name to dependency result")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = ResultMap::new();
        while let Some((name, result)) = access.next_entry::<String, DependencyResult>()? {
            map.insert(name, result);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for ResultMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ResultMapVisitor)
    }
}
