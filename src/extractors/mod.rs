//! HTML extraction modules
//!
//! `dom` exposes the small slice of DOM querying the extractor needs;
//! `champion_extractor` turns a parsed page into a [`ResultSet`].

mod champion_extractor;
mod dom;

pub use champion_extractor::*;
pub use dom::*;

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Fallback for any cell that could not be found in a row
pub const SENTINEL: &str = "N/A";

/// Balance adjustments for one champion
///
/// The name is the key in the serialized document, so only the three text
/// fields appear in each value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CharacterAdjustment {
    #[serde(skip)]
    pub name: String,
    pub damage_dealt: String,
    pub damage_taken: String,
    pub other: String,
}

/// Champions keyed by name, in the order they appear on the page
///
/// Inserting a name that is already present replaces its fields but keeps
/// the slot of the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    entries: Vec<CharacterAdjustment>,
    index: HashMap<String, usize>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite by name. Returns the replaced entry, if any.
    pub fn insert(&mut self, adjustment: CharacterAdjustment) -> Option<CharacterAdjustment> {
        if let Some(&slot) = self.index.get(&adjustment.name) {
            return Some(std::mem::replace(&mut self.entries[slot], adjustment));
        }

        self.index
            .insert(adjustment.name.clone(), self.entries.len());
        self.entries.push(adjustment);
        None
    }

    pub fn get(&self, name: &str) -> Option<&CharacterAdjustment> {
        self.index.get(name).map(|&slot| &self.entries[slot])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CharacterAdjustment> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }
}

impl Serialize for ResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|entry| (&entry.name, entry)))
    }
}

impl<'de> Deserialize<'de> for ResultSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ResultSetVisitor;

        impl<'de> Visitor<'de> for ResultSetVisitor {
            type Value = ResultSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of champion names to adjustments")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ResultSet, A::Error> {
                let mut results = ResultSet::new();
                while let Some((name, mut adjustment)) =
                    map.next_entry::<String, CharacterAdjustment>()?
                {
                    adjustment.name = name;
                    results.insert(adjustment);
                }
                Ok(results)
            }
        }

        deserializer.deserialize_map(ResultSetVisitor)
    }
}
