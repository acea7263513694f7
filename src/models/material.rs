use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Total requirement for one raw ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialEntry {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

/// Raw-material totals keyed by ingredient id.
///
/// Ordered by id so rendering and export are stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialMap {
    pub(crate) entries: BTreeMap<String, MaterialEntry>,
}

impl MaterialMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, ingredient_id: &str) -> Option<&MaterialEntry> {
        self.entries.get(ingredient_id)
    }

    /// Quantity for `ingredient_id`, or 0.0 if it is not required.
    pub fn quantity(&self, ingredient_id: &str) -> f64 {
        self.get(ingredient_id).map(|e| e.quantity).unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MaterialEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Multiply every quantity by `factor` (e.g. number of loaves).
    ///
    /// A non-positive or non-finite factor yields an empty map.
    pub fn scaled(&self, factor: f64) -> MaterialMap {
        if !(factor.is_finite() && factor > 0.0) {
            return MaterialMap::new();
        }

        let entries = self
            .entries
            .iter()
            .map(|(id, entry)| {
                let mut entry = entry.clone();
                entry.quantity *= factor;
                (id.clone(), entry)
            })
            .collect();

        MaterialMap { entries }
    }
}

impl<'a> IntoIterator for &'a MaterialMap {
    type Item = (&'a String, &'a MaterialEntry);
    type IntoIter = std::collections::btree_map::Iter<'a, String, MaterialEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
