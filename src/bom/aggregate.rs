use std::collections::btree_map::Entry;

use crate::models::{is_positive, MaterialEntry, MaterialMap};

/// Merge one ingredient requirement into `map`.
///
/// Empty ids and quantities that are absent, non-finite or not positive are
/// dropped without error. Units are carried as given and never reconciled:
/// the first usage of an ingredient fixes the unit reported for it.
pub fn add_material(map: &mut MaterialMap, ingredient_id: &str, quantity: Option<f64>, unit: &str) {
    let quantity = match quantity {
        Some(q) if !ingredient_id.is_empty() && is_positive(quantity) => q,
        _ => return,
    };

    match map.entries.entry(ingredient_id.to_string()) {
        Entry::Occupied(mut slot) => slot.get_mut().quantity += quantity,
        Entry::Vacant(slot) => {
            slot.insert(MaterialEntry {
                name: ingredient_id.to_string(),
                quantity,
                unit: unit.to_string(),
            });
        }
    }
}
