use tracing::{debug, warn};

use crate::bom::aggregate::add_material;
use crate::bom::constants::MAX_NESTING_DEPTH;
use crate::models::{is_positive, IngredientUsage, MaterialMap};
use crate::store::RecipeCatalog;

/// Add every ingredient of `usages`, scaled by `scale`.
fn add_scaled(map: &mut MaterialMap, usages: &[IngredientUsage], scale: f64) {
    for usage in usages {
        add_material(
            map,
            &usage.ingredient_id,
            usage.quantity.map(|q| q * scale),
            &usage.unit,
        );
    }
}

/// Expand one dough recipe, scaled by `scale` batches, into `map`.
///
/// A missing recipe contributes nothing. Pre-ferments that are missing or
/// have no usable yield are skipped; their siblings still contribute. A
/// pre-ferment already being expanded further up the chain is a cycle and
/// is skipped as well.
pub fn collect_dough(catalog: &RecipeCatalog, dough_id: &str, scale: f64, map: &mut MaterialMap) {
    collect_dough_at(catalog, dough_id, scale, map, &mut Vec::new());
}

fn collect_dough_at<'a>(
    catalog: &'a RecipeCatalog,
    dough_id: &str,
    scale: f64,
    map: &mut MaterialMap,
    path: &mut Vec<&'a str>,
) {
    let Some(recipe) = catalog.find_dough(dough_id) else {
        debug!(dough_id, "dough recipe not found");
        return;
    };
    if path.len() > MAX_NESTING_DEPTH {
        warn!(dough_id, depth = path.len(), "pre-ferment chain too deep");
        return;
    }

    add_scaled(map, &recipe.ingredients, scale);

    path.push(recipe.id.as_str());
    for pre_ferment in &recipe.pre_ferments {
        let Some(child_id) = pre_ferment.id.as_deref() else {
            continue;
        };
        if path.contains(&child_id) {
            warn!(dough_id, child_id, "skipping pre-ferment: cyclic reference");
            continue;
        }
        let Some(child_yield) = catalog.find_dough(child_id).and_then(|c| c.usable_yield()) else {
            debug!(dough_id, child_id, "skipping pre-ferment: missing or no usable yield");
            continue;
        };
        let Some(quantity) = pre_ferment.quantity.filter(|q| is_positive(Some(*q))) else {
            continue;
        };

        let child_scale = (quantity / child_yield) * scale;
        collect_dough_at(catalog, child_id, child_scale, map, path);
    }
    path.pop();
}

/// Expand one filling recipe, scaled by `scale` batches, into `map`.
///
/// Same skipping rules as [`collect_dough`], applied to sub-fillings.
pub fn collect_filling(
    catalog: &RecipeCatalog,
    filling_id: &str,
    scale: f64,
    map: &mut MaterialMap,
) {
    collect_filling_at(catalog, filling_id, scale, map, &mut Vec::new());
}

fn collect_filling_at<'a>(
    catalog: &'a RecipeCatalog,
    filling_id: &str,
    scale: f64,
    map: &mut MaterialMap,
    path: &mut Vec<&'a str>,
) {
    let Some(recipe) = catalog.find_filling(filling_id) else {
        debug!(filling_id, "filling recipe not found");
        return;
    };
    if path.len() > MAX_NESTING_DEPTH {
        warn!(filling_id, depth = path.len(), "sub-filling chain too deep");
        return;
    }

    add_scaled(map, &recipe.ingredients, scale);

    path.push(recipe.id.as_str());
    for sub in &recipe.sub_fillings {
        let Some(child_id) = sub.recipe_id.as_deref() else {
            continue;
        };
        if path.contains(&child_id) {
            warn!(filling_id, child_id, "skipping sub-filling: cyclic reference");
            continue;
        }
        let Some(child_yield) = catalog.find_filling(child_id).and_then(|c| c.usable_yield())
        else {
            debug!(filling_id, child_id, "skipping sub-filling: missing or no usable yield");
            continue;
        };
        let Some(quantity) = sub.quantity.filter(|q| is_positive(Some(*q))) else {
            continue;
        };

        let child_scale = (quantity / child_yield) * scale;
        collect_filling_at(catalog, child_id, child_scale, map, path);
    }
    path.pop();
}

/// Raw materials for one unit of the product named or identified by `identifier`.
///
/// Unknown products yield an empty map.
pub fn materials_for_product(catalog: &RecipeCatalog, identifier: &str) -> MaterialMap {
    let mut map = MaterialMap::new();
    let Some(product) = catalog.find_product(identifier) else {
        debug!(identifier, "product not found");
        return map;
    };

    if let (Some(dough_id), Some(weight)) = (product.dough_id.as_deref(), product.dough_weight) {
        if is_positive(Some(weight)) {
            match catalog.find_dough(dough_id).and_then(|d| d.usable_yield()) {
                Some(dough_yield) => collect_dough(catalog, dough_id, weight / dough_yield, &mut map),
                None => debug!(product = %product.id, dough_id, "skipping dough: missing or no usable yield"),
            }
        }
    }

    for usage in &product.fillings {
        let (Some(filling_id), Some(quantity)) = (usage.filling_id.as_deref(), usage.quantity) else {
            continue;
        };
        if !is_positive(Some(quantity)) {
            continue;
        }
        match catalog.find_filling(filling_id).and_then(|f| f.usable_yield()) {
            Some(filling_yield) => {
                collect_filling(catalog, filling_id, quantity / filling_yield, &mut map)
            }
            None => debug!(product = %product.id, filling_id, "skipping filling: missing or no usable yield"),
        }
    }

    // Decorations are leaf ingredients at their literal quantity.
    add_scaled(&mut map, &product.decorations, 1.0);

    map
}

/// Raw materials for `required_weight` of the dough recipe `identifier`.
///
/// Returns an empty map for an unknown recipe, an unusable yield, or a
/// weight that is not a positive number.
pub fn materials_for_dough(
    catalog: &RecipeCatalog,
    identifier: &str,
    required_weight: f64,
) -> MaterialMap {
    let mut map = MaterialMap::new();
    if !is_positive(Some(required_weight)) {
        return map;
    }
    if let Some(dough_yield) = catalog.find_dough(identifier).and_then(|d| d.usable_yield()) {
        collect_dough(catalog, identifier, required_weight / dough_yield, &mut map);
    }
    map
}

/// Raw materials for `required_weight` of the filling recipe `identifier`.
pub fn materials_for_filling(
    catalog: &RecipeCatalog,
    identifier: &str,
    required_weight: f64,
) -> MaterialMap {
    let mut map = MaterialMap::new();
    if !is_positive(Some(required_weight)) {
        return map;
    }
    if let Some(filling_yield) = catalog.find_filling(identifier).and_then(|f| f.usable_yield()) {
        collect_filling(catalog, identifier, required_weight / filling_yield, &mut map);
    }
    map
}
