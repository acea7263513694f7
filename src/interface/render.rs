use crate::models::MaterialMap;
use crate::store::RecipeCatalog;

/// Display a material map as an aligned table.
pub fn display_materials(map: &MaterialMap, title: &str) {
    if map.is_empty() {
        println!("No materials required for {}.", title);
        return;
    }

    println!();
    println!("=== {} ===", title);
    println!();

    let max_name_len = map.iter().map(|(id, _)| id.len()).max().unwrap_or(10);

    for (id, entry) in map.iter() {
        println!(
            "  {:<width$}  {:>12.2} {}",
            id,
            entry.quantity,
            entry.unit,
            width = max_name_len
        );
    }

    println!();
    println!("Total ingredients: {}", map.len());
    println!();
}

/// Display every product and recipe in the catalog.
pub fn display_catalog(catalog: &RecipeCatalog) {
    println!();
    println!("=== Products ({}) ===", catalog.products().len());
    for product in catalog.products() {
        let dough = product.dough_id.as_deref().unwrap_or("-");
        println!(
            "  {} - {} | dough: {} | fillings: {} | decorations: {}",
            product.id,
            product.name,
            dough,
            product.fillings.len(),
            product.decorations.len()
        );
    }

    println!();
    println!("=== Dough recipes ({}) ===", catalog.doughs().len());
    for dough in catalog.doughs() {
        println!(
            "  {} - {} | yield: {} | pre-ferments: {}",
            dough.id,
            dough.name,
            format_yield(dough.batch_yield),
            dough.pre_ferments.len()
        );
    }

    println!();
    println!("=== Filling recipes ({}) ===", catalog.fillings().len());
    for filling in catalog.fillings() {
        println!(
            "  {} - {} | yield: {} | sub-fillings: {}",
            filling.id,
            filling.name,
            format_yield(filling.batch_yield),
            filling.sub_fillings.len()
        );
    }
    println!();
}

/// Tell the user an identifier did not resolve, with close matches if any.
pub fn display_suggestions(kind: &str, identifier: &str, suggestions: &[String]) {
    eprintln!("No {} found for '{}'", kind, identifier);
    if !suggestions.is_empty() {
        eprintln!("Did you mean: {}?", suggestions.join(", "));
    }
}

fn format_yield(batch_yield: Option<f64>) -> String {
    match batch_yield {
        Some(y) => format!("{}", y),
        None => "(none)".to_string(),
    }
}
