use dialoguer::{Input, Select};
use strsim::jaro_winkler;

use crate::error::{BomError, Result};
use crate::store::RecipeCatalog;

/// Minimum similarity for a "did you mean" candidate.
const SUGGESTION_THRESHOLD: f64 = 0.7;
const MAX_SUGGESTIONS: usize = 5;

/// Candidates that look like `input`, best match first.
pub fn suggest<'a, I>(candidates: I, input: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = input.to_lowercase();
    let mut scored: Vec<(&str, f64)> = candidates
        .into_iter()
        .filter(|c| !c.is_empty())
        .map(|c| (c, jaro_winkler(&c.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.dedup_by(|a, b| a.0 == b.0);

    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(c, _)| c.to_string())
        .collect()
}

/// Let the user pick a product. Returns its id, or `None` on cancel.
pub fn prompt_product(catalog: &RecipeCatalog) -> Result<Option<String>> {
    let products = catalog.products();
    if products.is_empty() {
        return Ok(None);
    }

    let mut options: Vec<String> = products
        .iter()
        .map(|p| {
            if p.name.is_empty() {
                p.id.clone()
            } else {
                format!("{} ({})", p.name, p.id)
            }
        })
        .collect();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt("Which product?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(products.get(selection).map(|p| {
        if p.id.is_empty() {
            p.name.clone()
        } else {
            p.id.clone()
        }
    }))
}

/// Prompt for how many units to produce.
pub fn prompt_count() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("How many units?")
        .default("1".to_string())
        .interact_text()?;

    let count: f64 = input
        .trim()
        .parse()
        .map_err(|_| BomError::InvalidInput("Invalid number".to_string()))?;

    if !(count.is_finite() && count > 0.0) {
        return Err(BomError::InvalidInput(
            "Count must be a positive number".to_string(),
        ));
    }

    Ok(count)
}
