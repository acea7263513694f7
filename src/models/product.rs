use serde::{Deserialize, Serialize};

use super::numeric::{lenient_f64, lenient_id, lenient_key};
use super::recipe::IngredientUsage;

/// A filling used on a product; `quantity` is the absolute weight per unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillingUsage {
    #[serde(default, deserialize_with = "lenient_id")]
    pub filling_id: Option<String>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub quantity: Option<f64>,
}

impl FillingUsage {
    pub fn new(filling_id: &str, quantity: f64) -> Self {
        Self {
            filling_id: Some(filling_id.to_string()),
            quantity: Some(quantity),
        }
    }
}

/// A bread type as sold.
///
/// `dough_weight` is the absolute dough weight for one unit of product.
/// Decorations are leaf ingredients added at their literal quantity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id", default, deserialize_with = "lenient_key")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_id")]
    pub dough_id: Option<String>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub dough_weight: Option<f64>,

    #[serde(default)]
    pub fillings: Vec<FillingUsage>,

    #[serde(default)]
    pub decorations: Vec<IngredientUsage>,
}
