use serde::{Deserialize, Serialize};

use super::numeric::{is_positive, lenient_f64, lenient_id, lenient_key};

/// A raw ingredient line inside a recipe or a product's decorations.
///
/// `quantity` is per batch of the declaring recipe, not an absolute amount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientUsage {
    #[serde(default)]
    pub ingredient_id: String,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub quantity: Option<f64>,

    #[serde(default)]
    pub unit: String,
}

impl IngredientUsage {
    pub fn new(ingredient_id: &str, quantity: f64, unit: &str) -> Self {
        Self {
            ingredient_id: ingredient_id.to_string(),
            quantity: Some(quantity),
            unit: unit.to_string(),
        }
    }
}

/// A dough consumed by another dough (poolish, levain, biga...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreFermentRef {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub quantity: Option<f64>,
}

impl PreFermentRef {
    pub fn new(id: &str, quantity: f64) -> Self {
        Self {
            id: Some(id.to_string()),
            quantity: Some(quantity),
        }
    }
}

/// A filling consumed by another filling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubFillingRef {
    #[serde(default, deserialize_with = "lenient_id")]
    pub recipe_id: Option<String>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub quantity: Option<f64>,
}

impl SubFillingRef {
    pub fn new(recipe_id: &str, quantity: f64) -> Self {
        Self {
            recipe_id: Some(recipe_id.to_string()),
            quantity: Some(quantity),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoughRecipe {
    #[serde(alias = "_id", default, deserialize_with = "lenient_key")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Output weight of one batch at the listed quantities.
    #[serde(rename = "yield", default, deserialize_with = "lenient_f64")]
    pub batch_yield: Option<f64>,

    #[serde(default)]
    pub ingredients: Vec<IngredientUsage>,

    #[serde(default)]
    pub pre_ferments: Vec<PreFermentRef>,
}

impl DoughRecipe {
    /// The yield if it can be used as a scaling denominator.
    #[inline]
    pub fn usable_yield(&self) -> Option<f64> {
        self.batch_yield.filter(|y| is_positive(Some(*y)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillingRecipe {
    #[serde(alias = "_id", default, deserialize_with = "lenient_key")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "yield", default, deserialize_with = "lenient_f64")]
    pub batch_yield: Option<f64>,

    #[serde(default)]
    pub ingredients: Vec<IngredientUsage>,

    #[serde(default)]
    pub sub_fillings: Vec<SubFillingRef>,
}

impl FillingRecipe {
    #[inline]
    pub fn usable_yield(&self) -> Option<f64> {
        self.batch_yield.filter(|y| is_positive(Some(*y)))
    }
}
