mod material;
mod numeric;
mod product;
mod recipe;

pub use material::{MaterialEntry, MaterialMap};
pub use numeric::is_positive;
pub use product::{FillingUsage, Product};
pub use recipe::{DoughRecipe, FillingRecipe, IngredientUsage, PreFermentRef, SubFillingRef};
