mod cache;
mod catalog;
mod persistence;

pub use cache::RecipeCache;
pub use catalog::RecipeCatalog;
pub use persistence::{
    load_catalog, InMemorySource, JsonDirSource, RecipeSource, DOUGH_RECIPES_FILE,
    FILLING_RECIPES_FILE, PRODUCTS_FILE,
};
