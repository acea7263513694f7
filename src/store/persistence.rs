use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{BomError, Result};
use crate::models::{DoughRecipe, FillingRecipe, Product};
use crate::store::RecipeCatalog;

pub const PRODUCTS_FILE: &str = "products.json";
pub const DOUGH_RECIPES_FILE: &str = "dough_recipes.json";
pub const FILLING_RECIPES_FILE: &str = "filling_recipes.json";

/// Supplier of the three recipe collections.
///
/// Each call returns the full collection in source order.
pub trait RecipeSource {
    fn load_products(&self) -> Result<Vec<Product>>;
    fn load_dough_recipes(&self) -> Result<Vec<DoughRecipe>>;
    fn load_filling_recipes(&self) -> Result<Vec<FillingRecipe>>;
}

/// Load all three collections and index them. Fails if any one fails.
pub fn load_catalog<S: RecipeSource + ?Sized>(source: &S) -> Result<RecipeCatalog> {
    let products = source.load_products()?;
    let doughs = source.load_dough_recipes()?;
    let fillings = source.load_filling_recipes()?;
    Ok(RecipeCatalog::new(products, doughs, fillings))
}

/// Recipe collections stored as JSON arrays in one directory.
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T: DeserializeOwned>(&self, file: &'static str) -> Result<Vec<T>> {
        let path = self.dir.join(file);
        debug!(path = %path.display(), "reading recipe collection");
        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|e| BomError::json(file, e))
    }
}

impl RecipeSource for JsonDirSource {
    fn load_products(&self) -> Result<Vec<Product>> {
        self.read(PRODUCTS_FILE)
    }

    fn load_dough_recipes(&self) -> Result<Vec<DoughRecipe>> {
        self.read(DOUGH_RECIPES_FILE)
    }

    fn load_filling_recipes(&self) -> Result<Vec<FillingRecipe>> {
        self.read(FILLING_RECIPES_FILE)
    }
}

/// Collections already held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pub products: Vec<Product>,
    pub doughs: Vec<DoughRecipe>,
    pub fillings: Vec<FillingRecipe>,
}

impl InMemorySource {
    pub fn new(
        products: Vec<Product>,
        doughs: Vec<DoughRecipe>,
        fillings: Vec<FillingRecipe>,
    ) -> Self {
        Self {
            products,
            doughs,
            fillings,
        }
    }
}

impl RecipeSource for InMemorySource {
    fn load_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn load_dough_recipes(&self) -> Result<Vec<DoughRecipe>> {
        Ok(self.doughs.clone())
    }

    fn load_filling_recipes(&self) -> Result<Vec<FillingRecipe>> {
        Ok(self.fillings.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, file: &str, json: &str) {
        fs::write(dir.path().join(file), json).unwrap();
    }

    #[test]
    fn test_load_catalog_from_dir() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            PRODUCTS_FILE,
            r#"[{"_id": "P1", "name": "Baguette", "doughId": "D1", "doughWeight": 350}]"#,
        );
        write(
            &dir,
            DOUGH_RECIPES_FILE,
            r#"[{"id": "D1", "name": "Lean", "yield": 1000, "ingredients": []}]"#,
        );
        write(&dir, FILLING_RECIPES_FILE, "[]");

        let catalog = load_catalog(&JsonDirSource::new(dir.path())).unwrap();
        assert_eq!(catalog.products().len(), 1);
        assert!(catalog.find_product("Baguette").is_some());
        assert!(catalog.find_dough("D1").is_some());
        assert!(catalog.fillings().is_empty());
    }

    #[test]
    fn test_numeric_ids_resolve_through_references() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            PRODUCTS_FILE,
            r#"[{"_id": 7, "name": "Rye", "doughId": 42, "doughWeight": 500,
                 "fillings": [{"fillingId": 9, "quantity": 50}]}]"#,
        );
        write(
            &dir,
            DOUGH_RECIPES_FILE,
            r#"[{"_id": 42, "yield": 1000, "preFerments": [{"id": 41, "quantity": 100}]},
                {"_id": 41, "yield": 100}]"#,
        );
        write(&dir, FILLING_RECIPES_FILE, r#"[{"id": 9, "yield": 100, "subFillings": []}]"#);

        let catalog = load_catalog(&JsonDirSource::new(dir.path())).unwrap();

        let product = catalog.find_product("7").unwrap();
        let dough = catalog.find_dough(product.dough_id.as_deref().unwrap()).unwrap();
        assert_eq!(dough.id, "42");
        let pre_ferment = dough.pre_ferments[0].id.as_deref().unwrap();
        assert!(catalog.find_dough(pre_ferment).is_some());
        assert!(catalog.find_filling("9").is_some());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, PRODUCTS_FILE, "[]");

        let err = load_catalog(&JsonDirSource::new(dir.path())).unwrap_err();
        assert!(matches!(err, BomError::Io(_)));
    }

    #[test]
    fn test_malformed_json_names_collection() {
        let dir = TempDir::new().unwrap();
        write(&dir, PRODUCTS_FILE, "[]");
        write(&dir, DOUGH_RECIPES_FILE, "{not json");
        write(&dir, FILLING_RECIPES_FILE, "[]");

        let err = load_catalog(&JsonDirSource::new(dir.path())).unwrap_err();
        match err {
            BomError::Json { collection, .. } => assert_eq!(collection, DOUGH_RECIPES_FILE),
            other => panic!("unexpected error: {other}"),
        }
    }
}
