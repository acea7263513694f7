use std::sync::Arc;

use crate::bom::explode;
use crate::error::Result;
use crate::models::MaterialMap;
use crate::store::{RecipeCache, RecipeCatalog, RecipeSource};

/// Material calculator over a lazily loaded recipe store.
///
/// The only error any query can return is the failure of the initial load.
/// Everything else (unknown ids, bad yields, bad line items) shows up as
/// missing contributions in the returned map.
pub struct BomEngine<S> {
    cache: RecipeCache<S>,
}

impl<S: RecipeSource> BomEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            cache: RecipeCache::new(source),
        }
    }

    pub fn materials_for_product(&self, identifier: &str) -> Result<MaterialMap> {
        let catalog = self.cache.catalog()?;
        Ok(explode::materials_for_product(&catalog, identifier))
    }

    pub fn materials_for_dough(&self, identifier: &str, required_weight: f64) -> Result<MaterialMap> {
        let catalog = self.cache.catalog()?;
        Ok(explode::materials_for_dough(&catalog, identifier, required_weight))
    }

    pub fn materials_for_filling(
        &self,
        identifier: &str,
        required_weight: f64,
    ) -> Result<MaterialMap> {
        let catalog = self.cache.catalog()?;
        Ok(explode::materials_for_filling(&catalog, identifier, required_weight))
    }

    /// The current recipe snapshot.
    pub fn catalog(&self) -> Result<Arc<RecipeCatalog>> {
        self.cache.catalog()
    }

    /// Retry loading the recipe store after a failed load.
    ///
    /// A snapshot that already loaded successfully is kept as is.
    pub fn reload(&self) -> Result<()> {
        self.cache.reload().map(|_| ())
    }
}
