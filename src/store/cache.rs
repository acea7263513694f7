use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use tracing::{info, warn};

use crate::error::Result;
use crate::store::{load_catalog, RecipeCatalog, RecipeSource};

/// Loads the catalog from a source at most once and shares it afterwards.
///
/// Once a load succeeds the snapshot is immutable and reads take no lock.
/// Callers racing on the first load serialize on `loading`, so only one load
/// runs. A failed load is reported to the call that triggered it and leaves
/// an empty catalog behind; later calls see "nothing found" until
/// [`RecipeCache::reload`] succeeds.
pub struct RecipeCache<S> {
    source: S,
    ready: OnceLock<Arc<RecipeCatalog>>,
    /// Held while loading. Holds the empty fallback after a failed load.
    loading: Mutex<Option<Arc<RecipeCatalog>>>,
}

impl<S: RecipeSource> RecipeCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            ready: OnceLock::new(),
            loading: Mutex::new(None),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// The cached catalog, loading it on first use.
    pub fn catalog(&self) -> Result<Arc<RecipeCatalog>> {
        if let Some(catalog) = self.ready.get() {
            return Ok(Arc::clone(catalog));
        }

        let mut fallback = self.lock();
        if let Some(catalog) = self.ready.get() {
            return Ok(Arc::clone(catalog));
        }
        if let Some(empty) = fallback.as_ref() {
            return Ok(Arc::clone(empty));
        }
        self.load_into(&mut fallback)
    }

    /// Retry a failed load. After a successful load this returns the
    /// existing snapshot without touching the source.
    pub fn reload(&self) -> Result<Arc<RecipeCatalog>> {
        if let Some(catalog) = self.ready.get() {
            return Ok(Arc::clone(catalog));
        }

        let mut fallback = self.lock();
        if let Some(catalog) = self.ready.get() {
            return Ok(Arc::clone(catalog));
        }
        self.load_into(&mut fallback)
    }

    /// True once a load has been attempted, successful or not.
    pub fn is_loaded(&self) -> bool {
        self.ready.get().is_some() || self.lock().is_some()
    }

    fn load_into(&self, fallback: &mut Option<Arc<RecipeCatalog>>) -> Result<Arc<RecipeCatalog>> {
        match load_catalog(&self.source) {
            Ok(catalog) => {
                info!(
                    products = catalog.products().len(),
                    doughs = catalog.doughs().len(),
                    fillings = catalog.fillings().len(),
                    "recipe catalog loaded"
                );
                *fallback = None;
                Ok(Arc::clone(self.ready.get_or_init(|| Arc::new(catalog))))
            }
            Err(e) => {
                warn!(error = %e, "recipe catalog load failed; continuing with empty data");
                *fallback = Some(Arc::new(RecipeCatalog::default()));
                Err(e)
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<RecipeCatalog>>> {
        // The guarded value is replaced wholesale, never left half-written.
        self.loading.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BomError;
    use crate::models::{DoughRecipe, FillingRecipe, Product};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts loads and fails while `failing` is set.
    struct CountingSource {
        loads: AtomicUsize,
        failing: std::sync::atomic::AtomicBool,
    }

    impl CountingSource {
        fn new(failing: bool) -> Self {
            Self {
                loads: AtomicUsize::new(0),
                failing: std::sync::atomic::AtomicBool::new(failing),
            }
        }
    }

    impl RecipeSource for CountingSource {
        fn load_products(&self) -> Result<Vec<Product>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            if self.failing.load(Ordering::SeqCst) {
                return Err(BomError::DataUnavailable("store offline".to_string()));
            }
            Ok(vec![Product {
                id: "P1".to_string(),
                ..Default::default()
            }])
        }

        fn load_dough_recipes(&self) -> Result<Vec<DoughRecipe>> {
            Ok(vec![])
        }

        fn load_filling_recipes(&self) -> Result<Vec<FillingRecipe>> {
            Ok(vec![])
        }
    }

    #[test]
    fn test_loads_once() {
        let cache = RecipeCache::new(CountingSource::new(false));
        assert!(!cache.is_loaded());

        let first = cache.catalog().unwrap();
        let second = cache.catalog().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.source().loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failure_surfaces_once_then_degrades() {
        let cache = RecipeCache::new(CountingSource::new(true));

        assert!(cache.catalog().is_err());
        let after = cache.catalog().unwrap();
        assert!(after.is_empty());
        assert_eq!(cache.source().loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_reload_recovers() {
        let cache = RecipeCache::new(CountingSource::new(true));
        assert!(cache.catalog().is_err());

        cache.source().failing.store(false, Ordering::SeqCst);
        let catalog = cache.reload().unwrap();
        assert!(catalog.find_product("P1").is_some());
        assert!(cache.catalog().unwrap().find_product("P1").is_some());
    }

    #[test]
    fn test_reload_keeps_loaded_snapshot() {
        let cache = RecipeCache::new(CountingSource::new(false));
        let first = cache.catalog().unwrap();

        let reloaded = cache.reload().unwrap();

        assert!(Arc::ptr_eq(&first, &reloaded));
        assert_eq!(cache.source().loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_first_use_loads_once() {
        let cache = Arc::new(RecipeCache::new(CountingSource::new(false)));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.catalog().unwrap().products().len())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
        assert_eq!(cache.source().loads.load(Ordering::SeqCst), 1);
    }
}
