use std::collections::HashMap;

use crate::models::{DoughRecipe, FillingRecipe, Product};

/// Immutable snapshot of the recipe store, indexed for O(1) lookups.
///
/// Duplicate keys resolve to the first record in source order, the same
/// record a front-to-back scan would find.
#[derive(Debug, Default)]
pub struct RecipeCatalog {
    products: Vec<Product>,
    doughs: Vec<DoughRecipe>,
    fillings: Vec<FillingRecipe>,
    product_by_id: HashMap<String, usize>,
    product_by_name: HashMap<String, usize>,
    dough_by_id: HashMap<String, usize>,
    filling_by_id: HashMap<String, usize>,
}

fn index_by<T>(items: &[T], key: impl Fn(&T) -> &str) -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(items.len());
    for (pos, item) in items.iter().enumerate() {
        let k = key(item);
        if !k.is_empty() {
            index.entry(k.to_string()).or_insert(pos);
        }
    }
    index
}

impl RecipeCatalog {
    pub fn new(
        products: Vec<Product>,
        doughs: Vec<DoughRecipe>,
        fillings: Vec<FillingRecipe>,
    ) -> Self {
        Self {
            product_by_id: index_by(&products, |p| p.id.as_str()),
            product_by_name: index_by(&products, |p| p.name.as_str()),
            dough_by_id: index_by(&doughs, |d| d.id.as_str()),
            filling_by_id: index_by(&fillings, |f| f.id.as_str()),
            products,
            doughs,
            fillings,
        }
    }

    /// Resolve a product by id, falling back to its name.
    pub fn find_product(&self, identifier: &str) -> Option<&Product> {
        self.product_by_id
            .get(identifier)
            .or_else(|| self.product_by_name.get(identifier))
            .map(|&pos| &self.products[pos])
    }

    pub fn find_dough(&self, id: &str) -> Option<&DoughRecipe> {
        self.dough_by_id.get(id).map(|&pos| &self.doughs[pos])
    }

    pub fn find_filling(&self, id: &str) -> Option<&FillingRecipe> {
        self.filling_by_id.get(id).map(|&pos| &self.fillings[pos])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn doughs(&self) -> &[DoughRecipe] {
        &self.doughs
    }

    pub fn fillings(&self) -> &[FillingRecipe] {
        &self.fillings
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.doughs.is_empty() && self.fillings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn dough(id: &str, name: &str) -> DoughRecipe {
        DoughRecipe {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_find_product_by_id_or_name() {
        let catalog = RecipeCatalog::new(vec![product("P1", "Baguette")], vec![], vec![]);
        assert_eq!(catalog.find_product("P1").unwrap().name, "Baguette");
        assert_eq!(catalog.find_product("Baguette").unwrap().id, "P1");
        assert!(catalog.find_product("Ciabatta").is_none());
        assert!(catalog.find_product("").is_none());
    }

    #[test]
    fn test_id_takes_precedence_over_name() {
        // Product "B" is literally named "A"; looking up "A" must hit the id.
        let catalog = RecipeCatalog::new(
            vec![product("B", "A"), product("A", "Rye")],
            vec![],
            vec![],
        );
        assert_eq!(catalog.find_product("A").unwrap().name, "Rye");
    }

    #[test]
    fn test_dough_lookup_ignores_name() {
        let catalog = RecipeCatalog::new(vec![], vec![dough("D1", "Poolish")], vec![]);
        assert!(catalog.find_dough("D1").is_some());
        assert!(catalog.find_dough("Poolish").is_none());
    }

    #[test]
    fn test_first_duplicate_wins() {
        let catalog = RecipeCatalog::new(
            vec![],
            vec![dough("D1", "first"), dough("D1", "second")],
            vec![],
        );
        assert_eq!(catalog.find_dough("D1").unwrap().name, "first");
    }

    #[test]
    fn test_default_is_empty() {
        let catalog = RecipeCatalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.find_filling("F1").is_none());
    }
}
