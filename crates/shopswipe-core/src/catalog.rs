//! Fixed, ordered product list supplied at startup.

use std::collections::HashSet;

use crate::error::CatalogError;
use crate::product::{Product, ProductId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId { id: product.id });
            }
        }
        Ok(Self { products })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|product| product.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Built-in fashion catalog used by the demo app.
    pub fn demo() -> Self {
        let products = vec![
            Product::new(1, "classic denim jacket", "Levi's")
                .with_image("https://images.shopswipe.dev/products/1.jpg")
                .with_pricing(2999, 4999, 40),
            Product::new(2, "running sneakers", "Nike")
                .with_image("https://images.shopswipe.dev/products/2.jpg")
                .with_pricing(6495, 7995, 19),
            Product::new(3, "linen summer shirt", "H&M")
                .with_image("https://images.shopswipe.dev/products/3.jpg")
                .with_pricing(1299, 1299, 0),
            Product::new(4, "leather crossbody bag", "Hidesign")
                .with_image("https://images.shopswipe.dev/products/4.jpg")
                .with_pricing(3596, 4495, 20),
            Product::new(5, "aviator sunglasses", "Ray-Ban")
                .with_image("https://images.shopswipe.dev/products/5.jpg")
                .with_pricing(7490, 8990, 17),
        ];
        Self { products }
    }
}

impl FromIterator<Product> for Catalog {
    /// Collects products, keeping the first of any duplicated id.
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let products = iter
            .into_iter()
            .filter(|product| seen.insert(product.id))
            .collect();
        Self { products }
    }
}
