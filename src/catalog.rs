use serde::Deserialize;

use crate::models::{Category, Product};

static EMBEDDED_CATALOG: &str = include_str!("../data/products.json");

/// Read-only product dataset. Loaded once at startup and never mutated;
/// the embedded copy ships with the binary, `CATALOG_PATH` can point at
/// an alternative file.
#[derive(Debug, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        Ok(catalog)
    }

    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub async fn load(path: Option<&str>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let json = tokio::fs::read_to_string(path).await?;
                Self::from_json(&json)
            }
            None => Self::embedded(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Category filter plus case-insensitive substring match on the
    /// product name. `all` (or no category) matches everything.
    pub fn search(&self, category: Option<&str>, q: Option<&str>) -> Vec<&Product> {
        let q = q.map(str::to_lowercase);
        self.products
            .iter()
            .filter(|p| match category {
                Some("all") | None => true,
                Some(c) => p.category == c,
            })
            .filter(|p| match &q {
                Some(q) => p.name.to_lowercase().contains(q),
                None => true,
            })
            .collect()
    }
}
