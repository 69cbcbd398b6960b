pub mod loader;

use std::path::Path;

use anyhow::Result;
use log::info;

use crate::models::property::Property;

/// Sample listings bundled with the service, loaded once at start-up.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    pub fn new(properties: Vec<Property>) -> Self {
        Catalog { properties }
    }

    pub fn load(dir: &Path) -> Result<Self> {
        let properties = loader::load_dir(dir)?;
        info!(
            "Loaded {} catalog properties from {}",
            properties.len(),
            dir.display()
        );
        Ok(Catalog::new(properties))
    }

    pub fn all(&self) -> &[Property] {
        &self.properties
    }

    pub fn get(&self, id: u32) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Case-insensitive substring match on title and location. A blank query
    /// matches everything.
    pub fn search(&self, query: &str) -> Vec<&Property> {
        let query = query.trim().to_lowercase();
        self.properties
            .iter()
            .filter(|p| {
                query.is_empty()
                    || format!("{} {}", p.title, p.location)
                        .to_lowercase()
                        .contains(&query)
            })
            .collect()
    }
}
