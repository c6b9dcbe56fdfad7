// src/config/catalog.rs
//! Site lookup tables: court name → court code, building label → usage code.
//!
//! The tables ship inside the binary (`catalog.json`) and are parsed once, on
//! first access. They are read-only for the life of the process.

use std::sync::LazyLock;

use serde::Deserialize;

const CATALOG_JSON: &str = include_str!("catalog.json");

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::parse(CATALOG_JSON).expect("embedded catalog.json is valid")
});

/// The process-wide lookup tables.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Court {
    pub name: String,
    pub code: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct BuildingType {
    pub label: String,
    /// Small-category code, 11 chars. Its 7- and 9-char prefixes are the
    /// large and middle categories.
    pub code: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Catalog {
    pub courts: Vec<Court>,
    pub building_types: Vec<BuildingType>,
}

impl Catalog {
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn court(&self, name: &str) -> Option<&Court> {
        self.courts.iter().find(|c| c.name == name)
    }

    pub fn building_type(&self, label: &str) -> Option<&BuildingType> {
        self.building_types.iter().find(|b| b.label == label)
    }

    pub fn building_label_for_code(&self, code: &str) -> Option<&str> {
        self.building_types
            .iter()
            .find(|b| b.code == code)
            .map(|b| b.label.as_str())
    }

    /// Court names in catalog order (UI lists keep this order).
    pub fn court_names(&self) -> impl Iterator<Item = &str> {
        self.courts.iter().map(|c| c.name.as_str())
    }

    pub fn building_labels(&self) -> impl Iterator<Item = &str> {
        self.building_types.iter().map(|b| b.label.as_str())
    }
}
