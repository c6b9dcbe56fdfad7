// src/config/mod.rs
pub mod consts;
pub mod catalog;
pub mod settings;
pub mod options;
pub mod state;

pub use catalog::{catalog, BuildingType, Catalog, Court};
pub use settings::Settings;
