// src/lib.rs

pub mod core;
pub mod feedback;

pub use crate::core::catalog::{CatalogPaths, MediaCatalog};
pub use crate::core::engine::{TranslateError, TranslationEngine};
pub use crate::core::types::{SignAsset, TargetSystem};
