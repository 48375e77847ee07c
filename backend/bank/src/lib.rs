//! # Bank
//!
//! Shared recipe model and the catalog the service answers from.
//!
//! The catalog is loaded once at startup, either the built-in six recipes or a
//! JSON file holding an array of recipes, and is never mutated afterwards.
//!
//! ## File Format
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "title": "Chicken Parmesan",
//!     "ingredients": "Chicken, Tomato Sauce, Cheese, Pasta",
//!     "instructions": "Bread chicken, fry, top with sauce and cheese, bake.",
//!     "image_url": "https://placehold.co/600x400"
//!   }
//! ]
//! ```
//! `image_url` may be omitted.
use std::{fs, io, path::Path};

use thiserror::Error;

pub mod recipes;

use recipes::Catalog;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Recipe ids must be positive")]
    ZeroId,

    #[error("Duplicate recipe id {0}")]
    DuplicateId(u32),

    #[error("Recipe {0} has an empty title")]
    EmptyTitle(u32),

    #[error("Failed to read catalog: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed catalog: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn get_catalog() -> Catalog {
    Catalog::builtin()
}

pub fn read_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let data = fs::read_to_string(path)?;

    Catalog::from_json(&data)
}

pub fn write_catalog(path: impl AsRef<Path>, catalog: &Catalog) -> Result<(), CatalogError> {
    fs::write(path, serde_json::to_string_pretty(catalog)?)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{env, process};

    use super::*;

    #[test]
    fn test_write_then_read() {
        let path = env::temp_dir().join(format!("bank-{}.json", process::id()));

        write_catalog(&path, &get_catalog()).unwrap();
        let catalog = read_catalog(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(catalog, get_catalog());
    }

    #[test]
    fn test_read_missing_file() {
        let path = env::temp_dir().join("bank-does-not-exist.json");

        assert!(matches!(read_catalog(path), Err(CatalogError::Io(_))));
    }
}
