//! # Search
//!
//! Case-insensitive substring filter over the catalog.
//!
//! A recipe matches when the lowercased term appears, contiguously, in either
//! its lowercased title or its lowercased ingredient string. There is no
//! tokenizing, no typo tolerance and no ranking: the result is the catalog
//! with non-matching entries removed, in catalog order.
//!
//! A missing, empty or whitespace-only term means no filter. A non-blank term
//! is used as given, surrounding whitespace included.
use bank::recipes::{Catalog, Recipe};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        raw.filter(|term| !term.trim().is_empty())
            .map(|term| Self(term.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        recipe.title.to_lowercase().contains(&self.0)
            || recipe.ingredients.to_lowercase().contains(&self.0)
    }
}

pub fn query<'a>(catalog: &'a Catalog, raw: Option<&str>) -> Vec<&'a Recipe> {
    match SearchTerm::parse(raw) {
        Some(term) => catalog.iter().filter(|recipe| term.matches(recipe)).collect(),
        None => catalog.iter().collect(),
    }
}
