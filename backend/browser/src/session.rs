//! # Session
//!
//! Everything the browser shows is derived from this state: the last list
//! received, whether a fetch is outstanding, the last error and the recipe
//! opened in the detail view.
//!
//! ## Stale Responses
//! Searches are not cancelled. Each fetch is issued with a [`Ticket`] carrying
//! a counter that increases with every [`Session::begin`]; [`Session::finish`]
//! drops any response whose ticket is not the latest one handed out, so a slow
//! early search can never overwrite the result of a newer one.
use bank::recipes::Recipe;

use crate::api::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Stale,
}

/// What the main area shows when no recipe is open.
#[derive(Debug, PartialEq, Eq)]
pub enum Listing<'a> {
    Loading,
    Failed(&'a str),
    Recipes(&'a [Recipe]),
    NoMatches(&'a str),
    NothingAvailable,
}

#[derive(Debug, Default)]
pub struct Session {
    recipes: Vec<Recipe>,
    search_term: String,
    loading: bool,
    error: Option<String>,
    selected: Option<Recipe>,
    latest: u64,
}

impl Session {
    pub fn begin(&mut self, search: &str) -> Ticket {
        self.latest += 1;
        self.loading = true;
        self.error = None;
        self.search_term = search.to_string();

        Ticket(self.latest)
    }

    pub fn finish(&mut self, ticket: Ticket, result: Result<Vec<Recipe>, FetchError>) -> Outcome {
        if ticket.0 != self.latest {
            return Outcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(recipes) => self.recipes = recipes,
            Err(e) => {
                self.error = Some(format!("Failed to load recipes. {e}"));
                self.recipes.clear();
            }
        }

        Outcome::Applied
    }

    /// Opens a recipe from the current list. The selection outlives later
    /// searches until [`Session::close`].
    pub fn select(&mut self, id: u32) -> Option<&Recipe> {
        let recipe = self.recipes.iter().find(|recipe| recipe.id == id)?.clone();

        Some(self.selected.insert(recipe))
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Recipe> {
        self.selected.as_ref()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn listing(&self) -> Listing<'_> {
        if self.loading {
            return Listing::Loading;
        }
        if let Some(error) = &self.error {
            return Listing::Failed(error.as_str());
        }

        match (self.recipes.is_empty(), self.search_term.is_empty()) {
            (false, _) => Listing::Recipes(&self.recipes),
            (true, false) => Listing::NoMatches(self.search_term.as_str()),
            (true, true) => Listing::NothingAvailable,
        }
    }
}
