use bank::recipes::Recipe;

use crate::session::{Listing, Session};

pub const NO_IMAGE: &str = "https://placehold.co/600x400/cccccc/ffffff?text=No+Image";

const RULE: &str = "----------------------------------------";

pub fn image(recipe: &Recipe) -> &str {
    recipe
        .image_url
        .as_deref()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(NO_IMAGE)
}

pub fn card(recipe: &Recipe) -> String {
    format!(
        "[{}] {}\n    {}\n    {}",
        recipe.id,
        recipe.title,
        recipe.ingredients,
        image(recipe)
    )
}

pub fn detail(recipe: &Recipe) -> String {
    let ingredients = recipe
        .ingredient_list()
        .iter()
        .map(|ingredient| format!("  - {ingredient}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{RULE}\n{}\n{RULE}\nImage: {}\n\nIngredients:\n{ingredients}\n\nInstructions:\n{}\n{RULE}\n(close to go back)",
        recipe.title,
        image(recipe),
        recipe.instructions
    )
}

/// The whole screen: status line, then either the open recipe or the listing.
pub fn render(session: &Session) -> String {
    let listing = session.listing();

    let status = match &listing {
        Listing::Loading => Some("Searching...".to_string()),
        Listing::Failed(message) => Some(format!("Error: {message}")),
        _ => None,
    };

    let body = match (session.selected(), listing) {
        (Some(recipe), _) => Some(detail(recipe)),
        (None, Listing::Recipes(recipes)) => Some(
            recipes
                .iter()
                .map(card)
                .collect::<Vec<_>>()
                .join("\n\n"),
        ),
        (None, Listing::NoMatches(term)) => Some(format!(
            "No recipes found matching \"{term}\". Try a different search!"
        )),
        (None, Listing::NothingAvailable) => Some("No recipes available.".to_string()),
        (None, Listing::Loading | Listing::Failed(_)) => None,
    };

    [status, body].into_iter().flatten().collect::<Vec<_>>().join("\n\n")
}
