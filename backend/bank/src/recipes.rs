use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// A single catalog entry, serialized exactly as it goes over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub title: String,
    /// Comma-separated, never parsed server side.
    pub ingredients: String,
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Recipe {
    /// Ingredient names split on commas, trimmed, blanks dropped.
    pub fn ingredient_list(&self) -> Vec<&str> {
        self.ingredients
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    }
}

/// Read-only, validated list of recipes in definition order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(recipes.len());

        for recipe in &recipes {
            if recipe.id == 0 {
                return Err(CatalogError::ZeroId);
            }
            if !seen.insert(recipe.id) {
                return Err(CatalogError::DuplicateId(recipe.id));
            }
            if recipe.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(recipe.id));
            }
        }

        Ok(Self { recipes })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;

        Self::new(recipes)
    }

    /// The six recipes the service ships with.
    pub fn builtin() -> Self {
        Self {
            recipes: vec![
                recipe(
                    1,
                    "Chicken Parmesan",
                    "Chicken, Tomato Sauce, Cheese, Pasta",
                    "Bread chicken, fry, top with sauce and cheese, bake. Serve over pasta.",
                    "https://placehold.co/600x400/f4a261/ffffff?text=Chicken+Parm",
                ),
                recipe(
                    2,
                    "Vegetable Stir-Fry",
                    "Broccoli, Carrots, Bell Peppers, Soy Sauce, Rice",
                    "Chop veggies, stir-fry in wok, add soy sauce. Serve over rice.",
                    "https://placehold.co/600x400/2a9d8f/ffffff?text=Veggie+Stir-Fry",
                ),
                recipe(
                    3,
                    "Spaghetti Carbonara",
                    "Spaghetti, Eggs, Pancetta, Parmesan Cheese, Black Pepper",
                    "Cook spaghetti. Fry pancetta. Whisk eggs and cheese. Combine all.",
                    "https://placehold.co/600x400/e9c46a/ffffff?text=Carbonara",
                ),
                recipe(
                    4,
                    "Chocolate Chip Cookies",
                    "Flour, Sugar, Butter, Eggs, Chocolate Chips",
                    "Cream butter and sugar, add eggs, mix dry ingredients, add chips. Bake.",
                    "https://placehold.co/600x400/e76f51/ffffff?text=Cookies",
                ),
                recipe(
                    5,
                    "Classic Beef Tacos",
                    "Ground Beef, Taco Shells, Lettuce, Tomato, Cheese, Taco Seasoning",
                    "Brown beef, drain fat, add seasoning. Assemble tacos.",
                    "https://placehold.co/600x400/a8dadc/000000?text=Beef+Tacos",
                ),
                recipe(
                    6,
                    "Lentil Soup",
                    "Lentils, Carrots, Celery, Onion, Vegetable Broth",
                    "Sauté vegetables, add lentils and broth, simmer until tender.",
                    "https://placehold.co/600x400/457b9d/ffffff?text=Lentil+Soup",
                ),
            ],
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn recipe(id: u32, title: &str, ingredients: &str, instructions: &str, image_url: &str) -> Recipe {
    Recipe {
        id,
        title: title.to_string(),
        ingredients: ingredients.to_string(),
        instructions: instructions.to_string(),
        image_url: Some(image_url.to_string()),
    }
}
