use bank::recipes::{Catalog, Recipe};
use proptest::prelude::*;
use proptest::test_runner::Config;
use recipes::search::query;

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(("[A-Za-z][A-Za-z ]{0,15}", "[A-Za-z ,]{0,30}"), 0..12).prop_map(
        |entries| {
            let recipes = entries
                .into_iter()
                .enumerate()
                .map(|(index, (title, ingredients))| Recipe {
                    id: index as u32 + 1,
                    title,
                    ingredients,
                    instructions: String::new(),
                    image_url: None,
                })
                .collect();

            Catalog::new(recipes).expect("generated catalog")
        },
    )
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn results_are_an_ordered_subset(catalog in catalog_strategy(), term in "[A-Za-z ]{0,4}") {
        let results = query(&catalog, Some(term.as_str()));
        let mut remaining = catalog.iter();

        for recipe in results {
            prop_assert!(remaining.any(|candidate| candidate == recipe));
        }
    }

    #[test]
    fn inclusion_is_title_or_ingredient_containment(
        catalog in catalog_strategy(),
        term in "[A-Za-z]{1,3}",
    ) {
        let results = query(&catalog, Some(term.as_str()));
        let needle = term.to_lowercase();

        for recipe in &catalog {
            let expected = recipe.title.to_lowercase().contains(&needle)
                || recipe.ingredients.to_lowercase().contains(&needle);
            prop_assert_eq!(results.contains(&recipe), expected);
        }
    }

    #[test]
    fn absent_and_blank_return_everything(catalog in catalog_strategy(), blank in " {0,3}") {
        let all: Vec<&Recipe> = catalog.iter().collect();

        prop_assert_eq!(query(&catalog, None), all.clone());
        prop_assert_eq!(query(&catalog, Some(blank.as_str())), all);
    }

    #[test]
    fn case_does_not_matter(catalog in catalog_strategy(), term in "[A-Za-z]{1,3}") {
        prop_assert_eq!(
            query(&catalog, Some(term.to_uppercase().as_str())),
            query(&catalog, Some(term.to_lowercase().as_str()))
        );
    }

    #[test]
    fn repeated_queries_agree(catalog in catalog_strategy(), term in "[a-z]{0,3}") {
        prop_assert_eq!(query(&catalog, Some(term.as_str())), query(&catalog, Some(term.as_str())));
    }
}
