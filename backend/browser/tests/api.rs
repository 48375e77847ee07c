use std::net::SocketAddr;

use axum::{Json, Router, extract::RawQuery, routing::get};
use bank::recipes::{Catalog, Recipe};
use browser::api::{FetchError, RecipeApi};
use recipes::{app, config::Config, state::AppState};
use tokio::net::TcpListener;

async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

async fn recipes_server() -> SocketAddr {
    serve(app(AppState::new(Config::default(), Catalog::builtin()))).await
}

/// Answers with one recipe whose title is the raw query string it received.
async fn echo_query(RawQuery(query): RawQuery) -> Json<Vec<Recipe>> {
    Json(vec![Recipe {
        id: 1,
        title: query.unwrap_or_else(|| "<none>".to_string()),
        ingredients: String::new(),
        instructions: String::new(),
        image_url: None,
    }])
}

async fn ids(api: &RecipeApi, search: &str) -> Vec<u32> {
    api.fetch(search)
        .await
        .unwrap()
        .iter()
        .map(|recipe| recipe.id)
        .collect()
}

#[tokio::test]
async fn test_fetch_from_server() {
    let addr = recipes_server().await;
    let api = RecipeApi::new(format!("http://{addr}/api/v1/recipes"));

    assert_eq!(ids(&api, "").await, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(ids(&api, "cheese").await, vec![1, 3, 5]);
    assert_eq!(ids(&api, "chicken parm").await, vec![1]);
    assert_eq!(ids(&api, "Soy Sauce").await, vec![2]);
    assert!(ids(&api, "pizza").await.is_empty());
}

#[tokio::test]
async fn test_fetch_decodes_full_records() {
    let addr = recipes_server().await;
    let api = RecipeApi::new(format!("http://{addr}/api/v1/recipes"));

    let recipes = api.fetch("lentil").await.unwrap();

    assert_eq!(recipes, vec![Catalog::builtin().get(6).unwrap().clone()]);
}

#[tokio::test]
async fn test_non_success_status() {
    let addr = recipes_server().await;
    let api = RecipeApi::new(format!("http://{addr}/api/v1/missing"));

    assert!(matches!(api.fetch("").await, Err(FetchError::Status(404))));
}

#[tokio::test]
async fn test_search_parameter_only_when_non_empty() {
    let addr = serve(Router::new().route("/echo", get(echo_query))).await;
    let api = RecipeApi::new(format!("http://{addr}/echo"));

    let title = |recipes: Vec<Recipe>| recipes[0].title.clone();

    assert_eq!(title(api.fetch("").await.unwrap()), "<none>");
    assert_eq!(title(api.fetch("chicken").await.unwrap()), "search=chicken");
    assert_eq!(
        title(api.fetch("mac & cheese").await.unwrap()),
        "search=mac+%26+cheese"
    );
}
