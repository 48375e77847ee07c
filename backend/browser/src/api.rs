use bank::recipes::Recipe;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "http://localhost:3001/api/v1/recipes";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct RecipeApi {
    client: Client,
    url: String,
}

impl RecipeApi {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// An empty `search` asks for the whole catalog.
    pub async fn fetch(&self, search: &str) -> Result<Vec<Recipe>, FetchError> {
        let mut request = self.client.get(&self.url);
        if !search.is_empty() {
            request = request.query(&[("search", search)]);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("GET {} returned {status}", self.url);

        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}
