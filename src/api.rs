use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::AppConfig;
use crate::error::Error;

/// One entry of a search result page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image_url: String,
}

/// Raw recipe fields as delivered by the source, before ingredient parsing
#[derive(Debug, Clone)]
pub struct RecipeData {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image_url: String,
    pub source_url: String,
    pub ingredients: Vec<String>,
}

/// The remote recipe source: keyword search and recipe-by-id lookup
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, Error>;
    async fn recipe(&self, id: &str) -> Result<RecipeData, Error>;
}

/// HTTP client against the recipe source API
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(concat!("mealplan/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RecipeSource for ApiClient {
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, Error> {
        let url = format!("{}/search", self.base_url);
        let response = self.client.get(&url).query(&[("q", query)]).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
            });
        }

        let body: SearchResponse = response.json().await?;
        debug!("search '{}' returned {} recipes", query, body.count);

        Ok(body.recipes.into_iter().map(Into::into).collect())
    }

    async fn recipe(&self, id: &str) -> Result<RecipeData, Error> {
        let url = format!("{}/get", self.base_url);
        let response = self.client.get(&url).query(&[("rId", id)]).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::not_found("recipe", id));
        }
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
            });
        }

        let body: RecipeEnvelope = response.json().await?;
        debug!("fetched recipe {}: {}", id, body.recipe.title);

        Ok(body.recipe.into())
    }
}

// Wire format of the recipe source API

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    count: u32,
    #[serde(default)]
    recipes: Vec<RecipeDto>,
}

#[derive(Debug, Deserialize)]
struct RecipeEnvelope {
    recipe: RecipeDto,
}

#[derive(Debug, Deserialize)]
struct RecipeDto {
    recipe_id: String,
    title: String,
    publisher: String,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    source_url: String,
    #[serde(default)]
    ingredients: Vec<String>,
}

impl From<RecipeDto> for RecipeSummary {
    fn from(dto: RecipeDto) -> Self {
        RecipeSummary {
            id: dto.recipe_id,
            title: dto.title,
            author: dto.publisher,
            image_url: dto.image_url,
        }
    }
}

impl From<RecipeDto> for RecipeData {
    fn from(dto: RecipeDto) -> Self {
        RecipeData {
            id: dto.recipe_id,
            title: dto.title,
            author: dto.publisher,
            image_url: dto.image_url,
            source_url: dto.source_url,
            ingredients: dto.ingredients,
        }
    }
}
