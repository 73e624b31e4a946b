pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod ingredient;
pub mod models;
pub mod state;
pub mod storage;

pub use api::{ApiClient, RecipeData, RecipeSource, RecipeSummary};
pub use config::AppConfig;
pub use controller::{dispatch, Command, Outcome, RecipeView, ResultsPage};
pub use error::Error;
pub use ingredient::{format_count, parse_ingredient, ParsedIngredient};
pub use models::likes::{LikedRecipe, Likes};
pub use models::list::{ItemId, ShoppingItem, ShoppingList};
pub use models::recipe::{Adjust, Recipe};
pub use models::search::Search;
pub use state::AppState;
pub use storage::{JsonFileStore, LikesStore, MemoryStore};
