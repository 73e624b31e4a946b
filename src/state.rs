use crate::config::AppConfig;
use crate::models::likes::Likes;
use crate::models::list::ShoppingList;
use crate::models::recipe::Recipe;
use crate::models::search::Search;

/// Everything the controllers operate on. Constructed once at startup and
/// passed by mutable reference; there is no global state.
pub struct AppState {
    pub config: AppConfig,
    pub search: Option<Search>,
    pub recipe: Option<Recipe>,
    pub list: ShoppingList,
    pub likes: Likes,
}

impl AppState {
    pub fn new(config: AppConfig, likes: Likes) -> Self {
        Self {
            config,
            search: None,
            recipe: None,
            list: ShoppingList::new(),
            likes,
        }
    }
}
