use log::debug;

use crate::api::{RecipeSource, RecipeSummary};
use crate::error::Error;
use crate::ingredient::ParsedIngredient;
use crate::models::likes::LikedRecipe;
use crate::models::list::{ItemId, ShoppingItem};
use crate::models::recipe::{Adjust, Recipe};
use crate::models::search::Search;
use crate::state::AppState;

/// A user action, the typed replacement for DOM event delegation. Item
/// indices are 1-based, matching what the view displays.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search { query: String },
    Page { number: usize },
    Open { id: String },
    IncreaseServings,
    DecreaseServings,
    AddToList,
    DeleteItem { index: usize },
    UpdateCount { index: usize, count: f64 },
    ToggleChecked { index: usize },
    ToggleLike,
    ShowList,
    ShowLikes,
}

impl Command {
    /// Parse one line of user input. `None` means unrecognized input.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let head = tokens.next()?;
        let rest: Vec<&str> = tokens.collect();

        match (head.to_lowercase().as_str(), rest.as_slice()) {
            ("search", terms) if !terms.is_empty() => Some(Command::Search {
                query: terms.join(" "),
            }),
            ("page", [n]) => n.parse().ok().map(|number| Command::Page { number }),
            ("open", [id]) => Some(Command::Open { id: (*id).to_string() }),
            ("+", []) => Some(Command::IncreaseServings),
            ("-", []) => Some(Command::DecreaseServings),
            ("shop", []) => Some(Command::AddToList),
            ("rm", [n]) => parse_index(n).map(|index| Command::DeleteItem { index }),
            ("count", [n, value]) => {
                let index = parse_index(n)?;
                let count = value.parse().ok()?;
                Some(Command::UpdateCount { index, count })
            }
            ("check", [n]) => parse_index(n).map(|index| Command::ToggleChecked { index }),
            ("like", []) => Some(Command::ToggleLike),
            ("list", []) => Some(Command::ShowList),
            ("likes", []) => Some(Command::ShowLikes),
            _ => None,
        }
    }
}

fn parse_index(token: &str) -> Option<usize> {
    token.parse::<usize>().ok().filter(|n| *n >= 1)
}

/// One page of search results, ready for rendering
#[derive(Debug, Clone)]
pub struct ResultsPage {
    pub query: String,
    pub page: usize,
    pub total_pages: usize,
    pub entries: Vec<RecipeSummary>,
}

/// A recipe snapshot, ready for rendering
#[derive(Debug, Clone)]
pub struct RecipeView {
    pub id: String,
    pub title: String,
    pub author: String,
    pub source_url: String,
    pub servings: u32,
    pub time_minutes: u32,
    pub ingredients: Vec<ParsedIngredient>,
    pub liked: bool,
}

/// What the view renderer receives after a command ran
#[derive(Debug, Clone)]
pub enum Outcome {
    Results(ResultsPage),
    Recipe(RecipeView),
    List(Vec<ShoppingItem>),
    Likes(Vec<LikedRecipe>),
    LikeToggled { liked: bool, num_likes: usize },
    Message(&'static str),
}

/// Run one command against the application state, mirroring the original
/// controller flows: search, recipe, shopping list, likes. Fetch errors
/// propagate to the caller, which reports them to the user.
pub async fn dispatch(
    state: &mut AppState,
    source: &dyn RecipeSource,
    command: Command,
) -> Result<Outcome, Error> {
    debug!("dispatching {:?}", command);
    match command {
        Command::Search { query } => {
            let mut search = Search::new(query);
            search.get_results(source).await?;
            state.search = Some(search);
            Ok(results_page(state, 1))
        }

        Command::Page { number } => {
            if state.search.is_none() {
                return Ok(Outcome::Message("search for something first"));
            }
            Ok(results_page(state, number))
        }

        Command::Open { id } => {
            let mut recipe = Recipe::fetch(source, &id).await?;
            recipe.parse_ingredients();
            recipe.calc_time();
            recipe.calc_servings();
            state.recipe = Some(recipe);
            Ok(recipe_view(state))
        }

        Command::IncreaseServings => adjust_servings(state, Adjust::Increase),
        Command::DecreaseServings => adjust_servings(state, Adjust::Decrease),

        Command::AddToList => {
            let Some(recipe) = &state.recipe else {
                return Ok(Outcome::Message("open a recipe first"));
            };
            for ingredient in recipe.ingredients() {
                state.list.add_item(
                    ingredient.count,
                    ingredient.unit.as_str(),
                    ingredient.name.as_str(),
                );
            }
            Ok(Outcome::List(state.list.items().to_vec()))
        }

        Command::DeleteItem { index } => {
            let id = item_id_at(state, index)?;
            state.list.delete_item(id)?;
            Ok(Outcome::List(state.list.items().to_vec()))
        }

        Command::UpdateCount { index, count } => {
            let id = item_id_at(state, index)?;
            state.list.update_count(id, count)?;
            Ok(Outcome::List(state.list.items().to_vec()))
        }

        Command::ToggleChecked { index } => {
            let id = item_id_at(state, index)?;
            state.list.toggle_checked(id)?;
            Ok(Outcome::List(state.list.items().to_vec()))
        }

        Command::ToggleLike => {
            let Some(recipe) = &state.recipe else {
                return Ok(Outcome::Message("open a recipe first"));
            };
            let id = recipe.id.clone();
            let liked = if state.likes.is_liked(&id) {
                state.likes.delete_like(&id)?;
                false
            } else {
                state.likes.add_like(LikedRecipe {
                    id,
                    title: recipe.title.clone(),
                    author: recipe.author.clone(),
                    image_url: recipe.image_url.clone(),
                })?;
                true
            };
            Ok(Outcome::LikeToggled {
                liked,
                num_likes: state.likes.num_likes(),
            })
        }

        Command::ShowList => Ok(Outcome::List(state.list.items().to_vec())),

        Command::ShowLikes => Ok(Outcome::Likes(state.likes.iter().cloned().collect())),
    }
}

fn adjust_servings(state: &mut AppState, adjust: Adjust) -> Result<Outcome, Error> {
    let Some(recipe) = &mut state.recipe else {
        return Ok(Outcome::Message("open a recipe first"));
    };
    recipe.update_servings(adjust);
    Ok(recipe_view(state))
}

fn results_page(state: &AppState, page: usize) -> Outcome {
    let per_page = state.config.results_per_page;
    // Callers check for an active search before coming here.
    let Some(search) = &state.search else {
        return Outcome::Message("search for something first");
    };
    Outcome::Results(ResultsPage {
        query: search.query.clone(),
        page,
        total_pages: search.total_pages(per_page),
        entries: search.page(page, per_page).to_vec(),
    })
}

fn recipe_view(state: &AppState) -> Outcome {
    let Some(recipe) = &state.recipe else {
        return Outcome::Message("open a recipe first");
    };
    Outcome::Recipe(RecipeView {
        id: recipe.id.clone(),
        title: recipe.title.clone(),
        author: recipe.author.clone(),
        source_url: recipe.source_url.clone(),
        servings: recipe.servings,
        time_minutes: recipe.time_minutes,
        ingredients: recipe.ingredients().to_vec(),
        liked: state.likes.is_liked(&recipe.id),
    })
}

fn item_id_at(state: &AppState, index: usize) -> Result<ItemId, Error> {
    // Indices are 1-based; 0 never names an item.
    index
        .checked_sub(1)
        .and_then(|i| state.list.get(i))
        .map(|item| item.id)
        .ok_or_else(|| Error::not_found("shopping item", index.to_string()))
}
