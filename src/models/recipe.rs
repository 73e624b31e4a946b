use crate::api::{RecipeData, RecipeSource};
use crate::error::Error;
use crate::ingredient::{parse_ingredient, ParsedIngredient};

/// Default serving count when the source does not provide one
const DEFAULT_SERVINGS: u32 = 4;
/// Cook-time heuristic: 15 minutes per started group of 3 ingredients
const MINUTES_PER_GROUP: u32 = 15;
const INGREDIENTS_PER_GROUP: u32 = 3;

/// Direction of a servings adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjust {
    Increase,
    Decrease,
}

/// A fetched recipe with parsed, rescalable ingredients
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image_url: String,
    pub source_url: String,
    pub servings: u32,
    pub time_minutes: u32,
    raw_ingredients: Vec<String>,
    ingredients: Vec<ParsedIngredient>,
}

impl Recipe {
    /// Retrieve a recipe by id from the source. Errors propagate untouched;
    /// no retry.
    pub async fn fetch(source: &dyn RecipeSource, id: &str) -> Result<Self, Error> {
        let data = source.recipe(id).await?;
        Ok(Self::from_data(data))
    }

    pub fn from_data(data: RecipeData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            author: data.author,
            image_url: data.image_url,
            source_url: data.source_url,
            servings: DEFAULT_SERVINGS,
            time_minutes: 0,
            raw_ingredients: data.ingredients,
            ingredients: Vec::new(),
        }
    }

    /// Run every raw ingredient line through the normalizer. The raw lines
    /// are drained, so a second call is a no-op rather than a re-parse of
    /// already-structured data.
    pub fn parse_ingredients(&mut self) {
        let raw = std::mem::take(&mut self.raw_ingredients);
        self.ingredients
            .extend(raw.iter().map(|line| parse_ingredient(line)));
    }

    pub fn ingredients(&self) -> &[ParsedIngredient] {
        &self.ingredients
    }

    fn ingredient_count(&self) -> u32 {
        (self.ingredients.len() + self.raw_ingredients.len()) as u32
    }

    /// Display heuristic for cook time based on ingredient count.
    pub fn calc_time(&mut self) {
        let groups = self.ingredient_count().div_ceil(INGREDIENTS_PER_GROUP);
        self.time_minutes = groups * MINUTES_PER_GROUP;
    }

    /// Display heuristic: the source omits servings, assume a standard batch.
    pub fn calc_servings(&mut self) {
        self.servings = DEFAULT_SERVINGS;
    }

    /// Step servings up or down by one and rescale every ingredient count
    /// proportionally. Decreasing below 1 is refused.
    pub fn update_servings(&mut self, adjust: Adjust) {
        let new_servings = match adjust {
            Adjust::Increase => self.servings + 1,
            Adjust::Decrease => {
                if self.servings <= 1 {
                    return;
                }
                self.servings - 1
            }
        };

        let factor = f64::from(new_servings) / f64::from(self.servings);
        for ingredient in &mut self.ingredients {
            if let Some(count) = ingredient.count.as_mut() {
                *count *= factor;
            }
        }
        self.servings = new_servings;
    }
}
