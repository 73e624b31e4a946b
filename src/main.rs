use std::io::{self, BufRead, Write};

use log::error;
use mealplan::{
    dispatch, format_count, ApiClient, AppConfig, AppState, Command, JsonFileStore, LikedRecipe,
    Likes, Outcome, ParsedIngredient, RecipeView, ResultsPage, ShoppingItem,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::load()?;
    let client = ApiClient::new(&config);
    let likes = Likes::new(Box::new(JsonFileStore::new(config.likes_path())))?;
    let mut state = AppState::new(config, likes);

    println!("mealplan {}", env!("CARGO_PKG_VERSION"));
    print_usage();

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if matches!(input, "quit" | "exit" | "q") {
            break;
        }

        let Some(command) = Command::parse(input) else {
            print_usage();
            continue;
        };

        match dispatch(&mut state, &client, command).await {
            Ok(outcome) => render(&outcome),
            Err(err) => {
                error!("{err}");
                println!("Something went wrong, please try again.");
            }
        }
    }

    Ok(())
}

fn print_usage() {
    println!("commands:");
    println!("  search <terms>     find recipes");
    println!("  page <n>           show result page n");
    println!("  open <id>          show a recipe");
    println!("  + / -              adjust servings");
    println!("  like               toggle like on the open recipe");
    println!("  shop               add its ingredients to the shopping list");
    println!("  list               show the shopping list");
    println!("  rm <n>             remove list item n");
    println!("  count <n> <qty>    change quantity of list item n");
    println!("  check <n>          check off list item n");
    println!("  likes              show liked recipes");
    println!("  quit               exit");
}

fn render(outcome: &Outcome) {
    match outcome {
        Outcome::Results(page) => render_results(page),
        Outcome::Recipe(view) => render_recipe(view),
        Outcome::List(items) => render_list(items),
        Outcome::Likes(likes) => render_likes(likes),
        Outcome::LikeToggled { liked, num_likes } => {
            let verb = if *liked { "Liked" } else { "Unliked" };
            println!("{verb}. You have {num_likes} liked recipe(s).");
        }
        Outcome::Message(text) => println!("{text}"),
    }
}

fn render_results(page: &ResultsPage) {
    if page.entries.is_empty() {
        println!("No results for '{}'.", page.query);
        return;
    }
    println!(
        "Results for '{}' (page {}/{}):",
        page.query, page.page, page.total_pages
    );
    for entry in &page.entries {
        println!("  [{}] {} - {}", entry.id, entry.title, entry.author);
    }
}

fn render_recipe(view: &RecipeView) {
    let heart = if view.liked { " <3" } else { "" };
    println!("{} by {}{heart}", view.title, view.author);
    println!(
        "about {} min, serves {}",
        view.time_minutes, view.servings
    );
    for ingredient in &view.ingredients {
        println!("  - {}", ingredient_line(ingredient));
    }
    if !view.source_url.is_empty() {
        println!("source: {}", view.source_url);
    }
}

fn render_list(items: &[ShoppingItem]) {
    if items.is_empty() {
        println!("The shopping list is empty.");
        return;
    }
    println!("Shopping list:");
    for (index, item) in items.iter().enumerate() {
        let mark = if item.checked { "x" } else { " " };
        let mut line = String::new();
        if let Some(count) = item.count {
            line.push_str(&format_count(count));
            line.push(' ');
        }
        if !item.unit.is_empty() {
            line.push_str(&item.unit);
            line.push(' ');
        }
        line.push_str(&item.name);
        println!("  {:>2}. [{mark}] {line}", index + 1);
    }
}

fn render_likes(likes: &[LikedRecipe]) {
    if likes.is_empty() {
        println!("No liked recipes yet.");
        return;
    }
    println!("Liked recipes:");
    for like in likes {
        println!("  [{}] {} - {}", like.id, like.title, like.author);
    }
}

fn ingredient_line(ingredient: &ParsedIngredient) -> String {
    let mut line = String::new();
    if let Some(count) = ingredient.count {
        line.push_str(&format_count(count));
        line.push(' ');
    }
    if !ingredient.unit.is_empty() {
        line.push_str(&ingredient.unit);
        line.push(' ');
    }
    line.push_str(&ingredient.name);
    line
}
