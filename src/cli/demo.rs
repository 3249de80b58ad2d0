use clap::Parser;
use recipebook::{Catalog, Recipe, Tier};
use tracing::instrument;

use super::{terminal::Colorize, Session};

const LOOKUP_ID: &str = "cake_001";
const LOOKUP_POSITION: usize = 2;
const REMOVE_ID: &str = "stew_001";

/// Walk through the catalog: list, filter by tier, look up, remove.
#[derive(Debug, Parser)]
#[command(about = "Walk through the catalog operations on the loaded recipes")]
pub struct Demo {}

impl Demo {
    #[instrument(level = "debug", skip(self, session))]
    pub fn run(self, session: Session) -> anyhow::Result<()> {
        let Session {
            mut catalog,
            config,
        } = session;

        println!("{}", "All recipes:".success());
        for recipe in &catalog {
            println!("{recipe}");
            if config.show_ingredients {
                println!("  Ingredients: {}", ingredient_list(recipe));
            }
        }

        println!("\n{}", "Recipes Advanced and above:".success());
        for recipe in catalog.enumerate_by_tier(Tier::Advanced) {
            println!("{recipe}");
        }

        println!();
        match catalog.get_by_id(LOOKUP_ID) {
            Ok(recipe) => println!("Access by ID '{LOOKUP_ID}': {recipe}"),
            Err(error) => println!("Access by ID '{LOOKUP_ID}': {}", error.to_string().warning()),
        }
        match catalog.get(LOOKUP_POSITION) {
            Ok(recipe) => println!("Access by index {LOOKUP_POSITION}: {recipe}"),
            Err(error) => println!(
                "Access by index {LOOKUP_POSITION}: {}",
                error.to_string().warning()
            ),
        }

        if !catalog.remove_by_id(REMOVE_ID) {
            println!("{}", format!("No recipe '{REMOVE_ID}' to remove").dim());
        }
        println!("\nAfter removal, recipe count: {}", catalog.len());

        print_remaining(&catalog);
        Ok(())
    }
}

fn ingredient_list(recipe: &Recipe) -> String {
    recipe
        .ingredients()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_remaining(catalog: &Catalog) {
    println!("\n{}", "Remaining recipes:".success());
    for recipe in catalog {
        println!("- {recipe}");
    }
}
