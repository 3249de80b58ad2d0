use std::process;

use clap::Parser;
use recipebook::{Catalog, Error, Recipe};
use tracing::instrument;

use super::{
    terminal::{tier_label, Colorize},
    Session,
};

#[derive(Debug, Parser)]
#[command(about = "Display detailed information about a recipe")]
pub struct Show {
    /// The id of the recipe to display
    #[arg(required_unless_present = "position", conflicts_with = "position")]
    id: Option<String>,

    /// Look the recipe up by its position in the catalog instead
    #[arg(long, short)]
    position: Option<usize>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl Show {
    #[instrument(level = "debug", skip(self, session))]
    pub fn run(self, session: &Session) -> anyhow::Result<()> {
        let catalog = &session.catalog;

        let recipe = match self.lookup(catalog) {
            Ok(recipe) => recipe,
            Err(error @ (Error::NotFound(_) | Error::IndexOutOfRange { .. })) => {
                eprintln!("{}", error.to_string().warning());
                process::exit(1);
            }
            Err(error) => return Err(error.into()),
        };

        let position = catalog.position(recipe.id()).unwrap_or_default();

        match self.output {
            OutputFormat::Pretty => Self::output_pretty(recipe, position),
            OutputFormat::Json => Self::output_json(recipe, position)?,
        }

        Ok(())
    }

    /// Finds the requested recipe, by position when one was given and by id
    /// otherwise.
    fn lookup<'a>(&self, catalog: &'a Catalog) -> Result<&'a Recipe, Error> {
        match (&self.id, self.position) {
            (_, Some(position)) => catalog.get(position),
            (Some(id), None) => catalog.get_by_id(id),
            (None, None) => Err(Error::InvalidArgument(
                "either an id or a position is required".to_string(),
            )),
        }
    }

    fn output_pretty(recipe: &Recipe, position: usize) {
        println!("# {}", recipe.title());
        println!();

        println!("{}", "Metadata".dim());
        println!("  Id:        {}", recipe.id());
        println!("  Tier:      {}", tier_label(recipe.tier()));
        println!("  Position:  {position}");

        println!("\n{}", "Ingredients".dim());
        if recipe.ingredients().is_empty() {
            println!("  (none)");
        }
        for ingredient in recipe.ingredients() {
            println!("  • {ingredient}");
        }
    }

    fn output_json(recipe: &Recipe, position: usize) -> anyhow::Result<()> {
        use serde_json::json;

        let output = json!({
            "id": recipe.id(),
            "title": recipe.title(),
            "tier": recipe.tier(),
            "position": position,
            "ingredients": recipe.ingredients(),
        });

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}
