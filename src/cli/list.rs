use anyhow::Context;
use clap::{Parser, ValueEnum};
use recipebook::{Catalog, Ingredient, Recipe, Tier};
use regex::Regex;
use serde::Serialize;
use tracing::instrument;

use super::{
    terminal::{tier_label, Colorize},
    Session,
};

/// Command arguments for `recipes list`.
#[derive(Debug, Parser)]
#[command(about = "List recipes at or above a tier, in catalog order")]
pub struct List {
    /// Only show recipes of this tier or stronger (defaults to the configured
    /// threshold).
    #[arg(long, short = 't', value_name = "TIER")]
    min_tier: Option<Tier>,

    /// Case-insensitive substring match against the title.
    #[arg(long, conflicts_with = "regex")]
    contains: Option<String>,

    /// Regular expression match against the title.
    #[arg(long)]
    regex: Option<String>,

    /// Output format (default: table).
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,

    /// Hide ingredient lines, overriding the configuration.
    #[arg(long)]
    no_ingredients: bool,
}

/// Supported output formats.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// A listed recipe with its current position.
#[derive(Debug, Serialize)]
struct Row<'a> {
    position: usize,
    id: &'a str,
    title: &'a str,
    tier: Tier,
    ingredients: &'a [Ingredient],
}

impl<'a> Row<'a> {
    fn new(position: usize, recipe: &'a Recipe) -> Self {
        Self {
            position,
            id: recipe.id(),
            title: recipe.title(),
            tier: recipe.tier(),
            ingredients: recipe.ingredients(),
        }
    }
}

/// How recipe titles are matched.
#[derive(Debug)]
enum TitleFilter {
    Any,
    Contains(String),
    Regex(Regex),
}

impl TitleFilter {
    fn matches(&self, title: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Contains(needle) => title.to_lowercase().contains(needle),
            Self::Regex(regex) => regex.is_match(title),
        }
    }
}

impl List {
    #[instrument(level = "debug", skip(self, session))]
    pub fn run(self, session: &Session) -> anyhow::Result<()> {
        let min_tier = self
            .min_tier
            .unwrap_or_else(|| session.config.default_min_tier());
        let filter = self.title_filter()?;
        let rows = collect_rows(&session.catalog, min_tier, &filter);
        let show_ingredients = session.config.show_ingredients && !self.no_ingredients;

        match self.output {
            OutputFormat::Table => render_table(&rows, min_tier, show_ingredients),
            OutputFormat::Json => render_json(&rows)?,
        }

        Ok(())
    }

    fn title_filter(&self) -> anyhow::Result<TitleFilter> {
        if let Some(pattern) = &self.regex {
            let regex =
                Regex::new(pattern).with_context(|| format!("invalid regex: {pattern}"))?;
            return Ok(TitleFilter::Regex(regex));
        }

        Ok(self
            .contains
            .as_deref()
            .map_or(TitleFilter::Any, |needle| {
                TitleFilter::Contains(needle.to_lowercase())
            }))
    }
}

fn collect_rows<'a>(catalog: &'a Catalog, min_tier: Tier, filter: &TitleFilter) -> Vec<Row<'a>> {
    catalog
        .enumerate_by_tier(min_tier)
        .filter(|recipe| filter.matches(recipe.title()))
        .filter_map(|recipe| Some(Row::new(catalog.position(recipe.id())?, recipe)))
        .collect()
}

fn render_table(rows: &[Row<'_>], min_tier: Tier, show_ingredients: bool) {
    if rows.is_empty() {
        println!(
            "{}",
            format!("No recipes at tier {min_tier} or above.").dim()
        );
        return;
    }

    let id_width = rows.iter().map(|row| row.id.len()).max().unwrap_or(0).max(2);
    let title_width = rows
        .iter()
        .map(|row| row.title.chars().count())
        .max()
        .unwrap_or(0)
        .max(5);

    println!(
        "{:>3}  {:<id_width$}  {:<title_width$}  {}",
        "#", "ID", "TITLE", "TIER"
    );
    println!(
        "{:-<3}  {:-<id_width$}  {:-<title_width$}  {:-<8}",
        "", "", "", ""
    );

    for row in rows {
        println!(
            "{:>3}  {:<id_width$}  {:<title_width$}  {}",
            row.position,
            row.id,
            row.title,
            tier_label(row.tier)
        );
        if show_ingredients && !row.ingredients.is_empty() {
            let ingredients = row
                .ingredients
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            println!("     {}", ingredients.dim());
        }
    }

    println!();
    println!("{}", format!("{} recipe(s)", rows.len()).success());
}

fn render_json(rows: &[Row<'_>]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), rows)
        .context("failed to render json output")?;
    println!();
    Ok(())
}
