use std::collections::BTreeMap;

use clap::Parser;
use recipebook::{Catalog, Tier};
use tracing::instrument;

use super::{
    terminal::{tier_label, Colorize},
    Session,
};

#[derive(Debug, Parser, Default)]
#[command(about = "Show recipe counts per tier")]
pub struct Tiers {
    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,

    /// Suppress headers and format for scripting
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Tiers {
    #[instrument(level = "debug", skip(self, session))]
    pub fn run(self, session: &Session) -> anyhow::Result<()> {
        let counts = count_by_tier(&session.catalog);
        let total = session.catalog.len();

        match self.output {
            OutputFormat::Json => Self::output_json(&counts, total)?,
            OutputFormat::Table if self.quiet => Self::output_quiet(&counts, total),
            OutputFormat::Table if total == 0 => {
                println!("No recipes found. Pass a seed file with '--seed'.");
            }
            OutputFormat::Table => Self::output_table(&counts, total),
        }

        Ok(())
    }

    fn output_json(counts: &BTreeMap<Tier, usize>, total: usize) -> anyhow::Result<()> {
        let output = json_summary(counts, total);
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    fn output_quiet(counts: &BTreeMap<Tier, usize>, total: usize) {
        let fields = counts
            .iter()
            .map(|(tier, count)| format!("{tier}={count}"))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{fields} total={total}");
    }

    fn output_table(counts: &BTreeMap<Tier, usize>, total: usize) {
        println!("Recipe counts");
        println!("{}", "─────────────".dim());

        println!("{:<10} Count", "Tier");
        for (tier, count) in counts {
            // Pad before colouring so escape codes do not skew the column.
            let label = format!("{tier:<10}").replace(tier.as_str(), &tier_label(*tier));
            let count = if *count == 0 {
                count.to_string().dim()
            } else {
                count.to_string()
            };
            println!("{label} {count}");
        }
        println!("Total      {}", total.to_string().success());
    }
}

/// The JSON document printed by `tiers --output json`. Every tier is listed,
/// so an empty catalog still yields a well-formed summary.
fn json_summary(counts: &BTreeMap<Tier, usize>, total: usize) -> serde_json::Value {
    use serde_json::json;

    let tiers: Vec<_> = counts
        .iter()
        .map(|(tier, count)| {
            json!({
                "tier": tier,
                "rank": tier.rank(),
                "count": count,
            })
        })
        .collect();

    json!({
        "tiers": tiers,
        "total": total,
    })
}

/// Counts recipes per tier, listing every tier even when it has none.
fn count_by_tier(catalog: &Catalog) -> BTreeMap<Tier, usize> {
    let mut counts: BTreeMap<Tier, usize> = Tier::ALL.into_iter().map(|tier| (tier, 0)).collect();
    for recipe in catalog {
        *counts.entry(recipe.tier()).or_insert(0) += 1;
    }
    counts
}
