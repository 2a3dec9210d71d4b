//! Local operator CLI for the recipe catalog.
//!
//! # Responsibility
//! - Inspect and extend a catalog file without running the server.
//! - Keep output machine-readable (pretty JSON) except for `ping`.

use anyhow::Context;
use clap::{Parser, Subcommand};
use recipebox_core::{JsonFileRecipeStore, RecipeCandidate, RecipeService, DEFAULT_DATA_FILE};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "recipebox", version, about = "Manage a recipe catalog file")]
struct Cli {
    /// JSON file holding the recipe collection.
    #[arg(long, env = "RECIPEBOX_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print core linkage and version.
    Ping,
    /// List recipes, optionally filtered.
    List {
        /// Case-insensitive text matched against title, ingredients and instructions.
        #[arg(long)]
        search: Option<String>,
    },
    /// Add one recipe.
    Add {
        #[arg(long)]
        title: String,
        /// Comma-separated ingredient list.
        #[arg(long)]
        ingredients: Option<String>,
        #[arg(long)]
        instructions: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let output = run(cli)?;
    println!("{output}");
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let service = RecipeService::new(JsonFileRecipeStore::new(cli.data_file));

    match cli.command {
        Command::Ping => Ok(format!(
            "recipebox_core ping={} version={}",
            recipebox_core::ping(),
            recipebox_core::core_version()
        )),
        Command::List { search } => {
            let recipes = match search.as_deref() {
                Some(query) => service.search_recipes(query),
                None => service.list_recipes(),
            };
            serde_json::to_string_pretty(&recipes).context("failed to render recipes")
        }
        Command::Add {
            title,
            ingredients,
            instructions,
        } => {
            let candidate = RecipeCandidate::from_text(title, ingredients, instructions);
            let recipe = service.add_recipe(&candidate).with_context(|| {
                format!(
                    "failed to add recipe to `{}`",
                    service.store().path().display()
                )
            })?;
            serde_json::to_string_pretty(&recipe).context("failed to render recipe")
        }
    }
}
