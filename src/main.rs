use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mealbook_shared::Portion;

mod cli;

/// mealbook - meal booking shopping lists and chef reports
#[derive(Parser)]
#[command(name = "mealbook")]
#[command(about = "Resolve meal variations and aggregate shopping lists", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate shopping list records into grouped ingredients
    ShoppingList {
        /// Shopping list record ids, repeated once per ordered unit
        #[arg(required = true)]
        ids: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Resolve a menu item against the client's choices
    Resolve {
        menu_item_id: String,

        /// Portion size (defaults to report.default_portion)
        #[arg(long)]
        portion: Option<Portion>,

        /// Required selection, repeatable
        #[arg(long = "select")]
        selections: Vec<String>,

        /// Customization, repeatable
        #[arg(long = "customize")]
        customizations: Vec<String>,
    },
    /// Build the chef report of an order file
    Report {
        order: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = mealbook::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealbook::observability::init_observability(
        "mealbook",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let result = match cli.command {
        Commands::ShoppingList { ids, json } => cli::shopping_list::run(config, ids, json),
        Commands::Resolve {
            menu_item_id,
            portion,
            selections,
            customizations,
        } => cli::resolve::run(config, menu_item_id, portion, selections, customizations),
        Commands::Report { order, json } => cli::report::run(config, order, json),
    };

    mealbook::observability::shutdown_observability();

    result
}
