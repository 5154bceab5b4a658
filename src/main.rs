use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

use cli::OutputFormat;

/// whattoeat - dish recommendations from what is in the fridge
#[derive(Parser)]
#[command(name = "whattoeat", version)]
#[command(about = "Recommend dishes from the ingredients you have and the size of your party", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend dishes for a party
    Recommend {
        /// Ingredient on hand (repeat the flag or separate with commas)
        #[arg(short, long = "ingredient", value_delimiter = ',')]
        ingredients: Vec<String>,

        /// Number of people eating
        #[arg(short, long, allow_negative_numbers = true)]
        people: i64,

        /// Seed for a reproducible answer (overrides config file)
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the known recipes and their ingredients
    Catalog {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = whattoeat::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    whattoeat::observability::init_logging(&config.logging.level, config.logging.format)?;

    match cli.command {
        Commands::Recommend {
            ingredients,
            people,
            seed,
            format,
        } => cli::recommend::recommend(config, ingredients, people, seed, format),
        Commands::Catalog { format } => cli::catalog::list(format),
    }
}
