use anyhow::{Context, Result};
use ingredient_processor::cli::{parse_args, Cli, LogFormat};
use ingredient_processor::processor_config::ProcessorConfig;
use ingredient_processor::recipe_batch::{load_recipes, process_recipes, recipe_from_text, RecipeInput};
use ingredient_processor::shopping_summary::ShoppingSummary;
use log::info;
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

fn init_logging(format: LogFormat) {
    match format {
        LogFormat::Text => env_logger::init(),
        LogFormat::Json => {
            let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Environment configuration with command line overrides applied
fn build_config(cli: &Cli) -> ProcessorConfig {
    let mut config = ProcessorConfig::from_env();

    if let Some(concurrency) = cli.concurrency {
        config = config.with_max_concurrent_recipes(concurrency);
    }
    if let Some(max_length) = cli.max_name_length {
        config = config.with_max_ingredient_length(max_length);
    }
    if cli.no_alternatives {
        config.detect_alternatives = false;
    }
    if cli.no_categories {
        config.enable_categorization = false;
    }

    config
}

async fn collect_recipes(cli: &Cli) -> Result<Vec<RecipeInput>> {
    let mut recipes = Vec::new();

    for path in &cli.paths {
        let loaded = load_recipes(path)
            .await
            .with_context(|| format!("Failed to load recipes from {}", path.display()))?;
        recipes.extend(loaded);
    }

    if !cli.ingredients.is_empty() {
        recipes.push(RecipeInput::new("command-line", cli.ingredients.clone()));
    }

    if cli.paths.is_empty() && cli.ingredients.is_empty() {
        let mut input = String::new();
        tokio::io::stdin()
            .read_to_string(&mut input)
            .await
            .context("Failed to read ingredients from stdin")?;
        recipes.push(recipe_from_text(&input, "stdin"));
    }

    Ok(recipes)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = parse_args();

    // Initialize logging
    init_logging(cli.log_format);

    info!("Starting ingredient processor");

    let config = build_config(&cli);
    let recipes = collect_recipes(&cli).await?;

    info!("Processing {} recipe(s)", recipes.len());

    let processed = process_recipes(recipes, &config)
        .await
        .context("Recipe processing failed")?;

    if cli.summary {
        print!("{}", ShoppingSummary::from_recipes(&processed));
    } else if cli.pretty {
        println!("{}", serde_json::to_string_pretty(&processed)?);
    } else {
        println!("{}", serde_json::to_string(&processed)?);
    }

    Ok(())
}
