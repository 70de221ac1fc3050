use clap::{Parser, Subcommand};
use larder::{EngineConfig, GroceryLine, LarderError, QuantityEngine};
use std::io::Read;

#[derive(Parser)]
#[command(name = "larder")]
#[command(about = "Parse, scale and consolidate recipe ingredient quantities", long_about = None)]
struct Cli {
    /// TOML config with extra units, seasonings, descriptors and categories
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print JSON instead of human-readable lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse ingredient lines into amount, unit and name
    Parse {
        /// Ingredient lines (e.g., "2 cups flour")
        #[arg(required = true)]
        lines: Vec<String>,
    },

    /// Scale ingredient lines to a new serving count
    Scale {
        /// Servings the recipe was written for
        #[arg(long)]
        from: u32,

        /// Servings wanted
        #[arg(long)]
        to: u32,

        /// Ingredient lines
        #[arg(required = true)]
        lines: Vec<String>,
    },

    /// Format a decimal amount as a cooking fraction
    Format {
        amount: f64,
    },

    /// Build a grocery list from a JSON array of {line, recipeId, servingMultiplier}
    Consolidate {
        /// Input file (default: stdin)
        #[arg(default_value = "-")]
        input: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), LarderError> {
    let engine = load_engine(cli.config.as_deref())?;

    match &cli.command {
        Commands::Parse { lines } => parse_lines(&engine, lines, cli.json),
        Commands::Scale { from, to, lines } => scale_lines(&engine, lines, *from, *to, cli.json),
        Commands::Format { amount } => {
            println!("{}", engine.format_amount(*amount));
            Ok(())
        }
        Commands::Consolidate { input } => consolidate_input(&engine, input, cli.json),
    }
}

fn load_engine(config_path: Option<&str>) -> Result<QuantityEngine, LarderError> {
    let config = match config_path {
        Some(path) => EngineConfig::load_from_file(path)?,
        None => EngineConfig::default(),
    };
    Ok(QuantityEngine::new(&config)?)
}

fn parse_lines(engine: &QuantityEngine, lines: &[String], json: bool) -> Result<(), LarderError> {
    let parsed: Vec<_> = lines.iter().map(|l| engine.parse_ingredient(l)).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        return Ok(());
    }

    for p in &parsed {
        let amount = p
            .amount
            .map(|a| engine.format_amount(a))
            .unwrap_or_else(|| "-".to_string());
        let unit = p.unit.as_deref().unwrap_or("-");
        println!("{:<8} {:<8} {}", amount, unit, p.name);
    }
    Ok(())
}

fn scale_lines(
    engine: &QuantityEngine,
    lines: &[String],
    from: u32,
    to: u32,
    json: bool,
) -> Result<(), LarderError> {
    let scaled: Vec<_> = lines.iter().map(|l| engine.scale_line(l, from, to)).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&scaled)?);
        return Ok(());
    }

    for s in &scaled {
        println!("{}", s.display());
    }
    Ok(())
}

fn consolidate_input(engine: &QuantityEngine, input: &str, json: bool) -> Result<(), LarderError> {
    let content = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(input)?
    };

    let lines: Vec<GroceryLine> = serde_json::from_str(&content)?;
    let entries = engine.consolidate(&lines);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let mut categories: Vec<&str> = Vec::new();
    for entry in &entries {
        if !categories.contains(&entry.category.as_str()) {
            categories.push(&entry.category);
        }
    }

    for category in categories {
        println!("{}:", category);
        for entry in entries.iter().filter(|e| e.category == category) {
            println!("  {}  ({})", entry.display(), entry.source_recipe_ids.join(", "));
        }
    }
    Ok(())
}
