//! deckforge CLI - deck legality checking and decklist tooling.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};

use deckforge::{parse_decklist, CardCatalog, DeckDiff, DecklistStyle, Format};

#[derive(Parser)]
#[command(name = "deckforge")]
#[command(about = "Deck legality checking and decklist tooling", long_about = None)]
struct Cli {
    /// Path to an atomic-card catalog JSON file
    #[arg(short, long)]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a decklist's legality
    Check {
        /// Decklist file
        deck: PathBuf,

        /// Format to check against (defaults to permissive no-format rules)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Re-render a decklist in a named convention
    Export {
        /// Decklist file
        deck: PathBuf,

        /// Output convention: plain, arena, mtgo, or bare
        #[arg(short, long, default_value = "plain")]
        style: String,
    },

    /// Diff two decklists section by section
    Diff {
        /// Left decklist file
        left: PathBuf,

        /// Right decklist file
        right: PathBuf,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let catalog = CardCatalog::load_json(&cli.catalog)?;

    match cli.command {
        Commands::Check { deck, format } => check_deck(&catalog, &deck, format.as_deref()),
        Commands::Export { deck, style } => export_deck(&catalog, &deck, &style),
        Commands::Diff { left, right } => diff_decks(&catalog, &left, &right),
    }
}

fn load_deck(
    catalog: &CardCatalog,
    path: &PathBuf,
) -> anyhow::Result<deckforge::DeckComposition> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(parse_decklist(&text, catalog)?)
}

fn check_deck(
    catalog: &CardCatalog,
    path: &PathBuf,
    format: Option<&str>,
) -> anyhow::Result<ExitCode> {
    let format = format
        .map(|name| Format::parse(name).ok_or_else(|| anyhow!("unknown format: '{name}'")))
        .transpose()?;

    let deck = load_deck(catalog, path)?;
    let label = format.map_or_else(|| "no format".to_string(), |f| f.to_string());

    if deck.is_legal(format) {
        println!("{}: legal ({})", path.display(), label);
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{}: NOT legal ({})", path.display(), label);
        Ok(ExitCode::FAILURE)
    }
}

fn export_deck(catalog: &CardCatalog, path: &PathBuf, style: &str) -> anyhow::Result<ExitCode> {
    let style =
        DecklistStyle::parse(style).ok_or_else(|| anyhow!("unknown style: '{style}'"))?;

    let deck = load_deck(catalog, path)?;
    print!("{}", deck.export(style));
    Ok(ExitCode::SUCCESS)
}

fn diff_decks(catalog: &CardCatalog, left: &PathBuf, right: &PathBuf) -> anyhow::Result<ExitCode> {
    let left_deck = load_deck(catalog, left)?;
    let right_deck = load_deck(catalog, right)?;

    let diff: DeckDiff = left_deck.diff(&right_deck);
    if diff.is_empty() {
        println!("decks are identical");
        return Ok(ExitCode::SUCCESS);
    }

    for (label, section) in [
        ("Command zone", &diff.command_zone),
        ("Main", &diff.main),
        ("Sideboard", &diff.sideboard),
    ] {
        if !section.is_empty() {
            println!("{label}:");
            print!("{section}");
        }
    }
    Ok(ExitCode::SUCCESS)
}
