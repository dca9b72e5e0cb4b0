//! molweight CLI
//!
//! - `parse`: composition and molecular weight of one or more formulas
//! - `add` / `list`: keep calculated compounds in a line-delimited JSON file
//! - `normalize`: recase sloppy input (`nacl` → `NaCl`)
//! - `elements`: print the periodic table used for weights
//! - `menu`: the interactive numbered menu

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use colored::Colorize;
use molweight_elements::PeriodicTable;
use molweight_formula::{suggest_casing, CompoundParser};
use molweight_storage::{CompoundStore, InsertOutcome, StoreConfig};
use std::io;
use std::path::PathBuf;

mod menu;
mod render;

#[derive(Parser)]
#[command(name = "molweight")]
#[command(
    author,
    version,
    about = "Molecular weight calculator for chemical formulas"
)]
struct Cli {
    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct StoreArgs {
    /// Compound file, one JSON object per line
    #[arg(long, default_value = "compounds.jsonl")]
    store: PathBuf,
}

impl StoreArgs {
    fn open(&self) -> Result<CompoundStore> {
        CompoundStore::open(StoreConfig::at(&self.store))
            .with_context(|| format!("failed to open store {}", self.store.display()))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Parse formulas and print their composition and molecular weight.
    ///
    /// Exits with status 1 when any formula is invalid.
    Parse {
        #[arg(required = true)]
        formulas: Vec<String>,
        /// One JSON object per formula instead of text
        #[arg(long)]
        json: bool,
    },
    /// Parse formulas and add the valid ones to the compound file
    Add {
        #[arg(required = true)]
        formulas: Vec<String>,
        #[command(flatten)]
        store: StoreArgs,
    },
    /// Show stored compounds
    List {
        #[command(flatten)]
        store: StoreArgs,
        /// Print the stored lines as-is
        #[arg(long)]
        json: bool,
    },
    /// Suggest standard symbol casing for a formula
    Normalize { input: String },
    /// Print every element with its atomic weight
    Elements,
    /// Interactive menu (calculate, show, save, exit)
    Menu {
        #[command(flatten)]
        store: StoreArgs,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let table = PeriodicTable::standard();
    match cli.command {
        Commands::Parse { formulas, json } => {
            if !cmd_parse(table, &formulas, json)? {
                std::process::exit(1);
            }
        }
        Commands::Add { formulas, store } => cmd_add(table, &formulas, &store.open()?)?,
        Commands::List { store, json } => cmd_list(table, &store.open()?, json)?,
        Commands::Normalize { input } => println!("{}", suggest_casing(&input, table)),
        Commands::Elements => cmd_elements(table),
        Commands::Menu { store } => {
            let store = store.open()?;
            menu::Menu::new(table, &store, io::stdin().lock(), io::stdout().lock()).run()?;
        }
    }
    Ok(())
}

/// Returns whether every formula parsed.
fn cmd_parse(table: &PeriodicTable, formulas: &[String], json: bool) -> Result<bool> {
    let parser = CompoundParser::new(table);
    let mut all_valid = true;

    for formula in formulas {
        match parser.compound(formula) {
            Ok(compound) if json => println!("{}", serde_json::to_string(&compound)?),
            Ok(compound) => print!(
                "{}",
                render::compound_block(
                    compound.formula(),
                    compound.weight(),
                    compound.composition().iter(),
                    table,
                )
            ),
            Err(error) => {
                all_valid = false;
                tracing::debug!(formula = formula.as_str(), %error, "formula rejected");
                if json {
                    let line = serde_json::json!({
                        "formula": formula.trim(),
                        "error": error.to_string(),
                    });
                    println!("{line}");
                } else {
                    eprint!("{}", render::parse_failure(formula, &error, &parser));
                }
            }
        }
    }
    Ok(all_valid)
}

fn cmd_add(table: &PeriodicTable, formulas: &[String], store: &CompoundStore) -> Result<()> {
    let parser = CompoundParser::new(table);
    let mut changed = 0usize;

    for formula in formulas {
        match parser.compound(formula) {
            Ok(compound) => {
                let verb = match store.insert(&compound) {
                    InsertOutcome::Added => "added",
                    InsertOutcome::Replaced => "updated",
                };
                changed += 1;
                println!(
                    "{} {verb} {} ({:.3} g/mol)",
                    "ok".green().bold(),
                    compound.formula(),
                    compound.weight()
                );
            }
            Err(error) => eprint!("{}", render::parse_failure(formula, &error, &parser)),
        }
    }

    if changed > 0 {
        store.save()?;
        eprintln!(
            "{} wrote {} compound(s) to {}",
            "ok".green().bold(),
            store.len(),
            store.path().display()
        );
    }
    Ok(())
}

fn cmd_list(table: &PeriodicTable, store: &CompoundStore, json: bool) -> Result<()> {
    let compounds = store.list();
    if json {
        for compound in &compounds {
            println!("{}", serde_json::to_string(compound)?);
        }
        return Ok(());
    }

    if compounds.is_empty() {
        println!("No compounds in {}", store.path().display());
        return Ok(());
    }
    for compound in &compounds {
        print!(
            "{}",
            render::compound_block(
                &compound.formula,
                compound.molecular_weight,
                compound.elements.iter().map(|(s, n)| (s.as_str(), *n)),
                table,
            )
        );
    }
    Ok(())
}

fn cmd_elements(table: &PeriodicTable) {
    for element in table.iter() {
        println!(
            "{}",
            render::element_row(
                &element.symbol,
                &element.name,
                element.atomic_number,
                element.atomic_weight
            )
        );
    }
}
