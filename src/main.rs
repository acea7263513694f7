use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bakery_bom::cli::{Cli, Command, OutputFormat};
use bakery_bom::error::{BomError, Result};
use bakery_bom::interface::{
    display_catalog, display_suggestions, export_materials, prompt_count, prompt_product, suggest,
};
use bakery_bom::store::{JsonDirSource, RecipeCatalog};
use bakery_bom::BomEngine;

type Engine = BomEngine<JsonDirSource>;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if !cli.data_dir.is_dir() {
        return Err(BomError::DataUnavailable(format!(
            "recipe directory not found: {}",
            cli.data_dir.display()
        )));
    }

    let engine = BomEngine::new(JsonDirSource::new(&cli.data_dir));
    let output = cli.output.as_deref();

    match cli.command {
        Some(Command::Product { identifier, count }) => {
            cmd_product(&engine, &identifier, count, cli.format, output)
        }
        Some(Command::Dough { id, weight }) => cmd_dough(&engine, &id, weight, cli.format, output),
        Some(Command::Filling { id, weight }) => {
            cmd_filling(&engine, &id, weight, cli.format, output)
        }
        Some(Command::List) => cmd_list(&engine),
        None => cmd_interactive(&engine, cli.format, output),
    }
}

/// Materials for `count` units of a product.
fn cmd_product(
    engine: &Engine,
    identifier: &str,
    count: f64,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    if !(count.is_finite() && count > 0.0) {
        return Err(BomError::InvalidInput(
            "Count must be a positive number".to_string(),
        ));
    }

    let per_unit = engine.materials_for_product(identifier)?;
    let catalog = engine.catalog()?;

    if per_unit.is_empty() && catalog.find_product(identifier).is_none() {
        let candidates = catalog
            .products()
            .iter()
            .flat_map(|p| [p.name.as_str(), p.id.as_str()]);
        display_suggestions("product", identifier, &suggest(candidates, identifier));
        return Ok(());
    }

    let title = product_title(&catalog, identifier, count);
    export_materials(&per_unit.scaled(count), &title, format, output)
}

/// Materials for a weight of dough.
fn cmd_dough(
    engine: &Engine,
    id: &str,
    weight: f64,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let map = engine.materials_for_dough(id, weight)?;
    let catalog = engine.catalog()?;

    if catalog.find_dough(id).is_none() {
        let candidates = catalog.doughs().iter().map(|d| d.id.as_str());
        display_suggestions("dough recipe", id, &suggest(candidates, id));
        return Ok(());
    }

    export_materials(&map, &format!("{} g of dough {}", weight, id), format, output)
}

/// Materials for a weight of filling.
fn cmd_filling(
    engine: &Engine,
    id: &str,
    weight: f64,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let map = engine.materials_for_filling(id, weight)?;
    let catalog = engine.catalog()?;

    if catalog.find_filling(id).is_none() {
        let candidates = catalog.fillings().iter().map(|f| f.id.as_str());
        display_suggestions("filling recipe", id, &suggest(candidates, id));
        return Ok(());
    }

    export_materials(&map, &format!("{} g of filling {}", weight, id), format, output)
}

/// List everything in the recipe store.
fn cmd_list(engine: &Engine) -> Result<()> {
    let catalog = engine.catalog()?;
    display_catalog(&catalog);
    Ok(())
}

/// Pick a product and a count interactively.
fn cmd_interactive(engine: &Engine, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let catalog = engine.catalog()?;

    if catalog.products().is_empty() {
        println!("No products in the recipe store.");
        return Ok(());
    }

    println!("Loaded {} products", catalog.products().len());
    println!();

    let Some(identifier) = prompt_product(&catalog)? else {
        return Ok(());
    };
    let count = prompt_count()?;

    cmd_product(engine, &identifier, count, format, output)
}

fn product_title(catalog: &RecipeCatalog, identifier: &str, count: f64) -> String {
    let name = catalog
        .find_product(identifier)
        .map(|p| if p.name.is_empty() { p.id.as_str() } else { p.name.as_str() })
        .unwrap_or(identifier);
    format!("{} x {}", count, name)
}
