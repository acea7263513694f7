use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// bakery-bom: raw-material requirements for breads, doughs and fillings.
#[derive(Parser, Debug)]
#[command(name = "bakery-bom")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding products.json, dough_recipes.json and filling_recipes.json.
    #[arg(short, long, env = "BAKERY_BOM_DATA", default_value = "recipes")]
    pub data_dir: PathBuf,

    /// Output format for material lists.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write csv/json output to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Materials for a product, looked up by id or name.
    Product {
        identifier: String,

        /// Number of units to produce.
        #[arg(short, long, default_value = "1")]
        count: f64,
    },

    /// Materials for a weight of dough.
    Dough { id: String, weight: f64 },

    /// Materials for a weight of filling.
    Filling { id: String, weight: f64 },

    /// List products, doughs and fillings in the recipe store.
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product_with_count() {
        let cli = Cli::parse_from(["bakery-bom", "product", "Baguette", "--count", "12"]);
        match cli.command {
            Some(Command::Product { identifier, count }) => {
                assert_eq!(identifier, "Baguette");
                assert_eq!(count, 12.0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn test_parse_dough_with_format() {
        let cli = Cli::parse_from([
            "bakery-bom",
            "--data-dir",
            "/tmp/r",
            "--format",
            "csv",
            "dough",
            "D1",
            "2000",
        ]);
        assert_eq!(cli.data_dir, PathBuf::from("/tmp/r"));
        assert_eq!(cli.format, OutputFormat::Csv);
        assert!(matches!(cli.command, Some(Command::Dough { weight, .. }) if weight == 2000.0));
    }
}
