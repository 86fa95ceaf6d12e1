use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use tsql_to_pg::{convert_file, map_type, ConvertOptions, TypeExtension};

#[derive(Parser)]
#[command(name = "tsql-to-pg")]
#[command(author, version, about = "Convert SQL Server CREATE TABLE scripts to PostgreSQL")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the CREATE TABLE statements of a .sql script
    Convert {
        /// Path to the SQL Server script
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the PostgreSQL DDL (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the PostgreSQL type for a SQL Server type, e.g. `map-type decimal 10 2`
    MapType {
        /// SQL Server type keyword
        source_type: String,

        /// Length, precision, or precision and scale
        #[arg(num_args = 0..=2)]
        params: Vec<u32>,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            verbose,
        } => {
            init_logging(verbose);

            let options = ConvertOptions {
                input_path: input,
                output_path: output,
                verbose,
            };

            let ddl = convert_file(&options)?;
            if options.output_path.is_none() {
                println!("{}", ddl);
            }
        }
        Commands::MapType {
            source_type,
            params,
        } => {
            init_logging(false);

            let extension = match params.as_slice() {
                [] => TypeExtension::None,
                [n] => TypeExtension::Single(*n),
                [m, n, ..] => TypeExtension::Pair(*m, *n),
            };
            println!("{}", map_type(&source_type.to_lowercase(), extension));
        }
    }

    Ok(())
}
