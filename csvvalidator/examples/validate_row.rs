use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use csvvalidator::{RowSchema, Validator};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Validate one CSV row against a JSON row schema")]
struct Cli {
    /// Path to the JSON row schema
    #[arg(long)]
    schema: PathBuf,

    /// Whole row as a single line, split on --delimiter
    #[arg(long, conflicts_with = "fields")]
    line: Option<String>,

    /// Field delimiter used with --line
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Row fields, one argument per field
    fields: Vec<String>,

    /// Print the report as indented JSON
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let validator = Validator::from_schema(RowSchema::from_path(&cli.schema)?)?;

    let fields: Vec<String> = match &cli.line {
        Some(line) => line.split(cli.delimiter).map(str::to_owned).collect(),
        None => cli.fields,
    };

    match validator.check(&fields) {
        None => {
            println!("row is valid");
            Ok(ExitCode::SUCCESS)
        }
        Some(report) => {
            let json = if cli.pretty {
                report.to_json_pretty()?
            } else {
                report.to_json()?
            };
            println!("{json}");
            Ok(ExitCode::FAILURE)
        }
    }
}
