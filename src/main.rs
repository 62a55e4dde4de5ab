mod dataset;
mod error;
mod generator;
mod reader;
mod writer;

use crate::error::ConvertError;

use std::path::{Path, PathBuf};

use {
    anyhow::Context,
    clap::Parser,
    tracing::info,
    tracing_subscriber::EnvFilter,
};

const USAGE: &str = "Usage: csv2ts <input_csv_file> <output_ts_file>";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// CSV file to convert, its first line names the fields
    #[arg(value_name = "INPUT_CSV_FILE", allow_hyphen_values = true)]
    input: PathBuf,

    /// TypeScript file to create or overwrite
    #[arg(value_name = "OUTPUT_TS_FILE", allow_hyphen_values = true)]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            println!("{USAGE}");
            std::process::exit(1);
        }
    };

    init_logging();

    convert(&cli.input, &cli.output).with_context(|| {
        format!(
            "Could not convert {} to {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;

    println!(
        "Conversion complete. TypeScript file saved as {}",
        cli.output.display()
    );

    Ok(())
}

/// Logs go to stderr so stdout only carries the usage and completion lines.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Read `input` completely, then write the generated file to `output`.
fn convert(input: &Path, output: &Path) -> Result<(), ConvertError> {
    let dataset = reader::read_path(input)?;
    let generated = generator::generate(&dataset)?;
    writer::write(output, &generated)?;

    info!(
        "Converted {} records from {} into {}",
        dataset.len(),
        input.display(),
        output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn takes_exactly_two_paths() {
        assert!(Cli::try_parse_from(["csv2ts"]).is_err());
        assert!(Cli::try_parse_from(["csv2ts", "in.csv"]).is_err());
        assert!(Cli::try_parse_from(["csv2ts", "in.csv", "out.ts", "extra"]).is_err());

        let cli = Cli::try_parse_from(["csv2ts", "in.csv", "out.ts"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("in.csv"));
        assert_eq!(cli.output, PathBuf::from("out.ts"));
    }

    #[test]
    fn flags_are_plain_arguments() {
        assert!(Cli::try_parse_from(["csv2ts", "--help"]).is_err());
        assert!(Cli::try_parse_from(["csv2ts", "-V"]).is_err());

        let cli = Cli::try_parse_from(["csv2ts", "-data.csv", "--out.ts"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("-data.csv"));
        assert_eq!(cli.output, PathBuf::from("--out.ts"));
    }

    #[test]
    fn failed_read_leaves_output_alone() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("header_only.csv");
        let output = dir.path().join("data.ts");
        std::fs::write(&input, "a,b,c\n").unwrap();
        std::fs::write(&output, "previous").unwrap();

        assert!(matches!(
            convert(&input, &output),
            Err(ConvertError::EmptyDataset)
        ));
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous");
    }
}
