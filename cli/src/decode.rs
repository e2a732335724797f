use clap::Args;

use crate::error::Result;
use crate::output::OutputFormat;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the binary SCT extension value. If not specified, reads from stdin
    file: Option<String>,

    /// Input is the bare SCT list, without the DER OCTET STRING header
    #[arg(long)]
    raw: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    output: OutputFormat,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input_bytes = read_input(config.file.as_deref())?;

    let list = if config.raw {
        sct::decode(&input_bytes)?
    } else {
        sct::decode_extension(&input_bytes)?
    };
    tracing::info!(count = list.len(), "decoded SCT list");

    match config.output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&list)?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&list)?;
            print!("{}", yaml);
        }
        OutputFormat::Text => {
            if list.is_empty() {
                println!("No SCTs found");
            } else {
                print!("{}", list);
            }
        }
    }

    Ok(())
}
