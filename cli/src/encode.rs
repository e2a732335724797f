use std::fs;
use std::path::PathBuf;

use clap::Args;
use sct::{CERT_SCT_LIST_OID, PRECERT_SCT_LIST_OID, SctList};

use crate::error::Result;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the JSON file holding one SCT or an array of SCTs. If not specified, reads from stdin
    file: Option<String>,

    /// Filename to save the binary SCT output
    #[arg(short, long, default_value = "sct_output.bin")]
    binary_output: PathBuf,

    /// Write the bare SCT list, without the DER OCTET STRING header
    #[arg(long)]
    raw: bool,

    /// Extension the OpenSSL config line is printed for
    #[arg(long, value_enum, default_value = "precert")]
    oid: ExtensionOid,

    /// Do not print the OpenSSL config line
    #[arg(long)]
    no_config_line: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ExtensionOid {
    /// 1.3.6.1.4.1.11129.2.4.2, SCTs embedded in the certificate
    Precert,
    /// 1.3.6.1.4.1.11129.2.4.5, SCTs for the final certificate
    Cert,
}

impl ExtensionOid {
    fn as_str(self) -> &'static str {
        match self {
            ExtensionOid::Precert => PRECERT_SCT_LIST_OID,
            ExtensionOid::Cert => CERT_SCT_LIST_OID,
        }
    }
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input_bytes = read_input(config.file.as_deref())?;
    let list: SctList = serde_json::from_slice(&input_bytes)?;

    // Everything is encoded before the output file is touched.
    let raw = sct::encode(&list, false)?;
    let wrapped = if config.raw {
        None
    } else {
        Some(sct::encode(&list, true)?)
    };
    let output = wrapped.as_deref().unwrap_or(raw.as_slice());

    fs::write(&config.binary_output, output)?;
    tracing::info!(
        path = %config.binary_output.display(),
        count = list.len(),
        bytes = output.len(),
        "wrote SCT list"
    );

    if !config.no_config_line {
        println!("# The following value can be used in the certificate config:");
        println!("{}", sct::openssl_config_line(config.oid.as_str(), &raw));
    }

    Ok(())
}
