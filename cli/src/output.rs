#[derive(Clone, Copy, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// JSON array in the CT log response shape
    Json,
    /// YAML format
    Yaml,
    /// Human-readable text format (OpenSSL-like)
    Text,
}
