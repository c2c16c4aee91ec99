/// Top-level error type for the fallible edges around the formatter.
/// Formatting itself never fails; these cover config, params input and clipboard.
#[derive(Debug, thiserror::Error)]
pub enum CitationError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Citation params error: {0}")]
    Params(#[from] ParamsError),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Unknown config key: {0}")]
    UnknownKey(String),

    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },

    #[error("Malformed config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ParamsError {
    #[error("Malformed citation params JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a citation record, an array of records, or null")]
    UnexpectedShape,
}

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
