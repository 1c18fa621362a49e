use thiserror::Error;

/// All errors generated in `mock-terminal`.
///
/// Table data is generated locally and never fails; errors only come from the
/// terminal itself, the environment configuration, and control lookups.
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("terminal io: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid value for {key}: {value}")]
    Config { key: &'static str, value: String },

    #[error("no management section is mapped to menu id: {0}")]
    UnknownMenu(String),
}
