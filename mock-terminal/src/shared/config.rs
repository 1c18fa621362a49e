//! Terminal configuration
//!
//! Read from environment variables, each falling back to a default when unset:
//! - `SEED`: seed for the placeholder data generators (random when unset)
//! - `LAYOUT_REVISION`: `full` or `compact` row budgets
//! - `WATCHLIST`: comma separated watch list symbols, at least three
//! - `ASSETS`: comma separated wallet assets
//! - `LOG_FILE`: file receiving tracing output

use std::path::PathBuf;

use super::error::TerminalError;

const DEFAULT_WATCHLIST: &str = "BTC,ETH,SOL,XRP,ADA,DOGE,DOT,LTC";
const DEFAULT_ASSETS: &str = "BTC,ETH,USDT";

/// The watch list always shows at least this many rows
pub const MIN_WATCHLIST_SYMBOLS: usize = 3;

/// Row budget of the generated tables.
///
/// The compact layout trims the order book and trade history so every panel
/// fits a small terminal without scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutRevision {
    #[default]
    Full,
    Compact,
}

impl LayoutRevision {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutRevision::Full => "full",
            LayoutRevision::Compact => "compact",
        }
    }
}

impl std::str::FromStr for LayoutRevision {
    type Err = TerminalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(LayoutRevision::Full),
            "compact" => Ok(LayoutRevision::Compact),
            _ => Err(TerminalError::Config {
                key: "LAYOUT_REVISION",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TerminalConfig {
    pub seed: Option<u64>,
    pub revision: LayoutRevision,
    pub watchlist: Vec<String>,
    pub assets: Vec<String>,
    pub log_file: Option<PathBuf>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            seed: None,
            revision: LayoutRevision::default(),
            watchlist: split_symbols(DEFAULT_WATCHLIST),
            assets: split_symbols(DEFAULT_ASSETS),
            log_file: None,
        }
    }
}

impl TerminalConfig {
    /// Build the configuration from the process environment
    pub fn from_env() -> Result<Self, TerminalError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self, TerminalError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(seed) = lookup("SEED") {
            let seed = seed.trim().parse::<u64>().map_err(|_| TerminalError::Config {
                key: "SEED",
                value: seed.clone(),
            })?;
            config.seed = Some(seed);
        }

        if let Some(revision) = lookup("LAYOUT_REVISION") {
            config.revision = revision.parse()?;
        }

        if let Some(watchlist) = lookup("WATCHLIST") {
            let symbols = non_empty_symbols("WATCHLIST", &watchlist)?;
            if symbols.len() < MIN_WATCHLIST_SYMBOLS {
                return Err(TerminalError::Config {
                    key: "WATCHLIST",
                    value: watchlist,
                });
            }
            config.watchlist = symbols;
        }

        if let Some(assets) = lookup("ASSETS") {
            config.assets = non_empty_symbols("ASSETS", &assets)?;
        }

        config.log_file = lookup("LOG_FILE").map(PathBuf::from);

        Ok(config)
    }

    /// Set a fixed generator seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the layout revision
    pub fn with_revision(mut self, revision: LayoutRevision) -> Self {
        self.revision = revision;
        self
    }

    /// Set the watch list symbols
    pub fn with_watchlist(mut self, symbols: Vec<String>) -> Self {
        self.watchlist = symbols;
        self
    }
}

fn split_symbols(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn non_empty_symbols(key: &'static str, raw: &str) -> Result<Vec<String>, TerminalError> {
    let symbols = split_symbols(raw);
    if symbols.is_empty() {
        return Err(TerminalError::Config {
            key,
            value: raw.to_string(),
        });
    }
    Ok(symbols)
}
