use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid course selection: {0}")]
    InvalidSelection(String),
    #[error("invalid wager setup: {0}")]
    InvalidWager(String),
    #[error("unknown player: {0}")]
    UnknownPlayer(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("io error: {0}")]
    Io(String),
}

impl CoreError {
    /// Configuration errors halt the current workflow step; everything else
    /// is a load or parse failure from the surrounding I/O.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidSelection(_) | Self::InvalidWager(_))
    }
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for CoreError {
    fn from(err: csv::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<String> for CoreError {
    fn from(err: String) -> Self {
        Self::Parse(err)
    }
}

impl From<&str> for CoreError {
    fn from(err: &str) -> Self {
        Self::Parse(err.to_string())
    }
}
