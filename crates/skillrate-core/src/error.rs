use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown skillset: {0}")]
    UnknownSkillset(String),

    #[error("Invalid playback rate: {0}")]
    InvalidRate(f32),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.to_string())
    }
}
