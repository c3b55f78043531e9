use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("No home directory")]
    NoHomeDir,

    #[error("Clipboard unavailable: {0}")]
    ClipboardDenied(String),

    #[error("Generator not wired yet")]
    GeneratorUnavailable,

    #[error("Task join error: {0}")]
    TaskJoin(String),
}

impl From<arboard::Error> for Error {
    fn from(e: arboard::Error) -> Self {
        Error::ClipboardDenied(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
