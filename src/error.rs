use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config file {path:?}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to load font {0:?}")]
    Font(PathBuf),

    #[error("failed to load icon {0:?}")]
    Icon(PathBuf),

    #[error("failed to create the render window")]
    Window,

    #[error("failed to start the frame clock")]
    Clock,

    #[error("inspector overlay failed to run")]
    Overlay,
}
