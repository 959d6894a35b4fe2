use thiserror::Error;

pub type BoardResult<T> = Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("network: {message}")]
    Network { message: String },
    #[error("api response: {message}")]
    Parse { message: String },
    #[error("cache '{path}': {message}")]
    CacheIo { path: String, message: String },
    #[error("config: {message}")]
    Config { message: String },
    #[error("manifest: {message}")]
    Manifest { message: String },
    #[error("layout '{path}': {message}")]
    Layout { path: String, message: String },
    #[error("surface: {message}")]
    Surface { message: String },
}

impl BoardError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn cache_io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CacheIo {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn manifest(message: impl Into<String>) -> Self {
        Self::Manifest {
            message: message.into(),
        }
    }

    pub fn layout(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Layout {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn surface(message: impl Into<String>) -> Self {
        Self::Surface {
            message: message.into(),
        }
    }
}
