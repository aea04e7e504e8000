use thiserror::Error;

#[derive(Error, Debug)]
pub enum AwsidError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Config(String),

    #[error("No account found with alias name: {0}")]
    NotFound(String),

    #[error("Remote error: {0}")]
    Remote(String),
}

impl From<csv::Error> for AwsidError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(io) => AwsidError::Io(io),
                other => AwsidError::Parse(format!("{:?}", other)),
            }
        } else {
            AwsidError::Parse(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, AwsidError>;
