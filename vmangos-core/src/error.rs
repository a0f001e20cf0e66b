use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown text encoding: {0}")]
    UnknownEncoding(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{source}")]
    ReadInput {
        #[source]
        source: Box<ConvertError>,
    },

    #[error("{source}")]
    WriteOutput {
        #[source]
        source: Box<ConvertError>,
    },
}

impl ConvertError {
    pub fn read_input(source: impl Into<ConvertError>) -> Self {
        ConvertError::ReadInput { source: Box::new(source.into()) }
    }

    pub fn write_output(source: impl Into<ConvertError>) -> Self {
        ConvertError::WriteOutput { source: Box::new(source.into()) }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
