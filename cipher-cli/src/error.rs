use classic_crypto::errors::ClassicCryptoError;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Cannot read job: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed job: {0}")]
    Job(#[from] serde_json::Error),

    #[error(transparent)]
    Crypto(#[from] ClassicCryptoError),

    #[error("Usage: {0}")]
    Usage(String),
}
