use crate::model::network::NetworkError;

#[derive(thiserror::Error, Debug)]
pub enum ResilienceAppError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure reading network document {0}: {1}")]
    NetworkDocumentError(String, String),
    #[error("failure writing outputs: {0}")]
    OutputError(String),
    #[error("failure analyzing network: {source}")]
    NetworkError {
        #[from]
        source: NetworkError,
    },
    #[error("failure reading or writing file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure writing CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
}
