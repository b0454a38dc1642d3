use state::StateError;
use surf::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("invalid api url: {0}")]
    Url(#[from] surf::http::url::ParseError),

    #[error("{0} cannot be used as a base url")]
    NotABase(String),

    #[error("request failed ({status}): {message}")]
    Http { status: StatusCode, message: String },

    #[error("server answered {0}")]
    Status(StatusCode),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("malformed date {0:?}")]
    Date(String),
}

impl From<surf::Error> for LoaderError {
    fn from(err: surf::Error) -> Self {
        LoaderError::Http {
            status: err.status(),
            message: err.to_string(),
        }
    }
}

impl From<&LoaderError> for StateError {
    fn from(err: &LoaderError) -> Self {
        match err {
            LoaderError::Decode(_) | LoaderError::Date(_) => StateError::ParseError,
            _ => StateError::NetError,
        }
    }
}
