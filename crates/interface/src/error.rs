#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no api key given and ${env_var} is not set")]
    ApiKey { env_var: &'static str },
    #[error("language `{0}` is not supported by this translator")]
    LanguageNotSupported(String),
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
    #[error("request failed")]
    Request(#[from] RequestError),
    #[error("server responded with 429 too many requests, back off before retrying")]
    TooManyRequests,
    #[error("no translation found for `{0}`")]
    TranslationNotFound(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("failed to fetch")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("request failed with status code {0}")]
    Status(u16),
    #[error("api returned invalid response")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Error::Request(RequestError::Transport(Box::new(value)))
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Request(RequestError::Decode(value))
    }
}
