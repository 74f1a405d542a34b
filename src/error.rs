use thiserror::Error;

/// Everything that can make a navigation load fail.
///
/// Callers of [`NavLoader::load`](crate::loader::NavLoader::load) never see these:
/// they are only logged. They are kept distinct so that the log line says what went wrong.
#[derive(Error, Debug)]
pub enum NavError {
    #[error("Navigation fragment not found <{0}>")]
    NotFound(String, #[source] reqwest::Error),
    #[error("Error loading navigation fragment")]
    Http(#[source] reqwest::Error),
    #[error("Navigation fragment is not text (Content-Type: {0})")]
    NotText(String),
    #[error("Failed loading navigation fragment from file {0}")]
    File(String, #[source] std::io::Error),
    #[error("Invalid fragment URL {0:?}")]
    Url(String, #[source] url::ParseError),
    #[error("Could not build HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("No container element with id {0:?} in page")]
    MissingContainer(String),
}

impl NavError {
    pub fn http(err: reqwest::Error) -> Self {
        if err.status().map(|s| s.as_u16()) == Some(404) {
            let url = err.url().map(ToString::to_string).unwrap_or_default();
            Self::NotFound(url, err)
        } else {
            Self::Http(err)
        }
    }
}
