use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddThisError {
    #[error("AddThis request failed: {0}")]
    Http(reqwest::Error),
    #[error("Error decoding AddThis feed: {0}")]
    Decode(#[from] serde_json::Error),
}

// Request URLs carry the account password, so it never reaches the message.
impl From<reqwest::Error> for AddThisError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }
}
