mod error;
pub mod method;
pub mod shares;

pub use error::AddThisError;

use std::time::Duration;

use bon::bon;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder, Url};
use serde::de::DeserializeOwned;

pub const BASE_URL: &str = "https://api.addthis.com";

pub struct AddThisClient {
    base_url: String,
    reqwest: Client,
}

#[bon]
impl AddThisClient {
    #[builder]
    pub fn new(
        #[builder(into, default = BASE_URL.to_owned())] base_url: String,
        timeout: Option<Duration>,
    ) -> reqwest::Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = ClientBuilder::new().default_headers(default_headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            reqwest: builder.build()?,
        })
    }
}

impl AddThisClient {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL for a method call, query encoded. Nothing is sent.
    pub fn request_url<M: method::Method>(&self, params: &M::Params) -> Result<Url, AddThisError> {
        let request = self
            .reqwest
            .get(format!("{}{}", self.base_url, M::PATH))
            .query(params)
            .build()?;

        Ok(request.url().clone())
    }

    /// Raw response body. Non-2xx statuses are errors.
    pub async fn fetch_body<M: method::Method>(
        &self,
        params: &M::Params,
    ) -> Result<String, AddThisError> {
        let url = self.request_url::<M>(params)?;
        log::debug!("GET {}", redacted(&url));

        let body = self
            .reqwest
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(body)
    }

    pub async fn call<M: method::Method>(
        &self,
        params: &M::Params,
    ) -> Result<M::Response, AddThisError> {
        let body = self.fetch_body::<M>(params).await?;
        M::decode(&body)
    }
}

/// Decodes a response body; a blank body means "no data".
pub fn decode_feed<R: DeserializeOwned + Default>(body: &str) -> Result<R, AddThisError> {
    if body.trim().is_empty() {
        return Ok(R::default());
    }

    Ok(serde_json::from_str(body)?)
}

fn redacted(url: &Url) -> Url {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == "password" {
                "***".to_owned()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut out = url.clone();
    out.query_pairs_mut().clear().extend_pairs(pairs);
    out
}
