use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{AddThisError, decode_feed};

pub trait Method {
    /// Path below the client's base URL.
    const PATH: &'static str;

    /// Decoded from the response body. An empty body decodes to `Default`.
    type Response: DeserializeOwned + Default;
    type Params: Serialize;

    fn decode(body: &str) -> Result<Self::Response, AddThisError> {
        decode_feed(body)
    }
}
