use addthis_shared_models::Credentials;
use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::method::Method;
use crate::{AddThisError, decode_feed};

/// Reporting window of the analytics API.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    #[default]
    Week,
    Month,
}

// Field order is the query string order.
#[derive(Serialize, Deserialize, Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct SharesParams {
    #[builder(default)]
    pub period: Period,
    pub pubid: String,
    pub username: String,
    pub password: String,
}

impl SharesParams {
    pub fn from_credentials(credentials: Credentials<'_>, period: Period) -> Self {
        Self::builder()
            .period(period)
            .pubid(credentials.profile_id)
            .username(credentials.username)
            .password(credentials.password)
            .build()
    }
}

/// One element of the `shares/url.json` feed. Unknown fields are dropped.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatRecord {
    pub url: String,
    pub shares: u64,
}

/// Most shared URLs of a profile over a period.
pub struct SharesByUrl;

impl Method for SharesByUrl {
    const PATH: &'static str = "/analytics/1.0/pub/shares/url.json";

    type Response = Vec<StatRecord>;
    type Params = SharesParams;

    fn decode(body: &str) -> Result<Self::Response, AddThisError> {
        decode_records(body)
    }
}

/// Decodes the feed array element by element. Elements that are not a
/// `{url, shares}` record are skipped, the rest keep their feed order.
/// A body that is not an array at all is still an error.
pub fn decode_records(body: &str) -> Result<Vec<StatRecord>, AddThisError> {
    let elements: Vec<serde_json::Value> = decode_feed(body)?;

    Ok(elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| match serde_json::from_value(element) {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("Skipping AddThis feed element {index}: {err}");
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AddThisClient, decode_feed};

    fn client() -> AddThisClient {
        AddThisClient::builder().build().expect("client")
    }

    #[test]
    fn builds_the_documented_url() {
        let params = SharesParams::builder()
            .pubid("ra-4f0c")
            .username("editor")
            .password("secret")
            .build();

        let url = client().request_url::<SharesByUrl>(&params).unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.addthis.com/analytics/1.0/pub/shares/url.json\
             ?period=week&pubid=ra-4f0c&username=editor&password=secret"
        );
    }

    #[test]
    fn query_values_are_percent_encoded() {
        let params = SharesParams::builder()
            .pubid("ra 1")
            .username("a&b")
            .password("p=q?")
            .build();

        let url = client().request_url::<SharesByUrl>(&params).unwrap();
        let query = url.query().unwrap();

        assert!(query.contains("username=a%26b"), "{query}");
        assert!(query.contains("password=p%3Dq%3F"), "{query}");
        assert_eq!(url.query_pairs().count(), 4);
        let username = url
            .query_pairs()
            .find(|(k, _)| k == "username")
            .map(|(_, v)| v.into_owned());
        assert_eq!(username.as_deref(), Some("a&b"));
    }

    #[test]
    fn period_comes_from_params() {
        let credentials = Credentials {
            profile_id: "ra-1",
            username: "u",
            password: "p",
        };
        let params = SharesParams::from_credentials(credentials, Period::Month);

        let url = client().request_url::<SharesByUrl>(&params).unwrap();

        assert!(url.query().unwrap().starts_with("period=month&pubid=ra-1"));
    }

    #[test]
    fn bad_elements_are_skipped_and_order_kept() {
        let records = decode_records(
            r#"[{"url":"https://a.com","shares":5},
                {"url":null,"shares":2},
                {"url":"https://c.com","shares":"2"},
                "https://d.com",
                {"url":"https://e.com","shares":1}]"#,
        )
        .unwrap();

        assert_eq!(
            records,
            vec![
                StatRecord { url: "https://a.com".into(), shares: 5 },
                StatRecord { url: "https://e.com".into(), shares: 1 },
            ]
        );
    }

    #[test]
    fn records_need_an_array_body() {
        assert!(decode_records("").unwrap().is_empty());
        assert!(matches!(
            decode_records(r#"{"url":"https://a.com","shares":5}"#),
            Err(AddThisError::Decode(_))
        ));
    }

    #[test]
    fn feed_elements_ignore_extra_fields() {
        let records: Vec<StatRecord> = decode_feed(
            r#"[{"url":"https://a.com","shares":5,"title":"A","clicks":9},
                {"shares":2,"url":"https://b.com"}]"#,
        )
        .unwrap();

        assert_eq!(
            records,
            vec![
                StatRecord { url: "https://a.com".into(), shares: 5 },
                StatRecord { url: "https://b.com".into(), shares: 2 },
            ]
        );
    }
}
