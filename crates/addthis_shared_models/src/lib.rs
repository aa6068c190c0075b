use serde::{Deserialize, Serialize};

/// Roles a principal can hold inside a tenant context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SiteAdmin,
    Manager,
    SubEditor,
    Author,
    Reviewer,
    Reader,
}

/// AddThis settings stored on a tenant (journal) context.
///
/// Keys match the platform's context data names. Nothing here has a
/// default: an unset key stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSettings {
    #[serde(rename = "addThisProfileId", default)]
    pub profile_id: Option<String>,
    #[serde(rename = "addThisUsername", default)]
    pub username: Option<String>,
    #[serde(rename = "addThisPassword", default)]
    pub password: Option<String>,
}

/// A full set of AddThis credentials, borrowed from [`ContextSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials<'a> {
    pub profile_id: &'a str,
    pub username: &'a str,
    pub password: &'a str,
}

impl ContextSettings {
    pub fn new(
        profile_id: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            profile_id: Some(profile_id.into()),
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Returns the credentials only when all three values are set and non-empty.
    pub fn credentials(&self) -> Option<Credentials<'_>> {
        Some(Credentials {
            profile_id: present(&self.profile_id)?,
            username: present(&self.username)?,
            password: present(&self.password)?,
        })
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
