use bon::Builder;
use serde::Serialize;

pub const URL_COLUMN: &str = "url";
pub const SHARES_COLUMN: &str = "shares";

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Static description of one grid column. Titles are locale keys.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Builder)]
pub struct ColumnSpec {
    pub id: &'static str,
    pub title_key: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    /// Cell content is emitted unescaped.
    #[builder(default)]
    pub html: bool,
}

pub fn statistics_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::builder()
            .id(URL_COLUMN)
            .title_key("common.url")
            .width(50)
            .alignment(Alignment::Left)
            .html(true)
            .build(),
        ColumnSpec::builder()
            .id(SHARES_COLUMN)
            .title_key("plugins.generic.addThis.grid.shares")
            .build(),
    ]
}
