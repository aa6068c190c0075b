use addthis_api::shares::StatRecord;
use serde::{Deserialize, Serialize};

use crate::column::{SHARES_COLUMN, URL_COLUMN};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub url: String,
    pub shares: u64,
}

impl From<StatRecord> for Row {
    fn from(record: StatRecord) -> Self {
        Self {
            url: record.url,
            shares: record.shares,
        }
    }
}

impl Row {
    /// Template value for a cell of this row, `None` for unknown columns.
    pub fn cell_value(&self, column_id: &str) -> Option<String> {
        match column_id {
            URL_COLUMN => Some(self.url.clone()),
            SHARES_COLUMN => Some(self.shares.to_string()),
            _ => None,
        }
    }
}

/// Row handle the grid fills in per record.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GridRow {
    id: Option<usize>,
    data: Option<Row>,
}

impl GridRow {
    pub fn id(&self) -> Option<usize> {
        self.id
    }

    pub fn data(&self) -> Option<&Row> {
        self.data.as_ref()
    }

    pub fn set_id(&mut self, id: usize) {
        self.id = Some(id);
    }

    pub fn set_data(&mut self, data: Row) {
        self.data = Some(data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Row {
        Row {
            url: "<a href=\"https://a.com\">a.com</a>".into(),
            shares: 1204,
        }
    }

    #[test]
    fn cells_resolve_by_column_id() {
        let row = row();

        assert_eq!(row.cell_value("url").as_deref(), Some("<a href=\"https://a.com\">a.com</a>"));
        assert_eq!(row.cell_value("shares").as_deref(), Some("1204"));
        assert_eq!(row.cell_value("title"), None);
    }

    #[test]
    fn row_handle_starts_empty() {
        let mut handle = GridRow::default();
        assert_eq!(handle, GridRow { id: None, data: None });

        handle.set_id(3);
        handle.set_data(row());

        assert_ne!(handle, GridRow::default());
        assert_eq!(handle.id(), Some(3));
        assert_eq!(handle.data().map(|r| r.shares), Some(1204));
    }
}
