use addthis_shared_models::{ContextSettings, Role};
use serde::Serialize;

use crate::authorization::{Operation, ROLE_ASSIGNMENTS, RoleAssignment, authorize};
use crate::column::ColumnSpec;
use crate::error::GridError;
use crate::row::{GridRow, Row};
use crate::source::DataSource;

pub const GRID_TITLE_KEY: &str = "plugins.generic.addThis.grid.title";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GridPayload {
    pub title_key: &'static str,
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<GridRow>,
}

/// Serves `fetchGrid` and `fetchRow` for the share statistics grid.
pub struct StatisticsGridHandler<D> {
    source: D,
}

impl<D: DataSource> StatisticsGridHandler<D> {
    pub fn new(source: D) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &D {
        &self.source
    }

    pub fn role_assignments(&self) -> &'static [RoleAssignment] {
        ROLE_ASSIGNMENTS
    }

    pub async fn fetch_grid(
        &self,
        roles: &[Role],
        settings: &ContextSettings,
    ) -> Result<GridPayload, GridError> {
        authorize(Operation::FetchGrid, roles)?;

        let rows = self.source.load_data(settings).await;

        Ok(GridPayload {
            title_key: GRID_TITLE_KEY,
            columns: self.source.configure_columns(),
            rows: self.grid_rows(rows),
        })
    }

    /// Reloads the feed and returns the row at `row_id`.
    pub async fn fetch_row(
        &self,
        roles: &[Role],
        settings: &ContextSettings,
        row_id: usize,
    ) -> Result<GridRow, GridError> {
        authorize(Operation::FetchRow, roles)?;

        let rows = self.source.load_data(settings).await;

        self.grid_rows(rows)
            .into_iter()
            .nth(row_id)
            .ok_or(GridError::RowNotFound(row_id))
    }

    fn grid_rows(&self, rows: Vec<Row>) -> Vec<GridRow> {
        rows.into_iter()
            .enumerate()
            .map(|(id, row)| {
                let mut handle = self.source.row_instance();
                handle.set_id(id);
                handle.set_data(row);
                handle
            })
            .collect()
    }
}
