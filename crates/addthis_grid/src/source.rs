use std::future::Future;

use addthis_api::shares::{Period, SharesByUrl, SharesParams, StatRecord};
use addthis_api::{AddThisClient, AddThisError};
use addthis_shared_models::{ContextSettings, Credentials};

use crate::column::{ColumnSpec, statistics_columns};
use crate::row::{GridRow, Row};

/// Where share statistics come from.
pub trait ShareFeed {
    fn top_shared_urls(
        &self,
        credentials: Credentials<'_>,
        period: Period,
    ) -> impl Future<Output = Result<Vec<StatRecord>, AddThisError>> + Send;
}

impl ShareFeed for AddThisClient {
    fn top_shared_urls(
        &self,
        credentials: Credentials<'_>,
        period: Period,
    ) -> impl Future<Output = Result<Vec<StatRecord>, AddThisError>> + Send {
        let params = SharesParams::from_credentials(credentials, period);
        async move { self.call::<SharesByUrl>(&params).await }
    }
}

/// What a grid needs from its data: columns, rows, and fresh row handles.
pub trait DataSource {
    fn configure_columns(&self) -> Vec<ColumnSpec>;

    fn load_data(&self, settings: &ContextSettings) -> impl Future<Output = Vec<Row>> + Send;

    fn row_instance(&self) -> GridRow {
        GridRow::default()
    }
}

/// Weekly most-shared URLs of a tenant's AddThis profile.
pub struct StatisticsGridDataSource<F> {
    feed: F,
    period: Period,
}

impl<F: ShareFeed> StatisticsGridDataSource<F> {
    pub fn new(feed: F) -> Self {
        Self {
            feed,
            period: Period::Week,
        }
    }

    pub fn with_period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    pub fn feed(&self) -> &F {
        &self.feed
    }

    /// Loads rows, surfacing feed failures. Incomplete credentials are not a
    /// failure: they load nothing and make no request.
    pub async fn try_load_data(&self, settings: &ContextSettings) -> Result<Vec<Row>, AddThisError> {
        let Some(credentials) = settings.credentials() else {
            log::debug!("AddThis credentials incomplete, nothing to load");
            return Ok(Vec::new());
        };

        let records = self.feed.top_shared_urls(credentials, self.period).await?;
        log::debug!("Loaded {} AddThis share records", records.len());

        Ok(records.into_iter().map(Row::from).collect())
    }
}

impl<F: ShareFeed + Sync> DataSource for StatisticsGridDataSource<F> {
    fn configure_columns(&self) -> Vec<ColumnSpec> {
        statistics_columns()
    }

    /// Feed failures render as an empty grid.
    fn load_data(&self, settings: &ContextSettings) -> impl Future<Output = Vec<Row>> + Send {
        async move {
            match self.try_load_data(settings).await {
                Ok(rows) => rows,
                Err(err) => {
                    log::warn!("AddThis statistics unavailable: {err}");
                    Vec::new()
                }
            }
        }
    }
}
