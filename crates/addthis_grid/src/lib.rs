pub mod authorization;
pub mod column;
mod error;
pub mod handler;
pub mod row;
pub mod source;

pub use error::GridError;
pub use handler::{GRID_TITLE_KEY, GridPayload, StatisticsGridHandler};
pub use row::{GridRow, Row};
pub use source::{DataSource, ShareFeed, StatisticsGridDataSource};
