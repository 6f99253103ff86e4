use diesel_async::pooled_connection::deadpool;
use petadex_core::{SourceError, source::Table};

/// Source name reported when the database itself, rather than one of its tables, fails.
pub const DATABASE: &str = "database";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to acquire database connection: {0}")]
    Pool(#[from] deadpool::PoolError),
    #[error("failed to connect to database: {0}")]
    Connection(#[from] diesel::ConnectionError),
    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),
}

impl Error {
    /// Attributes the failure to `table`. Storage failures stay failures; a missing row is
    /// reported by the query itself as an empty result.
    pub fn unavailable(self, table: Table) -> SourceError {
        self.attribute_to(table.into())
    }

    /// Attributes a failure that is not specific to any table.
    pub fn unreachable(self) -> SourceError {
        self.attribute_to(DATABASE)
    }

    // Logged as an error once, where the response is built
    fn attribute_to(self, source_name: &str) -> SourceError {
        tracing::debug!(source_name, error = %self, "database lookup failed");

        SourceError::new(source_name, self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
