use std::time::Duration;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

const CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds the pool shared by every repository. Fails if the database is unreachable.
pub fn create_pool(database_url: &str) -> Result<DbPool, r2d2::Error> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .max_size(2)
        .connection_timeout(CONNECTION_TIMEOUT)
        .build(manager)
}
