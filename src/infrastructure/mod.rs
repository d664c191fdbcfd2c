pub mod lookup_repo;
pub mod models;
pub mod order_repo;
pub mod product_repo;
pub mod user_repo;

#[cfg(test)]
pub(crate) mod test_db;

pub use lookup_repo::DieselLookupRepository;
pub use order_repo::DieselOrderRepository;
pub use product_repo::DieselProductRepository;
pub use user_repo::DieselUserRepository;

use crate::domain::errors::DomainError;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        log::error!("query failed: {e}");
        DomainError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        log::error!("database connection unavailable: {e}");
        DomainError::Internal(e.to_string())
    }
}
