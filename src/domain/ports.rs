#[cfg(test)]
use mockall::automock;

use super::errors::DomainError;
use super::order::{OrderInput, OrderKey, OrderView};
use super::product::{ProductInput, ProductView, Reference};
use super::role::Role;
use super::user::{NewUser, UserCredentials};

#[cfg_attr(test, automock)]
pub trait ProductRepository: Send + Sync + 'static {
    fn list(&self) -> Result<Vec<ProductView>, DomainError>;
    fn find_by_article(&self, article: &str) -> Result<Option<ProductView>, DomainError>;
    fn article_exists(&self, article: &str) -> Result<bool, DomainError>;
    fn insert(&self, input: &ProductInput) -> Result<i32, DomainError>;
    /// Returns the number of rows overwritten.
    fn update(&self, article: &str, input: &ProductInput) -> Result<usize, DomainError>;
    fn count_order_items(&self, article: &str) -> Result<i64, DomainError>;
    /// Returns the number of rows deleted.
    fn delete(&self, article: &str) -> Result<usize, DomainError>;
}

#[cfg_attr(test, automock)]
pub trait OrderRepository: Send + Sync + 'static {
    /// Most recent order date first.
    fn list(&self) -> Result<Vec<OrderView>, DomainError>;
    /// Assigns the next receipt code and inserts the order atomically.
    fn create(&self, input: &OrderInput) -> Result<OrderKey, DomainError>;
    fn update(&self, id: i32, input: &OrderInput) -> Result<usize, DomainError>;
    /// Deletes the order and its items in one transaction.
    fn delete(&self, id: i32) -> Result<usize, DomainError>;
}

#[cfg_attr(test, automock)]
pub trait UserRepository: Send + Sync + 'static {
    fn find_credentials(
        &self,
        email: &str,
        role: Role,
    ) -> Result<Option<UserCredentials>, DomainError>;
    fn email_exists(&self, email: &str) -> Result<bool, DomainError>;
    fn create(&self, user: &NewUser, password_hash: &str) -> Result<i32, DomainError>;
}

/// Reference lists used for filter choices and form selections.
#[cfg_attr(test, automock)]
pub trait LookupRepository: Send + Sync + 'static {
    fn categories(&self) -> Result<Vec<Reference>, DomainError>;
    fn brands(&self) -> Result<Vec<Reference>, DomainError>;
    fn suppliers(&self) -> Result<Vec<Reference>, DomainError>;
    fn pickup_points(&self) -> Result<Vec<Reference>, DomainError>;
    /// Users holding the Client role.
    fn clients(&self) -> Result<Vec<Reference>, DomainError>;
}
