use crate::domain::errors::DomainError;
use crate::domain::order::{OrderInput, OrderKey, OrderView};
use crate::domain::ports::OrderRepository;

pub struct OrderService<R> {
    repo: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_orders(&self) -> Result<Vec<OrderView>, DomainError> {
        self.repo.list()
    }

    pub fn create_order(&self, input: OrderInput) -> Result<OrderKey, DomainError> {
        validate(&input)?;
        let key = self.repo.create(&input)?;
        log::info!("created order {} (id {})", key.receipt_code, key.id);
        Ok(key)
    }

    pub fn update_order(&self, id: i32, input: OrderInput) -> Result<(), DomainError> {
        validate(&input)?;
        match self.repo.update(id, &input)? {
            0 => Err(DomainError::NotFound),
            _ => {
                log::info!("updated order id {id}");
                Ok(())
            }
        }
    }

    /// Removes the order together with its items.
    pub fn delete_order(&self, id: i32) -> Result<(), DomainError> {
        match self.repo.delete(id)? {
            0 => Err(DomainError::NotFound),
            _ => {
                log::info!("deleted order id {id}");
                Ok(())
            }
        }
    }
}

fn validate(input: &OrderInput) -> Result<(), DomainError> {
    if input.pickup_point_id.is_none() || input.client_id.is_none() {
        return Err(DomainError::InvalidInput(
            "select a pickup point and a client".to_string(),
        ));
    }
    Ok(())
}
