use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::pickup_address;
use crate::domain::ports::LookupRepository;
use crate::domain::product::Reference;
use crate::domain::role::Role;
use crate::schema::{brends, categories, roles, suppliers, take_points, users};

pub struct DieselLookupRepository {
    pool: DbPool,
}

impl DieselLookupRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn into_references(rows: Vec<(i32, String)>) -> Vec<Reference> {
    rows.into_iter()
        .map(|(id, name)| Reference { id, name })
        .collect()
}

impl LookupRepository for DieselLookupRepository {
    fn categories(&self) -> Result<Vec<Reference>, DomainError> {
        let mut conn = self.pool.get()?;
        let rows = categories::table
            .select((categories::id, categories::category_name))
            .order(categories::id.asc())
            .load(&mut conn)?;
        Ok(into_references(rows))
    }

    fn brands(&self) -> Result<Vec<Reference>, DomainError> {
        let mut conn = self.pool.get()?;
        let rows = brends::table
            .select((brends::id, brends::b_name))
            .order(brends::id.asc())
            .load(&mut conn)?;
        Ok(into_references(rows))
    }

    fn suppliers(&self) -> Result<Vec<Reference>, DomainError> {
        let mut conn = self.pool.get()?;
        let rows = suppliers::table
            .select((suppliers::id, suppliers::s_name))
            .order(suppliers::id.asc())
            .load(&mut conn)?;
        Ok(into_references(rows))
    }

    fn pickup_points(&self) -> Result<Vec<Reference>, DomainError> {
        let mut conn = self.pool.get()?;
        let rows = take_points::table
            .select((
                take_points::id,
                take_points::city,
                take_points::street,
                take_points::num_house,
            ))
            .order(take_points::id.asc())
            .load::<(i32, String, String, String)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(id, city, street, house)| Reference {
                id,
                name: pickup_address(&city, &street, &house),
            })
            .collect())
    }

    fn clients(&self) -> Result<Vec<Reference>, DomainError> {
        let mut conn = self.pool.get()?;
        let rows = users::table
            .inner_join(roles::table)
            .filter(roles::r_name.eq(Role::Client.as_str()))
            .select((users::id, users::u_name, users::surname))
            .order(users::id.asc())
            .load::<(i32, String, String)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(id, name, surname)| Reference {
                id,
                name: format!("{name} {surname}"),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::DieselLookupRepository;
    use crate::domain::ports::LookupRepository;
    use crate::infrastructure::test_db::{seed_references, setup_db};

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn lists_every_reference_kind() {
        let (_container, pool) = setup_db().await;
        let seed = seed_references(&pool);
        let repo = DieselLookupRepository::new(pool);

        let categories = repo.categories().expect("categories failed");
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].id, seed.category_id);

        assert_eq!(repo.brands().expect("brands failed")[0].name, "Kari");
        assert_eq!(repo.suppliers().expect("suppliers failed")[0].name, "Obuv Trade");
        assert_eq!(
            repo.pickup_points().expect("pickup points failed")[0].name,
            "Moscow, Lenina, 12"
        );

        let clients = repo.clients().expect("clients failed");
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].id, seed.client_id);
        assert_eq!(clients[0].name, "Ivan Petrov");
    }
}
