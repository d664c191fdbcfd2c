use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ports::UserRepository;
use crate::domain::role::Role;
use crate::domain::user::{NewUser, UserCredentials};
use crate::schema::{roles, users};

use super::models::NewUserRow;

pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for DieselUserRepository {
    fn find_credentials(
        &self,
        email: &str,
        role: Role,
    ) -> Result<Option<UserCredentials>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = users::table
            .inner_join(roles::table)
            .filter(users::email.eq(email))
            .filter(roles::r_name.eq(role.as_str()))
            .select((users::id, users::u_name, users::surname, users::password_hash))
            .first::<(i32, String, String, String)>(&mut conn)
            .optional()?;

        Ok(row.map(|(id, name, surname, password_hash)| UserCredentials {
            id,
            name,
            surname,
            password_hash,
        }))
    }

    fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;

        let exists =
            diesel::select(diesel::dsl::exists(users::table.filter(users::email.eq(email))))
                .get_result(&mut conn)?;

        Ok(exists)
    }

    fn create(&self, user: &NewUser, password_hash: &str) -> Result<i32, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let role_id: i32 = roles::table
                .filter(roles::r_name.eq(user.role.as_str()))
                .select(roles::id)
                .first(conn)
                .optional()?
                .ok_or_else(|| DomainError::InvalidInput(format!("role {} is not defined", user.role)))?;

            diesel::insert_into(users::table)
                .values(&NewUserRow {
                    u_name: &user.name,
                    surname: &user.surname,
                    email: &user.email,
                    password_hash,
                    role_id,
                })
                .returning(users::id)
                .get_result(conn)
                .map_err(|e| match e {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        DomainError::InvalidInput(format!("email {} is already registered", user.email))
                    }
                    other => other.into(),
                })
        })
    }
}
