use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::domain::errors::DomainError;
use crate::domain::ports::UserRepository;
use crate::domain::role::Role;
use crate::domain::user::{NewUser, Session};

/// Hashes a password into an argon2id PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, DomainError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DomainError::Internal(format!("password hashing failed: {e}")))
}

pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            log::warn!("stored password hash is malformed: {e}");
            false
        }
    }
}

pub struct AuthService<R> {
    repo: R,
}

impl<R: UserRepository> AuthService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn guest(&self) -> Session {
        Session::guest()
    }

    /// Checks the credentials against users holding `role`.
    pub fn login(&self, role: Role, email: &str, password: &str) -> Result<Session, DomainError> {
        if role == Role::Guest {
            return Err(DomainError::Forbidden(
                "guests browse without an account".to_string(),
            ));
        }
        if email.trim().is_empty() || password.is_empty() {
            return Err(DomainError::InvalidInput(
                "email and password are required".to_string(),
            ));
        }

        let Some(user) = self.repo.find_credentials(email.trim(), role)? else {
            log::info!("login rejected for {email} as {role}");
            return Err(DomainError::InvalidCredentials);
        };

        if !verify_password(password, &user.password_hash) {
            log::info!("login rejected for {email} as {role}");
            return Err(DomainError::InvalidCredentials);
        }

        log::info!("{email} logged in as {role}");
        Ok(Session {
            user_id: Some(user.id),
            display_name: format!("{} {}", user.name, user.surname),
            role,
        })
    }

    pub fn register(&self, user: NewUser) -> Result<i32, DomainError> {
        if user.role == Role::Guest {
            return Err(DomainError::InvalidInput(
                "guests do not have accounts".to_string(),
            ));
        }
        if [&user.name, &user.surname, &user.email]
            .iter()
            .any(|field| field.trim().is_empty())
            || user.password.is_empty()
        {
            return Err(DomainError::InvalidInput(
                "name, surname, email and password are required".to_string(),
            ));
        }
        if self.repo.email_exists(&user.email)? {
            return Err(DomainError::InvalidInput(format!(
                "email {} is already registered",
                user.email
            )));
        }

        let hash = hash_password(&user.password)?;
        let id = self.repo.create(&user, &hash)?;
        log::info!("registered {} as {}", user.email, user.role);
        Ok(id)
    }
}
