use serde::Serialize;

use super::role::Role;

/// A stored user together with the role name and password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct UserCredentials {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// The authenticated (or guest) identity a command runs as.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub user_id: Option<i32>,
    pub display_name: String,
    pub role: Role,
}

impl Session {
    pub fn guest() -> Self {
        Self {
            user_id: None,
            display_name: Role::Guest.to_string(),
            role: Role::Guest,
        }
    }
}
