use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::errors::DomainError;

/// The role a session acts under. Stored by name in the `roles` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    Administrator,
    Manager,
    Client,
    Guest,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Administrator, Role::Manager, Role::Client, Role::Guest];

    /// Name as stored in `roles.r_name`.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Administrator => "Administrator",
            Role::Manager => "Manager",
            Role::Client => "Client",
            Role::Guest => "Guest",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::InvalidInput(format!("unknown role '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("administrator".parse::<Role>().unwrap(), Role::Administrator);
        assert_eq!(" Manager ".parse::<Role>().unwrap(), Role::Manager);
        assert_eq!("GUEST".parse::<Role>().unwrap(), Role::Guest);
    }

    #[test]
    fn rejects_unknown_role() {
        let err = "cashier".parse::<Role>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn display_matches_stored_name() {
        for role in Role::ALL {
            assert_eq!(role.to_string(), role.as_str());
        }
    }
}
