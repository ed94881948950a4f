//! Role Model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Workshop role (closed set).
///
/// The backend keeps roles in an open catalog table, but the application
/// only ever grants these three. Deserialization rejects anything else,
/// so an unknown role fails at the boundary instead of silently failing
/// membership checks later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Gerente,
    Encargado,
    Mecanico,
}

impl Role {
    /// Wire form of the role, as the backend stores it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gerente => "gerente",
            Self::Encargado => "encargado",
            Self::Mecanico => "mecanico",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown role string
#[derive(Debug, Error)]
#[error("unknown role: {0}")]
pub struct InvalidRole(pub String);

impl FromStr for Role {
    type Err = InvalidRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gerente" => Ok(Self::Gerente),
            "encargado" => Ok(Self::Encargado),
            "mecanico" => Ok(Self::Mecanico),
            other => Err(InvalidRole(other.to_string())),
        }
    }
}

/// Role catalog entry (`GET /api/roles`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rol {
    pub id: i64,
    pub nombre: Role,
}

/// Create role payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolCreate {
    pub nombre: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_lowercase_wire_form() {
        assert_eq!(serde_json::to_string(&Role::Gerente).unwrap(), "\"gerente\"");
        assert_eq!(serde_json::to_string(&Role::Mecanico).unwrap(), "\"mecanico\"");
    }

    #[test]
    fn deserializes_known_roles() {
        let role: Role = serde_json::from_str("\"encargado\"").unwrap();
        assert_eq!(role, Role::Encargado);
    }

    #[test]
    fn rejects_unknown_role() {
        assert!(serde_json::from_str::<Role>("\"jefe\"").is_err());
        assert!(serde_json::from_str::<Role>("\"\"").is_err());
    }

    #[test]
    fn from_str_round_trips() {
        for role in [Role::Gerente, Role::Encargado, Role::Mecanico] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("admin".parse::<Role>().is_err());
    }
}
