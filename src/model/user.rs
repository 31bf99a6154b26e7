use std::fmt;

use serde::{Deserialize, Serialize};

/// Access-control tag of an account
///
/// A closed set: an unknown role on the wire is a malformed response rather
/// than a role with no permissions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin_global")]
    GlobalAdmin,
    #[serde(rename = "admin_colegio")]
    SchoolAdmin,
    #[serde(rename = "padre")]
    Parent,
    #[serde(rename = "estudiante")]
    Student,
    #[serde(rename = "profesor")]
    Teacher,
    #[serde(rename = "proveedor")]
    Vendor,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::GlobalAdmin,
        Role::SchoolAdmin,
        Role::Parent,
        Role::Student,
        Role::Teacher,
        Role::Vendor,
    ];

    /// Checks the role against a screen's allow-list
    ///
    /// An empty allow-list admits every role.
    pub fn is_allowed(self, allowed: &[Role]) -> bool {
        allowed.is_empty() || allowed.contains(&self)
    }

    /// The value the API uses for this role
    pub fn as_str(self) -> &'static str {
        match self {
            Role::GlobalAdmin => "admin_global",
            Role::SchoolAdmin => "admin_colegio",
            Role::Parent => "padre",
            Role::Student => "estudiante",
            Role::Teacher => "profesor",
            Role::Vendor => "proveedor",
        }
    }

    /// Display label shown in the interface
    pub fn label(self) -> &'static str {
        match self {
            Role::GlobalAdmin => "Administrador global",
            Role::SchoolAdmin => "Administrador de colegio",
            Role::Parent => "Padre / Madre",
            Role::Student => "Estudiante",
            Role::Teacher => "Profesor",
            Role::Vendor => "Proveedor",
        }
    }

    pub fn from_wire(value: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.as_str() == value)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The authenticated account as returned by login, register and user listings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub full_name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub colegio_id: Option<String>,
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Credential exchange response shared by login and impersonation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenDto {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user: UserDto,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterDto {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colegio_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{Role, UserDto};

    #[test]
    /// Expect an empty allow-list to admit every role
    fn test_role_is_allowed_empty_list() {
        for role in Role::ALL {
            assert!(role.is_allowed(&[]));
        }
    }

    #[test]
    /// Expect membership to decide a non-empty allow-list
    fn test_role_is_allowed_membership() {
        let allowed = [Role::SchoolAdmin, Role::Teacher];

        assert!(Role::SchoolAdmin.is_allowed(&allowed));
        assert!(Role::Teacher.is_allowed(&allowed));
        assert!(!Role::Parent.is_allowed(&allowed));
        assert!(!Role::GlobalAdmin.is_allowed(&allowed));
    }

    #[test]
    /// Expect the wire value to round trip through serde and `from_wire`
    fn test_role_wire_values() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
            assert_eq!(Role::from_wire(role.as_str()), Some(role));
        }

        assert_eq!(Role::from_wire("superuser"), None);
    }

    #[test]
    /// Expect an unknown role to fail deserialization of the whole user
    fn test_user_dto_unknown_role_is_malformed() {
        let body = r#"{"id": "1", "email": "a@b.c", "role": "superuser", "full_name": "A"}"#;

        assert!(serde_json::from_str::<UserDto>(body).is_err());
    }
}
