//! Role and User domain entities

use serde::Serialize;

/// Name of the role seeded for administrators.
pub const ADMIN_ROLE: &str = "admin";
/// Role assigned to newly registered users.
pub const DEFAULT_ROLE: &str = "user";

/// Role names (after normalization) that also denote an administrator.
const ADMIN_SYNONYMS: [&str; 4] = ["administrator", "super admin", "superadmin", "admin user"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Role {
    pub id: i32,
    pub name: String,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        is_admin_role_name(&self.name)
    }
}

/// Canonical comparable form of a role name: trimmed, lowercased,
/// `-`/`_` read as spaces and runs of whitespace collapsed.
pub fn normalize_role_name(name: &str) -> String {
    name.to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn is_admin_role_name(name: &str) -> bool {
    let normalized = normalize_role_name(name);
    if normalized.is_empty() {
        return false;
    }
    normalized.starts_with("admin") || ADMIN_SYNONYMS.contains(&normalized.as_str())
}

/// Emails are unique case-insensitively; this is the stored form.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role_id: i32,
    /// Staff flag; grants admin rights independently of the role.
    pub is_staff: bool,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Insert payload for the identity store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role_id: i32,
    pub is_staff: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_are_normalized() {
        assert_eq!(normalize_role_name("  Super_Admin "), "super admin");
        assert_eq!(normalize_role_name("ADMIN-user"), "admin user");
        assert_eq!(normalize_role_name("a \t  b"), "a b");
    }

    #[test]
    fn admin_role_detection() {
        for name in ["admin", "ADMIN", "Admin User", "administrator", "super-admin", "SuperAdmin"] {
            assert!(is_admin_role_name(name), "{name} should be admin");
        }
        for name in ["user", "", "   ", "moderator", "sub admin"] {
            assert!(!is_admin_role_name(name), "{name} should not be admin");
        }
    }

    #[test]
    fn emails_compare_case_insensitively() {
        assert_eq!(normalize_email(" Dan@Example.COM "), "dan@example.com");
    }
}
