//! Authorization gate
//!
//! Decides whether a resolved identity (or its absence) may perform an
//! operation class. Session lookup happens elsewhere; the gate only sees the
//! result.

use serde::Serialize;

use crate::domain::{DomainError, DomainResult, Role, User};

/// The user behind the current request, resolved once per request.
///
/// `is_admin` is computed at resolution time from both admin signals
/// (staff flag OR an admin role name) and is the only admin predicate the
/// services consult.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub user_id: i32,
    pub email: String,
    pub full_name: String,
    pub is_admin: bool,
}

impl Identity {
    pub fn resolve(user: &User, role: Option<&Role>) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            full_name: user.full_name(),
            is_admin: user.is_staff || role.is_some_and(Role::is_admin),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Vacation listing, country and role lists.
    ReadPublic,
    /// Vacation detail view.
    ReadAuthenticated,
    /// Reading the caller's own likes.
    ReadOwn,
    /// Like / unlike on behalf of the caller.
    WriteOwn,
    /// Catalog and reference-data writes, every statistics query.
    WriteAdmin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    Unauthenticated,
    Forbidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied(DenyReason),
}

impl Decision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Decision::Allowed)
    }

    pub fn into_result(self) -> DomainResult<()> {
        match self {
            Decision::Allowed => Ok(()),
            Decision::Denied(DenyReason::Unauthenticated) => Err(DomainError::Unauthenticated),
            Decision::Denied(DenyReason::Forbidden) => {
                Err(DomainError::Forbidden("admin only".into()))
            }
        }
    }
}

pub fn authorize(identity: Option<&Identity>, operation: Operation) -> Decision {
    match (operation, identity) {
        (Operation::ReadPublic, _) => Decision::Allowed,
        (_, None) => Decision::Denied(DenyReason::Unauthenticated),
        (Operation::WriteAdmin, Some(id)) if !id.is_admin => Decision::Denied(DenyReason::Forbidden),
        (_, Some(_)) => Decision::Allowed,
    }
}

/// Authorizes an operation that needs an acting identity and returns it.
pub fn require_identity(
    identity: Option<&Identity>,
    operation: Operation,
) -> DomainResult<&Identity> {
    authorize(identity, operation).into_result()?;
    identity.ok_or(DomainError::Unauthenticated)
}

pub fn require_admin(identity: Option<&Identity>) -> DomainResult<&Identity> {
    require_identity(identity, Operation::WriteAdmin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::ErrorKind;

    fn user(is_staff: bool) -> User {
        User {
            id: 5,
            first_name: "Dan".into(),
            last_name: "Doe".into(),
            email: "dan@example.com".into(),
            password_hash: String::new(),
            role_id: 2,
            is_staff,
        }
    }

    fn role(name: &str) -> Role {
        Role {
            id: 2,
            name: name.into(),
        }
    }

    #[test]
    fn either_admin_signal_is_enough() {
        assert!(Identity::resolve(&user(true), Some(&role("user"))).is_admin);
        assert!(Identity::resolve(&user(false), Some(&role("Administrator"))).is_admin);
        assert!(Identity::resolve(&user(true), None).is_admin);
        assert!(!Identity::resolve(&user(false), Some(&role("user"))).is_admin);
        assert!(!Identity::resolve(&user(false), None).is_admin);
    }

    #[test]
    fn resolved_identity_carries_display_name() {
        let identity = Identity::resolve(&user(false), None);
        assert_eq!(identity.user_id, 5);
        assert_eq!(identity.full_name, "Dan Doe");
    }

    #[test]
    fn anonymous_callers() {
        assert_eq!(authorize(None, Operation::ReadPublic), Decision::Allowed);
        for op in [
            Operation::ReadAuthenticated,
            Operation::ReadOwn,
            Operation::WriteOwn,
            Operation::WriteAdmin,
        ] {
            assert_eq!(authorize(None, op), Decision::Denied(DenyReason::Unauthenticated));
        }
    }

    #[test]
    fn regular_users_cannot_write_admin() {
        let id = Identity::resolve(&user(false), Some(&role("user")));
        assert!(authorize(Some(&id), Operation::ReadAuthenticated).is_allowed());
        assert!(authorize(Some(&id), Operation::WriteOwn).is_allowed());
        assert_eq!(
            authorize(Some(&id), Operation::WriteAdmin),
            Decision::Denied(DenyReason::Forbidden)
        );
        assert_eq!(require_admin(Some(&id)).unwrap_err().kind(), ErrorKind::Forbidden);
    }

    #[test]
    fn admins_pass_every_class() {
        let id = Identity::resolve(&user(false), Some(&role("admin")));
        for op in [
            Operation::ReadPublic,
            Operation::ReadAuthenticated,
            Operation::ReadOwn,
            Operation::WriteOwn,
            Operation::WriteAdmin,
        ] {
            assert!(authorize(Some(&id), op).is_allowed());
        }
        assert_eq!(require_admin(Some(&id)).unwrap().user_id, 5);
    }

    #[test]
    fn missing_identity_maps_to_unauthenticated() {
        assert_eq!(
            require_identity(None, Operation::WriteOwn).unwrap_err(),
            DomainError::Unauthenticated
        );
        assert_eq!(require_admin(None).unwrap_err().kind(), ErrorKind::Unauthenticated);
    }
}
