//! Identity service: registration, authentication, identity resolution
//! and role reference data.

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use super::commands::RegisterUser;
use crate::application::authorization::{require_admin, Identity};
use crate::application::ports::PasswordHasher;
use crate::application::validation::{first_field_error, validate_name, validate_registration};
use crate::domain::identity::{normalize_email, NewUser, DEFAULT_ROLE};
use crate::domain::{DomainError, DomainResult, RepositoryProvider, Role, User};

pub struct IdentityService {
    repos: Arc<dyn RepositoryProvider>,
    hasher: Arc<dyn PasswordHasher>,
}

impl IdentityService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repos, hasher }
    }

    // ── Registration ────────────────────────────────────────────

    /// Register a new user with the default (non-admin) role.
    pub async fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<User> {
        let cmd = RegisterUser::new(first_name, last_name, email, password);
        cmd.validate().map_err(|e| first_field_error(&e))?;

        let email = normalize_email(&cmd.email);
        let existing = self.repos.users().find_by_email(&email).await?;
        validate_registration(&email, &cmd.password, existing.as_ref())?;

        let role = self
            .repos
            .roles()
            .find_by_name(DEFAULT_ROLE)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Role",
                field: "name",
                value: DEFAULT_ROLE.to_string(),
            })?;

        let password_hash = self
            .hasher
            .hash(&cmd.password)
            .map_err(|e| DomainError::Internal(format!("Failed to hash password: {}", e)))?;

        // A concurrent registration may still win the race; the store
        // reports it as the same DuplicateEmail conflict.
        let user = self
            .repos
            .users()
            .create(NewUser {
                first_name: cmd.first_name,
                last_name: cmd.last_name,
                email,
                password_hash,
                role_id: role.id,
                is_staff: false,
            })
            .await?;

        info!(user_id = user.id, email = %user.email, "New user registered");
        Ok(user)
    }

    // ── Authentication ──────────────────────────────────────────

    /// Verify credentials. Unknown email and wrong password are
    /// indistinguishable to the caller.
    pub async fn authenticate(&self, email: &str, password: &str) -> DomainResult<User> {
        let email = normalize_email(email);
        let Some(user) = self.repos.users().find_by_email(&email).await? else {
            return Err(DomainError::InvalidCredential);
        };

        if !self.hasher.verify(password, &user.password_hash) {
            return Err(DomainError::InvalidCredential);
        }

        Ok(user)
    }

    /// Build the request identity for a user id, computing the admin flag
    /// once. `None` when the user no longer exists.
    pub async fn resolve_identity(&self, user_id: i32) -> DomainResult<Option<Identity>> {
        let Some(user) = self.repos.users().find_by_id(user_id).await? else {
            return Ok(None);
        };
        let role = self.repos.roles().find_by_id(user.role_id).await?;
        Ok(Some(Identity::resolve(&user, role.as_ref())))
    }

    pub async fn total_users(&self) -> DomainResult<u64> {
        self.repos.users().count().await
    }

    // ── Roles ───────────────────────────────────────────────────

    pub async fn add_role(&self, identity: Option<&Identity>, name: &str) -> DomainResult<Role> {
        let admin = require_admin(identity)?;
        validate_name("name", name)?;

        let role = self.repos.roles().create(name.trim()).await?;
        info!(role_id = role.id, name = %role.name, by = admin.user_id, "Role created");
        Ok(role)
    }

    pub async fn list_roles(&self) -> DomainResult<Vec<Role>> {
        self.repos.roles().find_all().await
    }
}
