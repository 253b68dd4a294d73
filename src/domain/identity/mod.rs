//! Identity aggregate
//!
//! Roles, users and the store interface holding them.

pub mod model;
pub mod repository;

pub use model::{
    is_admin_role_name, normalize_email, normalize_role_name, NewUser, Role, User, ADMIN_ROLE,
    DEFAULT_ROLE,
};
pub use repository::{RoleRepository, UserRepository};
