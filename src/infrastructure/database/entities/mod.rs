//! Database entities module

pub mod country;
pub mod like;
pub mod role;
pub mod user;
pub mod vacation;

pub use country::Entity as Country;
pub use like::Entity as Like;
pub use role::Entity as Role;
pub use user::Entity as User;
pub use vacation::Entity as Vacation;
