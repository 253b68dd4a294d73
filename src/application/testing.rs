//! Shared fixture for service tests: an in-memory store with one admin,
//! one member, two countries and a fixed clock.

use std::sync::Arc;

use chrono::NaiveDate;

use super::authorization::Identity;
use super::ports::PasswordHasher;
use super::services::Services;
use crate::domain::identity::{ADMIN_ROLE, DEFAULT_ROLE};
use crate::domain::{Country, NewUser, RepositoryProvider, Role};
use crate::infrastructure::crypto::BcryptHasher;
use crate::infrastructure::storage::InMemoryStorage;
use crate::shared::FixedClock;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const MEMBER_EMAIL: &str = "member@example.com";
pub const PASSWORD: &str = "password1";

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub struct Fixture {
    pub services: Services,
    pub repos: Arc<InMemoryStorage>,
    pub admin: Identity,
    pub member: Identity,
    pub france: Country,
    pub japan: Country,
    pub today: NaiveDate,
}

async fn user(
    repos: &InMemoryStorage,
    hasher: &BcryptHasher,
    first_name: &str,
    email: &str,
    role: &Role,
) -> Identity {
    let user = repos
        .users()
        .create(NewUser {
            first_name: first_name.into(),
            last_name: "Test".into(),
            email: email.into(),
            password_hash: hasher.hash(PASSWORD).unwrap(),
            role_id: role.id,
            is_staff: false,
        })
        .await
        .unwrap();
    Identity::resolve(&user, Some(role))
}

pub async fn fixture() -> Fixture {
    let repos = Arc::new(InMemoryStorage::new());
    let hasher = BcryptHasher::new(4);
    let today = date(2025, 6, 1);

    let admin_role = repos.roles().create(ADMIN_ROLE).await.unwrap();
    let user_role = repos.roles().create(DEFAULT_ROLE).await.unwrap();
    let admin = user(&repos, &hasher, "Admin", ADMIN_EMAIL, &admin_role).await;
    let member = user(&repos, &hasher, "Member", MEMBER_EMAIL, &user_role).await;

    let france = repos.countries().create("France").await.unwrap();
    let japan = repos.countries().create("Japan").await.unwrap();

    let services = Services::new(
        repos.clone(),
        Arc::new(hasher),
        Arc::new(FixedClock(today)),
    );

    Fixture {
        services,
        repos,
        admin,
        member,
        france,
        japan,
        today,
    }
}
