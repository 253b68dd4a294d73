//! Initial data: roles, the bootstrap administrator and a demo catalog.
//!
//! Seeding runs once per store. When any role exists the store counts as
//! already initialized and nothing is written.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};

use crate::application::ports::PasswordHasher;
use crate::config::AdminSection;
use crate::domain::identity::{normalize_email, ADMIN_ROLE, DEFAULT_ROLE};
use crate::domain::{DomainError, NewUser, NewVacation, RepositoryProvider};
use crate::shared::{AppError, InfraError};

pub const DEMO_COUNTRIES: [&str; 10] = [
    "Israel", "USA", "France", "Germany", "Italy", "Spain", "Canada", "Brazil", "Japan", "Mexico",
];

struct DemoVacation {
    /// Index into [`DEMO_COUNTRIES`]
    country: usize,
    description: &'static str,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
    price: i64,
    image: &'static str,
}

const DEMO_VACATIONS: [DemoVacation; 12] = [
    DemoVacation { country: 0, description: "Beach in Tel Aviv", start: (2025, 7, 10), end: (2025, 7, 20), price: 2500, image: "tel_aviv.jpg" },
    DemoVacation { country: 1, description: "New York City Trip", start: (2025, 8, 1), end: (2025, 8, 10), price: 3500, image: "nyc.jpg" },
    DemoVacation { country: 2, description: "Paris Adventure", start: (2025, 9, 5), end: (2025, 9, 15), price: 3000, image: "paris.jpg" },
    DemoVacation { country: 3, description: "Berlin History Tour", start: (2025, 10, 10), end: (2025, 10, 20), price: 2700, image: "berlin.jpg" },
    DemoVacation { country: 4, description: "Rome Exploration", start: (2025, 11, 1), end: (2025, 11, 10), price: 3200, image: "rome.jpg" },
    DemoVacation { country: 5, description: "Barcelona Highlights", start: (2025, 12, 15), end: (2025, 12, 25), price: 2800, image: "barcelona.jpg" },
    DemoVacation { country: 6, description: "Canadian Rockies", start: (2026, 1, 10), end: (2026, 1, 20), price: 4000, image: "rockies.jpg" },
    DemoVacation { country: 7, description: "Brazil Carnival", start: (2026, 2, 15), end: (2026, 2, 25), price: 4500, image: "brazil.jpg" },
    DemoVacation { country: 8, description: "Tokyo Cherry Blossoms", start: (2026, 3, 20), end: (2026, 3, 30), price: 5000, image: "tokyo.jpg" },
    DemoVacation { country: 9, description: "Mexico City Culture", start: (2026, 4, 5), end: (2026, 4, 15), price: 3300, image: "mexico.jpg" },
    DemoVacation { country: 0, description: "Dead Sea Relaxation", start: (2026, 5, 1), end: (2026, 5, 10), price: 2200, image: "deadsea.jpg" },
    DemoVacation { country: 1, description: "Miami Beach", start: (2026, 6, 10), end: (2026, 6, 20), price: 3600, image: "miami.jpg" },
];

/// What a seeding run wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub skipped: bool,
    pub roles: usize,
    pub users: usize,
    pub countries: usize,
    pub vacations: usize,
}

fn ymd((y, m, d): (i32, u32, u32)) -> Result<NaiveDate, AppError> {
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| DomainError::Internal(format!("Invalid seed date {y}-{m}-{d}")).into())
}

/// Populate an empty store.
pub async fn init_data(
    repos: &dyn RepositoryProvider,
    hasher: &dyn PasswordHasher,
    admin: &AdminSection,
    demo_catalog: bool,
) -> Result<SeedReport, AppError> {
    if !repos.roles().find_all().await?.is_empty() {
        info!("Store already initialized, skipping seed");
        return Ok(SeedReport {
            skipped: true,
            ..SeedReport::default()
        });
    }

    let mut report = SeedReport::default();

    let admin_role = repos.roles().create(ADMIN_ROLE).await?;
    repos.roles().create(DEFAULT_ROLE).await?;
    report.roles = 2;

    let password_hash = hasher
        .hash(&admin.password)
        .map_err(|e| AppError::Infra(InfraError::Crypto(e)))?;
    let user = repos
        .users()
        .create(NewUser {
            first_name: admin.first_name.clone(),
            last_name: admin.last_name.clone(),
            email: normalize_email(&admin.email),
            password_hash,
            role_id: admin_role.id,
            is_staff: true,
        })
        .await?;
    report.users = 1;
    info!(user_id = user.id, email = %user.email, "Bootstrap admin created");
    if admin.password == AdminSection::default().password {
        warn!("Bootstrap admin uses the default password, change it");
    }

    if !demo_catalog {
        return Ok(report);
    }

    let mut country_ids = Vec::with_capacity(DEMO_COUNTRIES.len());
    for name in DEMO_COUNTRIES {
        country_ids.push(repos.countries().create(name).await?.id);
    }
    report.countries = country_ids.len();

    for demo in &DEMO_VACATIONS {
        repos
            .vacations()
            .create(NewVacation {
                country_id: country_ids[demo.country],
                description: demo.description.to_string(),
                start_date: ymd(demo.start)?,
                end_date: ymd(demo.end)?,
                price: Decimal::from(demo.price),
                image_filename: demo.image.to_string(),
            })
            .await?;
        report.vacations += 1;
    }

    info!(
        countries = report.countries,
        vacations = report.vacations,
        "Demo catalog loaded"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::authorization::Identity;
    use crate::infrastructure::crypto::BcryptHasher;
    use crate::infrastructure::storage::InMemoryStorage;

    #[tokio::test]
    async fn seeds_once() {
        let repos = InMemoryStorage::new();
        let hasher = BcryptHasher::new(4);
        let admin = AdminSection::default();

        let report = init_data(&repos, &hasher, &admin, true).await.unwrap();
        assert_eq!(
            report,
            SeedReport {
                skipped: false,
                roles: 2,
                users: 1,
                countries: 10,
                vacations: 12
            }
        );

        let again = init_data(&repos, &hasher, &admin, true).await.unwrap();
        assert!(again.skipped);
        assert_eq!(repos.vacations().find_all().await.unwrap().len(), 12);
        assert_eq!(repos.users().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn bootstrap_admin_is_admin() {
        let repos = InMemoryStorage::new();
        let hasher = BcryptHasher::new(4);
        let admin = AdminSection {
            email: " Boss@Example.com ".into(),
            ..AdminSection::default()
        };
        init_data(&repos, &hasher, &admin, false).await.unwrap();

        let user = repos
            .users()
            .find_by_email("boss@example.com")
            .await
            .unwrap()
            .unwrap();
        assert!(user.is_staff);
        assert!(hasher.verify(&admin.password, &user.password_hash));
        let role = repos.roles().find_by_id(user.role_id).await.unwrap();
        assert!(Identity::resolve(&user, role.as_ref()).is_admin);
        assert!(repos.countries().find_all().await.unwrap().is_empty());
    }
}
