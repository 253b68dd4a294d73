//! Catalog service: vacation and country management, listings.
//!
//! Every write is admin-only and fully validated before the first store
//! mutation, so a rejected request leaves the stores untouched.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::info;

use super::commands::{VacationFields, VacationUpdate};
use crate::application::authorization::{
    authorize, require_admin, require_identity, Identity, Operation,
};
use crate::application::validation::{
    validate_name, validate_vacation_fields, validate_vacation_write,
};
use crate::domain::{
    Country, DomainError, DomainResult, NewVacation, RepositoryProvider, Vacation,
    VacationListing,
};
use crate::shared::Clock;

pub struct CatalogService {
    repos: Arc<dyn RepositoryProvider>,
    clock: Arc<dyn Clock>,
}

impl CatalogService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, clock: Arc<dyn Clock>) -> Self {
        Self { repos, clock }
    }

    // ── Vacations: commands ─────────────────────────────────────

    pub async fn add_vacation(
        &self,
        identity: Option<&Identity>,
        fields: VacationFields,
    ) -> DomainResult<Vacation> {
        let admin = require_admin(identity)?;

        validate_vacation_fields(&fields.description, Some(&fields.image_filename))?;
        validate_vacation_write(
            fields.price,
            fields.start_date,
            fields.end_date,
            true,
            self.clock.today(),
        )?;
        self.ensure_country(fields.country_id).await?;

        let vacation = self
            .repos
            .vacations()
            .create(NewVacation {
                country_id: fields.country_id,
                description: fields.description,
                start_date: fields.start_date,
                end_date: fields.end_date,
                price: fields.price,
                image_filename: fields.image_filename,
            })
            .await?;

        info!(vacation_id = vacation.id, by = admin.user_id, "Vacation created");
        Ok(vacation)
    }

    pub async fn edit_vacation(
        &self,
        identity: Option<&Identity>,
        id: i32,
        update: VacationUpdate,
    ) -> DomainResult<Vacation> {
        let admin = require_admin(identity)?;

        validate_vacation_fields(&update.description, None)?;
        validate_vacation_write(
            update.price,
            update.start_date,
            update.end_date,
            false,
            self.clock.today(),
        )?;

        let current = self
            .repos
            .vacations()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Vacation", id))?;
        self.ensure_country(update.country_id).await?;

        let vacation = self
            .repos
            .vacations()
            .update(Vacation {
                id,
                country_id: update.country_id,
                description: update.description,
                start_date: update.start_date,
                end_date: update.end_date,
                price: update.price,
                image_filename: update
                    .image_filename
                    .filter(|name| !name.trim().is_empty())
                    .unwrap_or(current.image_filename),
            })
            .await?;

        info!(vacation_id = id, by = admin.user_id, "Vacation updated");
        Ok(vacation)
    }

    /// Removes the vacation together with every like that references it.
    pub async fn delete_vacation(&self, identity: Option<&Identity>, id: i32) -> DomainResult<()> {
        let admin = require_admin(identity)?;

        if self.repos.vacations().find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("Vacation", id));
        }

        let likes_removed = self.repos.likes().delete_by_vacation(id).await?;
        if self.repos.vacations().delete(id).await? == 0 {
            return Err(DomainError::not_found("Vacation", id));
        }

        info!(vacation_id = id, likes_removed, by = admin.user_id, "Vacation deleted");
        Ok(())
    }

    // ── Vacations: queries ──────────────────────────────────────

    /// All vacations by start date, enriched with like information for the
    /// caller. Anonymous callers see `liked_by_current_identity = false`.
    pub async fn list_vacations(
        &self,
        identity: Option<&Identity>,
    ) -> DomainResult<Vec<VacationListing>> {
        authorize(identity, Operation::ReadPublic).into_result()?;

        let mut vacations = self.repos.vacations().find_all().await?;
        vacations.sort_by_key(|v| (v.start_date, v.id));

        let country_names = self.country_names().await?;
        let like_counts = self.repos.likes().count_by_vacation().await?;
        let liked: HashSet<i32> = match identity {
            Some(identity) => self
                .repos
                .likes()
                .vacation_ids_liked_by(identity.user_id)
                .await?
                .into_iter()
                .collect(),
            None => HashSet::new(),
        };

        Ok(vacations
            .into_iter()
            .map(|v| {
                let country = country_names.get(&v.country_id).cloned().unwrap_or_default();
                let count = like_counts.get(&v.id).copied().unwrap_or(0);
                let liked = liked.contains(&v.id);
                VacationListing::new(v, country, count, liked)
            })
            .collect())
    }

    /// Detail view; requires a logged-in caller.
    pub async fn get_vacation(
        &self,
        identity: Option<&Identity>,
        id: i32,
    ) -> DomainResult<VacationListing> {
        let identity = require_identity(identity, Operation::ReadAuthenticated)?;

        let vacation = self
            .repos
            .vacations()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Vacation", id))?;
        let country = self
            .repos
            .countries()
            .find_by_id(vacation.country_id)
            .await?
            .map(|c| c.name)
            .unwrap_or_default();
        let like_count = self.repos.likes().count_for_vacation(id).await?;
        let liked = self.repos.likes().exists(identity.user_id, id).await?;

        Ok(VacationListing::new(vacation, country, like_count, liked))
    }

    // ── Countries ───────────────────────────────────────────────

    pub async fn add_country(&self, identity: Option<&Identity>, name: &str) -> DomainResult<Country> {
        let admin = require_admin(identity)?;
        validate_name("name", name)?;

        let country = self.repos.countries().create(name.trim()).await?;
        info!(country_id = country.id, name = %country.name, by = admin.user_id, "Country created");
        Ok(country)
    }

    pub async fn list_countries(&self) -> DomainResult<Vec<Country>> {
        self.repos.countries().find_all().await
    }

    /// Removes the country, its vacations and their likes.
    pub async fn delete_country(&self, identity: Option<&Identity>, id: i32) -> DomainResult<()> {
        let admin = require_admin(identity)?;

        if self.repos.countries().find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("Country", id));
        }

        let vacations = self.repos.vacations().find_by_country(id).await?;
        for vacation in &vacations {
            self.repos.likes().delete_by_vacation(vacation.id).await?;
            self.repos.vacations().delete(vacation.id).await?;
        }
        if self.repos.countries().delete(id).await? == 0 {
            return Err(DomainError::not_found("Country", id));
        }

        info!(
            country_id = id,
            vacations_removed = vacations.len(),
            by = admin.user_id,
            "Country deleted"
        );
        Ok(())
    }

    // ── Helpers ─────────────────────────────────────────────────

    async fn ensure_country(&self, country_id: i32) -> DomainResult<()> {
        match self.repos.countries().find_by_id(country_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found("Country", country_id)),
        }
    }

    async fn country_names(&self) -> DomainResult<HashMap<i32, String>> {
        Ok(self
            .repos
            .countries()
            .find_all()
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;
    use crate::application::testing::{date, fixture, Fixture};
    use crate::domain::Like;
    use crate::shared::{ConflictError, ErrorKind, ValidationError};

    fn fields(country_id: i32, start: NaiveDate, end: NaiveDate, price: i64) -> VacationFields {
        VacationFields {
            country_id,
            description: "X".into(),
            start_date: start,
            end_date: end,
            price: Decimal::from(price),
            image_filename: "x.jpg".into(),
        }
    }

    fn update_from(v: &Vacation, image: Option<&str>) -> VacationUpdate {
        VacationUpdate {
            country_id: v.country_id,
            description: v.description.clone(),
            start_date: v.start_date,
            end_date: v.end_date,
            price: v.price,
            image_filename: image.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn admin_adds_vacation_member_is_forbidden() {
        let Fixture {
            services,
            admin,
            member,
            france,
            ..
        } = fixture().await;
        let f = fields(france.id, date(2099, 1, 1), date(2099, 1, 10), 500);

        let vacation = services
            .catalog
            .add_vacation(Some(&admin), f.clone())
            .await
            .unwrap();
        assert_eq!(vacation.price, Decimal::from(500));
        assert_eq!(vacation.country_id, france.id);

        let err = services
            .catalog
            .add_vacation(Some(&member), f.clone())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);

        let err = services.catalog.add_vacation(None, f).await.unwrap_err();
        assert_eq!(err, DomainError::Unauthenticated);
    }

    #[tokio::test]
    async fn forbidden_wins_over_invalid_input() {
        let Fixture {
            services,
            member,
            france,
            ..
        } = fixture().await;
        let f = fields(france.id, date(2000, 1, 10), date(2000, 1, 1), -1);
        let err = services
            .catalog
            .add_vacation(Some(&member), f)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn add_rejects_invalid_fields_without_writing() {
        let Fixture {
            services,
            repos,
            admin,
            france,
            today,
            ..
        } = fixture().await;

        let cases = [
            fields(france.id, date(2099, 1, 1), date(2099, 1, 10), 10_001),
            fields(france.id, date(2099, 1, 10), date(2099, 1, 1), 100),
            fields(france.id, today.pred_opt().unwrap(), date(2099, 1, 1), 100),
        ];
        for f in cases {
            let err = services
                .catalog
                .add_vacation(Some(&admin), f)
                .await
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
        }

        let err = services
            .catalog
            .add_vacation(Some(&admin), fields(999, date(2099, 1, 1), date(2099, 1, 2), 100))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::not_found("Country", 999));

        assert!(repos.vacations().find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn edit_keeps_image_when_none() {
        let Fixture {
            services,
            admin,
            france,
            japan,
            ..
        } = fixture().await;
        let original = services
            .catalog
            .add_vacation(
                Some(&admin),
                fields(france.id, date(2099, 1, 1), date(2099, 1, 10), 500),
            )
            .await
            .unwrap();

        let mut update = update_from(&original, None);
        update.description = "Paris Adventure".into();
        update.price = Decimal::new(99_950, 2);
        update.country_id = japan.id;
        let edited = services
            .catalog
            .edit_vacation(Some(&admin), original.id, update)
            .await
            .unwrap();
        assert_eq!(edited.image_filename, "x.jpg");
        assert_eq!(edited.description, "Paris Adventure");
        assert_eq!(edited.price, Decimal::new(99_950, 2));
        assert_eq!(edited.country_id, japan.id);

        let edited = services
            .catalog
            .edit_vacation(Some(&admin), original.id, update_from(&edited, Some("paris.jpg")))
            .await
            .unwrap();
        assert_eq!(edited.image_filename, "paris.jpg");
    }

    #[tokio::test]
    async fn edit_keeps_image_when_blank() {
        let Fixture {
            services,
            admin,
            france,
            ..
        } = fixture().await;
        let original = services
            .catalog
            .add_vacation(
                Some(&admin),
                fields(france.id, date(2099, 1, 1), date(2099, 1, 10), 500),
            )
            .await
            .unwrap();

        for blank in ["", "   "] {
            let mut update = update_from(&original, Some(blank));
            update.description = "Renamed".into();
            let edited = services
                .catalog
                .edit_vacation(Some(&admin), original.id, update)
                .await
                .unwrap();
            assert_eq!(edited.image_filename, "x.jpg");
            assert_eq!(edited.description, "Renamed");
        }

        let mut blank_add = fields(france.id, date(2099, 2, 1), date(2099, 2, 2), 100);
        blank_add.image_filename = " ".into();
        let err = services
            .catalog
            .add_vacation(Some(&admin), blank_add)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[tokio::test]
    async fn edit_allows_past_start_but_not_bad_order() {
        let Fixture {
            services,
            repos,
            admin,
            france,
            today,
            ..
        } = fixture().await;
        let started = repos
            .vacations()
            .create(NewVacation {
                country_id: france.id,
                description: "Started".into(),
                start_date: today.pred_opt().unwrap(),
                end_date: today.succ_opt().unwrap(),
                price: Decimal::from(100),
                image_filename: "s.jpg".into(),
            })
            .await
            .unwrap();

        let mut update = update_from(&started, None);
        update.price = Decimal::from(150);
        assert!(services
            .catalog
            .edit_vacation(Some(&admin), started.id, update.clone())
            .await
            .is_ok());

        update.end_date = date(2000, 1, 1);
        let err = services
            .catalog
            .edit_vacation(Some(&admin), started.id, update)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::InvalidDateOrder { .. })
        ));
    }

    #[tokio::test]
    async fn edit_missing_vacation_is_not_found() {
        let Fixture {
            services,
            admin,
            member,
            france,
            ..
        } = fixture().await;
        let update = VacationUpdate {
            country_id: france.id,
            description: "X".into(),
            start_date: date(2099, 1, 1),
            end_date: date(2099, 1, 2),
            price: Decimal::from(1),
            image_filename: None,
        };
        let err = services
            .catalog
            .edit_vacation(Some(&admin), 404, update.clone())
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::not_found("Vacation", 404));

        let err = services
            .catalog
            .edit_vacation(Some(&member), 404, update)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn delete_cascades_likes() {
        let Fixture {
            services,
            repos,
            admin,
            member,
            france,
            ..
        } = fixture().await;
        let vacation = services
            .catalog
            .add_vacation(
                Some(&admin),
                fields(france.id, date(2099, 1, 1), date(2099, 1, 10), 500),
            )
            .await
            .unwrap();
        services.affinity.like(Some(&member), vacation.id).await.unwrap();
        services.affinity.like(Some(&admin), vacation.id).await.unwrap();

        let err = services
            .catalog
            .delete_vacation(Some(&member), vacation.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);

        services
            .catalog
            .delete_vacation(Some(&admin), vacation.id)
            .await
            .unwrap();
        assert_eq!(repos.likes().count_for_vacation(vacation.id).await.unwrap(), 0);
        assert_eq!(repos.likes().count_all().await.unwrap(), 0);

        let err = services
            .catalog
            .delete_vacation(Some(&admin), vacation.id)
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::not_found("Vacation", vacation.id));
    }

    #[tokio::test]
    async fn listing_is_ordered_and_enriched() {
        let Fixture {
            services,
            repos,
            admin,
            member,
            france,
            japan,
            ..
        } = fixture().await;
        let later = services
            .catalog
            .add_vacation(Some(&admin), fields(japan.id, date(2099, 3, 1), date(2099, 3, 5), 300))
            .await
            .unwrap();
        let sooner = services
            .catalog
            .add_vacation(Some(&admin), fields(france.id, date(2099, 1, 1), date(2099, 1, 5), 100))
            .await
            .unwrap();
        repos.likes().create(Like::new(member.user_id, later.id)).await.unwrap();
        repos.likes().create(Like::new(admin.user_id, later.id)).await.unwrap();

        let listing = services.catalog.list_vacations(Some(&member)).await.unwrap();
        let ids: Vec<_> = listing.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![sooner.id, later.id]);
        assert_eq!(listing[0].country_name, "France");
        assert_eq!(listing[0].like_count, 0);
        assert!(!listing[0].liked_by_current_identity);
        assert_eq!(listing[1].country_name, "Japan");
        assert_eq!(listing[1].like_count, 2);
        assert!(listing[1].liked_by_current_identity);

        let anonymous = services.catalog.list_vacations(None).await.unwrap();
        assert!(anonymous.iter().all(|l| !l.liked_by_current_identity));
        assert_eq!(anonymous[1].like_count, 2);
    }

    #[tokio::test]
    async fn detail_requires_login() {
        let Fixture {
            services,
            admin,
            member,
            france,
            ..
        } = fixture().await;
        let vacation = services
            .catalog
            .add_vacation(Some(&admin), fields(france.id, date(2099, 1, 1), date(2099, 1, 5), 100))
            .await
            .unwrap();

        assert_eq!(
            services.catalog.get_vacation(None, vacation.id).await.unwrap_err(),
            DomainError::Unauthenticated
        );

        services.affinity.like(Some(&member), vacation.id).await.unwrap();
        let detail = services
            .catalog
            .get_vacation(Some(&member), vacation.id)
            .await
            .unwrap();
        assert_eq!(detail.country_name, "France");
        assert_eq!(detail.like_count, 1);
        assert!(detail.liked_by_current_identity);

        assert_eq!(
            services.catalog.get_vacation(Some(&member), 404).await.unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[tokio::test]
    async fn countries_are_unique_and_cascade() {
        let Fixture {
            services,
            repos,
            admin,
            member,
            france,
            ..
        } = fixture().await;

        let err = services
            .catalog
            .add_country(Some(&admin), "France")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::Conflict(ConflictError::DuplicateCountry("France".into()))
        );
        assert_eq!(
            services
                .catalog
                .add_country(Some(&member), "Peru")
                .await
                .unwrap_err()
                .kind(),
            ErrorKind::Forbidden
        );

        let peru = services.catalog.add_country(Some(&admin), " Peru ").await.unwrap();
        assert_eq!(peru.name, "Peru");
        let names: Vec<_> = services
            .catalog
            .list_countries()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["France", "Japan", "Peru"]);

        let vacation = services
            .catalog
            .add_vacation(Some(&admin), fields(france.id, date(2099, 1, 1), date(2099, 1, 5), 100))
            .await
            .unwrap();
        services.affinity.like(Some(&member), vacation.id).await.unwrap();

        services
            .catalog
            .delete_country(Some(&admin), france.id)
            .await
            .unwrap();
        assert!(repos.vacations().find_by_id(vacation.id).await.unwrap().is_none());
        assert_eq!(repos.likes().count_all().await.unwrap(), 0);
        assert_eq!(
            services
                .catalog
                .delete_country(Some(&admin), france.id)
                .await
                .unwrap_err(),
            DomainError::not_found("Country", france.id)
        );
    }
}
