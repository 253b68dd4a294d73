//! Statistics for the admin dashboard.
//!
//! Read-only, but restricted to admins like every other operational view.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::application::authorization::{require_admin, Identity};
use crate::domain::{Country, DomainResult, RepositoryProvider, Vacation, VacationPeriod};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VacationCounts {
    pub past: u64,
    pub ongoing: u64,
    pub future: u64,
}

impl VacationCounts {
    pub fn total(&self) -> u64 {
        self.past + self.ongoing + self.future
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationLikes {
    pub destination: String,
    pub likes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub as_of: NaiveDate,
    pub vacations: VacationCounts,
    pub total_users: u64,
    pub total_likes: u64,
    pub likes_by_destination: Vec<DestinationLikes>,
}

/// Buckets vacations relative to `as_of`.
pub fn count_by_period(vacations: &[Vacation], as_of: NaiveDate) -> VacationCounts {
    vacations
        .iter()
        .fold(VacationCounts::default(), |mut counts, v| {
            match v.period(as_of) {
                VacationPeriod::Past => counts.past += 1,
                VacationPeriod::Ongoing => counts.ongoing += 1,
                VacationPeriod::Future => counts.future += 1,
            }
            counts
        })
}

/// Sums likes per destination (country name), ordered by name.
/// Destinations nobody liked are left out.
pub fn group_likes_by_destination(
    vacations: &[Vacation],
    countries: &[Country],
    likes_per_vacation: &HashMap<i32, u64>,
) -> Vec<DestinationLikes> {
    let country_names: HashMap<i32, &str> =
        countries.iter().map(|c| (c.id, c.name.as_str())).collect();

    let mut per_destination: BTreeMap<&str, u64> = BTreeMap::new();
    for vacation in vacations {
        let likes = likes_per_vacation.get(&vacation.id).copied().unwrap_or(0);
        if likes == 0 {
            continue;
        }
        if let Some(name) = country_names.get(&vacation.country_id) {
            *per_destination.entry(name).or_default() += likes;
        }
    }

    per_destination
        .into_iter()
        .map(|(destination, likes)| DestinationLikes {
            destination: destination.to_string(),
            likes,
        })
        .collect()
}

pub struct StatsService {
    repos: Arc<dyn RepositoryProvider>,
}

impl StatsService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn vacation_counts(
        &self,
        identity: Option<&Identity>,
        as_of: NaiveDate,
    ) -> DomainResult<VacationCounts> {
        require_admin(identity)?;
        let vacations = self.repos.vacations().find_all().await?;
        Ok(count_by_period(&vacations, as_of))
    }

    pub async fn total_users(&self, identity: Option<&Identity>) -> DomainResult<u64> {
        require_admin(identity)?;
        self.repos.users().count().await
    }

    pub async fn total_likes(&self, identity: Option<&Identity>) -> DomainResult<u64> {
        require_admin(identity)?;
        self.repos.likes().count_all().await
    }

    pub async fn likes_by_destination(
        &self,
        identity: Option<&Identity>,
    ) -> DomainResult<Vec<DestinationLikes>> {
        require_admin(identity)?;
        let vacations = self.repos.vacations().find_all().await?;
        let countries = self.repos.countries().find_all().await?;
        let likes = self.repos.likes().count_by_vacation().await?;
        Ok(group_likes_by_destination(&vacations, &countries, &likes))
    }

    /// Everything the dashboard shows, in one call.
    pub async fn summary(
        &self,
        identity: Option<&Identity>,
        as_of: NaiveDate,
    ) -> DomainResult<StatsSummary> {
        require_admin(identity)?;
        let vacations = self.repos.vacations().find_all().await?;
        let countries = self.repos.countries().find_all().await?;
        let likes = self.repos.likes().count_by_vacation().await?;

        Ok(StatsSummary {
            as_of,
            vacations: count_by_period(&vacations, as_of),
            total_users: self.repos.users().count().await?,
            total_likes: self.repos.likes().count_all().await?,
            likes_by_destination: group_likes_by_destination(&vacations, &countries, &likes),
        })
    }
}
