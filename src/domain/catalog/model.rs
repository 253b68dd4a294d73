//! Country and Vacation domain entities

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Upper price bound, inclusive.
pub const MAX_PRICE: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    pub id: i32,
    pub name: String,
}

/// Where a vacation sits relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VacationPeriod {
    Past,
    Ongoing,
    Future,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vacation {
    pub id: i32,
    pub country_id: i32,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: Decimal,
    pub image_filename: String,
}

impl Vacation {
    /// Every vacation falls into exactly one period for a given date.
    pub fn period(&self, as_of: NaiveDate) -> VacationPeriod {
        if self.end_date < as_of {
            VacationPeriod::Past
        } else if self.start_date > as_of {
            VacationPeriod::Future
        } else {
            VacationPeriod::Ongoing
        }
    }
}

/// Insert payload for the catalog store.
#[derive(Debug, Clone)]
pub struct NewVacation {
    pub country_id: i32,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: Decimal,
    pub image_filename: String,
}

/// Vacation as shown in listings and detail views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VacationListing {
    pub id: i32,
    pub country_id: i32,
    pub country_name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: Decimal,
    pub image_filename: String,
    pub like_count: u64,
    pub liked_by_current_identity: bool,
}

impl VacationListing {
    pub fn new(vacation: Vacation, country_name: String, like_count: u64, liked: bool) -> Self {
        Self {
            id: vacation.id,
            country_id: vacation.country_id,
            country_name,
            description: vacation.description,
            start_date: vacation.start_date,
            end_date: vacation.end_date,
            price: vacation.price,
            image_filename: vacation.image_filename,
            like_count,
            liked_by_current_identity: liked,
        }
    }
}
