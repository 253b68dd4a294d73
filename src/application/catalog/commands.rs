//! Catalog command payloads

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Fields of a vacation being created.
#[derive(Debug, Clone, Deserialize)]
pub struct VacationFields {
    pub country_id: i32,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: Decimal,
    pub image_filename: String,
}

/// Replacement fields for an existing vacation.
///
/// Every field overwrites the stored value, except `image_filename`:
/// `None` keeps the current image.
#[derive(Debug, Clone, Deserialize)]
pub struct VacationUpdate {
    pub country_id: i32,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: Decimal,
    #[serde(default)]
    pub image_filename: Option<String>,
}
