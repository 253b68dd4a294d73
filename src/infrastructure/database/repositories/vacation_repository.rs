//! SeaORM implementation of VacationRepository

use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};

use super::db_err;
use crate::domain::{DomainError, DomainResult, NewVacation, Vacation, VacationRepository};
use crate::infrastructure::database::entities::vacation;

// ── Conversion helpers ──────────────────────────────────────────

pub(crate) fn price_to_cents(price: Decimal) -> DomainResult<i64> {
    (price.round_dp(2) * Decimal::ONE_HUNDRED)
        .to_i64()
        .ok_or_else(|| DomainError::Internal(format!("Price not storable: {}", price)))
}

pub(crate) fn cents_to_price(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn entity_to_domain(m: vacation::Model) -> Vacation {
    Vacation {
        id: m.id,
        country_id: m.country_id,
        description: m.description,
        start_date: m.start_date,
        end_date: m.end_date,
        price: cents_to_price(m.price_cents),
        image_filename: m.image_filename,
    }
}

fn write_err(e: DbErr, country_id: i32) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            DomainError::not_found("Country", country_id)
        }
        _ => db_err(e),
    }
}

// ── SeaOrmVacationRepository ────────────────────────────────────

pub struct SeaOrmVacationRepository {
    db: DatabaseConnection,
}

impl SeaOrmVacationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VacationRepository for SeaOrmVacationRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Vacation>> {
        let model = vacation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Vacation>> {
        let models = vacation::Entity::find()
            .order_by_asc(vacation::Column::StartDate)
            .order_by_asc(vacation::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_country(&self, country_id: i32) -> DomainResult<Vec<Vacation>> {
        let models = vacation::Entity::find()
            .filter(vacation::Column::CountryId.eq(country_id))
            .order_by_asc(vacation::Column::StartDate)
            .order_by_asc(vacation::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn create(&self, v: NewVacation) -> DomainResult<Vacation> {
        let country_id = v.country_id;
        let model = vacation::ActiveModel {
            country_id: Set(v.country_id),
            description: Set(v.description),
            start_date: Set(v.start_date),
            end_date: Set(v.end_date),
            price_cents: Set(price_to_cents(v.price)?),
            image_filename: Set(v.image_filename),
            ..Default::default()
        };
        let saved = model
            .insert(&self.db)
            .await
            .map_err(|e| write_err(e, country_id))?;
        Ok(entity_to_domain(saved))
    }

    async fn update(&self, v: Vacation) -> DomainResult<Vacation> {
        let exists = vacation::Entity::find_by_id(v.id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .is_some();
        if !exists {
            return Err(DomainError::not_found("Vacation", v.id));
        }

        let country_id = v.country_id;
        let model = vacation::ActiveModel {
            id: Set(v.id),
            country_id: Set(v.country_id),
            description: Set(v.description),
            start_date: Set(v.start_date),
            end_date: Set(v.end_date),
            price_cents: Set(price_to_cents(v.price)?),
            image_filename: Set(v.image_filename),
        };
        let saved = model
            .update(&self.db)
            .await
            .map_err(|e| write_err(e, country_id))?;
        Ok(entity_to_domain(saved))
    }

    async fn delete(&self, id: i32) -> DomainResult<u64> {
        let res = vacation::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(res.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_round_trip_through_cents() {
        let price = Decimal::new(249_999, 2);
        let cents = price_to_cents(price).unwrap();
        assert_eq!(cents, 249_999);
        assert_eq!(cents_to_price(cents), price);
        assert_eq!(price_to_cents(Decimal::from(10_000)).unwrap(), 1_000_000);
        assert_eq!(cents_to_price(0), Decimal::ZERO);
    }
}
