//! SeaORM implementation of CountryRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::{db_err, is_unique_violation};
use crate::domain::{Country, CountryRepository, DomainError, DomainResult};
use crate::infrastructure::database::entities::country;
use crate::shared::ConflictError;

fn entity_to_domain(m: country::Model) -> Country {
    Country {
        id: m.id,
        name: m.name,
    }
}

pub struct SeaOrmCountryRepository {
    db: DatabaseConnection,
}

impl SeaOrmCountryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CountryRepository for SeaOrmCountryRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Country>> {
        let model = country::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Country>> {
        let model = country::Entity::find()
            .filter(country::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Country>> {
        let models = country::Entity::find()
            .order_by_asc(country::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn create(&self, name: &str) -> DomainResult<Country> {
        let model = country::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };
        let saved = model.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::from(ConflictError::DuplicateCountry(name.to_string()))
            } else {
                db_err(e)
            }
        })?;
        Ok(entity_to_domain(saved))
    }

    async fn delete(&self, id: i32) -> DomainResult<u64> {
        let res = country::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(res.rows_affected)
    }
}
