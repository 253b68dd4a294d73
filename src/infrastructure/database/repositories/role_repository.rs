//! SeaORM implementation of RoleRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::{db_err, is_unique_violation};
use crate::domain::{DomainError, DomainResult, Role, RoleRepository};
use crate::infrastructure::database::entities::role;
use crate::shared::ConflictError;

fn entity_to_domain(m: role::Model) -> Role {
    Role {
        id: m.id,
        name: m.name,
    }
}

pub struct SeaOrmRoleRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleRepository for SeaOrmRoleRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Role>> {
        let model = role::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Role>> {
        let model = role::Entity::find()
            .filter(role::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Role>> {
        let models = role::Entity::find()
            .order_by_asc(role::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn create(&self, name: &str) -> DomainResult<Role> {
        let model = role::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };
        let saved = model.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::from(ConflictError::DuplicateRole(name.to_string()))
            } else {
                db_err(e)
            }
        })?;
        Ok(entity_to_domain(saved))
    }
}
