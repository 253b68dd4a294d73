//! SeaORM implementation of LikeRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect, Set, SqlErr,
};

use super::{db_err, is_unique_violation};
use crate::domain::{DomainError, DomainResult, Like, LikeRepository};
use crate::infrastructure::database::entities::like;
use crate::shared::ConflictError;

pub struct SeaOrmLikeRepository {
    db: DatabaseConnection,
}

impl SeaOrmLikeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LikeRepository for SeaOrmLikeRepository {
    async fn exists(&self, user_id: i32, vacation_id: i32) -> DomainResult<bool> {
        let model = like::Entity::find_by_id((user_id, vacation_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.is_some())
    }

    async fn create(&self, l: Like) -> DomainResult<()> {
        let model = like::ActiveModel {
            user_id: Set(l.user_id),
            vacation_id: Set(l.vacation_id),
        };
        like::Entity::insert(model).exec(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::from(ConflictError::AlreadyLiked {
                    user_id: l.user_id,
                    vacation_id: l.vacation_id,
                })
            } else if matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) {
                DomainError::not_found("Vacation", l.vacation_id)
            } else {
                db_err(e)
            }
        })?;
        Ok(())
    }

    async fn delete(&self, user_id: i32, vacation_id: i32) -> DomainResult<u64> {
        let res = like::Entity::delete_by_id((user_id, vacation_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(res.rows_affected)
    }

    async fn delete_by_vacation(&self, vacation_id: i32) -> DomainResult<u64> {
        let res = like::Entity::delete_many()
            .filter(like::Column::VacationId.eq(vacation_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(res.rows_affected)
    }

    async fn count_all(&self) -> DomainResult<u64> {
        like::Entity::find().count(&self.db).await.map_err(db_err)
    }

    async fn count_for_vacation(&self, vacation_id: i32) -> DomainResult<u64> {
        like::Entity::find()
            .filter(like::Column::VacationId.eq(vacation_id))
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn count_by_vacation(&self) -> DomainResult<HashMap<i32, u64>> {
        let rows: Vec<(i32, i64)> = like::Entity::find()
            .select_only()
            .column(like::Column::VacationId)
            .column_as(Expr::col(like::Column::UserId).count(), "likes")
            .group_by(like::Column::VacationId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows
            .into_iter()
            .map(|(vacation_id, likes)| (vacation_id, likes.max(0) as u64))
            .collect())
    }

    async fn vacation_ids_liked_by(&self, user_id: i32) -> DomainResult<Vec<i32>> {
        like::Entity::find()
            .select_only()
            .column(like::Column::VacationId)
            .filter(like::Column::UserId.eq(user_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_err)
    }
}
