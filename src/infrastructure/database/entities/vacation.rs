//! Vacation entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vacations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub country_id: i32,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub start_date: Date,

    pub end_date: Date,

    /// Price in cents
    pub price_cents: i64,

    pub image_filename: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::country::Entity",
        from = "Column::CountryId",
        to = "super::country::Column::Id",
        on_delete = "Cascade"
    )]
    Country,
    #[sea_orm(has_many = "super::like::Entity")]
    Likes,
}

impl Related<super::country::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Country.def()
    }
}

impl Related<super::like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Likes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
