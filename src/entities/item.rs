use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::DEFAULT_COLOR;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "todo_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    /// `title` with Unicode case folded, used for case-insensitive search and sort.
    pub title_folded: String,
    pub is_completed: bool,
    pub color: String,
    /// Optimistic concurrency token, bumped on every update.
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {
    /// New rows get a fresh id and the column defaults.
    fn new() -> Self {
        Self {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::NotSet,
            title_folded: ActiveValue::NotSet,
            is_completed: ActiveValue::Set(false),
            color: ActiveValue::Set(DEFAULT_COLOR.to_string()),
            version: ActiveValue::Set(0),
        }
    }
}

/// Case-fold a title for storage in `title_folded` and for search patterns.
pub fn fold_title(title: &str) -> String {
    title.to_uppercase()
}
