use async_trait::async_trait;
use log::{debug, info, warn};
use sea_orm::{ActiveModelBehavior, ActiveValue, DatabaseConnection};
use uuid::Uuid;

use crate::constants::{DEFAULT_COLOR, ERROR_TITLE_REQUIRED};
use crate::entities::item::{self, fold_title};
use crate::repositories::ItemRepository;
use crate::storage::LocalStorage;

use super::{Item, ItemError, ItemQuery, ItemService, NewItem};

/// [`ItemService`] backed by the SQLite store.
#[derive(Clone, Debug)]
pub struct ToDoListService {
    conn: DatabaseConnection,
}

impl ToDoListService {
    pub fn new(storage: &LocalStorage) -> Self {
        Self {
            conn: storage.conn.clone(),
        }
    }
}

#[async_trait]
impl ItemService for ToDoListService {
    async fn add(&self, item: NewItem) -> Result<Item, ItemError> {
        validate_title(&item.title)?;

        let mut model = item::ActiveModel::new();
        model.title = ActiveValue::Set(item.title);
        model.color = ActiveValue::Set(normalize_color(item.color.as_deref()));
        model.is_completed = ActiveValue::Set(item.is_completed);

        let stored = ItemRepository::insert(&self.conn, model).await?;
        info!("Added item {} ({})", stored.id, stored.title);

        Ok(stored.into())
    }

    async fn get_item(&self, id: Uuid) -> Result<Item, ItemError> {
        ItemRepository::get_by_id(&self.conn, &id)
            .await?
            .map(Item::from)
            .ok_or(ItemError::NotFound(id))
    }

    async fn edit(&self, item: Item) -> Result<Item, ItemError> {
        validate_title(&item.title)?;

        let current = ItemRepository::get_by_id(&self.conn, &item.id)
            .await?
            .ok_or(ItemError::NotFound(item.id))?;

        let updated = item::Model {
            id: item.id,
            title_folded: fold_title(&item.title),
            title: item.title,
            is_completed: item.is_completed,
            color: normalize_color(Some(&item.color)),
            version: current.version,
        };

        let rows = ItemRepository::update_versioned(&self.conn, &updated).await?;
        ensure_written(rows, updated.id)?;
        info!("Updated item {} (completed: {})", updated.id, updated.is_completed);

        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ItemError> {
        let rows = ItemRepository::delete(&self.conn, &id).await?;
        if rows == 0 {
            return Err(ItemError::NotFound(id));
        }
        info!("Deleted item {}", id);
        Ok(())
    }

    async fn get_items(&self, query: ItemQuery) -> Result<Vec<Item>, ItemError> {
        let items = ItemRepository::query(&self.conn, &query).await?;
        debug!("Query {:?} returned {} items", query, items.len());
        Ok(items.into_iter().map(Item::from).collect())
    }

    async fn count_items(&self, query: &ItemQuery) -> Result<u64, ItemError> {
        Ok(ItemRepository::count_matching(&self.conn, query).await?)
    }
}

fn validate_title(title: &str) -> Result<(), ItemError> {
    if title.trim().is_empty() {
        return Err(ItemError::Validation(ERROR_TITLE_REQUIRED.to_string()));
    }
    Ok(())
}

fn normalize_color(color: Option<&str>) -> String {
    match color {
        Some(c) if !c.trim().is_empty() => c.to_string(),
        _ => DEFAULT_COLOR.to_string(),
    }
}

/// A versioned update that touched no row lost a race with another writer.
fn ensure_written(rows: u64, id: Uuid) -> Result<(), ItemError> {
    if rows == 0 {
        warn!("Concurrent modification detected for item {}", id);
        return Err(ItemError::ConcurrencyConflict(id));
    }
    Ok(())
}
