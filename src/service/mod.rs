//! Item service: the application-facing API over the item store.
//!
//! The [`ItemService`] trait is the capability set the presentation layer
//! depends on. [`ToDoListService`] implements it on top of SeaORM and the
//! [`crate::repositories::ItemRepository`]. The service holds no state between
//! calls apart from the connection handle.

pub mod error;
pub mod query;
pub mod todo_list;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::item;

pub use error::ItemError;
pub use query::{ItemQuery, OrderBy};
pub use todo_list::ToDoListService;

/// A to-do item as seen by the application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub title: String,
    pub is_completed: bool,
    pub color: String,
}

/// Input for creating an item. The store assigns the id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewItem {
    pub title: String,
    /// Falls back to the default color when `None` or blank.
    pub color: Option<String>,
    pub is_completed: bool,
}

impl NewItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }
}

impl From<item::Model> for Item {
    fn from(model: item::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            is_completed: model.is_completed,
            color: model.color,
        }
    }
}

/// Operations available on the to-do list.
#[async_trait]
pub trait ItemService: Send + Sync {
    /// Store a new item and return it with its assigned id.
    async fn add(&self, item: NewItem) -> Result<Item, ItemError>;

    /// Fetch one item.
    async fn get_item(&self, id: Uuid) -> Result<Item, ItemError>;

    /// Replace title, color and completion of an existing item.
    async fn edit(&self, item: Item) -> Result<Item, ItemError>;

    /// Permanently remove an item.
    async fn delete(&self, id: Uuid) -> Result<(), ItemError>;

    /// Filter, sort, then paginate.
    async fn get_items(&self, query: ItemQuery) -> Result<Vec<Item>, ItemError>;

    /// Number of items matching the query's filters, ignoring pagination.
    async fn count_items(&self, query: &ItemQuery) -> Result<u64, ItemError>;
}
