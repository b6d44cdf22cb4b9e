//! Presentation facade over the item service.
//!
//! Handlers talk to [`ItemsController`], which turns page-level requests into
//! service calls and returns flat [`ItemView`] projections.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::service::{Item, ItemError, ItemQuery, ItemService, NewItem, OrderBy};

/// What a page shows for one item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub id: Uuid,
    pub title: String,
    pub is_completed: bool,
    pub color: String,
}

impl From<Item> for ItemView {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            title: item.title,
            is_completed: item.is_completed,
            color: item.color,
        }
    }
}

/// Title sort requested from the index page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse `asc`/`desc`, ignoring case and surrounding whitespace.
    /// Anything else means "no sort".
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl From<SortDirection> for OrderBy {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => OrderBy::TitleAsc,
            SortDirection::Desc => OrderBy::TitleDesc,
        }
    }
}

/// Index page parameters after parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListParams {
    pub sort: Option<SortDirection>,
    /// 1-based page number
    pub page: u64,
    pub completed: Option<bool>,
    pub color: Option<String>,
    pub title: Option<String>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            sort: None,
            page: 1,
            completed: None,
            color: None,
            title: None,
        }
    }
}

/// One page of the index listing.
#[derive(Clone, Debug)]
pub struct ItemPage {
    pub items: Vec<ItemView>,
    pub page: u64,
    pub page_size: u64,
    /// Items matching the filters across all pages
    pub total: u64,
}

impl ItemPage {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page.saturating_mul(self.page_size) < self.total
    }
}

#[derive(Clone)]
pub struct ItemsController {
    service: Arc<dyn ItemService>,
    page_size: u64,
}

impl ItemsController {
    pub fn new(service: Arc<dyn ItemService>, page_size: u64) -> Self {
        Self { service, page_size }
    }

    /// First page of items, optionally sorted by title. Uses the configured
    /// page size, like [`Self::list_page`].
    pub async fn list_items(&self, sort: Option<SortDirection>) -> Result<Vec<ItemView>, ItemError> {
        let query = ItemQuery::new()
            .order_by(sort.map(OrderBy::from).unwrap_or_default())
            .limit(self.page_size);
        let items = self.service.get_items(query).await?;
        Ok(items.into_iter().map(ItemView::from).collect())
    }

    /// A filtered, sorted page of items for the index.
    pub async fn list_page(&self, params: &ListParams) -> Result<ItemPage, ItemError> {
        let page = params.page.max(1);
        let mut query = ItemQuery::new()
            .order_by(params.sort.map(OrderBy::from).unwrap_or_default())
            .offset((page - 1).saturating_mul(self.page_size))
            .limit(self.page_size);
        query.completed = params.completed;
        query.color = params.color.clone();
        query.title = params.title.clone();

        let total = self.service.count_items(&query).await?;
        let items = self.service.get_items(query).await?;

        Ok(ItemPage {
            items: items.into_iter().map(ItemView::from).collect(),
            page,
            page_size: self.page_size,
            total,
        })
    }

    pub async fn get_item(&self, id: Uuid) -> Result<ItemView, ItemError> {
        Ok(self.service.get_item(id).await?.into())
    }

    pub async fn create_item(&self, title: String, color: Option<String>) -> Result<ItemView, ItemError> {
        let item = self
            .service
            .add(NewItem {
                title,
                color,
                is_completed: false,
            })
            .await?;
        Ok(item.into())
    }

    pub async fn update_item(
        &self,
        id: Uuid,
        title: String,
        color: String,
        is_completed: bool,
    ) -> Result<ItemView, ItemError> {
        let item = self
            .service
            .edit(Item {
                id,
                title,
                is_completed,
                color,
            })
            .await?;
        Ok(item.into())
    }

    pub async fn delete_item(&self, id: Uuid) -> Result<(), ItemError> {
        self.service.delete(id).await
    }
}
