use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LIMIT;

/// Sort field and direction for item queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderBy {
    /// Storage order.
    #[default]
    None,
    TitleAsc,
    TitleDesc,
    IdAsc,
    IdDesc,
}

/// Parameters for [`super::ItemService::get_items`].
///
/// Filters are combined with AND. Blank `color`/`title` filters are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemQuery {
    pub order_by: OrderBy,
    pub offset: u64,
    pub limit: u64,
    /// Exact match on the completion flag.
    pub completed: Option<bool>,
    /// Exact, case-sensitive color match.
    pub color: Option<String>,
    /// Case-insensitive substring match on the title.
    pub title: Option<String>,
}

impl Default for ItemQuery {
    fn default() -> Self {
        Self {
            order_by: OrderBy::None,
            offset: 0,
            limit: DEFAULT_LIMIT,
            completed: None,
            color: None,
            title: None,
        }
    }
}

impl ItemQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = order_by;
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The color filter, if it is set and not blank.
    pub fn color_filter(&self) -> Option<&str> {
        non_blank(self.color.as_deref())
    }

    /// The title filter, if it is set and not blank.
    pub fn title_filter(&self) -> Option<&str> {
        non_blank(self.title.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
