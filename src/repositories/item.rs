//! Item repository for database operations.

use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};
use uuid::Uuid;

use crate::entities::item::{self, fold_title};
use crate::service::{ItemQuery, OrderBy};

const LIKE_ESCAPE: char = '!';

/// SQLite binds OFFSET/LIMIT as signed 64-bit integers.
const MAX_SQL_INT: u64 = i64::MAX as u64;

/// Repository for to-do item database operations.
pub struct ItemRepository;

impl ItemRepository {
    /// Get a single item by id.
    pub async fn get_by_id<C>(conn: &C, id: &Uuid) -> Result<Option<item::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        item::Entity::find_by_id(*id).one(conn).await
    }

    /// Run a filtered, ordered, paginated query.
    ///
    /// Filters are applied first, then ordering, then `offset`/`limit`, so a
    /// page always contains matching items. An offset past the end yields an
    /// empty page.
    pub async fn query<C>(conn: &C, query: &ItemQuery) -> Result<Vec<item::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        let select = match query.order_by {
            OrderBy::None => Self::filtered(query),
            OrderBy::TitleAsc => Self::filtered(query)
                .order_by_asc(item::Column::TitleFolded)
                .order_by_asc(item::Column::Title),
            OrderBy::TitleDesc => Self::filtered(query)
                .order_by_desc(item::Column::TitleFolded)
                .order_by_desc(item::Column::Title),
            OrderBy::IdAsc => Self::filtered(query).order_by_asc(item::Column::Id),
            OrderBy::IdDesc => Self::filtered(query).order_by_desc(item::Column::Id),
        };

        select
            .offset(query.offset.min(MAX_SQL_INT))
            .limit(query.limit.min(MAX_SQL_INT))
            .all(conn)
            .await
    }

    /// Count the items matching the query's filters, ignoring pagination.
    pub async fn count_matching<C>(conn: &C, query: &ItemQuery) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        Self::filtered(query).count(conn).await
    }

    /// Insert a new item. The folded title is derived from `title`.
    pub async fn insert<C>(conn: &C, mut item: item::ActiveModel) -> Result<item::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(title) = &item.title {
            item.title_folded = ActiveValue::Set(fold_title(title));
        }
        item.insert(conn).await
    }

    /// Overwrite title, color and completion of `item.id`, but only while the
    /// stored version still equals `item.version`. The version is bumped on success.
    ///
    /// Returns the number of rows written: 0 means the row was changed or removed.
    pub async fn update_versioned<C>(conn: &C, item: &item::Model) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let result = item::Entity::update_many()
            .col_expr(item::Column::Title, Expr::value(item.title.clone()))
            .col_expr(item::Column::TitleFolded, Expr::value(fold_title(&item.title)))
            .col_expr(item::Column::Color, Expr::value(item.color.clone()))
            .col_expr(item::Column::IsCompleted, Expr::value(item.is_completed))
            .col_expr(item::Column::Version, Expr::col(item::Column::Version).add(1))
            .filter(item::Column::Id.eq(item.id))
            .filter(item::Column::Version.eq(item.version))
            .exec(conn)
            .await?;

        Ok(result.rows_affected)
    }

    /// Delete an item by id, returning the number of rows removed.
    pub async fn delete<C>(conn: &C, id: &Uuid) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let result = item::Entity::delete_by_id(*id).exec(conn).await?;
        Ok(result.rows_affected)
    }

    fn filtered(query: &ItemQuery) -> Select<item::Entity> {
        let mut select = item::Entity::find();

        if let Some(completed) = query.completed {
            select = select.filter(item::Column::IsCompleted.eq(completed));
        }

        if let Some(color) = query.color_filter() {
            select = select.filter(item::Column::Color.eq(color));
        }

        if let Some(title) = query.title_filter() {
            let pattern = format!("%{}%", escape_like(&fold_title(title)));
            select = select.filter(Expr::col(item::Column::TitleFolded).like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)));
        }

        select
    }
}

/// Escape LIKE wildcards so user text matches literally.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c == LIKE_ESCAPE || c == '%' || c == '_' {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}
