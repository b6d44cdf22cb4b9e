use sea_orm::DbErr;
use uuid::Uuid;

/// Outcomes of item operations other than success.
#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("Invalid item: {0}")]
    Validation(String),

    #[error("Item not found: {0}")]
    NotFound(Uuid),

    #[error("Item {0} was changed or removed concurrently")]
    ConcurrencyConflict(Uuid),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] DbErr),
}
