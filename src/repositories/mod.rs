//! Repository layer for database operations.
//!
//! Repositories keep entities as pure data models while providing reusable
//! database access methods, following the Data Mapper pattern recommended by
//! SeaORM. Every method is generic over [`sea_orm::ConnectionTrait`] so it runs
//! equally on a pooled connection or inside a transaction.

pub mod item;

pub use item::ItemRepository;
