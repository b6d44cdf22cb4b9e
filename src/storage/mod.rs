//! Local storage module for to-do item persistence
//!
//! Owns the SeaORM connection to SQLite and creates the `todo_items`
//! table on startup. Queries live in [`crate::repositories`].

pub mod db;

pub use db::LocalStorage;
