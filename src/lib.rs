//! todolist - a small server-rendered to-do list
//!
//! Items are stored in SQLite through SeaORM and managed through web pages
//! served by axum.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`entities`] - SeaORM entity models
//! * [`repositories`] - Database queries over the entities
//! * [`storage`] - Database connection and schema
//! * [`service`] - Item service: validation, defaults, concurrency checks
//! * [`web`] - Routes, handlers and HTML pages

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Logging setup on top of the `log` facade
pub mod logger;

/// Repository layer for database operations
pub mod repositories;

/// Item service layer used by the web pages
pub mod service;

/// Local storage: SQLite connection and schema
pub mod storage;

/// Web presentation layer
pub mod web;

// Re-export entity models for convenient access
pub use entities::item;
