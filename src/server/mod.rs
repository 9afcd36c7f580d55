//! Coupon service backend.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations. The
//! coupon store is chosen at startup: a process-local map or a relational database.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and envelope wrapping
//! - **Service Layer** (`service/`) - Validation, uniqueness and existence checks, commits
//! - **Data Layer** (`data/`) - Repository contract with in-memory and database backends
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Validation** (`validation`) - Field rules for the create and update bodies
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (store and validators)
//! - **Startup** (`startup`) - Tracing, database connection and store selection
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** extracts the body or path and asks the store for a repository
//! 3. **Service** validates, checks existence and uniqueness, stages and commits
//! 4. **Data** reads and writes the store, converting entities to domain models
//! 5. **Controller** converts the domain model to a DTO inside an envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod validation;
