//! Server-side API backend and business logic.
//!
//! This module contains the complete backend of the mentorship system: API
//! endpoints, business logic, data access and background jobs. The backend uses
//! Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Authentication guards, route access and error logging
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, bcrypt cost, dashboard cache)
//! - **Startup** (`startup`) - Database, sessions and the bootstrap admin account
//! - **Router** (`router`) - Route table and OpenAPI documentation
//! - **Scheduler** (`scheduler/`) - Cron jobs (at-risk alerts, cache purging)
//! - **Cache** (`cache`) - In-memory TTL cache for dashboard aggregates
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** loads the session and records 5xx responses
//! 3. **Controller** validates access, converts DTOs to params, calls service
//! 4. **Service** executes business logic, orchestrates data operations
//! 5. **Data** queries database, returns entities or domain models
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod cache;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
