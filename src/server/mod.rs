//! Backend implementation of the item-lending service.
//!
//! The server follows a layered architecture with clear separation of
//! concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, identity
//!   extraction, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between
//!   controllers and the data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain
//!   model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific
//!   parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response
//!   mapping
//! - **Middleware** (`middleware/`) - Extraction of the caller identity
//!   relayed by the gateway
//!
//! Supporting modules provide application infrastructure: `config`
//! (environment-based configuration), `state` (shared application state),
//! `startup` (database and logging initialization), `router` (route
//! configuration), and `util` (pagination helpers).
//!
//! A typical request flows router → controller → service → data and back,
//! with entities converted to domain models at the repository boundary and
//! to DTOs at the controller boundary.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
