//! Release catalog layer for toolchain version pinning
//!
//! This module provides the core functionality for fetching, caching, and
//! resolving toolchain releases (Node.js and npm).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Source    │────▶│  Refresher  │◀────│  Resolver   │
//! │  (fetch)    │     │ (cool-down) │     │  (specs)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │   Sources   │     │    Store    │
//! │ (node, npm) │     │ (JSON file) │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error types for store and fetch operations
//! - [`refresher`]: Cache-first catalog refresh with fetch cool-down
//! - [`resolver`]: Specifier resolution (`latest`, `lts`, exact, ranges)
//! - [`source`]: Release source trait for fetching upstream indexes
//! - [`sources`]: Concrete source implementations (Node.js index, npm registry)
//! - [`store`]: JSON file persistence for release catalogs
//! - [`types`]: Common types like `Tool` and `ReleaseCatalog`

pub mod error;
pub mod refresher;
pub mod resolver;
pub mod source;
pub mod sources;
pub mod store;
pub mod types;
