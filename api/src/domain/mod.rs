//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Articles, the collection document and source labels
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
