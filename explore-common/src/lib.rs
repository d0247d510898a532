//! # Project Explore Common Library
//!
//! Shared code for the Project Explore catalog:
//! - Static catalog model and typed lookup keys
//! - Content resolver (activity, video duration, thumbnail URL)
//! - Explicit view-state object (`Selection`)
//! - Configuration loading
//! - Error types

pub mod catalog;
pub mod config;
pub mod error;
pub mod resolver;
pub mod selection;

pub use catalog::{BudgetVariant, Catalog, Language, PlatformId, TierId, TimeVariant};
pub use error::{Error, Result};
pub use resolver::{ActivityLookup, ActivityView, ContentResolver, DURATION_PLACEHOLDER};
pub use selection::{Panel, Selection, SelectionQuery, SelectionUpdate, View};
