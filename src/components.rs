//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across multiple
//! page types (home, area list, area detail, work detail). Components
//! handle specific UI elements with consistent styling and behavior,
//! eliminating duplication across page generators.

pub mod cards;
pub mod documents;
pub mod footer;
pub mod highlights;
pub mod layout;
pub mod nav;
