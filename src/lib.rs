//! Searchable, filterable icon grid over a catalog of operators.
//!
//! The catalog comes from a data package (`operators.json` plus `icons/*.svg`)
//! that is either bundled into the crate or loaded from a directory or ZIP
//! archive. [`state::GridState`] holds what a view shows; its two transitions
//! (search by name, filter by role or unit) are pure and reset each other.
//!
//! The binary `opgrid` lists, filters and renders the grid as HTML.

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod html;
pub mod icons;
pub mod listing;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;

// Optional GUI/egui functionality lives behind the `egui` feature flag.
#[cfg(feature = "egui")]
pub mod egui_app;
