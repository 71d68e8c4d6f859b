//! Operator catalog and the filter options derived from it.
//!
//! A [`Catalog`] is built once from a [`Dataset`] and never changes afterwards.
//! It keeps the records in dataset order and the distinct roles and units,
//! sorted, for the filter dropdown.
//!
//! # Usage
//!
//! ```rust,ignore
//! use opgrid::catalog::bundled_catalog;
//!
//! let catalog = bundled_catalog();
//! let sas = catalog.filter("SAS");
//! let found = catalog.search("sled");
//! ```

use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::{Dataset, Operator};

/// Dropdown entry that resets the grid to the full catalog.
pub const FILTER_NONE: &str = "None";

/// Label of the role option group.
pub const ROLE_GROUP: &str = "Role";

/// Label of the unit option group.
pub const UNIT_GROUP: &str = "Unit";

/// A named group of dropdown values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "group")]
pub struct FilterGroup {
    pub name: String,
    pub items: Vec<String>,
}

/// One top-level entry of the filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FilterOption {
    Value(String),
    Group(FilterGroup),
}

/// Ordered operator records plus their distinct roles and units.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Operator>,
    roles: Vec<String>,
    units: Vec<String>,
}

impl Catalog {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self::from_operators(dataset.values().cloned())
    }

    pub fn from_operators(ops: impl IntoIterator<Item = Operator>) -> Self {
        let items: Vec<Operator> = ops.into_iter().collect();
        let roles: BTreeSet<&str> = items.iter().map(|o| o.role.as_str()).collect();
        let units: BTreeSet<&str> = items.iter().map(|o| o.unit.as_str()).collect();
        let roles = roles.into_iter().map(str::to_string).collect();
        let units = units.into_iter().map(str::to_string).collect();
        Self { items, roles, units }
    }

    /// All records, in dataset order.
    pub fn items(&self) -> &[Operator] {
        &self.items
    }

    /// Distinct roles, ascending.
    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Distinct units, ascending.
    pub fn units(&self) -> &[String] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Dropdown model: the reset entry, then the role group, then the unit group.
    pub fn filter_options(&self) -> Vec<FilterOption> {
        vec![
            FilterOption::Value(FILTER_NONE.to_string()),
            FilterOption::Group(FilterGroup {
                name: ROLE_GROUP.to_string(),
                items: self.roles.clone(),
            }),
            FilterOption::Group(FilterGroup {
                name: UNIT_GROUP.to_string(),
                items: self.units.clone(),
            }),
        ]
    }

    /// Records whose name contains `query`, ignoring case. Empty query returns everything.
    pub fn search(&self, query: &str) -> Vec<Operator> {
        if query.is_empty() {
            return self.items.clone();
        }
        self.items
            .iter()
            .filter(|o| o.matches_query(query))
            .cloned()
            .collect()
    }

    /// Records whose role or unit equals `value`, ignoring case.
    /// [`FILTER_NONE`] returns everything.
    ///
    /// Roles and units share one option space, so a value present in both
    /// categories selects records of either.
    pub fn filter(&self, value: &str) -> Vec<Operator> {
        if value == FILTER_NONE {
            return self.items.clone();
        }
        self.items
            .iter()
            .filter(|o| o.matches_filter(value))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Operator> {
        self.items.iter().find(|o| o.id == id)
    }
}

/// Catalog of the bundled data package, built on first access and cached for
/// the lifetime of the process.
pub fn bundled_catalog() -> &'static Catalog {
    &crate::dataset::bundled_package().catalog
}
