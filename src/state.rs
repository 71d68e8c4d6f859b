//! Grid view state and its two transitions.
//!
//! Search and filter are mutually exclusive: each transition clears the other
//! input and recomputes the visible items from the full catalog. Transitions
//! take the current state by reference and return the next one; views replace
//! their state wholesale on every input event.

use crate::catalog::Catalog;
use crate::model::Operator;

/// State behind one grid view.
#[derive(Debug, Clone, PartialEq)]
pub struct GridState {
    /// Text typed into the search box, verbatim.
    pub search_text: String,
    /// Selected dropdown value; empty until something was selected.
    pub filter: String,
    /// Records currently shown, in catalog order.
    pub items: Vec<Operator>,
}

impl GridState {
    /// Initial state: no search, no filter, whole catalog visible.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            search_text: String::new(),
            filter: String::new(),
            items: catalog.items().to_vec(),
        }
    }

    /// State for a one-shot query. `search` wins over `filter`; with neither,
    /// the whole catalog is visible.
    pub fn from_query(catalog: &Catalog, search: Option<&str>, filter: Option<&str>) -> Self {
        let state = Self::new(catalog);
        match (search, filter) {
            (Some(text), _) => state.search(catalog, text),
            (None, Some(value)) => state.select_filter(catalog, value),
            (None, None) => state,
        }
    }

    /// State after the user typed `text` into the search box.
    pub fn search(&self, catalog: &Catalog, text: &str) -> Self {
        tracing::trace!(text, "search");
        Self {
            search_text: text.to_string(),
            filter: String::new(),
            items: catalog.search(text),
        }
    }

    /// State after the user picked `value` in the filter dropdown.
    pub fn select_filter(&self, catalog: &Catalog, value: &str) -> Self {
        tracing::trace!(value, "select filter");
        Self {
            search_text: String::new(),
            filter: value.to_string(),
            items: catalog.filter(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The active input: search text when non-empty, otherwise the filter value.
    pub fn active_query(&self) -> &str {
        if self.search_text.is_empty() {
            &self.filter
        } else {
            &self.search_text
        }
    }

    /// Message shown instead of the tiles, or `None` when there are items.
    pub fn empty_message(&self) -> Option<String> {
        if self.items.is_empty() {
            Some(format!("No results found for {}", self.active_query()))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FILTER_NONE;

    fn catalog() -> Catalog {
        Catalog::from_operators([
            Operator::new("sledge", "Sledge", "Breach", "GSG9"),
            Operator::new("thatcher", "Thatcher", "Breach", "SAS"),
        ])
    }

    #[test]
    fn initial_state_shows_everything() {
        let c = catalog();
        let s = GridState::new(&c);
        assert_eq!(s.items.len(), 2);
        assert!(s.search_text.is_empty());
        assert!(s.filter.is_empty());
        assert_eq!(s.empty_message(), None);
    }

    #[test]
    fn search_clears_filter() {
        let c = catalog();
        let s = GridState::new(&c).select_filter(&c, "SAS").search(&c, "sled");
        assert_eq!(s.filter, "");
        assert_eq!(s.search_text, "sled");
        assert_eq!(s.items.len(), 1);
        assert_eq!(s.items[0].id, "sledge");
    }

    #[test]
    fn filter_clears_search() {
        let c = catalog();
        let s = GridState::new(&c).search(&c, "sled").select_filter(&c, "Breach");
        assert_eq!(s.search_text, "");
        assert_eq!(s.filter, "Breach");
        assert_eq!(s.items.len(), 2);
    }

    #[test]
    fn none_restores_catalog() {
        let c = catalog();
        let s = GridState::new(&c).search(&c, "nothing matches").select_filter(&c, FILTER_NONE);
        assert_eq!(s.items, c.items());
        assert_eq!(s.search_text, "");
        assert_eq!(s.filter, "None");
    }

    #[test]
    fn from_query_applies_one_input() {
        let c = catalog();
        assert_eq!(GridState::from_query(&c, None, None), GridState::new(&c));
        let s = GridState::from_query(&c, Some("thatch"), None);
        assert_eq!(s.items.len(), 1);
        assert_eq!(s.filter, "");
        let s = GridState::from_query(&c, None, Some("GSG9"));
        assert_eq!(s.items[0].id, "sledge");
        assert_eq!(s.search_text, "");
    }

    #[test]
    fn empty_message_names_the_query() {
        let c = catalog();
        let s = GridState::new(&c).search(&c, "Zofia");
        assert_eq!(s.empty_message().as_deref(), Some("No results found for Zofia"));
        let s = s.select_filter(&c, "Recon");
        assert_eq!(s.empty_message().as_deref(), Some("No results found for Recon"));
    }
}
