#![cfg(feature = "egui")]

use eframe::egui;

use crate::catalog::{Catalog, FilterOption};
use crate::config::GridConfig;
use crate::dataset::Package;
use crate::icons::IconSet;
use crate::model::Operator;
use crate::state::GridState;

/// Interactive egui application showing a searchable, filterable operator grid.
#[derive(Clone)]
pub struct IconGridApp {
    pub catalog: Catalog,
    pub icons: IconSet,
    /// Dropdown entries, computed once from the catalog.
    pub options: Vec<FilterOption>,
    pub state: GridState,
    pub config: GridConfig,
    /// Operator whose details window is open.
    pub detail: Option<Operator>,
}

impl IconGridApp {
    /// Create a new app showing every operator of `package`.
    pub fn new(package: Package, config: GridConfig) -> Self {
        let Package { catalog, icons, .. } = package;
        let options = catalog.filter_options();
        let state = GridState::new(&catalog);
        Self {
            catalog,
            icons,
            options,
            state,
            config,
            detail: None,
        }
    }

    /// Handle an edit of the search box.
    pub fn on_search(&mut self, text: &str) {
        self.state = self.state.search(&self.catalog, text);
    }

    /// Handle a dropdown selection.
    pub fn on_filter(&mut self, value: &str) {
        self.state = self.state.select_filter(&self.catalog, value);
    }

    /// Text shown on the closed dropdown.
    pub fn dropdown_text(&self) -> &str {
        if self.state.filter.is_empty() {
            &self.config.filter_placeholder
        } else {
            &self.state.filter
        }
    }
}

impl eframe::App for IconGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::ui::update(self, ctx, _frame);
    }
}
