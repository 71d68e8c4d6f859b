//! View settings shared by the HTML and egui renderers.

/// Presentation settings for a grid view.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Window or document title.
    pub title: String,
    /// Hint shown in the empty search box.
    pub search_placeholder: String,
    /// Text shown in the dropdown while no filter was picked.
    pub filter_placeholder: String,
    /// Edge length of one tile, in points (egui) or CSS pixels (HTML).
    pub tile_size: f32,
    /// Edge length of the icon inside a tile.
    pub icon_size: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            title: "Operator icons".to_string(),
            search_placeholder: "Search icons".to_string(),
            filter_placeholder: "Select an option".to_string(),
            tile_size: 112.0,
            icon_size: 64.0,
        }
    }
}
