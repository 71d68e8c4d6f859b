//! Static HTML rendering of the grid view.
//!
//! The markup mirrors the interactive view: a search box, a filter `<select>`
//! with one `<optgroup>` per option group, and one tile per visible operator.
//! All dataset text is escaped; icon SVG markup is embedded as-is.

use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::catalog::{Catalog, FilterOption};
use crate::config::GridConfig;
use crate::icons::IconSet;
use crate::model::Operator;
use crate::state::GridState;

/// Render the `<div class="icongrid">` fragment for `state`.
pub fn render_grid(
    catalog: &Catalog,
    icons: &IconSet,
    state: &GridState,
    config: &GridConfig,
) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"icongrid\">\n");
    out.push_str("  <div class=\"icongrid__filters\">\n");
    let _ = writeln!(
        out,
        "    <div class=\"icongrid__search\"><input type=\"search\" placeholder=\"{}\" value=\"{}\"></div>",
        attr(&config.search_placeholder),
        attr(&state.search_text)
    );
    render_dropdown(&mut out, catalog, state, config);
    out.push_str("  </div>\n");

    if state.is_empty() {
        out.push_str("  <div class=\"icongrid__container is-empty\">\n");
        if let Some(msg) = state.empty_message() {
            let _ = writeln!(out, "    <div class=\"icongrid__empty\">{}</div>", text(&msg));
        }
    } else {
        out.push_str("  <div class=\"icongrid__container\">\n");
        for op in &state.items {
            render_tile(&mut out, op, icons);
        }
    }
    out.push_str("  </div>\n");
    out.push_str("</div>\n");
    out
}

/// Render a standalone HTML document wrapping [`render_grid`].
pub fn render_document(
    catalog: &Catalog,
    icons: &IconSet,
    state: &GridState,
    config: &GridConfig,
) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", text(&config.title));
    let _ = writeln!(
        out,
        "<style>\n\
         .icongrid__filters {{ display: flex; gap: 1em; margin-bottom: 1em; }}\n\
         .icongrid__container {{ display: flex; flex-wrap: wrap; gap: 8px; }}\n\
         .icongrid__tile {{ width: {tile}px; text-align: center; }}\n\
         .icongrid__tile svg {{ width: {icon}px; height: {icon}px; }}\n\
         </style>",
        tile = config.tile_size,
        icon = config.icon_size
    );
    out.push_str("</head>\n<body>\n");
    out.push_str(&render_grid(catalog, icons, state, config));
    out.push_str("</body>\n</html>\n");
    out
}

fn render_dropdown(out: &mut String, catalog: &Catalog, state: &GridState, config: &GridConfig) {
    let options = catalog.filter_options();
    let selected = selected_option(&options, &state.filter);
    out.push_str("    <select class=\"icongrid__dropdown\">\n");
    if state.filter.is_empty() {
        let _ = writeln!(
            out,
            "      <option value=\"\" disabled selected>{}</option>",
            text(&config.filter_placeholder)
        );
    } else if selected.is_none() {
        // Value outside the option set: keep showing what was asked for.
        render_option(out, &state.filter, true, "      ");
    }
    let mut index = 0;
    for opt in &options {
        match opt {
            FilterOption::Value(v) => {
                render_option(out, v, selected == Some(index), "      ");
                index += 1;
            }
            FilterOption::Group(g) => {
                let _ = writeln!(out, "      <optgroup label=\"{}\">", attr(&g.name));
                for v in &g.items {
                    render_option(out, v, selected == Some(index), "        ");
                    index += 1;
                }
                out.push_str("      </optgroup>\n");
            }
        }
    }
    out.push_str("    </select>\n");
}

/// Position of the first option value equal to `filter`, ignoring case, in
/// dropdown order.
fn selected_option(options: &[FilterOption], filter: &str) -> Option<usize> {
    if filter.is_empty() {
        return None;
    }
    let wanted = filter.to_lowercase();
    options
        .iter()
        .flat_map(|opt| match opt {
            FilterOption::Value(v) => std::slice::from_ref(v),
            FilterOption::Group(g) => g.items.as_slice(),
        })
        .position(|v| v.to_lowercase() == wanted)
}

fn render_option(out: &mut String, value: &str, selected: bool, indent: &str) {
    let sel = if selected { " selected" } else { "" };
    let _ = writeln!(
        out,
        "{indent}<option value=\"{}\"{sel}>{}</option>",
        attr(value),
        text(value)
    );
}

fn render_tile(out: &mut String, op: &Operator, icons: &IconSet) {
    let icon = icons.resolve(&op.id);
    let _ = writeln!(
        out,
        "    <div class=\"icongrid__tile\" data-key=\"{}\" title=\"{} / {}\">",
        attr(&op.id),
        attr(&op.role),
        attr(&op.unit)
    );
    let _ = writeln!(out, "      <div class=\"icongrid__icon\">{}</div>", icon.svg_text().trim());
    let _ = writeln!(out, "      <div class=\"icongrid__name\">{}</div>", text(&op.name));
    out.push_str("    </div>\n");
}
