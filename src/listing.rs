//! Plain-text and JSON listings printed by the `opgrid` binary.

use crate::catalog::FilterOption;
use crate::state::GridState;

/// One `id<TAB>name<TAB>role<TAB>unit` line per visible operator, or the
/// empty-state message when nothing is visible.
pub fn format_list(state: &GridState) -> String {
    if let Some(msg) = state.empty_message() {
        return format!("{msg}\n");
    }
    let mut out = String::new();
    for op in &state.items {
        out.push_str(&format!("{}\t{}\t{}\t{}\n", op.id, op.name, op.role, op.unit));
    }
    out
}

/// Visible operators as a pretty-printed JSON array. An empty result is `[]`
/// so the output always parses.
pub fn format_list_json(state: &GridState) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(&state.items)?;
    out.push('\n');
    Ok(out)
}

/// Dropdown options: plain values on their own line, groups as `Name:`
/// followed by their values indented by two spaces.
pub fn format_options(options: &[FilterOption]) -> String {
    let mut out = String::new();
    for opt in options {
        match opt {
            FilterOption::Value(v) => {
                out.push_str(v);
                out.push('\n');
            }
            FilterOption::Group(g) => {
                out.push_str(&g.name);
                out.push_str(":\n");
                for v in &g.items {
                    out.push_str("  ");
                    out.push_str(v);
                    out.push('\n');
                }
            }
        }
    }
    out
}

/// Dropdown options as pretty-printed JSON.
pub fn format_options_json(options: &[FilterOption]) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(options)?;
    out.push('\n');
    Ok(out)
}
