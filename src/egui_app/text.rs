#![cfg(feature = "egui")]

use egui::text::LayoutJob;
use eframe::egui::{self, Color32};

/// Simple case-insensitive highlighter that builds a LayoutJob for `text`,
/// highlighting occurrences of `query`.
///
/// Text whose lowercase form changes byte length is rendered unhighlighted.
pub fn highlight_query_job(text: &str, query: &str) -> LayoutJob {
    let mut job = LayoutJob::default();
    let t = text;
    let tl = t.to_lowercase();
    let ql = query.to_lowercase();
    if ql.is_empty() || tl.len() != t.len() {
        job.append(t, 0.0, egui::TextFormat::default());
        return job;
    }
    let mut i = 0;
    while let Some(pos) = tl[i..].find(&ql) {
        let start = i + pos;
        let end = start + ql.len();
        if !t.is_char_boundary(start) || !t.is_char_boundary(end) {
            break;
        }
        if start > i {
            job.append(&t[i..start], 0.0, egui::TextFormat::default());
        }
        let mut fmt = egui::TextFormat::default();
        fmt.background = Color32::YELLOW;
        job.append(&t[start..end], 0.0, fmt);
        i = end;
    }
    if i < t.len() {
        job.append(&t[i..], 0.0, egui::TextFormat::default());
    }
    job
}
