#![cfg(feature = "egui")]

use opgrid::egui_app::highlight_query_job;

#[test]
fn test_highlight_job() {
    let job = highlight_query_job("Thatcher", "ATC");
    assert_eq!(job.sections.len(), 3);
    assert_eq!(&job.text[job.sections[1].byte_range.clone()], "atc");
}

#[test]
fn test_highlight_job_without_query() {
    let job = highlight_query_job("Jäger", "");
    assert_eq!(job.sections.len(), 1);
    assert_eq!(job.text, "Jäger");
}
