use opgrid::config::GridConfig;
use opgrid::dataset::bundled_package;
use opgrid::html::{render_document, render_grid};
use opgrid::state::GridState;

#[test]
fn document_lists_every_bundled_operator() {
    let pkg = bundled_package();
    let state = GridState::new(&pkg.catalog);
    let html = render_document(&pkg.catalog, &pkg.icons, &state, &GridConfig::default());
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Operator icons</title>"));
    for op in pkg.catalog.items() {
        assert!(html.contains(&format!("data-key=\"{}\"", op.id)), "tile for {}", op.id);
    }
    assert_eq!(html.matches("class=\"icongrid__tile\"").count(), pkg.catalog.len());
    assert!(html.contains("<option value=\"\" disabled selected>Select an option</option>"));
}

#[test]
fn search_box_echoes_search_text() {
    let pkg = bundled_package();
    let state = GridState::new(&pkg.catalog).search(&pkg.catalog, "sm\"oke");
    let html = render_grid(&pkg.catalog, &pkg.icons, &state, &GridConfig::default());
    assert!(html.contains("value=\"sm&quot;oke\""));
    assert!(html.contains("No results found for sm\"oke"));
}

#[test]
fn unit_filter_renders_only_that_unit() {
    let pkg = bundled_package();
    let state = GridState::new(&pkg.catalog).select_filter(&pkg.catalog, "GIGN");
    let html = render_grid(&pkg.catalog, &pkg.icons, &state, &GridConfig::default());
    let expected = pkg.catalog.items().iter().filter(|o| o.unit == "GIGN").count();
    assert!(expected > 0);
    assert_eq!(html.matches("class=\"icongrid__tile\"").count(), expected);
    assert!(html.contains("<option value=\"GIGN\" selected>GIGN</option>"));
}
