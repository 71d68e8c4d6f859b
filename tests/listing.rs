use opgrid::catalog::Catalog;
use opgrid::listing::{format_list, format_list_json, format_options, format_options_json};
use opgrid::model::Operator;
use opgrid::state::GridState;

fn catalog() -> Catalog {
    Catalog::from_operators([
        Operator::new("sledge", "Sledge", "Breach", "GSG9"),
        Operator::new("thatcher", "Thatcher", "Breach", "SAS"),
    ])
}

#[test]
fn list_prints_tab_separated_lines() {
    let c = catalog();
    let state = GridState::from_query(&c, None, Some("Breach"));
    assert_eq!(
        format_list(&state),
        "sledge\tSledge\tBreach\tGSG9\nthatcher\tThatcher\tBreach\tSAS\n"
    );
}

#[test]
fn list_prints_empty_message_when_nothing_matches() {
    let c = catalog();
    let state = GridState::from_query(&c, Some("Zofia"), None);
    assert_eq!(format_list(&state), "No results found for Zofia\n");
}

#[test]
fn json_list_stays_parseable_when_empty() {
    let c = catalog();
    let state = GridState::from_query(&c, None, Some("Not A Unit"));
    let json = format_list_json(&state).unwrap();
    assert_eq!(json.trim(), "[]");

    let state = GridState::from_query(&c, Some("sled"), None);
    let value: serde_json::Value = serde_json::from_str(&format_list_json(&state).unwrap()).unwrap();
    assert_eq!(value[0]["id"], "sledge");
    assert_eq!(value[0]["unit"], "GSG9");
}

#[test]
fn options_are_listed_with_indented_groups() {
    let options = catalog().filter_options();
    assert_eq!(
        format_options(&options),
        "None\nRole:\n  Breach\nUnit:\n  GSG9\n  SAS\n"
    );
    let value: serde_json::Value =
        serde_json::from_str(&format_options_json(&options).unwrap()).unwrap();
    assert_eq!(value[0], "None");
    assert_eq!(value[1]["items"], serde_json::json!(["Breach"]));
}
