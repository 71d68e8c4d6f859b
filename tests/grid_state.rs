use opgrid::catalog::{Catalog, FILTER_NONE, bundled_catalog};
use opgrid::model::Operator;
use opgrid::state::GridState;

fn example_catalog() -> Catalog {
    Catalog::from_operators([
        Operator::new("sledge", "Sledge", "Breach", "GSG9"),
        Operator::new("thatcher", "Thatcher", "Breach", "SAS"),
    ])
}

fn names(state: &GridState) -> Vec<&str> {
    state.items.iter().map(|o| o.name.as_str()).collect()
}

fn is_subsequence(items: &[Operator], of: &[Operator]) -> bool {
    let mut it = of.iter();
    items.iter().all(|x| it.any(|y| y == x))
}

#[test]
fn example_walkthrough() {
    let c = example_catalog();
    let s = GridState::new(&c);

    let s = s.search(&c, "sled");
    assert_eq!(names(&s), vec!["Sledge"]);

    let s = s.select_filter(&c, "Breach");
    assert_eq!(names(&s), vec!["Sledge", "Thatcher"]);
    assert_eq!(s.search_text, "");

    let s = s.select_filter(&c, "SAS");
    assert_eq!(names(&s), vec!["Thatcher"]);

    let s = s.search(&c, "that").select_filter(&c, FILTER_NONE);
    assert_eq!(names(&s), vec!["Sledge", "Thatcher"]);
    assert_eq!(s.search_text, "");
}

#[test]
fn search_results_are_ordered_subsets_matching_the_query() {
    let c = bundled_catalog();
    let base = GridState::new(c);
    for q in ["", "a", "S", "sm", "ÄGER", "jäg", "tach", "q", "zzz", " "] {
        let s = base.search(c, q);
        assert!(is_subsequence(&s.items, c.items()), "query {q:?}");
        for op in &s.items {
            assert!(
                op.name.to_lowercase().contains(&q.to_lowercase()),
                "{} does not match {q:?}",
                op.name
            );
        }
        if q.is_empty() {
            assert_eq!(s.items, c.items());
        }
        assert_eq!(s.filter, "");
        assert_eq!(s.search_text, q);
    }
}

#[test]
fn every_option_value_selects_matching_records() {
    let c = bundled_catalog();
    let base = GridState::new(c).search(c, "x");
    for f in c.roles().iter().chain(c.units()) {
        let s = base.select_filter(c, f);
        assert!(!s.items.is_empty(), "filter {f} returned nothing");
        assert!(is_subsequence(&s.items, c.items()));
        for op in &s.items {
            let fl = f.to_lowercase();
            assert!(op.role.to_lowercase() == fl || op.unit.to_lowercase() == fl);
        }
        let expected = c
            .items()
            .iter()
            .filter(|o| o.role.eq_ignore_ascii_case(f) || o.unit.eq_ignore_ascii_case(f))
            .count();
        assert_eq!(s.items.len(), expected);
        assert_eq!(s.search_text, "");
        assert_eq!(&s.filter, f);
    }
}

#[test]
fn none_restores_full_catalog_from_any_state() {
    let c = bundled_catalog();
    let starts = [
        GridState::new(c),
        GridState::new(c).search(c, "nobody"),
        GridState::new(c).select_filter(c, "SAS"),
        GridState::new(c).select_filter(c, "Recon"),
    ];
    for start in starts {
        let s = start.select_filter(c, FILTER_NONE);
        assert_eq!(s.items, c.items());
        assert_eq!(s.search_text, "");
        assert_eq!(s.empty_message(), None);
    }
}

#[test]
fn empty_message_quotes_input_verbatim() {
    let c = bundled_catalog();
    let s = GridState::new(c).search(c, "  ZoFiA ");
    assert!(s.is_empty());
    assert_eq!(s.empty_message().unwrap(), "No results found for   ZoFiA ");

    let s = s.select_filter(c, "Not A Unit");
    assert_eq!(s.empty_message().unwrap(), "No results found for Not A Unit");
}

#[test]
fn bundled_option_sets_are_sorted_and_unique() {
    let c = bundled_catalog();
    for set in [c.roles(), c.units()] {
        let mut sorted = set.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(set, sorted.as_slice());
    }
    assert!(c.units().iter().any(|u| u == "SAS"));
}
