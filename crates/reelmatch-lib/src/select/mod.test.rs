use super::*;

#[derive(Debug, PartialEq)]
struct Item {
    name: &'static str,
    rank: u8,
    weight: f64,
}

fn item(name: &'static str, rank: u8, weight: f64) -> Item {
    Item { name, rank, weight }
}

#[test]
fn test_empty_input_selects_nothing() {
    let selector: PrioritySelector<Item> = PrioritySelector::new().then_by_key(|i: &Item| i.rank);
    assert!(selector.select(&[]).is_none());
}

#[test]
fn test_first_comparator_dominates() {
    let selector = PrioritySelector::new()
        .then_by_key_desc(|i: &Item| i.rank)
        .then_by_float_desc(|i: &Item| i.weight);

    let items = [item("a", 1, 9.0), item("b", 2, 1.0), item("c", 1, 10.0)];
    assert_eq!(selector.select(&items).map(|i| i.name), Some("b"));
}

#[test]
fn test_later_comparators_break_ties() {
    let selector = PrioritySelector::new()
        .then_by_key_desc(|i: &Item| i.rank)
        .then_by_float_desc(|i: &Item| i.weight);

    let items = [item("a", 2, 1.0), item("b", 2, 3.0), item("c", 1, 10.0)];
    assert_eq!(selector.select(&items).map(|i| i.name), Some("b"));
}

#[test]
fn test_full_ties_keep_earliest() {
    let selector = PrioritySelector::new().then_by_key(|i: &Item| i.rank);

    let items = [item("first", 1, 0.0), item("second", 1, 0.0)];
    assert_eq!(selector.select(&items).map(|i| i.name), Some("first"));
}

#[test]
fn test_no_comparators_picks_first() {
    let selector: PrioritySelector<Item> = PrioritySelector::default();
    let items = [item("first", 3, 0.0), item("second", 9, 0.0)];
    assert_eq!(selector.select(&items).map(|i| i.name), Some("first"));
}

#[test]
fn test_nan_ranks_last() {
    let selector = PrioritySelector::new().then_by_float_desc(|i: &Item| i.weight);

    let items = [item("nan", 0, f64::NAN), item("low", 0, 0.1)];
    assert_eq!(selector.select(&items).map(|i| i.name), Some("low"));
}

#[test]
fn test_select_from_filtered_iterator() {
    let selector = PrioritySelector::new().then_by_key_desc(|i: &Item| i.rank);
    let items = [item("a", 5, 0.0), item("b", 3, 0.0), item("c", 4, 0.0)];

    let best = selector.select_from(items.iter().filter(|i| i.name != "a"));
    assert_eq!(best.map(|i| i.name), Some("c"));
}
