use counter_core::{rank, render_report, FrequencyMap, RankedEntry};
use pretty_assertions::assert_eq;

fn entry(token: &str, count: u64) -> RankedEntry {
    RankedEntry {
        token: token.to_string(),
        count,
    }
}

#[test]
fn sample_report_is_ordered_by_count_then_token() {
    let mut map = FrequencyMap::from_text("The cat sat. The Cat ran!");
    map.merge(FrequencyMap::from_text("A cat and a dog."));

    let report = render_report(&rank(&map));
    assert_eq!(
        report,
        "cat, 3\na, 2\nthe, 2\nand, 1\ndog, 1\nran, 1\nsat, 1\n"
    );
}

#[test]
fn ranking_is_a_snapshot() {
    let mut map = FrequencyMap::from_text("b a");
    let ranked = rank(&map);
    map.merge(FrequencyMap::from_text("b b"));

    assert_eq!(ranked, vec![entry("a", 1), entry("b", 1)]);
    assert_eq!(rank(&map), vec![entry("b", 3), entry("a", 1)]);
}

#[test]
fn tie_break_is_bytewise() {
    let map = FrequencyMap::from_text("b 10 a 9 don't don");
    let tokens: Vec<_> = rank(&map).into_iter().map(|e| e.token).collect();
    assert_eq!(tokens, vec!["10", "9", "a", "b", "don", "don't"]);
}

#[test]
fn comparator_orders_higher_count_first() {
    assert!(entry("z", 5) < entry("a", 4));
    assert!(entry("a", 4) < entry("b", 4));
    assert_eq!(entry("a", 4).cmp(&entry("a", 4)), std::cmp::Ordering::Equal);
}

#[test]
fn empty_map_renders_nothing() {
    let map = FrequencyMap::new();
    assert!(rank(&map).is_empty());
    assert_eq!(render_report(&[]), "");
}

#[test]
fn entry_displays_with_comma_separator() {
    assert_eq!(entry("cat", 3).to_string(), "cat, 3");
}
