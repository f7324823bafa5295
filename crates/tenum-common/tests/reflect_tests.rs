use super::*;
use rustc_hash::FxHashMap;

fn ordered(entries: &[(&'static str, i32)]) -> IndexMap<&'static str, i32> {
    entries.iter().copied().collect()
}

#[test]
fn test_for_each_own_visits_in_insertion_order() {
    let map = ordered(&[("b", 2), ("a", 1), ("c", 3)]);
    let mut seen = Vec::new();

    let result = for_each_own(&map, |value, key, _| {
        seen.push((*key, *value));
        None::<()>
    });

    assert_eq!(result, None);
    assert_eq!(seen, vec![("b", 2), ("a", 1), ("c", 3)]);
}

#[test]
fn test_for_each_own_short_circuits_on_first_some() {
    let map = ordered(&[("a", 1), ("b", 2), ("c", 3)]);
    let mut visited = 0;

    let result = for_each_own(&map, |value, key, _| {
        visited += 1;
        (*value >= 2).then(|| format!("{key}={value}"))
    });

    assert_eq!(result.as_deref(), Some("b=2"));
    assert_eq!(visited, 2);
}

#[test]
fn test_for_each_own_passes_container_to_visitor() {
    let map = ordered(&[("a", 1), ("b", 2)]);

    let total = for_each_own(&map, |_, key, container| {
        (*key == "b").then(|| container.values().sum::<i32>())
    });

    assert_eq!(total, Some(3));
}

#[test]
fn test_for_each_own_on_empty_container() {
    let map: IndexMap<&str, i32> = IndexMap::new();
    assert_eq!(for_each_own(&map, |_, _, _| Some(())), None);
}

#[test]
fn test_merge_into_later_sources_win() {
    let mut target = ordered(&[("a", 0), ("keep", 9)]);
    let first = ordered(&[("a", 1), ("b", 1)]);
    let second = ordered(&[("b", 2), ("c", 2)]);

    merge_into(&mut target, [&first, &second]);

    assert_eq!(target, ordered(&[("a", 1), ("keep", 9), ("b", 2), ("c", 2)]));
}

#[test]
fn test_merge_into_returns_target() {
    let mut target: IndexMap<&str, i32> = IndexMap::new();
    let source = ordered(&[("x", 7)]);

    let merged = merge_into(&mut target, [&source]);
    merged.insert("y", 8);

    assert_eq!(target.len(), 2);
}

#[test]
fn test_merge_into_without_sources_is_noop() {
    let mut target = ordered(&[("a", 1)]);
    merge_into(&mut target, std::iter::empty::<&IndexMap<&str, i32>>());
    assert_eq!(target, ordered(&[("a", 1)]));
}

#[test]
fn test_merge_into_hash_map_from_btree_map() {
    let mut target: FxHashMap<String, i32> = FxHashMap::default();
    let mut source = BTreeMap::new();
    source.insert("z".to_string(), 26);
    source.insert("a".to_string(), 1);

    merge_into(&mut target, [&source]);

    assert_eq!(target.get("a"), Some(&1));
    assert_eq!(target.get("z"), Some(&26));
}

#[test]
fn test_find_key_by_value_returns_first_match() {
    let map = ordered(&[("first", 1), ("dup_a", 2), ("dup_b", 2)]);

    assert_eq!(find_key_by_value(&2, &map), Some(&"dup_a"));
    assert_eq!(find_key_by_value(&1, &map), Some(&"first"));
}

#[test]
fn test_find_key_by_value_absent() {
    let map = ordered(&[("a", 1)]);
    assert_eq!(find_key_by_value(&42, &map), None);
}

#[test]
fn test_find_key_by_value_uses_strict_equality() {
    let mut map: IndexMap<&str, f64> = IndexMap::new();
    map.insert("nan", f64::NAN);
    map.insert("one", 1.0);

    assert_eq!(find_key_by_value(&f64::NAN, &map), None);
    assert_eq!(find_key_by_value(&1.0, &map), Some(&"one"));
}
