use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

use algorithms::{
    polynomial_hash, ConfigError, DuplicateKeyPolicy, HashTable, HashTableConfig, HashTableError,
};
use serde::Deserialize;

#[derive(Deserialize)]
struct Scenario {
    capacity: usize,
    entries: Vec<(String, String)>,
    expected_keys: Vec<String>,
    expected_values: Vec<String>,
    expected_buckets: BTreeMap<String, usize>,
}

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data").join(name)
}

fn load_scenario() -> Scenario {
    let data = std::fs::read(fixture_path("hash_table_scenario.json")).expect("fixture must exist");
    serde_json::from_slice(&data).expect("fixture must deserialize")
}

fn sample_keys() -> Vec<String> {
    let mut keys: Vec<String> = (0..200).map(|i| format!("key-{i}")).collect();
    keys.extend(
        ["", "a", "z", "A", "Z", "0", "~", " ", "hello world", "Zebra", "é", "日本", "🦀", "snake_case", "UPPER"]
            .iter()
            .map(|s| s.to_string()),
    );
    keys
}

#[test]
fn end_to_end_scenario_output() {
    let scenario = load_scenario();
    let mut table = HashTable::new(scenario.capacity).expect("capacity 17 is valid");
    for (key, value) in &scenario.entries {
        table.set(key.as_str(), value.clone());
    }

    assert_eq!(table.get("03"), Some(&"Trees".to_string()));
    assert_eq!(table.get("hello"), None);

    let values: Vec<&str> = table.values().into_iter().map(String::as_str).collect();
    assert_eq!(values, scenario.expected_values);
    assert_eq!(values.iter().filter(|v| **v == "Cats").count(), 1);

    assert_eq!(table.keys(), scenario.expected_keys);
    for (key, bucket) in &scenario.expected_buckets {
        assert_eq!(table.hash(key), *bucket, "bucket for {key}");
    }
}

#[test]
fn zero_capacity_is_rejected_eagerly() {
    let err = HashTable::<i32>::new(0).expect_err("capacity 0 must be rejected");
    assert_eq!(err, HashTableError::InvalidConfig { capacity: 0 });

    let config = HashTableConfig { capacity: 0, duplicate_keys: DuplicateKeyPolicy::Overwrite };
    assert!(HashTable::<i32>::with_config(&config).is_err());
}

#[test]
fn unallocatable_capacity_is_an_error() {
    let capacity = usize::MAX / 2;
    let err = HashTable::<u8>::new(capacity).expect_err("bucket array cannot be allocated");
    assert_eq!(err, HashTableError::InvalidConfig { capacity });

    let config = HashTableConfig::from_json_str(&format!(r#"{{"capacity": {capacity}}}"#)).expect("positive capacity parses");
    assert!(HashTable::<String>::with_config(&config).is_err());
}

#[test]
fn hash_is_always_within_capacity() {
    for capacity in [1, 2, 3, 7, 13, 17, 31, 64, 97, 1024, usize::MAX] {
        for key in sample_keys() {
            let index = polynomial_hash(&key, capacity);
            assert!(index < capacity, "hash({key:?}, {capacity}) = {index}");
        }
    }
}

#[test]
fn hash_is_deterministic() {
    let table: HashTable<()> = HashTable::new(31).expect("valid capacity");
    for key in sample_keys() {
        assert_eq!(table.hash(&key), table.hash(&key));
        assert_eq!(table.hash(&key), polynomial_hash(&key, 31));
    }
}

#[test]
fn empty_key_hashes_to_zero_and_is_storable() {
    for capacity in [1, 2, 17, 1000] {
        assert_eq!(polynomial_hash("", capacity), 0);
    }
    let mut table = HashTable::default();
    table.set("", 42);
    assert_eq!(table.get(""), Some(&42));
    assert_eq!(table.bucket(0).map(|chain| chain.len()), Some(1));
}

#[test]
fn only_first_hundred_characters_are_hashed() {
    let prefix: String = "abcdefghij".repeat(10);
    assert_eq!(prefix.len(), 100);
    let long_a = format!("{prefix}xyz");
    let long_b = format!("{prefix}{}", "q".repeat(500));
    for capacity in [7, 17, 101] {
        assert_eq!(polynomial_hash(&long_a, capacity), polynomial_hash(&prefix, capacity));
        assert_eq!(polynomial_hash(&long_b, capacity), polynomial_hash(&prefix, capacity));
    }

    // Same bucket, but lookup still compares the whole key.
    let mut table = HashTable::default();
    table.set(prefix.as_str(), 1);
    table.set(long_a.as_str(), 2);
    assert_eq!(table.get(&prefix), Some(&1));
    assert_eq!(table.get(&long_a), Some(&2));
    assert_eq!(table.get(&long_b), None);
}

#[test]
fn duplicate_set_appends_and_first_entry_wins() {
    let mut table = HashTable::default();
    table.set("a", 1);
    table.set("a", 2);

    assert_eq!(table.get("a"), Some(&1));
    assert_eq!(table.len(), 2);
    assert_eq!(table.keys(), vec!["a"]);
    assert_eq!(table.values(), vec![&1, &2]);

    let chain = table.bucket(table.hash("a")).expect("bucket allocated");
    let stored: Vec<i32> = chain.iter().map(|e| e.value).collect();
    assert_eq!(stored, vec![1, 2]);
}

#[test]
fn overwrite_policy_replaces_in_place() {
    let config = HashTableConfig { capacity: 17, duplicate_keys: DuplicateKeyPolicy::Overwrite };
    let mut table = HashTable::with_config(&config).expect("valid config");
    table.set("b", "first");
    table.set("cyan", "neighbour");
    table.set("b", "second");

    assert_eq!(table.get("b"), Some(&"second"));
    assert_eq!(table.len(), 2);
    // "b" keeps its position ahead of "cyan" in the shared chain.
    let chain = table.bucket(table.hash("b")).expect("bucket allocated");
    let keys: Vec<&str> = chain.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["b", "cyan"]);
}

#[test]
fn colliding_keys_share_a_chain_in_insertion_order() {
    let mut table = HashTable::default();
    assert_eq!(table.hash("b"), 2);
    assert_eq!(table.hash("cyan"), 2);

    table.set("cyan", 10);
    table.set("b", 20);
    assert_eq!(table.get("cyan"), Some(&10));
    assert_eq!(table.get("b"), Some(&20));

    let chain = table.bucket(2).expect("bucket 2 allocated");
    let keys: Vec<&str> = chain.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["cyan", "b"]);
    assert_eq!(table.keys(), vec!["cyan", "b"]);
}

#[test]
fn keys_are_unique_and_bounded_by_set_calls() {
    let mut table = HashTable::new(5).expect("valid capacity");
    let mut set_calls = 0;
    for round in 0..3 {
        for key in sample_keys().iter().take(40) {
            table.set(key.as_str(), round);
            set_calls += 1;
        }
    }
    let keys = table.keys();
    let mut deduped = keys.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), keys.len());
    assert_eq!(keys.len(), 40);
    assert!(keys.len() <= set_calls);
    assert_eq!(table.len(), set_calls);
}

#[test]
fn distinct_values_are_all_reported() {
    let mut table = HashTable::new(3).expect("valid capacity");
    let keys = sample_keys();
    for (i, key) in keys.iter().enumerate() {
        table.set(key.as_str(), i);
    }
    assert_eq!(table.values().len(), keys.len());
}

#[test]
fn keys_follow_bucket_scan_order() {
    let mut table = HashTable::default();
    for key in ["pink", "orange", "cyan", "a"] {
        table.set(key, ());
    }
    // buckets: a = 1, cyan = 2, orange = 4, pink = 9
    assert_eq!(table.keys(), vec!["a", "cyan", "orange", "pink"]);
    let scanned: Vec<&str> = table.iter().map(|(k, _)| k).collect();
    assert_eq!(scanned, table.keys());
}

#[test]
fn empty_table_enumerates_nothing() {
    let table: HashTable<String> = HashTable::default();
    assert!(table.is_empty());
    assert_eq!(table.capacity(), 17);
    assert!(table.keys().is_empty());
    assert!(table.values().is_empty());
    assert_eq!(table.get("anything"), None);
    assert_eq!(table.bucket(0), None);
    assert_eq!(table.bucket(17), None);
}

#[test]
fn size_accessors_track_entries() {
    let mut table = HashTable::default();
    for (i, key) in ["01", "06", "02", "03", "04", "05"].iter().enumerate() {
        table.set(*key, i);
    }
    assert_eq!(table.len(), 6);
    assert!(table.contains_key("04"));
    assert!(!table.contains_key("07"));
    assert!((table.load_factor() - 6.0 / 17.0).abs() < 1e-12);
    assert_eq!(table.duplicate_key_policy(), DuplicateKeyPolicy::Append);
}

#[test]
fn config_fixture_loads() {
    let config = HashTableConfig::load(&fixture_path("hash_table_config.json")).expect("fixture config is valid");
    assert_eq!(config.capacity, 13);
    assert_eq!(config.duplicate_keys, DuplicateKeyPolicy::Overwrite);

    let table: HashTable<u8> = HashTable::with_config(&config).expect("valid config");
    assert_eq!(table.capacity(), 13);
}

#[test]
fn config_file_errors_are_reported() {
    let mut bad_json = tempfile::NamedTempFile::new().expect("temp file");
    write!(bad_json, "{{ capacity: ").expect("write temp file");
    let err = HashTableConfig::load(bad_json.path()).expect_err("malformed json");
    assert!(matches!(err, ConfigError::Parse(_)));

    let mut zero = tempfile::NamedTempFile::new().expect("temp file");
    write!(zero, r#"{{"capacity": 0}}"#).expect("write temp file");
    let err = HashTableConfig::load(zero.path()).expect_err("capacity 0");
    assert!(matches!(err, ConfigError::Invalid(HashTableError::InvalidConfig { capacity: 0 })));

    let dir = tempfile::tempdir().expect("temp dir");
    let err = HashTableConfig::load(&dir.path().join("missing.json")).expect_err("missing file");
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn config_round_trips_through_json() {
    let config = HashTableConfig { capacity: 101, duplicate_keys: DuplicateKeyPolicy::Overwrite };
    let raw = serde_json::to_string(&config).expect("serialize config");
    assert_eq!(HashTableConfig::from_json_str(&raw).expect("parse config"), config);
}
