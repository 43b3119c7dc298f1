use algorithms::numerical::add_up_to::{add_up_to, timed};
use algorithms::problem_solving::frequency_counter::{char_count, same, same_frequency, valid_anagram};
use algorithms::problem_solving::multiple_pointers::{average_pair, count_unique_values, sum_zero};
use algorithms::problem_solving::recursion::{collect_odd_values, product_of_array, reverse};
use algorithms::problem_solving::sliding_window::{max_subarray_sum, max_subarray_sum_naive};

#[test]
fn same_requires_matching_square_frequencies() {
    assert!(same(&[1, 2, 3], &[4, 1, 9]));
    assert!(!same(&[1, 2, 3], &[1, 9]));
    assert!(!same(&[1, 2, 1], &[4, 4, 1]));
    assert!(same(&[1, 2, 3, 2], &[9, 1, 4, 4]));
    assert!(!same(&[1, 2, 3, 2, 5], &[9, 1, 4, 4, 11]));
    assert!(same(&[2, -2], &[4, 4]));
    assert!(same(&[], &[]));
}

#[test]
fn anagrams() {
    assert!(valid_anagram(" ", " "));
    assert!(valid_anagram("", ""));
    assert!(!valid_anagram("aaz", "zza"));
    assert!(valid_anagram("anagram", "nagaram"));
    assert!(!valid_anagram("rat", "car"));
    assert!(valid_anagram("rat", "art"));
    assert!(!valid_anagram("awesome", "aweso"));
    assert!(valid_anagram("qwerty", "qeywrt"));
    assert!(valid_anagram("texttwisttime", "timetwisttext"));
    assert!(valid_anagram("Listen", "Silent"));
}

#[test]
fn char_count_skips_non_alphanumerics() {
    let counts = char_count("HELLO world");
    let expected: Vec<(char, usize)> = vec![('d', 1), ('e', 1), ('h', 1), ('l', 3), ('o', 2), ('r', 1), ('w', 1)];
    assert_eq!(counts.into_iter().collect::<Vec<_>>(), expected);

    let counts = char_count("my phone number is 123456789!!!");
    assert_eq!(counts.get(&'m'), Some(&2));
    assert_eq!(counts.get(&'e'), Some(&2));
    assert_eq!(counts.get(&'5'), Some(&1));
    assert_eq!(counts.get(&' '), None);
    assert_eq!(counts.get(&'!'), None);

    assert!(char_count("").is_empty());
}

#[test]
fn same_frequency_compares_digit_multisets() {
    assert!(same_frequency(182, 281));
    assert!(!same_frequency(34, 14));
    assert!(same_frequency(3589578, 5879385));
    assert!(!same_frequency(22, 222));
    assert!(same_frequency(0, 0));
    assert!(!same_frequency(123, 12));
    assert!(same_frequency(132, 321));
}

#[test]
fn unique_values_in_sorted_input() {
    assert_eq!(count_unique_values(&[1, 1, 1, 1, 1, 2]), 2);
    assert_eq!(count_unique_values(&[1, 2, 3, 4, 4, 4, 7, 7, 12, 12, 13]), 7);
    assert_eq!(count_unique_values::<i32>(&[]), 0);
    assert_eq!(count_unique_values(&[-2, -1, -1, 0, 1]), 4);
    assert_eq!(count_unique_values(&["a", "a", "b"]), 2);
}

#[test]
fn sum_zero_pairs() {
    assert_eq!(sum_zero(&[-3, -2, -1, 0, 1, 2, 3]), Some((-3, 3)));
    assert_eq!(sum_zero(&[-4, -3, -2, -1, 0, 5, 10]), None);
    assert_eq!(sum_zero(&[-2, 0, 1, 3]), None);
    assert_eq!(sum_zero(&[1, 2, 3]), None);
    assert_eq!(sum_zero(&[0]), None);
}

#[test]
fn average_pairs() {
    assert!(average_pair(&[1, 2, 3], 2.5));
    assert!(average_pair(&[1, 3, 3, 5, 6, 7, 10, 12, 19], 8.0));
    assert!(!average_pair(&[-1, 0, 3, 4, 5, 6], 4.1));
    assert!(!average_pair(&[], 4.0));
    assert!(!average_pair(&[4], 4.0));
}

#[test]
fn max_subarray_sums() {
    let arr = [1, 2, 5, 2, 8, 1, 5];
    assert_eq!(max_subarray_sum(&arr, 2), Some(10));
    assert_eq!(max_subarray_sum(&arr, 4), Some(17));
    assert_eq!(max_subarray_sum(&[4, 2, 1, 6], 1), Some(6));
    assert_eq!(max_subarray_sum(&[4, 2, 1, 6, 2], 4), Some(13));
    assert_eq!(max_subarray_sum(&[], 4), None);
    assert_eq!(max_subarray_sum(&arr, 0), None);
    assert_eq!(max_subarray_sum(&[-3, -1, -2], 2), Some(-3));
}

#[test]
fn sliding_window_agrees_with_naive() {
    let arr: Vec<i64> = (0..60).map(|i| ((i * 37 + 11) % 23) - 11).collect();
    for n in 0..=arr.len() + 1 {
        assert_eq!(max_subarray_sum(&arr, n), max_subarray_sum_naive(&arr, n), "n={n}");
    }
}

#[test]
fn recursive_helpers() {
    assert_eq!(product_of_array(&[1, 2, 3]), 6);
    assert_eq!(product_of_array(&[1, 2, 3, 10]), 60);
    assert_eq!(product_of_array(&[]), 1);

    assert_eq!(reverse("awesome"), "emosewa");
    assert_eq!(reverse("school"), "loohcs");
    assert_eq!(reverse("héllo"), "olléh");
    assert_eq!(reverse(""), "");

    assert_eq!(collect_odd_values(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]), vec![1, 3, 5, 7, 9]);
    assert_eq!(collect_odd_values(&[-3, -2, 0]), vec![-3]);
    assert!(collect_odd_values(&[]).is_empty());
}

#[test]
fn add_up_to_closed_form() {
    assert_eq!(add_up_to(0), 0);
    assert_eq!(add_up_to(1), 1);
    assert_eq!(add_up_to(100), 5050);
    assert_eq!(add_up_to(10_000_000_000), 50_000_000_005_000_000_000);
    assert_eq!(add_up_to(u64::MAX), u128::from(u64::MAX) * (u128::from(u64::MAX) + 1) / 2);

    let (sum, _elapsed) = timed(|| add_up_to(6));
    assert_eq!(sum, 21);
}
