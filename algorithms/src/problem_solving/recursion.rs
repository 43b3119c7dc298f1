//! Recursive exercises. Each call handles the head and recurses on the rest.

pub fn product_of_array(arr: &[i64]) -> i64 {
    match arr.split_first() {
        None => 1,
        Some((first, rest)) => first * product_of_array(rest),
    }
}

pub fn reverse(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut reversed = reverse(chars.as_str());
            reversed.push(first);
            reversed
        }
    }
}

pub fn collect_odd_values(arr: &[i64]) -> Vec<i64> {
    let Some((&first, rest)) = arr.split_first() else {
        return Vec::new();
    };
    let mut odds = Vec::new();
    if first % 2 != 0 {
        odds.push(first);
    }
    odds.extend(collect_odd_values(rest));
    odds
}
