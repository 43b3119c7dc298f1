//! LSD radix sort for unsigned integers, base 10.
//!
//! Equations:
//!   digit(n, k)   = floor(n / 10^k) mod 10
//!   digits(n)     = 1 if n = 0, else floor(log10 n) + 1
//!   D             = max digits(n) over the input
//!   for k in 0..D: stable-distribute by digit(n, k) into 10 buckets,
//!                  concatenate buckets 0..9                    O(D * (N + 10))

const BASE: u64 = 10;

/// Digit of `num` at decimal `place` (0 = ones).
pub fn get_digit(num: u64, place: u32) -> u64 {
    match BASE.checked_pow(place) {
        Some(divisor) => num / divisor % BASE,
        None => 0,
    }
}

pub fn digit_count(num: u64) -> u32 {
    if num == 0 {
        return 1;
    }
    num.ilog10() + 1
}

/// Digit count of the widest number; 0 for an empty slice.
pub fn most_digits(nums: &[u64]) -> u32 {
    nums.iter().map(|&n| digit_count(n)).max().unwrap_or(0)
}

pub fn radix_sort(nums: &[u64]) -> Vec<u64> {
    let mut out = nums.to_vec();
    for k in 0..most_digits(nums) {
        let mut buckets: Vec<Vec<u64>> = vec![Vec::new(); BASE as usize];
        for &n in &out {
            buckets[get_digit(n, k) as usize].push(n);
        }
        out = buckets.concat();
    }
    out
}
