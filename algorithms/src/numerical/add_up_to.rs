use std::time::{Duration, Instant};

/// Sum of 1..=n in closed form: n(n+1)/2. O(1).
pub fn add_up_to(n: u64) -> u128 {
    let n = u128::from(n);
    n * (n + 1) / 2
}

/// Run `f` once and report how long it took.
pub fn timed<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}
