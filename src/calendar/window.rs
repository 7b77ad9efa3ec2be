//! Inclusive time-window membership

use crate::types::{Instant, TimeWindow};

/// `start <= target <= end`. No check that `start <= end`; an inverted
/// window matches nothing.
pub fn in_window(target: Instant, start: Instant, end: Instant) -> bool {
    TimeWindow::new(start, end).contains(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(millis: i64) -> Instant {
        Instant::from_millis(millis).unwrap()
    }

    #[test]
    fn matches_comparison_definition() {
        let points = [-5, 0, 1, 999, 1000, 1001];
        for &t in &points {
            for &a in &points {
                for &b in &points {
                    assert_eq!(in_window(at(t), at(a), at(b)), a <= t && t <= b);
                }
            }
        }
    }

    #[test]
    fn degenerate_window_holds_its_single_point() {
        assert!(in_window(at(7), at(7), at(7)));
        assert!(!in_window(at(8), at(7), at(7)));
    }

    #[test]
    fn inverted_window_is_empty() {
        for t in [0, 500, 1000, 1500, 2000] {
            assert!(!in_window(at(t), at(1500), at(500)));
        }
    }
}
