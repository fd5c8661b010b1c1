//! Numeric interval shared between the widget and its host.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// A mutable numeric interval `[min, max]`.
///
/// A range is either a proper interval with `min <= max` (zero length allowed)
/// or empty. Empty is stored as the inverted sentinel `min = f64::MAX,
/// max = f64::MIN`, so an empty range is never confused with `[x, x]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    min: f64,
    max: f64,
}

impl Default for Range {
    fn default() -> Self {
        Self::empty()
    }
}

impl Range {
    /// Create a range, ordering the bounds so that `min <= max`.
    pub fn new(min: f64, max: f64) -> Self {
        let mut range = Self::empty();
        range.set(min, max);
        range
    }

    /// Create an empty range.
    pub const fn empty() -> Self {
        Self {
            min: f64::MAX,
            max: f64::MIN,
        }
    }

    /// Lower bound. Meaningless when the range is empty.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound. Meaningless when the range is empty.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Set the lower bound only.
    ///
    /// The caller keeps `min <= max`; a larger value leaves the range reading as empty.
    pub fn set_min(&mut self, min: f64) {
        self.min = min;
    }

    /// Set the upper bound only.
    ///
    /// The caller keeps `min <= max`; a smaller value leaves the range reading as empty.
    pub fn set_max(&mut self, max: f64) {
        self.max = max;
    }

    /// Set both bounds, ordering them so that `min <= max`.
    pub fn set(&mut self, a: f64, b: f64) {
        if a <= b {
            self.min = a;
            self.max = b;
        } else {
            self.min = b;
            self.max = a;
        }
    }

    /// Translate both bounds by `delta`. No-op on an empty range.
    pub fn shift(&mut self, delta: f64) {
        if self.is_empty() {
            return;
        }
        self.min += delta;
        self.max += delta;
    }

    /// Span of the range (`max - min`).
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Whether the range holds no interval at all.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Remove both bounds, leaving the range empty.
    pub fn clear(&mut self) {
        *self = Self::empty();
    }
}

/// Shared, externally owned handle to a [`Range`].
///
/// The widget and its host hold clones of the same handle; all access happens on
/// the UI thread, so interior mutability through `RefCell` is sufficient.
pub type SharedRange = Rc<RefCell<Range>>;

/// Wrap a range in a [`SharedRange`] handle.
pub fn shared(range: Range) -> SharedRange {
    Rc::new(RefCell::new(range))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_bounds() {
        let range = Range::new(30.0, 10.0);
        assert!((range.min() - 10.0).abs() < f64::EPSILON);
        assert!((range.max() - 30.0).abs() < f64::EPSILON);
        assert!((range.length() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_is_distinct_from_zero_length() {
        assert!(Range::empty().is_empty());
        assert!(Range::default().is_empty());

        let point = Range::new(5.0, 5.0);
        assert!(!point.is_empty());
        assert!(point.length().abs() < f64::EPSILON);
    }

    #[test]
    fn test_clear() {
        let mut range = Range::new(1.0, 2.0);
        range.clear();
        assert!(range.is_empty());
        assert_eq!(range, Range::empty());
    }

    #[test]
    fn test_shift() {
        let mut range = Range::new(100.0, 300.0);
        range.shift(-50.0);
        assert!((range.min() - 50.0).abs() < f64::EPSILON);
        assert!((range.max() - 250.0).abs() < f64::EPSILON);

        let mut empty = Range::empty();
        empty.shift(10.0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_single_bound_setters() {
        let mut range = Range::new(0.0, 10.0);
        range.set_max(20.0);
        range.set_min(5.0);
        assert_eq!(range, Range::new(5.0, 20.0));

        range.set_min(25.0);
        assert!(range.is_empty());
    }

    #[test]
    fn test_shared_handle_sees_mutation() {
        let a = shared(Range::new(0.0, 1.0));
        let b = Rc::clone(&a);
        a.borrow_mut().set(2.0, 3.0);
        assert_eq!(*b.borrow(), Range::new(2.0, 3.0));
    }

    #[test]
    fn test_serde_roundtrip() {
        let range = Range::new(-1.5, 4.0);
        let json = serde_json::to_string(&range).unwrap();
        let back: Range = serde_json::from_str(&json).unwrap();
        assert_eq!(range, back);
    }
}
