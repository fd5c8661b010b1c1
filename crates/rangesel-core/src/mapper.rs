//! Mapping between pixel x-coordinates and values in the reference range.

use crate::range::Range;
use thiserror::Error;

/// Errors raised when a mapper is built from unusable input.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MappingError {
    #[error("Viewport width must be positive and finite, got {0}")]
    InvalidWidth(f64),
    #[error("Reference range is empty")]
    EmptyReference,
    #[error("Reference range [{0}, {1}] must be finite with a positive span")]
    DegenerateReference(f64, f64),
}

/// Affine map between `0..width` pixels and `[reference.min, reference.max]`.
///
/// This is a snapshot: it copies the reference range and width at the time it is
/// built, so it holds no borrow of the shared range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    reference: Range,
    width: f64,
}

impl CoordinateMapper {
    /// Create a mapper without validation.
    ///
    /// `pixel_to_value` divides by `width`; the host must not feed pointer input
    /// to a zero-width widget.
    pub fn new(reference: Range, width: f64) -> Self {
        Self { reference, width }
    }

    /// Create a mapper, rejecting a non-positive width or a reference that
    /// cannot span it (empty, zero-length or non-finite).
    pub fn try_new(reference: Range, width: f64) -> Result<Self, MappingError> {
        if !width.is_finite() || width <= 0.0 {
            return Err(MappingError::InvalidWidth(width));
        }
        if reference.is_empty() {
            return Err(MappingError::EmptyReference);
        }
        let (min, max) = (reference.min(), reference.max());
        if !min.is_finite() || !max.is_finite() || reference.length() <= 0.0 {
            return Err(MappingError::DegenerateReference(min, max));
        }
        Ok(Self::new(reference, width))
    }

    /// The reference range this mapper projects onto.
    pub fn reference(&self) -> Range {
        self.reference
    }

    /// The pixel width this mapper spans.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Convert a pixel x-coordinate to a value in the reference range.
    pub fn pixel_to_value(&self, x: f64) -> f64 {
        x / self.width * self.reference.length() + self.reference.min()
    }

    /// Express a value as a fraction of the reference span.
    ///
    /// Not clamped: values outside the reference give fractions outside `[0, 1]`.
    /// A zero-span reference yields `0.0` for every value.
    pub fn value_to_fraction(&self, value: f64) -> f64 {
        let span = self.reference.max() - self.reference.min();
        if span == 0.0 {
            return 0.0;
        }
        (value - self.reference.min()) / span
    }

    /// Convert a value to a pixel x-coordinate.
    pub fn value_to_pixel(&self, value: f64) -> f64 {
        self.value_to_fraction(value) * self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> CoordinateMapper {
        CoordinateMapper::new(Range::new(0.0, 1000.0), 1000.0)
    }

    #[test]
    fn test_pixel_to_value_identity_scale() {
        let m = mapper();
        assert!((m.pixel_to_value(0.0) - 0.0).abs() < f64::EPSILON);
        assert!((m.pixel_to_value(250.0) - 250.0).abs() < f64::EPSILON);
        assert!((m.pixel_to_value(1000.0) - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pixel_to_value_offset_reference() {
        let m = CoordinateMapper::new(Range::new(-50.0, 150.0), 400.0);
        assert!((m.pixel_to_value(0.0) - -50.0).abs() < 1e-10);
        assert!((m.pixel_to_value(100.0) - 0.0).abs() < 1e-10);
        assert!((m.pixel_to_value(400.0) - 150.0).abs() < 1e-10);
    }

    #[test]
    fn test_fraction_is_not_clamped() {
        let m = mapper();
        assert!((m.value_to_fraction(500.0) - 0.5).abs() < f64::EPSILON);
        assert!((m.value_to_fraction(-100.0) - -0.1).abs() < 1e-10);
        assert!((m.value_to_fraction(1500.0) - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_roundtrip() {
        let m = CoordinateMapper::new(Range::new(12.5, 87.25), 733.0);
        for value in [12.5, 20.0, 50.125, 87.25] {
            let back = m.pixel_to_value(m.value_to_fraction(value) * m.width());
            assert!((back - value).abs() < 1e-9, "{value} came back as {back}");
        }
    }

    #[test]
    fn test_zero_span_reference_yields_zero_fraction() {
        let m = CoordinateMapper::new(Range::new(10.0, 10.0), 100.0);
        assert!(m.value_to_fraction(10.0).abs() < f64::EPSILON);
        assert!(m.value_to_fraction(42.0).abs() < f64::EPSILON);
        assert!(m.value_to_pixel(42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_try_new_validation() {
        assert_eq!(
            CoordinateMapper::try_new(Range::new(0.0, 1.0), 0.0),
            Err(MappingError::InvalidWidth(0.0))
        );
        assert!(matches!(
            CoordinateMapper::try_new(Range::new(0.0, 1.0), f64::NAN),
            Err(MappingError::InvalidWidth(_))
        ));
        assert_eq!(
            CoordinateMapper::try_new(Range::empty(), 100.0),
            Err(MappingError::EmptyReference)
        );
        assert!(CoordinateMapper::try_new(Range::new(0.0, 1.0), 100.0).is_ok());
    }

    #[test]
    fn test_try_new_rejects_degenerate_reference() {
        assert_eq!(
            CoordinateMapper::try_new(Range::new(5.0, 5.0), 100.0),
            Err(MappingError::DegenerateReference(5.0, 5.0))
        );
        assert!(matches!(
            CoordinateMapper::try_new(Range::new(0.0, f64::INFINITY), 100.0),
            Err(MappingError::DegenerateReference(..))
        ));
        let mut with_nan = Range::empty();
        with_nan.set_min(f64::NAN);
        with_nan.set_max(10.0);
        assert!(matches!(
            CoordinateMapper::try_new(with_nan, 100.0),
            Err(MappingError::DegenerateReference(..))
        ));
    }
}
