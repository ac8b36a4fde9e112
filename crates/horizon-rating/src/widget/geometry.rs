//! Size hints for widget layout.

use horizon_rating_render::Size;

/// Size hint information for layout negotiation.
///
/// Widgets report their preferred size and an optional minimum so hosts can
/// allocate space for them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SizeHint {
    /// The preferred size for the widget to display optimally.
    pub preferred: Size,

    /// The minimum acceptable size. If `None`, the widget has no minimum
    /// constraint (can shrink to zero).
    pub minimum: Option<Size>,
}

impl SizeHint {
    /// Create a new size hint with the specified preferred size.
    pub fn new(preferred: Size) -> Self {
        Self {
            preferred,
            minimum: None,
        }
    }

    /// Set the minimum size.
    pub fn with_minimum(mut self, minimum: Size) -> Self {
        self.minimum = Some(minimum);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_hint_builders() {
        let hint = SizeHint::new(Size::new(100.0, 20.0)).with_minimum(Size::new(50.0, 20.0));
        assert_eq!(hint.preferred, Size::new(100.0, 20.0));
        assert_eq!(hint.minimum, Some(Size::new(50.0, 20.0)));
    }

    #[test]
    fn test_default_is_unconstrained() {
        let hint = SizeHint::default();
        assert_eq!(hint.preferred, Size::ZERO);
        assert_eq!(hint.minimum, None);
    }
}
