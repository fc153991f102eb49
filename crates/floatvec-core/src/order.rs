//! Sort and iteration direction.

/// Direction for sorting a container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Smallest value first.
    #[default]
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortOrder {
    /// Whether `a` belongs strictly before `b` in this order.
    ///
    /// Comparisons involving NaN are always `false`, so NaN never
    /// strictly precedes anything in either direction.
    #[inline]
    pub fn precedes<T: PartialOrd>(self, a: T, b: T) -> bool {
        match self {
            Self::Ascending => a < b,
            Self::Descending => a > b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedes_flips_with_direction() {
        assert!(SortOrder::Ascending.precedes(1.0, 2.0));
        assert!(!SortOrder::Ascending.precedes(2.0, 1.0));
        assert!(SortOrder::Descending.precedes(2.0, 1.0));
        assert!(!SortOrder::Descending.precedes(1.0, 1.0));
    }

    #[test]
    fn nan_never_precedes() {
        assert!(!SortOrder::Ascending.precedes(f32::NAN, 1.0));
        assert!(!SortOrder::Descending.precedes(1.0, f32::NAN));
    }

    #[test]
    fn default_is_ascending() {
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
    }
}
