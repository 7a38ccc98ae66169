#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a hypervolume is built from, or computed over, an empty point set.
    #[error("point set cannot be empty")]
    EmptyPointSet,

    /// Returned when the points have one objective or none.
    #[error("points of dimension > 1 required, got {dimension}")]
    DimensionTooSmall {
        /// The dimension of the first point.
        dimension: usize,
    },

    /// Returned when a point's dimension differs from the first point's.
    #[error(
        "dimension mismatch: expected {expected} objectives but point {point_index} has {got}"
    )]
    DimensionMismatch {
        /// The dimension of the first point.
        expected: usize,
        /// The dimension of the offending point.
        got: usize,
        /// The index of the offending point.
        point_index: usize,
    },

    /// Returned when the reference point's dimension differs from the point set's.
    #[error("reference point dimension mismatch: point set has {expected} objectives, got {got}")]
    ReferenceDimensionMismatch {
        /// The dimension of the point set.
        expected: usize,
        /// The dimension of the reference point.
        got: usize,
    },

    /// Returned when an algorithm only handles a fixed number of objectives.
    #[error("{algorithm} requires {expected} objectives, got {got}")]
    UnsupportedDimension {
        /// The name of the algorithm.
        algorithm: &'static str,
        /// The only dimension the algorithm accepts.
        expected: usize,
        /// The dimension it was given.
        got: usize,
    },

    /// Returned when a WFG stop dimension other than 2 or 3 is requested.
    #[error("invalid stop dimension: {0} (must be 2 or 3)")]
    InvalidStopDimension(usize),

    /// Returned when an exclusive contribution is requested for a missing point.
    #[error("point index {index} out of range for a set of {len} points")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of points in the set.
        len: usize,
    },

    /// Returned when some point lies outside the box bounded by the reference point.
    #[error(
        "reference point is invalid: point {point_index} exceeds it in objective {objective}"
    )]
    ReferencePointNotDominated {
        /// The index of the point outside the reference box.
        point_index: usize,
        /// The first objective in which the point is worse than (or incomparable to) the reference.
        objective: usize,
    },
}

/// Coarse classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed point set, reference point, or configuration.
    InvalidInput,
    /// A point index beyond the set's bounds.
    IndexOutOfRange,
    /// The reference point does not bound the point set.
    GeometryPrecondition,
}

impl Error {
    /// Returns the category this error belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyPointSet
            | Error::DimensionTooSmall { .. }
            | Error::DimensionMismatch { .. }
            | Error::ReferenceDimensionMismatch { .. }
            | Error::UnsupportedDimension { .. }
            | Error::InvalidStopDimension(_) => ErrorKind::InvalidInput,
            Error::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Error::ReferencePointNotDominated { .. } => ErrorKind::GeometryPrecondition,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(Error::EmptyPointSet.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            Error::IndexOutOfRange { index: 3, len: 2 }.kind(),
            ErrorKind::IndexOutOfRange
        );
        assert_eq!(
            Error::ReferencePointNotDominated {
                point_index: 0,
                objective: 1
            }
            .kind(),
            ErrorKind::GeometryPrecondition
        );
        assert_eq!(
            Error::UnsupportedDimension {
                algorithm: "native2d",
                expected: 2,
                got: 3
            }
            .kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn test_display() {
        let err = Error::DimensionMismatch {
            expected: 3,
            got: 2,
            point_index: 4,
        };
        assert_eq!(
            err.to_string(),
            "dimension mismatch: expected 3 objectives but point 4 has 2"
        );
        assert_eq!(
            Error::IndexOutOfRange { index: 5, len: 2 }.to_string(),
            "point index 5 out of range for a set of 2 points"
        );
    }
}
