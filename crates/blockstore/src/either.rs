//! Two-variant value container.

/// A value that is exactly one of two kinds.
///
/// Consumers extract the payload through [`Either::either`] or by matching,
/// which forces both variants to be handled; there is no way to read the
/// wrong side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Either<L, R> {
    /// The left kind.
    Left(L),
    /// The right kind.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Applies exactly one of the two functions, depending on the variant,
    /// and returns its result.
    pub fn either<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Transforms the left payload, passing a right value through unchanged.
    pub fn map_left<T>(self, f: impl FnOnce(L) -> T) -> Either<T, R> {
        match self {
            Self::Left(value) => Either::Left(f(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms the right payload, passing a left value through unchanged.
    pub fn map_right<T>(self, f: impl FnOnce(R) -> T) -> Either<L, T> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(f(value)),
        }
    }
}
