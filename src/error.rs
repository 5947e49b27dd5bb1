//! Error types returned by the driver.

/// A canvas or font was constructed with dimensions it cannot represent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidDimensions;

/// Errors produced while talking to the AS1130.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// The display interface failed to write. The write sequence is abandoned at that point, so a
    /// frame may be left partially updated.
    Interface(E),
    /// A register argument lies outside the range the chip accepts. Nothing was sent.
    OutOfRange,
    /// Canvas or font dimensions are unusable.
    InvalidDimensions,
}

impl<E> From<InvalidDimensions> for Error<E> {
    fn from(_: InvalidDimensions) -> Self {
        Error::InvalidDimensions
    }
}
