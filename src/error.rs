use core::fmt;

/// The ways an operation on a [`Deque`](crate::Deque) can be rejected.
///
/// Every check runs before the deque is touched, so a returned error
/// always leaves the deque exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// An argument can never be valid: a capacity too large to round up to a
    /// power of two, a source range that does not fit its slice, or a
    /// destination slice without enough room.
    InvalidArgument(&'static str),
    /// A logical index does not address a live element (or, for inserts,
    /// the slot one past the back).
    IndexOutOfRange { index: usize, len: usize },
    /// The deque is in a state where the operation makes no sense, such as
    /// removing from an empty deque or shrinking below its length.
    InvalidState(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Error::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for a deque of length {len}")
            }
            Error::InvalidState(msg) => write!(f, "invalid state: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
