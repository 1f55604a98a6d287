use core::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The operation needs at least one entry, but the queue is empty.
    Empty,
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Empty => write!(fmt, "priority queue is empty"),
        }
    }
}

impl std::error::Error for Error {}
