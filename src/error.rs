/// The ways an operation on one of the containers can be refused.
/// A refused operation leaves the container exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An absent item was offered to an insertion.
    #[error("item is absent")]
    InvalidArgument,
    /// A peek, removal, or sample was attempted on an empty container.
    #[error("container is empty")]
    EmptyContainer,
    /// An iterator was advanced after its last item.
    #[error("iterator is exhausted")]
    EndOfSequence,
}

pub type Result<T> = std::result::Result<T, Error>;
