use thiserror::Error;

/// Errors surfaced across the channel's public API.
///
/// Mirrors the `errno` taxonomy of the C original (`EPIPE`, `EINVAL`,
/// `ENOBUFS`, `ENOMEM`) as a typed, discriminated outcome instead of a side
/// channel.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Operation attempted on a channel that has already been closed, or a
    /// buffered channel whose backlog has fully drained after close.
    #[error("channel is closed")]
    Closed,

    /// `capacity` was unusable: zero, or its byte size for `T` would
    /// overflow `isize`.
    #[error("invalid channel capacity")]
    InvalidCapacity,

    /// The FIFO rejected an add at capacity. Reachable only if a caller
    /// bypasses the waiting `send` protocol; `Channel::send` itself never
    /// returns this because it blocks instead.
    #[error("no buffer space available")]
    NoBufferSpace,

    /// The backing storage for a buffered channel's FIFO could not be
    /// allocated.
    #[error("out of memory")]
    OutOfMemory,
}

pub type Result<T> = std::result::Result<T, Error>;
