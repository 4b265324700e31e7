use std::sync::Arc;

use crate::channel::Channel;
use crate::error::Result;

/// The sending half of a channel.
///
/// `Sender` is `Clone`: the underlying [`Channel`] may be shared by any
/// number of sender/receiver handles, mirroring the C original's
/// `chan_t*` being passed freely to multiple threads. Dropping the last
/// clone of either half simply drops the shared [`Channel`] — it does not
/// close it. Call [`Sender::close`] (or [`Receiver::close`]) explicitly;
/// close is a channel-scoped operation, not a per-handle one.
pub struct Sender<T> {
    inner: Arc<Channel<T>>,
}

/// The receiving half of a channel. See [`Sender`] for the sharing and
/// close-ownership model.
pub struct Receiver<T> {
    inner: Arc<Channel<T>>,
}

impl<T> Sender<T> {
    pub(crate) fn new(inner: Arc<Channel<T>>) -> Self {
        Self { inner }
    }

    /// Sends `value` into the channel, blocking until room is available
    /// (buffered) or a receiver arrives (unbuffered).
    ///
    /// Fails with [`crate::Error::Closed`] if the channel is already
    /// closed, or becomes closed while this call is blocked.
    pub fn send(&self, value: T) -> Result<()> {
        self.inner.send(value)
    }

    /// Closes the channel. Idempotent as an error: the first call
    /// succeeds, every later call (from any handle) fails with
    /// [`crate::Error::Closed`].
    pub fn close(&self) -> Result<()> {
        self.inner.close()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }

    /// Number of items currently buffered; always 0 for an unbuffered
    /// channel.
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    /// The FIFO capacity this channel was constructed with; 0 for an
    /// unbuffered channel.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    pub(crate) fn channel(&self) -> &Arc<Channel<T>> {
        &self.inner
    }
}

impl<T> Receiver<T> {
    pub(crate) fn new(inner: Arc<Channel<T>>) -> Self {
        Self { inner }
    }

    /// Receives a value from the channel, blocking until one is available.
    ///
    /// Fails with [`crate::Error::Closed`] once the channel is closed and
    /// (for a buffered channel) fully drained.
    pub fn recv(&self) -> Result<T> {
        self.inner.recv()
    }

    /// Closes the channel. See [`Sender::close`].
    pub fn close(&self) -> Result<()> {
        self.inner.close()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }

    pub fn size(&self) -> usize {
        self.inner.size()
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    pub(crate) fn channel(&self) -> &Arc<Channel<T>> {
        &self.inner
    }
}

impl<T> Clone for Sender<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Clone for Receiver<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Creates a new channel, returning its sender and receiver halves.
///
/// `capacity == 0` selects an unbuffered (rendezvous) channel; any other
/// value selects a buffered FIFO of that capacity. Fails with
/// [`crate::Error::InvalidCapacity`] if `capacity` would overflow when
/// sized for `T`.
pub fn channel<T>(capacity: usize) -> Result<(Sender<T>, Receiver<T>)> {
    let inner = Arc::new(Channel::new(capacity)?);
    Ok((Sender::new(inner.clone()), Receiver::new(inner)))
}
