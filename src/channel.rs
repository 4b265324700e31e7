use std::sync::{Condvar, Mutex};

use log::debug;

use crate::error::{Error, Result};
use crate::fifo::Fifo;

/// Mode-specific storage. `Buffered` owns the FIFO; `Unbuffered` owns the
/// single in-flight rendezvous slot.
enum Mode<T> {
    Buffered(Fifo<T>),
    Unbuffered(Option<T>),
}

struct Inner<T> {
    mode: Mode<T>,
    closed: bool,
    r_waiting: usize,
    w_waiting: usize,
}

/// The shared state machine behind a channel: a main mutex, two condition
/// variables, and a read/write exclusion pair used only by the unbuffered
/// rendezvous path.
///
/// `capacity` is fixed at construction: `0` selects the unbuffered
/// (rendezvous) mode, any other value selects a buffered FIFO of that
/// capacity.
pub(crate) struct Channel<T> {
    capacity: usize,
    inner: Mutex<Inner<T>>,
    r_cond: Condvar,
    w_cond: Condvar,
    r_mu: Mutex<()>,
    w_mu: Mutex<()>,
}

impl<T> Channel<T> {
    pub(crate) fn new(capacity: usize) -> Result<Self> {
        let mode = if capacity == 0 {
            Mode::Unbuffered(None)
        } else {
            Mode::Buffered(Fifo::new(capacity)?)
        };

        Ok(Self {
            capacity,
            inner: Mutex::new(Inner {
                mode,
                closed: false,
                r_waiting: 0,
                w_waiting: 0,
            }),
            r_cond: Condvar::new(),
            w_cond: Condvar::new(),
            r_mu: Mutex::new(()),
            w_mu: Mutex::new(()),
        })
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    fn is_buffered(&self) -> bool {
        self.capacity > 0
    }

    pub(crate) fn send(&self, value: T) -> Result<()> {
        if self.is_buffered() {
            self.buffered_send(value)
        } else {
            self.unbuffered_send(value)
        }
    }

    pub(crate) fn recv(&self) -> Result<T> {
        if self.is_buffered() {
            self.buffered_recv()
        } else {
            self.unbuffered_recv()
        }
    }

    /// Number of items currently buffered; always 0 for an unbuffered
    /// channel.
    pub(crate) fn size(&self) -> usize {
        let inner = self.inner.lock().expect("channel mutex poisoned");
        match &inner.mode {
            Mode::Buffered(fifo) => fifo.size(),
            Mode::Unbuffered(_) => 0,
        }
    }

    pub(crate) fn close(&self) -> Result<()> {
        let mut inner = self.inner.lock().expect("channel mutex poisoned");
        if inner.closed {
            return Err(Error::Closed);
        }
        inner.closed = true;
        self.r_cond.notify_all();
        self.w_cond.notify_all();
        Ok(())
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.inner.lock().expect("channel mutex poisoned").closed
    }

    fn buffered_send(&self, value: T) -> Result<()> {
        let mut inner = self.inner.lock().expect("channel mutex poisoned");

        loop {
            if inner.closed {
                return Err(Error::Closed);
            }
            let full = match &inner.mode {
                Mode::Buffered(fifo) => fifo.is_full(),
                Mode::Unbuffered(_) => unreachable!("buffered_send on unbuffered channel"),
            };
            if !full {
                break;
            }
            debug!("send blocking: buffer at capacity {}", self.capacity);
            inner.w_waiting += 1;
            inner = self.w_cond.wait(inner).expect("channel mutex poisoned");
            inner.w_waiting -= 1;
        }

        match &mut inner.mode {
            Mode::Buffered(fifo) => fifo.add(value).expect("fifo full after capacity check"),
            Mode::Unbuffered(_) => unreachable!("buffered_send on unbuffered channel"),
        }

        if inner.r_waiting > 0 {
            self.r_cond.notify_one();
        }
        Ok(())
    }

    fn buffered_recv(&self) -> Result<T> {
        let mut inner = self.inner.lock().expect("channel mutex poisoned");

        loop {
            let empty = match &inner.mode {
                Mode::Buffered(fifo) => fifo.is_empty(),
                Mode::Unbuffered(_) => unreachable!("buffered_recv on unbuffered channel"),
            };
            if !empty {
                break;
            }
            if inner.closed {
                return Err(Error::Closed);
            }
            debug!("recv blocking: buffer empty");
            inner.r_waiting += 1;
            inner = self.r_cond.wait(inner).expect("channel mutex poisoned");
            inner.r_waiting -= 1;
        }

        let value = match &mut inner.mode {
            Mode::Buffered(fifo) => fifo.remove().expect("fifo empty after size check"),
            Mode::Unbuffered(_) => unreachable!("buffered_recv on unbuffered channel"),
        };

        if inner.w_waiting > 0 {
            self.w_cond.notify_one();
        }
        Ok(value)
    }

    fn unbuffered_send(&self, value: T) -> Result<()> {
        let _w_guard = self.w_mu.lock().expect("write-side mutex poisoned");
        let mut inner = self.inner.lock().expect("channel mutex poisoned");

        if inner.closed {
            return Err(Error::Closed);
        }

        match &mut inner.mode {
            Mode::Unbuffered(data) => *data = Some(value),
            Mode::Buffered(_) => unreachable!("unbuffered_send on buffered channel"),
        }
        inner.w_waiting += 1;

        if inner.r_waiting > 0 {
            self.r_cond.notify_one();
        }

        debug!("send blocking: waiting for matching receiver");
        // The matching receiver consumes `data`, decrements `w_waiting`, and
        // signals `w_cond` before this wait returns.
        let _inner = self.w_cond.wait(inner).expect("channel mutex poisoned");
        Ok(())
    }

    fn unbuffered_recv(&self) -> Result<T> {
        let _r_guard = self.r_mu.lock().expect("read-side mutex poisoned");
        let mut inner = self.inner.lock().expect("channel mutex poisoned");

        while !inner.closed && inner.w_waiting == 0 {
            debug!("recv blocking: waiting for a sender");
            inner.r_waiting += 1;
            inner = self.r_cond.wait(inner).expect("channel mutex poisoned");
            inner.r_waiting -= 1;
        }

        // Matches the C original: once closed, recv fails even if a sender
        // is mid-rendezvous (`w_waiting > 0`); that sender still wakes and
        // reports success when `close` broadcasts `w_cond` below, since
        // `unbuffered_send` does not re-check `closed` after its wait.
        if inner.closed {
            return Err(Error::Closed);
        }

        let value = match &mut inner.mode {
            Mode::Unbuffered(data) => data.take().expect("rendezvous slot unexpectedly empty"),
            Mode::Buffered(_) => unreachable!("unbuffered_recv on buffered channel"),
        };
        inner.w_waiting -= 1;

        self.w_cond.notify_one();
        Ok(value)
    }

    /// Receive-readiness for [`crate::select`], taking the channel's mutex
    /// just long enough to inspect it.
    pub(crate) fn can_recv(&self) -> bool {
        let inner = self.inner.lock().expect("channel mutex poisoned");
        match &inner.mode {
            Mode::Buffered(fifo) => !fifo.is_empty(),
            Mode::Unbuffered(_) => inner.w_waiting > 0,
        }
    }

    /// Send-readiness for [`crate::select`], taking the channel's mutex
    /// just long enough to inspect it.
    pub(crate) fn can_send(&self) -> bool {
        let inner = self.inner.lock().expect("channel mutex poisoned");
        match &inner.mode {
            Mode::Buffered(fifo) => !fifo.is_full(),
            Mode::Unbuffered(_) => inner.r_waiting > 0,
        }
    }
}
