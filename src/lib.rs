//! A thread-safe, in-process CSP-style channel.
//!
//! `gochan` provides a typed, synchronising channel for passing owned
//! values between threads, in two modes fixed at construction:
//!
//! - **Buffered**: a fixed-capacity FIFO. `send` blocks while the FIFO is
//!   full; `recv` blocks while it is empty.
//! - **Unbuffered** (`capacity == 0`): a rendezvous. `send` blocks until a
//!   matching `recv` has consumed the value and vice versa.
//!
//! Closing a channel ([`Sender::close`]/[`Receiver::close`]) is a
//! monotonic, channel-scoped operation: every subsequent `send` fails, and
//! `recv` fails once any buffered backlog has drained.
//!
//! [`select`] offers a non-blocking choice among several ready send/recv
//! operations.
//!
//! ```
//! use gochan::channel;
//!
//! let (tx, rx) = channel::<&str>(1).unwrap();
//! tx.send("foo").unwrap();
//! assert_eq!(rx.recv().unwrap(), "foo");
//! ```
mod channel;
mod error;
mod fifo;
mod handle;
mod select;

pub use error::{Error, Result};
pub use handle::{Receiver, Sender, channel};
pub use select::{SelectOutcome, select};
