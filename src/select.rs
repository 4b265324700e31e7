use rand::Rng;

use crate::handle::{Receiver, Sender};

/// The outcome of a [`select`] call.
#[derive(Debug)]
pub enum SelectOutcome<T> {
    /// The receive operation at this input index proceeded; carries the
    /// received value.
    Recv(usize, T),
    /// The send operation at this input index proceeded.
    Send(usize),
    /// No operation was ready, or the chosen operation failed (the
    /// channel closed between readiness inspection and the operation
    /// itself).
    None,
}

struct Candidate<'a, T> {
    recv: Option<&'a Receiver<T>>,
    send: Option<(&'a Sender<T>, usize)>,
    index: usize,
}

/// Non-blocking choice among several send and receive operations.
///
/// Inspects every channel's readiness (taking each channel's mutex just
/// long enough to read it, never two at once), then performs exactly one
/// ready operation chosen uniformly at random. Returns
/// [`SelectOutcome::None`] if nothing was ready, or if the chosen
/// candidate's operation failed — readiness can go stale between
/// inspection and the operation, so a caller relying on strictly
/// non-blocking semantics must ensure no other sender/receiver interferes
/// with the channels passed in, the same caller contract the channel
/// itself documents for this primitive.
///
/// `sends` pairs each send-candidate channel with the value it would send;
/// the value is only consumed if that candidate is chosen and its send
/// succeeds.
pub fn select<T>(recvs: &[&Receiver<T>], sends: Vec<(&Sender<T>, T)>) -> SelectOutcome<T> {
    let mut send_values: Vec<Option<T>> = Vec::with_capacity(sends.len());
    let mut send_senders: Vec<&Sender<T>> = Vec::with_capacity(sends.len());
    for (sender, value) in sends {
        send_senders.push(sender);
        send_values.push(Some(value));
    }

    let mut candidates = Vec::new();

    for (index, recv) in recvs.iter().enumerate() {
        if recv.channel().can_recv() {
            candidates.push(Candidate {
                recv: Some(*recv),
                send: None,
                index,
            });
        }
    }

    for (index, sender) in send_senders.iter().enumerate() {
        if sender.channel().can_send() {
            candidates.push(Candidate {
                recv: None,
                send: Some((*sender, index)),
                index: recvs.len() + index,
            });
        }
    }

    if candidates.is_empty() {
        return SelectOutcome::None;
    }

    let chosen = {
        let pick = rand::thread_rng().gen_range(0..candidates.len());
        candidates.swap_remove(pick)
    };

    if let Some(recv) = chosen.recv {
        return match recv.recv() {
            Ok(value) => SelectOutcome::Recv(chosen.index, value),
            Err(_) => SelectOutcome::None,
        };
    }

    let (sender, values_index) = chosen.send.expect("candidate is either recv or send");
    let value = send_values[values_index]
        .take()
        .expect("send value already consumed");
    match sender.send(value) {
        Ok(()) => SelectOutcome::Send(chosen.index),
        Err(_) => SelectOutcome::None,
    }
}
