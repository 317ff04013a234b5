//! Keystroke sequencer - expands a payload into a FIFO queue of HID events.
//!
//! The queue is built once, up front, from the whole payload: a cushion of
//! `leading_idle` release events (for hosts that start polling before
//! enumeration settles and discard what they read), then a key-down
//! followed by an explicit key-up for every character. The USB layer drains
//! it one event per "interrupt endpoint buffer available" poll; once empty
//! the sequencer answers every further poll with `None` and the keyboard
//! sits idle.
//!
//! There is deliberately no failure mode after construction: unsupported
//! characters are rejected by [`build`](KeystrokeSequencer::build) before a
//! single report leaves the device, so partial typing of a bad payload
//! cannot happen. `poll` only moves in-memory state and never blocks,
//! which keeps it safe to call from the endpoint's time budget.

use heapless::Deque;

use super::keyboard::KeyReport;
use super::keymap::{self, KeyPress};
use crate::error::Error;

/// One entry in the pending queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeystrokeEvent {
    /// Assert a key (with its modifier).
    KeyDown(KeyPress),
    /// Release all keys; serialises to the `(0, 0)` report.
    KeyUp,
}

/// Sequencer with the default queue capacity from [`crate::config`].
pub type PayloadSequencer = KeystrokeSequencer<{ crate::config::TYPER_QUEUE_CAPACITY }>;

/// FIFO queue of keystroke events, drained by the endpoint poll callback.
///
/// Lifecycle: `build` → active (non-empty) → idle (empty, terminal). There
/// is no way back; typing a new payload means building a new sequencer.
/// Dropping it mid-drain discards the queue - no keystrokes are owed on
/// teardown.
#[derive(Debug)]
pub struct KeystrokeSequencer<const N: usize> {
    queue: Deque<KeystrokeEvent, N>,
}

impl<const N: usize> KeystrokeSequencer<N> {
    /// Build the event queue for `payload`.
    ///
    /// Runs the keymap self-check, then enqueues `leading_idle` [`KeyUp`]
    /// events followed by a `KeyDown`/`KeyUp` pair per character - exactly
    /// `leading_idle + 2 * payload.chars().count()` events in total.
    ///
    /// Fails with [`Error::UnsupportedCharacter`] if the payload contains a
    /// character outside the keymap, or [`Error::BufferOverflow`] if the
    /// events do not fit in `N`. On error no queue escapes; the whole
    /// payload is rejected.
    ///
    /// [`KeyUp`]: KeystrokeEvent::KeyUp
    pub fn build(payload: &str, leading_idle: usize) -> Result<Self, Error> {
        keymap::check_consistency()?;

        let mut queue = Deque::new();
        for _ in 0..leading_idle {
            queue
                .push_back(KeystrokeEvent::KeyUp)
                .map_err(|_| Error::BufferOverflow)?;
        }
        for c in payload.chars() {
            let press = keymap::ascii_to_hid(Some(c))?;
            queue
                .push_back(KeystrokeEvent::KeyDown(press))
                .map_err(|_| Error::BufferOverflow)?;
            queue
                .push_back(KeystrokeEvent::KeyUp)
                .map_err(|_| Error::BufferOverflow)?;
        }
        Ok(Self { queue })
    }

    /// Pop and serialise the front event.
    ///
    /// Returns `None` once the queue is exhausted, and keeps returning
    /// `None` on every later call - an empty queue is normal termination,
    /// not an error.
    pub fn poll(&mut self) -> Option<KeyReport> {
        self.queue.pop_front().map(|event| match event {
            KeystrokeEvent::KeyDown(press) => KeyReport::press(press),
            KeystrokeEvent::KeyUp => KeyReport::release(),
        })
    }

    /// Number of events still pending.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` once every event has been delivered.
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }
}
