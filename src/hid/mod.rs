//! HID keystroke pipeline - pure logic, testable on the host.
//!
//! `keymap` translates characters to `(modifier, keycode)` pairs,
//! `sequencer` expands a payload into the down/up event queue, and
//! `keyboard` frames each event as the 3-byte boot-protocol report the
//! USB layer writes to the interrupt endpoint.

pub mod keyboard;
pub mod keymap;
pub mod sequencer;


pub use keyboard::{KeyReport, KEYBOARD_REPORT_DESCRIPTOR, KEY_REPORT_SIZE};
pub use keymap::{ascii_to_hid, KeyPress};
pub use sequencer::{KeystrokeEvent, KeystrokeSequencer, PayloadSequencer};
