//! Application-wide constants and compile-time configuration.
//!
//! The payload, pacing, and USB identity all live here so they can be
//! tuned in one place.

// Payload

/// The keystrokes to inject once the host enumerates us.
///
/// This demo script opens vim, writes a tiny shell script, saves it with
/// `ZZ`, marks it executable and runs it. Swap in any string the keymap
/// covers; `KeystrokeSequencer::build` rejects anything it cannot type.
pub const PAYLOAD: &str =
    "vim wat.sh\ri#!/bin/bash\recho hello\u{1B}ZZchmod +x ./wat.sh\r./wat.sh\r";

/// Number of release reports queued ahead of the payload.
///
/// Some hosts poll the interrupt endpoint before enumeration fully
/// settles and discard the first reads; the cushion makes sure what they
/// throw away is harmless key-up noise, not the payload's first keystrokes.
pub const LEADING_IDLE_REPORTS: usize = 10;

/// Capacity of the pending event queue (events, not characters - each
/// character costs two events).
pub const TYPER_QUEUE_CAPACITY: usize = 512;

// USB

/// USB VID/PID - use the "pid.codes" open-source test VID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0002;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "keytyper";
pub const USB_PRODUCT: &str = "Emulated Keyboard";
pub const USB_SERIAL_NUMBER: &str = "000001";

/// USB HID interrupt endpoint polling interval (ms).
///
/// One report is delivered per poll, so this is also the typing cadence:
/// 10 ms per event, 20 ms per character.
pub const USB_HID_POLL_MS: u8 = 10;
