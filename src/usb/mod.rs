//! USB Device subsystem - presents the emulated keyboard to the host.
//!
//! The nRF52840's built-in USB 2.0 Full-Speed controller is driven by
//! `embassy-usb`. We expose a single boot-protocol HID keyboard interface
//! whose interrupt endpoint is polled by the host every
//! `config::USB_HID_POLL_MS` milliseconds; the typer task answers each
//! poll with the next report from the keystroke sequencer.

pub mod hid_device;
