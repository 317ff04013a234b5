//! keytyper - emulated USB HID keyboard that types a scripted payload.
//!
//! Everything under [`hid`] is pure, `no_std`, allocation-free logic that
//! runs and tests on the host (`cargo test`), while the `usb` module
//! (behind the `embedded` feature) plugs that logic into the Embassy USB
//! stack on an nRF52840 and is only built for the target.
//!
//! Data flow: `config::PAYLOAD` → [`hid::KeystrokeSequencer`] (one
//! key-down + key-up event per character, after a leading idle cushion) →
//! one 3-byte [`hid::KeyReport`] per interrupt-endpoint poll → host.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod hid;

#[cfg(feature = "embedded")]
pub mod usb;

pub use error::Error;
