//! USB HID keyboard report (boot protocol compatible, single key).
//!
//! Layout (3 bytes):
//! ```text
//! Byte 0: Modifier keys (bitfield)
//!         Bit 0 = Left Ctrl,  Bit 1 = Left Shift,
//!         Bit 2 = Left Alt,   Bit 3 = Left GUI,
//!         Bit 4 = Right Ctrl, Bit 5 = Right Shift,
//!         Bit 6 = Right Alt,  Bit 7 = Right GUI
//! Byte 1: Reserved (0x00)
//! Byte 2: Key code (USB HID usage code), 0x00 = no key pressed
//! ```
//!
//! One key slot is enough here: the typer only ever asserts a single key at
//! a time and releases it before the next, so there is no rollover to
//! encode. The report descriptor below declares exactly this 3-byte layout.

use super::keymap::KeyPress;

/// Keyboard report size in bytes.
pub const KEY_REPORT_SIZE: usize = 3;

/// Single-key boot-protocol keyboard report.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyReport {
    /// Modifier key bitfield.
    pub modifier: u8,
    /// Reserved byte (always 0x00 per HID spec).
    pub reserved: u8,
    /// The pressed key code, or 0x00 for all-keys-released.
    pub keycode: u8,
}

impl KeyReport {
    /// Report for a held key.
    pub const fn press(key: KeyPress) -> Self {
        Self {
            modifier: key.modifier,
            reserved: 0,
            keycode: key.keycode,
        }
    }

    /// The all-keys-released report `(0, 0, 0)`.
    ///
    /// HID interrupt endpoints are level-triggered - the host keeps reading
    /// back the last report - so every press must be followed by one of
    /// these or the key stays asserted forever.
    pub const fn release() -> Self {
        Self {
            modifier: 0,
            reserved: 0,
            keycode: 0,
        }
    }

    /// Serialise into a byte slice for USB HID transmission.
    /// Returns the number of bytes written (always 3), or 0 if the buffer
    /// is too small.
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        if buf.len() < KEY_REPORT_SIZE {
            return 0;
        }
        buf[0] = self.modifier;
        buf[1] = self.reserved;
        buf[2] = self.keycode;
        KEY_REPORT_SIZE
    }

    /// Returns `true` if no key is pressed (release event).
    pub fn is_release(&self) -> bool {
        self.modifier == 0 && self.keycode == 0
    }
}

// USB HID report descriptor for the single-key boot-protocol keyboard

/// USB HID Report Descriptor declaring the 3-byte report above:
///   - 8 modifier key bits (input)
///   - 1 reserved byte
///   - 1 key code byte (input, array)
pub const KEYBOARD_REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x06, // Usage (Keyboard)
    0xA1, 0x01, // Collection (Application)
    //
    //   - Modifier keys (8 bits) -
    0x05, 0x07, //   Usage Page (Keyboard/Keypad)
    0x19, 0xE0, //   Usage Minimum (Left Control)
    0x29, 0xE7, //   Usage Maximum (Right GUI)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x75, 0x01, //   Report Size (1)
    0x95, 0x08, //   Report Count (8)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    //   - Reserved byte -
    0x95, 0x01, //   Report Count (1)
    0x75, 0x08, //   Report Size (8)
    0x81, 0x01, //   Input (Constant) - padding
    //
    //   - Key code (1 byte) -
    0x19, 0x00, //   Usage Minimum (0)
    0x29, 0x65, //   Usage Maximum (101)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x65, //   Logical Maximum (101)
    0x75, 0x08, //   Report Size (8)
    0x95, 0x01, //   Report Count (1)
    0x81, 0x00, //   Input (Data, Array)
    //
    0xC0, // End Collection
];
