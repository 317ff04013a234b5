//! Unified error type for keytyper.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Derives `defmt::Format` (behind the `defmt` feature) for efficient
//! on-target logging.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Keymap / sequencer
    /// The payload contains a character with no US-QWERTY HID mapping.
    /// Raised at queue build time; the whole payload is rejected rather
    /// than silently dropping or substituting the character.
    UnsupportedCharacter(char),

    /// The character map resolved two distinct characters to the same
    /// `(modifier, keycode)` pair. Build-time self-check of the map, not
    /// a runtime condition on user input.
    AmbiguousMapping(char),

    /// The payload expands to more events than the queue can hold.
    BufferOverflow,

    // USB
    /// USB stack returned an error.
    Usb,
}
