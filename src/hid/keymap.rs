//! ASCII → USB HID keycode translation (US-QWERTY).
//!
//! Maps a single character to the `(modifier, keycode)` pair that types it,
//! per the USB HID Usage Tables (Keyboard/Keypad page 0x07). The modifier
//! byte is one of three plain values - 0 (none), 1 (Left Ctrl), 2 (Left
//! Shift) - never a combined bitmask; the emulated device never chords
//! modifiers.
//!
//! The map is written as a single exhaustive `match` so duplicate keys are
//! impossible by construction, and [`check_consistency`] verifies at queue
//! build time that no two distinct characters resolve to the same pair.

use crate::error::Error;

/// Modifier byte value for "no modifier held".
pub const MOD_NONE: u8 = 0x00;
/// Modifier byte value for Left Ctrl (bit 0 of the HID modifier bitmap).
pub const MOD_LEFT_CTRL: u8 = 0x01;
/// Modifier byte value for Left Shift (bit 1 of the HID modifier bitmap).
pub const MOD_LEFT_SHIFT: u8 = 0x02;

/// A single keypress as the host sees it: modifier byte + key usage code.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyPress {
    /// Modifier byte (0, `MOD_LEFT_CTRL`, or `MOD_LEFT_SHIFT`).
    pub modifier: u8,
    /// USB HID usage code on the Keyboard/Keypad page.
    pub keycode: u8,
}

impl KeyPress {
    /// The canonical all-keys-released pair `(0, 0)`.
    pub const RELEASE: Self = Self::new(MOD_NONE, 0x00);

    pub const fn new(modifier: u8, keycode: u8) -> Self {
        Self { modifier, keycode }
    }

    /// Returns `true` for the release sentinel.
    pub fn is_release(&self) -> bool {
        *self == Self::RELEASE
    }
}

/// Translate a character to the HID keypress that types it.
///
/// `None` translates to [`KeyPress::RELEASE`], the `(0, 0)` key-up report.
/// Characters outside the declared US-QWERTY set fail with
/// [`Error::UnsupportedCharacter`]; nothing is silently dropped or
/// substituted, since substitution would corrupt the injected text.
pub fn ascii_to_hid(input: Option<char>) -> Result<KeyPress, Error> {
    match input {
        None => Ok(KeyPress::RELEASE),
        Some(c) => lookup(canonical(c)).ok_or(Error::UnsupportedCharacter(c)),
    }
}

/// Canonicalize input aliases before lookup.
///
/// CR and LF both type the Enter key; folding CR onto LF here keeps the
/// declared map itself injective.
fn canonical(c: char) -> char {
    match c {
        '\r' => '\n',
        other => other,
    }
}

/// The de-duplicated US-QWERTY character map.
///
/// Keycode 0x32 (Non-US `#`) is deliberately absent: its only plausible
/// input character is ambiguous on a US layout, so it is an explicit
/// "unsupported" entry rather than an accidental gap.
fn lookup(c: char) -> Option<KeyPress> {
    let pair = match c {
        // Letters: 'a' is usage 0x04.
        'a'..='z' => KeyPress::new(MOD_NONE, 0x04 + (c as u8 - b'a')),
        'A'..='Z' => KeyPress::new(MOD_LEFT_SHIFT, 0x04 + (c as u8 - b'A')),

        // Digits: '1' is usage 0x1E, '0' wraps to 0x27.
        '1'..='9' => KeyPress::new(MOD_NONE, 0x1E + (c as u8 - b'1')),
        '0' => KeyPress::new(MOD_NONE, 0x27),

        // Whitespace and control keys.
        '\n' => KeyPress::new(MOD_NONE, 0x28), // Enter (CR folds here too)
        '\u{1B}' => KeyPress::new(MOD_NONE, 0x29), // Escape
        '\u{7F}' => KeyPress::new(MOD_NONE, 0x2A), // Delete (Backspace)
        '\t' => KeyPress::new(MOD_NONE, 0x2B),
        ' ' => KeyPress::new(MOD_NONE, 0x2C),

        // Unshifted punctuation.
        '-' => KeyPress::new(MOD_NONE, 0x2D),
        '=' => KeyPress::new(MOD_NONE, 0x2E),
        '[' => KeyPress::new(MOD_NONE, 0x2F),
        ']' => KeyPress::new(MOD_NONE, 0x30),
        '\\' => KeyPress::new(MOD_NONE, 0x31),
        ';' => KeyPress::new(MOD_NONE, 0x33),
        '\'' => KeyPress::new(MOD_NONE, 0x34),
        '`' => KeyPress::new(MOD_NONE, 0x35),
        ',' => KeyPress::new(MOD_NONE, 0x36),
        '.' => KeyPress::new(MOD_NONE, 0x37),
        '/' => KeyPress::new(MOD_NONE, 0x38),

        // Shifted digit row.
        '!' => KeyPress::new(MOD_LEFT_SHIFT, 0x1E),
        '@' => KeyPress::new(MOD_LEFT_SHIFT, 0x1F),
        '#' => KeyPress::new(MOD_LEFT_SHIFT, 0x20),
        '$' => KeyPress::new(MOD_LEFT_SHIFT, 0x21),
        '%' => KeyPress::new(MOD_LEFT_SHIFT, 0x22),
        '^' => KeyPress::new(MOD_LEFT_SHIFT, 0x23),
        '&' => KeyPress::new(MOD_LEFT_SHIFT, 0x24),
        '*' => KeyPress::new(MOD_LEFT_SHIFT, 0x25),
        '(' => KeyPress::new(MOD_LEFT_SHIFT, 0x26),
        ')' => KeyPress::new(MOD_LEFT_SHIFT, 0x27),

        // Shifted punctuation.
        '_' => KeyPress::new(MOD_LEFT_SHIFT, 0x2D),
        '+' => KeyPress::new(MOD_LEFT_SHIFT, 0x2E),
        '{' => KeyPress::new(MOD_LEFT_SHIFT, 0x2F),
        '}' => KeyPress::new(MOD_LEFT_SHIFT, 0x30),
        '|' => KeyPress::new(MOD_LEFT_SHIFT, 0x31),
        ':' => KeyPress::new(MOD_LEFT_SHIFT, 0x33),
        '"' => KeyPress::new(MOD_LEFT_SHIFT, 0x34),
        '~' => KeyPress::new(MOD_LEFT_SHIFT, 0x35),
        '<' => KeyPress::new(MOD_LEFT_SHIFT, 0x36),
        '>' => KeyPress::new(MOD_LEFT_SHIFT, 0x37),
        '?' => KeyPress::new(MOD_LEFT_SHIFT, 0x38),

        // Ctrl+letter control characters (SOH..SUB). Tab (Ctrl+I), LF
        // (Ctrl+J) and CR (Ctrl+M) are handled above as whitespace keys
        // and must not reappear here as chorded presses.
        '\u{01}'..='\u{08}' | '\u{0B}' | '\u{0C}' | '\u{0E}'..='\u{1A}' => {
            KeyPress::new(MOD_LEFT_CTRL, 0x03 + c as u8)
        }

        _ => return None,
    };
    Some(pair)
}

/// Verify the character map is injective: no two distinct canonical
/// characters may resolve to the same `(modifier, keycode)` pair.
///
/// The map is a fixed `match`, so this can only fail if an edit introduces
/// a conflicting arm; running it once at sequencer build time turns that
/// mistake into [`Error::AmbiguousMapping`] instead of silently typed
/// garbage.
pub fn check_consistency() -> Result<(), Error> {
    for a in 0x00u8..=0x7F {
        let ca = a as char;
        if ca != canonical(ca) {
            continue; // input alias, not a map entry
        }
        let Some(pa) = lookup(ca) else { continue };
        for b in (a + 1)..=0x7F {
            let cb = b as char;
            if cb != canonical(cb) {
                continue;
            }
            if lookup(cb) == Some(pa) {
                return Err(Error::AmbiguousMapping(cb));
            }
        }
    }
    Ok(())
}
