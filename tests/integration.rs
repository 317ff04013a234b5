//! Integration tests for keytyper host-testable logic.
//!
//! Drive the public API end to end: payload in, stream of 3-byte HID
//! reports out, exactly as the USB layer would see it.

use keytyper::config;
use keytyper::hid::{ascii_to_hid, KeystrokeSequencer, PayloadSequencer, KEY_REPORT_SIZE};
use keytyper::Error;

#[test]
fn default_payload_is_fully_typeable() {
    for c in config::PAYLOAD.chars() {
        assert!(
            ascii_to_hid(Some(c)).is_ok(),
            "default payload contains untypeable char {:?}",
            c
        );
    }
}

#[test]
fn default_payload_drains_to_exact_report_count() {
    let mut seq = PayloadSequencer::build(config::PAYLOAD, config::LEADING_IDLE_REPORTS)
        .expect("default payload must build");

    let expected = config::LEADING_IDLE_REPORTS + 2 * config::PAYLOAD.chars().count();
    let mut delivered = 0;
    let mut buf = [0u8; KEY_REPORT_SIZE];

    while let Some(report) = seq.poll() {
        assert_eq!(report.serialize(&mut buf), KEY_REPORT_SIZE);
        assert_eq!(buf[1], 0x00, "reserved byte must stay zero");
        delivered += 1;
    }

    assert_eq!(delivered, expected);
    assert_eq!(seq.poll(), None);
}

#[test]
fn idle_cushion_precedes_first_keystroke() {
    let mut seq = PayloadSequencer::build("id\n", config::LEADING_IDLE_REPORTS).unwrap();

    for _ in 0..config::LEADING_IDLE_REPORTS {
        assert!(seq.poll().unwrap().is_release());
    }
    // First real event: 'i' key down.
    let down = seq.poll().unwrap();
    assert_eq!((down.modifier, down.keycode), (0x00, 0x0C));
}

#[test]
fn every_key_down_is_followed_by_a_release() {
    let mut seq = KeystrokeSequencer::<128>::build("chmod +x ./wat.sh\r", 0).unwrap();
    let mut last_was_down = false;
    while let Some(report) = seq.poll() {
        if last_was_down {
            assert!(report.is_release(), "missing key-up after key-down");
        }
        last_was_down = !report.is_release();
    }
    assert!(!last_was_down, "stream must end with a release");
}

#[test]
fn unsupported_payload_never_builds_a_partial_queue() {
    let result = KeystrokeSequencer::<64>::build("ok…", 2);
    assert_eq!(result.err(), Some(Error::UnsupportedCharacter('…')));
}

#[test]
fn shell_script_payload_roundtrip_spotcheck() {
    // "#!" opens the demo script: Shift+3 then Shift+1.
    let mut seq = KeystrokeSequencer::<16>::build("#!", 0).unwrap();
    let mut buf = [0u8; KEY_REPORT_SIZE];

    seq.poll().unwrap().serialize(&mut buf);
    assert_eq!(buf, [0x02, 0x00, 0x20]);
    assert!(seq.poll().unwrap().is_release());

    seq.poll().unwrap().serialize(&mut buf);
    assert_eq!(buf, [0x02, 0x00, 0x1E]);
    assert!(seq.poll().unwrap().is_release());
}
