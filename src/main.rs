//! Embedded entry point - builds the keystroke queue and brings up USB.
//!
//! Requires the `embedded` feature and an nRF52840 target. The payload is
//! validated in full before the device ever enumerates: a payload the
//! keymap cannot type panics here, at startup, instead of half-typing into
//! the host.

#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;

use embassy_executor::Spawner;
use embassy_usb::class::hid::HidWriter;
use embassy_usb::UsbDevice;

use keytyper::config;
use keytyper::hid::sequencer::PayloadSequencer;
use keytyper::usb::hid_device::{self, UsbDriver};

#[embassy_executor::task]
async fn usb_task(device: UsbDevice<'static, UsbDriver>) -> ! {
    hid_device::run_usb_device(device).await
}

#[embassy_executor::task]
async fn typer(keyboard: HidWriter<'static, UsbDriver, 8>, sequencer: PayloadSequencer) -> ! {
    hid_device::typer_task(keyboard, sequencer).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());

    let sequencer = match PayloadSequencer::build(config::PAYLOAD, config::LEADING_IDLE_REPORTS) {
        Ok(s) => s,
        Err(e) => defmt::panic!("payload rejected: {}", e),
    };

    let usb = hid_device::init(p.USBD);

    spawner.spawn(usb_task(usb.device)).unwrap();
    spawner.spawn(typer(usb.keyboard_writer, sequencer)).unwrap();
}
