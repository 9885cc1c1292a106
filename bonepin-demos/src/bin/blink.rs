//! Blink an LED on P9_11 (gpio30)

use std::thread;
use std::time::Duration;

use anyhow::Result;
use bonepin_drivers::Led;
use bonepin_hal::Direction;
use bonepin_hal_beaglebone::DigitalPin;
use tracing::info;

const BLINK_INTERVAL: Duration = Duration::from_millis(150);

fn main() -> Result<()> {
    bonepin_demos::init_logging();
    let board = bonepin_demos::board()?;

    let pin = DigitalPin::from_id(&board, "gpio30", Direction::Out)?;
    let led = Led::new(Some(pin.into()), "Blink LED")?;
    info!("blinking every {BLINK_INTERVAL:?}");

    let mut on = false;
    loop {
        on = !on;
        if on {
            led.turn_on()?;
        } else {
            led.turn_off()?;
        }
        thread::sleep(BLINK_INTERVAL);
    }
}
