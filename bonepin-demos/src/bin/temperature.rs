//! Read a TMP36 on AIN1 (P9_40)

use std::thread;
use std::time::Duration;

use anyhow::Result;
use bonepin_core::traits::ComponentIn;
use bonepin_drivers::Tmp36;
use bonepin_hal_beaglebone::AnalogPin;
use tracing::info;

const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

fn main() -> Result<()> {
    bonepin_demos::init_logging();
    let board = bonepin_demos::board()?;

    let pin = AnalogPin::from_id(&board, "AIN1")?;
    let sensor = Tmp36::new(Some(pin.into()), "Temperature")?;

    loop {
        info!(
            raw = sensor.raw_value()?,
            milli_volts = sensor.milli_volts()?,
            celsius = sensor.celsius()?,
            fahrenheit = sensor.fahrenheit()?,
            "sample"
        );
        thread::sleep(SAMPLE_INTERVAL);
    }
}
