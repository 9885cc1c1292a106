//! Report motion from an HC-SR501 on P9_12 (gpio60)

use std::thread;
use std::time::Duration;

use anyhow::Result;
use bonepin_drivers::MotionSensor;
use bonepin_hal_beaglebone::Header;
use tracing::info;

const POLL_INTERVAL: Duration = Duration::from_millis(500);

fn main() -> Result<()> {
    bonepin_demos::init_logging();
    let board = bonepin_demos::board()?;

    let sensor = MotionSensor::from_header_pin(&board, Header::P9, 12, "Motion Sensor")?;

    let mut detected = false;
    loop {
        let now = sensor.is_motion_detected()?;
        if now != detected {
            if now {
                info!("motion detected");
            } else {
                info!("all quiet");
            }
            detected = now;
        }
        thread::sleep(POLL_INTERVAL);
    }
}
