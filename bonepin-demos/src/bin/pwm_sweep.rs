//! Step the duty cycle of P8_13 (PWM2B) down from full to 10%

use std::thread;
use std::time::Duration;

use anyhow::Result;
use bonepin_hal_beaglebone::{Header, PwmPin, PWM_PERIOD};
use tracing::info;

const STEP: u32 = 1000;
const STEP_INTERVAL: Duration = Duration::from_secs(1);

fn main() -> Result<()> {
    bonepin_demos::init_logging();
    let board = bonepin_demos::board()?;

    let pwm = PwmPin::from_header_pin(&board, Header::P8, 13)?;
    pwm.set_enable(true)?;

    for duty in (STEP..=PWM_PERIOD).rev().step_by(STEP as usize) {
        info!(duty, "duty cycle");
        pwm.set_duty_cycle(duty)?;
        thread::sleep(STEP_INTERVAL);
    }

    pwm.set_enable(false)?;
    Ok(())
}
