//! User LEDs on PN3-0, positive logic.

use crate::config::LED_MASK;
use crate::error::Result;
use crate::gpio::{self, BankConfig};
use crate::regs::{Port, RegisterBlock};

pub struct Leds {
    _configured: (),
}

impl Leds {
    pub fn init<R: RegisterBlock>(regs: &mut R) -> Result<Self> {
        gpio::configure_bank(regs, Port::N, BankConfig::outputs(LED_MASK))?;
        Ok(Leds { _configured: () })
    }

    /// Show the low nibble of `pattern`; bit n lights LED n.
    pub fn show<R: RegisterBlock>(&self, regs: &mut R, pattern: u8) {
        gpio::write_bank(regs, Port::N, LED_MASK, u32::from(pattern));
    }

    pub fn pattern<R: RegisterBlock>(&self, regs: &R) -> u8 {
        gpio::read_bank(regs, Port::N, LED_MASK) as u8
    }
}
