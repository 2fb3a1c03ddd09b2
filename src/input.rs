//! Polled digital inputs.
//!
//! No debouncing and no edge detection: every read is a fresh sample and
//! the caller decides how often to take one.

use crate::config::{EXTERNAL_SWITCH_MASK, SWITCH_MASK};
use crate::error::Result;
use crate::gpio::{self, BankConfig};
use crate::regs::{Port, RegisterBlock};

/// The two on-board push buttons on PJ1-0, wired active-low against the
/// internal pull-ups.
///
/// | sample | meaning               |
/// |--------|-----------------------|
/// | `0b11` | nothing pressed       |
/// | `0b10` | SW1 (PJ0) pressed     |
/// | `0b01` | SW2 (PJ1) pressed     |
/// | `0b00` | both pressed          |
pub struct Switches {
    _configured: (),
}

impl Switches {
    pub fn init<R: RegisterBlock>(regs: &mut R) -> Result<Self> {
        gpio::configure_bank(regs, Port::J, BankConfig::inputs(SWITCH_MASK).with_pull_ups(SWITCH_MASK))?;
        Ok(Switches { _configured: () })
    }

    /// Raw active-low sample of PJ1-0.
    pub fn read<R: RegisterBlock>(&self, regs: &R) -> u8 {
        gpio::read_bank(regs, Port::J, SWITCH_MASK) as u8
    }
}

/// Single external switch on PA5, active-high, relies on an external
/// pull-down.
pub struct ExternalSwitch {
    _configured: (),
}

impl ExternalSwitch {
    pub fn init<R: RegisterBlock>(regs: &mut R) -> Result<Self> {
        gpio::configure_bank(regs, Port::A, BankConfig::inputs(EXTERNAL_SWITCH_MASK))?;
        Ok(ExternalSwitch { _configured: () })
    }

    pub fn is_pressed<R: RegisterBlock>(&self, regs: &R) -> bool {
        gpio::read_bank(regs, Port::A, EXTERNAL_SWITCH_MASK) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regs::Reg;
    use crate::sim::SimRegisters;

    #[test]
    fn test_switches_return_raw_sample() {
        let mut regs = SimRegisters::new();
        let sw = Switches::init(&mut regs).unwrap();
        assert_eq!(regs.read(Reg::Pur(Port::J)), 0x03);

        regs.drive_inputs(Port::J, 0xFF, 0b10);
        assert_eq!(sw.read(&regs), 0b10);
        regs.drive_inputs(Port::J, 0xFF, 0b11);
        assert_eq!(sw.read(&regs), 0b11);
    }

    #[test]
    fn test_switches_ignore_other_pins() {
        let mut regs = SimRegisters::new();
        let sw = Switches::init(&mut regs).unwrap();
        regs.drive_inputs(Port::J, 0xFF, 0xFD);
        assert_eq!(sw.read(&regs), 0b01);
    }

    #[test]
    fn test_external_switch() {
        let mut regs = SimRegisters::new();
        let sw = ExternalSwitch::init(&mut regs).unwrap();
        assert_eq!(regs.read(Reg::Pur(Port::A)), 0);
        assert_eq!(regs.read(Reg::Den(Port::A)), 0x20);
        assert!(!sw.is_pressed(&regs));

        regs.drive_inputs(Port::A, 0x20, 0x20);
        assert!(sw.is_pressed(&regs));
    }
}
