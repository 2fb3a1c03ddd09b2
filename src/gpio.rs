//! GPIO bank configuration and sampling.
//!
//! All setup is read-modify-write on the pins named by the masks; other pins
//! on the port keep their configuration.

use crate::error::Result;
use crate::regs::{Port, Reg, RegisterBlock};
use crate::sysctl;

/// Pin setup for one port. Pins in neither mask are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankConfig {
    /// Pins driven as digital outputs.
    pub outputs: u32,
    /// Pins sampled as digital inputs.
    pub inputs: u32,
    /// Subset of `inputs` with the weak pull-up enabled.
    pub pull_ups: u32,
}

impl BankConfig {
    pub const fn outputs(mask: u32) -> Self {
        BankConfig { outputs: mask, inputs: 0, pull_ups: 0 }
    }

    pub const fn inputs(mask: u32) -> Self {
        BankConfig { outputs: 0, inputs: mask, pull_ups: 0 }
    }

    pub const fn with_pull_ups(self, mask: u32) -> Self {
        BankConfig { pull_ups: mask & self.inputs, ..self }
    }

    fn pins(&self) -> u32 {
        self.outputs | self.inputs
    }
}

/// Clock the port and configure its pins as plain digital GPIO.
pub fn configure_bank<R: RegisterBlock>(regs: &mut R, port: Port, cfg: BankConfig) -> Result<()> {
    sysctl::enable_gpio(regs, port)?;

    let pins = cfg.pins();
    regs.modify(Reg::Dir(port), |v| (v | cfg.outputs) & !cfg.inputs);
    regs.clear_bits(Reg::Afsel(port), pins);
    regs.modify(Reg::Pur(port), |v| (v & !cfg.inputs) | cfg.pull_ups);
    regs.set_bits(Reg::Den(port), pins);
    regs.clear_bits(Reg::Pctl(port), pctl_mask(pins));
    regs.clear_bits(Reg::Amsel(port), pins);

    log_debug!("{:?}: out={:#04x} in={:#04x} pu={:#04x}", port, cfg.outputs, cfg.inputs, cfg.pull_ups);
    Ok(())
}

/// Route `pin` of `port` to peripheral function `function` (PCTL nibble).
///
/// The port clock must already be running.
pub fn configure_alternate<R: RegisterBlock>(regs: &mut R, port: Port, pin: u8, function: u8) {
    let bit = 1 << pin;
    let shift = 4 * u32::from(pin);
    regs.set_bits(Reg::Afsel(port), bit);
    regs.set_bits(Reg::Den(port), bit);
    regs.modify(Reg::Pctl(port), |v| (v & !(0xF << shift)) | (u32::from(function & 0xF) << shift));
    regs.clear_bits(Reg::Amsel(port), bit);
}

/// Instantaneous sample of the pins in `mask`.
pub fn read_bank<R: RegisterBlock>(regs: &R, port: Port, mask: u32) -> u32 {
    regs.read(Reg::Data(port)) & mask
}

/// Drive the pins in `mask` to `bits`; other pins keep their level.
pub fn write_bank<R: RegisterBlock>(regs: &mut R, port: Port, mask: u32, bits: u32) {
    regs.modify(Reg::Data(port), |v| (v & !mask) | (bits & mask));
}

/// PCTL has one nibble per pin.
fn pctl_mask(pins: u32) -> u32 {
    (0..8)
        .filter(|pin| pins & (1 << pin) != 0)
        .fold(0, |acc, pin| acc | (0xF << (4 * pin)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimRegisters;

    #[test]
    fn test_pctl_mask() {
        assert_eq!(pctl_mask(0x03), 0x0000_00FF);
        assert_eq!(pctl_mask(0x0F), 0x0000_FFFF);
        assert_eq!(pctl_mask(0x20), 0x00F0_0000);
    }

    #[test]
    fn test_configure_inputs_with_pull_ups() {
        let mut regs = SimRegisters::new();
        regs.write(Reg::Dir(Port::J), 0xFF);
        regs.write(Reg::Pctl(Port::J), 0xFFFF_FFFF);
        configure_bank(&mut regs, Port::J, BankConfig::inputs(0x03).with_pull_ups(0x03)).unwrap();

        assert_eq!(regs.read(Reg::Dir(Port::J)), 0xFC);
        assert_eq!(regs.read(Reg::Pur(Port::J)), 0x03);
        assert_eq!(regs.read(Reg::Den(Port::J)), 0x03);
        assert_eq!(regs.read(Reg::Pctl(Port::J)), 0xFFFF_FF00);
        assert_eq!(regs.read(Reg::Afsel(Port::J)), 0);
        assert_eq!(regs.read(Reg::RcgcGpio), Port::J.gate_bit());
    }

    #[test]
    fn test_configure_outputs() {
        let mut regs = SimRegisters::new();
        regs.write(Reg::Amsel(Port::N), 0xFF);
        configure_bank(&mut regs, Port::N, BankConfig::outputs(0x0F)).unwrap();

        assert_eq!(regs.read(Reg::Dir(Port::N)), 0x0F);
        assert_eq!(regs.read(Reg::Den(Port::N)), 0x0F);
        assert_eq!(regs.read(Reg::Amsel(Port::N)), 0xF0);
        assert_eq!(regs.read(Reg::Pur(Port::N)), 0);
    }

    #[test]
    fn test_pull_ups_limited_to_inputs() {
        let cfg = BankConfig::inputs(0x01).with_pull_ups(0x03);
        assert_eq!(cfg.pull_ups, 0x01);
    }

    #[test]
    fn test_alternate_function() {
        let mut regs = SimRegisters::new();
        regs.write(Reg::Amsel(Port::F), 0x03);
        configure_alternate(&mut regs, Port::F, 1, 6);

        assert_eq!(regs.read(Reg::Afsel(Port::F)), 0x02);
        assert_eq!(regs.read(Reg::Den(Port::F)), 0x02);
        assert_eq!(regs.read(Reg::Pctl(Port::F)), 0x0000_0060);
        assert_eq!(regs.read(Reg::Amsel(Port::F)), 0x01);
    }

    #[test]
    fn test_read_and_write_bank() {
        let mut regs = SimRegisters::new();
        regs.drive_inputs(Port::J, 0x03, 0b10);
        assert_eq!(read_bank(&regs, Port::J, 0x03), 0b10);

        write_bank(&mut regs, Port::N, 0x0F, 0x14);
        assert_eq!(regs.read(Reg::Data(Port::N)), 0x04);
    }
}
