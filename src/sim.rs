//! Simulated register file for host-side tests.
//!
//! Registers read back what was last written (0 after reset). Two pieces of
//! hardware behaviour are modelled:
//!
//! * enabling a run-mode clock gate sets the matching peripheral-ready bit,
//!   unless [`SimRegisters::stall_ready`] was called;
//! * input pins are driven with [`SimRegisters::drive_inputs`].

use heapless::FnvIndexMap;

use crate::regs::{Port, Reg, RegisterBlock};

pub struct SimRegisters {
    cells: FnvIndexMap<usize, u32, 64>,
    stalled: bool,
    writes: u32,
}

impl SimRegisters {
    pub fn new() -> Self {
        SimRegisters {
            cells: FnvIndexMap::new(),
            stalled: false,
            writes: 0,
        }
    }

    /// Clock gates stop reporting ready; waits on them time out.
    pub fn stall_ready(&mut self) {
        self.stalled = true;
    }

    /// Set the level of the pins in `mask` on `port` to `bits`.
    pub fn drive_inputs(&mut self, port: Port, mask: u32, bits: u32) {
        let cur = self.peek(Reg::Data(port));
        self.store(Reg::Data(port), (cur & !mask) | (bits & mask));
    }

    /// Number of `write` calls seen so far.
    pub fn writes(&self) -> u32 {
        self.writes
    }

    pub fn peek(&self, reg: Reg) -> u32 {
        self.cells.get(&reg.address()).copied().unwrap_or(0)
    }

    fn store(&mut self, reg: Reg, value: u32) {
        let stored = self.cells.insert(reg.address(), value);
        debug_assert!(stored.is_ok(), "simulated register file full");
    }
}

impl Default for SimRegisters {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterBlock for SimRegisters {
    fn read(&self, reg: Reg) -> u32 {
        self.peek(reg)
    }

    fn write(&mut self, reg: Reg, value: u32) {
        self.writes += 1;
        self.store(reg, value);
        if self.stalled {
            return;
        }
        match reg {
            Reg::RcgcGpio => self.store(Reg::PrGpio, value),
            Reg::RcgcPwm => self.store(Reg::PrPwm, value),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_back_last_write() {
        let mut regs = SimRegisters::new();
        assert_eq!(regs.read(Reg::PwmLoad), 0);
        regs.write(Reg::PwmLoad, 59_999);
        assert_eq!(regs.read(Reg::PwmLoad), 59_999);
        assert_eq!(regs.writes(), 1);
    }

    #[test]
    fn test_clock_gate_reports_ready() {
        let mut regs = SimRegisters::new();
        regs.set_bits(Reg::RcgcGpio, Port::J.gate_bit());
        assert_eq!(regs.read(Reg::PrGpio) & Port::J.gate_bit(), Port::J.gate_bit());
    }

    #[test]
    fn test_stalled_gate_stays_not_ready() {
        let mut regs = SimRegisters::new();
        regs.stall_ready();
        regs.set_bits(Reg::RcgcPwm, 1);
        assert_eq!(regs.read(Reg::PrPwm), 0);
    }

    #[test]
    fn test_drive_inputs_keeps_other_pins() {
        let mut regs = SimRegisters::new();
        regs.write(Reg::Data(Port::J), 0xF0);
        regs.drive_inputs(Port::J, 0x03, 0b10);
        assert_eq!(regs.read(Reg::Data(Port::J)), 0xF2);
    }
}
