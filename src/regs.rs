//! Register file of the TM4C1294 blocks the lab programs touch.

/// GPIO ports in use. Bases are the AHB apertures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Port {
    A,
    F,
    J,
    N,
}

impl Port {
    pub const fn base(self) -> usize {
        match self {
            Port::A => 0x4005_8000,
            Port::F => 0x4005_D000,
            Port::J => 0x4006_0000,
            Port::N => 0x4006_4000,
        }
    }

    /// Bit in `RCGCGPIO` / `PRGPIO`.
    pub const fn gate_bit(self) -> u32 {
        match self {
            Port::A => 1 << 0,
            Port::F => 1 << 5,
            Port::J => 1 << 8,
            Port::N => 1 << 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reg {
    // System control
    RcgcGpio,
    PrGpio,
    RcgcPwm,
    PrPwm,

    // GPIO, per port. `Data` is the full-mask aperture (offset 0x3FC).
    Data(Port),
    Dir(Port),
    Afsel(Port),
    Pur(Port),
    Den(Port),
    Amsel(Port),
    Pctl(Port),

    // PWM module 0, generator 0
    PwmEnable,
    PwmCtl,
    PwmLoad,
    PwmCmpA,
    PwmCmpB,
    PwmGenA,
    PwmGenB,
    PwmCc,
}

const SYSCTL: usize = 0x400F_E000;
const PWM0: usize = 0x4002_8000;

impl Reg {
    pub const fn address(self) -> usize {
        match self {
            Reg::RcgcGpio => SYSCTL + 0x608,
            Reg::PrGpio => SYSCTL + 0xA08,
            Reg::RcgcPwm => SYSCTL + 0x640,
            Reg::PrPwm => SYSCTL + 0xA40,

            Reg::Data(p) => p.base() + 0x3FC,
            Reg::Dir(p) => p.base() + 0x400,
            Reg::Afsel(p) => p.base() + 0x420,
            Reg::Pur(p) => p.base() + 0x510,
            Reg::Den(p) => p.base() + 0x51C,
            Reg::Amsel(p) => p.base() + 0x528,
            Reg::Pctl(p) => p.base() + 0x52C,

            Reg::PwmEnable => PWM0 + 0x008,
            Reg::PwmCtl => PWM0 + 0x040,
            Reg::PwmLoad => PWM0 + 0x050,
            Reg::PwmCmpA => PWM0 + 0x058,
            Reg::PwmCmpB => PWM0 + 0x05C,
            Reg::PwmGenA => PWM0 + 0x060,
            Reg::PwmGenB => PWM0 + 0x064,
            Reg::PwmCc => PWM0 + 0xFC8,
        }
    }
}

/// Word-wide access to the register file.
///
/// Drivers never hold on to the block; they borrow it for the duration of
/// one call, so a single owner (the control loop) serialises all access.
pub trait RegisterBlock {
    fn read(&self, reg: Reg) -> u32;

    fn write(&mut self, reg: Reg, value: u32);

    fn modify<F>(&mut self, reg: Reg, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        let v = self.read(reg);
        self.write(reg, f(v));
    }

    fn set_bits(&mut self, reg: Reg, mask: u32) {
        self.modify(reg, |v| v | mask);
    }

    fn clear_bits(&mut self, reg: Reg, mask: u32) {
        self.modify(reg, |v| v & !mask);
    }
}

/// The real, memory-mapped register file.
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// # Safety
    ///
    /// Must run on a TM4C1294 and be the only `Mmio` alive: every driver
    /// call assumes exclusive access to the registers it touches.
    pub unsafe fn steal() -> Self {
        Mmio { _private: () }
    }
}

impl RegisterBlock for Mmio {
    fn read(&self, reg: Reg) -> u32 {
        unsafe { core::ptr::read_volatile(reg.address() as *const u32) }
    }

    fn write(&mut self, reg: Reg, value: u32) {
        unsafe { core::ptr::write_volatile(reg.address() as *mut u32, value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addresses_match_datasheet() {
        assert_eq!(Reg::RcgcGpio.address(), 0x400F_E608);
        assert_eq!(Reg::PrPwm.address(), 0x400F_EA40);
        assert_eq!(Reg::Data(Port::J).address(), 0x4006_03FC);
        assert_eq!(Reg::Pur(Port::J).address(), 0x4006_0510);
        assert_eq!(Reg::Pctl(Port::F).address(), 0x4005_D52C);
        assert_eq!(Reg::Dir(Port::N).address(), 0x4006_4400);
        assert_eq!(Reg::PwmCmpB.address(), 0x4002_805C);
        assert_eq!(Reg::PwmCc.address(), 0x4002_8FC8);
    }

    #[test]
    fn test_gate_bits() {
        assert_eq!(Port::A.gate_bit(), 0x0000_0001);
        assert_eq!(Port::F.gate_bit(), 0x0000_0020);
        assert_eq!(Port::J.gate_bit(), 0x0000_0100);
        assert_eq!(Port::N.gate_bit(), 0x0000_1000);
    }
}
