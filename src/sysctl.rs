//! Run-mode clock gating.

use crate::config::READY_POLL_LIMIT;
use crate::error::{Error, Peripheral, Result};
use crate::regs::{Port, Reg, RegisterBlock};

const PWM0_GATE: u32 = 1 << 0;

/// Gate the clock to `port` on and wait for it to come up.
pub fn enable_gpio<R: RegisterBlock>(regs: &mut R, port: Port) -> Result<()> {
    regs.set_bits(Reg::RcgcGpio, port.gate_bit());
    wait_ready(regs, Reg::PrGpio, port.gate_bit(), Peripheral::Gpio(port))
}

/// Gate the PWM0 clock on. Does not wait; see [`wait_pwm0`].
pub fn enable_pwm0<R: RegisterBlock>(regs: &mut R) {
    regs.set_bits(Reg::RcgcPwm, PWM0_GATE);
}

pub fn wait_pwm0<R: RegisterBlock>(regs: &mut R) -> Result<()> {
    wait_ready(regs, Reg::PrPwm, PWM0_GATE, Peripheral::Pwm0)
}

fn wait_ready<R: RegisterBlock>(regs: &R, reg: Reg, mask: u32, who: Peripheral) -> Result<()> {
    for _ in 0..READY_POLL_LIMIT {
        if regs.read(reg) & mask != 0 {
            return Ok(());
        }
    }
    log_warn!("{:?} not ready after {} polls", who, READY_POLL_LIMIT);
    Err(Error::HardwareTimeout(who))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimRegisters;

    #[test]
    fn test_enable_gpio_sets_gate() {
        let mut regs = SimRegisters::new();
        enable_gpio(&mut regs, Port::N).unwrap();
        enable_gpio(&mut regs, Port::J).unwrap();
        assert_eq!(regs.read(Reg::RcgcGpio), 0x1100);
    }

    #[test]
    fn test_enable_gpio_times_out() {
        let mut regs = SimRegisters::new();
        regs.stall_ready();
        assert_eq!(
            enable_gpio(&mut regs, Port::F),
            Err(Error::HardwareTimeout(Peripheral::Gpio(Port::F)))
        );
    }

    #[test]
    fn test_pwm0_gate() {
        let mut regs = SimRegisters::new();
        enable_pwm0(&mut regs);
        assert_eq!(regs.read(Reg::RcgcPwm), 1);
        wait_pwm0(&mut regs).unwrap();

        let mut stalled = SimRegisters::new();
        stalled.stall_ready();
        enable_pwm0(&mut stalled);
        assert_eq!(wait_pwm0(&mut stalled), Err(Error::HardwareTimeout(Peripheral::Pwm0)));
    }
}
