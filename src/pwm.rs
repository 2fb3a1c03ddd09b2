//! PWM module 0, generator 0: channel A on PF0 (M0PWM0), channel B on PF1
//! (M0PWM1).
//!
//! The generator counts down from `LOAD` to zero and reloads. Each output
//! goes low on reload and high when the count passes its comparator, so a
//! channel is high for `duty` of every `period` ticks with
//!
//! ```text
//! LOAD = period - 1
//! CMPx = duty - 1
//! ```
//!
//! Both channels share `LOAD`. Initialising one channel with a new period
//! changes the period of the other one too.

use crate::config::PWM_CLOCK_HZ;
use crate::error::{ConfigError, Result};
use crate::gpio;
use crate::regs::{Port, Reg, RegisterBlock};
use crate::sysctl;

pub const MIN_PERIOD: u16 = 3;
pub const MIN_DUTY: u16 = 2;

const CTL_ENABLE: u32 = 0x0000_0001;

// PWMnGENA/B action fields
const GENA_ACTCMPAD_ONE: u32 = 0x0000_00C0;
const GENB_ACTCMPBD_ONE: u32 = 0x0000_0C00;
const GEN_ACTLOAD_ZERO: u32 = 0x0000_0008;

// PWMCC
const CC_USEPWM: u32 = 0x0000_0100;
const CC_PWMDIV_M: u32 = 0x0000_0007;
const CC_PWMDIV_2: u32 = 0x0000_0000;

/// PCTL function number of M0PWMn on port F.
const PF_PWM_FUNCTION: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    A,
    B,
}

impl Channel {
    /// Output pin: port and pin number.
    pub const fn pin(self) -> (Port, u8) {
        match self {
            Channel::A => (Port::F, 0),
            Channel::B => (Port::F, 1),
        }
    }

    pub const fn other(self) -> Channel {
        match self {
            Channel::A => Channel::B,
            Channel::B => Channel::A,
        }
    }

    const fn compare(self) -> Reg {
        match self {
            Channel::A => Reg::PwmCmpA,
            Channel::B => Reg::PwmCmpB,
        }
    }

    const fn generator(self) -> (Reg, u32) {
        match self {
            Channel::A => (Reg::PwmGenA, GENA_ACTCMPAD_ONE | GEN_ACTLOAD_ZERO),
            Channel::B => (Reg::PwmGenB, GENB_ACTCMPBD_ONE | GEN_ACTLOAD_ZERO),
        }
    }

    const fn enable_bit(self) -> u32 {
        match self {
            Channel::A => 1 << 0,
            Channel::B => 1 << 1,
        }
    }
}

/// A validated (period, duty) pair in PWM clock ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Waveform {
    pub period: u16,
    pub duty: u16,
}

impl Waveform {
    pub fn new(period: u16, duty: u16) -> Result<Self> {
        check_period(period)?;
        check_duty(period, duty)?;
        Ok(Waveform { period, duty })
    }

    /// Period and duty for `hz` at `percent` % high time, using the PWM
    /// clock in [`crate::config`].
    pub fn from_frequency(hz: u32, percent: u8) -> Result<Self> {
        if percent > 100 {
            return Err(ConfigError::PercentOutOfRange { percent }.into());
        }
        let ticks = PWM_CLOCK_HZ.checked_div(hz).unwrap_or(0);
        let period = u16::try_from(ticks)
            .ok()
            .filter(|p| *p >= MIN_PERIOD)
            .ok_or(ConfigError::FrequencyOutOfRange { hz })?;
        let duty = (u32::from(period) * u32::from(percent) / 100) as u16;
        Waveform::new(period, duty)
    }
}

fn check_period(period: u16) -> Result<()> {
    if period < MIN_PERIOD {
        return Err(ConfigError::PeriodOutOfRange { period }.into());
    }
    Ok(())
}

fn check_duty(period: u16, duty: u16) -> Result<()> {
    if duty < MIN_DUTY || duty >= period {
        return Err(ConfigError::DutyOutOfRange { duty, period }.into());
    }
    Ok(())
}

/// Bring up `channel` with the given period and duty and start the
/// generator.
///
/// Arguments are checked before any register is written. The shared
/// `LOAD` register is rewritten and the generator restarted, which also
/// affects the other channel.
pub fn init_channel<R: RegisterBlock>(regs: &mut R, channel: Channel, period: u16, duty: u16) -> Result<()> {
    check_period(period)?;
    check_duty(period, duty)?;

    sysctl::enable_pwm0(regs);
    let (port, pin) = channel.pin();
    sysctl::enable_gpio(regs, port)?;
    gpio::configure_alternate(regs, port, pin, PF_PWM_FUNCTION);
    sysctl::wait_pwm0(regs)?;

    regs.modify(Reg::PwmCc, |v| ((v | CC_USEPWM) & !CC_PWMDIV_M) | CC_PWMDIV_2);

    if is_enabled(regs, channel.other()) {
        if let Some(old) = period_of(regs) {
            if old != period {
                log_warn!("channel {:?} period {} -> {} (shared counter)", channel.other(), old, period);
            }
        }
    }

    // Down-counting, reload mode; stops the generator while it is set up.
    regs.write(Reg::PwmCtl, 0);
    let (gen, actions) = channel.generator();
    regs.write(gen, actions);
    regs.write(Reg::PwmLoad, u32::from(period - 1));
    regs.write(channel.compare(), u32::from(duty - 1));
    regs.set_bits(Reg::PwmCtl, CTL_ENABLE);
    regs.set_bits(Reg::PwmEnable, channel.enable_bit());

    log_debug!("pwm {:?}: period={} duty={}", channel, period, duty);
    Ok(())
}

/// Change only the comparator of `channel`.
///
/// `duty` is checked against the period currently in `LOAD`.
pub fn set_duty<R: RegisterBlock>(regs: &mut R, channel: Channel, duty: u16) -> Result<()> {
    let period = period_of(regs).ok_or(ConfigError::NotRunning)?;
    check_duty(period, duty)?;
    regs.write(channel.compare(), u32::from(duty - 1));
    Ok(())
}

/// Stop driving `channel`; its pin is held low.
pub fn disable_channel<R: RegisterBlock>(regs: &mut R, channel: Channel) {
    regs.clear_bits(Reg::PwmEnable, channel.enable_bit());
}

pub fn is_enabled<R: RegisterBlock>(regs: &R, channel: Channel) -> bool {
    regs.read(Reg::PwmEnable) & channel.enable_bit() != 0
}

/// Current period, or `None` while the generator is stopped.
pub fn period_of<R: RegisterBlock>(regs: &R) -> Option<u16> {
    if regs.read(Reg::PwmCtl) & CTL_ENABLE == 0 {
        return None;
    }
    ticks(regs.read(Reg::PwmLoad))
}

/// Programmed duty of `channel`, whether or not its output is enabled.
pub fn duty_of<R: RegisterBlock>(regs: &R, channel: Channel) -> Option<u16> {
    period_of(regs)?;
    ticks(regs.read(channel.compare()))
}

/// Register value to tick count; `None` when it does not fit 16 bits.
fn ticks(reg: u32) -> Option<u16> {
    reg.checked_add(1).and_then(|v| u16::try_from(v).ok())
}

/// Duty seen on the pin: 0 when the output is disabled.
pub fn output_duty<R: RegisterBlock>(regs: &R, channel: Channel) -> u16 {
    if !is_enabled(regs, channel) {
        return 0;
    }
    duty_of(regs, channel).unwrap_or(0)
}
