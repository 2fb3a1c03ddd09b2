use ehal::blocking::delay::DelayMs;

use tiva_labs::config::TOGGLE_HOLD_MS;
use tiva_labs::pwm::{self, Channel};
use tiva_labs::regs::{Port, Reg, RegisterBlock};
use tiva_labs::sim::SimRegisters;
use tiva_labs::speed::{Mode, SpeedConfig, SpeedControl};

/// Keeps simulated time instead of blocking.
#[derive(Default)]
struct SimDelay {
    elapsed_ms: u32,
}

impl DelayMs<u32> for SimDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ms += ms;
    }
}

fn leds(regs: &SimRegisters) -> u32 {
    regs.read(Reg::Data(Port::N)) & 0x0F
}

#[test]
fn test_switch_sequence() {
    let mut regs = SimRegisters::new();
    let cfg = SpeedConfig {
        toggle_hold_ms: 20,
        ..SpeedConfig::default()
    };
    let mut ctl = SpeedControl::new(&mut regs, cfg, SimDelay::default()).unwrap();

    // (switch sample, mode, duty on PF0, LED pattern)
    let steps = [
        (0b11, Mode::Off, 0, 0),
        (0b01, Mode::Speed1, 15_000, 1),
        (0b01, Mode::Speed1, 15_000, 1),
        (0b10, Mode::Speed2, 45_000, 2),
        (0b00, Mode::Toggle, 45_000, 0),
        (0b00, Mode::Toggle, 45_000, 0),
        (0b11, Mode::Off, 0, 0),
        (0b10, Mode::Speed2, 45_000, 2),
    ];
    for (sample, mode, duty, pattern) in steps {
        regs.drive_inputs(Port::J, 0x03, sample);
        let preset = ctl.poll(&mut regs).unwrap();
        assert_eq!(ctl.mode(), Some(mode), "sample {:#04b}", sample);
        assert_eq!(preset.period, 60_000);
        assert_eq!(pwm::output_duty(&regs, Channel::A), duty, "sample {:#04b}", sample);
        assert_eq!(leds(&regs), pattern, "sample {:#04b}", sample);
        assert_eq!(regs.read(Reg::PwmLoad), 59_999);
    }
}

#[test]
fn test_toggle_time_accounted() {
    let mut regs = SimRegisters::new();
    let mut ctl = SpeedControl::new(&mut regs, SpeedConfig::default(), SimDelay::default()).unwrap();
    regs.drive_inputs(Port::J, 0x03, 0b00);
    for _ in 0..3 {
        ctl.poll(&mut regs).unwrap();
    }
    // Steady modes never wait
    regs.drive_inputs(Port::J, 0x03, 0b01);
    ctl.poll(&mut regs).unwrap();

    assert_eq!(pwm::output_duty(&regs, Channel::A), 15_000);
    assert_eq!(ctl.release().elapsed_ms, 6 * TOGGLE_HOLD_MS);
}
