//! Board constants.
//!
//! Clock bring-up is not done here: the binaries assume the PLL already runs
//! the bus at `BUS_CLOCK_HZ`.

/// System bus clock after PLL setup.
pub const BUS_CLOCK_HZ: u32 = 120_000_000;

/// PWM clock = bus clock / 2 (`PWMCC.PWMDIV = /2`).
pub const PWM_CLOCK_DIVIDER: u32 = 2;
pub const PWM_CLOCK_HZ: u32 = BUS_CLOCK_HZ / PWM_CLOCK_DIVIDER;

/// Polls of a peripheral-ready bit before giving up.
pub const READY_POLL_LIMIT: u32 = 100_000;

/// 1 kHz at the 60 MHz PWM clock.
pub const SPEED_PERIOD: u16 = 60_000;
/// 25 %
pub const SPEED1_DUTY: u16 = 15_000;
/// 75 %
pub const SPEED2_DUTY: u16 = 45_000;

/// Time each toggle phase holds its duty; about a 12 000 000-iteration
/// spin at 120 MHz.
pub const TOGGLE_HOLD_MS: u32 = 500;

/// PJ1-0: on-board SW1 (PJ0) and SW2 (PJ1), active-low.
pub const SWITCH_MASK: u32 = 0x03;
/// PA5: external switch, active-high, no internal pull.
pub const EXTERNAL_SWITCH_MASK: u32 = 0x20;
/// PN3-0: user LEDs.
pub const LED_MASK: u32 = 0x0F;
