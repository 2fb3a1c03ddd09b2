//! Button-driven speed selector for the simulated stepper motor.
//!
//! Each loop iteration samples the switches, maps the sample to a [`Mode`]
//! and drives the PWM channel and the LED speed indicator accordingly.

use ehal::blocking::delay::DelayMs;

use crate::config::{SPEED1_DUTY, SPEED2_DUTY, SPEED_PERIOD, TOGGLE_HOLD_MS};
use crate::error::Result;
use crate::input::Switches;
use crate::leds::Leds;
use crate::pwm::{self, Channel, Waveform};
use crate::regs::RegisterBlock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Off,
    Speed1,
    Speed2,
    /// Alternate between the two speeds, holding each for a fixed time.
    Toggle,
}

/// Switch sample (active-low, SW2:SW1) to mode.
const MODE_TABLE: [(u8, Mode); 4] = [
    (0b11, Mode::Off),
    (0b01, Mode::Speed1),
    (0b10, Mode::Speed2),
    (0b00, Mode::Toggle),
];

impl Mode {
    pub fn from_sample(sample: u8) -> Mode {
        MODE_TABLE
            .iter()
            .find(|(bits, _)| *bits == sample & 0b11)
            .map(|(_, mode)| *mode)
            .unwrap_or(Mode::Off)
    }

    /// LED pattern shown while the mode is applied. Toggle shows this
    /// during its first phase and 0 during the second.
    pub fn indicator(self) -> u8 {
        match self {
            Mode::Off => 0,
            Mode::Speed1 => 1,
            Mode::Speed2 => 2,
            Mode::Toggle => 4,
        }
    }
}

/// Output state after a mode was applied. `duty == 0` means the output is
/// held low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub period: u16,
    pub duty: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedConfig {
    pub channel: Channel,
    pub period: u16,
    pub speed1_duty: u16,
    pub speed2_duty: u16,
    pub toggle_hold_ms: u32,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        SpeedConfig {
            channel: Channel::A,
            period: SPEED_PERIOD,
            speed1_duty: SPEED1_DUTY,
            speed2_duty: SPEED2_DUTY,
            toggle_hold_ms: TOGGLE_HOLD_MS,
        }
    }
}

impl SpeedConfig {
    pub fn preset(&self, mode: Mode) -> Preset {
        let duty = match mode {
            Mode::Off => 0,
            Mode::Speed1 => self.speed1_duty,
            Mode::Speed2 | Mode::Toggle => self.speed2_duty,
        };
        Preset { period: self.period, duty }
    }
}

pub struct SpeedControl<D> {
    cfg: SpeedConfig,
    delay: D,
    switches: Switches,
    leds: Leds,
    mode: Option<Mode>,
}

impl<D> SpeedControl<D>
where
    D: DelayMs<u32>,
{
    /// Configure the PWM output (stopped), the LEDs and the switches.
    pub fn new<R: RegisterBlock>(regs: &mut R, cfg: SpeedConfig, delay: D) -> Result<Self> {
        Waveform::new(cfg.period, cfg.speed1_duty)?;
        Waveform::new(cfg.period, cfg.speed2_duty)?;

        pwm::init_channel(regs, cfg.channel, cfg.period, cfg.speed1_duty)?;
        pwm::disable_channel(regs, cfg.channel);
        let leds = Leds::init(regs)?;
        let switches = Switches::init(regs)?;
        leds.show(regs, Mode::Off.indicator());

        Ok(SpeedControl {
            cfg,
            delay,
            switches,
            leds,
            mode: Some(Mode::Off),
        })
    }

    /// Last applied mode.
    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn config(&self) -> &SpeedConfig {
        &self.cfg
    }

    /// Give back the delay provider.
    pub fn release(self) -> D {
        self.delay
    }

    /// One loop iteration: sample the switches and apply the mode.
    ///
    /// Blocks for two toggle holds when the mode is [`Mode::Toggle`].
    pub fn poll<R: RegisterBlock>(&mut self, regs: &mut R) -> Result<Preset> {
        let sample = self.switches.read(regs);
        self.apply(regs, Mode::from_sample(sample))
    }

    pub fn apply<R: RegisterBlock>(&mut self, regs: &mut R, mode: Mode) -> Result<Preset> {
        if mode == Mode::Toggle {
            if self.mode != Some(Mode::Toggle) {
                log_info!("mode {:?} -> Toggle", self.mode);
                self.mode = Some(Mode::Toggle);
            }
            return self.toggle(regs);
        }

        let preset = self.cfg.preset(mode);
        if self.mode == Some(mode) {
            return Ok(preset);
        }
        log_info!("mode {:?} -> {:?}", self.mode, mode);
        // Forget the mode until the hardware reflects the new one.
        self.mode = None;
        if preset.duty == 0 {
            pwm::disable_channel(regs, self.cfg.channel);
        } else {
            self.drive(regs, preset.duty)?;
        }
        self.leds.show(regs, mode.indicator());
        self.mode = Some(mode);
        Ok(preset)
    }

    fn toggle<R: RegisterBlock>(&mut self, regs: &mut R) -> Result<Preset> {
        self.leds.show(regs, Mode::Toggle.indicator());
        self.drive(regs, self.cfg.speed1_duty)?;
        self.delay.delay_ms(self.cfg.toggle_hold_ms);

        self.leds.show(regs, 0);
        self.drive(regs, self.cfg.speed2_duty)?;
        self.delay.delay_ms(self.cfg.toggle_hold_ms);

        Ok(self.cfg.preset(Mode::Toggle))
    }

    /// Only the comparator changes while the generator already runs at the
    /// configured period with the output on.
    fn drive<R: RegisterBlock>(&self, regs: &mut R, duty: u16) -> Result<()> {
        let ch = self.cfg.channel;
        if pwm::period_of(regs) == Some(self.cfg.period) && pwm::is_enabled(regs, ch) {
            pwm::set_duty(regs, ch, duty)
        } else {
            pwm::init_channel(regs, ch, self.cfg.period, duty)
        }
    }
}
