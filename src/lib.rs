#![cfg_attr(not(test), no_std)]

//! Register-level drivers shared by the TM4C1294 lab programs.
//!
//! Every driver takes the register file as an explicit `&mut R` where
//! `R: RegisterBlock`. On the device that is [`regs::Mmio`]; on the host it
//! is [`sim::SimRegisters`].

#[macro_use]
pub mod log;

pub mod config;
pub mod error;
pub mod gpio;
pub mod input;
pub mod leds;
pub mod pwm;
pub mod regs;
pub mod sim;
pub mod speed;
pub mod sysctl;

pub use error::{ConfigError, Error, Result};
pub use regs::{Port, Reg, RegisterBlock};
