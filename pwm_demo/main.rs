#![deny(warnings)]
#![no_std]
#![no_main]

// used to provide panic_implementation
#[allow(unused)]
use panic_abort;

use asm_delay::bitrate::Hertz;
use asm_delay::AsmDelay;
use cortex_m_rt::{entry, exception, ExceptionFrame};
use ehal::blocking::delay::DelayMs;

use tiva_labs::config::BUS_CLOCK_HZ;
use tiva_labs::log_info;
use tiva_labs::pwm::{self, Channel, Waveform};
use tiva_labs::regs::Mmio;

#[entry]
fn main() -> ! {
    #[cfg(feature = "with_rtt")]
    rtt_target::rtt_init_print!();

    let mut regs = unsafe { Mmio::steal() };
    let mut delay = AsmDelay::new(Hertz(BUS_CLOCK_HZ));

    // 1 kHz on both pins; they share the counter so the period must match.
    let a = Waveform::from_frequency(1_000, 75).unwrap();
    let b = Waveform::from_frequency(1_000, 25).unwrap();
    pwm::init_channel(&mut regs, Channel::A, a.period, a.duty).unwrap();
    pwm::init_channel(&mut regs, Channel::B, b.period, b.duty).unwrap();
    log_info!("PF0 {:?}, PF1 {:?}", a, b);

    for percent in [10u8, 25, 75] {
        let w = Waveform::from_frequency(1_000, percent).unwrap();
        pwm::set_duty(&mut regs, Channel::A, w.duty).unwrap();
        log_info!("PF0 duty {}%", percent);
        delay.delay_ms(1_000u32);
    }

    loop {
        cortex_m::asm::wfi();
    }
}

#[exception]
unsafe fn HardFault(ef: &ExceptionFrame) -> ! {
    panic!("HardFault at {:#?}", ef);
}

#[exception]
unsafe fn DefaultHandler(irqn: i16) {
    panic!("Unhandled exception (IRQn = {})", irqn);
}
