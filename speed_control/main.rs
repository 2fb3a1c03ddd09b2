#![deny(warnings)]
#![no_std]
#![no_main]

// used to provide panic_implementation
#[allow(unused)]
use panic_abort;

use asm_delay::bitrate::Hertz;
use asm_delay::AsmDelay;
use cortex_m_rt::{entry, exception, ExceptionFrame};

use tiva_labs::config::BUS_CLOCK_HZ;
use tiva_labs::input::ExternalSwitch;
use tiva_labs::log_info;
use tiva_labs::regs::Mmio;
use tiva_labs::speed::{SpeedConfig, SpeedControl};

#[entry]
fn main() -> ! {
    #[cfg(feature = "with_rtt")]
    rtt_target::rtt_init_print!();

    // Bus clock is expected at 120 MHz from the PLL before we get here.
    let mut regs = unsafe { Mmio::steal() };
    let delay = AsmDelay::new(Hertz(BUS_CLOCK_HZ));
    let mut speed = SpeedControl::new(&mut regs, SpeedConfig::default(), delay).unwrap();
    let external = ExternalSwitch::init(&mut regs).unwrap();
    log_info!("speed control up: {:?}", speed.config());

    let mut ext_pressed = false;
    loop {
        speed.poll(&mut regs).unwrap();

        let pressed = external.is_pressed(&regs);
        if pressed != ext_pressed {
            log_info!("PA5 {}", if pressed { "pressed" } else { "released" });
            ext_pressed = pressed;
        }
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
