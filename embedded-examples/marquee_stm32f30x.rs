//! Full example code for setting up an AS1130 panel. This runs on an STM32F303RE, with two 24x5
//! LED tiles on an AS1130 connected to I2C1 (PB6 SCL, PB7 SDA).

#![deny(unsafe_code)]
#![no_main]
#![no_std]

extern crate alloc_cortex_m;
extern crate as1130;
extern crate cortex_m;
extern crate embedded_hal as hal_api;
extern crate stm32f30x;
extern crate stm32f30x_hal as hal;
#[macro_use]
extern crate cortex_m_rt;
extern crate panic_abort;

use alloc_cortex_m::CortexMHeap;
use as1130::text::draw_string;
use cortex_m::asm;
use cortex_m_rt::ExceptionFrame;
use hal::i2c::I2c;
use hal::prelude::*;

#[global_allocator]
static ALLOCATOR: CortexMHeap = CortexMHeap::empty();
const HEAP_SIZE: usize = 1024;

entry!(main);

exception!(*, default_handler);
exception!(HardFault, hard_fault);

fn hard_fault(_ef: &ExceptionFrame) -> ! {
    asm::bkpt();
    loop {}
}

fn default_handler(_irqn: i16) {
    loop {}
}

fn main() -> ! {
    unsafe { ALLOCATOR.init(cortex_m_rt::heap_start() as usize, HEAP_SIZE) }

    // Get peripherals and set up RCC.
    let cp = cortex_m::Peripherals::take().unwrap();
    let dp = stm32f30x::Peripherals::take().unwrap();

    let mut flash = dp.FLASH.constrain();
    let mut rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze(&mut flash.acr);
    let mut delay = hal::delay::Delay::new(cp.SYST, clocks);

    // Set up I2C1, which is Alternate Function 4 for GPIOs PB6,7.
    let mut gpiob = dp.GPIOB.split(&mut rcc.ahb);
    let scl = gpiob.pb6.into_af4(&mut gpiob.moder, &mut gpiob.afrl);
    let sda = gpiob.pb7.into_af4(&mut gpiob.moder, &mut gpiob.afrl);
    let i2c = I2c::i2c1(dp.I2C1, (scl, sda), 400.khz(), clocks, &mut rcc.apb1);

    let mut disp = as1130::Display::new(as1130::I2cInterface::new(i2c));

    // Give the chip time to come out of power-on reset, then bring it up with the single-board
    // defaults: 36 frames, 10mA.
    delay.delay_ms(5_u16);
    disp.init(as1130::Config::default()).unwrap();

    // A 48 column canvas becomes two tiles, written to on/off frames 0 and 1 of the one 24x5
    // panel. The 3x5 font fits 12 cells, so the 13 character text is drawn as "HELLO, AS1..".
    let mut canvas = as1130::Canvas::new(48, 5).unwrap();
    draw_string(&mut canvas, 0, 0, "HELLO, AS1130", &as1130::FONT_3X5);
    disp.render_all(&canvas, as1130::Shading::OnOff).unwrap();
    // Only frame 0, the left half of the canvas, is on screen.
    disp.show_frame(0).unwrap();

    // Ramp the brightness of a lone pixel in frame 1. With a single tile lit, its PWM levels are
    // the ones left in the shared blink & PWM set.
    canvas.clear();
    for level in (0..=255u8).cycle() {
        canvas.set_pixel(36, 2, level);
        disp.render_all(&canvas, as1130::Shading::Brightness).unwrap();
        disp.show_frame(1).unwrap();
        delay.delay_ms(10_u16);
    }

    loop {
        asm::wfi();
    }
}
