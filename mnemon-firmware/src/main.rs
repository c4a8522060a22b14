//! Mnemon - Simon-style pattern game firmware
//!
//! Main firmware binary for RP2040-based boards. All three peripherals
//! (joystick ADC, LED bar, dot-matrix) hang off plain GPIO with their
//! protocols bit-banged by `mnemon-drivers`.
//!
//! Core 0 runs the game loop: it polls the joystick in blocking
//! busy-wait loops and issues whole-frame/whole-bar updates. Core 1
//! runs a single free-running task that re-scans the dot-matrix frame
//! forever - the matrix only shows a picture while it is being scanned.
//! The cores share exactly one thing, the published frame snapshot in
//! `channels`.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{Executor, Spawner};
use embassy_rp::clocks::RoscRng;
use embassy_rp::gpio::{AnyPin, Level};
use embassy_rp::multicore::{spawn_core1, Stack};
use embassy_rp::Peri;
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use mnemon_core::frame;
use mnemon_drivers::{Adc0832, GpioBuzzer, Joystick, Matrix, My9221};
use mnemon_hal_rp2040::{BlockingDelay, RpFlex, RpInput, RpOutput};

mod channels;
mod game;
mod pins;
mod sound;
mod tasks;

use pins::PinAssignment;

/// Joystick reader as wired on this board
pub type JoystickDriver =
    Joystick<RpOutput<'static>, RpOutput<'static>, RpFlex<'static>, RpInput<'static>, BlockingDelay>;

/// LED bar driver as wired on this board
pub type BarDriver = My9221<RpOutput<'static>, RpOutput<'static>, BlockingDelay>;

/// Buzzer driver as wired on this board
pub type ToneDriver = GpioBuzzer<RpOutput<'static>, BlockingDelay>;

static mut CORE1_STACK: Stack<4096> = Stack::new();
static EXECUTOR1: StaticCell<Executor> = StaticCell::new();

/// Hold between menu polls of the start button
const MENU_POLL_MS: u64 = 500;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("mnemon firmware starting...");

    let p = embassy_rp::init(Default::default());

    let board = PinAssignment {
        adc_cs: RpOutput::new(Peri::<AnyPin>::from(p.PIN_5), Level::High),
        adc_clk: RpOutput::new(Peri::<AnyPin>::from(p.PIN_6), Level::Low),
        adc_data: RpFlex::new(Peri::<AnyPin>::from(p.PIN_7)),
        joy_button: RpInput::new(Peri::<AnyPin>::from(p.PIN_8)),
        bar_clk: RpOutput::new(Peri::<AnyPin>::from(p.PIN_10), Level::Low),
        bar_data: RpOutput::new(Peri::<AnyPin>::from(p.PIN_11), Level::Low),
        matrix_latch: RpOutput::new(Peri::<AnyPin>::from(p.PIN_12), Level::High),
        matrix_clk: RpOutput::new(Peri::<AnyPin>::from(p.PIN_13), Level::Low),
        matrix_data: RpOutput::new(Peri::<AnyPin>::from(p.PIN_14), Level::Low),
        buzzer: RpOutput::new(Peri::<AnyPin>::from(p.PIN_15), Level::Low),
    };

    let matrix = Matrix::new(
        board.matrix_latch,
        board.matrix_clk,
        board.matrix_data,
        BlockingDelay,
    );

    // The render loop gets core 1 to itself: its per-cell dwell is a
    // busy-wait and would starve the game loop on a shared core
    spawn_core1(
        p.CORE1,
        unsafe { &mut *core::ptr::addr_of_mut!(CORE1_STACK) },
        move || {
            let executor1 = EXECUTOR1.init(Executor::new());
            executor1.run(|spawner| unwrap!(spawner.spawn(tasks::render_task(matrix))));
        },
    );

    let adc = Adc0832::new(board.adc_cs, board.adc_clk, board.adc_data, BlockingDelay);
    let mut joystick = Joystick::new(adc, board.joy_button, BlockingDelay);
    let mut bar = My9221::new(board.bar_clk, board.bar_data, BlockingDelay);
    let mut buzzer = GpioBuzzer::new(board.buzzer, BlockingDelay);
    let mut rng = RoscRng;

    info!("peripherals initialized");

    // Startup jingle
    sound::play_success(&mut buzzer);
    Timer::after_millis(1_000).await;

    loop {
        channels::set_frame(frame::READY);
        Timer::after_millis(MENU_POLL_MS).await;

        if joystick.button_pressed() {
            info!("joystick pressed, starting game");
            game::run(&mut joystick, &mut bar, &mut buzzer, &mut rng).await;
        }
    }
}
