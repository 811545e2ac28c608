#![no_std]
#![no_main]

extern crate alloc;

mod task;

use alloc::format;
use embassy_executor::{SpawnError, Spawner};
use embedded_hal::digital::PinState;
use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::gpio;
use esp_hal::timer::timg::TimerGroup;
use esp_println::println;
use ossm_pinout::{
    LIMIT_SWITCH_PIN, MOTOR_DIRECTION_PIN, MOTOR_ENABLE_PIN, MOTOR_STEP_PIN, PIN_TABLE, config,
    driver::{self, DriverOutputs},
    limit_switch::LimitSwitch,
    memlog, self_check,
};

esp_bootloader_esp_idf::esp_app_desc!();

// NOTES
// - esp_println sends prints to UART0, the same port used for flashing

fn level(state: PinState) -> gpio::Level {
    match state {
        PinState::Low => gpio::Level::Low,
        PinState::High => gpio::Level::High,
    }
}

// esp-hal hands out GPIOs as named fields, so main takes them by name. These
// fail the build if the pin table and the fields below drift apart.
const _: () = assert!(MOTOR_STEP_PIN == 14, "update peripherals.GPIO14 in main");
const _: () = assert!(MOTOR_DIRECTION_PIN == 27, "update peripherals.GPIO27 in main");
const _: () = assert!(MOTOR_ENABLE_PIN == 26, "update peripherals.GPIO26 in main");
const _: () = assert!(LIMIT_SWITCH_PIN == 12, "update peripherals.GPIO12 in main");

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let esp_config = esp_hal::Config::default().with_cpu_clock(CpuClock::_240MHz);
    let peripherals = esp_hal::init(esp_config);
    esp_alloc::heap_allocator!(size: 32 * 1024);
    let timer0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timer0.timer0);

    println!("{}", config::BANNER);
    for binding in PIN_TABLE {
        println!("  {binding}");
    }

    // Initialize an in-memory logger.
    memlog::init(config::MEMLOG_CAPACITY).await;

    // Refuse to drive anything if the pinout doesn't fit the chip.
    match self_check::run(&config::CHIP, &PIN_TABLE) {
        Ok(report) => {
            for warning in report.warnings() {
                println!("pinout: {warning}");
                memlog::warn(format!("{warning}")).await;
            }
        }
        Err(error) => panic!("pinout self-check failed: {error}"),
    }

    //
    // Driver and limit switch pins, as numbered in the pin table.
    //
    // A default output config with a 5mA drive strength. Enough for the driver optocouplers.
    let output_5ma = gpio::OutputConfig::default().with_drive_strength(gpio::DriveStrength::_5mA);
    let pin_step = gpio::Output::new(peripherals.GPIO14, gpio::Level::Low, output_5ma);
    let pin_direction = gpio::Output::new(
        peripherals.GPIO27,
        level(config::FORWARD_LEVEL),
        output_5ma,
    );
    // Start with the driver stage off.
    let pin_enable = gpio::Output::new(
        peripherals.GPIO26,
        level(driver::ENABLE_INACTIVE_LEVEL),
        output_5ma,
    );
    // The switch chain pulls the line to GND while closed.
    let pin_limit = gpio::Input::new(
        peripherals.GPIO12,
        gpio::InputConfig::default().with_pull(gpio::Pull::Up),
    );

    // Held for the rest of main. The outputs stay in their safe state until motion code takes them over.
    let Ok(_driver) = DriverOutputs::new(pin_step, pin_direction, pin_enable);
    let limit_switch = LimitSwitch::new(pin_limit);
    memlog::info("driver outputs ready, driver disabled").await;

    // Watcher count: 1 for the console below.
    let limit_watch = task::limit_watch::init::<1>();

    //
    // Spawn tasks.
    || -> Result<(), SpawnError> {
        // Publish limit switch chain changes.
        spawner.spawn(task::limit_watch(limit_switch, limit_watch.dyn_sender())?);

        Ok(())
    }()
    .unwrap();

    let mut limit_receiver = limit_watch
        .dyn_receiver()
        .expect("limit watch has a free receiver slot");
    loop {
        let state = limit_receiver.changed().await;
        println!("limit switch: {state}");
    }
}
