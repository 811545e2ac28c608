use embedded_hal_mock::eh1::MockError;
use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};
use ossm_pinout::driver::DriverOutputs;
use ossm_pinout::types::{OnOff, Rotation};

#[test]
fn starts_disabled_and_forward() {
    let step = PinMock::new(&[PinTransaction::set(State::Low)]);
    let direction = PinMock::new(&[PinTransaction::set(State::High)]);
    // ENA is active low, so inactive is high.
    let enable = PinMock::new(&[PinTransaction::set(State::High)]);

    let driver = DriverOutputs::new(step, direction, enable).unwrap();
    assert!(!driver.is_enabled());
    assert_eq!(driver.rotation(), Rotation::Forward);

    //check that every pin was driven exactly as expected
    let (mut step, mut direction, mut enable) = driver.release();
    step.done();
    direction.done();
    enable.done();
}

#[test]
fn enable_and_reverse() {
    let step = PinMock::new(&[PinTransaction::set(State::Low)]);
    let direction = PinMock::new(&[
        PinTransaction::set(State::High),
        PinTransaction::set(State::Low),
        PinTransaction::set(State::High),
    ]);
    let enable = PinMock::new(&[
        PinTransaction::set(State::High),
        PinTransaction::set(State::Low),
        PinTransaction::set(State::High),
    ]);

    let mut driver = DriverOutputs::new(step, direction, enable).unwrap();

    driver.set_enabled(OnOff::On).unwrap();
    assert!(driver.is_enabled());
    driver.set_rotation(Rotation::Reverse).unwrap();
    assert_eq!(driver.rotation(), Rotation::Reverse);
    driver.set_rotation(Rotation::Forward).unwrap();
    driver.set_enabled(OnOff::Off).unwrap();
    assert!(!driver.is_enabled());

    let (mut step, mut direction, mut enable) = driver.release();
    step.done();
    direction.done();
    enable.done();
}

#[test]
fn step_pin_is_handed_out() {
    use embedded_hal::digital::OutputPin;

    let step = PinMock::new(&[
        PinTransaction::set(State::Low),
        PinTransaction::set(State::High),
        PinTransaction::set(State::Low),
    ]);
    let direction = PinMock::new(&[PinTransaction::set(State::High)]);
    let enable = PinMock::new(&[PinTransaction::set(State::High)]);

    let mut driver = DriverOutputs::new(step, direction, enable).unwrap();
    driver.step_pin().set_high().unwrap();
    driver.step_pin().set_low().unwrap();

    let (mut step, mut direction, mut enable) = driver.release();
    step.done();
    direction.done();
    enable.done();
}

#[test]
fn failed_enable_keeps_previous_state() {
    let step = PinMock::new(&[PinTransaction::set(State::Low)]);
    let direction = PinMock::new(&[PinTransaction::set(State::High)]);
    let enable = PinMock::new(&[
        PinTransaction::set(State::High),
        PinTransaction::set(State::Low)
            .with_error(MockError::Io(std::io::ErrorKind::NotConnected)),
    ]);

    let mut driver = DriverOutputs::new(step, direction, enable).unwrap();
    assert!(driver.set_enabled(OnOff::On).is_err());
    assert!(!driver.is_enabled());

    let (mut step, mut direction, mut enable) = driver.release();
    step.done();
    direction.done();
    enable.done();
}
