use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};
use ossm_pinout::limit_switch::LimitSwitch;
use ossm_pinout::types::LimitState;

#[test]
fn closed_chain_reads_clear() {
    let pin = PinMock::new(&[PinTransaction::get(State::Low)]);
    let mut limit_switch = LimitSwitch::new(pin);

    assert_eq!(limit_switch.state().unwrap(), LimitState::Clear);

    limit_switch.release().done();
}

#[test]
fn open_chain_reads_triggered() {
    let pin = PinMock::new(&[
        PinTransaction::get(State::High),
        PinTransaction::get(State::High),
        PinTransaction::get(State::Low),
    ]);
    let mut limit_switch = LimitSwitch::new(pin);

    assert_eq!(limit_switch.state().unwrap(), LimitState::Triggered);
    assert!(limit_switch.is_triggered().unwrap());
    assert!(!limit_switch.is_triggered().unwrap());

    limit_switch.release().done();
}
