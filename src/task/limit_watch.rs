use alloc::boxed::Box;
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, watch};
use esp_hal::gpio;
use ossm_pinout::{limit_switch::LimitSwitch, memlog, types::LimitState};

pub type LimitWatch<const W: usize> = &'static watch::Watch<CriticalSectionRawMutex, LimitState, W>;
pub type LimitDynSender = watch::DynSender<'static, LimitState>;

/// Takes a const that sets the maximum number of watchers.
pub fn init<const WATCHERS: usize>() -> LimitWatch<WATCHERS> {
    Box::leak(Box::new(watch::Watch::new()))
}

/// Publishes the state of the limit switch chain every time the input changes.
/// Raw reads, no debouncing.
#[embassy_executor::task]
pub async fn limit_watch(
    mut limit_switch: LimitSwitch<gpio::Input<'static>>,
    limit_sender: LimitDynSender,
) {
    let mut last_state = None;

    loop {
        let Ok(state) = limit_switch.state();

        if last_state != Some(state) {
            limit_sender.send(state);
            match state {
                LimitState::Triggered => memlog::warn("limit switch chain open").await,
                LimitState::Clear => memlog::info("limit switch chain closed").await,
            }
            last_state = Some(state);
        }

        limit_switch.pin_mut().wait_for_any_edge().await;
    }
}
