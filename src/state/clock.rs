#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Shared wall-clock readout.
///
/// One `RwSignal<ClockState>` context is provided from the root component
/// and refreshed by a single 1-second interval; the navbar and the floating
/// clock both subscribe to it instead of running their own timers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClockState {
    /// Current time as `HH:MM:SS`, empty until the first tick.
    pub time: String,
}

impl ClockState {
    /// Read the current wall-clock time. Browser only.
    pub fn now() -> Self {
        let date = js_sys::Date::new_0();
        Self {
            time: format_hms(date.get_hours(), date.get_minutes(), date.get_seconds()),
        }
    }
}

/// Format a time of day as zero-padded 24-hour `HH:MM:SS`.
pub fn format_hms(hours: u32, minutes: u32, seconds: u32) -> String {
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
