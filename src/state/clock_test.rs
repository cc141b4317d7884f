use super::*;

// =============================================================
// format_hms
// =============================================================

#[test]
fn formats_afternoon_time() {
    assert_eq!(format_hms(14, 5, 9), "14:05:09");
}

#[test]
fn zero_pads_every_field() {
    assert_eq!(format_hms(0, 0, 0), "00:00:00");
    assert_eq!(format_hms(1, 2, 3), "01:02:03");
}

#[test]
fn keeps_two_digit_fields() {
    assert_eq!(format_hms(23, 59, 59), "23:59:59");
}

// =============================================================
// ClockState
// =============================================================

#[test]
fn clock_state_starts_empty() {
    assert_eq!(ClockState::default().time, "");
}
