use chrono::{TimeZone, Utc};
use tickfmt::date::*;

// Helper: UTC timestamp as seconds
fn utc_secs(year: i32, month: u32, day: u32, h: u32, m: u32, s: u32) -> f64 {
    Utc.with_ymd_and_hms(year, month, day, h, m, s)
        .unwrap()
        .timestamp() as f64
}

#[test]
fn zeropad_pads_short_values() {
    assert_eq!(zeropad(7, 3), "007");
    assert_eq!(zeropad(0, 2), "00");
}

#[test]
fn zeropad_never_truncates() {
    assert_eq!(zeropad(123, 2), "123");
}

#[test]
fn granularity_tiers_are_ordered() {
    assert!(Granularity::Secondly < Granularity::Minutely);
    assert!(Granularity::Minutely < Granularity::Daily);
    assert!(Granularity::Daily < Granularity::Monthly);
    assert!(Granularity::Monthly < Granularity::Decadal);
}

#[test]
fn granularity_from_step_secs() {
    assert_eq!(Granularity::from_step_secs(0.5), Granularity::Millisecondly);
    assert_eq!(Granularity::from_step_secs(1.0), Granularity::Secondly);
    assert_eq!(Granularity::from_step_secs(60.0), Granularity::Minutely);
    assert_eq!(Granularity::from_step_secs(3_600.0), Granularity::Hourly);
    assert_eq!(Granularity::from_step_secs(86_400.0), Granularity::Daily);
    assert_eq!(
        Granularity::from_step_secs(30.0 * 86_400.0),
        Granularity::Monthly
    );
    assert_eq!(
        Granularity::from_step_secs(400.0 * 86_400.0),
        Granularity::Annual
    );
    assert_eq!(
        Granularity::from_step_secs(20.0 * 365.25 * 86_400.0),
        Granularity::Decadal
    );
}

#[test]
fn decadal_shows_year_only() {
    let fmt = DateFormatter::utc();
    let t = utc_secs(2024, 3, 5, 14, 30, 0);
    assert_eq!(fmt.format(t, Granularity::Decadal), "2024");
}

#[test]
fn monthly_shows_month_and_year() {
    let fmt = DateFormatter::utc();
    let t = utc_secs(2024, 3, 5, 14, 30, 0);
    assert_eq!(fmt.format(t, Granularity::Monthly), "Mar 2024");
    // Annual is below Decadal, so it also renders month + year.
    assert_eq!(fmt.format(t, Granularity::Annual), "Mar 2024");
}

#[test]
fn daily_ignores_time_of_day() {
    let fmt = DateFormatter::utc();
    let morning = utc_secs(2024, 3, 5, 0, 1, 0);
    let evening = utc_secs(2024, 3, 5, 23, 59, 59);
    assert_eq!(fmt.format(morning, Granularity::Daily), "Mar 5");
    assert_eq!(fmt.format(evening, Granularity::Daily), "Mar 5");
}

#[test]
fn midnight_renders_as_twelve_am() {
    let fmt = DateFormatter::utc();
    let t = utc_secs(2024, 3, 5, 0, 0, 0);
    assert_eq!(fmt.format(t, Granularity::Hourly), "12:00a\nMar 5");
}

#[test]
fn noon_renders_as_twelve_pm() {
    let fmt = DateFormatter::utc();
    let t = utc_secs(2024, 3, 5, 12, 0, 0);
    assert_eq!(fmt.format(t, Granularity::Hourly), "12:00p\nMar 5");
}

#[test]
fn afternoon_hours_wrap_to_twelve_hour_clock() {
    let fmt = DateFormatter::utc();
    let t = utc_secs(2024, 3, 5, 13, 5, 9);
    assert_eq!(fmt.format(t, Granularity::Minutely), "1:05p\nMar 5");
}

#[test]
fn seconds_shown_below_minutely() {
    let fmt = DateFormatter::utc();
    let t = utc_secs(2024, 3, 5, 13, 5, 9);
    assert_eq!(fmt.format(t, Granularity::Secondly), "1:05:09p\nMar 5");
}

#[test]
fn day_on_same_line_when_configured() {
    let fmt = DateFormatter {
        utc: true,
        day_on_new_line: false,
    };
    let t = utc_secs(2024, 3, 5, 13, 5, 0);
    assert_eq!(fmt.format(t, Granularity::Minutely), "1:05p Mar 5");
}

#[test]
fn non_finite_timestamp_falls_back_to_epoch() {
    let fmt = DateFormatter::utc();
    assert_eq!(fmt.format(f64::NAN, Granularity::Daily), "Jan 1");
    assert_eq!(fmt.format(f64::INFINITY, Granularity::Decadal), "1970");
}

#[test]
fn formatter_serde_round_trip() {
    let fmt = DateFormatter::utc();
    let json = serde_json::to_string(&fmt).unwrap();
    let back: DateFormatter = serde_json::from_str(&json).unwrap();
    assert_eq!(back, fmt);
}
