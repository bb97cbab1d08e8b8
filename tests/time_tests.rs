use yatri::shared::Time;

#[test]
fn valid_time_test_1() {
    assert_eq!(Time::from_hms("00:00:00").unwrap().as_seconds(), 0);
}

#[test]
fn valid_time_test_2() {
    assert_eq!(Time::from_hms("00:01:30").unwrap().as_seconds(), 90);
}

#[test]
fn valid_time_test_3() {
    assert_eq!(Time::from_hms("01:01").unwrap().as_seconds(), 3660);
}

#[test]
fn invalid_time_test_1() {
    assert!(Time::from_hms("00:00:0a").is_none())
}

#[test]
fn invalid_time_test_2() {
    assert!(Time::from_hms("08").is_none())
}

#[test]
fn invalid_time_test_3() {
    assert!(Time::from_hms("08:75").is_none())
}

#[test]
fn overflowing_hours_are_rejected() {
    assert!(Time::from_hms("2000000:00").is_none());
    assert!(Time::from_hms("1193046:28:16").is_none());
}

#[test]
fn largest_representable_time() {
    assert_eq!(
        Time::from_hms("1193046:28:15").unwrap().as_seconds(),
        u32::MAX
    );
}
