use super::*;

// =============================================================
// effective_delay
// =============================================================

#[test]
fn zero_duration_disables_expiry() {
    assert_eq!(effective_delay(0), None);
}

#[test]
fn negative_duration_disables_expiry() {
    assert_eq!(effective_delay(-1), None);
}

#[test]
fn positive_duration_maps_to_browser_delay() {
    assert_eq!(effective_delay(1000), Some(1000));
}

#[test]
fn oversized_duration_disables_expiry() {
    assert_eq!(effective_delay(i64::from(u32::MAX) + 1), None);
}

// =============================================================
// SessionTimer (host build: arming is a no-op but must be safe)
// =============================================================

#[test]
fn disarm_without_arm_is_safe() {
    let mut timer = SessionTimer::new(1000);
    timer.disarm();
    timer.disarm();
}

#[test]
fn arm_and_disarm_do_not_panic() {
    let mut timer = SessionTimer::new(1000);
    timer.arm(|| {});
    timer.arm(|| {});
    timer.disarm();
}
