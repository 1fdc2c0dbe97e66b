use std::time::{Duration, Instant};
use crate::phonebook::{Notification, NotificationKind};

#[test]
fn test_notification() {
    let n = Notification::success("Added Arto Hellas");
    assert_eq!(n.kind(), NotificationKind::Success);
    assert_eq!(n.is_error(), false);
    assert_eq!(n.message(), "Added Arto Hellas");
    assert_eq!(n.to_string(), "[OK] Added Arto Hellas");

    let n = Notification::error("Deleting failed");
    assert_eq!(n.is_error(), true);
    assert_eq!(n.to_string(), "[ERROR] Deleting failed");
}

#[test]
fn test_expiry() {
    let n = Notification::success("saved");
    let timeout = Duration::from_secs(5);
    assert_eq!(n.is_expired(Instant::now(), timeout), false);
    assert_eq!(n.is_expired(Instant::now() + Duration::from_secs(6), timeout), true);
    assert_eq!(n.is_expired(Instant::now(), Duration::ZERO), true);
}
