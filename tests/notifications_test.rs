use chargelink::store::{ChargeStore, NewNotification, NotificationLevel};

#[test]
fn ids_are_strictly_increasing() {
    let mut store = ChargeStore::new();
    let mut last = 0;
    for i in 0..25 {
        let id = store.add_notification(NewNotification::new(
            NotificationLevel::Warning,
            "t",
            &format!("message {}", i),
        ));
        assert!(id > last);
        last = id;
    }
}

#[test]
fn sequence_is_capped_and_most_recent_first() {
    let mut store = ChargeStore::new();
    for i in 0..15 {
        store.add_notification(NewNotification::new(
            NotificationLevel::Error,
            "t",
            &format!("message {}", i),
        ));
    }

    let notifications = store.notifications();
    assert_eq!(notifications.len(), 10);
    assert_eq!(notifications[0].message, "message 14");
    assert_eq!(notifications[9].message, "message 5");

    // Newest first means ids descend
    for pair in notifications.windows(2) {
        assert!(pair[0].id > pair[1].id);
    }
}

#[test]
fn removal_is_exact_and_idempotent() {
    let mut store = ChargeStore::new();
    let a = store.add_notification(NewNotification::new(NotificationLevel::Info, "a", "a"));
    let b = store.add_notification(NewNotification::new(NotificationLevel::Info, "b", "b"));

    assert!(store.remove_notification(a));
    assert_eq!(store.notifications().len(), 1);
    assert_eq!(store.notifications()[0].id, b);

    // Second removal of the same id is a no-op
    assert!(!store.remove_notification(a));
    assert_eq!(store.notifications().len(), 1);
}

#[test]
fn clear_all_empties_the_sequence() {
    let mut store = ChargeStore::new();
    for _ in 0..3 {
        store.add_notification(NewNotification::new(NotificationLevel::Info, "t", "m"));
    }
    store.clear_all_notifications();
    assert!(store.notifications().is_empty());

    // Ids keep increasing after a clear, never reused
    let next = store.add_notification(NewNotification::new(NotificationLevel::Info, "t", "m"));
    assert_eq!(next, 4);
}

#[test]
fn custom_retention_limit_applies() {
    let mut store = ChargeStore::with_notification_limit(3);
    for i in 0..5 {
        store.add_notification(NewNotification::new(
            NotificationLevel::Warning,
            "t",
            &format!("m{}", i),
        ));
    }
    assert_eq!(store.notifications().len(), 3);
    assert_eq!(store.notifications()[0].message, "m4");
}

#[test]
fn notifications_carry_timestamp_and_payload() {
    let mut store = ChargeStore::new();
    let id = store.add_notification(NewNotification {
        level: NotificationLevel::Error,
        title: "Pile failure".to_string(),
        message: "Pile A1 went offline".to_string(),
        kind: Some("PILE_FAILURE".to_string()),
        pile_number: Some("A1".to_string()),
    });

    let n = &store.notifications()[0];
    assert_eq!(n.id, id);
    assert!(n.timestamp > 0);
    assert_eq!(n.kind.as_deref(), Some("PILE_FAILURE"));
    assert_eq!(n.pile_number.as_deref(), Some("A1"));
}
