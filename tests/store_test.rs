use chargelink::store::{
    ChargeStatus, ChargeStatusPatch, ChargeStore, LocationType, PileStatus, PricingInfoPatch,
    QueueInfoPatch,
};

fn waiting_at_pile(store: &mut ChargeStore) {
    store.update_charge_status(&ChargeStatusPatch {
        status: Some(ChargeStatus::Waiting),
        charging_pile_id: Some(Some(2)),
        is_queue_first: Some(true),
        charging_pile_status: Some(Some(PileStatus::Available)),
        ..Default::default()
    });
    store.update_queue_info(&QueueInfoPatch {
        queue_number: Some(7),
        queue_count: Some(0),
        estimated_wait: Some(12),
        location_type: Some(LocationType::ChargingPile),
    });
}

#[test]
fn partial_merge_leaves_absent_fields_untouched() {
    let mut store = ChargeStore::new();
    store.update_charge_status(&ChargeStatusPatch {
        status: Some(ChargeStatus::Charging),
        current_power: Some(12.5),
        charged_amount: Some(3.0),
        ..Default::default()
    });

    // A later patch naming only one field must not disturb the others
    store.update_charge_status(&ChargeStatusPatch {
        charged_amount: Some(4.5),
        ..Default::default()
    });

    assert_eq!(store.session.status, ChargeStatus::Charging);
    assert!((store.session.current_power - 12.5).abs() < 1e-9);
    assert!((store.session.charged_amount - 4.5).abs() < 1e-9);
}

#[test]
fn charging_merge_flips_predicates() {
    let mut store = ChargeStore::new();
    store.update_charge_status(&ChargeStatusPatch {
        status: Some(ChargeStatus::Charging),
        current_power: Some(12.5),
        ..Default::default()
    });

    assert!(store.can_stop_charge());
    assert!(!store.can_start_charge());
    assert!((store.session.current_power - 12.5).abs() < 1e-9);
}

#[test]
fn can_start_charge_requires_all_three_conditions() {
    let mut store = ChargeStore::new();
    waiting_at_pile(&mut store);
    assert!(store.can_start_charge());

    // Flip each condition to a disqualifying value in turn
    store.update_charge_status(&ChargeStatusPatch {
        status: Some(ChargeStatus::PriorityWaiting),
        ..Default::default()
    });
    assert!(!store.can_start_charge());

    let mut store = ChargeStore::new();
    waiting_at_pile(&mut store);
    store.update_charge_status(&ChargeStatusPatch {
        is_queue_first: Some(false),
        ..Default::default()
    });
    assert!(!store.can_start_charge());

    let mut store = ChargeStore::new();
    waiting_at_pile(&mut store);
    store.update_charge_status(&ChargeStatusPatch {
        charging_pile_status: Some(Some(PileStatus::Unavailable)),
        ..Default::default()
    });
    assert!(!store.can_start_charge());
}

#[test]
fn stop_charging_clears_assignment_and_queue() {
    let mut store = ChargeStore::new();
    waiting_at_pile(&mut store);
    store.start_charging();
    assert_eq!(store.session.status, ChargeStatus::Charging);

    store.stop_charging();

    assert_eq!(store.session.status, ChargeStatus::Completed);
    assert_eq!(store.session.charging_pile_id, None);
    assert_eq!(store.session.charging_pile_status, None);
    assert!(!store.session.is_queue_first);
    assert_eq!(store.queue.queue_number, 0);
    assert_eq!(store.queue.queue_count, 0);
    assert_eq!(store.queue.estimated_wait, 0);
    assert_eq!(store.queue.location_type, LocationType::None);
}

#[test]
fn cancel_clears_like_stop() {
    let mut store = ChargeStore::new();
    waiting_at_pile(&mut store);

    store.set_canceled();

    assert_eq!(store.session.status, ChargeStatus::Canceled);
    assert_eq!(store.session.charging_pile_id, None);
    assert_eq!(store.queue.location_type, LocationType::None);
}

#[test]
fn reset_keeps_battery_and_pricing() {
    let mut store = ChargeStore::new();
    waiting_at_pile(&mut store);
    store.battery_capacity = Some(60.0);
    store.update_pricing_info(&PricingInfoPatch {
        unit_price: Some(0.7),
        service_fee_rate: Some(0.3),
        current_period: Some("10:00-15:00".to_string()),
        price_type: Some("PEAK".to_string()),
    });
    store.update_charge_status(&ChargeStatusPatch {
        current_power: Some(30.0),
        total_capacity: Some(60.0),
        remaining_time: Some(45),
        ..Default::default()
    });

    store.reset_charging();

    assert_eq!(store.session.status, ChargeStatus::NotCharging);
    assert!((store.session.current_power).abs() < 1e-9);
    assert!((store.session.total_capacity).abs() < 1e-9);
    assert_eq!(store.session.remaining_time, 0);
    assert_eq!(store.queue.queue_number, 0);
    // Battery profile and pricing survive a reset
    assert_eq!(store.battery_capacity, Some(60.0));
    assert_eq!(store.pricing.price_type, "PEAK");
    assert_eq!(store.pricing.total_price_per_unit(), "1.00");
}

#[test]
fn auto_complete_does_not_clear() {
    let mut store = ChargeStore::new();
    waiting_at_pile(&mut store);
    store.start_charging();

    store.handle_auto_complete();

    // Distinct from stop_charging: the remaining fields are expected to
    // arrive via a subsequent merge
    assert_eq!(store.session.status, ChargeStatus::Completed);
    assert_eq!(store.session.charging_pile_id, Some(2));
    assert_eq!(store.queue.queue_number, 7);
}

#[test]
fn battery_capacity_gates_submission() {
    let mut store = ChargeStore::new();
    assert!(!store.can_submit_request());
    assert!(store.can_set_battery_capacity());

    store.battery_capacity = Some(40.0);
    assert!(store.can_submit_request());

    store.set_waiting();
    assert!(!store.can_set_battery_capacity());
}

#[test]
fn zero_battery_capacity_does_not_allow_submission() {
    let mut store = ChargeStore::new();
    store.battery_capacity = Some(0.0);
    assert!(!store.can_submit_request());
}

#[test]
fn charging_area_membership() {
    let mut store = ChargeStore::new();
    assert!(!store.is_in_charging_area());

    store.set_waiting();
    assert!(!store.is_in_charging_area());

    store.update_charge_status(&ChargeStatusPatch {
        charging_pile_id: Some(Some(1)),
        ..Default::default()
    });
    assert!(store.is_in_charging_area());

    store.start_charging();
    assert!(store.is_in_charging_area());
}

#[test]
fn active_request_states() {
    let mut store = ChargeStore::new();
    assert!(!store.has_active_request());

    for status in [
        ChargeStatus::Waiting,
        ChargeStatus::PriorityWaiting,
        ChargeStatus::Charging,
    ] {
        store.update_charge_status(&ChargeStatusPatch {
            status: Some(status),
            ..Default::default()
        });
        assert!(store.has_active_request());
        assert!(status != ChargeStatus::Charging || !store.can_cancel_charge());
    }

    store.stop_charging();
    assert!(!store.has_active_request());
}

#[test]
fn status_patch_decodes_from_wire_json() {
    let patch: ChargeStatusPatch = serde_json::from_str(
        r#"{
            "status": "WAITING",
            "currentPower": 20.0,
            "chargedAmount": 0.0,
            "totalCapacity": 60.0,
            "requestedAmount": 30.0,
            "remainingTime": 90,
            "chargingPileId": 5,
            "isQueueFirst": true,
            "chargingPileStatus": "AVAILABLE",
            "currentTotalFee": 1.25,
            "estimatedTotalFee": 42.0
        }"#,
    )
    .unwrap();

    let mut store = ChargeStore::new();
    store.update_charge_status(&patch);

    assert_eq!(store.session.status, ChargeStatus::Waiting);
    assert_eq!(store.session.charging_pile_id, Some(5));
    assert_eq!(store.session.charging_pile_status, Some(PileStatus::Available));
    assert_eq!(store.session.remaining_time, 90);
    assert!((store.session.estimated_total_fee - 42.0).abs() < 1e-9);
    assert!(store.can_start_charge());
}
