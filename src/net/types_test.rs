use super::*;

#[test]
fn success_envelope_deserializes_page_payload() {
    let raw = serde_json::json!({
        "code": 10000,
        "data": {
            "items": [
                {
                    "id": 1,
                    "itemName": "Umbrella",
                    "location": "Library",
                    "description": "Black folding umbrella",
                    "lostTime": "2024-03-01",
                    "status": false
                }
            ],
            "total": 37
        }
    });
    let resp: Response<Page<LostItem>> = serde_json::from_value(raw).unwrap();
    assert_eq!(resp.code, 10_000);
    let page = resp.data.unwrap();
    assert_eq!(page.total, 37);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].item_name, "Umbrella");
    assert_eq!(page.items[0].location.as_deref(), Some("Library"));
}

#[test]
fn error_envelope_deserializes_without_data() {
    let raw = serde_json::json!({ "code": 50000 });
    let resp: Response<Page<PhoneEntry>> = serde_json::from_value(raw).unwrap();
    assert_eq!(resp.code, 50_000);
    assert!(resp.data.is_none());
}

#[test]
fn lost_item_optional_fields_accept_null() {
    let raw = serde_json::json!({
        "id": 9,
        "itemName": "Key",
        "location": null,
        "description": "",
        "lostTime": null,
        "status": true
    });
    let item: LostItem = serde_json::from_value(raw).unwrap();
    assert_eq!(item.location, None);
    assert_eq!(item.lost_time, None);
    assert!(item.status);
}

#[test]
fn phone_entry_serializes_camel_case_fields() {
    let entry = PhoneEntry {
        id: 3,
        dept_name: "Registrar".to_owned(),
        phone: "555-0100".to_owned(),
    };
    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(value["deptName"], "Registrar");
    assert_eq!(value["phone"], "555-0100");
}

#[test]
fn reservation_kind_maps_to_type_field() {
    let raw = serde_json::json!({
        "id": 4,
        "type": "counseling",
        "stuName": "Wei",
        "sdept": "Physics",
        "content": "Need an appointment",
        "status": false
    });
    let r: Reservation = serde_json::from_value(raw).unwrap();
    assert_eq!(r.kind, "counseling");
    let back = serde_json::to_value(&r).unwrap();
    assert_eq!(back["type"], "counseling");
}

#[test]
fn repair_ticket_created_at_is_optional() {
    let raw = serde_json::json!({
        "id": 5,
        "itemName": "Faucet",
        "dorm": "West 2",
        "room": "214",
        "status": true
    });
    let ticket: RepairTicket = serde_json::from_value(raw).unwrap();
    assert_eq!(ticket.created_at, None);

    let raw = serde_json::json!({
        "id": 5,
        "itemName": "Faucet",
        "dorm": "West 2",
        "room": "214",
        "createdAt": null,
        "status": true
    });
    let ticket: RepairTicket = serde_json::from_value(raw).unwrap();
    assert_eq!(ticket.created_at, None);
}

#[test]
fn records_expose_their_ids() {
    let item = LostItem {
        id: 11,
        item_name: String::new(),
        location: None,
        description: String::new(),
        lost_time: None,
        status: false,
    };
    assert_eq!(item.record_id(), 11);

    let entry = PhoneEntry {
        id: 12,
        dept_name: String::new(),
        phone: String::new(),
    };
    assert_eq!(entry.record_id(), 12);
}

#[test]
fn day_usage_defaults_to_zero_counts() {
    let usage = DayUsage::default();
    assert_eq!(usage.users, 0);
    assert_eq!(usage.messages, 0);
    assert_eq!(usage.repairs, 0);
    assert_eq!(usage.reservations, 0);
}

#[test]
fn month_usage_deserializes_camel_case() {
    let raw = serde_json::json!({ "createdAt": "2024-03-05T00:00:00Z", "userCount": 42 });
    let sample: MonthUsage = serde_json::from_value(raw).unwrap();
    assert_eq!(sample.created_at, "2024-03-05T00:00:00Z");
    assert_eq!(sample.user_count, 42);
}
