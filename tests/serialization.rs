use pushkind_chairs::commands::CommandOutput;
use pushkind_chairs::domain::notification::Notification;
use pushkind_chairs::domain::types::BookingStatus;
use serde_json::json;

mod common;

#[test]
fn test_status_uses_snake_case() {
    assert_eq!(
        serde_json::to_value(BookingStatus::Confirmed).unwrap(),
        json!("confirmed")
    );
    let status: BookingStatus = serde_json::from_value(json!("cancelled")).unwrap();
    assert_eq!(status, BookingStatus::Cancelled);
}

#[test]
fn test_booking_row_serializes_for_front_end() {
    let mut session = common::session();
    common::fill(&mut session, "2024-12-16", "bean-bag", "1:00 PM", 240);
    session.execute("submit").unwrap();

    let CommandOutput::Confirmed(booking) = session.execute("confirm").unwrap() else {
        panic!("expected a confirmed booking");
    };

    assert_eq!(
        serde_json::to_value(&booking).unwrap(),
        json!({
            "id": 1,
            "category": "Bean Bag Chairs",
            "date": "2024-12-16",
            "time": "1:00 PM - 5:00 PM",
            "location": "Floor 1, Lounge",
            "status": "confirmed",
            "status_label": "Confirmed",
        })
    );
}

#[test]
fn test_notification_serializes_kind_and_severity() {
    let value = serde_json::to_value(Notification::missing_information()).unwrap();

    assert_eq!(value["kind"], "missing_information");
    assert_eq!(value["severity"], "destructive");
    assert_eq!(value["title"], "Missing Information");
}
