//! Same inputs, same "current Monday" → byte-identical batches.

use chrono::NaiveDate;
use rotation_core::{
    availability::{AvailabilityBook, WeeklyAvailability},
    clock::TimeWindow,
    generate,
    roster::{Member, Office},
};

fn fixture() -> (Vec<Member>, Vec<Office>, AvailabilityBook) {
    let mut members = Vec::new();
    for i in 0..9 {
        members.push(Member::new(format!("lima-{i}"), format!("Lima {i}"), Some("lima")));
    }
    for i in 0..6 {
        members.push(Member::new(format!("cusco-{i}"), format!("Cusco {i}"), Some("cusco")));
    }
    let offices = vec![Office::new("lima", "Lima", 2), Office::new("cusco", "Cusco", 4)];

    let mut book = AvailabilityBook::new();
    for (k, m) in members.iter().enumerate() {
        let window = if k % 4 == 3 { TimeWindow::MORNING } else { TimeWindow::FULL_DAY };
        book.insert(m.id.clone(), WeeklyAvailability::weekdays(window));
    }
    (members, offices, book)
}

#[test]
fn identical_inputs_produce_identical_batches() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (members, offices, book) = fixture();

    // Different days of the same week share the anchor.
    let tuesday = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
    let friday = NaiveDate::from_ymd_opt(2026, 10, 23).unwrap();

    let a = generate(&members, &offices, &book, 4, tuesday).expect("run a");
    let b = generate(&members, &offices, &book, 4, friday).expect("run b");

    let json_a = serde_json::to_string(&a.assignments).unwrap();
    let json_b = serde_json::to_string(&b.assignments).unwrap();
    assert_eq!(json_a, json_b, "assignment batches diverged");
    assert_eq!(a, b);
}

#[test]
fn different_anchor_shifts_dates_only() {
    let (members, offices, book) = fixture();
    let this_week = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
    let next_week = NaiveDate::from_ymd_opt(2026, 10, 27).unwrap();

    let a = generate(&members, &offices, &book, 1, this_week).unwrap();
    let b = generate(&members, &offices, &book, 1, next_week).unwrap();

    assert_eq!(a.assignments.len(), b.assignments.len());
    for (x, y) in a.assignments.iter().zip(&b.assignments) {
        assert_eq!(x.member_id, y.member_id);
        assert_eq!(x.shift, y.shift);
        assert_eq!(x.work_mode, y.work_mode);
        assert_eq!((y.date - x.date).num_days(), 7);
    }
}

#[test]
fn batch_survives_json_round_trip() {
    let (members, offices, book) = fixture();
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let batch = generate(&members, &offices, &book, 2, today).unwrap();

    let json = rotation_core::export::to_json(&batch).unwrap();
    let back: rotation_core::ScheduleBatch = serde_json::from_str(&json).unwrap();
    assert_eq!(back, batch);
}
