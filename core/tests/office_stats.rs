//! Office statistics, shift distribution and CSV export.

use chrono::NaiveDate;
use rotation_core::{
    availability::{AvailabilityBook, WeeklyAvailability},
    clock::TimeWindow,
    export::{self, CSV_HEADER},
    generate,
    roster::{Member, Office},
    stats,
};

fn roster() -> (Vec<Member>, Vec<Office>) {
    let mut members = Vec::new();
    for i in 0..7 {
        members.push(Member::new(format!("l{i}"), format!("Lima {i}"), Some("lima")));
    }
    for i in 0..6 {
        members.push(Member::new(format!("c{i}"), format!("Cusco {i}"), Some("cusco")));
    }
    members.push(Member::new("a0", "Arequipa 0", Some("arequipa")));
    members.push(Member::new("x0", "Lost", Some("nowhere")));
    let offices = vec![
        Office::new("lima", "Oficina Lima", 3).with_location("Miraflores, Lima"),
        Office::new("cusco", "Oficina Cusco", 4).with_location("Cusco"),
        Office::new("arequipa", "Oficina Arequipa", 5),
        Office::new("empty", "Sin miembros", 2),
    ];
    (members, offices)
}

#[test]
fn stats_match_generator_partitioning() {
    let (members, offices) = roster();
    let all = stats::office_stats(&members, &offices);

    let ids: Vec<&str> = all.iter().map(|s| s.office.id.as_str()).collect();
    assert_eq!(ids, ["lima", "cusco", "arequipa"], "unknown and empty offices are skipped");

    let lima = &all[0];
    assert_eq!(lima.member_count, 7);
    assert!(lima.needs_rotation);
    assert_eq!(lima.shifts_needed, 3);
    assert_eq!(lima.members_per_shift, 3);
    assert!((lima.utilization_percent - 233.33).abs() < 0.01);

    let cusco = &all[1];
    assert_eq!(cusco.shifts_needed, 2);
    assert_eq!(cusco.members_per_shift, 3);

    let arequipa = &all[2];
    assert!(!arequipa.needs_rotation);
    assert_eq!(arequipa.shifts_needed, 1);
    assert!((arequipa.utilization_percent - 20.0).abs() < 1e-9);
}

#[test]
fn distribution_lists_on_site_days() {
    let (members, offices) = roster();
    let dist = stats::shift_distribution(&members, &offices);

    let lima = &dist[0];
    assert!(lima.needs_rotation);
    let labels: Vec<&str> = lima.shifts.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["A", "B", "C"]);
    assert_eq!(lima.shifts[0].days, ["Lun", "Jue"]);
    assert_eq!(lima.shifts[1].days, ["Mar", "Vie"]);
    assert_eq!(lima.shifts[2].days, ["Mié"]);
    assert_eq!(lima.shifts[0].member_ids, ["l0", "l3", "l6"]);

    let cusco = &dist[1];
    assert_eq!(cusco.shifts[0].label, "Mañana");
    assert_eq!(cusco.shifts[0].days.len(), 5);
    assert_eq!(cusco.shifts[1].days[0], "Lun (Tarde)");

    let arequipa = &dist[2];
    assert!(stats::is_single_shift(arequipa));
    assert_eq!(arequipa.shifts[0].days, ["Lun", "Mar", "Mié", "Jue", "Vie"]);
}

#[test]
fn csv_export_orders_by_date_and_escapes() {
    let members = vec![
        Member::new("m1", "Torres, Ana", Some("lima")),
        Member::new("m2", "Luis", Some("lima")),
    ];
    let offices = vec![Office::new("lima", "Oficina Lima", 5).with_location("Miraflores, Lima")];
    let mut book = AvailabilityBook::new();
    for m in &members {
        book.insert(m.id.clone(), WeeklyAvailability::weekdays(TimeWindow::FULL_DAY));
    }
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let batch = generate(&members, &offices, &book, 1, today).unwrap();

    let csv = export::to_csv(&batch, &members, &offices, None);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], CSV_HEADER);
    assert_eq!(lines.len(), 1 + 10);
    assert_eq!(
        lines[1],
        "2026-10-19,\"Torres, Ana\",Oficina Lima,\"Miraflores, Lima\",presencial,Único,09:00,18:00"
    );
    assert!(lines[10].starts_with("2026-10-23,Luis,"));

    let filtered = export::to_csv(&batch, &members, &offices, Some("cusco"));
    assert_eq!(filtered.lines().count(), 1, "only the header for another office");
}

#[test]
fn grouping_by_date_is_ascending() {
    let members = vec![Member::new("m1", "Ana", Some("lima"))];
    let offices = vec![Office::new("lima", "Lima", 1)];
    let mut book = AvailabilityBook::new();
    book.insert("m1", WeeklyAvailability::weekdays(TimeWindow::FULL_DAY));
    let batch = generate(&members, &offices, &book, 2, NaiveDate::from_ymd_opt(2026, 10, 22).unwrap()).unwrap();

    let grouped = export::assignments_by_date(&batch.assignments, None);
    assert_eq!(grouped.len(), 10);
    let dates: Vec<NaiveDate> = grouped.keys().copied().collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}
