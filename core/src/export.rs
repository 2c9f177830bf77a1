//! Batch export — CSV for spreadsheets, JSON for the storage layer.

use crate::{
    error::ScheduleResult,
    generator::{ScheduleAssignment, ScheduleBatch},
    roster::{Member, Office},
};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

pub const CSV_HEADER: &str = "Fecha,Miembro,Oficina,Ubicación,Modo,Turno,Hora Inicio,Hora Fin";

/// Assignments grouped by date, ascending. Generation order is kept inside
/// each date.
pub fn assignments_by_date<'a>(
    assignments: &'a [ScheduleAssignment],
    office_filter: Option<&str>,
) -> BTreeMap<NaiveDate, Vec<&'a ScheduleAssignment>> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&ScheduleAssignment>> = BTreeMap::new();
    for assignment in assignments {
        if office_filter.is_some_and(|id| id != assignment.office_id) {
            continue;
        }
        by_date.entry(assignment.date).or_default().push(assignment);
    }
    by_date
}

/// Render the batch as CSV, one row per assignment in date order.
pub fn to_csv(
    batch: &ScheduleBatch,
    members: &[Member],
    offices: &[Office],
    office_filter: Option<&str>,
) -> String {
    let member_names: HashMap<&str, &str> =
        members.iter().map(|m| (m.id.as_str(), m.name.as_str())).collect();
    let office_by_id: HashMap<&str, &Office> =
        offices.iter().map(|o| (o.id.as_str(), o)).collect();

    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    for (date, rows) in assignments_by_date(&batch.assignments, office_filter) {
        for a in rows {
            let office = office_by_id.get(a.office_id.as_str());
            let fields = [
                date.to_string(),
                member_names.get(a.member_id.as_str()).copied().unwrap_or_default().to_string(),
                office.map(|o| o.name.clone()).unwrap_or_default(),
                office.map(|o| o.location.clone()).unwrap_or_default(),
                a.work_mode.to_string(),
                a.shift.clone(),
                a.start_time.to_string(),
                a.end_time.to_string(),
            ];
            let line: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
            csv.push_str(&line.join(","));
            csv.push('\n');
        }
    }
    csv
}

/// Pretty JSON of the whole batch.
pub fn to_json(batch: &ScheduleBatch) -> ScheduleResult<String> {
    Ok(serde_json::to_string_pretty(batch)?)
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
