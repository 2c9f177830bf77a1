//! schedule-runner: headless rotation schedule generation.
//!
//! Usage:
//!   schedule-runner --data-dir ./data --weeks 2
//!   schedule-runner --data-dir ./data --today 2026-10-19 --csv horarios.csv
//!   schedule-runner --data-dir ./data --relaxed --json batch.json --office lima

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rotation_core::{
    config::RosterData,
    export,
    generator::{RotationGenerator, ScheduleBatch},
    shift::WorkMode,
    stats,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let data_dir = flag_value(&args, "--data-dir").unwrap_or("./data");
    let office_filter = flag_value(&args, "--office");
    let csv_path = flag_value(&args, "--csv");
    let json_path = flag_value(&args, "--json");
    let relaxed = args.iter().any(|a| a == "--relaxed");
    let today = match flag_value(&args, "--today") {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("--today expects YYYY-MM-DD, got '{raw}'"))?,
        None => chrono::Local::now().date_naive(),
    };

    let data = RosterData::load(data_dir)?;
    let mut config = data.generator.clone();
    config.week_count = parse_arg(&args, "--weeks", config.week_count);
    if relaxed {
        config = config.relaxed();
    }

    println!("Office rotation — schedule-runner");
    println!("  data_dir:  {data_dir}");
    println!("  today:     {today}");
    println!("  weeks:     {}", config.week_count);
    println!("  strict:    {}", config.strict_office_assignment);
    println!();

    let generator = RotationGenerator::new(config);
    let batch = generator
        .generate(&data.members, &data.offices, &data.availability, today)
        .context("No se puede generar el horario")?;

    print_office_stats(&data);
    print_summary(&batch, &data);

    if let Some(path) = csv_path {
        let csv = export::to_csv(&batch, &data.members, &data.offices, office_filter);
        std::fs::write(path, csv).with_context(|| format!("Cannot write {path}"))?;
        log::info!("CSV export written to {path}");
        println!("  csv written:  {path}");
    }
    if let Some(path) = json_path {
        let json = export::to_json(&batch)?;
        std::fs::write(path, json).with_context(|| format!("Cannot write {path}"))?;
        log::info!("JSON export written to {path}");
        println!("  json written: {path}");
    }

    Ok(())
}

fn print_office_stats(data: &RosterData) {
    println!("=== OFFICES ===");
    for stat in stats::office_stats(&data.members, &data.offices) {
        println!(
            "  {:<20} {:>3}/{:<3} ({:>5.1}%) {}",
            stat.office.name,
            stat.member_count,
            stat.office.capacity,
            stat.utilization_percent,
            if stat.needs_rotation {
                format!("-> {} turnos, {} por turno", stat.shifts_needed, stat.members_per_shift)
            } else {
                "sin rotación".to_string()
            }
        );
    }

    println!();
    println!("=== SHIFT DISTRIBUTION ===");
    for office in stats::shift_distribution(&data.members, &data.offices) {
        if stats::is_single_shift(&office) {
            println!("  {}: todos presenciales", office.office_name);
            continue;
        }
        println!("  {}:", office.office_name);
        for shift in &office.shifts {
            println!(
                "    Turno {:<8} {} personas | {}",
                shift.label,
                shift.member_ids.len(),
                shift.days.join(", ")
            );
        }
    }

    let missing = data.availability.members_without_availability(&data.members);
    if !missing.is_empty() {
        println!();
        println!("=== MEMBERS WITHOUT AVAILABILITY ({}) ===", missing.len());
        for member in missing {
            println!("  {} ({})", member.name, member.id);
        }
    }
    println!();
}

fn print_summary(batch: &ScheduleBatch, data: &RosterData) {
    let on_site = batch
        .assignments
        .iter()
        .filter(|a| a.work_mode == WorkMode::Presencial)
        .count();

    println!("=== RUN SUMMARY ===");
    println!("  anchor (monday):  {}", batch.anchor);
    println!("  weeks:            {}", batch.week_count);
    println!("  assignments:      {}", batch.assignments.len());
    println!("  on site:          {on_site}");
    println!("  remote:           {}", batch.assignments.len() - on_site);
    println!("  members covered:  {}", batch.scheduled_member_count());

    if !batch.excluded_members.is_empty() {
        println!("  excluded (no office):");
        for member in &batch.excluded_members {
            println!("    - {} ({})", member.name, member.id);
        }
    }
    if batch.has_partial_coverage() {
        println!(
            "  WARNING: {} of {} member(s) got no assignment (availability missing or too narrow):",
            batch.unassigned_members.len(),
            data.members.len()
        );
        for member in &batch.unassigned_members {
            println!("    - {} ({})", member.name, member.id);
        }
    }
    println!();
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
