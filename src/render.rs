use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use plantpal::model::{Plant, PLANT_TYPES};
use plantpal::status::{compute_status, days_until_watering, WateringStatus};

pub fn print_plants(plants: &[Plant], now: DateTime<Utc>) {
    if plants.is_empty() {
        println!("No plants tracked yet.");
        println!("Add one with: plantpal add --name <name> --type <type>");
        return;
    }

    let formatter = timeago::Formatter::new();
    for (i, plant) in plants.iter().enumerate() {
        let status = compute_status(plant, now);
        let watered = match (now - plant.last_watered).to_std() {
            Ok(elapsed) => formatter.convert(elapsed),
            // Clock skew: last_watered is in the future.
            Err(_) => "just now".to_string(),
        };
        println!(
            "{:>3}. {} {}  ({})  {}  watered {}, {}",
            i + 1,
            plant.emoji,
            plant.name.bold(),
            plant.type_name,
            status_label(status),
            watered,
            due_label(days_until_watering(plant, now)),
        );
    }
}

pub fn print_types() {
    for plant_type in PLANT_TYPES.iter() {
        println!(
            "{} {:<16} every {}",
            plant_type.emoji,
            plant_type.name,
            days_phrase(i64::from(plant_type.default_frequency)),
        );
    }
}

pub fn status_label(status: WateringStatus) -> ColoredString {
    match status {
        WateringStatus::Healthy => status.label().green(),
        WateringStatus::Thirsty => status.label().yellow(),
        WateringStatus::Overdue => status.label().red().bold(),
    }
}

fn due_label(days: i64) -> String {
    match days {
        0 => "due today".to_string(),
        d if d > 0 => format!("due in {}", days_phrase(d)),
        d => format!("{} overdue", days_phrase(-d)),
    }
}

fn days_phrase(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}
