//! Interactive roster CLI.
//!
//! # Responsibility
//! - Drive the menu loop, prompting and display around `rollcall_core`.
//! - Own all terminal I/O; core APIs never read or print.
//!
//! # Invariants
//! - Validation failures re-prompt; they never abort the process.
//! - The in-memory roster is saved on exit, including when the input
//!   stream closes mid-session.

use log::info;
use rollcall_core::{
    core_version, default_log_level, init_logging, validate_mark, validate_name, validate_roll,
    PersistResult, RosterConfig, RosterService, StudentRecord, StudentUpdate, ValidationError,
};
use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, BufRead, Write};

const DATA_FILE_ENV: &str = "ROLLCALL_DATA_FILE";
const LOG_DIR_ENV: &str = "ROLLCALL_LOG_DIR";

fn main() {
    init_logging_from_env();
    info!("event=cli_start module=cli status=ok version={}", core_version());

    let mut service = RosterService::open(config_from_env());
    println!("Rollcall v{} - Student Roster", core_version());
    run_menu(&mut service);
}

fn config_from_env() -> RosterConfig {
    match std::env::var(DATA_FILE_ENV) {
        Ok(path) if !path.trim().is_empty() => RosterConfig::with_data_path(path.trim()),
        _ => RosterConfig::default(),
    }
}

fn init_logging_from_env() {
    let Ok(log_dir) = std::env::var(LOG_DIR_ENV) else {
        return;
    };
    if let Err(err) = init_logging(default_log_level(), &log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }
}

fn run_menu(service: &mut RosterService) {
    loop {
        print_menu();
        let Some(choice) = prompt_menu_choice() else {
            save_on_interrupt(service);
            return;
        };

        let flow = match choice {
            1 => add_flow(service),
            2 => {
                view_flow(service);
                Some(())
            }
            3 => search_edit_flow(service),
            4 => match service.save() {
                Ok(()) => {
                    println!("Student data saved successfully.");
                    println!("Exiting the program...");
                    return;
                }
                Err(err) => {
                    // Roster stays in memory; the save can be retried.
                    println!("Error saving data: {err}");
                    Some(())
                }
            },
            _ => Some(()),
        };

        if flow.is_none() {
            save_on_interrupt(service);
            return;
        }
    }
}

fn save_on_interrupt(service: &RosterService) {
    report_save(service.save());
}

fn report_save(result: PersistResult<()>) {
    match result {
        Ok(()) => println!("Student data saved successfully."),
        Err(err) => println!("Error saving data: {err}"),
    }
}

fn print_menu() {
    println!();
    println!("1. Add Student");
    println!("2. View All Students");
    println!("3. Search / Edit Student");
    println!("4. Save and Exit");
}

fn prompt_menu_choice() -> Option<u8> {
    loop {
        let raw = prompt_line("\nEnter your choice (1-4): ")?;
        match raw.trim().parse::<u8>() {
            Ok(choice) if (1..=4).contains(&choice) => return Some(choice),
            Ok(_) => println!("Please enter a number between 1 and 4!"),
            Err(_) => println!("Invalid input! Please enter a number."),
        }
    }
}

fn add_flow(service: &mut RosterService) -> Option<()> {
    loop {
        println!("\nAdd New Student");
        let name = prompt_validated("Enter Student Name: ", validate_name)?;
        let existing = service.roll_set();
        let roll = prompt_validated("Enter Roll Number: ", |raw| {
            validate_roll(raw, &existing)
        })?;

        let mut marks = BTreeMap::new();
        for subject in service.subjects().to_vec() {
            let mark = prompt_validated(
                &format!("Enter {subject} marks (0-100): "),
                validate_mark,
            )?;
            marks.insert(subject, mark);
        }

        let record = StudentRecord::new(name, roll, marks);
        match service.add(record) {
            Ok(()) => {
                let added = service.records().last().expect("record was just added");
                println!("\nStudent {} added successfully!", added.name);
            }
            Err(err) => println!("Could not add student: {err}"),
        }

        if !prompt_yes_no("\nAdd another student? (y/n): ")? {
            return Some(());
        }
    }
}

fn view_flow(service: &RosterService) {
    println!("\nAll Student Records");
    println!("------------------");
    if service.records().is_empty() {
        println!("No student records found!");
        return;
    }
    for (index, record) in service.records().iter().enumerate() {
        display_student(record, Some(index));
    }
    println!();
}

fn search_edit_flow(service: &mut RosterService) -> Option<()> {
    let no_rolls = BTreeSet::new();
    let roll = prompt_validated("\nEnter Roll Number to search: ", |raw| {
        validate_roll(raw, &no_rolls)
    })?;

    let Some((index, record)) = service.find_by_roll(&roll) else {
        println!("\nNo student found with Roll Number: {roll}");
        return Some(());
    };
    println!("\nStudent Found:");
    display_student(record, Some(index));

    let current_name = record.name.clone();
    let subjects: Vec<(String, u8)> = record
        .marks
        .iter()
        .map(|(subject, mark)| (subject.clone(), *mark))
        .collect();

    println!("\nEdit Student Details");
    let mut update = StudentUpdate::default();
    if prompt_yes_no(&format!("Edit name (current: {current_name})? (y/n): "))? {
        update.name = Some(prompt_validated("Enter new name: ", validate_name)?);
    }
    for (subject, current) in subjects {
        if prompt_yes_no(&format!("Edit {subject} marks (current: {current})? (y/n): "))? {
            let mark = prompt_validated(
                &format!("Enter new {subject} marks (0-100): "),
                validate_mark,
            )?;
            update.marks.push((subject, mark));
        }
    }

    if update.is_empty() {
        println!("No changes made.");
        return Some(());
    }

    match service.edit_by_roll(&roll, &update) {
        Ok(()) => {
            if let Some((index, record)) = service.find_by_roll(&roll) {
                println!("\nUpdated Student Details:");
                display_student(record, Some(index));
            }
        }
        Err(err) => println!("Could not edit student: {err}"),
    }
    Some(())
}

fn display_student(record: &StudentRecord, index: Option<usize>) {
    if let Some(index) = index {
        println!("\nStudent #{}", index + 1);
    }
    println!("Name: {}", record.name);
    println!("Roll Number: {}", record.roll);
    println!("Marks:");
    for (subject, mark) in &record.marks {
        println!("  {subject}: {mark}");
    }
    println!("Average Marks: {:.2}", record.average());
}

/// Prompts until `validate` accepts the input. Returns `None` when the
/// input stream closes.
fn prompt_validated<T>(
    label: &str,
    validate: impl Fn(&str) -> Result<T, ValidationError>,
) -> Option<T> {
    loop {
        let raw = prompt_line(label)?;
        match validate(&raw) {
            Ok(value) => return Some(value),
            Err(err) => println!("Invalid input: {err}. Please try again."),
        }
    }
}

fn prompt_yes_no(label: &str) -> Option<bool> {
    let raw = prompt_line(label)?;
    Some(raw.trim().eq_ignore_ascii_case("y"))
}

/// Reads one line from stdin. Returns `None` when the stream is closed.
fn prompt_line(label: &str) -> Option<String> {
    print!("{label}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\n', '\r']).to_string()),
    }
}
