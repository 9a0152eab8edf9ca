use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::assign::{Assignment, AssignmentResult, CallMap};

/// Renders one line per participant, sorted by name: "name --> a and b"
pub fn format_report(calls: &CallMap) -> String {
    let mut report = String::new();
    // BTreeMap iterates in lexicographic key order
    for (name, targets) in calls {
        if targets.is_empty() {
            report.push_str(&format!("{} --> no one\n", name));
        } else {
            report.push_str(&format!("{} --> {}\n", name, targets.join(" and ")));
        }
    }
    report
}

/// Writes the report to a text file with a short header
pub fn write_report_to_file<P: AsRef<Path>>(
    assignment: &Assignment,
    path: P,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(path)?;

    writeln!(
        file,
        "** {} participants, {} calls each **",
        assignment.calls.len(),
        assignment.per_person
    )?;
    if let Some(note) = &assignment.note {
        writeln!(file, "Note: {}", note)?;
    }
    write!(file, "{}", assignment.report())?;

    Ok(())
}

/// Prints a generation result in a readable format
pub fn print_assignment(result: &AssignmentResult) {
    match result {
        Ok(assignment) => {
            println!("\n=== Call Assignments ===");
            println!("Participants: {}", assignment.calls.len());
            println!("Calls per person: {}", assignment.per_person);
            println!("In-degree spread: {}", assignment.spread());
            if let Some(note) = &assignment.note {
                println!("Note: {}", note);
            }
            println!();
            print!("{}", assignment.report());
        }
        Err(e) => {
            println!("\n⚠️  {}", e);
        }
    }
}
