//! Text rendering for menu output

use crate::core::student::Student;

const RULE_WIDTH: usize = 100;

/// The main menu, one option per line
pub fn menu() -> String {
    let mut out = String::from("\nSTUDENT MANAGEMENT SYSTEM\n");
    for (token, label) in [
        ("1", "Add Student"),
        ("2", "View All Students"),
        ("3", "Search Student"),
        ("4", "Update Student"),
        ("5", "Delete Student"),
        ("6", "Exit"),
    ] {
        out.push_str(&format!("{token}. {label}\n"));
    }
    out
}

/// Table of every record, or a notice when there are none
pub fn listing(students: &[Student]) -> String {
    if students.is_empty() {
        return "\nNo students found.\n".to_string();
    }

    let rule = "-".repeat(RULE_WIDTH);
    let mut out = format!("\nStudent Records\n{rule}\n");
    for s in students {
        out.push_str(&format!(
            "ID: {} | Name: {} | Age: {} | Course: {}\n",
            s.id, s.name, s.age, s.course
        ));
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

/// A single search hit
pub fn found(student: &Student) -> String {
    format!(
        "Found: {} | Age: {} | Course: {}\n",
        student.name, student.age, student.course
    )
}
