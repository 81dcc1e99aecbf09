//! Console rendering
//!
//! Everything the shell prints that is not a prompt.

use std::io::{self, Write};

use crate::student::Student;

use super::MenuChoice;

/// Width of section rules and the menu box
pub(crate) const WIDTH: usize = 50;

pub(crate) fn banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "╔{}╗", "═".repeat(WIDTH - 2))?;
    writeln!(out, "║{:^48}║", "STUDENT SERIALIZATION & DESERIALIZATION")?;
    writeln!(out, "╚{}╝", "═".repeat(WIDTH - 2))?;
    writeln!(out)
}

pub(crate) fn menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "┌{}┐", "─".repeat(WIDTH - 2))?;
    writeln!(out, "│ {:<46} │", "MAIN MENU")?;
    writeln!(out, "├{}┤", "─".repeat(WIDTH - 2))?;
    for choice in MenuChoice::ALL {
        let entry = format!("{}. {}", choice as u8, choice.label());
        writeln!(out, "│ {:<46} │", entry)?;
    }
    writeln!(out, "└{}┘", "─".repeat(WIDTH - 2))
}

/// Opening rule and title of an operation
pub(crate) fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "═".repeat(WIDTH))?;
    writeln!(out, "{:^50}", title)?;
    writeln!(out, "{}", "═".repeat(WIDTH))
}

/// Closing rule of an operation
pub(crate) fn section_end<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(WIDTH))?;
    writeln!(out)
}

/// Steps taken by a completed save, shown after the fact
pub(crate) fn serialization_steps<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "[SERIALIZATION PROCESS]")?;
    writeln!(
        out,
        "→ Encoding Student record (format version {})...",
        Student::FORMAT_VERSION
    )?;
    writeln!(out, "→ Sealing frame with length and CRC32...")?;
    writeln!(out, "→ Writing frame to file...")?;
    writeln!(out, "→ Flushing and closing file...")
}

/// Steps taken by a completed load, shown after the fact
pub(crate) fn deserialization_steps<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "[DESERIALIZATION PROCESS]")?;
    writeln!(out, "→ Reading file...")?;
    writeln!(out, "→ Checking magic, format version and CRC32...")?;
    writeln!(out, "→ Reconstructing Student record...")?;
    writeln!(out, "→ Closing file...")
}

pub(crate) fn success<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "✓ SUCCESS!")?;
    writeln!(out, "{}", message)
}

pub(crate) fn failure<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "✗ {}", message)?;
    writeln!(out)
}

pub(crate) fn student_details<W: Write>(out: &mut W, student: &Student) -> io::Result<()> {
    writeln!(out, "Student Details:")?;
    writeln!(out, "================")?;
    writeln!(out, "{}", student)
}

/// Accessor-by-accessor dump shown after a single load
pub(crate) fn object_details<W: Write>(out: &mut W, student: &Student) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "[OBJECT DETAILS]")?;
    writeln!(out, "Record Type: {}", std::any::type_name::<Student>())?;
    writeln!(out, "Format Version: {}", Student::FORMAT_VERSION)?;
    writeln!(out, "Student ID: {}", student.id())?;
    writeln!(out, "Name: {}", student.name())?;
    writeln!(out, "Grade: {}", student.grade())
}

/// Numbered block for one roster entry (1-based)
pub(crate) fn roster_entry<W: Write>(
    out: &mut W,
    number: usize,
    student: &Student,
) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(WIDTH))?;
    writeln!(out, "STUDENT {}", number)?;
    writeln!(out, "{}", "─".repeat(WIDTH))?;
    student_details(out, student)?;
    writeln!(out)
}

pub(crate) fn farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "✓ Thank you for using Student Serialization System!")?;
    writeln!(out, "Goodbye!")?;
    writeln!(out)
}
