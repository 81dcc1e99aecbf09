//! Interactive Shell
//!
//! Menu loop that collects student fields from a line-oriented input,
//! drives the archive, and renders results to an output.
//!
//! Generic over `BufRead`/`Write` so the binary can run it on stdin/stdout
//! and tests can run it on in-memory buffers.
//!
//! ## Error Handling
//! Every failure ends the current operation only: it is reported and the
//! menu is shown again. End of input at the menu ends the loop.

mod menu;
mod render;

use std::io::{self, BufRead, Write};
use std::str::FromStr;

pub use menu::MenuChoice;

use crate::archive::StudentArchive;
use crate::error::Result;
use crate::student::Student;
use crate::RollbookError;

/// The interactive menu loop
pub struct Shell<R, W> {
    archive: StudentArchive,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(archive: StudentArchive, input: R, output: W) -> Self {
        Self {
            archive,
            input,
            output,
        }
    }

    /// Run until the user picks Exit or the input ends
    ///
    /// Only console write failures escape; operation errors are reported
    /// inline.
    pub fn run(&mut self) -> Result<()> {
        render::banner(&mut self.output)?;

        loop {
            render::menu(&mut self.output)?;
            write!(self.output, "Enter your choice: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                tracing::debug!("input closed at menu");
                writeln!(self.output)?;
                break;
            };

            let Ok(number) = line.trim().parse::<i32>() else {
                render::failure(&mut self.output, "Invalid input! Please enter a number.")?;
                continue;
            };

            let Some(choice) = MenuChoice::from_number(number) else {
                render::failure(&mut self.output, "Invalid choice! Please enter 1-5.")?;
                continue;
            };

            tracing::debug!(?choice, "menu choice");
            let outcome = match choice {
                MenuChoice::CreateStudent => self.create_student(),
                MenuChoice::ShowStudent => self.show_student(),
                MenuChoice::CreateRoster => self.create_roster(),
                MenuChoice::ShowRoster => self.show_roster(),
                MenuChoice::Exit => {
                    render::farewell(&mut self.output)?;
                    break;
                }
            };

            if let Err(e) = outcome {
                self.report(choice, &e)?;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Give back the archive and the streams
    pub fn into_parts(self) -> (StudentArchive, R, W) {
        (self.archive, self.input, self.output)
    }

    // =========================================================================
    // Operations
    // =========================================================================

    fn create_student(&mut self) -> Result<()> {
        render::section(&mut self.output, "CREATE AND SERIALIZE STUDENT")?;

        let student = self.prompt_student()?;
        let path = self.archive.save_student(&student)?;
        render::serialization_steps(&mut self.output)?;

        render::success(
            &mut self.output,
            "Student object created and serialized successfully!",
        )?;
        writeln!(self.output, "File: {}", path.display())?;
        writeln!(self.output)?;
        writeln!(self.output, "Student Information:")?;
        render::student_details(&mut self.output, &student)?;
        render::section_end(&mut self.output)?;
        Ok(())
    }

    fn show_student(&mut self) -> Result<()> {
        render::section(&mut self.output, "DESERIALIZE AND DISPLAY STUDENT")?;

        let student = self.archive.load_student()?;
        render::deserialization_steps(&mut self.output)?;

        render::success(&mut self.output, "Student object deserialized successfully!")?;
        writeln!(self.output)?;
        render::student_details(&mut self.output, &student)?;
        render::object_details(&mut self.output, &student)?;
        render::section_end(&mut self.output)?;
        Ok(())
    }

    fn create_roster(&mut self) -> Result<()> {
        render::section(&mut self.output, "SERIALIZE MULTIPLE STUDENTS")?;

        let count: usize =
            self.prompt_number("How many students do you want to add? ", "student count")?;

        let mut students = Vec::new();
        for number in 1..=count {
            writeln!(self.output)?;
            writeln!(self.output, "--- Student {} ---", number)?;
            students.push(self.prompt_student()?);
        }

        let path = self.archive.save_roster(&students)?;

        render::success(
            &mut self.output,
            &format!("{} students serialized successfully!", students.len()),
        )?;
        writeln!(self.output, "File: {}", path.display())?;
        render::section_end(&mut self.output)?;
        Ok(())
    }

    fn show_roster(&mut self) -> Result<()> {
        render::section(&mut self.output, "DESERIALIZE MULTIPLE STUDENTS")?;

        let students = self.archive.load_roster()?;

        render::success(
            &mut self.output,
            &format!("{} students deserialized successfully!", students.len()),
        )?;
        writeln!(self.output)?;
        for (index, student) in students.iter().enumerate() {
            render::roster_entry(&mut self.output, index + 1, student)?;
        }
        render::section_end(&mut self.output)?;
        Ok(())
    }

    fn report(&mut self, choice: MenuChoice, error: &RollbookError) -> Result<()> {
        tracing::debug!(?choice, %error, "operation abandoned");
        writeln!(self.output)?;
        writeln!(self.output, "✗ Error: {}", error)?;
        if let (RollbookError::NotFound(_), Some(hint)) = (error, choice.missing_file_hint()) {
            writeln!(self.output, "{}", hint)?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    // =========================================================================
    // Input helpers
    // =========================================================================

    fn prompt_student(&mut self) -> Result<Student> {
        let id: i32 = self.prompt_number("Enter Student ID: ", "Student ID")?;
        let name = self.prompt("Enter Student Name: ")?;
        let grade = self.prompt("Enter Student Grade: ")?;
        Ok(Student::new(id, name, grade))
    }

    fn prompt_number<T: FromStr>(&mut self, label: &str, field: &str) -> Result<T> {
        let line = self.prompt(label)?;
        line.trim().parse().map_err(|_| {
            RollbookError::InputFormat(format!(
                "{} must be a whole number, got {:?}",
                field, line
            ))
        })
    }

    /// Print a prompt and read the answer; end of input is an error here
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        self.read_line()?.ok_or_else(|| {
            RollbookError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before the operation completed",
            ))
        })
    }

    /// One line without its terminator, or None at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
