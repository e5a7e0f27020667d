//! The interactive menu loop.
//!
//! Reads choices and field values line by line from `input`, calls the API,
//! and writes everything to `out`. No failure ends the session; only choice
//! `6` or end of input does.

use super::print::{print_error, print_list, print_messages, print_records};
use roster::api::RosterApi;
use roster::commands::{RecordUpdate, StudentInput};
use roster::store::DataStore;
use std::io::{self, BufRead, Write};

const MENU: &str = "\
1. Add Student
2. Search Student
3. Delete Student
4. Update Student
5. Display All Students
6. Exit";

pub(crate) const GOODBYE: &str = "Exiting the program. Have a nice day!";

pub(crate) struct Menu<'a, S: DataStore, R: BufRead, W: Write> {
    api: &'a mut RosterApi<S>,
    input: R,
    out: W,
}

enum Flow {
    Continue,
    Exit,
}

impl<'a, S: DataStore, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub(crate) fn new(api: &'a mut RosterApi<S>, input: R, out: W) -> Self {
        Self { api, input, out }
    }

    pub(crate) fn run(mut self) -> io::Result<()> {
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "***** Student Management System *****")?;
            writeln!(self.out)?;
            writeln!(self.out, "Please select your option below")?;
            writeln!(self.out, "{}", MENU)?;

            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };
            let flow = match choice.trim() {
                "1" => self.add()?,
                "2" => self.search()?,
                "3" => self.delete()?,
                "4" => self.update()?,
                "5" => self.list()?,
                "6" => Flow::Exit,
                _ => {
                    writeln!(self.out, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };
            if let Flow::Exit = flow {
                break;
            }
        }
        writeln!(self.out, "{}", GOODBYE)?;
        self.out.flush()
    }

    /// Print `label` and read one line without its line ending. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }

    fn add(&mut self) -> io::Result<Flow> {
        let mut fields = Vec::with_capacity(5);
        for label in [
            "Enter Student ID: ",
            "Enter Student Name: ",
            "Enter Programme (Computing/Business): ",
            "Enter Date of Birth (YYYY-MM-DD): ",
            "Enter CGPA: ",
        ] {
            match self.prompt(label)? {
                Some(value) => fields.push(value),
                None => return Ok(Flow::Exit),
            }
        }
        let mut fields = fields.into_iter();
        let input = StudentInput {
            student_id: fields.next().unwrap_or_default(),
            name: fields.next().unwrap_or_default(),
            programme: fields.next().unwrap_or_default(),
            date_of_birth: fields.next().unwrap_or_default(),
            gpa: fields.next().unwrap_or_default(),
        };
        match self.api.add_input(&input) {
            Ok(result) => print_messages(&mut self.out, &result.messages)?,
            Err(err) => print_error(&mut self.out, &err)?,
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt("Enter Student ID to search: ")? else {
            return Ok(Flow::Exit);
        };
        match self.api.search(&id) {
            Ok(result) => print_records(&mut self.out, &result)?,
            Err(err) => print_error(&mut self.out, &err)?,
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt("Enter Student ID to delete: ")? else {
            return Ok(Flow::Exit);
        };
        match self.api.delete(&id) {
            Ok(result) => print_messages(&mut self.out, &result.messages)?,
            Err(err) => print_error(&mut self.out, &err)?,
        }
        Ok(Flow::Continue)
    }

    fn update(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt("Enter Student ID to update: ")? else {
            return Ok(Flow::Exit);
        };
        // Asking for new values is pointless when the id is unknown
        if let Err(err) = self.api.search(&id) {
            print_error(&mut self.out, &err)?;
            return Ok(Flow::Continue);
        }

        let mut values = Vec::with_capacity(4);
        for label in [
            "Enter new name (leave blank to keep current): ",
            "Enter new programme (Computing/Business, leave blank to keep current): ",
            "Enter new date of birth (YYYY-MM-DD, leave blank to keep current): ",
            "Enter new CGPA (leave blank to keep current): ",
        ] {
            match self.prompt(label)? {
                Some(value) => values.push(value),
                None => return Ok(Flow::Exit),
            }
        }
        let mut values = values.into_iter();
        let update = RecordUpdate {
            name: values.next(),
            programme: values.next(),
            date_of_birth: values.next(),
            gpa: values.next(),
        };

        match self.api.update(&id, &update) {
            Ok(result) => print_messages(&mut self.out, &result.messages)?,
            Err(err) => print_error(&mut self.out, &err)?,
        }
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> io::Result<Flow> {
        let result = self.api.list_all();
        print_list(&mut self.out, &result)?;
        Ok(Flow::Continue)
    }
}
