//! Interactive menu controller
//!
//! Renders the menu, reads a choice, and dispatches to one of the record
//! operations until the user exits or input ends.

use crate::{
    cli::render,
    config::Config,
    core::{LoadOutcome, Student, StudentRegistry, StudentStore, StudentUpdate},
    error::RecordsError,
};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// A menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Search,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Map a trimmed input token to a choice. Only the exact tokens `1`..`6` match.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "1" => Some(Self::Add),
            "2" => Some(Self::List),
            "3" => Some(Self::Search),
            "4" => Some(Self::Update),
            "5" => Some(Self::Delete),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Controller state after handling one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Terminated,
}

/// Returns early with `Terminated` when input has ended.
macro_rules! read_or_exit {
    ($menu:expr, $prompt:expr) => {
        match $menu.prompt($prompt)? {
            Some(line) => line,
            None => return Ok(MenuState::Terminated),
        }
    };
}

/// The interactive menu over a student registry
pub struct Menu<R, W> {
    registry: StudentRegistry,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(registry: StudentRegistry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
        }
    }

    /// Run until the exit option is chosen or input ends
    pub fn run(&mut self) -> Result<()> {
        while self.step()? == MenuState::Running {}

        info!("Menu loop terminated");
        if let Err(e) = self.registry.flush() {
            warn!("Final save failed: {}", e);
            writeln!(self.output, "Could not save students: {e}")?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Render the menu once and handle a single choice
    pub fn step(&mut self) -> Result<MenuState> {
        write!(self.output, "{}", render::menu())?;
        let token = read_or_exit!(self, "Select an option: ");

        match MenuChoice::parse(token.trim()) {
            Some(choice) => {
                debug!(?choice, "Dispatching");
                self.dispatch(choice)
            }
            None => {
                writeln!(self.output, "Invalid option, try again.\n")?;
                Ok(MenuState::Running)
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<MenuState> {
        match choice {
            MenuChoice::Add => self.add_student(),
            MenuChoice::List => self.list_students(),
            MenuChoice::Search => self.search_student(),
            MenuChoice::Update => self.update_student(),
            MenuChoice::Delete => self.delete_student(),
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting system. Goodbye!\n")?;
                Ok(MenuState::Terminated)
            }
        }
    }

    #[instrument(skip(self))]
    fn add_student(&mut self) -> Result<MenuState> {
        writeln!(self.output, "\nAdd New Student")?;
        let id = read_or_exit!(self, "Enter student ID: ");
        let id = id.trim();
        if self.registry.contains(id) {
            return self.report(RecordsError::duplicate_id(id));
        }

        let name = read_or_exit!(self, "Enter full name: ");
        let age = read_or_exit!(self, "Enter age: ");
        let course = read_or_exit!(self, "Enter course: ");

        let student = match Student::from_input(id, &name, &age, &course) {
            Ok(student) => student,
            Err(e) => return self.report(e),
        };

        let result = self.registry.add(student).map(|s| s.name.clone());
        match result {
            Ok(name) => {
                writeln!(self.output, "Student {name} added successfully!\n")?;
                Ok(MenuState::Running)
            }
            Err(e) => self.report(e),
        }
    }

    fn list_students(&mut self) -> Result<MenuState> {
        write!(self.output, "{}", render::listing(self.registry.students()))?;
        Ok(MenuState::Running)
    }

    #[instrument(skip(self))]
    fn search_student(&mut self) -> Result<MenuState> {
        let id = read_or_exit!(self, "\nEnter student ID to search: ");

        match self.registry.find(id.trim()) {
            Some(student) => writeln!(self.output, "{}", render::found(student))?,
            None => writeln!(self.output, "Student not found.\n")?,
        }
        Ok(MenuState::Running)
    }

    #[instrument(skip(self))]
    fn update_student(&mut self) -> Result<MenuState> {
        let id = read_or_exit!(self, "\nEnter student ID to update: ");
        let id = id.trim();

        let Some(current) = self.registry.find(id).cloned() else {
            return self.report(RecordsError::not_found(id));
        };

        writeln!(self.output, "Updating {}...", current.name)?;
        let name = read_or_exit!(self, &format!("Enter new name ({}): ", current.name));
        let age = read_or_exit!(self, &format!("Enter new age ({}): ", current.age));
        let course = read_or_exit!(self, &format!("Enter new course ({}): ", current.course));

        let update = match StudentUpdate::from_input(&name, &age, &course) {
            Ok(update) => update,
            Err(e) => return self.report(e),
        };

        match self.registry.update(id, update).map(|_| ()) {
            Ok(()) => {
                writeln!(self.output, "Student updated successfully!\n")?;
                Ok(MenuState::Running)
            }
            Err(e) => self.report(e),
        }
    }

    #[instrument(skip(self))]
    fn delete_student(&mut self) -> Result<MenuState> {
        let id = read_or_exit!(self, "\nEnter student ID to delete: ");
        let id = id.trim();

        let Some(name) = self.registry.find(id).map(|s| s.name.clone()) else {
            writeln!(self.output, "Student ID not found.\n")?;
            return Ok(MenuState::Running);
        };

        let confirm = read_or_exit!(
            self,
            &format!("Are you sure you want to delete {name}? (y/n): ")
        );
        if confirm.to_lowercase() != "y" {
            writeln!(self.output, "Deletion cancelled.\n")?;
            return Ok(MenuState::Running);
        }

        match self.registry.delete(id).map(|_| ()) {
            Ok(()) => {
                writeln!(self.output, "Student deleted successfully!\n")?;
                Ok(MenuState::Running)
            }
            Err(e) => self.report(e),
        }
    }

    /// Tell the user why an operation did not complete. Nothing here ends the loop.
    fn report(&mut self, err: RecordsError) -> Result<MenuState> {
        match &err {
            RecordsError::Validation { message } => writeln!(self.output, "{message}")?,
            RecordsError::DuplicateId { .. } => writeln!(self.output, "ID already exists!")?,
            RecordsError::NotFound { .. } => writeln!(self.output, "Student not found.\n")?,
            _ => {
                warn!("Operation could not be saved: {}", err);
                writeln!(
                    self.output,
                    "Could not save students: {err}. The change is kept in memory and will be saved again on the next change or on exit."
                )?;
            }
        }
        Ok(MenuState::Running)
    }

    /// Write a prompt and read one line with its terminator removed.
    /// Bytes that are not valid UTF-8 become U+FFFD. Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("Failed to read from standard input")?;
        if read == 0 {
            debug!("End of input");
            return Ok(None);
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Warn on stdout when the data file could not be decoded
fn announce_load(outcome: &LoadOutcome, config: &Config, output: &mut impl Write) -> io::Result<()> {
    if let LoadOutcome::Corrupt { reason } = outcome {
        writeln!(
            output,
            "Warning: {} does not contain valid student records ({reason}). Starting with an empty list; the file will be overwritten on the next change.",
            config.data_file.display()
        )?;
    }
    Ok(())
}

/// Load the collection and run the menu over the given streams
pub fn run_with<R: BufRead, W: Write>(config: &Config, input: R, mut output: W) -> Result<()> {
    let store = StudentStore::new(&config.data_file);
    let (registry, outcome) = StudentRegistry::open(store)
        .with_context(|| format!("Failed to open {}", config.data_file.display()))?;
    announce_load(&outcome, config, &mut output)?;

    Menu::new(registry, input, output).run()
}

/// Run the menu on the process's standard input and output
pub fn run(config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(config, stdin.lock(), stdout.lock())
}
