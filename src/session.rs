//! The interactive command session.
//!
//! A [`Session`] reads commands from an [`Input`], applies them to a catalogue
//! through a [`LibraryManager`], and reports through a [`Notifier`]. It has two
//! states: it starts out awaiting a command and stays there until `exit` is
//! entered or the input runs dry.

mod command;
mod input;

pub use command::Command;
pub use input::{Input, Prompter, Script};
use tracing::{debug, instrument};

use crate::{domain::LibraryInterface, notify::Notifier, LibraryManager};

/// Prompt shown before each command.
pub const COMMAND_PROMPT: &str = "Enter command (add, remove, show, exit): ";
/// Prompt for the title of a book being added.
pub const TITLE_PROMPT: &str = "Enter book title: ";
/// Prompt for the author of a book being added.
pub const AUTHOR_PROMPT: &str = "Enter book author: ";
/// Prompt for the year of a book being added.
pub const YEAR_PROMPT: &str = "Enter book year: ";
/// Prompt for the title of a book being removed.
pub const REMOVE_PROMPT: &str = "Enter book title to remove: ";

const FAREWELL: &str = "Exiting the program.";
const INVALID: &str = "Invalid command. Please try again.";

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Waiting for the next command.
    AwaitingCommand,
    /// Finished; no further input is read.
    Terminated,
}

/// Errors that end a session early.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading a line (or writing its prompt) failed.
    #[error("failed to read input: {0}")]
    Input(#[from] std::io::Error),
}

/// A command loop over a catalogue.
#[derive(Debug)]
pub struct Session<'a, I, L: ?Sized, N> {
    input: I,
    manager: LibraryManager<'a, L>,
    notifier: N,
    state: State,
}

impl<'a, I, L, N> Session<'a, I, L, N>
where
    I: Input,
    L: LibraryInterface + ?Sized,
    N: Notifier,
{
    /// Creates a session awaiting its first command.
    pub const fn new(input: I, manager: LibraryManager<'a, L>, notifier: N) -> Self {
        Self {
            input,
            manager,
            notifier,
            state: State::AwaitingCommand,
        }
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Reads and applies a single command.
    ///
    /// Once terminated, further calls do nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read.
    pub fn step(&mut self) -> Result<State, Error> {
        if self.state == State::Terminated {
            return Ok(State::Terminated);
        }

        let Some(line) = self.input.read_line(COMMAND_PROMPT)? else {
            debug!("input exhausted");
            return Ok(self.terminate());
        };

        let command = Command::parse(&line);
        debug!(?command, "dispatching");

        match command {
            Command::Add => {
                let Some(title) = self.ask(TITLE_PROMPT)? else {
                    return Ok(self.terminate());
                };
                let Some(author) = self.ask(AUTHOR_PROMPT)? else {
                    return Ok(self.terminate());
                };
                let Some(year) = self.ask(YEAR_PROMPT)? else {
                    return Ok(self.terminate());
                };
                self.manager.add_book(title, author, year);
            }
            Command::Remove => {
                let Some(title) = self.ask(REMOVE_PROMPT)? else {
                    return Ok(self.terminate());
                };
                self.manager.remove_book(&title);
            }
            Command::Show => self.manager.show_books(),
            Command::Exit => {
                self.notifier.info(FAREWELL);
                return Ok(self.terminate());
            }
            Command::Unknown(_) => self.notifier.info(INVALID),
        }

        Ok(self.state)
    }

    /// Applies commands until the session terminates.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> Result<(), Error> {
        while self.step()? != State::Terminated {}
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>, Error> {
        Ok(self
            .input
            .read_line(prompt)?
            .map(|answer| answer.trim().to_string()))
    }

    const fn terminate(&mut self) -> State {
        self.state = State::Terminated;
        self.state
    }
}
