use std::io::{self, BufRead, Write};

use shelf::{
    session::{Input, Prompter},
    Config, Console, Library, LibraryManager, Session,
};
use tracing::instrument;

use super::terminal::{self, Colorize};

/// Prompts on stderr, colouring the prompt text when enabled.
struct Terminal<R, W> {
    prompter: Prompter<R, W>,
    colour: bool,
}

impl<R: BufRead, W: Write> Input for Terminal<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if self.colour {
            self.prompter.read_line(&prompt.info())
        } else {
            self.prompter.read_line(prompt)
        }
    }
}

#[instrument(level = "debug", skip_all)]
pub fn run(config: &Config) -> anyhow::Result<()> {
    let mut library = Library::new(Console);
    let input = Terminal {
        prompter: Prompter::new(io::stdin().lock(), io::stderr()),
        colour: terminal::colour_enabled(config.colour),
    };

    Session::new(input, LibraryManager::new(&mut library), Console).run()?;
    Ok(())
}
