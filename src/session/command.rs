/// A command entered at the session prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a book; title, author and year are prompted for.
    Add,
    /// Remove a book by title; the title is prompted for.
    Remove,
    /// List the catalogue.
    Show,
    /// End the session.
    Exit,
    /// Anything else, normalized.
    Unknown(String),
}

impl Command {
    /// Parses a line of input.
    ///
    /// Surrounding whitespace is ignored and matching is case-insensitive, so
    /// `"  ADD "` is [`Command::Add`]. Parsing never fails; unrecognised text
    /// becomes [`Command::Unknown`].
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let normalized = line.trim().to_lowercase();
        match normalized.as_str() {
            "add" => Self::Add,
            "remove" => Self::Remove,
            "show" => Self::Show,
            "exit" => Self::Exit,
            _ => Self::Unknown(normalized),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::Command;

    #[test_case("add", Command::Add; "add")]
    #[test_case("ADD", Command::Add; "uppercase")]
    #[test_case("  Remove\t", Command::Remove; "padded mixed case")]
    #[test_case("show\n", Command::Show; "trailing newline")]
    #[test_case("exit", Command::Exit; "exit")]
    #[test_case("Frobnicate", Command::Unknown("frobnicate".to_string()); "unknown")]
    #[test_case("", Command::Unknown(String::new()); "blank")]
    #[test_case("add book", Command::Unknown("add book".to_string()); "trailing words")]
    fn parse(line: &str, expected: Command) {
        assert_eq!(Command::parse(line), expected);
    }
}
