use std::fmt;

/// A catalogue entry.
///
/// The title identifies a book within a library. None of the fields are
/// validated; the year in particular is free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    title: String,
    author: String,
    year: String,
}

impl Book {
    /// Creates a book from its title, author and year of publication.
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
        }
    }

    /// The title of the book.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The author of the book.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// The year of publication, as entered.
    #[must_use]
    pub fn year(&self) -> &str {
        &self.year
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Year: {}",
            self.title, self.author, self.year
        )
    }
}
