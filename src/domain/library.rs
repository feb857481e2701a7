use tracing::debug;

use super::Book;
use crate::notify::Notifier;

/// The operations a book catalogue provides.
///
/// Callers such as [`LibraryManager`](crate::LibraryManager) are written
/// against this trait only. Every operation reports its outcome as a notice;
/// none of them fail.
pub trait LibraryInterface {
    /// Append a book to the catalogue.
    fn add_book(&mut self, book: Book);

    /// Remove the first book whose title matches `title` exactly.
    ///
    /// Returns the removed book, or `None` (after reporting that it was not
    /// found) when no title matches.
    fn remove_book(&mut self, title: &str) -> Option<Book>;

    /// Report every book in insertion order, or that the catalogue is empty.
    fn show_books(&self);
}

/// A catalogue held in insertion order.
///
/// Titles are not required to be unique; removal takes the first match.
#[derive(Debug)]
pub struct Library<N> {
    books: Vec<Book>,
    notifier: N,
}

impl<N: Notifier> Library<N> {
    /// Creates an empty library that reports through `notifier`.
    pub const fn new(notifier: N) -> Self {
        Self {
            books: Vec::new(),
            notifier,
        }
    }

    /// The books currently held, oldest first.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// The number of books held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the library holds no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl<N: Notifier> LibraryInterface for Library<N> {
    fn add_book(&mut self, book: Book) {
        let message = format!("Book '{}' added.", book.title());
        self.books.push(book);
        debug!(count = self.books.len(), "book added");
        self.notifier.info(&message);
    }

    fn remove_book(&mut self, title: &str) -> Option<Book> {
        let Some(position) = self.books.iter().position(|book| book.title() == title) else {
            self.notifier.info(&format!("Book '{title}' not found."));
            return None;
        };

        let book = self.books.remove(position);
        debug!(position, count = self.books.len(), "book removed");
        self.notifier.info(&format!("Book '{title}' removed."));
        Some(book)
    }

    fn show_books(&self) {
        if self.books.is_empty() {
            self.notifier.info("The library is empty.");
        }
        for book in &self.books {
            self.notifier.info(&book.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::{Library, LibraryInterface};
    use crate::{domain::Book, notify::Transcript};

    fn stocked<'t>(transcript: &'t Transcript, titles: &[&str]) -> Library<&'t Transcript> {
        let mut library = Library::new(transcript);
        for title in titles {
            library.add_book(Book::new(*title, "Anon", "2000"));
        }
        drop(transcript.take());
        library
    }

    fn titles<N>(library: &Library<N>) -> Vec<&str> {
        library.books.iter().map(Book::title).collect()
    }

    #[test]
    fn add_appends_and_confirms() {
        let transcript = Transcript::new();
        let mut library = Library::new(&transcript);

        library.add_book(Book::new("Dune", "Herbert,F", "1965"));

        assert_eq!(library.len(), 1);
        assert_eq!(transcript.lines(), ["Book 'Dune' added."]);
    }

    #[test_case(&[]; "empty")]
    #[test_case(&["A"]; "one")]
    #[test_case(&["C", "A", "B"]; "three")]
    fn show_lists_every_book_in_insertion_order(books: &[&str]) {
        let transcript = Transcript::new();
        let library = stocked(&transcript, books);

        library.show_books();

        let expected: Vec<String> = books
            .iter()
            .map(|title| format!("Title: {title}, Author: Anon, Year: 2000"))
            .collect();
        if books.is_empty() {
            assert_eq!(transcript.lines(), ["The library is empty."]);
        } else {
            assert_eq!(transcript.lines(), expected);
        }
    }

    #[test]
    fn remove_keeps_the_relative_order_of_the_rest() {
        let transcript = Transcript::new();
        let mut library = stocked(&transcript, &["A", "B", "C", "D"]);

        let removed = library.remove_book("B");

        assert_eq!(removed.as_ref().map(Book::title), Some("B"));
        assert_eq!(titles(&library), ["A", "C", "D"]);
        assert_eq!(transcript.lines(), ["Book 'B' removed."]);
    }

    #[test]
    fn remove_missing_title_leaves_library_unchanged() {
        let transcript = Transcript::new();
        let mut library = stocked(&transcript, &["A", "B"]);

        assert!(library.remove_book("Z").is_none());

        assert_eq!(titles(&library), ["A", "B"]);
        assert_eq!(transcript.lines(), ["Book 'Z' not found."]);
    }

    #[test]
    fn remove_from_empty_library_reports_not_found() {
        let transcript = Transcript::new();
        let mut library = Library::new(&transcript);

        assert!(library.remove_book("Dune").is_none());

        assert!(library.is_empty());
        assert_eq!(transcript.lines(), ["Book 'Dune' not found."]);
    }

    #[test]
    fn remove_matches_case_sensitively() {
        let transcript = Transcript::new();
        let mut library = stocked(&transcript, &["Dune"]);

        assert!(library.remove_book("dune").is_none());
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn duplicate_titles_are_removed_first_match_first() {
        let transcript = Transcript::new();
        let mut library = Library::new(&transcript);
        library.add_book(Book::new("Dune", "Herbert,F", "1965"));
        library.add_book(Book::new("Dune", "Villeneuve,D", "2021"));

        let removed = library.remove_book("Dune");

        assert_eq!(removed.as_ref().map(Book::year), Some("1965"));
        assert_eq!(library.books()[0].author(), "Villeneuve,D");
    }
}
