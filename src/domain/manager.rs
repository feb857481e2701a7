use tracing::instrument;

use super::{Book, LibraryInterface};

/// Drives a catalogue without knowing what implements it.
///
/// The manager borrows its catalogue; the caller keeps ownership of the
/// concrete value and can inspect it once the manager is dropped.
#[derive(Debug)]
pub struct LibraryManager<'a, L: ?Sized> {
    library: &'a mut L,
}

impl<'a, L: LibraryInterface + ?Sized> LibraryManager<'a, L> {
    /// Wraps a catalogue.
    pub const fn new(library: &'a mut L) -> Self {
        Self { library }
    }

    /// Builds a [`Book`] and adds it to the catalogue.
    #[instrument(level = "debug", skip(self))]
    pub fn add_book(&mut self, title: String, author: String, year: String) {
        self.library.add_book(Book::new(title, author, year));
    }

    /// Removes the first book with the given title.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_book(&mut self, title: &str) -> Option<Book> {
        self.library.remove_book(title)
    }

    /// Reports the contents of the catalogue.
    pub fn show_books(&self) {
        self.library.show_books();
    }
}
