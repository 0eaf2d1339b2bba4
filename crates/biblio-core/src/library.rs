use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use crate::book::Book;
use crate::error::{LibraryError, LibraryResult};
use crate::loan::Loan;
use crate::person::Person;
use crate::status::LibraryStatus;

/// The single authority over a catalogue, its membership, and its loans.
///
/// All mutation passes through validating methods; a rejected call leaves
/// the library untouched. Books and members are only ever added: the
/// catalogue and membership are monotonic, and membership cannot be
/// revoked.
///
/// The collections are not synchronized. Concurrent use requires external
/// serialization by the caller, such as one lock around the whole value.
#[derive(Debug, Clone)]
pub struct Library {
    name: String,
    created_at: DateTime<Utc>,
    books: Vec<Book>,
    members: HashSet<Person>,
    loans: HashMap<Book, Loan>,
}

impl Library {
    /// Create a new, empty library.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created_at: Utc::now(),
            books: Vec::new(),
            members: HashSet::new(),
            loans: HashMap::new(),
        }
    }

    /// The library's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// When this library was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // -----------------------------------------------------------------------
    // Catalogue and membership
    // -----------------------------------------------------------------------

    /// Add a book to the catalogue.
    ///
    /// Returns [`LibraryError::DuplicateBook`] if an identical book (same
    /// title and author) is already catalogued.
    pub fn add_new_book(&mut self, book: Book) -> LibraryResult<()> {
        if self.books.contains(&book) {
            return Err(LibraryError::DuplicateBook(book));
        }
        self.books.push(book);
        Ok(())
    }

    /// Register a new member.
    ///
    /// Returns [`LibraryError::DuplicateMember`] if the person is already
    /// registered.
    pub fn add_new_member(&mut self, person: Person) -> LibraryResult<()> {
        if self.members.contains(&person) {
            return Err(LibraryError::DuplicateMember(person));
        }
        self.members.insert(person);
        Ok(())
    }

    /// Whether the book is in the catalogue, regardless of loan status.
    pub fn has_book(&self, book: &Book) -> bool {
        self.books.contains(book)
    }

    /// Whether the person is a registered member.
    pub fn is_member(&self, person: &Person) -> bool {
        self.members.contains(person)
    }

    /// The full catalogue, in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// All registered members, in arbitrary order.
    pub fn members(&self) -> impl Iterator<Item = &Person> {
        self.members.iter()
    }

    /// All catalogued books whose title matches, case-insensitively.
    ///
    /// Titles are not unique keys (distinct books may share one), so every
    /// match is returned, in catalogue order.
    pub fn books_by_title(&self, title: &str) -> Vec<&Book> {
        let title_lower = title.to_lowercase();
        self.books
            .iter()
            .filter(|b| b.title.to_lowercase() == title_lower)
            .collect()
    }

    // -----------------------------------------------------------------------
    // Lending
    // -----------------------------------------------------------------------

    /// Whether a catalogued book currently has no active loan.
    ///
    /// Returns [`LibraryError::UnknownBook`] if the book is not in the
    /// catalogue.
    pub fn is_book_available(&self, book: &Book) -> LibraryResult<bool> {
        if !self.books.contains(book) {
            return Err(LibraryError::UnknownBook(book.clone()));
        }
        Ok(!self.loans.contains_key(book))
    }

    /// Lend a book to a member, recording a new loan.
    ///
    /// Preconditions are checked in a fixed order (membership, then
    /// catalogue, then availability), which determines which error surfaces
    /// when several are violated at once:
    /// [`LibraryError::NotAMember`], [`LibraryError::UnknownBook`],
    /// [`LibraryError::AlreadyBorrowed`].
    pub fn borrow_book(&mut self, book: &Book, person: &Person) -> LibraryResult<()> {
        if !self.members.contains(person) {
            return Err(LibraryError::NotAMember(person.clone()));
        }
        if !self.books.contains(book) {
            return Err(LibraryError::UnknownBook(book.clone()));
        }
        if let Some(loan) = self.loans.get(book) {
            return Err(LibraryError::AlreadyBorrowed {
                book: book.clone(),
                borrower: loan.borrower.clone(),
            });
        }
        self.loans.insert(book.clone(), Loan::new(person.clone()));
        Ok(())
    }

    /// Take a book back, closing its loan.
    ///
    /// Returns the closed loan, or [`LibraryError::NotBorrowed`] if the
    /// book has no active loan.
    pub fn return_book(&mut self, book: &Book) -> LibraryResult<Loan> {
        self.loans
            .remove(book)
            .ok_or_else(|| LibraryError::NotBorrowed(book.clone()))
    }

    /// The loan currently attached to a book, if any.
    pub fn loan_of(&self, book: &Book) -> Option<&Loan> {
        self.loans.get(book)
    }

    /// The member currently holding a book, if any.
    pub fn borrower_of(&self, book: &Book) -> Option<&Person> {
        self.loan_of(book).map(|loan| &loan.borrower)
    }

    /// All active loans, in arbitrary order.
    pub fn loans(&self) -> impl Iterator<Item = (&Book, &Loan)> {
        self.loans.iter()
    }

    /// All catalogued books with no active loan, in catalogue order.
    pub fn available_books(&self) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|b| !self.loans.contains_key(*b))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Statistics
    // -----------------------------------------------------------------------

    /// Number of books in the catalogue.
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Number of registered members.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Number of active loans.
    pub fn loan_count(&self) -> usize {
        self.loans.len()
    }

    // -----------------------------------------------------------------------
    // Status
    // -----------------------------------------------------------------------

    /// Take a read-only snapshot of the current state.
    pub fn status(&self) -> LibraryStatus {
        LibraryStatus::of(self)
    }
}
