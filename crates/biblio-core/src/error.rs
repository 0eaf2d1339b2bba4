use crate::book::Book;
use crate::person::Person;

/// Alias for `Result<T, LibraryError>`.
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Errors that can occur when manipulating a library.
///
/// Each variant carries the offending book or person as structured data,
/// leaving message rendering to the caller.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// The book is already in the catalogue.
    #[error("book already in catalogue: \"{0}\"")]
    DuplicateBook(Book),

    /// The person is already a registered member.
    #[error("{0} is already a member")]
    DuplicateMember(Person),

    /// The book is not in the catalogue.
    #[error("book not in catalogue: \"{0}\"")]
    UnknownBook(Book),

    /// The person is not a registered member.
    #[error("{0} is not a member of the library")]
    NotAMember(Person),

    /// The book already has an active loan.
    #[error("book already borrowed: \"{book}\" is held by {borrower}")]
    AlreadyBorrowed {
        /// The book that was requested.
        book: Book,
        /// The member currently holding it.
        borrower: Person,
    },

    /// The book has no active loan to close.
    #[error("book is not currently borrowed: \"{0}\"")]
    NotBorrowed(Book),
}
