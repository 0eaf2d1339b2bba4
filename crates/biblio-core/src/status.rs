use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::book::Book;
use crate::library::Library;
use crate::person::Person;

/// One active loan as it appears in a status report.
#[derive(Debug, Clone, Serialize)]
pub struct LoanStatus {
    /// The book on loan.
    pub book: Book,
    /// The member holding it.
    pub borrower: Person,
    /// When it was checked out.
    pub borrowed_at: DateTime<Utc>,
}

/// A read-only snapshot of a library's state.
///
/// Building a snapshot never mutates the library. `Display` renders the
/// human-readable report; `Serialize` gives callers a machine-readable one.
#[derive(Debug, Clone, Serialize)]
pub struct LibraryStatus {
    /// The library's name.
    pub name: String,
    /// The full catalogue, in insertion order.
    pub catalogue: Vec<Book>,
    /// All members, sorted by last name then first name.
    pub members: Vec<Person>,
    /// Catalogued books with no active loan, in catalogue order.
    pub available: Vec<Book>,
    /// Active loans, in catalogue order.
    pub loans: Vec<LoanStatus>,
}

impl LibraryStatus {
    /// Snapshot the given library.
    pub(crate) fn of(library: &Library) -> Self {
        let mut members: Vec<Person> = library.members().cloned().collect();
        members.sort_by(|a, b| {
            (a.last_name.as_str(), a.first_name.as_str())
                .cmp(&(b.last_name.as_str(), b.first_name.as_str()))
        });

        let available = library.available_books().into_iter().cloned().collect();

        let loans = library
            .books()
            .iter()
            .filter_map(|book| {
                library.loan_of(book).map(|loan| LoanStatus {
                    book: book.clone(),
                    borrower: loan.borrower.clone(),
                    borrowed_at: loan.borrowed_at,
                })
            })
            .collect();

        Self {
            name: library.name().to_string(),
            catalogue: library.books().to_vec(),
            members,
            available,
            loans,
        }
    }
}

impl fmt::Display for LibraryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} status:", self.name)?;

        writeln!(
            f,
            "  catalogue ({} book{}):",
            self.catalogue.len(),
            if self.catalogue.len() == 1 { "" } else { "s" },
        )?;
        write_books(f, &self.catalogue)?;

        writeln!(f, "  members ({}):", self.members.len())?;
        if self.members.is_empty() {
            writeln!(f, "    (none)")?;
        }
        for person in &self.members {
            writeln!(f, "    {person}")?;
        }

        writeln!(f, "  available:")?;
        write_books(f, &self.available)?;

        writeln!(f, "  on loan:")?;
        if self.loans.is_empty() {
            writeln!(f, "    (none)")?;
        }
        for loan in &self.loans {
            writeln!(
                f,
                "    {} borrowed by {} since {}",
                loan.book,
                loan.borrower,
                loan.borrowed_at.format("%Y-%m-%d %H:%M UTC"),
            )?;
        }

        Ok(())
    }
}

fn write_books(f: &mut fmt::Formatter<'_>, books: &[Book]) -> fmt::Result {
    if books.is_empty() {
        writeln!(f, "    (none)")?;
    }
    for book in books {
        writeln!(f, "    {book}")?;
    }
    Ok(())
}
