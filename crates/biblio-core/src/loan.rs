use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::person::Person;

/// An active loan: who holds a book and since when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    /// The member currently holding the book.
    pub borrower: Person,
    /// When the book was checked out.
    pub borrowed_at: DateTime<Utc>,
}

impl Loan {
    /// Create a loan for a borrower, stamped with the current time.
    pub fn new(borrower: Person) -> Self {
        Self {
            borrower,
            borrowed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loan_records_borrower() {
        let loan = Loan::new(Person::new("Julia", "Roberts"));
        assert_eq!(loan.borrower, Person::new("Julia", "Roberts"));
    }
}
