use std::fmt;

use serde::{Deserialize, Serialize};

use crate::person::Person;

/// A book: a title paired with its author.
///
/// Equality and hashing are structural over `(title, author)`. A catalogue
/// may hold two books with the same title as long as the authors differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    /// The book's title.
    pub title: String,
    /// The book's author.
    pub author: Person,
}

impl Book {
    /// Create a new book with the given title and author.
    pub fn new(title: impl Into<String>, author: Person) -> Self {
        Self {
            title: title.into(),
            author,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn display_shows_title_and_author() {
        let book = Book::new("Vingt mille lieues sous les mers", Person::new("Jules", "Verne"));
        assert_eq!(book.to_string(), "Vingt mille lieues sous les mers (Jules Verne)");
    }

    #[test]
    fn equality_covers_title_and_author() {
        let verne = Person::new("Jules", "Verne");
        let wells = Person::new("H. G.", "Wells");

        assert_eq!(
            Book::new("The Time Machine", wells.clone()),
            Book::new("The Time Machine", wells.clone())
        );
        // Same title, different author: different books.
        assert_ne!(
            Book::new("The Time Machine", wells),
            Book::new("The Time Machine", verne)
        );
    }

    #[test]
    fn hashing_follows_equality() {
        let mut set = HashSet::new();
        set.insert(Book::new("Dune", Person::new("Frank", "Herbert")));
        assert!(set.contains(&Book::new("Dune", Person::new("Frank", "Herbert"))));
        assert!(!set.contains(&Book::new("Dune", Person::new("Brian", "Herbert"))));
    }
}
