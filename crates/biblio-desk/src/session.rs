//! Circulation-desk session management.

use biblio_core::{Book, Library, Person};

use crate::command::{Command, parse_command};
use crate::error::{DeskError, DeskResult};

/// Text shown for the `help` command.
const HELP: &str = "\
Commands:
  add book <title> by <first> <last>    add a book to the catalogue
  add member <first> <last>             register a member (also: join)
  borrow <title> for <first> <last>     lend a book (also: lend, checkout)
  return <title>                        take a book back
  available <title>                     check whether a book is available
  status                                show the full status report
  quit                                  end the session";

/// An interactive circulation-desk session.
///
/// Owns a [`Library`] and executes parsed commands against it, returning
/// response strings.
pub struct DeskSession {
    library: Library,
}

impl DeskSession {
    /// Open a desk session over the given library.
    pub fn new(library: Library) -> Self {
        Self { library }
    }

    /// The library behind the desk.
    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Parse a line of input and execute it, returning a response.
    pub fn process(&mut self, input: &str) -> DeskResult<String> {
        let command = parse_command(input);
        self.execute(command)
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> DeskResult<String> {
        match command {
            Command::AddBook {
                title,
                author_first,
                author_last,
            } => self.do_add_book(title, author_first, author_last),
            Command::AddMember {
                first_name,
                last_name,
            } => self.do_add_member(first_name, last_name),
            Command::Borrow {
                title,
                first_name,
                last_name,
            } => self.do_borrow(&title, first_name, last_name),
            Command::Return { title } => self.do_return(&title),
            Command::Available { title } => self.do_available(&title),
            Command::Status => Ok(self.library.status().to_string()),
            Command::Help => Ok(HELP.to_string()),
            Command::Quit => Ok("Goodbye!".to_string()),
            Command::Unknown { input } => Err(DeskError::UnknownCommand(input)),
        }
    }

    fn do_add_book(
        &mut self,
        title: String,
        author_first: String,
        author_last: String,
    ) -> DeskResult<String> {
        let book = Book::new(title, Person::new(author_first, author_last));
        self.library.add_new_book(book.clone())?;
        Ok(format!("Added {book} to the catalogue."))
    }

    fn do_add_member(&mut self, first_name: String, last_name: String) -> DeskResult<String> {
        let person = Person::new(first_name, last_name);
        self.library.add_new_member(person.clone())?;
        Ok(format!("{person} is now a member."))
    }

    fn do_borrow(&mut self, title: &str, first_name: String, last_name: String) -> DeskResult<String> {
        let book = self.resolve_title(title)?;
        let person = Person::new(first_name, last_name);
        self.library.borrow_book(&book, &person)?;
        Ok(format!("{book} checked out to {person}."))
    }

    fn do_return(&mut self, title: &str) -> DeskResult<String> {
        let book = self.resolve_title(title)?;
        let loan = self.library.return_book(&book)?;
        Ok(format!("{book} returned by {}.", loan.borrower))
    }

    fn do_available(&mut self, title: &str) -> DeskResult<String> {
        let book = self.resolve_title(title)?;
        if self.library.is_book_available(&book)? {
            Ok(format!("{book} is available."))
        } else {
            let holder = self
                .library
                .borrower_of(&book)
                .map_or_else(String::new, |p| format!(" by {p}"));
            Ok(format!("{book} is currently borrowed{holder}."))
        }
    }

    /// Resolve a title against the catalogue, case-insensitively.
    ///
    /// Fails if no book matches or if several structurally distinct books
    /// share the title.
    fn resolve_title(&self, title: &str) -> DeskResult<Book> {
        let matches = self.library.books_by_title(title);
        match matches.as_slice() {
            [] => Err(DeskError::UnknownTitle(title.to_string())),
            [book] => Ok((*book).clone()),
            _ => Err(DeskError::AmbiguousTitle(title.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biblio_core::LibraryError;

    fn session() -> DeskSession {
        DeskSession::new(Library::new("Public library"))
    }

    #[test]
    fn add_borrow_return_conversation() {
        let mut desk = session();

        desk.process("add book Dune by Frank Herbert").unwrap();
        desk.process("add member Antoine Dupont").unwrap();

        let response = desk.process("borrow Dune for Antoine Dupont").unwrap();
        assert_eq!(response, "Dune (Frank Herbert) checked out to Antoine Dupont.");

        let response = desk.process("available Dune").unwrap();
        assert_eq!(
            response,
            "Dune (Frank Herbert) is currently borrowed by Antoine Dupont."
        );

        let response = desk.process("return Dune").unwrap();
        assert_eq!(response, "Dune (Frank Herbert) returned by Antoine Dupont.");

        let response = desk.process("available Dune").unwrap();
        assert_eq!(response, "Dune (Frank Herbert) is available.");
    }

    #[test]
    fn titles_resolve_case_insensitively() {
        let mut desk = session();
        desk.process("add book Dune by Frank Herbert").unwrap();
        desk.process("add member Julia Roberts").unwrap();

        let response = desk.process("borrow dune for Julia Roberts").unwrap();
        assert_eq!(response, "Dune (Frank Herbert) checked out to Julia Roberts.");
    }

    #[test]
    fn unknown_title_is_a_desk_error() {
        let mut desk = session();
        let result = desk.process("available Dune");
        assert!(matches!(result, Err(DeskError::UnknownTitle(_))));
    }

    #[test]
    fn shared_title_is_ambiguous() {
        let mut desk = session();
        desk.process("add book Dune by Frank Herbert").unwrap();
        desk.process("add book Dune by Brian Herbert").unwrap();

        let result = desk.process("available Dune");
        assert!(matches!(result, Err(DeskError::AmbiguousTitle(_))));
    }

    #[test]
    fn library_rejections_pass_through() {
        let mut desk = session();
        desk.process("add book Dune by Frank Herbert").unwrap();

        let result = desk.process("borrow Dune for Simone Veil");
        assert!(matches!(
            result,
            Err(DeskError::Library(LibraryError::NotAMember(_)))
        ));

        let result = desk.process("add book Dune by Frank Herbert");
        assert!(matches!(
            result,
            Err(DeskError::Library(LibraryError::DuplicateBook(_)))
        ));
    }

    #[test]
    fn unknown_command_is_an_error() {
        let mut desk = session();
        let result = desk.process("dance wildly");
        assert!(matches!(result, Err(DeskError::UnknownCommand(_))));
    }

    #[test]
    fn status_mentions_catalogue_and_members() {
        let mut desk = session();
        desk.process("add book Dune by Frank Herbert").unwrap();
        desk.process("add member Antoine Dupont").unwrap();

        let report = desk.process("status").unwrap();
        assert!(report.contains("Public library status:"));
        assert!(report.contains("Dune (Frank Herbert)"));
        assert!(report.contains("Antoine Dupont"));
    }

    #[test]
    fn quit_says_goodbye() {
        let mut desk = session();
        assert_eq!(desk.process("quit").unwrap(), "Goodbye!");
    }
}
