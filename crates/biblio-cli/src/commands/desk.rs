//! Interactive circulation-desk session on stdin/stdout.

use std::io::{self, BufRead, Write};

use biblio_core::{Book, Library, LibraryResult, Person};
use biblio_desk::{Command, DeskSession, parse_command};
use colored::Colorize;

pub fn run(sample: bool) -> Result<(), String> {
    let mut library = Library::new("Public library");
    if sample {
        seed_sample(&mut library).map_err(|e| e.to_string())?;
    }
    let mut session = DeskSession::new(library);

    println!("{}", "biblio circulation desk".bold());
    println!("Type 'help' for commands, 'quit' to leave.");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
        if read == 0 {
            // EOF: leave quietly.
            println!();
            break;
        }

        let command = parse_command(&line);
        if command == Command::Quit {
            println!("Goodbye!");
            break;
        }

        match session.execute(command) {
            Ok(response) => println!("{response}"),
            Err(e) => eprintln!("{} {e}", "error:".red()),
        }
    }

    Ok(())
}

/// The demo catalogue and members, for `--sample`.
fn seed_sample(library: &mut Library) -> LibraryResult<()> {
    library.add_new_book(Book::new(
        "Jouer au rugby pour les nuls",
        Person::new("Louis", "BB"),
    ))?;
    library.add_new_book(Book::new(
        "Vingt mille lieues sous les mers",
        Person::new("Jules", "Verne"),
    ))?;
    library.add_new_member(Person::new("Antoine", "Dupont"))?;
    library.add_new_member(Person::new("Julia", "Roberts"))?;
    Ok(())
}
