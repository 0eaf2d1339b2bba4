//! Scripted demonstration tour of the lending workflow.
//!
//! Builds the sample library, then exercises every operation and every
//! rejection path in sequence, printing the status at each checkpoint.

use biblio_core::{Book, Library, LibraryResult, Person};
use colored::Colorize;

pub fn run(json: bool) -> Result<(), String> {
    let antoine = Person::new("Antoine", "Dupont");
    let julia = Person::new("Julia", "Roberts");
    let rugby_book = Book::new("Jouer au rugby pour les nuls", Person::new("Louis", "BB"));
    let novel_book = Book::new("Vingt mille lieues sous les mers", Person::new("Jules", "Verne"));
    let unknown_book = Book::new("Roméo et Juliette", Person::new("William", "Shakespeare"));
    let stranger = Person::new("Simone", "Veil");

    let mut library = Library::new("Public library");
    super::render_status(&library);

    step("Stocking the catalogue and registering members");
    library.add_new_book(rugby_book.clone()).map_err(|e| e.to_string())?;
    println!("  added {rugby_book}");
    library.add_new_book(novel_book.clone()).map_err(|e| e.to_string())?;
    println!("  added {novel_book}");
    library.add_new_member(antoine.clone()).map_err(|e| e.to_string())?;
    println!("  registered {antoine}");
    library.add_new_member(julia.clone()).map_err(|e| e.to_string())?;
    println!("  registered {julia}");
    super::render_status(&library);

    step("Adding the same book or member twice is rejected");
    rejected(library.add_new_book(rugby_book.clone()));
    rejected(library.add_new_member(antoine.clone()));

    step("First checkout");
    let available = library.is_book_available(&rugby_book).map_err(|e| e.to_string())?;
    println!("  Is {rugby_book} available? {available}");
    library
        .borrow_book(&rugby_book, &antoine)
        .map_err(|e| e.to_string())?;
    super::render_status(&library);

    step("Invalid requests are rejected");
    rejected(library.borrow_book(&rugby_book, &julia));
    rejected(library.borrow_book(&unknown_book, &julia));
    rejected(library.borrow_book(&novel_book, &stranger));
    rejected(library.return_book(&novel_book));

    step("Returning and borrowing again");
    let loan = library.return_book(&rugby_book).map_err(|e| e.to_string())?;
    println!("  {rugby_book} returned by {}", loan.borrower);
    library
        .borrow_book(&novel_book, &julia)
        .map_err(|e| e.to_string())?;
    library
        .borrow_book(&rugby_book, &julia)
        .map_err(|e| e.to_string())?;
    super::render_status(&library);

    if json {
        let rendered = serde_json::to_string_pretty(&library.status())
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{rendered}");
    }

    Ok(())
}

fn step(title: &str) {
    println!();
    println!("{}", title.bold());
}

fn rejected<T>(result: LibraryResult<T>) {
    match result {
        Ok(_) => println!("  {} the request went through", "unexpectedly accepted:".yellow()),
        Err(e) => println!("  {} {e}", "rejected:".red()),
    }
}
