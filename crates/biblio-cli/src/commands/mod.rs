pub mod demo;
pub mod desk;

use biblio_core::Library;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

/// Print the library's current state: a header with counts, one table row
/// per catalogued book, and the member roll.
pub fn render_status(library: &Library) {
    println!();
    println!(
        "  {} {}",
        library.name().bold(),
        format!(
            "({} book{}, {} member{}, {} on loan)",
            library.book_count(),
            if library.book_count() == 1 { "" } else { "s" },
            library.member_count(),
            if library.member_count() == 1 { "" } else { "s" },
            library.loan_count(),
        )
        .dimmed()
    );

    if library.book_count() > 0 {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Title", "Author", "Status"]);

        for book in library.books() {
            let status = match library.borrower_of(book) {
                Some(borrower) => format!("borrowed by {borrower}"),
                None => "available".to_string(),
            };
            table.add_row(vec![&book.title, &book.author.to_string(), &status]);
        }
        println!("{table}");
    } else {
        println!("  The catalogue is empty.");
    }

    let status = library.status();
    if !status.members.is_empty() {
        let names: Vec<String> = status.members.iter().map(ToString::to_string).collect();
        println!("  members: {}", names.join(", "));
    }
}
