//! Command parsing for desk input.

/// A parsed desk command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a book to the catalogue.
    AddBook {
        /// The book's title.
        title: String,
        /// The author's first name.
        author_first: String,
        /// The author's last name.
        author_last: String,
    },
    /// Register a new member.
    AddMember {
        /// The member's first name.
        first_name: String,
        /// The member's last name.
        last_name: String,
    },
    /// Lend a book to a member.
    Borrow {
        /// Title of the book to lend.
        title: String,
        /// The borrower's first name.
        first_name: String,
        /// The borrower's last name.
        last_name: String,
    },
    /// Take a book back.
    Return {
        /// Title of the book being returned.
        title: String,
    },
    /// Ask whether a book is available.
    Available {
        /// Title of the book to look up.
        title: String,
    },
    /// Show the library status report.
    Status,
    /// Show help.
    Help,
    /// End the session.
    Quit,
    /// Unknown command.
    Unknown {
        /// The original input, or a usage hint.
        input: String,
    },
}

/// Verb synonyms for command parsing.
const ADD_VERBS: &[&str] = &["add", "new", "register"];
const JOIN_VERBS: &[&str] = &["join", "enroll"];
const BORROW_VERBS: &[&str] = &["borrow", "lend", "checkout"];
const RETURN_VERBS: &[&str] = &["return", "restore"];
const AVAILABLE_VERBS: &[&str] = &["available", "avail"];
const STATUS_VERBS: &[&str] = &["status", "report"];
const HELP_VERBS: &[&str] = &["help", "h", "?", "commands"];
const QUIT_VERBS: &[&str] = &["quit", "q", "exit", "bye"];

/// Parse a line of desk input into a command.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    if input.is_empty() {
        return Command::Status;
    }

    let words: Vec<&str> = input.split_whitespace().collect();
    let verb = words[0].to_lowercase();
    let rest = words.get(1..).unwrap_or(&[]);

    if ADD_VERBS.contains(&verb.as_str()) {
        return parse_add(rest);
    }
    if JOIN_VERBS.contains(&verb.as_str()) {
        return parse_member(rest);
    }
    if BORROW_VERBS.contains(&verb.as_str()) {
        return parse_borrow(rest);
    }
    if RETURN_VERBS.contains(&verb.as_str()) {
        return parse_return(rest);
    }
    if AVAILABLE_VERBS.contains(&verb.as_str()) {
        return parse_available(rest);
    }
    if STATUS_VERBS.contains(&verb.as_str()) {
        return Command::Status;
    }
    if HELP_VERBS.contains(&verb.as_str()) {
        return Command::Help;
    }
    if QUIT_VERBS.contains(&verb.as_str()) {
        return Command::Quit;
    }

    Command::Unknown {
        input: input.to_string(),
    }
}

/// `add book <title> by <first> <last>` or `add member <first> <last>`.
fn parse_add(rest: &[&str]) -> Command {
    match rest.first().map(|w| w.to_lowercase()) {
        Some(noun) if noun == "book" => parse_book(&rest[1..]),
        Some(noun) if noun == "member" => parse_member(&rest[1..]),
        _ => Command::Unknown {
            input: "add what? (try: add book <title> by <author>, add member <name>)".to_string(),
        },
    }
}

fn parse_book(rest: &[&str]) -> Command {
    // The last "by" splits title from author, so titles may contain one.
    let Some(by_pos) = rest.iter().rposition(|w| w.eq_ignore_ascii_case("by")) else {
        return Command::Unknown {
            input: "add book <title> by <author first> <author last>".to_string(),
        };
    };

    let title = rest[..by_pos].join(" ");
    let Some((author_first, author_last)) = split_name(&rest[by_pos + 1..]) else {
        return Command::Unknown {
            input: "add book <title> by <author first> <author last>".to_string(),
        };
    };

    if title.is_empty() {
        return Command::Unknown {
            input: "add book <title> by <author first> <author last>".to_string(),
        };
    }

    Command::AddBook {
        title,
        author_first,
        author_last,
    }
}

fn parse_member(rest: &[&str]) -> Command {
    match split_name(rest) {
        Some((first_name, last_name)) => Command::AddMember {
            first_name,
            last_name,
        },
        None => Command::Unknown {
            input: "add member <first name> <last name>".to_string(),
        },
    }
}

/// `borrow <title> for <first> <last>`.
fn parse_borrow(rest: &[&str]) -> Command {
    let Some(for_pos) = rest
        .iter()
        .rposition(|w| w.eq_ignore_ascii_case("for") || w.eq_ignore_ascii_case("to"))
    else {
        return Command::Unknown {
            input: "borrow <title> for <first name> <last name>".to_string(),
        };
    };

    let title = rest[..for_pos].join(" ");
    let Some((first_name, last_name)) = split_name(&rest[for_pos + 1..]) else {
        return Command::Unknown {
            input: "borrow <title> for <first name> <last name>".to_string(),
        };
    };

    if title.is_empty() {
        return Command::Unknown {
            input: "borrow <title> for <first name> <last name>".to_string(),
        };
    }

    Command::Borrow {
        title,
        first_name,
        last_name,
    }
}

fn parse_return(rest: &[&str]) -> Command {
    if rest.is_empty() {
        return Command::Unknown {
            input: "return what?".to_string(),
        };
    }
    Command::Return {
        title: rest.join(" "),
    }
}

fn parse_available(rest: &[&str]) -> Command {
    if rest.is_empty() {
        return Command::Unknown {
            input: "available <title>".to_string(),
        };
    }
    Command::Available {
        title: rest.join(" "),
    }
}

/// Split name words into (first, last). The last word is the last name;
/// everything before it joins into the first name.
fn split_name(words: &[&str]) -> Option<(String, String)> {
    let (last, firsts) = words.split_last()?;
    if firsts.is_empty() {
        return None;
    }
    Some((firsts.join(" "), (*last).to_string()))
}
