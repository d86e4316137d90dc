pub mod contact_commands;
pub mod birthday_commands;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::BookResult;
use crate::matcher;
use crate::model::AddressBook;
use crate::storage;

/// Every command the REPL understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    ChangeBirthday,
    Delete,
    Help,
    Exit,
}

/// Canonical command names, used for matcher suggestions.
pub const COMMAND_NAMES: &[&str] = &[
    "hello",
    "add",
    "change",
    "phone",
    "all",
    "add-birthday",
    "show-birthday",
    "birthdays",
    "change-birthday",
    "delete",
    "help",
    "close",
    "exit",
    "bye",
];

impl Command {
    pub fn parse(name: &str) -> Option<Self> {
        let command = match name {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "change-birthday" => Command::ChangeBirthday,
            "delete" => Command::Delete,
            "help" => Command::Help,
            "close" | "exit" | "bye" => Command::Exit,
            _ => return None,
        };
        Some(command)
    }
}

/// Routes a parsed command to its handler. Every handler returns a
/// display message or an error; nothing here touches the terminal.
pub fn dispatch(command: Command, args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add => contact_commands::add(args, book),
        Command::Change => contact_commands::change(args, book),
        Command::Phone => contact_commands::show_phone(args, book),
        Command::All => contact_commands::show_all(args, book),
        Command::AddBirthday => birthday_commands::add(args, book),
        Command::ShowBirthday => birthday_commands::show(args, book),
        Command::Birthdays => birthday_commands::upcoming(args, book),
        Command::ChangeBirthday => birthday_commands::change(args, book),
        Command::Delete => contact_commands::delete(args, book),
        Command::Help => Ok(help_text()),
        Command::Exit => Ok("Good bye!".to_string()),
    }
}

/// One interactive session: the address book plus the file it came from.
pub struct Session {
    book: AddressBook,
    path: PathBuf,
}

impl Session {
    pub fn new(path: &Path) -> Self {
        Self {
            book: storage::load(path),
            path: path.to_path_buf(),
        }
    }

    /// Runs the REPL until an exit command or EOF, then saves the book.
    pub fn run(&mut self) {
        println!("Welcome to the assistant bot!");
        println!("Type 'help' for commands, 'close' to quit.");
        println!();

        loop {
            let input = match read_line("Enter a command: ") {
                Some(s) => s,
                None => break,
            };
            let input = input.trim();
            if input.is_empty() {
                continue;
            }

            let mut parts = input.split_whitespace();
            let name = match parts.next() {
                Some(n) => n.to_lowercase(),
                None => continue,
            };
            let args: Vec<&str> = parts.collect();

            let command = match Command::parse(&name) {
                Some(c) => c,
                None => {
                    println!("{}", unknown_command_message(&name));
                    continue;
                }
            };

            match dispatch(command, &args, &mut self.book) {
                Ok(message) => println!("{}", message),
                Err(e) => println!("Error: {}", e),
            }

            if command == Command::Exit {
                break;
            }
        }

        self.save();
    }

    /// Persists the book. A failed save is reported but never fatal;
    /// the in-memory book stays intact for the rest of the session.
    fn save(&self) {
        if let Err(e) = storage::save(&self.path, &self.book) {
            log::error!("failed to save address book to {}: {}", self.path.display(), e);
            eprintln!("Warning: could not save contacts to {}: {}", self.path.display(), e);
        }
    }
}

/// Run the interactive REPL against the book stored at `path`.
pub fn run(path: &Path) {
    Session::new(path).run();
}

fn unknown_command_message(name: &str) -> String {
    match matcher::suggest_command(name, COMMAND_NAMES) {
        Some(suggestion) => format!(
            "Unknown command '{}'. Did you mean '{}'?",
            name, suggestion
        ),
        None => format!(
            "Unknown command '{}'. Type 'help' for the list of commands.",
            name
        ),
    }
}

/// Prompt and read a line from stdin. Returns None on EOF.
fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) => None,
        Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
        Err(_) => None,
    }
}

fn help_text() -> String {
    r#"Available commands:
  hello                                  Greeting message
  help                                   Show this help
  add <name> <phone> [birthday]          Add a contact, or another phone to an
                                         existing one
  change <name> <old_phone> <new_phone>  Replace a phone number
  change <name> <phone>                  Remove a phone number
  phone <name>                           Show the contact's phone numbers
  all                                    Show all contacts
  add-birthday <name> <DD.MM.YYYY>       Attach a birthday to a contact
  show-birthday <name>                   Show the contact's birthday
  birthdays                              Show birthdays in the next 7 days
  change-birthday <name> <DD.MM.YYYY>    Replace an existing birthday
  delete <name>                          Delete a contact
  close / exit / bye                     Save and quit"#
        .to_string()
}
