//! Interactive menu loop.
//!
//! The shell owns one [`AddressBook`] for the length of a session. It reads
//! raw lines, hands them to the record and book operations, and prints what
//! comes back. Reader and writer are generic so a session can be scripted.

mod menu;

pub use menu::MenuChoice;

use crate::models::{AddressBook, Record};
use crate::repositories::BookRepository;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// A menu-driven session over one address book.
pub struct Shell<P, R, W> {
    book: AddressBook,
    repository: P,
    input: R,
    output: W,
}

impl<P, R, W> Shell<P, R, W>
where
    P: BookRepository,
    R: BufRead,
    W: Write,
{
    /// Start a session with an already-loaded book.
    pub fn new(book: AddressBook, repository: P, input: R, output: W) -> Self {
        Self {
            book,
            repository,
            input,
            output,
        }
    }

    /// Start a session with the book held by `repository`.
    ///
    /// A repository with nothing saved yet yields an empty book. Any other
    /// load failure is returned.
    pub fn open(repository: P, input: R, mut output: W) -> Result<Self> {
        let book = match repository.load() {
            Ok(book) => {
                writeln!(output, "Address book loaded successfully.")?;
                book
            }
            Err(e) if e.is_not_found() => {
                info!("{}", e);
                writeln!(output, "No existing address book found.")?;
                AddressBook::new()
            }
            Err(e) => return Err(e).context("Failed to load address book"),
        };

        Ok(Self::new(book, repository, input, output))
    }

    /// The book as it currently stands.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// End the session without saving and hand back the book.
    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Run the menu loop until the user exits or input ends, then save.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Enter your choice (1-6): ")? else {
                info!("Input closed, saving and exiting");
                break;
            };

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::AddContact) => self.add_contact()?,
                Some(MenuChoice::DeleteContact) => self.delete_contact()?,
                Some(MenuChoice::SearchContacts) => self.search_contacts()?,
                Some(MenuChoice::ShowAll) => self.show_all_contacts()?,
                Some(MenuChoice::ShowBirthdays) => self.show_birthdays()?,
                Some(MenuChoice::Exit) => break,
                None => {
                    warn!(choice = %choice, "Unknown menu choice");
                    writeln!(
                        self.output,
                        "Invalid choice. Please enter a number between 1 and 6."
                    )?;
                }
            }
        }

        self.repository
            .save(&self.book)
            .context("Failed to save address book")?;
        writeln!(self.output, "Address book saved. Exiting...")?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nOptions:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        Ok(())
    }

    /// Print `text` and read one trimmed line; `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn add_contact(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Enter contact name: ")? else {
            return Ok(());
        };
        if name.is_empty() {
            writeln!(self.output, "Contact name cannot be empty.")?;
            return Ok(());
        }

        let Some(birthday) = self.prompt("Enter birthday (YYYY-MM-DD, blank to skip): ")? else {
            return Ok(());
        };
        let mut record = match Record::new(name.as_str(), Some(birthday.as_str())) {
            Ok(record) => record,
            Err(e) => {
                warn!(contact = %name, error = %e, "Rejected birthday");
                writeln!(self.output, "{}. Contact not added.", e)?;
                return Ok(());
            }
        };

        let Some(count) = self.prompt("Enter the number of phone numbers to add: ")? else {
            return Ok(());
        };
        let count = match count.parse::<usize>() {
            Ok(count) => count,
            Err(_) => {
                writeln!(self.output, "Not a number: {:?}. No phones added.", count)?;
                0
            }
        };

        for i in 1..=count {
            let Some(phone) = self.prompt(&format!("Enter phone number {}: ", i))? else {
                break;
            };
            if let Err(e) = record.add_phone(&phone) {
                warn!(contact = %name, error = %e, "Rejected phone");
                writeln!(self.output, "{}. Phone not added.", e)?;
            }
        }

        self.book.add_record(record);
        writeln!(self.output, "Contact added successfully.")?;
        Ok(())
    }

    fn delete_contact(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Enter contact name to delete: ")? else {
            return Ok(());
        };

        if self.book.delete(&name).is_some() {
            writeln!(self.output, "Contact deleted successfully.")?;
        } else {
            writeln!(self.output, "Contact not found.")?;
        }
        Ok(())
    }

    fn search_contacts(&mut self) -> Result<()> {
        let Some(query) = self.prompt("Enter name or phone number to search: ")? else {
            return Ok(());
        };

        let results = self.book.find(&query);
        if results.is_empty() {
            writeln!(self.output, "No matching contacts found.")?;
            return Ok(());
        }

        writeln!(self.output, "Search results:")?;
        for record in results {
            writeln!(self.output, "{}", record)?;
        }
        Ok(())
    }

    fn show_all_contacts(&mut self) -> Result<()> {
        if self.book.is_empty() {
            writeln!(self.output, "The address book is empty.")?;
            return Ok(());
        }

        writeln!(self.output, "\nAll contacts:")?;
        for record in self.book.records() {
            writeln!(self.output, "{}", record)?;
        }
        Ok(())
    }

    fn show_birthdays(&mut self) -> Result<()> {
        let upcoming = self.book.upcoming_birthdays();
        if upcoming.is_empty() {
            writeln!(self.output, "No birthdays recorded.")?;
            return Ok(());
        }

        writeln!(self.output, "\nUpcoming birthdays:")?;
        for (record, days_left) in upcoming {
            if let Some(birthday) = record.birthday() {
                writeln!(
                    self.output,
                    "{}: {} (in {} days)",
                    record.name(),
                    birthday,
                    days_left
                )?;
            }
        }
        Ok(())
    }
}
