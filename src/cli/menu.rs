//! Interactive text menu
//!
//! The menu reads from any [`BufRead`] and writes to any [`Write`], so tests
//! can drive it with scripted input. Bad input is reported and the prompt
//! repeats; catalog errors are reported and the menu carries on. End of input
//! exits the loop like choosing `0`.
//!
//! Prompts and results are interleaved on one stream, so the menu always
//! writes the human-readable form.

use std::io::{self, BufRead, Write};

use log::debug;
use rust_decimal::Decimal;

use libcat::core::models::{Book, Genre, Isbn, LoanDate, Patron};
use libcat::core::{Catalog, CatalogError};
use libcat::output::{
    BookListResult, DebtorsResult, OperationResult, PatronListResult, Render, TransactionListResult,
};

const MENU: &str = "\
==== Library Catalog ====
1. Add book
2. Add patron
3. Set patron fees
4. Check out book
5. Return book
6. List books
7. List patrons
8. Patrons with fees
9. Transactions
0. Exit";

/// Whether the loop should keep going after a menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu settings taken from config and flags
#[derive(Debug, Clone)]
pub struct MenuOptions {
    /// Prompt printed before each input
    pub prompt: String,
    /// Currency symbol for balances
    pub currency: String,
}

/// Interactive menu over a catalog
pub struct Menu<R, W> {
    input: R,
    out: W,
    catalog: Catalog,
    options: MenuOptions,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a menu over the given catalog and streams
    pub const fn new(catalog: Catalog, input: R, out: W, options: MenuOptions) -> Self {
        Self {
            input,
            out,
            catalog,
            options,
        }
    }

    /// Run until the user exits or input ends, returning the final catalog
    pub fn run(mut self) -> io::Result<Catalog> {
        loop {
            writeln!(self.out, "\n{MENU}")?;
            let Some(choice) = self.read_line("Choose an option")? else {
                break;
            };
            debug!("menu choice {choice:?}");
            let flow = match choice.as_str() {
                "1" => self.add_book()?,
                "2" => self.add_patron()?,
                "3" => self.set_fees()?,
                "4" => self.check_out()?,
                "5" => self.return_book()?,
                "6" => self.show(&BookListResult::new(self.catalog.books()))?,
                "7" => self.show(&PatronListResult::new(
                    self.catalog.patrons(),
                    &self.options.currency,
                ))?,
                "8" => self.show(&DebtorsResult {
                    names: self.catalog.patrons_with_fees(),
                })?,
                "9" => self.show(&TransactionListResult::new(self.catalog.transactions()))?,
                "0" | "q" | "quit" | "exit" => Flow::Exit,
                other => {
                    writeln!(self.out, "Unknown option: {other}")?;
                    Flow::Continue
                },
            };
            if flow == Flow::Exit {
                break;
            }
        }
        writeln!(self.out, "Goodbye.")?;
        Ok(self.catalog)
    }

    fn add_book(&mut self) -> io::Result<Flow> {
        let Some(isbn) = self.prompt_isbn()? else {
            return Ok(Flow::Exit);
        };
        let Some(title) = self.read_line("Title")? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.read_line("Author")? else {
            return Ok(Flow::Exit);
        };
        let Some(year) = self.prompt_parsed::<i32>("Copyright year", "a whole number")? else {
            return Ok(Flow::Exit);
        };
        let Some(genre) = self.prompt_genre()? else {
            return Ok(Flow::Exit);
        };

        let book = Book::with_isbn(isbn, title, author, year, genre);
        let message = format!("Added book: {} ({})", book.title(), book.id());
        self.catalog.add_book(book);
        self.show(&OperationResult::ok(message))
    }

    fn add_patron(&mut self) -> io::Result<Flow> {
        let Some(name) = self.read_line("Name")? else {
            return Ok(Flow::Exit);
        };
        let Some(card) = self.prompt_card()? else {
            return Ok(Flow::Exit);
        };
        let message = format!("Registered patron: {name} (card {card})");
        self.catalog.add_patron(Patron::new(name, card));
        self.show(&OperationResult::ok(message))
    }

    fn set_fees(&mut self) -> io::Result<Flow> {
        let Some(card) = self.prompt_card()? else {
            return Ok(Flow::Exit);
        };
        if let Err(e) = self.catalog.find_patron(card) {
            return self.show(&OperationResult::failed(&e));
        }
        loop {
            let Some(amount) = self.prompt_parsed::<Decimal>("Fee balance", "a decimal amount")?
            else {
                return Ok(Flow::Exit);
            };
            match self.catalog.set_patron_fees(card, amount) {
                Ok(patron) => {
                    let message = format!(
                        "Fee balance for {} set to {}{:.2}",
                        patron.name(),
                        self.options.currency,
                        patron.fee_balance()
                    );
                    return self.show(&OperationResult::ok(message));
                },
                Err(e @ CatalogError::NegativeAmount(_)) => {
                    writeln!(self.out, "{e}")?;
                },
                Err(e) => return self.show(&OperationResult::failed(&e)),
            }
        }
    }

    fn check_out(&mut self) -> io::Result<Flow> {
        let Some(isbn) = self.prompt_isbn()? else {
            return Ok(Flow::Exit);
        };
        let Some(card) = self.prompt_card()? else {
            return Ok(Flow::Exit);
        };
        let result = match self.catalog.check_out(
            &Book::reference(isbn),
            &Patron::new("", card),
            LoanDate::today(),
        ) {
            Ok(tx) => OperationResult::ok(format!(
                "Checked out \"{}\" to {} on {}",
                tx.book().title(),
                tx.patron().name(),
                tx.date()
            )),
            Err(e) => OperationResult::failed(&e),
        };
        self.show(&result)
    }

    fn return_book(&mut self) -> io::Result<Flow> {
        let Some(isbn) = self.prompt_isbn()? else {
            return Ok(Flow::Exit);
        };
        let result = match self.catalog.return_book(&Book::reference(isbn)) {
            Ok(book) => OperationResult::ok(format!("Returned \"{}\"", book.title())),
            Err(e) => OperationResult::failed(&e),
        };
        self.show(&result)
    }

    fn show(&mut self, result: &impl Render) -> io::Result<Flow> {
        result.write_human(&mut self.out)?;
        Ok(Flow::Continue)
    }

    fn prompt_isbn(&mut self) -> io::Result<Option<Isbn>> {
        loop {
            let Some(line) = self.read_line("ISBN (n-n-n-x)")? else {
                return Ok(None);
            };
            match Isbn::parse(&line) {
                Ok(isbn) => return Ok(Some(isbn)),
                Err(e) => writeln!(self.out, "{e}")?,
            }
        }
    }

    fn prompt_card(&mut self) -> io::Result<Option<u32>> {
        loop {
            let Some(card) = self.prompt_parsed::<u32>("Card number", "a positive integer")? else {
                return Ok(None);
            };
            if card > 0 {
                return Ok(Some(card));
            }
            writeln!(self.out, "Card number must be a positive integer.")?;
        }
    }

    fn prompt_genre(&mut self) -> io::Result<Option<Genre>> {
        let choices: Vec<String> =
            Genre::ALL.iter().enumerate().map(|(i, g)| format!("{}={}", i + 1, g.label())).collect();
        let label = format!("Genre ({})", choices.join(", "));
        loop {
            let Some(line) = self.read_line(&label)? else {
                return Ok(None);
            };
            match line.parse::<Genre>() {
                Ok(genre) => return Ok(Some(genre)),
                Err(e) => writeln!(self.out, "{e}")?,
            }
        }
    }

    fn prompt_parsed<T: std::str::FromStr>(
        &mut self,
        label: &str,
        expected: &str,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.read_line(label)? else {
                return Ok(None);
            };
            match line.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.out, "Please enter {expected}.")?,
            }
        }
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn read_line(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{label}\n{}", self.options.prompt)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
