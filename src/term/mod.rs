//! Line-oriented terminal front-end for the Books component.
//!
//! Renders the table after every action, collects form input, and asks
//! the delete confirmation the synchronizer requires. All state lives in
//! the [`BooksManager`]; this module only translates lines of input into
//! its transition functions.

use std::io::{self, Write};

use libris_api::BooksApi;

use crate::modules::books::view;
use crate::modules::books::{BooksManager, ConfirmPrompt, Field};

/// Commands the session understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add,
    Edit(usize),
    Delete(usize),
    Help,
    Quit,
}

impl Command {
    /// Parse a command line. Row numbers are 1-based, as rendered.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Err("empty command".to_string());
        };

        let command = match keyword {
            "list" | "ls" => Self::List,
            "add" => Self::Add,
            "edit" => Self::Edit(parse_row(words.next())?),
            "delete" | "del" => Self::Delete(parse_row(words.next())?),
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(format!("unknown command '{other}'; try 'help'")),
        };

        if words.next().is_some() {
            return Err("too many arguments".to_string());
        }
        Ok(command)
    }
}

fn parse_row(word: Option<&str>) -> Result<usize, String> {
    let word = word.ok_or_else(|| "expected a row number".to_string())?;
    let row: usize = word
        .parse()
        .map_err(|_| format!("'{word}' is not a row number"))?;
    if row == 0 {
        return Err("row numbers start at 1".to_string());
    }
    Ok(row)
}

/// Confirmation prompt backed by stdin. Anything but an explicit yes
/// declines.
pub struct StdinPrompt;

impl ConfirmPrompt for StdinPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        match read_line(&format!("{message} [y/N] ")) {
            Ok(Some(answer)) => matches!(answer.trim(), "y" | "Y" | "yes"),
            Ok(None) | Err(_) => false,
        }
    }
}

/// Interactive session over a Books manager.
pub struct Session<A: BooksApi> {
    manager: BooksManager<A>,
}

impl<A: BooksApi> Session<A> {
    pub fn new(manager: BooksManager<A>) -> Self {
        Self { manager }
    }

    /// Run until the user quits or stdin closes. Fetches the collection
    /// once up front, then reacts to commands.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        println!("Books Manager — type 'help' for commands");
        self.manager.refresh().await;
        self.render();

        loop {
            let Some(line) = read_line("> ")? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Err(message) => println!("{message}"),
                Ok(Command::Quit) => break,
                Ok(Command::Help) => print_help(),
                Ok(Command::List) => {
                    self.manager.refresh().await;
                    self.render();
                }
                Ok(Command::Add) => self.run_form().await?,
                Ok(Command::Edit(row)) => self.edit(row).await?,
                Ok(Command::Delete(row)) => self.delete(row).await?,
            }
        }

        Ok(())
    }

    /// Walk the form fields and submit. Prompts default to the current
    /// draft values, so an edit shows the record being changed; title and
    /// author are required, the date is not.
    async fn run_form(&mut self) -> io::Result<()> {
        let heading = if self.manager.is_editing() {
            "Update Book"
        } else {
            "Add Book"
        };
        println!("{heading}");

        let defaults = self.manager.draft().clone();
        let Some(title) = prompt_required("Title", &defaults.title)? else {
            return Ok(());
        };
        self.manager.set_field(Field::Title, title);

        let Some(author) = prompt_required("Author", &defaults.author)? else {
            return Ok(());
        };
        self.manager.set_field(Field::Author, author);

        let Some(date) = prompt_with_default("Publish date (YYYY-MM-DD)", &defaults.publish_date)?
        else {
            return Ok(());
        };
        self.manager.set_field(Field::PublishDate, date);

        self.manager.submit().await;
        self.render();
        Ok(())
    }

    async fn edit(&mut self, row: usize) -> io::Result<()> {
        let Some(book) = self.manager.books().get(row - 1).cloned() else {
            println!("no row {row}");
            return Ok(());
        };
        self.manager.begin_edit(&book);
        self.run_form().await
    }

    async fn delete(&mut self, row: usize) -> io::Result<()> {
        let Some(book) = self.manager.books().get(row - 1).cloned() else {
            println!("no row {row}");
            return Ok(());
        };
        self.manager.delete(&book.id, &mut StdinPrompt).await;
        self.render();
        Ok(())
    }

    /// Print the banner, if any, and the current table.
    fn render(&self) {
        if let Some(banner) = self.manager.banner() {
            println!("! {banner}");
        }
        print!("{}", view::render_table(self.manager.books()));
    }
}

fn print_help() {
    println!("commands:");
    println!("  list          refetch and show the collection");
    println!("  add           create a book");
    println!("  edit <row>    update the book at <row>");
    println!("  delete <row>  delete the book at <row>");
    println!("  quit          leave");
}

/// Prompt until a non-empty value arrives. An empty reply takes the
/// default when one is shown. `None` means stdin closed.
fn prompt_required(label: &str, default: &str) -> io::Result<Option<String>> {
    loop {
        let Some(value) = prompt_with_default(label, default)? else {
            return Ok(None);
        };
        if !value.is_empty() {
            return Ok(Some(value));
        }
        println!("{label} is required");
    }
}

/// Prompt once; an empty reply takes the default.
fn prompt_with_default(label: &str, default: &str) -> io::Result<Option<String>> {
    let shown = if default.is_empty() {
        format!("{label}: ")
    } else {
        format!("{label} [{default}]: ")
    };
    let Some(input) = read_line(&shown)? else {
        return Ok(None);
    };
    let input = input.trim().to_string();
    if input.is_empty() {
        return Ok(Some(default.to_string()));
    }
    Ok(Some(input))
}

/// Read one line from stdin, prompting first. `None` means end of input.
fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
