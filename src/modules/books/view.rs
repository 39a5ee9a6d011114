//! Table rendering for the Books list.
//!
//! Pure functions of the snapshot; the front-end decides when to print
//! them.

use libris_api::Book;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::utils;

const DATE_INPUT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DATE_DISPLAY: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none], [year]");

/// Human-readable publish date for a table row.
///
/// Shows the calendar-date portion as `Mmm D, YYYY`. Missing dates render
/// as a dash; text that does not parse as a date falls back to its
/// truncated raw form.
pub fn display_date(publish_date: Option<&str>) -> String {
    let date_part = match publish_date {
        Some(raw) => utils::date_only(raw),
        None => "",
    };
    if date_part.is_empty() {
        return "—".to_string();
    }

    match Date::parse(date_part, DATE_INPUT) {
        Ok(date) => date
            .format(DATE_DISPLAY)
            .unwrap_or_else(|_| date_part.to_string()),
        Err(_) => date_part.to_string(),
    }
}

/// Render the snapshot as an indexed table.
///
/// Row numbers are what the edit and delete commands accept.
pub fn render_table(books: &[Book]) -> String {
    if books.is_empty() {
        return "  (no books)\n".to_string();
    }

    let mut title_width = "Title".len();
    let mut author_width = "Author".len();
    for book in books {
        title_width = title_width.max(book.title.len());
        author_width = author_width.max(book.author.len());
    }

    let mut out = String::new();
    out.push_str(&format!(
        "  #  {:<title_width$}  {:<author_width$}  Publish Date\n",
        "Title", "Author"
    ));
    for (index, book) in books.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<title_width$}  {:<author_width$}  {}\n",
            index + 1,
            book.title,
            book.author,
            display_date(book.publish_date.as_deref())
        ));
    }
    out
}
