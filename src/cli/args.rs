use clap::{Parser, Subcommand};

use crate::models::BookCategory;
use crate::services::BookForm;

#[derive(Parser, Debug)]
#[command(name = "bookstore-cart")]
#[command(about = "A bookstore cart with tiered quantity discounts")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Args {
    /// The command to run; an interactive shopping session when none is given.
    pub fn resolved_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Shop)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Start an interactive cart session
    Shop,
    /// Price a list of books in one go
    Quote {
        /// Book as "TITLE|PRICE|QUANTITY|CATEGORY" (repeatable)
        #[arg(short, long = "book", required = true, value_parser = parse_book_arg)]
        books: Vec<BookForm>,
        /// Print the priced cart as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the discount tiers
    Tiers,
    /// List the book categories
    Categories,
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
}

/// Split from the right so titles may themselves contain `|`. Price and
/// quantity stay raw text; the cart validates them like typed input.
pub fn parse_book_arg(raw: &str) -> Result<BookForm, String> {
    let mut parts = raw.rsplitn(4, '|');
    let (category, quantity, price, title) =
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(category), Some(quantity), Some(price), Some(title)) => {
                (category, quantity, price, title)
            }
            _ => {
                return Err(format!(
                    "expected TITLE|PRICE|QUANTITY|CATEGORY, got '{}'",
                    raw
                ))
            }
        };

    let category = if category.trim().is_empty() {
        None
    } else {
        Some(category.parse::<BookCategory>()?)
    };

    Ok(BookForm::new(title, price, quantity, category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_shop() {
        let args = Args::try_parse_from(["bookstore-cart"]).unwrap();
        assert_eq!(args.resolved_command(), Commands::Shop);
        assert!(!args.verbose);
    }

    #[test]
    fn test_quote_collects_books() {
        let args = Args::try_parse_from([
            "bookstore-cart",
            "quote",
            "--book",
            "Dune|45.00|2|fiction",
            "-b",
            "Clean Code|60.00|1|non-fiction",
            "--json",
            "-v",
        ])
        .unwrap();

        assert!(args.verbose);
        match args.resolved_command() {
            Commands::Quote { books, json } => {
                assert!(json);
                assert_eq!(books.len(), 2);
                assert_eq!(
                    books[1],
                    BookForm::new("Clean Code", "60.00", "1", Some(BookCategory::NonFiction))
                );
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_quote_requires_a_book() {
        assert!(Args::try_parse_from(["bookstore-cart", "quote"]).is_err());
    }

    #[test]
    fn test_book_spec_parsing() {
        assert_eq!(
            parse_book_arg("A|B Stories|9.90|3|children"),
            Ok(BookForm::new("A|B Stories", "9.90", "3", Some(BookCategory::Children)))
        );
        assert_eq!(
            parse_book_arg("Dune|45|2|"),
            Ok(BookForm::new("Dune", "45", "2", None))
        );
        assert!(parse_book_arg("Dune|45|2").is_err());
        assert!(parse_book_arg("Dune|45|2|poetry").is_err());
    }
}
