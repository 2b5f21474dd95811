use anyhow::{Context, Result};
use console::{style, Emoji};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use tracing::info;

use crate::{
    cli::args::*,
    models::{BookCategory, Dialog},
    services::{BookForm, CartEvent, CartSession, SnackbarHost},
    utils::{
        formatting::{
            format_cart_table, format_categories, format_dialog, format_summary, format_tier_table,
        },
        Config,
    },
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️ ", "");
static BOOKS: Emoji<'_, '_> = Emoji("📚 ", "");

const MENU: [&str; 5] = ["Add book", "Calculate total", "Remove book", "Clear cart", "Quit"];

/// Category menu and its preselected entry. "(none)" is offered only while
/// nothing is selected, since the form keeps the last choice.
fn category_choices(selected: Option<BookCategory>) -> (Vec<&'static str>, usize) {
    let mut choices: Vec<&'static str> = BookCategory::ALL
        .iter()
        .map(BookCategory::display_name)
        .collect();

    match selected.and_then(|selected| BookCategory::ALL.iter().position(|c| *c == selected)) {
        Some(index) => (choices, index),
        None => {
            choices.push("(none)");
            (choices, BookCategory::ALL.len())
        }
    }
}

pub struct CliApp {
    config: Config,
}

impl CliApp {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn run(&self, args: Args) -> Result<()> {
        match args.resolved_command() {
            Commands::Shop => self.handle_shop().await,
            Commands::Quote { books, json } => self.handle_quote(books, json),
            Commands::Tiers => {
                println!("{} {}", INFO, style("Discount tiers").bold().cyan());
                println!("{}", format_tier_table());
                Ok(())
            }
            Commands::Categories => {
                println!("{} {}", INFO, style("Categories").bold().cyan());
                println!("{}", format_categories());
                Ok(())
            }
            Commands::Config { command } => self.handle_config_command(command),
        }
    }

    async fn handle_shop(&self) -> Result<()> {
        let theme = ColorfulTheme::default();
        let mut session = CartSession::new();
        let mut snackbar = SnackbarHost::new(self.config.snackbar_duration());

        println!("{} {}", BOOKS, style("Bookstore Cart").bold().cyan());
        info!("Interactive session started");

        loop {
            self.render(&session, &snackbar);

            if session.dialog.is_visible() {
                let event = self.prompt_dialog(&theme, &session.dialog)?;
                self.apply(&mut session, &mut snackbar, event);
                continue;
            }

            let choice = Select::with_theme(&theme)
                .with_prompt("What would you like to do?")
                .items(&MENU)
                .default(0)
                .interact()?;

            match choice {
                0 => {
                    for event in self.prompt_book_form(&theme, &session.form)? {
                        self.apply(&mut session, &mut snackbar, event);
                    }
                    self.apply(&mut session, &mut snackbar, CartEvent::AddItem);
                }
                1 => self.apply(&mut session, &mut snackbar, CartEvent::CalculateTotal),
                2 => {
                    if session.items.is_empty() {
                        println!("{} The cart is empty", INFO);
                        continue;
                    }
                    let titles: Vec<String> = session
                        .items
                        .iter()
                        .map(|item| format!("{} (x{})", item.title, item.quantity))
                        .collect();
                    let index = Select::with_theme(&theme)
                        .with_prompt("Which book?")
                        .items(&titles)
                        .default(0)
                        .interact()?;
                    let id = session.items[index].id;
                    self.apply(&mut session, &mut snackbar, CartEvent::RequestRemoveItem(id));
                }
                3 => self.apply(&mut session, &mut snackbar, CartEvent::RequestClearCart),
                _ => break,
            }
        }

        info!("Interactive session ended with {} books in cart", session.items.len());
        Ok(())
    }

    fn apply(&self, session: &mut CartSession, snackbar: &mut SnackbarHost, event: CartEvent) {
        if let Some(notice) = session.dispatch(event) {
            snackbar.show(notice.message(&self.config.currency_symbol));
        }
    }

    fn render(&self, session: &CartSession, snackbar: &SnackbarHost) {
        let currency = &self.config.currency_symbol;

        println!();
        if !session.items.is_empty() {
            println!(
                "{}",
                style(format!("Cart ({} books)", session.items.len())).bold()
            );
            println!("{}", format_cart_table(&session.items, currency));
        }

        if session.summary_visible {
            println!("{}", format_summary(&session.summary, currency));
        }

        if let Some(message) = snackbar.current() {
            println!("{} {}", CHECKMARK, style(message).green());
        }
    }

    fn prompt_dialog(&self, theme: &ColorfulTheme, dialog: &Dialog) -> Result<CartEvent> {
        if let Some(rendered) = format_dialog(dialog) {
            println!("{} {}", CROSS, rendered);
        }

        match dialog {
            Dialog::Confirmable { .. } => {
                let accepted = Confirm::with_theme(theme)
                    .with_prompt("Confirm?")
                    .default(false)
                    .interact()?;
                Ok(if accepted {
                    CartEvent::Confirm
                } else {
                    CartEvent::Dismiss
                })
            }
            _ => {
                Select::with_theme(theme)
                    .items(&[dialog.dismiss_label()])
                    .default(0)
                    .interact()?;
                Ok(CartEvent::Dismiss)
            }
        }
    }

    fn prompt_book_form(&self, theme: &ColorfulTheme, form: &BookForm) -> Result<Vec<CartEvent>> {
        let mut events = Vec::new();

        let title: String = Input::with_theme(theme)
            .with_prompt("Book title")
            .allow_empty(true)
            .interact_text()?;
        events.push(CartEvent::EditTitle(title));

        let (categories, default) = category_choices(form.category);
        let index = Select::with_theme(theme)
            .with_prompt("Category")
            .items(&categories)
            .default(default)
            .interact()?;
        if let Some(category) = BookCategory::ALL.get(index) {
            events.push(CartEvent::SelectCategory(*category));
        }

        let price: String = Input::with_theme(theme)
            .with_prompt(format!("Price ({})", self.config.currency_symbol))
            .allow_empty(true)
            .interact_text()?;
        events.push(CartEvent::EditPrice(price));

        let quantity: String = Input::with_theme(theme)
            .with_prompt("Quantity")
            .allow_empty(true)
            .interact_text()?;
        events.push(CartEvent::EditQuantity(quantity));

        Ok(events)
    }

    fn handle_quote(&self, books: Vec<BookForm>, json: bool) -> Result<()> {
        let currency = &self.config.currency_symbol;
        let mut session = CartSession::new();

        for (index, form) in books.into_iter().enumerate() {
            session.form = form;
            session
                .add_item()
                .with_context(|| format!("Book #{} was rejected", index + 1))?;
        }

        let notice = session.calculate_total().context("Failed to price cart")?;
        let purchase = session.purchase().context("Cart was not priced")?;

        if json {
            let output =
                serde_json::to_string_pretty(&purchase).context("Failed to encode purchase")?;
            println!("{}", output);
        } else {
            println!("{}", format_cart_table(&purchase.books, currency));
            println!("{}", format_summary(&session.summary, currency));
            println!("{} {}", CHECKMARK, notice.message(currency));
        }

        info!("Quoted {} books, total {}", purchase.books.len(), purchase.total);
        Ok(())
    }

    fn handle_config_command(&self, command: ConfigCommands) -> Result<()> {
        match command {
            ConfigCommands::Show => {
                println!("{} {}", INFO, style("Configuration").bold().cyan());
                println!("{}: {}", style("Currency").bold(), self.config.currency_symbol);
                println!("{}: {}", style("Log level").bold(), self.config.log_level);
                println!("{}: {}", style("Environment").bold(), self.config.environment);
                println!(
                    "{}: {} ms",
                    style("Snackbar duration").bold(),
                    self.config.snackbar_duration_ms
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_choices_hide_none_once_selected() {
        let (choices, default) = category_choices(None);
        assert_eq!(choices.len(), BookCategory::ALL.len() + 1);
        assert_eq!(choices[default], "(none)");

        let (choices, default) = category_choices(Some(BookCategory::History));
        assert_eq!(choices.len(), BookCategory::ALL.len());
        assert!(!choices.contains(&"(none)"));
        assert_eq!(choices[default], "History");
    }

    #[test]
    fn test_quote_accepts_valid_books() {
        let app = CliApp::new(Config::default());
        let books = vec![
            BookForm::new("Dune", "45.00", "2", Some(BookCategory::Fiction)),
            BookForm::new("Clean Code", "60.00", "1", Some(BookCategory::NonFiction)),
        ];
        assert!(app.handle_quote(books, true).is_ok());
    }

    #[test]
    fn test_quote_rejects_invalid_book() {
        let app = CliApp::new(Config::default());
        let books = vec![
            BookForm::new("Dune", "45.00", "2", Some(BookCategory::Fiction)),
            BookForm::new("Nameless", "0", "1", Some(BookCategory::Fiction)),
        ];

        let err = app.handle_quote(books, false).unwrap_err();
        assert_eq!(err.to_string(), "Book #2 was rejected");
        assert_eq!(err.root_cause().to_string(), "The price must be greater than 0");
    }

    #[test]
    fn test_non_interactive_commands_succeed() {
        let app = CliApp::new(Config::default());
        for command in [
            Commands::Tiers,
            Commands::Categories,
            Commands::Config {
                command: ConfigCommands::Show,
            },
        ] {
            let args = Args {
                verbose: false,
                command: Some(command),
            };
            assert!(tokio_test::block_on(app.run(args)).is_ok());
        }
    }
}
