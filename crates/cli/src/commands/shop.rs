//! Interactive shopping session.
//!
//! Reads one command per line and applies it to the session's cart,
//! showcase and checkout, in the order typed.
//!
//! # Usage
//!
//! ```text
//! $ ml-cli shop
//! > add 1
//! Added Montre Royale Or (x1). Cart: 1 item, 1,200.00 DH
//! > update 1 3
//! Montre Royale Or is now x3. Cart: 3 items, 3,600.00 DH
//! > checkout
//! ...
//! > confirm
//! Payment confirmed. Order 5f0c...: 3 items, 3,600.00 DH
//! ```

use std::io::{self, BufRead, Write};

use maison_luxe_core::checkout::{self, CheckoutError};
use maison_luxe_core::{CheckoutSummary, ProductId};
use thiserror::Error;
use tracing::debug;

use crate::commands::catalog::{ListFilter, write_listing};
use crate::error::Result;
use crate::state::ShopSession;

const HELP: &str = "\
Commands:
  list [all|watches|eyewear|new|favorites]   Show products
  view <id>                                  Show one product
  fav <id>                                   Toggle a favorite
  add <id>                                   Add one to the cart
  update <id> <qty>                          Set a quantity (0 removes)
  remove <id>                                Remove from the cart
  cart                                       Show the cart
  total                                      Show the order total
  checkout                                   Review the order before paying
  confirm                                    Complete the pending checkout
  cancel                                     Abandon the pending checkout
  help                                       Show this help
  quit                                       Leave the shop";

/// Errors in a typed command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Unknown command `{0}`")]
    UnknownCommand(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("`{0}` is not a product id")]
    InvalidId(String),
    #[error("`{0}` is not a whole number")]
    InvalidQuantity(String),
    #[error("Unknown listing `{0}`")]
    UnknownFilter(String),
}

/// A parsed shop command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopCommand {
    List(ListFilter),
    View(ProductId),
    Favorite(ProductId),
    Add(ProductId),
    Update(ProductId, i64),
    Remove(ProductId),
    Cart,
    Total,
    Checkout,
    Confirm,
    Cancel,
    Help,
    Quit,
}

impl ShopCommand {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands, wrong argument counts, and
    /// IDs or quantities that are not integers.
    pub fn parse(line: &str) -> std::result::Result<Option<Self>, InputError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((head, args)) = words.split_first() else {
            return Ok(None);
        };
        let name = head.to_lowercase();

        let command = match (name.as_str(), args) {
            ("list" | "ls", []) => Self::List(ListFilter::All),
            ("list" | "ls", [filter]) => Self::List(
                filter
                    .parse()
                    .map_err(|_| InputError::UnknownFilter((*filter).to_string()))?,
            ),
            ("view", [id]) => Self::View(parse_id(id)?),
            ("fav" | "favorite", [id]) => Self::Favorite(parse_id(id)?),
            ("add", [id]) => Self::Add(parse_id(id)?),
            ("update" | "set", [id, quantity]) => {
                Self::Update(parse_id(id)?, parse_quantity(quantity)?)
            }
            ("remove" | "rm", [id]) => Self::Remove(parse_id(id)?),
            ("cart", []) => Self::Cart,
            ("total", []) => Self::Total,
            ("checkout", []) => Self::Checkout,
            ("confirm" | "pay", []) => Self::Confirm,
            ("cancel", []) => Self::Cancel,
            ("help" | "?", []) => Self::Help,
            ("quit" | "exit" | "q", []) => Self::Quit,
            (other, _) => {
                return Err(usage(other).map_or_else(
                    || InputError::UnknownCommand((*head).to_string()),
                    InputError::Usage,
                ));
            }
        };
        Ok(Some(command))
    }
}

fn usage(name: &str) -> Option<&'static str> {
    let text = match name {
        "list" | "ls" => "list [all|watches|eyewear|new|favorites]",
        "view" => "view <id>",
        "fav" | "favorite" => "fav <id>",
        "add" => "add <id>",
        "update" | "set" => "update <id> <qty>",
        "remove" | "rm" => "remove <id>",
        "cart" => "cart",
        "total" => "total",
        "checkout" => "checkout",
        "confirm" | "pay" => "confirm",
        "cancel" => "cancel",
        "help" | "?" => "help",
        "quit" | "exit" | "q" => "quit",
        _ => return None,
    };
    Some(text)
}

fn parse_id(word: &str) -> std::result::Result<ProductId, InputError> {
    word.parse()
        .map_err(|_| InputError::InvalidId(word.to_string()))
}

fn parse_quantity(word: &str) -> std::result::Result<i64, InputError> {
    word.parse()
        .map_err(|_| InputError::InvalidQuantity(word.to_string()))
}

/// Run a session on stdin/stdout.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read or written.
pub fn interactive(session: &mut ShopSession) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(session, stdin.lock(), &mut out)?;
    Ok(())
}

/// Read commands from `input` until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading or writing fails. Bad commands are reported
/// to the shopper and do not end the session.
pub fn run<R: BufRead, W: Write>(
    session: &mut ShopSession,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(
        out,
        "Maison Luxe - {} products. Type `help` for commands.",
        session.catalog().len()
    )?;
    prompt(out)?;

    for line in input.lines() {
        match ShopCommand::parse(&line?) {
            Ok(None) => {}
            Ok(Some(ShopCommand::Quit)) => break,
            Ok(Some(command)) => {
                debug!(?command, "Shop command");
                execute(session, command, out)?;
            }
            Err(e) => writeln!(out, "{e}. Type `help` for commands.")?,
        }
        prompt(out)?;
    }

    writeln!(out, "Au revoir.")?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

/// Apply one command to the session and report the result.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn execute<W: Write>(
    session: &mut ShopSession,
    command: ShopCommand,
    out: &mut W,
) -> io::Result<()> {
    match command {
        ShopCommand::List(filter) => write_listing(out, session, filter),
        ShopCommand::View(id) => view(session, id, out),
        ShopCommand::Favorite(id) => favorite(session, id, out),
        ShopCommand::Add(id) => add(session, id, out),
        ShopCommand::Update(id, quantity) => update(session, id, quantity, out),
        ShopCommand::Remove(id) => match session.cart.remove(id) {
            Some(item) => {
                writeln!(out, "Removed {}. {}", item.name, cart_status(session))
            }
            None => writeln!(out, "#{id} is not in your cart."),
        },
        ShopCommand::Cart => write_cart(session, out),
        ShopCommand::Total => writeln!(out, "Total: {}", session.money(session.cart.subtotal())),
        ShopCommand::Checkout => begin_checkout(session, out),
        ShopCommand::Confirm => confirm(session, out),
        ShopCommand::Cancel => match session.pending_checkout.take() {
            Some(_) => writeln!(out, "Checkout cancelled. Your cart is unchanged."),
            None => writeln!(out, "No checkout in progress."),
        },
        ShopCommand::Help => writeln!(out, "{HELP}"),
        ShopCommand::Quit => Ok(()),
    }
}

fn view<W: Write>(session: &mut ShopSession, id: ProductId, out: &mut W) -> io::Result<()> {
    let Some(product) = session.catalog().get(id).cloned() else {
        return writeln!(out, "No product #{id}.");
    };
    session.showcase.view(id);

    writeln!(out, "#{} {}", product.id, product.name)?;
    writeln!(out, "  Category: {}", product.category.label())?;
    writeln!(out, "  Price:    {}", session.price_label(product.price.as_str()))?;
    writeln!(out, "  Rating:   {:.1}/5", product.rating)?;
    writeln!(out, "  Image:    {}", product.image)?;
    if product.is_new() {
        writeln!(out, "  New arrival")?;
    }
    Ok(())
}

fn favorite<W: Write>(session: &mut ShopSession, id: ProductId, out: &mut W) -> io::Result<()> {
    let Some(name) = session.catalog().get(id).map(|p| p.name.clone()) else {
        return writeln!(out, "No product #{id}.");
    };

    if session.showcase.toggle_favorite(id) {
        writeln!(out, "Added {name} to favorites.")
    } else {
        writeln!(out, "Removed {name} from favorites.")
    }
}

fn add<W: Write>(session: &mut ShopSession, id: ProductId, out: &mut W) -> io::Result<()> {
    let Some(product) = session.catalog().get(id).cloned() else {
        return writeln!(out, "No product #{id}.");
    };
    session.cart.add(&product);

    let quantity = session.cart.get(id).map_or(0, |item| item.quantity);
    writeln!(
        out,
        "Added {} (x{quantity}). {}",
        product.name,
        cart_status(session)
    )
}

fn update<W: Write>(
    session: &mut ShopSession,
    id: ProductId,
    quantity: i64,
    out: &mut W,
) -> io::Result<()> {
    let Some(name) = session.cart.get(id).map(|item| item.name.clone()) else {
        return writeln!(out, "#{id} is not in your cart.");
    };
    session.cart.update_quantity(id, quantity);

    if quantity <= 0 {
        writeln!(out, "Removed {name}. {}", cart_status(session))
    } else {
        writeln!(out, "{name} is now x{quantity}. {}", cart_status(session))
    }
}

fn write_cart<W: Write>(session: &ShopSession, out: &mut W) -> io::Result<()> {
    if session.cart.is_empty() {
        return writeln!(out, "Your cart is empty.");
    }

    writeln!(out, "Cart ({})", items_label(session.cart.item_count()))?;
    for item in session.cart.items() {
        writeln!(
            out,
            "  #{:<3} {:<26} x{:<4} {:>14}",
            item.id.as_i32(),
            item.name,
            item.quantity,
            session.money(item.line_total()),
        )?;
    }
    writeln!(out, "Total: {}", session.money(session.cart.subtotal()))
}

fn begin_checkout<W: Write>(session: &mut ShopSession, out: &mut W) -> io::Result<()> {
    let summary = match CheckoutSummary::from_cart(&session.cart) {
        Ok(summary) => summary,
        Err(CheckoutError::EmptyCart) => return writeln!(out, "Your cart is empty."),
        Err(e) => return writeln!(out, "Cannot start checkout: {e}."),
    };

    write_cart(session, out)?;
    writeln!(
        out,
        "Amount due: {}. Type `confirm` to pay or `cancel` to go back.",
        session.money(summary.subtotal)
    )?;
    session.pending_checkout = Some(summary);
    Ok(())
}

fn confirm<W: Write>(session: &mut ShopSession, out: &mut W) -> io::Result<()> {
    let Some(summary) = session.pending_checkout.take() else {
        return writeln!(out, "No checkout in progress. Type `checkout` first.");
    };

    match checkout::complete(&summary, &mut session.cart) {
        Ok(receipt) => writeln!(
            out,
            "Payment confirmed. Order {}: {}, {}",
            receipt.reference,
            items_label(receipt.item_count),
            session.money(receipt.subtotal)
        ),
        Err(CheckoutError::CartChanged) => writeln!(
            out,
            "Your cart changed since checkout started. Type `checkout` to review it again."
        ),
        Err(e) => writeln!(out, "Checkout failed: {e}."),
    }
}

fn cart_status(session: &ShopSession) -> String {
    format!(
        "Cart: {}, {}",
        items_label(session.cart.item_count()),
        session.money(session.cart.subtotal())
    )
}

fn items_label(count: u64) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{count} items")
    }
}
