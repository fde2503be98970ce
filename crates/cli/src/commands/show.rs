//! Cart display command.
//!
//! Loads the initial items, applies the requested adjustments in order
//! (clear, removes, increases, decreases) with a recompute after each step,
//! then renders the line items and totals.

use clap::Args;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use cartwheel_core::{CartItem, ItemId};
use cartwheel_store::{AppState, CartConfig, CartStore};

/// Arguments for the `show` command.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Free-form query hint forwarded to the catalog gateway
    #[arg(long, default_value = "random")]
    pub query: String,

    /// Empty the cart before rendering
    #[arg(long)]
    pub clear: bool,

    /// Remove the item with this id (repeatable)
    #[arg(long = "remove", value_name = "ID")]
    pub remove: Vec<String>,

    /// Add one to the amount of the item with this id (repeatable)
    #[arg(long = "increase", value_name = "ID")]
    pub increase: Vec<String>,

    /// Take one from the amount of the item with this id (repeatable)
    #[arg(long = "decrease", value_name = "ID")]
    pub decrease: Vec<String>,

    /// Open the clear-cart confirmation modal after rendering
    #[arg(long)]
    pub open_modal: bool,
}

/// Line item display data.
struct LineView {
    title: String,
    amount: u32,
    unit_price: String,
    line_total: String,
}

impl From<&CartItem> for LineView {
    fn from(item: &CartItem) -> Self {
        Self {
            title: item.title.clone(),
            amount: item.amount,
            unit_price: format_price(item.price),
            line_total: format_price(item.line_total()),
        }
    }
}

/// Format a decimal amount as a price string.
fn format_price(amount: Decimal) -> String {
    amount
        .to_f64()
        .map_or_else(|| format!("${amount}"), |a| format!("${a:.2}"))
}

/// Fetch, adjust, render.
///
/// # Errors
///
/// Returns an error if the catalog client fails to build or an adjustment
/// references an id that is not in the cart.
pub async fn run(config: CartConfig, args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(config)?;

    state.load_initial_items(&args.query).await;

    {
        let mut cart = state.cart_mut();
        cart.recompute_totals();

        if args.clear {
            cart.clear();
            cart.recompute_totals();
        }
        for id in &args.remove {
            cart.remove_item(&ItemId::from(id.as_str()));
            cart.recompute_totals();
        }
        for id in &args.increase {
            cart.increase(&ItemId::from(id.as_str()))?;
            cart.recompute_totals();
        }
        for id in &args.decrease {
            cart.decrease(&ItemId::from(id.as_str()))?;
            cart.recompute_totals();
        }
    }

    if args.open_modal {
        state.modal_mut().open();
    }

    render(&state);
    Ok(())
}

/// Render the cart the way the navbar and cart container would.
#[allow(clippy::print_stdout)]
fn render(state: &AppState) {
    let cart = state.cart();

    if cart.is_loading() {
        println!("Loading...");
        return;
    }

    if let Some(err) = cart.last_fetch_error() {
        tracing::warn!("Rendering without catalog data: {err}");
    }

    render_lines(&cart);

    if state.modal().is_open() {
        println!();
        println!("[modal] Remove all items from your shopping cart?");
    }
}

#[allow(clippy::print_stdout)]
fn render_lines(cart: &CartStore) {
    if cart.items().is_empty() {
        println!("Your cart is currently empty");
        return;
    }

    for line in cart.items().iter().map(LineView::from) {
        println!(
            "{:<40} {:>3} x {:>10}  {:>10}",
            line.title, line.amount, line.unit_price, line.line_total
        );
    }

    println!();
    println!(
        "Total: {} ({} items)",
        format_price(cart.total_price()),
        cart.total_quantity()
    );
}
