//! Show the current cart.

use anyhow::Result;

use super::ShowArgs;
use crate::context::Context;

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let cart = store.cart();

    if args.count {
        if ctx.output.is_json() {
            ctx.output.json(&serde_json::json!({ "count": cart.total_quantity() }));
        } else {
            println!("{}", cart.total_quantity());
        }
        return Ok(());
    }

    ctx.output.header("Cart");
    ctx.output.cart(&cart);
    Ok(())
}
