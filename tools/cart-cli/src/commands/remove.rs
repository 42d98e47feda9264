//! Remove a product from the cart.

use anyhow::Result;

use super::{cart_failure, RemoveArgs};
use crate::context::Context;

/// Run the remove command.
pub async fn run(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let cart = store.remove_product(args.id).map_err(cart_failure)?;

    ctx.output
        .success(&format!("Product {} removed from cart", args.id));
    ctx.output.cart(&cart);
    Ok(())
}
