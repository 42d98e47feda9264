//! Add one unit of a product.

use anyhow::Result;

use super::{cart_failure, AddArgs};
use crate::context::Context;

/// Run the add command.
pub async fn run(args: AddArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let cart = store.add_product(args.id).await.map_err(cart_failure)?;

    let quantity = cart.quantity_of(args.id).unwrap_or_default();
    ctx.output
        .success(&format!("Product {} in cart (quantity {})", args.id, quantity));
    ctx.output.cart(&cart);
    Ok(())
}
