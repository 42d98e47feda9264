//! Set the quantity of a product in the cart.

use anyhow::Result;
use turbo_cart::AmountUpdate;

use super::{cart_failure, UpdateArgs};
use crate::context::Context;

/// Run the update command.
pub async fn run(args: UpdateArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let cart = store
        .update_product_amount(AmountUpdate::new(args.id, args.amount))
        .await
        .map_err(cart_failure)?;

    ctx.output.success(&format!(
        "Product {} quantity set to {}",
        args.id, args.amount
    ));
    ctx.output.cart(&cart);
    Ok(())
}
