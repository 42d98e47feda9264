//! CLI command implementations.

pub mod add;
pub mod remove;
pub mod show;
pub mod update;

use clap::Args;
use turbo_cart::CartError;
use turbo_commerce::ProductId;

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Print only the total number of units.
    #[arg(long)]
    pub count: bool,
}

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product to add one unit of.
    pub id: ProductId,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Product to remove.
    pub id: ProductId,
}

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Product whose quantity changes.
    pub id: ProductId,

    /// New quantity.
    #[arg(allow_negative_numbers = true)]
    pub amount: i64,
}

/// Turn a cart failure into the shopper-facing message, keeping the detail
/// in the log.
pub(crate) fn cart_failure(err: CartError) -> anyhow::Error {
    tracing::debug!(
        operation = err.operation().as_str(),
        kind = ?err.kind(),
        error = ?err,
        "cart operation failed"
    );
    anyhow::anyhow!(err.user_message())
}
