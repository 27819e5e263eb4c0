//! Purchase command and query handlers.

mod list_purchases;
mod purchase_bundle;
mod purchase_metaphor;
mod reconcile_checkout;

pub use list_purchases::{ListPurchasesHandler, ListPurchasesQuery};
pub use purchase_bundle::{PurchaseBundleCommand, PurchaseBundleHandler};
pub use purchase_metaphor::{PurchaseMetaphorCommand, PurchaseMetaphorHandler};
pub use reconcile_checkout::{ReconcileCheckoutHandler, ReconcileOutcome};
