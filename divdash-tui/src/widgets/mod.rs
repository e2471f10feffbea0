//! Custom widgets for the TUI
//!
//! These widgets provide specialized visualizations for dividend data.

mod payment_dots;
mod return_split;

pub use payment_dots::PaymentDots;
pub use return_split::ReturnSplit;
