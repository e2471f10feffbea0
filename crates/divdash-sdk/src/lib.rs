//! Dividend dashboard core
//!
//! Everything the dashboard shows is computed here, independent of any
//! terminal or network code:
//!
//! - [`controller`] - owns the analysis state and decides what is displayed
//! - [`timeline`] - renders a dividend schedule into year rows and payment dots
//! - [`cards`] - metric cards and insight rows for a snapshot
//! - [`sample`] - the bundled sample snapshot and default form
//!
//! # Quick Start
//!
//! ```
//! use divdash_sdk::prelude::*;
//!
//! let mut controller = PortfolioController::default();
//! let ticket = controller.begin(&default_form()).unwrap();
//! controller.resolve(ticket, Ok(sample_snapshot()));
//!
//! for card in summary_cards(controller.displayed()) {
//!     println!("{}: {}", card.title, card.value);
//! }
//!
//! match controller.timeline() {
//!     Timeline::Rows(view) => println!("Total dividends: {}", view.grand_total_display),
//!     empty => println!("{}", empty.message().unwrap_or_default()),
//! }
//! ```

pub mod cards;
pub mod controller;
pub mod prelude;
pub mod sample;
pub mod timeline;

// Re-export main types
pub use controller::{
    ConnectionStatus, ControllerConfig, ControllerState, PortfolioController, RequestTicket,
    Resolution, Supersede,
};
pub use timeline::{render_timeline, AsOf, PaymentDot, Timeline, TimelineRow, TimelineView};

// Re-export commonly used types from dependencies
pub use divdash_rest::{AnalysisService, AnalyticsClient, ClientConfig, RestError};
pub use divdash_types::{AnalysisForm, AnalysisRequest, PortfolioSnapshot, ValidationError};
