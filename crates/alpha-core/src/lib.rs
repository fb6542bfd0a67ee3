//! Domain logic for the Alpha Clothing storefront shell.
//!
//! Everything here is framework-free and runs on any target: the site
//! configuration, the fixed navigation table, page metadata resolution,
//! the schema.org structured-data builder, the header state machine, and
//! the style tables. The Leptos components in `alpha-storefront` consume
//! these types; keeping them out of the component crate keeps the shell's
//! behavior unit-testable without a browser.

mod config;
mod error;
mod nav;
mod schema;
mod seo;
mod state;
mod style;

pub use config::*;
pub use error::*;
pub use nav::*;
pub use schema::*;
pub use seo::*;
pub use state::*;
pub use style::*;
