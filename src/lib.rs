//! Order checking against a tabular menu catalog.
//!
//! A free-text order ("2 margheritas and 1 farmhouse", sizes "large", crusts
//! "thin and stuffed", toppings "onion and corn") is parsed into order lines,
//! each line is run through a name -> size -> crust cascade over the catalog
//! rows, and requested toppings are checked against the catalog's topping
//! vocabulary. The result is a list of human-readable messages.
//!
//! ```no_run
//! use std::sync::Arc;
//! use menu_check::{Catalog, CheckerConfig, OrderChecker, OrderRequest};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CheckerConfig::default();
//! let catalog = Catalog::from_toon(&std::fs::read_to_string("menu.toon")?, &config)?;
//! let checker = OrderChecker::with_config(Arc::new(catalog), config);
//!
//! let request = OrderRequest::from_json(r#"{"PizzaName": "2 margheritas", "PizzaSize": "large",
//!     "PizzaCrust": "thin", "PizzaType": "veg"}"#)?;
//! println!("{}", checker.check(&request).render());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod core;
pub mod error;

pub use catalog::{Catalog, CatalogFormat};
pub use config::CheckerConfig;
pub use crate::core::check::{LineOutcome, OrderChecker, OrderReport};
pub use crate::core::types::{AlignedAttributes, CatalogRow, MatchResult, OrderLine, OrderRequest, ToppingClassification, ToppingRow};
pub use error::{CatalogError, ConfigError, RequestError};
