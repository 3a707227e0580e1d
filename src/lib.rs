//! Trade Order Formatter Library
//!
//! Turns trade-order rows pasted by an operator (tab, comma or space
//! aligned) into normalized order records and email-ready HTML tables.
//!
//! This library provides tools for:
//! - Detecting the delimiter of a pasted line and splitting it into fields
//! - Mapping fixed export positions onto named order columns
//! - Collecting validation errors instead of failing on malformed input
//! - Normalizing quantity and price artifacts from the upstream export
//! - Rendering display values, HTML tables, plain text and JSON
//!
//! ```rust
//! use order_formatter::{FormatterConfig, OrderCollection, pipeline, render};
//!
//! let line = "1,Day,CSY,255048,68380,11/08/2025,29/08/2025,SELL,LSE,PALMP.L,PANTHER METALS,4000,100P,Haris,Joseph,,,,";
//! let config = FormatterConfig::default();
//! let mut orders = OrderCollection::new();
//!
//! pipeline::submit(&mut orders, line, config.schema).expect("line is valid");
//! let html = render::render_email(orders.orders(), &config);
//! assert!(html.contains("PANTHER METALS"));
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod mapper;
pub mod models;
pub mod normalizer;
pub mod pipeline;
pub mod render;
pub mod schema;
pub mod splitter;
pub mod validator;

// Re-export commonly used types
pub use config::{FormatterConfig, OutputFormat};
pub use error::{FormatterError, Result, ValidationError};
pub use models::{
    Column, LineOutcome, OrderCollection, OrderRecord, SubmissionOutcome, ValidationResult,
};
pub use schema::SchemaVariant;
pub use splitter::{Delimiter, FieldSequence};
