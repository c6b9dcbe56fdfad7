// src/lib.rs
// #![allow(dead_code)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod criteria;
pub mod extract;
pub mod transport;
pub mod search;
pub mod progress;

pub mod csv;
pub mod file;
pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;

pub use criteria::SearchCriteria;
pub use error::{ParseError, SearchError, TransportError};
pub use extract::{Format, ListingRow, ListingTable};
