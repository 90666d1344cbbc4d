//! Showroom
//!
//! Core of the Showroom dealership console: customer, vehicle and order
//! models, order reassignment planning, and the form, table, modal and notice
//! logic the console screens are built from.

/// Customer models.
pub mod customers;
/// Number formatting.
pub mod format;
/// Form validation.
pub mod forms;
/// Typed ids.
pub mod ids;
/// Modal dialog state.
pub mod modal;
/// Outcome notices and prompts.
pub mod notices;
/// Select options.
pub mod options;
/// Order models and reassignment.
pub mod orders;
/// Common re-exports.
pub mod prelude;
/// Row tables.
pub mod table;
/// Vehicle models.
pub mod vehicles;
