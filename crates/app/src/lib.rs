//! Showroom console application: REST client, services and headless screens.

pub mod client;
pub mod context;
pub mod domain;
pub mod screens;

pub use domain::{customers, orders, vehicles};
