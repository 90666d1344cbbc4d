//! Showroom Domain Concerns

pub mod customers;
pub mod orders;
pub mod vehicles;
