//! Main content panels

pub mod instances;
