pub mod aggregate;
pub mod charts;
pub mod filter;
pub mod format;
pub mod palette;
