pub mod inputs;
pub mod quotes;

// Re-export the core types to provide a clean public API.
pub use inputs::{LeaseInput, LoanInput};
pub use quotes::{LeaseQuote, LoanQuote};
