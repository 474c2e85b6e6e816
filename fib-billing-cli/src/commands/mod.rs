//! Command implementations for the Fib Billing CLI

pub mod next;
pub mod schedule;
pub mod summary;
pub mod term;

pub use next::execute as execute_next;
pub use schedule::execute as execute_schedule;
pub use summary::execute as execute_summary;
pub use term::execute as execute_term;
