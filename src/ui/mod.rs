pub mod highlight;
pub mod output;

pub use output::{display_error, print_verbose, Console};
