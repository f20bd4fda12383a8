pub mod check;

pub use check::{check_block, check_transaction, CheckOptions};
