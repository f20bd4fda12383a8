pub mod block;
pub mod constants;
pub mod error;
pub mod transaction;
pub mod types;

pub use block::*;
pub use constants::*;
pub use error::BlockCheckError;
pub use transaction::*;
pub use types::*;
