pub mod chainparams;
pub mod params;
pub mod select;

pub use chainparams::{ChainParams, ChainParamsError};
pub use params::ConsensusParams;
pub use select::{params, select_params};
