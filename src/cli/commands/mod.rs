pub mod check;
mod command_result;
pub mod export;
pub mod helper;
pub mod init;
pub mod lookup;
pub mod merge;
pub mod normalize;
pub mod stats;

pub use command_result::*;
