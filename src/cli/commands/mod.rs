pub mod check;
mod command_result;
pub mod context;
pub mod init;
pub mod locate;
pub mod set;
pub mod show;
pub mod translate;

pub use command_result::*;
