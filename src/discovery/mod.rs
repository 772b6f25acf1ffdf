pub mod classify;
pub mod config;
pub mod submodules;

pub use classify::{classify, Rejection, Verdict};
pub use submodules::{SubmoduleManager, Submodules};
