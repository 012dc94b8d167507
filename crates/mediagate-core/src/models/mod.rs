//! Data models for the upload and deletion flows
//!
//! Every value here is built per call and dropped when the call returns.

mod deletion;
mod storage;
mod transformation;
mod upload;

pub use deletion::*;
pub use storage::*;
pub use transformation::*;
pub use upload::*;
