//! Pieces shared by every BizTime crate: logging setup and small wire types.

pub mod types;
pub mod utils;
