pub mod error;
pub mod validation;
pub mod model;
pub mod matcher;
pub mod storage;
pub mod cli;
