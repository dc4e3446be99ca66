pub mod chain;
pub mod cli;
pub mod conf;
pub mod ctx;
pub mod device;
pub mod headers;
pub mod logging;
pub mod resolve;
pub mod rewrite;
pub mod trust;
