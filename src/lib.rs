pub mod banner;
pub mod commands;
pub mod config;
pub mod consts;
pub mod engine;
pub mod format;
pub mod keys;
pub mod session;
pub mod tape;
