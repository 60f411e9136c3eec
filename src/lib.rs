//! Release announcement drafting: a form of release metadata becomes a fixed
//! prompt, one chat-completion attempt produces the announcement text.

pub mod cmd;
pub mod config;
pub mod context;
pub mod domain;
pub mod error;
pub mod format;
pub mod infra;
pub mod prompt;
pub mod services;
pub mod session;
pub mod workflow;
