pub mod app;
pub mod commands;
pub mod filter;
pub mod keys;
pub mod scroll;
pub mod selection;
pub mod state;
