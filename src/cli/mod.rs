//! Command-line front end
//!
//! Renders sessions as text and turns terminal input into session events.

pub mod commands;
pub mod input;
pub mod output;
