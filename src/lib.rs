//! Terminal RSVP reader: shows a text one word at a time at a steady pace.

pub mod app;
pub mod cli;
pub mod engine;
pub mod logging;
pub mod reading;
pub mod ui;
