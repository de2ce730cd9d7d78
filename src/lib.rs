//! Client side of the vacation scheduling service.
//!
//! Controllers in [`controller`] hold the page state of each form and talk
//! to the server through the traits in [`api`]; popups go through
//! [`notify::Notifier`]. The binary wires them to a terminal.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod notify;
pub mod routes;
pub mod utils;
pub mod view;
