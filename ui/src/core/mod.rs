//! Framework-free building blocks for the landing page.

pub mod links;
pub mod modes;
pub mod motion;
