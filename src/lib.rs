pub mod cli;
pub mod config;
pub mod lint;
pub mod model;
pub mod reference;
pub mod resolver;

mod api;

pub use api::{Xcgen, XcgenBuilder};
