mod command;
mod opener;

pub use opener::{DryRunOpener, SystemOpener, UrlOpener};
