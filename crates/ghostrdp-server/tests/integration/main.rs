#[path = "../fixtures.rs"]
mod fixtures;

mod api;
mod dal;
