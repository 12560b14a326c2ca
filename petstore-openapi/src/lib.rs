#[macro_use]
extern crate serde;
extern crate serde_json;

pub mod codec;
pub mod models;
