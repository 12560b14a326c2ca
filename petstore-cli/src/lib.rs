#[macro_use]
extern crate serde;

pub mod config;

pub mod commands;

pub use petstore_openapi::codec;
pub use petstore_openapi::models;
