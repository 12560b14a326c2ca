pub mod convert;
pub mod decode;
pub mod input;
