#![warn(rust_2018_idioms)]
#![allow(dead_code)]

pub mod buffer;
pub mod config;
pub mod conn;
mod error;
pub mod message;

pub use buffer::PacketBuffer;
pub use error::{Error, Result};
pub use message::{decode, encode, Message};
