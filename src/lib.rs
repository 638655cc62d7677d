#![deny(missing_docs)]
// This is a markup scanner. Markup can be untrusted input from the internet.
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod cursor;
mod error;
mod machine;
mod matcher;
mod observer;
pub mod observers;
mod state;
#[cfg(debug_assertions)]
#[doc(hidden)]
pub mod testutils;
mod tokenizer;
mod utils;

pub use error::Error;
pub use observer::{Observer, Quote};
pub use observers::default::{DefaultObserver, Event};
pub use tokenizer::Tokenizer;
