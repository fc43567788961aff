#![no_std]
#![warn(clippy::std_instead_of_alloc, clippy::std_instead_of_core)]

pub mod ghash;
pub mod tag;

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

use thiserror;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("invalid tag size, want 1..={}, got {}", .0, .1)]
    InvalidTagSize(usize, usize),
}
pub type Result<T> = core::result::Result<T, Error>;
