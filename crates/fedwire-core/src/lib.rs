//! fedwire Core - Fundamental types for federation event exchange
//!
//! This crate defines the types shared by every fedwire crate:
//! - Primitive kinds and values (the closed set a payload may carry)
//! - Logical time and origin identifiers
//! - Timed and originated event records
//! - The error taxonomy

pub mod error;
pub mod event;
pub mod id;
pub mod kind;
pub mod time;
pub mod value;

pub use error::*;
pub use event::*;
pub use id::*;
pub use kind::*;
pub use time::*;
pub use value::*;
