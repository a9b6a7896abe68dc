//! `.env` file configuration for the Note framework.
//!
//! This crate loads a flat `KEY=value` file once into a [`ConfigStore`] and
//! answers lookups with dot-notation keys and typed values:
//!
//! ```
//! use note_config::{ConfigStore, Value};
//!
//! let store = ConfigStore::parse("APP_NAME=demo\nAPP_DEBUG=true\nAPP_PORT=8080\n");
//!
//! assert_eq!(store.get("app.name"), Some(Value::from("demo")));
//! assert_eq!(store.get_as::<bool>("app.debug"), Some(true));
//! assert_eq!(store.get_or("app.timeout", 30), Value::Int(30));
//! ```
//!
//! The process environment is never read or modified.

pub mod constants;
mod error;
mod key;
mod parser;
mod store;
mod value;

pub use error::{ConfigError, ValueError};
pub use key::normalize_key;
pub use parser::{Line, parse_line, unquote};
pub use store::ConfigStore;
pub use value::{Value, is_numeric};
