//! # Regroup
//!
//! A convenience layer on top of the [`regex`](https://crates.io/crates/regex)
//! crate: map capture groups straight into the fields of a result value, and
//! rewrite every match of a pattern through a per-match callback.
//!
//! There is no matching engine here. Compilation and matching are delegated
//! entirely to `regex`; this crate supplies the plumbing around it.
//!
//! ## Mapping captures into a value
//!
//! Build a [`FieldMap`] once per result type, pairing capture slots with
//! setter closures, then extract with a single call:
//!
//! ```rust
//! use regroup::prelude::*;
//!
//! #[derive(Default)]
//! struct Contact {
//!     first: String,
//!     last: String,
//!     number: i64,
//! }
//!
//! let map = FieldMap::new()
//!     .text(1, |c: &mut Contact, v| c.first = v.to_string())
//!     .int(2, |c, n| c.number = n)
//!     .text(3, |c, v| c.last = v.to_string());
//!
//! let re = Pattern::new(r"(\w+) (.*) (\w+)").unwrap();
//! let contact = re.map_first("Sam 123 Deane", &map).unwrap().unwrap();
//! assert_eq!(contact.first, "Sam");
//! assert_eq!(contact.number, 123);
//! assert_eq!(contact.last, "Deane");
//! ```
//!
//! Types that register their fields by group name via [`NamedFields`] can
//! be filled from any pattern that declares matching named groups:
//!
//! ```rust
//! use regroup::prelude::*;
//!
//! #[derive(Default)]
//! struct Contact {
//!     first: String,
//!     last: String,
//! }
//!
//! impl NamedFields for Contact {
//!     fn named_fields() -> FieldMap<Self> {
//!         FieldMap::new()
//!             .text_named("first", |c: &mut Contact, v| c.first = v.to_string())
//!             .text_named("last", |c, v| c.last = v.to_string())
//!     }
//! }
//!
//! let re = Pattern::new(r"(?<first>\w+) (?<last>\w+)").unwrap();
//! let contact: Contact = re.map_first_named("John Doe").unwrap();
//! assert_eq!(contact.first, "John");
//! assert_eq!(contact.last, "Doe");
//! ```
//!
//! ## Substituting every match
//!
//! The callback computes a fresh replacement for each match. Splices are
//! applied rightmost first, so replacements of a different length never
//! invalidate the ranges still waiting to be spliced:
//!
//! ```rust
//! use regroup::prelude::*;
//!
//! let re = Pattern::new(r"\d+").unwrap();
//! let result = re.substitute("40 and 20", |_, m| {
//!     let n = lenient_int(m.value());
//!     format!("half of {} is {}", n, n / 2)
//! });
//! assert_eq!(result, "half of 40 is 20 and half of 20 is 10");
//! ```

pub mod error;
pub mod map;
pub mod pattern;
pub mod prelude;
pub mod subst;

pub use crate::error::Error;
pub use crate::map::{lenient_int, FieldMap, NamedFields, Slot};
pub use crate::pattern::{Capture, Match, Matches, Options, Pattern, PatternBuilder};
pub use crate::subst::substitute;
