// prelude.rs - Convenient re-exports for the public API.
//
//! # Prelude
//!
//! ```
//! use regroup::prelude::*;
//!
//! let re = Pattern::new(r"\d+").unwrap();
//! let m = re.first_match("answer: 42").unwrap();
//! assert_eq!(m.value(), "42");
//! ```

pub use crate::error::Error;
pub use crate::map::{lenient_int, FieldMap, NamedFields, Slot};
pub use crate::pattern::{Capture, Match, Matches, Options, Pattern, PatternBuilder};
pub use crate::subst::substitute;
