// map.rs - Capture mapper: write capture slots into result-value fields.
//
// A FieldMap is a registered accessor table: each entry pairs a capture
// slot (numbered or named) with a setter closure over the result type.
// This replaces the runtime reflection the idea comes from with a table
// the caller builds once per result type.

use crate::error::Error;
use crate::pattern::{Match, Pattern};

/// A capture slot reference: a numbered group or a declared group name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// Numbered slot; 0 is the whole match, 1..=N the parenthesized groups.
    Index(usize),
    /// Named slot, matched case-sensitively against declared group names.
    Name(String),
}

enum Writer<T> {
    Text(Box<dyn Fn(&mut T, &str)>),
    Int(Box<dyn Fn(&mut T, i64)>),
}

/// A table mapping capture slots to fields of a result value `T`.
///
/// Built fluently, once per result type, and reused across calls:
///
/// ```
/// use regroup::{FieldMap, Pattern};
///
/// #[derive(Default)]
/// struct Contact {
///     first: String,
///     last: String,
///     number: i64,
/// }
///
/// let map = FieldMap::new()
///     .text(1, |c: &mut Contact, v| c.first = v.to_string())
///     .int(2, |c, n| c.number = n)
///     .text(3, |c, v| c.last = v.to_string());
///
/// let re = Pattern::new(r"(\w+) (.*) (\w+)").unwrap();
/// let contact = re.map_first("Sam 123 Deane", &map).unwrap().unwrap();
/// assert_eq!(contact.first, "Sam");
/// assert_eq!(contact.number, 123);
/// assert_eq!(contact.last, "Deane");
/// ```
///
/// Integer fields use [`lenient_int`] to decode the captured text.
pub struct FieldMap<T> {
    entries: Vec<(Slot, Writer<T>)>,
}

impl<T> FieldMap<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        FieldMap {
            entries: Vec::new(),
        }
    }

    /// Map numbered slot `group` to a string field via `set`.
    pub fn text(mut self, group: usize, set: impl Fn(&mut T, &str) + 'static) -> Self {
        self.entries
            .push((Slot::Index(group), Writer::Text(Box::new(set))));
        self
    }

    /// Map numbered slot `group` to an integer field via `set`.
    pub fn int(mut self, group: usize, set: impl Fn(&mut T, i64) + 'static) -> Self {
        self.entries
            .push((Slot::Index(group), Writer::Int(Box::new(set))));
        self
    }

    /// Map the named slot `name` to a string field via `set`.
    pub fn text_named(mut self, name: &str, set: impl Fn(&mut T, &str) + 'static) -> Self {
        self.entries
            .push((Slot::Name(name.to_string()), Writer::Text(Box::new(set))));
        self
    }

    /// Map the named slot `name` to an integer field via `set`.
    pub fn int_named(mut self, name: &str, set: impl Fn(&mut T, i64) + 'static) -> Self {
        self.entries
            .push((Slot::Name(name.to_string()), Writer::Int(Box::new(set))));
        self
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve every slot against `pattern`, failing fast on the first
    /// out-of-range index or undeclared name.
    fn resolve(&self, pattern: &Pattern) -> Result<Vec<usize>, Error> {
        let groups = pattern.group_count();
        self.entries
            .iter()
            .map(|(slot, _)| match slot {
                Slot::Index(index) if *index <= groups => Ok(*index),
                Slot::Index(index) => Err(Error::GroupOutOfRange {
                    index: *index,
                    len: groups,
                }),
                Slot::Name(name) => pattern.group_index(name).ok_or_else(|| Error::UnknownGroup {
                    name: name.clone(),
                }),
            })
            .collect()
    }

    /// Write every entry whose resolved slot participated in `m`.
    /// Non-participating slots leave their field untouched.
    fn write(&self, resolved: &[usize], m: &Match<'_>, into: &mut T) {
        for ((_, writer), &index) in self.entries.iter().zip(resolved) {
            if let Some(cap) = m.get(index) {
                match writer {
                    Writer::Text(set) => set(into, cap.as_str()),
                    Writer::Int(set) => set(into, lenient_int(cap.as_str())),
                }
            }
        }
    }

    /// Probing write: entries whose slot the pattern does not declare are
    /// skipped silently, as are slots that did not participate in `m`.
    fn write_probing(&self, pattern: &Pattern, m: &Match<'_>, into: &mut T) {
        let groups = pattern.group_count();
        for (slot, writer) in &self.entries {
            let index = match slot {
                Slot::Index(index) if *index <= groups => *index,
                Slot::Index(_) => continue,
                Slot::Name(name) => match pattern.group_index(name) {
                    Some(index) => index,
                    None => continue,
                },
            };
            if let Some(cap) = m.get(index) {
                match writer {
                    Writer::Text(set) => set(into, cap.as_str()),
                    Writer::Int(set) => set(into, lenient_int(cap.as_str())),
                }
            }
        }
    }
}

impl<T> Default for FieldMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A result type that registers its fields by capture-group name.
///
/// The named-probe entry points ([`Pattern::map_first_named`] and
/// [`Pattern::map_first_named_into`]) probe every registered field against
/// the pattern's declared group names: an exact, case-sensitive name match
/// fills the field, anything else leaves it at its default/prior value.
pub trait NamedFields: Sized {
    /// The field table for this type; entries are expected to use named
    /// slots ([`FieldMap::text_named`] / [`FieldMap::int_named`]).
    fn named_fields() -> FieldMap<Self>;
}

impl Pattern {
    /// Find the first match in `text` and build a fresh `T` from it using
    /// the field table `map`.
    ///
    /// The table is validated against the pattern before matching: an
    /// out-of-range index or undeclared name is an `Err` even when the
    /// text would not have matched. No match is `Ok(None)`. On a match,
    /// every entry whose slot participated is written; a slot that did
    /// not participate leaves the field at its `Default` value.
    pub fn map_first<T: Default>(&self, text: &str, map: &FieldMap<T>) -> Result<Option<T>, Error> {
        let resolved = map.resolve(self)?;
        match self.first_match(text) {
            Some(m) => {
                let mut result = T::default();
                map.write(&resolved, &m, &mut result);
                Ok(Some(result))
            }
            None => Ok(None),
        }
    }

    /// Find the first match in `text` and fill the caller's `into` value
    /// using the field table `map`.
    ///
    /// Returns `Ok(false)` without touching `into` at all when the pattern
    /// does not match (all-or-nothing: no partial writes on a failed
    /// match). Table validation behaves as in [`Pattern::map_first`].
    pub fn map_first_into<T>(
        &self,
        text: &str,
        map: &FieldMap<T>,
        into: &mut T,
    ) -> Result<bool, Error> {
        let resolved = map.resolve(self)?;
        match self.first_match(text) {
            Some(m) => {
                map.write(&resolved, &m, into);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Find the first match in `text` and build a fresh `T`, probing its
    /// registered fields against the pattern's named groups.
    ///
    /// Discovery-based: fields whose name the pattern does not declare
    /// keep their default value, with no error. A declared group that did
    /// not participate in this particular match also skips its field.
    pub fn map_first_named<T: NamedFields + Default>(&self, text: &str) -> Option<T> {
        let mut result = T::default();
        if self.map_first_named_into(text, &mut result) {
            Some(result)
        } else {
            None
        }
    }

    /// Find the first match in `text` and fill the caller's `into` value,
    /// probing its registered fields against the pattern's named groups.
    ///
    /// Returns `false` without touching `into` when the pattern does not
    /// match. Probing semantics are as in [`Pattern::map_first_named`].
    pub fn map_first_named_into<T: NamedFields>(&self, text: &str, into: &mut T) -> bool {
        let map = T::named_fields();
        match self.first_match(text) {
            Some(m) => {
                map.write_probing(self, &m, into);
                true
            }
            None => false,
        }
    }
}

/// Permissive decimal decode of captured text, mirroring the platform
/// string-to-integer conversions this crate's API descends from.
///
/// Leading whitespace is skipped, an optional `+`/`-` sign is honored, and
/// leading decimal digits are consumed up to the first non-digit. Text with
/// no leading digits decodes to 0. Values beyond the `i64` range saturate
/// at `i64::MIN`/`i64::MAX`. This is a deliberate, documented policy: a
/// mapper invocation never fails because captured text is non-numeric.
pub fn lenient_int(text: &str) -> i64 {
    let rest = text.trim_start();
    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let mut value: i64 = 0;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        let digit = i64::from(b - b'0');
        value = match value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
            Some(v) => v,
            None => return if negative { i64::MIN } else { i64::MAX },
        };
    }
    if negative {
        -value
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_int_plain() {
        assert_eq!(lenient_int("123"), 123);
        assert_eq!(lenient_int("0"), 0);
    }

    #[test]
    fn lenient_int_signs() {
        assert_eq!(lenient_int("-7"), -7);
        assert_eq!(lenient_int("+9"), 9);
    }

    #[test]
    fn lenient_int_leading_whitespace() {
        assert_eq!(lenient_int("  42"), 42);
        assert_eq!(lenient_int("\t-3"), -3);
    }

    #[test]
    fn lenient_int_trailing_garbage() {
        assert_eq!(lenient_int("42abc"), 42);
        assert_eq!(lenient_int("12.5"), 12);
    }

    #[test]
    fn lenient_int_no_digits() {
        assert_eq!(lenient_int("abc"), 0);
        assert_eq!(lenient_int(""), 0);
        assert_eq!(lenient_int("-"), 0);
        assert_eq!(lenient_int("+"), 0);
    }

    #[test]
    fn lenient_int_saturates() {
        assert_eq!(lenient_int("99999999999999999999"), i64::MAX);
        assert_eq!(lenient_int("-99999999999999999999"), i64::MIN);
        assert_eq!(lenient_int("9223372036854775807"), i64::MAX);
        assert_eq!(lenient_int("-9223372036854775808"), i64::MIN);
    }

    #[test]
    fn field_map_len() {
        let map: FieldMap<(String, i64)> = FieldMap::new()
            .text(1, |t: &mut (String, i64), v| t.0 = v.to_string())
            .int(2, |t, n| t.1 = n);
        assert_eq!(map.len(), 2);
        assert!(!map.is_empty());
        assert!(FieldMap::<u8>::new().is_empty());
    }

    #[test]
    fn resolve_rejects_out_of_range_index() {
        let re = Pattern::new(r"(\w+) (\w+)").unwrap();
        let map: FieldMap<String> = FieldMap::new().text(3, |t, v| *t = v.to_string());
        let err = re.map_first("a b", &map).unwrap_err();
        assert!(matches!(err, Error::GroupOutOfRange { index: 3, len: 2 }));
    }

    #[test]
    fn resolve_rejects_unknown_name() {
        let re = Pattern::new(r"(?<first>\w+)").unwrap();
        let map: FieldMap<String> = FieldMap::new().text_named("last", |t, v| *t = v.to_string());
        let err = re.map_first("Sam", &map).unwrap_err();
        assert!(matches!(err, Error::UnknownGroup { .. }));
    }

    #[test]
    fn configuration_error_beats_no_match() {
        // Validation happens before the match attempt, so a bad table is
        // an error even for text the pattern would not match.
        let re = Pattern::new(r"(\d+)").unwrap();
        let map: FieldMap<i64> = FieldMap::new().int(2, |t, n| *t = n);
        assert!(re.map_first("no digits", &map).is_err());
    }

    #[test]
    fn whole_match_slot_is_mappable() {
        let re = Pattern::new(r"\d+").unwrap();
        let map: FieldMap<String> = FieldMap::new().text(0, |t, v| *t = v.to_string());
        let value = re.map_first("answer 42", &map).unwrap().unwrap();
        assert_eq!(value, "42");
    }
}
