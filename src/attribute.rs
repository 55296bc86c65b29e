use chrono::{DateTime, SecondsFormat, Utc};
use itertools::Itertools;
use std::fmt;

/// Timestamps carried by EC2 shapes (launch times, reservation windows, ...).
pub type Timestamp = DateTime<Utc>;

/// A value that can sit in one attribute of an EC2 shape.
///
/// Every shape stores its attributes as `Option<A>` for some `A: Attribute`;
/// the trait supplies what the getters, `hash_code` and `Display` need from
/// the stored value.
pub trait Attribute {
    /// What a getter hands out: a copy for plain scalars, a borrow otherwise.
    type View<'a>
    where
        Self: 'a;

    fn view(&self) -> Self::View<'_>;

    /// Contribution of this value to the owning shape's `hash_code`.
    fn attribute_hash(&self) -> i32;

    /// Writes the value the way it appears in the owning shape's `Display`.
    fn fmt_attribute(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// What the `set_*` setter of a single-valued attribute accepts: `None` to
/// clear it, `Some(value)`, or a bare value. Enumerated strings also take
/// their raw text.
pub trait Assign<T> {
    fn assign(self) -> Option<T>;
}

impl<T> Assign<T> for Option<T> {
    fn assign(self) -> Option<T> {
        self
    }
}

impl Assign<String> for String {
    fn assign(self) -> Option<String> {
        Some(self)
    }
}

impl Assign<String> for &str {
    fn assign(self) -> Option<String> {
        Some(self.to_string())
    }
}

/// Polynomial hash over UTF-16 code units, the classic string value hash.
pub fn string_hash(s: &str) -> i32 {
    s.encode_utf16().fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32))
}

fn fold_i64(value: i64) -> i32 {
    (value ^ ((value as u64) >> 32) as i64) as i32
}

/// One step of a shape's `hash_code`: `31 * hash + attribute`, zero when absent.
pub fn combine<A: Attribute>(hash: i32, value: Option<&A>) -> i32 {
    hash.wrapping_mul(31).wrapping_add(value.map_or(0, A::attribute_hash))
}

impl Attribute for String {
    type View<'a> = &'a str;

    fn view(&self) -> &str {
        self
    }

    fn attribute_hash(&self) -> i32 {
        string_hash(self)
    }

    fn fmt_attribute(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl Attribute for bool {
    type View<'a> = bool;

    fn view(&self) -> bool {
        *self
    }

    fn attribute_hash(&self) -> i32 {
        if *self {
            1231
        } else {
            1237
        }
    }

    fn fmt_attribute(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Attribute for i32 {
    type View<'a> = i32;

    fn view(&self) -> i32 {
        *self
    }

    fn attribute_hash(&self) -> i32 {
        *self
    }

    fn fmt_attribute(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Attribute for i64 {
    type View<'a> = i64;

    fn view(&self) -> i64 {
        *self
    }

    fn attribute_hash(&self) -> i32 {
        fold_i64(*self)
    }

    fn fmt_attribute(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

// `0.0 == -0.0`, so both zeros must hash alike.
impl Attribute for f32 {
    type View<'a> = f32;

    fn view(&self) -> f32 {
        *self
    }

    fn attribute_hash(&self) -> i32 {
        if *self == 0.0 {
            0
        } else {
            self.to_bits() as i32
        }
    }

    fn fmt_attribute(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Attribute for f64 {
    type View<'a> = f64;

    fn view(&self) -> f64 {
        *self
    }

    fn attribute_hash(&self) -> i32 {
        if *self == 0.0 {
            0
        } else {
            fold_i64(self.to_bits() as i64)
        }
    }

    fn fmt_attribute(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Attribute for Timestamp {
    type View<'a> = Timestamp;

    fn view(&self) -> Timestamp {
        *self
    }

    fn attribute_hash(&self) -> i32 {
        fold_i64(self.timestamp_millis())
    }

    fn fmt_attribute(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

impl<T: Attribute> Attribute for Vec<T> {
    type View<'a> = &'a [T] where Self: 'a;

    fn view(&self) -> &[T] {
        self
    }

    fn attribute_hash(&self) -> i32 {
        self.iter().fold(1i32, |hash, item| {
            hash.wrapping_mul(31).wrapping_add(item.attribute_hash())
        })
    }

    fn fmt_attribute(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().format_with(", ", |item, g| g(&Shown(item))))
    }
}

/// `Display` adapter over [`Attribute::fmt_attribute`].
pub struct Shown<'a, A>(pub &'a A);

impl<A: Attribute> fmt::Display for Shown<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_attribute(f)
    }
}

/// Writes `{Name: value, Name: value}`, skipping absent attributes.
pub struct Fields<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    empty: bool,
}

impl<'a, 'b> Fields<'a, 'b> {
    pub fn start(f: &'a mut fmt::Formatter<'b>) -> Result<Self, fmt::Error> {
        f.write_str("{")?;
        Ok(Fields { f, empty: true })
    }

    pub fn entry<A: Attribute>(&mut self, name: &str, value: Option<&A>) -> fmt::Result {
        let Some(value) = value else {
            return Ok(());
        };
        if !self.empty {
            self.f.write_str(", ")?;
        }
        self.empty = false;
        write!(self.f, "{name}: ")?;
        value.fmt_attribute(self.f)
    }

    pub fn finish(self) -> fmt::Result {
        self.f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn string_hash_matches_value_hash() {
        assert_eq!(string_hash(""), 0);
        assert_eq!(string_hash("a"), 97);
        assert_eq!(string_hash("hello"), 99162322);
    }

    #[test]
    fn scalar_hashes() {
        assert_eq!(true.attribute_hash(), 1231);
        assert_eq!(false.attribute_hash(), 1237);
        assert_eq!(42i32.attribute_hash(), 42);
        assert_eq!((1i64 << 32).attribute_hash(), 1);
        assert_eq!((-1i64).attribute_hash(), 0);
    }

    #[test]
    fn signed_zeros_hash_alike() {
        assert_eq!((-0.0f32).attribute_hash(), 0.0f32.attribute_hash());
        assert_eq!((-0.0f64).attribute_hash(), 0.0f64.attribute_hash());
        assert_ne!(1.5f32.attribute_hash(), 0);
    }

    #[test]
    fn list_hash_starts_from_one() {
        assert_eq!(Vec::<String>::new().attribute_hash(), 1);
        assert_eq!(vec!["a".to_string()].attribute_hash(), 31 + 97);
    }

    #[test]
    fn timestamp_hash_and_display() {
        let ts = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(Shown(&ts).to_string(), "2020-01-02T03:04:05Z");
        let one_second = Utc.timestamp_millis_opt(1000).unwrap();
        assert_eq!(one_second.attribute_hash(), 1000);
    }

    #[test]
    fn list_display() {
        let ids = vec!["ami-1".to_string(), "ami-2".to_string()];
        assert_eq!(Shown(&ids).to_string(), "[ami-1, ami-2]");
        assert_eq!(Shown(&Vec::<i32>::new()).to_string(), "[]");
    }

    #[test]
    fn views() {
        let name = "web".to_string();
        assert_eq!(name.view(), "web");
        assert!(true.view());
        assert_eq!(vec![1i32, 2].view(), [1, 2]);
    }
}
