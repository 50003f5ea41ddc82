//! Call argument model for localized string lookups
//!
//! A lookup call carries the dictionary key plus an ordered list of values.
//! Each value is either a scalar (substituted positionally or anonymously)
//! or a named-argument map (substituted by placeholder name). For variant
//! entries the first value doubles as the conditional/plural selector.

use std::collections::BTreeMap;
use std::fmt;

/// Scalar argument value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// String value
    Str(String),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Bool(bool),
}

impl Scalar {
    /// Whether this value satisfies the `zero` variant tag (numeric zero only)
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Int(n) => *n == 0,
            Self::Float(f) => *f == 0.0,
            _ => false,
        }
    }

    /// Whether this value satisfies the `one` variant tag (numeric one only)
    pub fn is_one(&self) -> bool {
        match self {
            Self::Int(n) => *n == 1,
            Self::Float(f) => *f == 1.0,
            _ => false,
        }
    }

    /// Truthiness backing the `true`/`false` variant tags
    ///
    /// `false`, `0`, `0.0`, and the empty string are falsy; everything else
    /// is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Str(s) => !s.is_empty(),
            Self::Int(n) => *n != 0,
            Self::Float(f) => *f != 0.0,
            Self::Bool(b) => *b,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{}", s),
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(v) => write!(f, "{}", v),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A single call argument: a positional scalar or a named-argument map
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Scalar substitution value
    Value(Scalar),
    /// Named-argument map: placeholder name to value
    Named(BTreeMap<String, Scalar>),
}

impl Arg {
    /// Whether this argument satisfies the `zero` variant tag
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Value(scalar) => scalar.is_zero(),
            Self::Named(_) => false,
        }
    }

    /// Whether this argument satisfies the `one` variant tag
    pub fn is_one(&self) -> bool {
        match self {
            Self::Value(scalar) => scalar.is_one(),
            Self::Named(_) => false,
        }
    }

    /// Truthiness of this argument; named maps are always truthy
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Value(scalar) => scalar.is_truthy(),
            Self::Named(_) => true,
        }
    }
}

impl From<Scalar> for Arg {
    fn from(value: Scalar) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Value(value.into())
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Self::Value(value.into())
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}

impl From<u32> for Arg {
    fn from(value: u32) -> Self {
        Self::Value(value.into())
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Self::Value(value.into())
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Self::Value(value.into())
    }
}

impl From<BTreeMap<String, Scalar>> for Arg {
    fn from(map: BTreeMap<String, Scalar>) -> Self {
        Self::Named(map)
    }
}

/// Ordered argument sequence for a lookup: the dictionary key plus call values
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CallArgs {
    key: String,
    values: Vec<Arg>,
}

impl CallArgs {
    /// Create arguments for a bare key lookup
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            values: Vec::new(),
        }
    }

    /// Append a call value
    pub fn push(&mut self, value: impl Into<Arg>) {
        self.values.push(value.into());
    }

    /// Append a call value, builder style
    #[must_use]
    pub fn arg(mut self, value: impl Into<Arg>) -> Self {
        self.push(value);
        self
    }

    /// The dictionary lookup key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// All call values in order
    pub fn values(&self) -> &[Arg] {
        &self.values
    }

    /// The conditional/plural selector: the first call value, if any
    pub fn selector(&self) -> Option<&Arg> {
        self.values.first()
    }

    /// Call values after the consumed selector (conditional mode)
    pub fn values_after_selector(&self) -> &[Arg] {
        if self.values.is_empty() {
            &[]
        } else {
            &self.values[1..]
        }
    }
}

/// Macro to build [`CallArgs`] the way a templating call site would
///
/// ```
/// use lexis_i18n::{call_args, named_args};
///
/// let plain = call_args!["greeting"];
/// let plural = call_args!["cart.items", 3, 3];
/// let named = call_args!["welcome", named_args! { "name" => "Ana" }];
/// # let _ = (plain, plural, named);
/// ```
#[macro_export]
macro_rules! call_args {
    ($key:expr $(,)?) => {
        $crate::CallArgs::new($key)
    };
    ($key:expr, $($value:expr),+ $(,)?) => {{
        let mut args = $crate::CallArgs::new($key);
        $(
            args.push($value);
        )+
        args
    }};
}

/// Macro to build a named-argument map value
#[macro_export]
macro_rules! named_args {
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut map = ::std::collections::BTreeMap::new();
        $(
            map.insert(::std::string::String::from($name), $crate::Scalar::from($value));
        )+
        $crate::Arg::Named(map)
    }};
}
