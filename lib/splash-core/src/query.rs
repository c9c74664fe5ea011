//! Query parameters for endpoint descriptors.
//!
//! A [`Query`] is an ordered mapping from keys to scalar or array values.
//! Values may be undefined (`None`): they are kept in the mapping so that a
//! later `insert` can still override them, but [`ToQueryPairs`] never emits
//! them, not even as an empty string.

use crate::ToQueryPairs;

/// A single query value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// A scalar, serialized as `key=value`.
    Scalar(String),
    /// An array, serialized as one `key=item` pair per item.
    List(Vec<String>),
}

/// Conversion into an optional [`QueryValue`].
///
/// `None` means undefined.
pub trait IntoQueryValue {
    /// Converts `self` into a query value.
    fn into_query_value(self) -> Option<QueryValue>;
}

impl IntoQueryValue for QueryValue {
    fn into_query_value(self) -> Option<QueryValue> {
        Some(self)
    }
}

impl IntoQueryValue for String {
    fn into_query_value(self) -> Option<QueryValue> {
        Some(QueryValue::Scalar(self))
    }
}

impl IntoQueryValue for &str {
    fn into_query_value(self) -> Option<QueryValue> {
        Some(QueryValue::Scalar(self.to_string()))
    }
}

impl IntoQueryValue for &String {
    fn into_query_value(self) -> Option<QueryValue> {
        Some(QueryValue::Scalar(self.clone()))
    }
}

macro_rules! scalar_query_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoQueryValue for $ty {
                fn into_query_value(self) -> Option<QueryValue> {
                    Some(QueryValue::Scalar(self.to_string()))
                }
            }
        )*
    };
}

scalar_query_value!(bool, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

impl<T: ToString> IntoQueryValue for Vec<T> {
    fn into_query_value(self) -> Option<QueryValue> {
        Some(QueryValue::List(
            self.iter().map(ToString::to_string).collect(),
        ))
    }
}

impl<T: ToString> IntoQueryValue for &[T] {
    fn into_query_value(self) -> Option<QueryValue> {
        Some(QueryValue::List(
            self.iter().map(ToString::to_string).collect(),
        ))
    }
}

impl<T: IntoQueryValue> IntoQueryValue for Option<T> {
    fn into_query_value(self) -> Option<QueryValue> {
        self.and_then(IntoQueryValue::into_query_value)
    }
}

/// Ordered query mapping; undefined entries are dropped on serialization.
///
/// # Example
///
/// ```
/// use splash_core::{Query, ToQueryPairs};
///
/// let query = Query::new()
///     .with("page", 2)
///     .with("query", None::<String>);
///
/// assert_eq!(query.to_query_pairs(), vec![("page".to_string(), "2".to_string())]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    entries: Vec<(String, Option<QueryValue>)>,
}

impl Query {
    /// Creates an empty query.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets a key, replacing any previous value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl IntoQueryValue) {
        let key = key.into();
        let value = value.into_query_value();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style [`Query::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl IntoQueryValue) -> Self {
        self.insert(key, value);
        self
    }

    /// Value for a key, `None` when absent or undefined.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .and_then(|(_, value)| value.as_ref())
    }

    /// Returns `true` if no entry is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, value)| value.is_none())
    }
}

impl ToQueryPairs for Query {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (key, value) in &self.entries {
            match value {
                Some(QueryValue::Scalar(value)) => pairs.push((key.clone(), value.clone())),
                Some(QueryValue::List(items)) => {
                    pairs.extend(items.iter().map(|item| (key.clone(), item.clone())));
                }
                None => {}
            }
        }
        pairs
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: IntoQueryValue,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        for (key, value) in iter {
            query.insert(key, value);
        }
        query
    }
}
