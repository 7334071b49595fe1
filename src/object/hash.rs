use super::{EvalError, Object};
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The hashable subset of [`Object`]. Two keys are equal only when both the
/// variant and the value match, so `1` and `"1"` are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    String(String),
    Integer(i64),
    Boolean(bool),
}

impl Display for HashKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for HashKey {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<bool> for HashKey {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<&str> for HashKey {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl TryFrom<Object> for HashKey {
    type Error = EvalError;

    fn try_from(obj: Object) -> std::result::Result<Self, Self::Error> {
        match obj {
            Object::String(s) => Ok(Self::String(s)),
            Object::Integer(n) => Ok(Self::Integer(n)),
            Object::Boolean(b) => Ok(Self::Boolean(b)),
            o => Err(EvalError::NotHashable {
                type_name: o.type_name(),
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hashable_objects() {
        assert_eq!(HashKey::try_from(Object::from(5)), Ok(HashKey::Integer(5)));
        assert_eq!(
            HashKey::try_from(Object::from("name")),
            Ok(HashKey::from("name"))
        );
        assert_eq!(
            HashKey::try_from(Object::from(false)),
            Ok(HashKey::Boolean(false))
        );
        assert_ne!(HashKey::from(1), HashKey::from("1"));
    }

    #[test]
    fn test_unhashable_objects() {
        let cases = vec![
            (Object::Null, "unusable as hash key: NULL"),
            (Object::Array(vec![]), "unusable as hash key: ARRAY"),
            (Object::Hash(Default::default()), "unusable as hash key: HASH"),
        ];

        for (object, expected) in cases.into_iter() {
            let err = HashKey::try_from(object).unwrap_err();
            assert_eq!(err.to_string(), expected);
        }
    }
}
