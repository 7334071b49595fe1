use crate::object::*;
use lazy_static::lazy_static;
use log::trace;
use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};

type BuiltinFn = fn(Vec<Object>) -> Result<Object>;

/// A host function exposed to programs under a fixed name.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    func: BuiltinFn,
}

impl Builtin {
    pub fn call(&self, args: Vec<Object>) -> Result<Object> {
        trace!("calling builtin {} with {} arguments", self.name, args.len());
        (self.func)(args)
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Debug for Builtin {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

fn check_arity(args: &[Object], want: usize) -> Result<()> {
    if args.len() == want {
        Ok(())
    } else {
        Err(EvalError::IncorrectArity {
            got: args.len(),
            want,
        })
    }
}

fn single_arg(args: Vec<Object>) -> Result<Object> {
    check_arity(&args, 1)?;
    Ok(args.into_iter().next().unwrap_or_default())
}

fn len(args: Vec<Object>) -> Result<Object> {
    match single_arg(args)? {
        Object::String(s) => Ok(Object::Integer(s.chars().count() as i64)),
        Object::Array(a) => Ok(Object::Integer(a.len() as i64)),
        obj => Err(EvalError::UnsupportedArgType {
            fn_name: "len",
            type_name: obj.type_name(),
        }),
    }
}

fn first(args: Vec<Object>) -> Result<Object> {
    match single_arg(args)? {
        Object::Array(a) => Ok(a.into_iter().next().unwrap_or_default()),
        obj => Err(EvalError::UnsupportedArgType {
            fn_name: "first",
            type_name: obj.type_name(),
        }),
    }
}

fn last(args: Vec<Object>) -> Result<Object> {
    match single_arg(args)? {
        Object::Array(a) => Ok(a.into_iter().last().unwrap_or_default()),
        obj => Err(EvalError::UnsupportedArgType {
            fn_name: "last",
            type_name: obj.type_name(),
        }),
    }
}

fn rest(args: Vec<Object>) -> Result<Object> {
    match single_arg(args)? {
        Object::Array(a) => Ok(Object::Array(a.into_iter().skip(1).collect())),
        obj => Err(EvalError::UnsupportedArgType {
            fn_name: "rest",
            type_name: obj.type_name(),
        }),
    }
}

fn push(args: Vec<Object>) -> Result<Object> {
    check_arity(&args, 2)?;

    let mut args = args.into_iter();
    match (args.next().unwrap_or_default(), args.next().unwrap_or_default()) {
        (Object::Array(mut a), value) => {
            a.push(value);
            Ok(Object::Array(a))
        }
        (obj, value) => Err(EvalError::UnsupportedArgTypes {
            fn_name: "push",
            first: obj.type_name(),
            second: value.type_name(),
        }),
    }
}

fn puts(args: Vec<Object>) -> Result<Object> {
    for arg in args.iter() {
        println!("{}", arg);
    }
    Ok(Object::Null)
}

lazy_static! {
    pub static ref BUILTINS: HashMap<&'static str, Builtin> = {
        let table: [(&'static str, BuiltinFn); 6] = [
            ("len", len),
            ("first", first),
            ("last", last),
            ("rest", rest),
            ("push", push),
            ("puts", puts),
        ];
        table
            .iter()
            .map(|&(name, func)| (name, Builtin { name, func }))
            .collect()
    };
}

pub fn lookup(name: &str) -> Option<Object> {
    BUILTINS.get(name).copied().map(Object::Builtin)
}

#[cfg(test)]
mod test {
    use super::*;

    fn call(name: &str, args: Vec<Object>) -> Result<Object> {
        BUILTINS[name].call(args)
    }

    fn array(elements: &[i64]) -> Object {
        elements.iter().map(|&n| Object::Integer(n)).collect::<Vec<_>>().into()
    }

    #[test]
    fn test_len() {
        assert_eq!(call("len", vec!["".into()]), Ok(0.into()));
        assert_eq!(call("len", vec!["four".into()]), Ok(4.into()));
        assert_eq!(call("len", vec!["héllo".into()]), Ok(5.into()));
        assert_eq!(call("len", vec![array(&[1, 2, 3])]), Ok(3.into()));
        assert_eq!(
            call("len", vec![1.into()]).unwrap_err().to_string(),
            "argument to `len` not supported, got INTEGER"
        );
        assert_eq!(
            call("len", vec!["one".into(), "two".into()])
                .unwrap_err()
                .to_string(),
            "wrong number of arguments. got=2, want=1"
        );
    }

    #[test]
    fn test_array_accessors() {
        assert_eq!(call("first", vec![array(&[1, 2, 3])]), Ok(1.into()));
        assert_eq!(call("first", vec![array(&[])]), Ok(Object::Null));
        assert_eq!(call("last", vec![array(&[1, 2, 3])]), Ok(3.into()));
        assert_eq!(call("last", vec![array(&[])]), Ok(Object::Null));
        assert_eq!(call("rest", vec![array(&[1, 2, 3])]), Ok(array(&[2, 3])));
        assert_eq!(call("rest", vec![array(&[])]), Ok(array(&[])));
        assert_eq!(
            call("first", vec![1.into()]).unwrap_err().to_string(),
            "argument to `first` not supported, got INTEGER"
        );
        assert_eq!(
            call("last", vec!["x".into()]).unwrap_err().to_string(),
            "argument to `last` not supported, got STRING"
        );
        assert_eq!(
            call("rest", vec![Object::Null]).unwrap_err().to_string(),
            "argument to `rest` not supported, got NULL"
        );
    }

    #[test]
    fn test_push() {
        assert_eq!(call("push", vec![array(&[]), 1.into()]), Ok(array(&[1])));
        assert_eq!(
            call("push", vec![array(&[1]), "two".into()]),
            Ok(Object::Array(vec![1.into(), "two".into()]))
        );
        assert_eq!(
            call("push", vec![1.into(), 1.into()])
                .unwrap_err()
                .to_string(),
            "argument to `push` not supported, got INTEGER, INTEGER"
        );
    }

    // Reports the real arity of two rather than the historical `want=1`.
    #[test]
    fn test_push_arity_message() {
        assert_eq!(
            call("push", vec![array(&[])]).unwrap_err().to_string(),
            "wrong number of arguments. got=1, want=2"
        );
    }

    #[test]
    fn test_puts_returns_null() {
        assert_eq!(call("puts", vec![]), Ok(Object::Null));
        assert_eq!(call("puts", vec!["hello".into(), 1.into()]), Ok(Object::Null));
    }

    #[test]
    fn test_lookup() {
        assert!(matches!(lookup("len"), Some(Object::Builtin(b)) if b.name == "len"));
        assert_eq!(lookup("nope"), None);
    }
}
