use crate::object::Object;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

#[derive(Default)]
struct Scope {
    store: HashMap<String, Object>,
    outer: Option<Environment>,
}

/// A shared handle to one scope in a chain of scopes. Cloning the handle
/// shares the scope: a function literal keeps the scope it was evaluated in
/// alive for as long as the function value is reachable.
#[derive(Default, Clone)]
pub struct Environment {
    scope: Rc<RefCell<Scope>>,
}

impl Environment {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_enclosed(outer: &Environment) -> Self {
        Self {
            scope: Rc::new(RefCell::new(Scope {
                store: HashMap::new(),
                outer: Some(outer.clone()),
            })),
        }
    }

    /// Looks `name` up here, then in each enclosing scope in turn.
    pub fn get(&self, name: &str) -> Option<Object> {
        let scope = self.scope.borrow();
        match scope.store.get(name) {
            Some(obj) => Some(obj.clone()),
            None => scope.outer.as_ref().and_then(|outer| outer.get(name)),
        }
    }

    /// Binds in this scope only; an outer binding of the same name is
    /// shadowed, never overwritten.
    pub fn set(&self, name: &str, val: Object) {
        self.scope.borrow_mut().store.insert(name.to_owned(), val);
    }

    pub fn ptr_eq(&self, other: &Environment) -> bool {
        Rc::ptr_eq(&self.scope, &other.scope)
    }
}

// Closures stored in a scope usually point back at that scope, so printing the
// whole chain would never terminate.
impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let scope = self.scope.borrow();
        let mut names: Vec<&String> = scope.store.keys().collect();
        names.sort();

        f.debug_struct("Environment")
            .field("names", &names)
            .field("enclosed", &scope.outer.is_some())
            .finish()
    }
}
