use std::{cell::RefCell, collections::HashMap, rc::Rc};

use log::trace;

/// A lexical environment.
///
/// Scopes form a tree through their parent links. The analyzer instantiates
/// it with static bindings and signatures, the evaluator with runtime values
/// and callables; both nest scopes identically.
///
/// A child scope lives exactly as long as the [`Rc`] handle returned by
/// [`Scope::child`]. Blocks keep that handle in a local, so the scope is
/// released on every exit path, including `?` and early returns, and the
/// caller's own handle is never touched.
///
/// # Example
/// ```
/// use plc::interpreter::scope::Scope;
///
/// let globals = Scope::<i32, ()>::root();
/// assert!(globals.define_variable("x", 1));
///
/// {
///     let block = Scope::child(&globals);
///     assert!(block.define_variable("x", 2));
///     assert_eq!(block.lookup_variable("x"), Some(2));
/// }
///
/// assert_eq!(globals.lookup_variable("x"), Some(1));
/// ```
#[derive(Debug)]
pub struct Scope<V, F> {
    parent:    Option<Rc<Self>>,
    variables: RefCell<HashMap<String, V>>,
    functions: RefCell<HashMap<(String, usize), F>>,
}

impl<V, F> Scope<V, F>
    where V: Clone,
          F: Clone
{
    /// Creates a scope without a parent.
    #[must_use]
    pub fn root() -> Rc<Self> {
        Rc::new(Self { parent:    None,
                       variables: RefCell::new(HashMap::new()),
                       functions: RefCell::new(HashMap::new()), })
    }

    /// Creates an empty scope nested in `parent`.
    #[must_use]
    pub fn child(parent: &Rc<Self>) -> Rc<Self> {
        let scope = Self { parent:    Some(Rc::clone(parent)),
                           variables: RefCell::new(HashMap::new()),
                           functions: RefCell::new(HashMap::new()), };
        trace!("entering scope at depth {}", scope.depth());
        Rc::new(scope)
    }

    /// The enclosing scope, `None` for a root.
    #[must_use]
    pub fn parent(&self) -> Option<&Rc<Self>> {
        self.parent.as_ref()
    }

    /// Number of ancestors above this scope.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent.as_ref();
        while let Some(scope) = current {
            depth += 1;
            current = scope.parent.as_ref();
        }
        depth
    }

    /// Binds `name` in this scope.
    ///
    /// # Returns
    /// `false`, leaving the old binding in place, if this scope already
    /// binds `name`. Shadowing a binding of an ancestor succeeds.
    #[must_use]
    pub fn define_variable(&self, name: &str, value: V) -> bool {
        let mut variables = self.variables.borrow_mut();
        if variables.contains_key(name) {
            return false;
        }
        variables.insert(name.to_string(), value);
        true
    }

    /// Finds the nearest binding of `name`, walking up through ancestors.
    #[must_use]
    pub fn lookup_variable(&self, name: &str) -> Option<V> {
        if let Some(value) = self.variables.borrow().get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref()?.lookup_variable(name)
    }

    /// Replaces the nearest binding of `name`.
    ///
    /// # Returns
    /// `false` if no scope in the chain binds `name`; nothing is created.
    #[must_use]
    pub fn assign_variable(&self, name: &str, value: V) -> bool {
        if let Some(slot) = self.variables.borrow_mut().get_mut(name) {
            *slot = value;
            return true;
        }
        self.parent
            .as_ref()
            .is_some_and(|parent| parent.assign_variable(name, value))
    }

    /// Binds the function `name` taking `arity` arguments in this scope.
    ///
    /// # Returns
    /// `false` if this scope already binds the same name and arity.
    #[must_use]
    pub fn define_function(&self, name: &str, arity: usize, function: F) -> bool {
        let mut functions = self.functions.borrow_mut();
        let key = (name.to_string(), arity);
        if functions.contains_key(&key) {
            return false;
        }
        functions.insert(key, function);
        true
    }

    /// Finds the nearest function with this name and arity.
    #[must_use]
    pub fn lookup_function(&self, name: &str, arity: usize) -> Option<F> {
        if let Some(function) = self.functions.borrow().get(&(name.to_string(), arity)) {
            return Some(function.clone());
        }
        self.parent.as_ref()?.lookup_function(name, arity)
    }
}
