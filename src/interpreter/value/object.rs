use std::{
    cell::RefCell,
    collections::{BTreeMap, HashMap},
    fmt,
    rc::Rc,
};

use crate::interpreter::{evaluator::core::NativeFn, value::core::Value};

/// A host-defined class: a name and a table of native methods.
///
/// Methods are keyed by name and arity, not counting the receiver. A method
/// receives the receiver as its first argument.
#[derive(Clone)]
pub struct Class {
    name:    String,
    methods: HashMap<(String, usize), NativeFn>,
}

impl Class {
    /// Creates a class without methods.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name:    name.into(),
               methods: HashMap::new(), }
    }

    /// Adds a native method taking `arity` arguments besides the receiver.
    #[must_use]
    pub fn with_method(mut self, name: &str, arity: usize, method: NativeFn) -> Self {
        self.methods.insert((name.to_string(), arity), method);
        self
    }

    /// The class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut methods: Vec<_> = self.methods.keys().collect();
        methods.sort();
        f.debug_struct("Class")
         .field("name", &self.name)
         .field("methods", &methods)
         .finish()
    }
}

/// An instance of a [`Class`] owning a mutable field map.
///
/// # Example
/// ```
/// use std::rc::Rc;
///
/// use plc::interpreter::value::{
///     core::Value,
///     object::{Class, Object},
/// };
///
/// let point = Object::new(Rc::new(Class::new("Point")), [("x", Value::from(1))]);
///
/// assert!(point.set_field("x", Value::from(5)));
/// assert!(!point.set_field("y", Value::from(5)));
/// assert_eq!(point.field("x"), Some(Value::from(5)));
/// ```
pub struct Object {
    class:  Rc<Class>,
    fields: RefCell<BTreeMap<String, Value>>,
}

impl Object {
    /// Creates an instance with the given initial fields.
    pub fn new<'a>(class: Rc<Class>, fields: impl IntoIterator<Item = (&'a str, Value)>) -> Self {
        let fields = fields.into_iter()
                           .map(|(name, value)| (name.to_string(), value))
                           .collect();
        Self { class,
               fields: RefCell::new(fields) }
    }

    /// Name of the instance's class.
    #[must_use]
    pub fn class_name(&self) -> &str {
        self.class.name()
    }

    /// Current value of field `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<Value> {
        self.fields.borrow().get(name).cloned()
    }

    /// Replaces the value of an existing field.
    ///
    /// # Returns
    /// `false` if the instance has no such field; fields are never added by
    /// assignment.
    #[must_use]
    pub fn set_field(&self, name: &str, value: Value) -> bool {
        match self.fields.borrow_mut().get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            },
            None => false,
        }
    }

    /// The native method `name` taking `arity` arguments besides the receiver.
    #[must_use]
    pub fn method(&self, name: &str, arity: usize) -> Option<NativeFn> {
        self.class.methods.get(&(name.to_string(), arity)).cloned()
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.class.name == other.class.name && *self.fields.borrow() == *other.fields.borrow()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
         .field("class", &self.class.name)
         .field("fields", &self.fields.borrow())
         .finish()
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.class.name)?;
        for (i, (name, value)) in self.fields.borrow().iter().enumerate() {
            let separator = if i == 0 { " " } else { ", " };
            write!(f, "{separator}{name}: {value}")?;
        }
        write!(f, " }}")
    }
}
