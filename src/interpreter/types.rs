use std::{collections::BTreeMap, fmt, rc::Rc};

use crate::{ast::Literal, error::AnalysisError};

/// The representation a [`Type`] stands for.
///
/// `Any` and `Comparable` are capabilities rather than representations; they
/// only ever appear as targets of an assignability check or as the type of
/// something whose representation is unknown statically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Native {
    /// The `NIL` value.
    Nil,
    /// `TRUE` and `FALSE`.
    Boolean,
    /// Arbitrary-precision integers.
    Integer,
    /// Arbitrary-precision decimals.
    Decimal,
    /// Single characters.
    Character,
    /// Strings.
    String,
    /// Something `FOR` can iterate, yielding integers.
    IntegerIterable,
    /// Accepts every type.
    Any,
    /// Accepts integers, decimals, characters and strings.
    Comparable,
    /// A host-defined object type with a member table.
    Object,
}

/// Fields and methods of an object type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Members {
    /// Field name to field type.
    pub fields:  BTreeMap<String, Type>,
    /// `(name, arity)` to method signature. The arity excludes the receiver.
    pub methods: BTreeMap<(String, usize), Function>,
}

impl Members {
    /// Adds a field.
    #[must_use]
    pub fn field(mut self, name: &str, ty: Type) -> Self {
        self.fields.insert(name.to_string(), ty);
        self
    }

    /// Adds a method signature.
    #[must_use]
    pub fn method(mut self, function: Function) -> Self {
        self.methods.insert((function.name.clone(), function.arity()), function);
        self
    }
}

/// A static type descriptor: a name plus the representation it stands for.
///
/// Two descriptors are equal when both name and representation match, so
/// two distinct object types never compare equal.
#[derive(Debug, Clone)]
pub struct Type {
    name:    Rc<str>,
    native:  Native,
    members: Option<Rc<Members>>,
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.native == other.native && self.name == other.name
    }
}

impl Eq for Type {}

impl Type {
    fn native(name: &str, native: Native) -> Self {
        Self { name: Rc::from(name),
               native,
               members: None }
    }

    /// `Nil`
    #[must_use]
    pub fn nil() -> Self {
        Self::native("Nil", Native::Nil)
    }

    /// `Boolean`
    #[must_use]
    pub fn boolean() -> Self {
        Self::native("Boolean", Native::Boolean)
    }

    /// `Integer`
    #[must_use]
    pub fn integer() -> Self {
        Self::native("Integer", Native::Integer)
    }

    /// `Decimal`
    #[must_use]
    pub fn decimal() -> Self {
        Self::native("Decimal", Native::Decimal)
    }

    /// `Character`
    #[must_use]
    pub fn character() -> Self {
        Self::native("Character", Native::Character)
    }

    /// `String`
    #[must_use]
    pub fn string() -> Self {
        Self::native("String", Native::String)
    }

    /// `IntegerIterable`
    #[must_use]
    pub fn integer_iterable() -> Self {
        Self::native("IntegerIterable", Native::IntegerIterable)
    }

    /// `Any`
    #[must_use]
    pub fn any() -> Self {
        Self::native("Any", Native::Any)
    }

    /// `Comparable`
    #[must_use]
    pub fn comparable() -> Self {
        Self::native("Comparable", Native::Comparable)
    }

    /// An object type with the given members.
    ///
    /// # Example
    /// ```
    /// use plc::interpreter::types::{Members, Type};
    ///
    /// let point = Type::object("Point",
    ///                          Members::default().field("x", Type::integer())
    ///                                            .field("y", Type::integer()));
    ///
    /// assert_eq!(point.field("x"), Some(&Type::integer()));
    /// assert_eq!(point.field("z"), None);
    /// ```
    #[must_use]
    pub fn object(name: &str, members: Members) -> Self {
        Self { name:    Rc::from(name),
               native:  Native::Object,
               members: Some(Rc::new(members)), }
    }

    /// Resolves the name of a built-in type as written in an annotation.
    #[must_use]
    pub fn builtin(name: &str) -> Option<Self> {
        Some(match name {
            "Any" => Self::any(),
            "Nil" => Self::nil(),
            "Comparable" => Self::comparable(),
            "Boolean" => Self::boolean(),
            "Integer" => Self::integer(),
            "Decimal" => Self::decimal(),
            "Character" => Self::character(),
            "String" => Self::string(),
            "IntegerIterable" => Self::integer_iterable(),
            _ => return None,
        })
    }

    /// The intrinsic type of a literal.
    #[must_use]
    pub fn of_literal(literal: &Literal) -> Self {
        match literal {
            Literal::Nil => Self::nil(),
            Literal::Boolean(_) => Self::boolean(),
            Literal::Integer(_) => Self::integer(),
            Literal::Decimal(_) => Self::decimal(),
            Literal::Character(_) => Self::character(),
            Literal::String(_) => Self::string(),
        }
    }

    /// The type's name, as it is written in annotations.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The representation this type stands for.
    #[must_use]
    pub const fn representation(&self) -> Native {
        self.native
    }

    /// The type of field `name`, if this is an object type that has it.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Self> {
        self.members.as_ref()?.fields.get(name)
    }

    /// The signature of method `name` with `arity` arguments, if this is an
    /// object type that has it.
    #[must_use]
    pub fn method(&self, name: &str, arity: usize) -> Option<&Function> {
        self.members.as_ref()?.methods.get(&(name.to_string(), arity))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A resolved variable or field binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// The bound name.
    pub name: String,
    /// The declared type.
    pub ty:   Type,
}

impl Variable {
    /// Creates a binding.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self { name: name.into(),
               ty }
    }
}

/// A resolved function or method signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    /// The function name.
    pub name:            String,
    /// Parameter types, in order.
    pub parameter_types: Vec<Type>,
    /// The declared or inferred return type.
    pub return_type:     Type,
}

impl Function {
    /// Creates a signature.
    #[must_use]
    pub fn new(name: impl Into<String>, parameter_types: Vec<Type>, return_type: Type) -> Self {
        Self { name: name.into(),
               parameter_types,
               return_type }
    }

    /// Number of parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.parameter_types.len()
    }
}

/// Checks that a value of type `source` may be stored where `target` is
/// expected.
///
/// The relation holds when both types are equal, when `target` is `Any`, or
/// when `target` is `Comparable` and `source` is an integer, decimal,
/// character or string.
///
/// # Errors
/// [`AnalysisError::TypeMismatch`] naming both types when the relation does
/// not hold.
///
/// # Example
/// ```
/// use plc::interpreter::types::{Type, require_assignable};
///
/// assert!(require_assignable(&Type::any(), &Type::string(), 0).is_ok());
/// assert!(require_assignable(&Type::comparable(), &Type::decimal(), 0).is_ok());
/// assert!(require_assignable(&Type::comparable(), &Type::boolean(), 0).is_err());
/// assert!(require_assignable(&Type::integer(), &Type::any(), 0).is_err());
/// ```
pub fn require_assignable(target: &Type, source: &Type, position: usize) -> Result<(), AnalysisError> {
    let assignable = match target.native {
        _ if target == source => true,
        Native::Any => true,
        Native::Comparable => matches!(source.native,
                                       Native::Integer
                                       | Native::Decimal
                                       | Native::Character
                                       | Native::String),
        _ => false,
    };

    if assignable {
        Ok(())
    } else {
        Err(AnalysisError::TypeMismatch { expected: target.to_string(),
                                          found: source.to_string(),
                                          position })
    }
}
