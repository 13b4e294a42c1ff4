use std::{collections::HashMap, rc::Rc};

use log::debug;

use crate::{
    ast::Source,
    error::AnalysisError,
    interpreter::{
        scope::Scope,
        types::{Function, Type, Variable},
    },
};

/// Result type used by the analyzer.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// The static instantiation of [`Scope`].
pub type StaticScope = Scope<Variable, Function>;

/// Per-method state collected while its body is checked.
#[derive(Debug, Clone, Default)]
pub struct MethodContext {
    /// The annotated return type, if any.
    pub declared: Option<Type>,
    /// Types of every `RETURN` value seen so far.
    pub returns:  Vec<Type>,
}

impl MethodContext {
    /// Creates a context for a method with the given annotated return type.
    #[must_use]
    pub const fn new(declared: Option<Type>) -> Self {
        Self { declared,
               returns: Vec::new() }
    }

    /// The method's return type.
    ///
    /// The annotation when there is one; otherwise the common type of all
    /// `RETURN` values, `Any` when they disagree, or `Nil` when there is no
    /// `RETURN` at all.
    #[must_use]
    pub fn return_type(&self) -> Type {
        if let Some(declared) = &self.declared {
            return declared.clone();
        }

        match self.returns.split_first() {
            None => Type::nil(),
            Some((first, rest)) if rest.iter().all(|ty| ty == first) => first.clone(),
            Some(_) => Type::any(),
        }
    }
}

/// The static analyzer.
///
/// Walks a parsed [`Source`] once, resolving every name against a static
/// scope tree that nests exactly like the evaluator's runtime scopes.
/// Resolved types and bindings are written into the annotation cells of the
/// nodes; analysis stops at the first violation.
///
/// # Example
/// ```
/// use plc::{
///     interpreter::{analyzer::core::Analyzer, builtins, types::Type},
///     parse_source,
/// };
///
/// let source = parse_source("LET x = 1; DEF main() DO RETURN x; END").unwrap();
/// Analyzer::new(builtins::static_globals()).analyze(&source).unwrap();
///
/// let main = source.methods[0].function.get().unwrap();
/// assert_eq!(main.return_type, Type::integer());
/// ```
pub struct Analyzer {
    globals: Rc<StaticScope>,
    types:   HashMap<String, Type>,
}

impl Analyzer {
    /// Creates an analyzer over the given static global scope.
    #[must_use]
    pub fn new(globals: Rc<StaticScope>) -> Self {
        Self { globals,
               types: HashMap::new() }
    }

    /// The global scope fields and methods are declared in.
    #[must_use]
    pub const fn globals(&self) -> &Rc<StaticScope> {
        &self.globals
    }

    /// Makes an object type nameable in annotations.
    pub fn define_type(&mut self, ty: Type) {
        self.types.insert(ty.name().to_string(), ty);
    }

    /// Resolves a type name from an annotation.
    ///
    /// # Errors
    /// `UnknownType` if the name is neither built in nor registered.
    pub fn resolve_type(&self, name: &str, position: usize) -> AnalysisResult<Type> {
        Type::builtin(name).or_else(|| self.types.get(name).cloned())
                           .ok_or_else(|| AnalysisError::UnknownType { name: name.to_string(),
                                                                       position })
    }

    /// Analyzes a whole program.
    ///
    /// Fields are declared in order, then methods in order, then the
    /// program must contain a zero-argument `main` returning `Integer`.
    ///
    /// # Errors
    /// The first [`AnalysisError`] found.
    pub fn analyze(&self, source: &Source) -> AnalysisResult<()> {
        for field in &source.fields {
            self.analyze_field(field)?;
        }

        for method in &source.methods {
            self.analyze_method(method)?;
        }

        self.check_main(source)?;

        debug!("analyzed {} fields and {} methods",
               source.fields.len(),
               source.methods.len());
        Ok(())
    }
}
