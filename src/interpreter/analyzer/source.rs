use std::rc::Rc;

use log::debug;

use crate::{
    ast::{Expr, Field, Method, Source},
    error::AnalysisError,
    interpreter::{
        analyzer::{
            core::{AnalysisResult, Analyzer, MethodContext, StaticScope},
            statement::always_returns,
        },
        scope::Scope,
        types::{Function, Type, Variable, require_assignable},
    },
};

impl Analyzer {
    /// Checks a `LET` field and declares it in the global scope.
    ///
    /// # Errors
    /// `AlreadyDefined` for a second field of the same name, or any error
    /// from the annotation or the initializer.
    pub fn analyze_field(&self, field: &Field) -> AnalysisResult<()> {
        let ty = self.declared_type(field.type_name.as_deref(),
                                    field.value.as_ref(),
                                    self.globals(),
                                    field.position)?;
        let variable = Variable::new(&field.name, ty);

        if !self.globals().define_variable(&field.name, variable.clone()) {
            return Err(AnalysisError::AlreadyDefined { name:     field.name.clone(),
                                                       position: field.position, });
        }
        let _ = field.variable.set(variable);
        Ok(())
    }

    /// Checks a method and declares its signature in the global scope.
    ///
    /// The body is checked in a child of the global scope holding the
    /// parameters, like the call scope the evaluator creates. The method can
    /// call itself: while its body is checked it is visible with its
    /// annotated return type, or `Any` when the return type is inferred.
    ///
    /// # Errors
    /// `AlreadyDefined` for a second method with the same name and arity or a
    /// repeated parameter, or the first error in the body.
    pub fn analyze_method(&self, method: &Method) -> AnalysisResult<()> {
        let parameter_types = method.parameters
                                    .iter()
                                    .map(|parameter| match &parameter.type_name {
                                        Some(name) => self.resolve_type(name, method.position),
                                        None => Ok(Type::any()),
                                    })
                                    .collect::<AnalysisResult<Vec<_>>>()?;
        let declared = method.return_type_name
                             .as_deref()
                             .map(|name| self.resolve_type(name, method.position))
                             .transpose()?;

        let call_scope = Scope::child(self.globals());
        let provisional = Function::new(&method.name,
                                        parameter_types.clone(),
                                        declared.clone().unwrap_or_else(Type::any));
        let _ = call_scope.define_function(&method.name, method.arity(), provisional);

        for (parameter, ty) in method.parameters.iter().zip(&parameter_types) {
            if !call_scope.define_variable(&parameter.name, Variable::new(&parameter.name, ty.clone()))
            {
                return Err(AnalysisError::AlreadyDefined { name:     parameter.name.clone(),
                                                           position: method.position, });
            }
        }

        let mut context = MethodContext::new(declared);
        for statement in &method.statements {
            self.analyze_statement(statement, &call_scope, &mut context)?;
        }

        // Falling off the end of the body yields NIL.
        if !always_returns(&method.statements) {
            match &context.declared {
                Some(declared) => require_assignable(declared, &Type::nil(), method.position)?,
                None => context.returns.push(Type::nil()),
            }
        }

        let function = Function::new(&method.name, parameter_types, context.return_type());
        debug!("analyzed method {}/{} returning {}",
               method.name,
               method.arity(),
               function.return_type);

        if !self.globals()
                .define_function(&method.name, method.arity(), function.clone())
        {
            return Err(AnalysisError::AlreadyDefined { name:     method.name.clone(),
                                                       position: method.position, });
        }
        let _ = method.function.set(function);
        Ok(())
    }

    /// Checks that the program has a zero-argument `main` returning
    /// `Integer`.
    ///
    /// # Errors
    /// `InvalidMainSignature` otherwise.
    pub fn check_main(&self, source: &Source) -> AnalysisResult<()> {
        let position = source.methods
                             .iter()
                             .find(|method| method.name == "main" && method.arity() == 0)
                             .map_or(0, |method| method.position);

        let main = self.globals().lookup_function("main", 0).ok_or_else(|| {
                                    AnalysisError::InvalidMainSignature {
                                        details: "no zero-argument main method".into(),
                                        position,
                                    }
                                })?;

        if main.return_type != Type::integer() {
            return Err(AnalysisError::InvalidMainSignature { details:
                                                                 format!("main must return \
                                                                          Integer, not {}",
                                                                         main.return_type),
                                                             position });
        }
        Ok(())
    }

    /// Computes the type of a declaration from its annotation and initializer.
    ///
    /// The annotation wins when present, and the initializer must be
    /// assignable to it. Otherwise the initializer's type is used, or `Any`
    /// when there is no initializer either.
    ///
    /// # Errors
    /// `UnknownType`, `TypeMismatch`, or any error from the initializer.
    pub fn declared_type(&self,
                         type_name: Option<&str>,
                         value: Option<&Expr>,
                         scope: &Rc<StaticScope>,
                         position: usize)
                         -> AnalysisResult<Type> {
        let value_type = match value {
            Some(expr) => Some((self.analyze_expression(expr, scope)?, expr.position)),
            None => None,
        };

        match (type_name, value_type) {
            (Some(name), value_type) => {
                let declared = self.resolve_type(name, position)?;
                if let Some((ty, value_position)) = value_type {
                    require_assignable(&declared, &ty, value_position)?;
                }
                Ok(declared)
            },
            (None, Some((ty, _))) => Ok(ty),
            (None, None) => Ok(Type::any()),
        }
    }
}
