use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, Expr, ExprKind},
    error::AnalysisError,
    interpreter::{
        analyzer::core::{AnalysisResult, Analyzer, StaticScope},
        types::{Native, Type, Variable, require_assignable},
    },
};

/// Requires `ty` to be one of `allowed`.
fn require_one_of(ty: &Type, allowed: &[Native], expected: &str, position: usize) -> AnalysisResult<()> {
    if allowed.contains(&ty.representation()) {
        Ok(())
    } else {
        Err(AnalysisError::TypeMismatch { expected: expected.to_string(),
                                          found: ty.to_string(),
                                          position })
    }
}

impl Analyzer {
    /// Computes the type of an expression and attaches it to the node.
    ///
    /// # Errors
    /// The first [`AnalysisError`] in the expression or its operands.
    pub fn analyze_expression(&self, expr: &Expr, scope: &Rc<StaticScope>) -> AnalysisResult<Type> {
        let ty = match &expr.kind {
            ExprKind::Literal(literal) => Type::of_literal(literal),
            ExprKind::Group(inner) => self.analyze_expression(inner, scope)?,
            ExprKind::Binary { op, left, right } => self.analyze_binary(*op, left, right, scope)?,
            ExprKind::Access { receiver,
                               name,
                               variable, } => {
                let binding = self.analyze_access(receiver.as_deref(), name, scope, expr.position)?;
                let ty = binding.ty.clone();
                let _ = variable.set(binding);
                ty
            },
            ExprKind::Function { receiver,
                                 name,
                                 arguments,
                                 function, } => {
                let signature = match receiver {
                    Some(receiver) => {
                        let receiver_type = self.analyze_expression(receiver, scope)?;
                        receiver_type.method(name, arguments.len()).cloned()
                    },
                    None => scope.lookup_function(name, arguments.len()),
                }.ok_or_else(|| AnalysisError::UndefinedFunction { name:     name.clone(),
                                                                   arity:    arguments.len(),
                                                                   position: expr.position, })?;

                for (argument, parameter) in arguments.iter().zip(&signature.parameter_types) {
                    let argument_type = self.analyze_expression(argument, scope)?;
                    require_assignable(parameter, &argument_type, argument.position)?;
                }

                let ty = signature.return_type.clone();
                let _ = function.set(signature);
                ty
            },
        };

        let _ = expr.ty.set(ty.clone());
        Ok(ty)
    }

    /// Resolves `name` or `receiver.name` to a binding.
    ///
    /// # Errors
    /// - `UndefinedVariable` if no scope declares the name.
    /// - `UndefinedField` if the receiver's type has no such field.
    pub fn analyze_access(&self,
                          receiver: Option<&Expr>,
                          name: &str,
                          scope: &Rc<StaticScope>,
                          position: usize)
                          -> AnalysisResult<Variable> {
        let Some(receiver) = receiver else {
            return scope.lookup_variable(name)
                        .ok_or_else(|| AnalysisError::UndefinedVariable { name: name.to_string(),
                                                                          position });
        };

        let receiver_type = self.analyze_expression(receiver, scope)?;
        match receiver_type.field(name) {
            Some(ty) => Ok(Variable::new(name, ty.clone())),
            None => Err(AnalysisError::UndefinedField { name: name.to_string(),
                                                        type_name: receiver_type.to_string(),
                                                        position }),
        }
    }

    /// Types a binary expression.
    ///
    /// The accepted operand types mirror the evaluator exactly:
    /// - `AND`, `OR`: two booleans.
    /// - `<`, `<=`, `>`, `>=`: two integers or two decimals, giving a boolean.
    /// - `==`, `!=`: any two operands, giving a boolean.
    /// - `+`: two strings, integers or decimals, giving the operand type.
    /// - `-`, `*`, `/`: two integers or two decimals, giving the operand type.
    ///
    /// `Any` never satisfies a concrete requirement.
    ///
    /// # Errors
    /// `TypeMismatch` at the offending operand.
    pub fn analyze_binary(&self,
                          op: BinaryOperator,
                          left: &Expr,
                          right: &Expr,
                          scope: &Rc<StaticScope>)
                          -> AnalysisResult<Type> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
        };

        const NUMERIC: &[Native] = &[Native::Integer, Native::Decimal];
        const ADDABLE: &[Native] = &[Native::String, Native::Integer, Native::Decimal];

        let left_type = self.analyze_expression(left, scope)?;
        let right_type = self.analyze_expression(right, scope)?;

        match op {
            And | Or => {
                require_assignable(&Type::boolean(), &left_type, left.position)?;
                require_assignable(&Type::boolean(), &right_type, right.position)?;
                Ok(Type::boolean())
            },
            Equal | NotEqual => Ok(Type::boolean()),
            Less | LessEqual | Greater | GreaterEqual => {
                require_one_of(&left_type, NUMERIC, "Integer or Decimal", left.position)?;
                require_assignable(&left_type, &right_type, right.position)?;
                Ok(Type::boolean())
            },
            Add => {
                require_one_of(&left_type, ADDABLE, "String, Integer or Decimal", left.position)?;
                require_assignable(&left_type, &right_type, right.position)?;
                Ok(left_type)
            },
            Sub | Mul | Div => {
                require_one_of(&left_type, NUMERIC, "Integer or Decimal", left.position)?;
                require_assignable(&left_type, &right_type, right.position)?;
                Ok(left_type)
            },
        }
    }
}
