use std::rc::Rc;

use crate::{
    ast::{ExprKind, Stmt},
    error::AnalysisError,
    interpreter::{
        analyzer::core::{AnalysisResult, Analyzer, MethodContext, StaticScope},
        scope::Scope,
        types::{Type, Variable, require_assignable},
    },
};

/// Whether every path through `statements` reaches a `RETURN`.
///
/// Only a `RETURN` or an `IF` whose branches both always return count. Loops
/// never do, since their bodies may not run at all.
///
/// # Example
/// ```
/// use plc::{interpreter::analyzer::statement::always_returns, parse_source};
///
/// let body = |text: &str| {
///     let source = parse_source(&format!("DEF f() DO {text} END")).unwrap();
///     source.methods[0].statements.clone()
/// };
///
/// assert!(always_returns(&body("LET x = 1; RETURN x;")));
/// assert!(always_returns(&body("IF TRUE DO RETURN 1; ELSE RETURN 2; END")));
/// assert!(!always_returns(&body("IF TRUE DO RETURN 1; END")));
/// assert!(!always_returns(&body("WHILE TRUE DO RETURN 1; END")));
/// assert!(!always_returns(&body("")));
/// ```
#[must_use]
pub fn always_returns(statements: &[Stmt]) -> bool {
    statements.iter().any(|statement| match statement {
                         Stmt::Return { .. } => true,
                         Stmt::If { then_statements,
                                    else_statements,
                                    .. } => {
                             always_returns(then_statements) && always_returns(else_statements)
                         },
                         _ => false,
                     })
}

impl Analyzer {
    /// Checks a statement in `scope`.
    ///
    /// `RETURN` values are checked against, and recorded in, `context`.
    ///
    /// # Errors
    /// The first [`AnalysisError`] in the statement.
    pub fn analyze_statement(&self,
                             statement: &Stmt,
                             scope: &Rc<StaticScope>,
                             context: &mut MethodContext)
                             -> AnalysisResult<()> {
        match statement {
            Stmt::Expression { expr, .. } => {
                self.analyze_expression(expr, scope)?;
            },
            Stmt::Declaration { name,
                                type_name,
                                value,
                                position,
                                variable, } => {
                let ty = self.declared_type(type_name.as_deref(), value.as_ref(), scope, *position)?;
                let binding = Variable::new(name, ty);
                if !scope.define_variable(name, binding.clone()) {
                    return Err(AnalysisError::AlreadyDefined { name:     name.clone(),
                                                               position: *position, });
                }
                let _ = variable.set(binding);
            },
            Stmt::Assignment { target, value, .. } => {
                if !matches!(target.kind, ExprKind::Access { .. }) {
                    return Err(AnalysisError::InvalidAssignmentTarget { position:
                                                                            target.position });
                }
                let target_type = self.analyze_expression(target, scope)?;
                let value_type = self.analyze_expression(value, scope)?;
                require_assignable(&target_type, &value_type, value.position)?;
            },
            Stmt::If { condition,
                       then_statements,
                       else_statements,
                       .. } => {
                let condition_type = self.analyze_expression(condition, scope)?;
                require_assignable(&Type::boolean(), &condition_type, condition.position)?;
                self.analyze_block(then_statements, scope, context)?;
                self.analyze_block(else_statements, scope, context)?;
            },
            Stmt::For { name,
                        value,
                        statements,
                        position,
                        variable, } => {
                if statements.is_empty() {
                    return Err(AnalysisError::EmptyLoopBody { position: *position });
                }
                let iterable = self.analyze_expression(value, scope)?;
                require_assignable(&Type::integer_iterable(), &iterable, value.position)?;

                let body_scope = Scope::child(scope);
                let binding = Variable::new(name, Type::integer());
                if !body_scope.define_variable(name, binding.clone()) {
                    return Err(AnalysisError::AlreadyDefined { name:     name.clone(),
                                                               position: *position, });
                }
                let _ = variable.set(binding);

                for statement in statements {
                    self.analyze_statement(statement, &body_scope, context)?;
                }
            },
            Stmt::While { condition,
                          statements,
                          .. } => {
                let condition_type = self.analyze_expression(condition, scope)?;
                require_assignable(&Type::boolean(), &condition_type, condition.position)?;
                self.analyze_block(statements, scope, context)?;
            },
            Stmt::Return { value, .. } => {
                let ty = self.analyze_expression(value, scope)?;
                if let Some(declared) = &context.declared {
                    require_assignable(declared, &ty, value.position)?;
                }
                context.returns.push(ty);
            },
        }
        Ok(())
    }

    /// Checks statements in a fresh child of `parent`.
    ///
    /// # Errors
    /// The first [`AnalysisError`] in any statement.
    pub fn analyze_block(&self,
                         statements: &[Stmt],
                         parent: &Rc<StaticScope>,
                         context: &mut MethodContext)
                         -> AnalysisResult<()> {
        let scope = Scope::child(parent);
        for statement in statements {
            self.analyze_statement(statement, &scope, context)?;
        }
        Ok(())
    }
}
