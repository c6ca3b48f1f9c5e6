//! The resolution walk.
//!
//! Scopes mirror the frames the evaluator will create: one per block, one per
//! function call holding parameters and body together, one holding `this`
//! around each class's methods, and one holding `super` around that for a
//! subclass. The global scope is not on the stack.

use std::mem;

use lox_ir::{ClassDecl, Expr, ExprId, ExprKind, FunctionDecl, Name, Program, Span, Stmt, StmtKind, StringInterner};
use lox_stack::ensure_sufficient_stack;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{ResolveError, ResolveErrorKind, Resolutions, ResolverOptions};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FunctionKind {
    /// Top-level code.
    None,
    Function,
    Method,
    Initializer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ClassKind {
    None,
    Class,
    Subclass,
}

/// Per-scope bindings; the flag is set once the initializer has been resolved.
type Scope = FxHashMap<Name, bool>;

pub(crate) struct Resolver<'a> {
    interner: &'a StringInterner,
    options: ResolverOptions,
    scopes: Vec<Scope>,
    globals: FxHashSet<Name>,
    function: FunctionKind,
    class: ClassKind,
    out: Resolutions,
    this_name: Name,
    super_name: Name,
    init_name: Name,
}

type ResolveResult = Result<(), ResolveError>;

impl<'a> Resolver<'a> {
    pub(crate) fn new(interner: &'a StringInterner, options: ResolverOptions) -> Self {
        Resolver {
            interner,
            options,
            scopes: Vec::new(),
            globals: FxHashSet::default(),
            function: FunctionKind::None,
            class: ClassKind::None,
            out: Resolutions::new(),
            this_name: interner.intern("this"),
            super_name: interner.intern("super"),
            init_name: interner.intern("init"),
        }
    }

    pub(crate) fn run(mut self, program: &Program) -> Result<Resolutions, ResolveError> {
        for stmt in &program.stmts {
            self.resolve_stmt(stmt)?;
        }
        Ok(self.out)
    }

    fn error(&self, kind: ResolveErrorKind, span: Span) -> ResolveError {
        ResolveError::new(kind, span)
    }

    fn name_str(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }

    // Scopes

    fn begin_scope(&mut self) {
        self.scopes.push(Scope::default());
    }

    fn end_scope(&mut self) {
        self.scopes.pop();
    }

    /// Add `name` to the innermost local scope, not yet usable.
    ///
    /// No-op at global scope; callers record globals themselves.
    fn declare(&mut self, name: Name, span: Span) -> ResolveResult {
        let Some(scope) = self.scopes.last_mut() else {
            return Ok(());
        };
        if scope.contains_key(&name) {
            let err = ResolveError::new(
                ResolveErrorKind::DuplicateDeclaration(self.interner.lookup(name)),
                span,
            );
            if self.options.reject_redeclaration {
                return Err(err);
            }
            tracing::debug!(%err, "redeclaration");
            self.out.warnings.push(err);
        }
        scope.insert(name, false);
        Ok(())
    }

    fn define(&mut self, name: Name) {
        match self.scopes.last_mut() {
            Some(scope) => {
                scope.insert(name, true);
            }
            None => {
                self.globals.insert(name);
            }
        }
    }

    /// Record the distance to the innermost scope declaring `name`.
    ///
    /// Names found nowhere are globals. In top-level code they must already
    /// be declared; inside functions they are looked up when the call runs.
    fn resolve_local(&mut self, id: ExprId, name: Name, span: Span) -> ResolveResult {
        if let Some(depth) = self.find_local(name) {
            self.out.record(id, depth);
            return Ok(());
        }
        if self.function == FunctionKind::None && !self.globals.contains(&name) {
            return Err(self.error(
                ResolveErrorKind::UndeclaredVariable(self.name_str(name)),
                span,
            ));
        }
        Ok(())
    }

    fn find_local(&self, name: Name) -> Option<usize> {
        self.scopes
            .iter()
            .rev()
            .position(|scope| scope.contains_key(&name))
    }

    // Statements

    fn resolve_stmt(&mut self, stmt: &Stmt) -> ResolveResult {
        ensure_sufficient_stack(|| self.resolve_stmt_inner(stmt))
    }

    fn resolve_stmt_inner(&mut self, stmt: &Stmt) -> ResolveResult {
        match &stmt.kind {
            StmtKind::Expr(expr) | StmtKind::Print(expr) => self.resolve_expr(expr),
            StmtKind::Var { name, init } => {
                self.declare(*name, stmt.span)?;
                if let Some(init) = init {
                    self.resolve_expr(init)?;
                }
                self.define(*name);
                Ok(())
            }
            StmtKind::Block(stmts) => {
                self.begin_scope();
                for stmt in stmts {
                    self.resolve_stmt(stmt)?;
                }
                self.end_scope();
                Ok(())
            }
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.resolve_expr(cond)?;
                self.resolve_stmt(then_branch)?;
                if let Some(else_branch) = else_branch {
                    self.resolve_stmt(else_branch)?;
                }
                Ok(())
            }
            StmtKind::While { cond, body } => {
                self.resolve_expr(cond)?;
                self.resolve_stmt(body)
            }
            StmtKind::Function(decl) => {
                self.declare(decl.name, decl.span)?;
                self.define(decl.name);
                self.resolve_function(decl, FunctionKind::Function)
            }
            StmtKind::Class(class) => self.resolve_class(class, stmt.span),
            StmtKind::Return(value) => {
                if self.function == FunctionKind::None {
                    return Err(self.error(ResolveErrorKind::TopLevelReturn, stmt.span));
                }
                if let Some(value) = value {
                    if self.function == FunctionKind::Initializer {
                        return Err(
                            self.error(ResolveErrorKind::ReturnValueFromInitializer, stmt.span)
                        );
                    }
                    self.resolve_expr(value)?;
                }
                Ok(())
            }
        }
    }

    fn resolve_function(&mut self, decl: &FunctionDecl, kind: FunctionKind) -> ResolveResult {
        let enclosing = mem::replace(&mut self.function, kind);
        self.begin_scope();

        for param in &decl.params {
            if self.find_in_innermost(param.name) {
                return Err(self.error(
                    ResolveErrorKind::DuplicateParameter(self.name_str(param.name)),
                    param.span,
                ));
            }
            self.define(param.name);
        }
        for stmt in &decl.body {
            self.resolve_stmt(stmt)?;
        }

        self.end_scope();
        self.function = enclosing;
        Ok(())
    }

    fn find_in_innermost(&self, name: Name) -> bool {
        self.scopes
            .last()
            .is_some_and(|scope| scope.contains_key(&name))
    }

    fn resolve_class(&mut self, class: &ClassDecl, span: Span) -> ResolveResult {
        let enclosing = mem::replace(&mut self.class, ClassKind::Class);
        self.declare(class.name, span)?;
        self.define(class.name);

        if let Some(superclass) = &class.superclass {
            self.resolve_superclass(class.name, superclass)?;
            self.class = ClassKind::Subclass;
            self.begin_scope();
            self.define(self.super_name);
        }

        self.begin_scope();
        self.define(self.this_name);
        for method in &class.methods {
            let kind = if method.name == self.init_name {
                FunctionKind::Initializer
            } else {
                FunctionKind::Method
            };
            self.resolve_function(method, kind)?;
        }
        self.end_scope();

        if class.superclass.is_some() {
            self.end_scope();
        }
        self.class = enclosing;
        Ok(())
    }

    /// The superclass must name something already declared, and not the
    /// class itself. Late binding does not apply here.
    fn resolve_superclass(&mut self, class_name: Name, superclass: &Expr) -> ResolveResult {
        let ExprKind::Variable(name) = superclass.kind else {
            return self.resolve_expr(superclass);
        };
        if name == class_name {
            return Err(self.error(
                ResolveErrorKind::SelfInheritance(self.name_str(name)),
                superclass.span,
            ));
        }
        if let Some(depth) = self.find_local(name) {
            self.out.record(superclass.id, depth);
            Ok(())
        } else if self.globals.contains(&name) {
            Ok(())
        } else {
            Err(self.error(
                ResolveErrorKind::UndeclaredVariable(self.name_str(name)),
                superclass.span,
            ))
        }
    }

    // Expressions

    fn resolve_expr(&mut self, expr: &Expr) -> ResolveResult {
        ensure_sufficient_stack(|| self.resolve_expr_inner(expr))
    }

    fn resolve_expr_inner(&mut self, expr: &Expr) -> ResolveResult {
        match &expr.kind {
            ExprKind::Literal(_) => Ok(()),
            ExprKind::Variable(name) => {
                let uninitialized = self
                    .scopes
                    .last()
                    .and_then(|scope| scope.get(name))
                    .is_some_and(|defined| !defined);
                if uninitialized {
                    return Err(self.error(
                        ResolveErrorKind::ReadInOwnInitializer(self.name_str(*name)),
                        expr.span,
                    ));
                }
                self.resolve_local(expr.id, *name, expr.span)
            }
            ExprKind::Assign { name, value } => {
                self.resolve_expr(value)?;
                self.resolve_local(expr.id, *name, expr.span)
            }
            ExprKind::Unary { operand, .. } => self.resolve_expr(operand),
            ExprKind::Binary { left, right, .. } | ExprKind::Logical { left, right, .. } => {
                self.resolve_expr(left)?;
                self.resolve_expr(right)
            }
            ExprKind::Call { callee, args } => {
                self.resolve_expr(callee)?;
                for arg in args {
                    self.resolve_expr(arg)?;
                }
                Ok(())
            }
            ExprKind::Get { object, .. } => self.resolve_expr(object),
            ExprKind::Set { object, value, .. } => {
                self.resolve_expr(value)?;
                self.resolve_expr(object)
            }
            ExprKind::This => {
                if self.class == ClassKind::None {
                    return Err(self.error(ResolveErrorKind::ThisOutsideClass, expr.span));
                }
                self.resolve_local(expr.id, self.this_name, expr.span)
            }
            ExprKind::Super { .. } => match self.class {
                ClassKind::None => Err(self.error(ResolveErrorKind::SuperOutsideClass, expr.span)),
                ClassKind::Class => {
                    Err(self.error(ResolveErrorKind::SuperWithoutSuperclass, expr.span))
                }
                ClassKind::Subclass => self.resolve_local(expr.id, self.super_name, expr.span),
            },
            ExprKind::Grouping(inner) => self.resolve_expr(inner),
        }
    }
}
