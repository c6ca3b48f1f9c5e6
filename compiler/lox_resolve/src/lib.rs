//! Static resolution pass for Lox.
//!
//! Runs once over a parsed [`Program`] before evaluation and produces
//! [`Resolutions`]: for each variable reference and assignment, the number of
//! scopes between the use and its declaration. References with no entry are
//! globals, looked up by name at run time.
//!
//! The pass also rejects misplaced `this`, `super` and `return`, reads of a
//! local in its own initializer, self-inheriting classes, and use of
//! undeclared names in top-level code. Inside function bodies, unknown names
//! are allowed; they must exist as globals by the time the function runs.

mod error;
mod resolver;

pub use error::{ResolveError, ResolveErrorKind};

use lox_ir::{ExprId, Program, StringInterner};
use rustc_hash::FxHashMap;

/// Options for the resolution pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Treat re-declaring a name in the same local scope as an error instead
    /// of a warning. Globals may always be redeclared.
    pub reject_redeclaration: bool,
}

/// Side table from expression ids to scope distances.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolutions {
    depths: FxHashMap<ExprId, usize>,
    warnings: Vec<ResolveError>,
}

impl Resolutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hop count for a `Variable`, `Assign`, `This` or `Super` expression.
    ///
    /// `None` means the name is global.
    #[inline]
    pub fn depth(&self, id: ExprId) -> Option<usize> {
        self.depths.get(&id).copied()
    }

    pub(crate) fn record(&mut self, id: ExprId, depth: usize) {
        self.depths.insert(id, depth);
    }

    /// Non-fatal findings, in source order.
    pub fn warnings(&self) -> &[ResolveError] {
        &self.warnings
    }

    /// Number of resolved local references.
    pub fn local_count(&self) -> usize {
        self.depths.len()
    }
}

/// Resolve every local reference in `program`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn resolve(
    program: &Program,
    interner: &StringInterner,
    options: ResolverOptions,
) -> Result<Resolutions, ResolveError> {
    let resolutions = resolver::Resolver::new(interner, options).run(program)?;
    tracing::debug!(
        locals = resolutions.local_count(),
        warnings = resolutions.warnings.len(),
        "resolved program"
    );
    Ok(resolutions)
}
