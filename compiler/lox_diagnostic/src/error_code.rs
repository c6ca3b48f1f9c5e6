use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Resolver errors
/// - E6xxx: Runtime errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unexpected character in source
    E0002,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Invalid assignment target
    E1003,

    // Resolver Errors (E2xxx)
    /// Use of an undeclared variable
    E2001,
    /// `this` outside of a class
    E2002,
    /// `super` outside of a class
    E2003,
    /// `super` in a class with no superclass
    E2004,
    /// Class inherits from itself
    E2005,
    /// `return` at top level
    E2006,
    /// Value returned from an initializer
    E2007,
    /// Local variable read in its own initializer
    E2008,
    /// Name declared twice in the same scope
    E2009,
    /// Duplicate parameter name
    E2010,

    // Runtime Errors (E6xxx)
    /// Operand type mismatch
    E6001,
    /// Undefined variable
    E6002,
    /// Undefined property
    E6003,
    /// Wrong number of arguments
    E6004,
    /// Value is not callable
    E6005,
    /// Maximum call depth exceeded
    E6006,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E2008 => "E2008",
            ErrorCode::E2009 => "E2009",
            ErrorCode::E2010 => "E2010",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
