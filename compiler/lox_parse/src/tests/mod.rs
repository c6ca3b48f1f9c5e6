//! Parser test suites.

mod parser;
