use std::sync::OnceLock;

use regex::Regex;

use super::ParseError;

/// Citation and definition patterns, compiled once per process.
pub struct Patterns {
    /// `[^label]` anywhere in a line. Matches followed by `:` are definitions
    /// and are rejected by the caller, since `regex` has no lookahead.
    pub reference: Regex,
    /// `[^label]: text` at the very start of a line.
    pub definition: Regex,
}

impl Patterns {
    fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            reference: Regex::new(r"\[\^([^\]]+)\]")?,
            definition: Regex::new(r"^\[\^([^\]]+)\]:\s*(.*)$")?,
        })
    }
}

pub fn patterns() -> Result<&'static Patterns, ParseError> {
    static PATTERNS: OnceLock<Result<Patterns, regex::Error>> = OnceLock::new();
    PATTERNS
        .get_or_init(Patterns::compile)
        .as_ref()
        .map_err(|e| ParseError::Pattern(e.clone()))
}
