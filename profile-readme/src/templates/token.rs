//! Placeholder tokens recognised in the README template.

use std::fmt;

/// A named placeholder in the README template.
///
/// Each token appears in the template as an HTML comment, e.g.
/// `<!-- MOTTO -->`, and is replaced wholesale by a generated fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Table of selected repositories.
    OpensourceProjects,

    /// Refresh notice with the current and next refresh times.
    Footer,

    /// Configured motto markup.
    Motto,
}

impl Token {
    /// Every token, in the order the runner substitutes them.
    pub const ALL: [Token; 3] = [Token::OpensourceProjects, Token::Footer, Token::Motto];

    /// Returns the token name used inside the marker comment.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Token::OpensourceProjects => "OPENSOURCE_PROJECTS",
            Token::Footer => "FOOTER",
            Token::Motto => "MOTTO",
        }
    }

    /// Returns the literal marker text, e.g. `<!-- FOOTER -->`.
    #[must_use]
    pub fn marker(self) -> String {
        format!("<!-- {} -->", self.name())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
