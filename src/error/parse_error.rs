#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reading value literals.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric literal did not fit its declared type.
    InvalidLiteral {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A `type::NAME` path did not name a known constant.
    UnknownConstant {
        /// The path as written.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after a complete value.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// Fills in the line of an end-of-input error that was raised without
    /// one.
    #[must_use]
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            Self::UnexpectedEndOfInput { line: 0 } => Self::UnexpectedEndOfInput { line },
            other => other,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::InvalidLiteral { literal, line } => {
                write!(f, "Error on line {line}: Invalid literal '{literal}'.")
            },

            Self::UnknownConstant { name, line } => {
                write!(f, "Error on line {line}: Unknown constant '{name}'.")
            },

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after value. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
