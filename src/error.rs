/// Conversion errors.
///
/// Defines the single error kind a conversion can fail with, together with the
/// `ConvResult` alias used throughout the converter.
pub mod conversion_error;
/// Literal parsing errors.
///
/// Contains the errors raised while lexing or parsing the textual value
/// notation read by the command-line tool and the fixture tests.
pub mod parse_error;

pub use conversion_error::{ConvResult, ConversionError};
pub use parse_error::ParseError;
