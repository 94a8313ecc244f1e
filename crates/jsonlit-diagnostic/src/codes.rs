//! Error codes for jsonlit diagnostics.

use crate::DiagnosticKind;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Lexical errors (J0001 - J0099)
    UnterminatedString,
    UnterminatedComment,
    ErrorParsingComment,
    IllegalStringCharacter,
    IllegalWhitespaceCharacter,
    InvalidEscapeSequence,
    InvalidNumber,

    // Unexpected and missing tokens (J0100 - J0199)
    Unexpected,
    Expected,
    NameExpected,
    MissingPropertyValue,
    ValueRequired,

    // Strict mode violations (J0200 - J0299)
    CommentsNotAllowed,
    SingleQuotedString,
    LiteralNotAllowed,
    ConstructorsNotAllowed,
    TrailingComma,
    PropertyNameNotString,
    CommaUnexpected,

    // Shape violations (J0300 - J0399)
    PropertyInArray,
    NonPropertyInObject,
    NestedProperty,
    MissingColon,
    InvalidPropertyName,
    InvalidConstructorName,
    SyntaxError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexical
            ErrorCode::UnterminatedString => "J0001",
            ErrorCode::UnterminatedComment => "J0002",
            ErrorCode::ErrorParsingComment => "J0003",
            ErrorCode::IllegalStringCharacter => "J0004",
            ErrorCode::IllegalWhitespaceCharacter => "J0005",
            ErrorCode::InvalidEscapeSequence => "J0006",
            ErrorCode::InvalidNumber => "J0007",

            // Unexpected / missing
            ErrorCode::Unexpected => "J0100",
            ErrorCode::Expected => "J0110",
            ErrorCode::NameExpected => "J0111",
            ErrorCode::MissingPropertyValue => "J0112",
            ErrorCode::ValueRequired => "J0113",

            // Mode
            ErrorCode::CommentsNotAllowed => "J0200",
            ErrorCode::SingleQuotedString => "J0201",
            ErrorCode::LiteralNotAllowed => "J0202",
            ErrorCode::ConstructorsNotAllowed => "J0203",
            ErrorCode::TrailingComma => "J0204",
            ErrorCode::PropertyNameNotString => "J0205",
            ErrorCode::CommaUnexpected => "J0206",

            // Shape
            ErrorCode::PropertyInArray => "J0300",
            ErrorCode::NonPropertyInObject => "J0301",
            ErrorCode::NestedProperty => "J0302",
            ErrorCode::MissingColon => "J0303",
            ErrorCode::InvalidPropertyName => "J0304",
            ErrorCode::InvalidConstructorName => "J0305",
            ErrorCode::SyntaxError => "J0306",
        }
    }

    /// The category this code belongs to.
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            ErrorCode::UnterminatedString
            | ErrorCode::UnterminatedComment
            | ErrorCode::ErrorParsingComment
            | ErrorCode::IllegalStringCharacter
            | ErrorCode::IllegalWhitespaceCharacter
            | ErrorCode::InvalidEscapeSequence
            | ErrorCode::InvalidNumber => DiagnosticKind::Lexical,

            ErrorCode::Unexpected => DiagnosticKind::Unexpected,

            ErrorCode::Expected
            | ErrorCode::NameExpected
            | ErrorCode::MissingPropertyValue
            | ErrorCode::ValueRequired => DiagnosticKind::Missing,

            ErrorCode::CommentsNotAllowed
            | ErrorCode::SingleQuotedString
            | ErrorCode::LiteralNotAllowed
            | ErrorCode::ConstructorsNotAllowed
            | ErrorCode::TrailingComma
            | ErrorCode::PropertyNameNotString
            | ErrorCode::CommaUnexpected => DiagnosticKind::Mode,

            ErrorCode::PropertyInArray
            | ErrorCode::NonPropertyInObject
            | ErrorCode::NestedProperty
            | ErrorCode::MissingColon
            | ErrorCode::InvalidPropertyName
            | ErrorCode::InvalidConstructorName
            | ErrorCode::SyntaxError => DiagnosticKind::Shape,
        }
    }

    /// The fixed message for codes whose text takes no argument.
    ///
    /// `Unexpected`, `Expected` and `LiteralNotAllowed` embed the offending
    /// text and are built by the matching `Diagnostic` constructors instead.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::UnterminatedString => "Unterminated string",
            ErrorCode::UnterminatedComment => "Unterminated comment",
            ErrorCode::ErrorParsingComment => "Error parsing comment",
            ErrorCode::IllegalStringCharacter => "Illegal string character",
            ErrorCode::IllegalWhitespaceCharacter => "Illegal whitespace character",
            ErrorCode::InvalidEscapeSequence => "Invalid escape sequence",
            ErrorCode::InvalidNumber => "Invalid number",

            ErrorCode::Unexpected => "Unexpected token",
            ErrorCode::Expected => "Token expected",
            ErrorCode::NameExpected => "Name expected",
            ErrorCode::MissingPropertyValue => "Missing property value",
            ErrorCode::ValueRequired => "Value required",

            ErrorCode::CommentsNotAllowed => "Comments not allowed",
            ErrorCode::SingleQuotedString => "Strings must start with \" not '",
            ErrorCode::LiteralNotAllowed => "Literal not allowed",
            ErrorCode::ConstructorsNotAllowed => "Constructors not allowed",
            ErrorCode::TrailingComma => "Trailing comma not allowed",
            ErrorCode::PropertyNameNotString => "Property name must be a string",
            ErrorCode::CommaUnexpected => "',' unexpected",

            ErrorCode::PropertyInArray => "Properties not allowed in an array",
            ErrorCode::NonPropertyInObject => "Only properties allowed in an object",
            ErrorCode::NestedProperty => "Nested properties not allowed",
            ErrorCode::MissingColon => "Property name must be followed by a ':'",
            ErrorCode::InvalidPropertyName => "Invalid property name",
            ErrorCode::InvalidConstructorName => "Invalid constructor name",
            ErrorCode::SyntaxError => "Syntax error",
        }
    }

    /// Get a suggested fix for the error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::UnterminatedString => Some("add a closing quote to terminate the string"),
            ErrorCode::UnterminatedComment | ErrorCode::ErrorParsingComment => {
                Some("close the comment with `*/` or end the line after `//`")
            }
            ErrorCode::InvalidNumber => {
                Some("numbers look like `-12.5e3`: no leading zeros, digits on both sides of `.`")
            }
            ErrorCode::SingleQuotedString => Some("use `\"` to delimit strings"),
            ErrorCode::PropertyNameNotString => Some("quote the property name with `\"`"),
            ErrorCode::TrailingComma => Some("remove the comma"),
            ErrorCode::CommentsNotAllowed => Some("remove the comment or parse in loose mode"),
            ErrorCode::MissingColon => Some("add `:` and a value after the name"),
            _ => None,
        }
    }
}
