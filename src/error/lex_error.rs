use thiserror::Error;

/// Represents all errors that can occur while tokenizing an expression.
///
/// Positions are character offsets into the expression after whitespace has
/// been removed, which is the text the tokenizer actually scans.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Found a character that starts no known token.
    #[error("Unrecognized character '{character}' at position {position}.")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Offset of the character in the scanned text.
        position:  usize,
    },
    /// A run of digits and dots did not parse to a finite number.
    #[error("Invalid number '{literal}' at position {position}.")]
    MalformedNumber {
        /// The literal as written, e.g. `1.2.3`.
        literal:  String,
        /// Offset of the literal's first character.
        position: usize,
    },
}
