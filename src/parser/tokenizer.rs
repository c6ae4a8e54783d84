//! The tokenizer: a formula string to a sequence of typed tokens.
//!
//! The scan is a single left-to-right pass.
//! Letters, and digits after a first letter, accumulate into an identifier; the identifiers
//! `True` and `False` are the constants and every other identifier is a variable.
//! `~ & + > =` are single-character operators, with `*` accepted as an alias for `&`.
//! Whitespace is skipped, and any other character is a [LexError].

use crate::{
    misc::log::targets::{self},
    types::err::{self},
};

/// The connectives of the language.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OpKind {
    Not,
    And,
    Or,
    Implies,
    Iff,
}

/// A token, as consumed left-to-right by the parser.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Token {
    /// A variable name.
    Variable(String),

    /// A boolean constant, written `True` or `False`.
    Constant(bool),

    /// A connective.
    Op(OpKind),

    LeftParen,
    RightParen,
}

/// Breaks the given formula string into tokens.
pub fn tokenize(text: &str) -> Result<Vec<Token>, err::ErrorKind> {
    let mut tokens = Vec::default();
    let mut chars = text.char_indices().peekable();

    while let Some((position, character)) = chars.next() {
        match character {
            character if character.is_whitespace() => continue,

            '~' => tokens.push(Token::Op(OpKind::Not)),
            '&' | '*' => tokens.push(Token::Op(OpKind::And)),
            '+' => tokens.push(Token::Op(OpKind::Or)),
            '>' => tokens.push(Token::Op(OpKind::Implies)),
            '=' => tokens.push(Token::Op(OpKind::Iff)),

            '(' => tokens.push(Token::LeftParen),
            ')' => tokens.push(Token::RightParen),

            character if character.is_ascii_alphabetic() => {
                let mut name = String::from(character);
                while let Some((_, next)) = chars.peek() {
                    if next.is_ascii_alphanumeric() {
                        name.push(*next);
                        chars.next();
                    } else {
                        break;
                    }
                }

                match name.as_str() {
                    "True" => tokens.push(Token::Constant(true)),
                    "False" => tokens.push(Token::Constant(false)),
                    _ => tokens.push(Token::Variable(name)),
                }
            }

            _ => {
                log::info!(target: targets::PARSER, "Unrecognized character {character:?} at byte {position}");
                return Err(err::ErrorKind::from(err::LexError::UnrecognizedCharacter {
                    character,
                    position,
                }));
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_conjunction() {
        let tokens = tokenize("a*b").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Variable("a".to_string()),
                Token::Op(OpKind::And),
                Token::Variable("b".to_string()),
            ]
        );
    }

    #[test]
    fn multicharacter_names_and_whitespace() {
        let tokens = tokenize(" foo1 + ~bar ").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Variable("foo1".to_string()),
                Token::Op(OpKind::Or),
                Token::Op(OpKind::Not),
                Token::Variable("bar".to_string()),
            ]
        );
    }

    #[test]
    fn constants_are_not_variables() {
        let tokens = tokenize("True>Falsehood").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Constant(true),
                Token::Op(OpKind::Implies),
                Token::Variable("Falsehood".to_string()),
            ]
        );
    }

    #[test]
    fn unrecognized_character() {
        let result = tokenize("a | b");
        assert_eq!(
            result,
            Err(err::ErrorKind::Lex(err::LexError::UnrecognizedCharacter {
                character: '|',
                position: 2,
            }))
        );
    }
}
