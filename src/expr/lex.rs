//! Splitting of parenthesis-free expression text into operands and operators.

use core::ops::Range;

use super::op::Operator;
use crate::error::Error;

/// Single element of a flat expression
#[derive(Debug, Clone, Copy, PartialEq)]
#[expect(clippy::exhaustive_enums, reason = "An expression is only ever made of these")]
pub enum Token {
	/// Numeric value
	Operand(f64),

	/// Operator between two operands
	Operator(Operator),
}

/// [`Token`] along with where it came from
#[derive(Debug, Clone, PartialEq)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Spanned {
	/// The token itself
	pub token: Token,

	/// Byte range the token was read from
	pub span: Range<usize>,
}

/// Splits `text` into tokens and appends them to `tokens`, with spans shifted by `offset`.
///
/// Numbers are maximal runs of digits with an optional fractional part (`12`, `3.5`). Everything else up to the next
/// number or whitespace is taken as an operator symbol. Whitespace only separates tokens.
///
/// # Errors
/// If an operator symbol isn't recognized, an [`Error::MalformedExpression`] is returned.
///
/// # Examples
/// ```
/// use rollcalc::expr::{lex::{tokenize, Token}, op::Operator};
///
/// let mut tokens = Vec::new();
/// tokenize("2**3 - 1.5", 0, &mut tokens)?;
/// let tokens: Vec<_> = tokens.into_iter().map(|spanned| spanned.token).collect();
/// assert_eq!(
/// 	tokens,
/// 	vec![
/// 		Token::Operand(2.0),
/// 		Token::Operator(Operator::Power),
/// 		Token::Operand(3.0),
/// 		Token::Operator(Operator::Subtract),
/// 		Token::Operand(1.5),
/// 	]
/// );
/// # Ok::<(), rollcalc::Error>(())
/// ```
pub fn tokenize(text: &str, offset: usize, tokens: &mut Vec<Spanned>) -> Result<(), Error> {
	let bytes = text.as_bytes();
	let mut pos = 0;

	while let Some(&byte) = bytes.get(pos) {
		let start = pos;
		if byte.is_ascii_whitespace() {
			pos = start.saturating_add(1);
			continue;
		}

		let span = if byte.is_ascii_digit() {
			pos = skip_digits(bytes, pos);
			// A fractional part only counts when there's a digit after the point
			if bytes.get(pos) == Some(&b'.') && bytes.get(pos.saturating_add(1)).is_some_and(u8::is_ascii_digit) {
				pos = skip_digits(bytes, pos.saturating_add(1));
			}
			start..pos
		} else {
			while bytes
				.get(pos)
				.is_some_and(|b| !b.is_ascii_digit() && !b.is_ascii_whitespace())
			{
				pos = pos.saturating_add(1);
			}
			start..pos
		};

		let shifted = start.saturating_add(offset)..pos.saturating_add(offset);
		let slice = text.get(span).ok_or_else(|| Error::MalformedExpression {
			span: shifted.clone(),
			problem: "token is not valid text".to_owned(),
		})?;

		let token = if byte.is_ascii_digit() {
			Token::Operand(slice.parse().map_err(|_err| Error::MalformedExpression {
				span: shifted.clone(),
				problem: format!("\"{slice}\" is not a number"),
			})?)
		} else {
			Token::Operator(Operator::from_symbol(slice).ok_or_else(|| Error::MalformedExpression {
				span: shifted.clone(),
				problem: format!("unknown operator \"{slice}\""),
			})?)
		};

		tokens.push(Spanned { token, span: shifted });
	}

	Ok(())
}

/// Finds the position just past the run of ASCII digits starting at `pos`.
fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
	while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
		pos = pos.saturating_add(1);
	}
	pos
}
