//! Evaluation of arithmetic expressions that no longer contain any dice.
//!
//! Parenthesized sub-expressions are resolved first (the deepest ones finish first), then the remaining flat sequence of
//! operands and operators is reduced one precedence tier at a time.

pub mod lex;
pub mod op;
pub mod scan;

use core::ops::Range;

use self::{
	lex::{tokenize, Spanned, Token},
	op::{Operator, HIGHEST_PRIORITY, LOWEST_PRIORITY},
	scan::subexpression_spans_within,
};
use crate::{
	error::{Error, Unbalanced},
	limits::Limits,
};

/// Calculates the value of a dice-free expression with no limits applied. Nesting of any depth is handled without
/// exhausting the stack.
///
/// Operators are applied in order of precedence (`**`, then `*` and `/`, then `+` and `-`), and left to right within
/// the same precedence, so `2**2**3` is `(2**2)**3`.
///
/// # Errors
/// See [`calculate_within()`].
///
/// # Examples
/// ```
/// use rollcalc::expr::calculate;
///
/// assert_eq!(calculate("2+3*4")?, 14.0);
/// assert_eq!(calculate("(2+3)*4")?, 20.0);
/// assert_eq!(calculate("2**2**3")?, 64.0);
/// assert_eq!(calculate("10/2/5")?, 1.0);
/// # Ok::<(), rollcalc::Error>(())
/// ```
pub fn calculate(expr: &str) -> Result<f64, Error> {
	calculate_within(expr, &Limits::unlimited())
}

/// Calculates the value of a dice-free expression, refusing ones that go beyond the given limits.
///
/// # Errors
/// - [`Error::ExpressionTooLong`] if the expression is longer than [`Limits::max_len`]
/// - [`Error::UnbalancedParentheses`] if a parenthesis is unmatched
/// - [`Error::NestingTooDeep`] if parentheses are nested beyond [`Limits::max_depth`]
/// - [`Error::MalformedExpression`] if operands and operators don't alternate or an operator is unknown
/// - [`Error::EvaluationError`] if applying the operators doesn't leave exactly one operand
pub fn calculate_within(expr: &str, limits: &Limits) -> Result<f64, Error> {
	if expr.len() > limits.max_len {
		return Err(Error::ExpressionTooLong {
			len: expr.len(),
			max: limits.max_len,
		});
	}

	calculate_flat(expr, limits)
}

/// Calculates an expression of any length or depth without recursing, so nesting only costs heap space.
///
/// Each `(` sets the tokens read so far aside and starts a new group. The matching `)` reduces the group and hands
/// its value to the group around it as an operand spanning both parentheses.
fn calculate_flat(expr: &str, limits: &Limits) -> Result<f64, Error> {
	// Parentheses are checked over the whole expression before anything is tokenized
	subexpression_spans_within(expr, limits.max_depth)?;

	let mut enclosing: Vec<(usize, Vec<Spanned>)> = Vec::new();
	let mut tokens = Vec::new();
	let mut pos = 0;
	for (i, c) in expr.char_indices() {
		match c {
			'(' => {
				tokenize(expr.get(pos..i).unwrap_or_default(), pos, &mut tokens)?;
				enclosing.push((i, core::mem::take(&mut tokens)));
				pos = i.saturating_add(1);
			}
			')' => {
				tokenize(expr.get(pos..i).unwrap_or_default(), pos, &mut tokens)?;
				let Some((open, outer)) = enclosing.pop() else {
					return Err(Error::UnbalancedParentheses {
						span: i..i.saturating_add(1),
						kind: Unbalanced::Unopened,
					});
				};
				let value = reduce(&tokens, open.saturating_add(1)..i)?;

				#[cfg(feature = "logging")]
				log::debug!("sub-expression \"{}\" = {}", expr.get(open..=i).unwrap_or_default(), value);

				tokens = outer;
				tokens.push(Spanned {
					token: Token::Operand(value),
					span: open..i.saturating_add(1),
				});
				pos = i.saturating_add(1);
			}
			_ => {}
		}
	}
	tokenize(expr.get(pos..).unwrap_or_default(), pos, &mut tokens)?;

	if let Some(&(open, _)) = enclosing.first() {
		return Err(Error::UnbalancedParentheses {
			span: open..open.saturating_add(1),
			kind: Unbalanced::Unclosed,
		});
	}

	#[cfg(feature = "logging")]
	log::trace!("tokens for \"{}\": {:?}", expr, &tokens);

	reduce(&tokens, 0..expr.len())
}

/// Reduces an alternating sequence of operands and operators down to a single value.
///
/// Each precedence tier is one left-to-right pass over the sequence. Applying an operator folds its right operand
/// into the running value, and operators of other tiers are carried over to the next pass along with their operands.
fn reduce(tokens: &[Spanned], whole: Range<usize>) -> Result<f64, Error> {
	let (mut values, mut ops) = split_alternating(tokens, whole)?;

	for priority in HIGHEST_PRIORITY..=LOWEST_PRIORITY {
		let mut rights = values.into_iter();
		let Some(mut acc) = rights.next() else {
			return Err(Error::EvaluationError { remaining: 0 });
		};

		let mut kept_values = Vec::with_capacity(ops.len().saturating_add(1));
		let mut kept_ops = Vec::with_capacity(ops.len());
		for (op, right) in ops.into_iter().zip(rights) {
			if op.priority() == priority {
				acc = op.apply(acc, right);
			} else {
				kept_values.push(acc);
				kept_ops.push(op);
				acc = right;
			}
		}
		kept_values.push(acc);

		values = kept_values;
		ops = kept_ops;
	}

	match values.as_slice() {
		[value] => Ok(*value),
		_ => Err(Error::EvaluationError { remaining: values.len() }),
	}
}

/// Separates the operands from the operators, making sure they strictly alternate and start and end with an operand.
fn split_alternating(tokens: &[Spanned], whole: Range<usize>) -> Result<(Vec<f64>, Vec<Operator>), Error> {
	if tokens.is_empty() {
		return Err(Error::MalformedExpression {
			span: whole,
			problem: "expected a number".to_owned(),
		});
	}

	let mut values = Vec::with_capacity(tokens.len().div_ceil(2));
	let mut ops = Vec::with_capacity(tokens.len() / 2);
	for (i, spanned) in tokens.iter().enumerate() {
		match (i % 2 == 0, spanned.token) {
			(true, Token::Operand(value)) => values.push(value),
			(false, Token::Operator(op)) => ops.push(op),
			(true, Token::Operator(op)) => {
				return Err(Error::MalformedExpression {
					span: spanned.span.clone(),
					problem: format!("expected a number, found operator \"{op}\""),
				})
			}
			(false, Token::Operand(..)) => {
				return Err(Error::MalformedExpression {
					span: spanned.span.clone(),
					problem: "expected an operator between two numbers".to_owned(),
				})
			}
		}
	}

	// The sequence must not end on an operator
	if values.len() == ops.len() {
		return Err(Error::MalformedExpression {
			span: whole.end..whole.end,
			problem: "expected a number after the last operator".to_owned(),
		});
	}

	Ok((values, ops))
}
