//! Location of the top-level parenthesized sub-expressions within an expression.

use core::ops::Range;

use crate::error::{Error, Unbalanced};

/// Finds the byte range of every top-level parenthesized span in `expr`, including both parentheses.
///
/// Nested spans are not returned on their own: `5 + (2 * (3 - 6))` has a single sub-expression, and the nested one is
/// found when the content of that span is scanned in turn. An expression without any parentheses has no
/// sub-expressions, which isn't an error.
///
/// # Errors
/// An unmatched `(` or `)` results in an [`Error::UnbalancedParentheses`] pointing at it.
///
/// # Examples
/// ```
/// use rollcalc::expr::scan::subexpression_spans;
///
/// assert_eq!(subexpression_spans("5 + (2 * (3 - 6))")?, vec![4..17]);
/// assert_eq!(subexpression_spans("(1) + (2)")?, vec![0..3, 6..9]);
/// assert!(subexpression_spans("2 + 3")?.is_empty());
/// assert!(subexpression_spans("2 + 3)").is_err());
/// # Ok::<(), rollcalc::Error>(())
/// ```
pub fn subexpression_spans(expr: &str) -> Result<Vec<Range<usize>>, Error> {
	subexpression_spans_within(expr, usize::MAX)
}

/// Same as [`subexpression_spans()`], but also fails once parentheses are nested deeper than `max_depth`.
///
/// # Errors
/// Unmatched parentheses result in an [`Error::UnbalancedParentheses`], and nesting too deep results in an
/// [`Error::NestingTooDeep`].
pub fn subexpression_spans_within(expr: &str, max_depth: usize) -> Result<Vec<Range<usize>>, Error> {
	let mut spans = Vec::new();
	let mut depth: usize = 0;
	let mut start = 0;

	for (i, c) in expr.char_indices() {
		match c {
			'(' => {
				if depth == 0 {
					start = i;
				}
				depth = depth.saturating_add(1);
				if depth > max_depth {
					return Err(Error::NestingTooDeep {
						span: i..i.saturating_add(1),
						max: max_depth,
					});
				}
			}
			')' => {
				depth = depth.checked_sub(1).ok_or_else(|| Error::UnbalancedParentheses {
					span: i..i.saturating_add(1),
					kind: Unbalanced::Unopened,
				})?;
				if depth == 0 {
					spans.push(start..i.saturating_add(1));
				}
			}
			_ => {}
		}
	}

	if depth != 0 {
		return Err(Error::UnbalancedParentheses {
			span: start..start.saturating_add(1),
			kind: Unbalanced::Unclosed,
		});
	}

	Ok(spans)
}

/// Makes sure parentheses in `expr` aren't nested deeper than `max_depth`. Unlike [`subexpression_spans_within()`],
/// the parentheses don't have to be balanced.
///
/// # Errors
/// Nesting too deep results in an [`Error::NestingTooDeep`] pointing at the first parenthesis past the limit.
///
/// # Examples
/// ```
/// use rollcalc::expr::scan::check_depth;
///
/// assert!(check_depth("((1) + (2)", 2).is_ok());
/// assert!(check_depth("(((1)))", 2).is_err());
/// ```
pub fn check_depth(expr: &str, max_depth: usize) -> Result<(), Error> {
	let mut depth: usize = 0;
	for (i, c) in expr.char_indices() {
		match c {
			'(' => {
				depth = depth.saturating_add(1);
				if depth > max_depth {
					return Err(Error::NestingTooDeep {
						span: i..i.saturating_add(1),
						max: max_depth,
					});
				}
			}
			')' => depth = depth.saturating_sub(1),
			_ => {}
		}
	}
	Ok(())
}
