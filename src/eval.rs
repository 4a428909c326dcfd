//! The full pipeline: rolling the dice in an expression, then calculating its result.

use core::fmt;

#[cfg(feature = "fastrand")]
use crate::dice::roller::FastRand;
use crate::{
	dice::{Rolled, Roller},
	error::Error,
	expr::calculate_within,
	limits::Limits,
	resolve::resolve_dice,
};

/// Result of evaluating an expression
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Evaluation {
	/// Expression with every dice pattern replaced by its rolls, e.g. `(3 + 5 + 1) * 2`
	pub expanded: String,

	/// Numeric result of the expression
	pub result: f64,

	/// Every set of dice rolled for the expression, in order of appearance
	pub rolls: Vec<Rolled>,
}

impl Evaluation {
	/// Creates an evaluation from an already expanded expression and its result.
	#[must_use]
	pub const fn new(expanded: String, result: f64, rolls: Vec<Rolled>) -> Self {
		Self {
			expanded,
			result,
			rolls,
		}
	}

	/// Splits the evaluation into the expanded expression and its result.
	#[must_use]
	pub fn into_parts(self) -> (String, f64) {
		(self.expanded, self.result)
	}
}

impl Describe for Evaluation {
	/// Builds a message of the form `` `expanded = result` ``, with the result rounded to six significant digits.
	///
	/// If `list_limit` is specified, it's the maximum number of characters for the whole message. The expanded
	/// expression is cut short and appended with `...` to make it fit. Should the result itself not fit, only the
	/// result is given.
	///
	/// # Examples
	/// ```
	/// use rollcalc::{dice::roller::Iter as IterRoller, evaluate_with, Describe, Limits};
	///
	/// let evaluation = evaluate_with("3d6 * 2", &mut IterRoller::new([3, 5, 1]), &Limits::default())?;
	/// assert_eq!(evaluation.describe(None), "`(3 + 5 + 1) * 2 = 18`");
	/// assert_eq!(evaluation.describe(Some(17)), "`(3 + 5 ... = 18`");
	/// assert_eq!(evaluation.describe(Some(6)), "18");
	/// # Ok::<(), rollcalc::Error>(())
	/// ```
	fn describe(&self, list_limit: Option<usize>) -> String {
		let value = format_value(self.result);
		let Some(max_len) = list_limit else {
			return format!("`{} = {value}`", self.expanded);
		};

		// Backticks and the " = " separator
		let framing = 5;
		let ellipsis = "...";
		let label_len = self.expanded.chars().count();
		let room = max_len.saturating_sub(value.chars().count().saturating_add(framing));

		if label_len <= room {
			format!("`{} = {value}`", self.expanded)
		} else if room >= ellipsis.len() {
			let label = self
				.expanded
				.chars()
				.take(room.saturating_sub(ellipsis.len()))
				.collect::<String>();
			format!("`{label}{ellipsis} = {value}`")
		} else {
			value
		}
	}
}

impl fmt::Display for Evaluation {
	/// Formats the value using the given formatter. [Read more][core::fmt::Debug::fmt()]
	///
	/// The output of this implementation is equivalent to [`Self::describe(None)`].
	///
	/// [`Self::describe(None)`]: Self::describe()
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.describe(None))
	}
}

/// Formats a value to six significant digits, trimming trailing zeros. Values of a million or more, or smaller than a
/// ten-thousandth, are written in scientific notation (`1e+06`, `2.5e-05`).
fn format_value(value: f64) -> String {
	if value.is_nan() {
		return "nan".to_owned();
	}
	if value.is_infinite() {
		return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
	}

	// Rounding first decides the exponent, so 999999.5 goes to scientific notation as 1e+06
	let scientific = format!("{value:.5e}");
	let Some((mantissa, exponent)) = scientific.split_once('e') else {
		return value.to_string();
	};
	let Ok(exponent) = exponent.parse::<i32>() else {
		return value.to_string();
	};

	if (-4..6).contains(&exponent) {
		let decimals = usize::try_from(5_i32.saturating_sub(exponent)).unwrap_or_default();
		trim_fraction(&format!("{value:.decimals$}")).to_owned()
	} else {
		let sign = if exponent < 0 { '-' } else { '+' };
		format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs())
	}
}

/// Strips trailing zeros after a decimal point, and the point itself if nothing is left after it.
fn trim_fraction(number: &str) -> &str {
	if number.contains('.') {
		number.trim_end_matches('0').trim_end_matches('.')
	} else {
		number
	}
}

/// Trait to allow creation of expanded descriptions with an optional limit on how much is listed
pub trait Describe {
	/// Builds a detailed string with information about the rolls that were made. How `list_limit` caps the output is
	/// up to the implementation.
	#[must_use]
	fn describe(&self, list_limit: Option<usize>) -> String;
}

/// Rolls the dice in `expr` with a freshly seeded roller and calculates the result, using the default [`Limits`].
/// Requires the `fastrand` feature (enabled by default).
///
/// # Errors
/// See [`evaluate_with()`].
///
/// # Examples
/// ```
/// let evaluation = rollcalc::evaluate("2d6 + 3")?;
/// assert!((5.0..=15.0).contains(&evaluation.result));
/// assert_eq!(evaluation.rolls[0].rolls.len(), 2);
/// # Ok::<(), rollcalc::Error>(())
/// ```
#[cfg(feature = "fastrand")]
pub fn evaluate(expr: &str) -> Result<Evaluation, Error> {
	evaluate_with(expr, &mut FastRand::default(), &Limits::default())
}

/// Rolls the dice in `expr` with the given roller, then calculates the result of the expanded expression.
///
/// # Errors
/// Any error from [`resolve_dice()`] or [`calculate_within()`] is returned as-is. Spans in errors from the calculation
/// refer to the expanded expression, not `expr`. Only `expr` itself is held to [`Limits::max_len`]; the length of the
/// expanded expression is bounded by the dice limits instead.
///
/// # Examples
/// ```
/// use rollcalc::{dice::roller::Iter as IterRoller, evaluate_with, Limits};
///
/// let (expanded, result) = evaluate_with("5+(2*(1d6-6))", &mut IterRoller::new([3]), &Limits::default())?.into_parts();
/// assert_eq!(expanded, "5+(2*((3)-6))");
/// assert_eq!(result, -1.0);
/// # Ok::<(), rollcalc::Error>(())
/// ```
pub fn evaluate_with(expr: &str, roller: &mut impl Roller, limits: &Limits) -> Result<Evaluation, Error> {
	let resolved = resolve_dice(expr, roller, limits)?;
	let result = calculate_within(&resolved.expr, &limits.for_expanded())?;
	Ok(Evaluation::new(resolved.expr, result, resolved.rolls))
}
