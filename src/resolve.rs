//! Replacement of dice patterns in a raw expression with the values rolled for them.

use chumsky::Parser;

use crate::{
	dice::{Dice, Rolled, Roller},
	error::{DiceSpecProblem, Error},
	expr::scan::check_depth,
	limits::Limits,
	parse::{segments, Segment},
};

/// Expression with all of its dice rolled
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Resolved {
	/// Expression text with every dice pattern replaced by its parenthesized rolls
	pub expr: String,

	/// Every set of dice that was rolled, in the order they appear in the expression
	pub rolls: Vec<Rolled>,
}

/// Replaces every `NdM` dice pattern in `expr` with the sum of its rolls, like `(v1 + v2 + ... + vn)`.
///
/// The replacement is a single pass, so text produced by a replacement is never scanned for more dice. Anything that
/// isn't a complete pattern (such as `d6` or `2d`) is left alone. All dice are checked against the limits before any of
/// them are rolled.
///
/// # Errors
/// If a dice pattern has zero dice, zero sides, or goes beyond the limits, an [`Error::InvalidDiceSpec`] is returned.
/// If the expression is longer than [`Limits::max_len`], an [`Error::ExpressionTooLong`] is returned. If its parentheses
/// are nested deeper than [`Limits::max_depth`], an [`Error::NestingTooDeep`] is returned.
///
/// # Examples
/// ```
/// use rollcalc::{dice::roller::Iter as IterRoller, resolve::resolve_dice, Limits};
///
/// let resolved = resolve_dice("3d6 + 2", &mut IterRoller::new([3, 5, 1]), &Limits::default())?;
/// assert_eq!(resolved.expr, "(3 + 5 + 1) + 2");
/// assert_eq!(resolved.rolls[0].total(), 9);
/// # Ok::<(), rollcalc::Error>(())
/// ```
pub fn resolve_dice(expr: &str, roller: &mut impl Roller, limits: &Limits) -> Result<Resolved, Error> {
	if expr.len() > limits.max_len {
		return Err(Error::ExpressionTooLong {
			len: expr.len(),
			max: limits.max_len,
		});
	}

	check_depth(expr, limits.max_depth)?;

	let parsed = segments().parse(expr).into_result().map_err(|errs| Error::MalformedExpression {
		span: 0..expr.len(),
		problem: errs.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "),
	})?;

	// Validate every pattern up front so a bad one late in the expression doesn't waste rolls on the earlier ones
	let mut pieces = Vec::with_capacity(parsed.len());
	let mut total_dice: u32 = 0;
	let mut pos: usize = 0;
	for segment in &parsed {
		let span = pos..pos.saturating_add(segment.len());
		match *segment {
			Segment::Text(text) => pieces.push(Piece::Text(text)),
			Segment::Dice { count, sides } => {
				let dice = to_dice(count, sides, span.clone(), limits)?;
				dice.check(limits, total_dice)
					.map_err(|reason| invalid(count, sides, span.clone(), reason))?;
				total_dice = total_dice.saturating_add(dice.count);
				pieces.push(Piece::Dice(dice));
			}
		}
		pos = span.end;
	}

	let mut resolved = String::with_capacity(expr.len());
	let mut rolls = Vec::new();
	for piece in pieces {
		match piece {
			Piece::Text(text) => resolved.push_str(text),
			Piece::Dice(dice) => {
				let rolled = roller.roll(&dice);
				resolved.push_str(&rolled.to_string());
				rolls.push(rolled);
			}
		}
	}

	#[cfg(feature = "logging")]
	log::debug!("resolved dice in \"{}\" to \"{}\"", expr, resolved);

	Ok(Resolved { expr: resolved, rolls })
}

/// Part of an expression whose dice have been checked but not rolled yet
enum Piece<'src> {
	/// Text copied as-is
	Text(&'src str),

	/// Dice to roll and substitute
	Dice(Dice),
}

/// Checks whether an expression always evaluates to the same result, which is the case when every dice pattern in it
/// has only one side. Malformed dice patterns aren't considered.
///
/// # Examples
/// ```
/// use rollcalc::resolve::is_deterministic;
///
/// assert!(is_deterministic("2 + 3 * 4"));
/// assert!(is_deterministic("4d1 + 2"));
/// assert!(!is_deterministic("1d20 + 5"));
/// ```
#[must_use]
pub fn is_deterministic(expr: &str) -> bool {
	segments().parse(expr).into_result().is_ok_and(|parsed| {
		parsed.iter().all(|segment| match *segment {
			Segment::Text(..) => true,
			Segment::Dice { count, sides } => {
				to_dice(count, sides, 0..0, &Limits::unlimited()).is_ok_and(|dice| dice.is_deterministic())
			}
		})
	})
}

/// Converts the digits of a dice pattern into [`Dice`]. Digits too large for a `u32` are reported as exceeding the
/// matching limit.
fn to_dice(count: &str, sides: &str, span: core::ops::Range<usize>, limits: &Limits) -> Result<Dice, Error> {
	let count_val = count
		.parse()
		.map_err(|_err| invalid(count, sides, span.clone(), DiceSpecProblem::TooManyDice { max: limits.max_dice }))?;
	let sides_val = sides
		.parse()
		.map_err(|_err| invalid(count, sides, span, DiceSpecProblem::TooManySides { max: limits.max_sides }))?;
	Ok(Dice::new(count_val, sides_val))
}

/// Builds an [`Error::InvalidDiceSpec`] for the given pattern.
fn invalid(count: &str, sides: &str, span: core::ops::Range<usize>, reason: DiceSpecProblem) -> Error {
	Error::InvalidDiceSpec {
		dice: format!("{count}d{sides}"),
		span,
		reason,
	}
}
