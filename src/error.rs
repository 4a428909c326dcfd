//! The error type shared by every stage of evaluation.

use core::{fmt, ops::Range};

/// An error resulting from resolving dice in or evaluating an expression
///
/// Spans are byte ranges into the string that was handed to the stage that failed: the raw input for
/// [`Self::InvalidDiceSpec`], and the dice-resolved expression for everything detected by the evaluator.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
	/// A dice pattern has a count or number of sides outside of the accepted range.
	///
	/// # Examples
	/// ```
	/// use rollcalc::{dice::roller::Max as MaxRoller, resolve::resolve_dice, Error, Limits};
	///
	/// let result = resolve_dice("0d6 + 2", &mut MaxRoller, &Limits::default());
	/// assert!(matches!(result, Err(Error::InvalidDiceSpec { .. })));
	/// ```
	#[error("invalid dice \"{dice}\": {reason}")]
	InvalidDiceSpec {
		/// Text of the offending dice pattern
		dice: String,
		/// Location of the dice pattern in the raw expression
		span: Range<usize>,
		/// What is wrong with it
		reason: DiceSpecProblem,
	},

	/// A parenthesis has no matching counterpart.
	#[error("{kind}")]
	UnbalancedParentheses {
		/// Location of the unmatched parenthesis
		span: Range<usize>,
		/// Which side is missing its partner
		kind: Unbalanced,
	},

	/// The expression doesn't alternate between operands and operators, or contains an unknown operator.
	#[error("malformed expression: {problem}")]
	MalformedExpression {
		/// Location of the offending token (empty when the problem is the lack of one)
		span: Range<usize>,
		/// Description of what was wrong
		problem: String,
	},

	/// Applying the operators didn't leave exactly one operand behind.
	#[error("evaluation ended with {remaining} operands instead of 1")]
	EvaluationError {
		/// Number of operands left over
		remaining: usize,
	},

	/// The expression is longer than allowed.
	#[error("expression is {len} bytes long, the limit is {max}")]
	ExpressionTooLong {
		/// Length of the expression
		len: usize,
		/// Configured limit
		max: usize,
	},

	/// Parentheses are nested deeper than allowed.
	#[error("parentheses are nested more than {max} levels deep")]
	NestingTooDeep {
		/// Location of the parenthesis that went over the limit
		span: Range<usize>,
		/// Configured limit
		max: usize,
	},
}

impl Error {
	/// Gets the location of the problem within the string it was detected in, if there is one.
	#[must_use]
	pub fn span(&self) -> Option<Range<usize>> {
		match self {
			Self::InvalidDiceSpec { span, .. }
			| Self::UnbalancedParentheses { span, .. }
			| Self::MalformedExpression { span, .. }
			| Self::NestingTooDeep { span, .. } => Some(span.clone()),
			Self::EvaluationError { .. } | Self::ExpressionTooLong { .. } => None,
		}
	}
}

/// Reason a dice pattern was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DiceSpecProblem {
	/// Zero dice requested
	NoDice,

	/// Dice with zero sides requested
	NoSides,

	/// More sides than the configured maximum
	TooManySides {
		/// Configured limit
		max: u32,
	},

	/// More dice in the whole expression than the configured maximum
	TooManyDice {
		/// Configured limit
		max: u32,
	},
}

impl fmt::Display for DiceSpecProblem {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NoDice => write!(f, "at least one die must be rolled"),
			Self::NoSides => write!(f, "dice must have at least one side"),
			Self::TooManySides { max } => write!(f, "dice can have at most {max} sides"),
			Self::TooManyDice { max } => write!(f, "at most {max} dice can be rolled in one expression"),
		}
	}
}

/// Side of a parenthesis pair that is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[expect(clippy::exhaustive_enums, reason = "There are only two sides to a pair")]
pub enum Unbalanced {
	/// `(` was never closed
	Unclosed,

	/// `)` found with no preceding `(`
	Unopened,
}

impl fmt::Display for Unbalanced {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Unclosed => write!(f, "'(' not closed"),
			Self::Unopened => write!(f, "')' found with no preceding '('"),
		}
	}
}
