//! Binary operators and their precedence.

use core::fmt;

/// Highest precedence tier (applied first)
pub const HIGHEST_PRIORITY: u8 = 1;

/// Lowest precedence tier (applied last)
pub const LOWEST_PRIORITY: u8 = 3;

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_enums, reason = "The supported operators are fixed")]
pub enum Operator {
	/// Exponentiation (`**`)
	Power,

	/// Product (`*`)
	Multiply,

	/// Quotient (`/`)
	Divide,

	/// Sum (`+`)
	Add,

	/// Difference (`-`)
	Subtract,
}

impl Operator {
	/// Looks up the operator written as `symbol`.
	///
	/// # Examples
	/// ```
	/// use rollcalc::expr::op::Operator;
	///
	/// assert_eq!(Operator::from_symbol("**"), Some(Operator::Power));
	/// assert_eq!(Operator::from_symbol("-"), Some(Operator::Subtract));
	/// assert_eq!(Operator::from_symbol("*-"), None);
	/// ```
	#[must_use]
	pub fn from_symbol(symbol: &str) -> Option<Self> {
		Some(match symbol {
			"**" => Self::Power,
			"*" => Self::Multiply,
			"/" => Self::Divide,
			"+" => Self::Add,
			"-" => Self::Subtract,
			_ => return None,
		})
	}

	/// Gets the text the operator is written as.
	#[must_use]
	pub const fn symbol(self) -> &'static str {
		match self {
			Self::Power => "**",
			Self::Multiply => "*",
			Self::Divide => "/",
			Self::Add => "+",
			Self::Subtract => "-",
		}
	}

	/// Gets the precedence tier of the operator. Lower numbers bind tighter and are applied first.
	#[must_use]
	pub const fn priority(self) -> u8 {
		match self {
			Self::Power => 1,
			Self::Multiply | Self::Divide => 2,
			Self::Add | Self::Subtract => 3,
		}
	}

	/// Applies the operator to a pair of operands.
	///
	/// Division by zero follows IEEE-754 and produces an infinity or NaN.
	///
	/// # Examples
	/// ```
	/// use rollcalc::expr::op::Operator;
	///
	/// assert_eq!(Operator::Power.apply(2.0, 10.0), 1024.0);
	/// assert_eq!(Operator::Power.apply(4.0, -1.0), 0.25);
	/// assert_eq!(Operator::Divide.apply(1.0, 0.0), f64::INFINITY);
	/// assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
	/// ```
	#[must_use]
	pub fn apply(self, left: f64, right: f64) -> f64 {
		match self {
			Self::Power => left.powf(right),
			Self::Multiply => left * right,
			Self::Divide => left / right,
			Self::Add => left + right,
			Self::Subtract => left - right,
		}
	}
}

impl fmt::Display for Operator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.symbol())
	}
}
