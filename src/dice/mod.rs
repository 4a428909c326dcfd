//! All functionality for directly creating dice, rolling them, and working with their resulting rolls.
//!
//! This is the home of the dice "primitives". For replacing dice within a larger expression, see
//! [`resolve_dice`](crate::resolve::resolve_dice).

pub mod roller;

use core::fmt;

pub use self::roller::Roller;
use crate::{
	error::DiceSpecProblem,
	eval::Describe,
	limits::Limits,
};

/// A set of one or more rollable dice with a specific number of sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Dice {
	/// Number of dice to roll
	pub count: u32,

	/// Number of sides for each die
	pub sides: u32,
}

impl Dice {
	/// Creates a new set of dice with a given count and number of sides.
	#[must_use]
	pub const fn new(count: u32, sides: u32) -> Self {
		Self { count, sides }
	}

	/// Checks the dice against the given limits, with `already_rolled` dice counted against the total beforehand.
	///
	/// # Errors
	/// If the count or sides are zero or go past the limits, the matching [`DiceSpecProblem`] is returned.
	///
	/// # Examples
	/// ```
	/// use rollcalc::{dice::Dice, error::DiceSpecProblem, Limits};
	///
	/// let limits = Limits::builder().max_dice(10).build();
	/// assert_eq!(Dice::new(4, 6).check(&limits, 0), Ok(()));
	/// assert_eq!(Dice::new(4, 6).check(&limits, 8), Err(DiceSpecProblem::TooManyDice { max: 10 }));
	/// assert_eq!(Dice::new(4, 0).check(&limits, 0), Err(DiceSpecProblem::NoSides));
	/// ```
	pub const fn check(&self, limits: &Limits, already_rolled: u32) -> Result<(), DiceSpecProblem> {
		if self.count == 0 {
			return Err(DiceSpecProblem::NoDice);
		}
		if self.sides == 0 {
			return Err(DiceSpecProblem::NoSides);
		}
		if self.sides > limits.max_sides {
			return Err(DiceSpecProblem::TooManySides { max: limits.max_sides });
		}
		match already_rolled.checked_add(self.count) {
			Some(total) if total <= limits.max_dice => Ok(()),
			_ => Err(DiceSpecProblem::TooManyDice { max: limits.max_dice }),
		}
	}

	/// Checks whether rolling these dice always gives the same total.
	#[must_use]
	#[inline]
	pub const fn is_deterministic(&self) -> bool {
		self.sides == 1
	}
}

impl Default for Dice {
	/// Creates the default dice (1d20).
	#[inline]
	fn default() -> Self {
		Self::new(1, 20)
	}
}

impl fmt::Display for Dice {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}d{}", self.count, self.sides)
	}
}

/// Representation of the result from rolling [`Dice`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Rolled {
	/// Value of each individual die, in the order they were rolled
	pub rolls: Vec<u32>,

	/// Dice that were rolled to produce this
	pub dice: Dice,
}

impl Rolled {
	/// Calculates the total of all roll values.
	///
	/// # Examples
	/// ```
	/// use rollcalc::dice::{roller::{FastRand as FastRandRoller, Roller}, Dice};
	///
	/// let dice = Dice::new(4, 8);
	/// let rolled = FastRandRoller::default().roll(&dice);
	/// assert_eq!(rolled.total(), rolled.rolls.iter().map(|&roll| u64::from(roll)).sum());
	/// ```
	#[must_use]
	pub fn total(&self) -> u64 {
		self.rolls.iter().copied().map(u64::from).sum()
	}

	/// Creates a new rolled set of dice from a given set of dice and an iterator of values.
	#[must_use]
	pub fn from_dice_and_rolls(dice: Dice, rolls: impl IntoIterator<Item = u32>) -> Self {
		Self {
			rolls: rolls.into_iter().collect(),
			dice,
		}
	}
}

impl Describe for Rolled {
	/// Builds a string of the dice the roll is from and a list of all of the individual rolled dice.
	///
	/// If `list_limit` is specified and there are more rolls than it, the list of rolled dice will be truncated and
	/// appended with "X more..." (where X is the remaining roll count past the max).
	///
	/// # Examples
	/// ```
	/// use rollcalc::{dice::{Dice, Rolled}, Describe};
	///
	/// let rolled = Rolled::from_dice_and_rolls(Dice::new(4, 6), [6, 2, 5, 3]);
	/// assert_eq!(rolled.describe(None), "4d6[6, 2, 5, 3]");
	/// assert_eq!(rolled.describe(Some(2)), "4d6[6, 2, 2 more...]");
	/// ```
	fn describe(&self, list_limit: Option<usize>) -> String {
		let list_limit = list_limit.unwrap_or(usize::MAX);
		let truncated_rolls = self.rolls.len().saturating_sub(list_limit);

		format!(
			"{}[{}{}]",
			self.dice,
			self.rolls
				.iter()
				.take(list_limit)
				.map(ToString::to_string)
				.collect::<Vec<_>>()
				.join(", "),
			if truncated_rolls > 0 {
				format!(", {truncated_rolls} more...")
			} else {
				String::new()
			}
		)
	}
}

impl fmt::Display for Rolled {
	/// Formats the rolls the way they're substituted into an expression: parenthesized and joined with `+`.
	///
	/// # Examples
	/// ```
	/// use rollcalc::dice::{Dice, Rolled};
	///
	/// let rolled = Rolled::from_dice_and_rolls(Dice::new(3, 6), [3, 5, 1]);
	/// assert_eq!(rolled.to_string(), "(3 + 5 + 1)");
	/// ```
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("(")?;
		for (i, roll) in self.rolls.iter().enumerate() {
			if i > 0 {
				f.write_str(" + ")?;
			}
			write!(f, "{roll}")?;
		}
		f.write_str(")")
	}
}
