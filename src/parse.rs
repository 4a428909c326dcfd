//! Parsers for locating dice patterns within raw expressions.

use chumsky::prelude::*;

/// Chunk of a raw expression, as seen by the dice resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Segment<'src> {
	/// Text to pass through untouched
	Text(&'src str),

	/// Dice pattern, still in textual form
	Dice {
		/// Digits before the `d`
		count: &'src str,
		/// Digits after the `d`
		sides: &'src str,
	},
}

impl Segment<'_> {
	/// Length of the source text this segment covers.
	#[must_use]
	pub const fn len(&self) -> usize {
		match self {
			Self::Text(text) => text.len(),
			// Both digit runs plus the 'd' between them
			Self::Dice { count, sides } => count.len() + 1 + sides.len(),
		}
	}

	/// Checks whether this segment covers no text at all (never true for parsed segments).
	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Generates a parser that specifically handles dice patterns like "3d6" or "12d20".
/// Both the count and the sides must be present, so "d6" and "2d" are not matched.
pub fn dice_part<'src>() -> impl Parser<'src, &'src str, Segment<'src>, extra::Err<Rich<'src, char>>> + Clone {
	text::digits(10)
		.to_slice()
		.then_ignore(just('d'))
		.then(text::digits(10).to_slice())
		.map(|(count, sides)| Segment::Dice { count, sides })
}

/// Generates a parser that splits a whole expression into runs of plain text and the dice patterns between them.
///
/// Matching is leftmost-first and non-overlapping: "112d6" is a single pattern of 112 dice, and "1.5d6" is the text
/// "1." followed by the pattern "5d6".
///
/// # Examples
/// ```
/// use chumsky::Parser;
/// use rollcalc::parse::{segments, Segment};
///
/// let parsed = segments().parse("2d6 + d4").into_result().unwrap();
/// assert_eq!(parsed, vec![Segment::Dice { count: "2", sides: "6" }, Segment::Text(" + d4")]);
/// ```
pub fn segments<'src>() -> impl Parser<'src, &'src str, Vec<Segment<'src>>, extra::Err<Rich<'src, char>>> + Clone {
	let text = any()
		.and_is(dice_part().not())
		.repeated()
		.at_least(1)
		.to_slice()
		.map(Segment::Text);

	choice((dice_part(), text)).repeated().collect().then_ignore(end())
}
