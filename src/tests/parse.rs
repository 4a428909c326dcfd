use chumsky::Parser;

use crate::parse::{dice_part, segments, Segment};

fn split(input: &str) -> Vec<Segment<'_>> {
	segments().parse(input).into_result().unwrap()
}

#[test]
fn plain_dice() {
	let parsed = dice_part().parse("3d6").into_result().unwrap();
	assert_eq!(parsed, Segment::Dice { count: "3", sides: "6" });
}

#[test]
fn dice_need_both_numbers() {
	assert!(dice_part().parse("d6").has_errors());
	assert!(dice_part().parse("2d").has_errors());
}

#[test]
fn no_dice() {
	assert_eq!(split("2 + 3"), vec![Segment::Text("2 + 3")]);
	assert!(split("").is_empty());
}

#[test]
fn dice_between_text() {
	assert_eq!(
		split("(2d6+1)*10d4"),
		vec![
			Segment::Text("("),
			Segment::Dice { count: "2", sides: "6" },
			Segment::Text("+1)*"),
			Segment::Dice { count: "10", sides: "4" },
		]
	);
}

#[test]
fn incomplete_dice_are_text() {
	assert_eq!(split("d6 + 2d"), vec![Segment::Text("d6 + 2d")]);
}

#[test]
fn leftmost_longest_count() {
	assert_eq!(split("112d6"), vec![Segment::Dice { count: "112", sides: "6" }]);
	assert_eq!(
		split("1.5d6"),
		vec![Segment::Text("1."), Segment::Dice { count: "5", sides: "6" }]
	);
}

#[test]
fn adjacent_patterns_do_not_overlap() {
	assert_eq!(
		split("2d6d8"),
		vec![Segment::Dice { count: "2", sides: "6" }, Segment::Text("d8")]
	);
}

#[test]
fn leading_zeros_are_kept() {
	assert_eq!(split("03d06"), vec![Segment::Dice { count: "03", sides: "06" }]);
}

#[test]
fn segment_lengths_cover_input() {
	let input = "4d10 + (1d4 * 3)";
	let total: usize = split(input).iter().map(Segment::len).sum();
	assert_eq!(total, input.len());
}
