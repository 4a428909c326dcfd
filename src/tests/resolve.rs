use crate::{
	dice::{
		roller::{FastRand as FastRandRoller, Iter as IterRoller, Max as MaxRoller},
		Dice,
	},
	error::{DiceSpecProblem, Error},
	resolve::{is_deterministic, resolve_dice},
	Limits,
};

#[test]
fn fixed_rolls_expand_exactly() {
	let resolved = resolve_dice("3d6", &mut IterRoller::new([3, 5, 1]), &Limits::default()).unwrap();
	assert_eq!(resolved.expr, "(3 + 5 + 1)");
	assert_eq!(resolved.rolls.len(), 1);
	assert_eq!(resolved.rolls[0].dice, Dice::new(3, 6));
	assert_eq!(resolved.rolls[0].rolls, vec![3, 5, 1]);
}

#[test]
fn multiple_patterns_in_order() {
	let resolved = resolve_dice("2d4 * (1d20 + 5)", &mut IterRoller::new([1, 4, 17]), &Limits::default()).unwrap();
	assert_eq!(resolved.expr, "(1 + 4) * ((17) + 5)");
	assert_eq!(resolved.rolls.len(), 2);
	assert_eq!(resolved.rolls[1].total(), 17);
}

#[test]
fn dice_and_text_interleave() {
	let resolved = resolve_dice("1d4+2d4-3+1d4", &mut IterRoller::new([1, 2, 3, 4]), &Limits::default()).unwrap();
	assert_eq!(resolved.expr, "(1)+(2 + 3)-3+(4)");
	let counts = resolved.rolls.iter().map(|rolled| rolled.dice.count).collect::<Vec<_>>();
	assert_eq!(counts, vec![1, 2, 1]);
}

#[test]
fn nesting_checked_before_rolling() {
	let limits = Limits::builder().max_depth(1).build();
	assert_eq!(
		resolve_dice("((1d6))", &mut IterRoller::new(Vec::<u32>::new()), &limits).unwrap_err(),
		Error::NestingTooDeep { span: 1..2, max: 1 }
	);
	assert!(resolve_dice("(1d6)", &mut MaxRoller, &limits).is_ok());
}

#[test]
fn text_without_dice_is_untouched() {
	let resolved = resolve_dice("d6 + 2d - 4", &mut MaxRoller, &Limits::default()).unwrap();
	assert_eq!(resolved.expr, "d6 + 2d - 4");
	assert!(resolved.rolls.is_empty());
}

#[test]
fn random_rolls_stay_in_range() {
	let mut roller = FastRandRoller::default();
	for _ in 0..50 {
		let resolved = resolve_dice("5d8", &mut roller, &Limits::default()).unwrap();
		let terms = resolved
			.expr
			.trim_start_matches('(')
			.trim_end_matches(')')
			.split(" + ")
			.map(|term| term.parse::<u32>().unwrap())
			.collect::<Vec<_>>();
		assert_eq!(terms.len(), 5);
		assert!(terms.iter().all(|term| (1..=8).contains(term)));
		assert_eq!(terms, resolved.rolls[0].rolls);
	}
}

#[test]
fn zero_count_is_invalid() {
	let err = resolve_dice("1 + 0d6", &mut MaxRoller, &Limits::default()).unwrap_err();
	assert_eq!(
		err,
		Error::InvalidDiceSpec {
			dice: "0d6".to_owned(),
			span: 4..7,
			reason: DiceSpecProblem::NoDice,
		}
	);
}

#[test]
fn zero_sides_is_invalid() {
	let err = resolve_dice("4d0", &mut MaxRoller, &Limits::default()).unwrap_err();
	assert!(matches!(
		err,
		Error::InvalidDiceSpec {
			reason: DiceSpecProblem::NoSides,
			..
		}
	));
}

#[test]
fn absurd_count_is_invalid() {
	let err = resolve_dice("9999999999d6", &mut MaxRoller, &Limits::default()).unwrap_err();
	assert!(matches!(
		err,
		Error::InvalidDiceSpec {
			reason: DiceSpecProblem::TooManyDice { .. },
			..
		}
	));

	let err = resolve_dice("2000000d6", &mut MaxRoller, &Limits::default()).unwrap_err();
	assert!(matches!(
		err,
		Error::InvalidDiceSpec {
			reason: DiceSpecProblem::TooManyDice { max: 1000 },
			..
		}
	));
}

#[test]
fn absurd_sides_are_invalid() {
	let err = resolve_dice("1d99999999999", &mut MaxRoller, &Limits::default()).unwrap_err();
	assert!(matches!(
		err,
		Error::InvalidDiceSpec {
			reason: DiceSpecProblem::TooManySides { .. },
			..
		}
	));
}

#[test]
fn dice_limit_covers_whole_expression() {
	let limits = Limits::builder().max_dice(10).build();
	assert!(resolve_dice("5d6 + 5d6", &mut MaxRoller, &limits).is_ok());

	// The roller has no values to give, so nothing may be rolled before the limit is found to be exceeded
	let err = resolve_dice("5d6 + 6d6", &mut IterRoller::new(Vec::<u32>::new()), &limits).unwrap_err();
	assert_eq!(err.span(), Some(6..9));
}

#[test]
fn length_limit() {
	let limits = Limits::builder().max_len(3).build();
	assert_eq!(
		resolve_dice("1d20", &mut MaxRoller, &limits).unwrap_err(),
		Error::ExpressionTooLong { len: 4, max: 3 }
	);
}

#[test]
fn determinism() {
	assert!(is_deterministic("(2+3)*4"));
	assert!(is_deterministic("3d1 * 2"));
	assert!(!is_deterministic("3d6 * 2"));
	assert!(is_deterministic("d6"));
}
