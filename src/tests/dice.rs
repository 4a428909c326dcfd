use crate::{
	dice::{
		roller::{FastRand as FastRandRoller, Iter as IterRoller, Max as MaxRoller, Roller, Val as ValRoller},
		Dice, Rolled,
	},
	error::DiceSpecProblem,
	Describe, Limits,
};

#[test]
fn single_d20() {
	let dice = Dice::new(1, 20);
	let rolled = rolls_in_range(&dice);
	assert_eq!(rolled.rolls.len(), 1);
	assert_eq!(rolled.dice, dice);
}

#[test]
fn double_d8() {
	let dice = Dice::new(2, 8);
	let rolled = rolls_in_range(&dice);
	assert_eq!(rolled.rolls.len(), 2);
	assert_eq!(rolled.dice, dice);
}

#[test]
fn thousand_d42s() {
	let dice = Dice::new(1000, 42);
	let rolled = rolls_in_range(&dice);
	assert_eq!(rolled.rolls.len(), 1000);
}

#[test]
fn all_dice_sides_occur() {
	let dice = Dice::new(255, 20);
	let mut roller = FastRandRoller::default();
	let mut rolls = Vec::new();

	for _ in 1..=100 {
		rolls.append(&mut roller.roll(&dice).rolls);
	}

	assert!(rolls.iter().all(|&roll| (1..=20).contains(&roll)));
	for side in 1..=20 {
		assert!(rolls.iter().any(|&roll| roll == side));
	}
}

#[test]
fn seeded_rollers_agree() {
	let dice = Dice::new(10, 100);
	let first = FastRandRoller::with_seed(42).roll(&dice);
	let second = FastRandRoller::with_seed(42).roll(&dice);
	assert_eq!(first, second);
}

#[test]
fn fixed_rollers() {
	let dice = Dice::new(3, 6);
	assert_eq!(ValRoller(4).roll(&dice).rolls, vec![4, 4, 4]);
	assert_eq!(MaxRoller.roll(&dice).rolls, vec![6, 6, 6]);

	let mut roller = IterRoller::new([3, 5, 1, 2]);
	assert_eq!(roller.roll(&dice).rolls, vec![3, 5, 1]);
	assert!(roller.can_roll());
}

#[test]
fn rolled_display_is_parenthesized_sum() {
	let rolled = Rolled::from_dice_and_rolls(Dice::new(3, 6), [3, 5, 1]);
	assert_eq!(rolled.to_string(), "(3 + 5 + 1)");
	assert_eq!(rolled.total(), 9);

	let single = Rolled::from_dice_and_rolls(Dice::new(1, 20), [17]);
	assert_eq!(single.to_string(), "(17)");
}

#[test]
fn rolled_description_truncates() {
	let rolled = Rolled::from_dice_and_rolls(Dice::new(5, 10), [1, 2, 3, 4, 10]);
	assert_eq!(rolled.describe(None), "5d10[1, 2, 3, 4, 10]");
	assert_eq!(rolled.describe(Some(3)), "5d10[1, 2, 3, 2 more...]");
	assert_eq!(rolled.describe(Some(0)), "5d10[, 5 more...]");
}

#[test]
fn dice_display() {
	assert_eq!(Dice::new(4, 8).to_string(), "4d8");
	assert_eq!(Dice::default().to_string(), "1d20");
}

#[test]
fn dice_equality() {
	assert_eq!(Dice::new(4, 8), Dice::new(4, 8));
	assert_ne!(Dice::new(4, 8), Dice::new(4, 20));
	assert_ne!(Dice::new(4, 8), Dice::new(2, 8));
}

#[test]
fn check_against_limits() {
	let limits = Limits::builder().max_dice(10).max_sides(100).build();
	assert_eq!(Dice::new(10, 100).check(&limits, 0), Ok(()));
	assert_eq!(Dice::new(0, 6).check(&limits, 0), Err(DiceSpecProblem::NoDice));
	assert_eq!(Dice::new(2, 0).check(&limits, 0), Err(DiceSpecProblem::NoSides));
	assert_eq!(
		Dice::new(2, 101).check(&limits, 0),
		Err(DiceSpecProblem::TooManySides { max: 100 })
	);
	assert_eq!(
		Dice::new(11, 6).check(&limits, 0),
		Err(DiceSpecProblem::TooManyDice { max: 10 })
	);
	assert_eq!(
		Dice::new(1, 6).check(&limits, u32::MAX),
		Err(DiceSpecProblem::TooManyDice { max: 10 })
	);
}

#[test]
fn determinism() {
	assert!(Dice::new(8, 1).is_deterministic());
	assert!(!Dice::new(1, 2).is_deterministic());
}

fn rolls_in_range(dice: &Dice) -> Rolled {
	let rolled = FastRandRoller::default().roll(dice);
	assert!(rolled.rolls.iter().all(|&roll| roll >= 1 && roll <= dice.sides));
	rolled
}
