#![feature(test)]

extern crate test;

use test::Bencher;

use rollcalc::{
	dice::{roller::FastRand, Dice, Roller, Rolled},
	Describe,
};

#[bench]
fn roll_4d8(b: &mut Bencher) {
	let dice = Dice::new(4, 8);
	let mut rng = FastRand::default();
	b.iter(|| rng.roll(&dice));
}

#[bench]
fn roll_100d20(b: &mut Bencher) {
	let dice = Dice::new(100, 20);
	let mut rng = FastRand::default();
	b.iter(|| rng.roll(&dice));
}

#[bench]
fn roll_and_total_100d20(b: &mut Bencher) {
	let dice = Dice::new(100, 20);
	let mut rng = FastRand::default();
	b.iter(|| rng.roll(&dice).total());
}

#[bench]
fn expand_100d20_result(b: &mut Bencher) {
	let rolled = Rolled::from_dice_and_rolls(Dice::new(100, 20), (1..=100).map(|i| i % 20 + 1));
	b.iter(|| rolled.to_string());
}

#[bench]
fn describe_100d20_result(b: &mut Bencher) {
	let rolled = Rolled::from_dice_and_rolls(Dice::new(100, 20), (1..=100).map(|i| i % 20 + 1));
	b.iter(|| rolled.describe(Some(10)));
}
