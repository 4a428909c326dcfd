#![feature(test)]

extern crate test;

use test::Bencher;

use rollcalc::{dice::roller::FastRand, evaluate_with, Limits};

#[bench]
fn e2e_basic(b: &mut Bencher) {
	let mut rng = FastRand::default();
	let limits = Limits::default();
	b.iter(|| evaluate_with("4d8 + 4", &mut rng, &limits).unwrap());
}

#[bench]
fn e2e_complex(b: &mut Bencher) {
	let mut rng = FastRand::default();
	let limits = Limits::default();
	b.iter(|| evaluate_with("(5d6-2*3/8+4)**2 + 2d10 * (3d6 - 6 / 2)", &mut rng, &limits).unwrap());
}
