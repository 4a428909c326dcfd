#![feature(test)]

extern crate test;

use chumsky::Parser;
use test::Bencher;

use rollcalc::expr::calculate;

#[bench]
fn segments_basic(b: &mut Bencher) {
	let parser = rollcalc::parse::segments();
	b.iter(|| parser.parse("4d8 + 4").into_result().unwrap());
}

#[bench]
fn segments_complex(b: &mut Bencher) {
	let parser = rollcalc::parse::segments();
	b.iter(|| parser.parse("4d8 + 2d10 * (3d6 - 6 / 2 ** 4)").into_result().unwrap());
}

#[bench]
fn calculate_flat(b: &mut Bencher) {
	b.iter(|| calculate("1 + 2 * 3 - 4 / 5 ** 6 + 7 * 8 - 9").unwrap());
}

#[bench]
fn calculate_nested(b: &mut Bencher) {
	b.iter(|| calculate("((1 + 2) * (3 - (4 / (5 ** 2)))) + ((7 * 8) - 9)").unwrap());
}
