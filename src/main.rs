use std::{
	env,
	io::{self, Write},
	ops::Range,
	process::ExitCode,
};

use ariadne::{Color, Label, Report, ReportKind, Source};
use rollcalc::{dice::roller::FastRand, expr::calculate_within, resolve::resolve_dice, Describe, Error, Evaluation, Limits};

/// Longest message the chat command is allowed to send back
const MAX_OUTPUT_LENGTH: usize = 2000;

fn main() -> ExitCode {
	pretty_env_logger::init();

	let input = match read_input() {
		Ok(input) => input,
		Err(err) => {
			eprintln!("Unable to read expression: {err}");
			return ExitCode::FAILURE;
		}
	};
	log::info!("evaluating \"{}\"", input);

	let limits = Limits::default();
	let resolved = match resolve_dice(&input, &mut FastRand::default(), &limits) {
		Ok(resolved) => resolved,
		Err(err) => {
			report(&err, &input);
			return ExitCode::FAILURE;
		}
	};

	for rolled in &resolved.rolls {
		println!("Rolled: {}", rolled.describe(Some(20)));
	}

	match calculate_within(&resolved.expr, &limits.for_expanded()) {
		Ok(result) => {
			let evaluation = Evaluation::new(resolved.expr, result, resolved.rolls);
			println!("{}", evaluation.describe(Some(MAX_OUTPUT_LENGTH)));
			ExitCode::SUCCESS
		}
		// Calculation errors point into the expression as it was after rolling
		Err(err) => {
			report(&err, &resolved.expr);
			ExitCode::FAILURE
		}
	}
}

/// Obtains the expression by combining all args passed to the executable, so that it can be left unquoted even with
/// spaces, or from the first line of stdin if there are no args.
fn read_input() -> io::Result<String> {
	let args = env::args();
	if args.len() > 1 {
		// The first argument is ignored since it is typically the name of the executable itself
		return Ok(args.skip(1).collect::<Vec<String>>().join(" "));
	}

	let mut lines = io::stdin().lines();

	// If there isn't already input available in stdin, display a prompt for it
	if lines.size_hint().1.is_none() {
		print!("Enter expression: ");
		io::stdout().flush()?;
	}

	lines.next().unwrap_or_else(|| Ok(String::new()))
}

/// Prints an error, pointing at the part of `source` it's about when possible.
fn report(err: &Error, source: &str) {
	let Some(span) = err.span() else {
		eprintln!("Error: {err}");
		return;
	};

	// Reports are positioned by character rather than by byte
	let to_char_idx = |byte_idx: usize| source.get(..byte_idx.min(source.len())).map_or(0, |text| text.chars().count());
	let span: Range<usize> = to_char_idx(span.start)..to_char_idx(span.end);
	let printed = Report::build(ReportKind::Error, span.clone())
		.with_message(err.to_string())
		.with_label(Label::new(span).with_message("here").with_color(Color::Red))
		.finish()
		.eprint(Source::from(source));

	if printed.is_err() {
		eprintln!("Error: {err}");
	}
}
