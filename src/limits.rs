//! Resource limits applied while resolving dice and evaluating expressions.

/// Upper bounds on the work a single evaluation is allowed to do.
///
/// Going over any of these results in an ordinary error rather than the evaluation being attempted.
///
/// # Examples
/// ```
/// use rollcalc::Limits;
///
/// let limits = Limits::builder().max_dice(50).max_sides(100).build();
/// assert_eq!(limits.max_dice, 50);
/// assert_eq!(limits.max_sides, 100);
/// assert_eq!(limits.max_len, Limits::default().max_len);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_structs, reason = "Built with struct update syntax by callers")]
pub struct Limits {
	/// Total number of dice that may be rolled for one expression
	pub max_dice: u32,

	/// Number of sides a single die may have
	pub max_sides: u32,

	/// Length in bytes of the expression as given, before any dice are rolled
	pub max_len: usize,

	/// Depth parentheses may be nested to
	pub max_depth: usize,
}

impl Limits {
	/// Creates the default limits: 1000 dice, 10000 sides, 4096 bytes and 64 levels of nesting.
	#[must_use]
	pub const fn new() -> Self {
		Self {
			max_dice: 1000,
			max_sides: 10_000,
			max_len: 4096,
			max_depth: 64,
		}
	}

	/// Creates limits that never trigger. Only suitable for trusted input.
	#[must_use]
	pub const fn unlimited() -> Self {
		Self {
			max_dice: u32::MAX,
			max_sides: u32::MAX,
			max_len: usize::MAX,
			max_depth: usize::MAX,
		}
	}

	/// Gets the limits to calculate a dice-resolved expression with. The length limit is lifted, since the expanded
	/// length is already bounded by [`Self::max_dice`] and [`Self::max_sides`], and the depth limit allows for the
	/// parentheses each set of rolls is wrapped in. Dice within the limits must never be rejected after they've been
	/// rolled.
	///
	/// # Examples
	/// ```
	/// use rollcalc::Limits;
	///
	/// let limits = Limits::default().for_expanded();
	/// assert_eq!(limits.max_len, usize::MAX);
	/// assert_eq!(limits.max_depth, Limits::default().max_depth + 1);
	/// ```
	#[must_use]
	pub const fn for_expanded(&self) -> Self {
		Self {
			max_len: usize::MAX,
			max_depth: self.max_depth.saturating_add(1),
			..*self
		}
	}

	/// Creates a new limits builder, starting from the defaults.
	#[must_use]
	#[inline]
	pub fn builder() -> Builder {
		Builder::default()
	}
}

impl Default for Limits {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

/// Builds [`Limits`] with a fluent interface.
#[derive(Debug, Clone, Default)]
pub struct Builder(Limits);

impl Builder {
	/// Sets the total number of dice one expression may roll.
	#[must_use]
	pub const fn max_dice(mut self, max: u32) -> Self {
		self.0.max_dice = max;
		self
	}

	/// Sets the number of sides a die may have.
	#[must_use]
	pub const fn max_sides(mut self, max: u32) -> Self {
		self.0.max_sides = max;
		self
	}

	/// Sets the maximum expression length in bytes.
	#[must_use]
	pub const fn max_len(mut self, max: usize) -> Self {
		self.0.max_len = max;
		self
	}

	/// Sets how deep parentheses may be nested.
	#[must_use]
	pub const fn max_depth(mut self, max: usize) -> Self {
		self.0.max_depth = max;
		self
	}

	/// Finalizes the limits.
	#[must_use]
	pub const fn build(self) -> Limits {
		self.0
	}
}
