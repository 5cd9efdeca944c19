// Step thresholds for the 1/2/5/10 tick heuristic.
const E10: f64 = 7.071067811865476; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Continuous linear mapping from a value domain to a pixel range.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
	d0: f64,
	d1: f64,
	r0: f64,
	r1: f64,
}

impl LinearScale {
	pub fn new(d0: f64, d1: f64, r0: f64, r1: f64) -> Self {
		Self { d0, d1, r0, r1 }
	}

	/// Map a domain value into the range. A collapsed domain maps every
	/// input to the range midpoint rather than dividing by zero.
	pub fn scale(&self, value: f64) -> f64 {
		let span = self.d1 - self.d0;
		let t = if span == 0.0 {
			0.5
		} else {
			(value - self.d0) / span
		};
		self.r0 + t * (self.r1 - self.r0)
	}

	pub fn ticks(&self, count: usize) -> Vec<f64> {
		ticks(self.d0, self.d1, count)
	}
}

/// Roughly `count` human-friendly values inside `[start, stop]`: multiples
/// of 1, 2, 5 or 10 scaled by a power of ten. The count is approximate;
/// the bounds are not. Identical inputs always yield identical ticks.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
	if count == 0 {
		return Vec::new();
	}
	if start == stop {
		return vec![start];
	}
	let reverse = stop < start;
	let (i1, i2, inc) = if reverse {
		tick_spec(stop, start, count as f64)
	} else {
		tick_spec(start, stop, count as f64)
	};
	if i2 < i1 {
		return Vec::new();
	}
	let n = (i2 - i1) as usize + 1;
	let mut values = Vec::with_capacity(n);
	for i in 0..n {
		let j = if reverse { i2 - i as f64 } else { i1 + i as f64 };
		// A negative increment marks divide mode, which keeps fractional
		// steps exact (3 / 10 rather than 3 * 0.1).
		values.push(if inc < 0.0 { j / -inc } else { j * inc });
	}
	values
}

/// Tick indices `[i1, i2]` and the increment between them. The increment is
/// negated when ticks should be produced by division.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
	let step = (stop - start) / count.max(0.0);
	let power = step.log10().floor();
	let error = step / 10f64.powf(power);
	let factor = if error >= E10 {
		10.0
	} else if error >= E5 {
		5.0
	} else if error >= E2 {
		2.0
	} else {
		1.0
	};

	let (i1, i2, inc) = if power < 0.0 {
		let denom = 10f64.powf(-power) / factor;
		let mut i1 = (start * denom).round();
		let mut i2 = (stop * denom).round();
		if i1 / denom < start {
			i1 += 1.0;
		}
		if i2 / denom > stop {
			i2 -= 1.0;
		}
		(i1, i2, -denom)
	} else {
		let step = 10f64.powf(power) * factor;
		let mut i1 = (start / step).round();
		let mut i2 = (stop / step).round();
		if i1 * step < start {
			i1 += 1.0;
		}
		if i2 * step > stop {
			i2 -= 1.0;
		}
		(i1, i2, step)
	};

	if i2 < i1 && 0.5 <= count && count < 2.0 {
		return tick_spec(start, stop, count * 2.0);
	}
	(i1, i2, inc)
}

/// Label for a tick value: shortest round-trip decimal, no trailing `.0`.
pub fn tick_label(value: f64) -> String {
	format!("{value}")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ticks_use_round_steps_spanning_the_domain() {
		assert_eq!(
			ticks(0.0, 5.0, 8),
			vec![0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0]
		);
	}

	#[test]
	fn ticks_prefer_multiples_of_two() {
		assert_eq!(ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
	}

	#[test]
	fn fractional_steps_stay_exact() {
		let expected: Vec<f64> = (0..=10).map(|i| i as f64 / 10.0).collect();
		assert_eq!(ticks(0.0, 1.0, 8), expected);
	}

	#[test]
	fn ticks_never_leave_an_uneven_domain() {
		let values = ticks(0.3, 9.7, 8);
		assert_eq!(values.first(), Some(&1.0));
		assert_eq!(values.last(), Some(&9.0));
		assert!(values.iter().all(|v| (0.3..=9.7).contains(v)));
	}

	#[test]
	fn requested_count_is_approximate() {
		// 8 requested, 11 delivered: the heuristic trades exact count for
		// round values.
		assert_eq!(ticks(0.0, 5.0, 8).len(), 11);
	}

	#[test]
	fn collapsed_domain_yields_a_single_tick() {
		assert_eq!(ticks(2.0, 2.0, 8), vec![2.0]);
	}

	#[test]
	fn zero_count_yields_nothing() {
		assert!(ticks(0.0, 1.0, 0).is_empty());
	}

	#[test]
	fn descending_domain_descends() {
		assert_eq!(ticks(5.0, 0.0, 5), vec![5.0, 4.0, 3.0, 2.0, 1.0, 0.0]);
	}

	#[test]
	fn tiny_count_still_finds_a_round_value() {
		assert_eq!(ticks(0.1, 0.9, 1), vec![0.5]);
	}

	#[test]
	fn scale_maps_domain_onto_range() {
		let scale = LinearScale::new(0.0, 5.0, 30.0, 870.0);
		assert_eq!(scale.scale(0.0), 30.0);
		assert_eq!(scale.scale(5.0), 870.0);
		assert_eq!(scale.scale(2.5), 450.0);
	}

	#[test]
	fn collapsed_domain_maps_to_range_midpoint() {
		let scale = LinearScale::new(3.0, 3.0, 0.0, 100.0);
		assert_eq!(scale.scale(3.0), 50.0);
		assert_eq!(scale.scale(7.0), 50.0);
	}

	#[test]
	fn labels_drop_trailing_zeroes() {
		assert_eq!(tick_label(1.0), "1");
		assert_eq!(tick_label(0.5), "0.5");
		assert_eq!(tick_label(10.0), "10");
	}

	#[test]
	fn identical_inputs_yield_identical_ticks() {
		assert_eq!(ticks(0.0, 7.3, 8), ticks(0.0, 7.3, 8));
	}
}
