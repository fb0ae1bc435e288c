//! Proportional width distribution with minimum sizes.
//!
//! Mirrors CSS flex resolution with a zero basis: space is shared by weight,
//! items that would end up below their minimum are frozen at it and the rest
//! is shared again among the remaining items.

/// One participant of the distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexItem {
	pub weight: f32,
	pub min: u16,
}

impl FlexItem {
	#[must_use]
	pub const fn new(weight: f32, min: u16) -> Self {
		Self { weight, min }
	}
}

/// Split `total` cells among `items`.
///
/// The result always sums to `total` when `items` is non-empty. Minimums are
/// ignored entirely when they cannot all be honoured.
#[must_use]
pub fn distribute(total: u16, items: &[FlexItem]) -> Vec<u16> {
	if items.is_empty() {
		return Vec::new();
	}

	let mins_fit = items.iter().map(|item| u32::from(item.min)).sum::<u32>() <= u32::from(total);
	let mut frozen: Vec<Option<u16>> = vec![None; items.len()];

	loop {
		let used: u32 = frozen.iter().flatten().map(|&w| u32::from(w)).sum();
		let remaining = u32::from(total).saturating_sub(used);
		let open: Vec<usize> = (0..items.len()).filter(|&i| frozen[i].is_none()).collect();
		if open.is_empty() {
			break;
		}

		let shares = proportional_shares(remaining, open.iter().map(|&i| items[i].weight));

		let mut violated = false;
		if mins_fit {
			for (&i, &share) in open.iter().zip(&shares) {
				if share < f64::from(items[i].min) {
					frozen[i] = Some(items[i].min);
					violated = true;
				}
			}
		}
		if violated {
			continue;
		}

		for (&i, width) in open.iter().zip(round_shares(remaining, &shares)) {
			frozen[i] = Some(width);
		}
		break;
	}

	frozen.into_iter().map(|w| w.unwrap_or(0)).collect()
}

fn proportional_shares(remaining: u32, weights: impl Iterator<Item = f32>) -> Vec<f64> {
	let weights: Vec<f64> = weights.map(|w| f64::from(w.max(0.0))).collect();
	let sum: f64 = weights.iter().sum();
	let remaining = f64::from(remaining);
	if sum <= 0.0 {
		let even = remaining / weights.len() as f64;
		return vec![even; weights.len()];
	}
	weights.iter().map(|w| remaining * w / sum).collect()
}

/// Largest-remainder rounding so the parts add up to `total`.
fn round_shares(total: u32, shares: &[f64]) -> Vec<u16> {
	let mut widths: Vec<u32> = shares.iter().map(|s| s.floor() as u32).collect();
	let assigned: u32 = widths.iter().sum();
	let mut leftover = total.saturating_sub(assigned);

	let mut order: Vec<usize> = (0..shares.len()).collect();
	order.sort_by(|&a, &b| {
		let ra = shares[a] - shares[a].floor();
		let rb = shares[b] - shares[b].floor();
		rb.total_cmp(&ra).then(a.cmp(&b))
	});
	for i in order {
		if leftover == 0 {
			break;
		}
		widths[i] += 1;
		leftover -= 1;
	}

	widths
		.into_iter()
		.map(|w| u16::try_from(w).unwrap_or(u16::MAX))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn widths_follow_weights_and_sum_to_total() {
		let items = [FlexItem::new(4.0, 0), FlexItem::new(1.0, 0), FlexItem::new(1.0, 0)];
		let widths = distribute(60, &items);
		assert_eq!(widths, vec![40, 10, 10]);
	}

	#[test]
	fn rounding_never_loses_cells() {
		let items = [FlexItem::new(1.0, 0); 3];
		let widths = distribute(10, &items);
		assert_eq!(widths.iter().sum::<u16>(), 10);
		assert_eq!(widths, vec![4, 3, 3]);
	}

	#[test]
	fn items_below_minimum_are_frozen_and_space_is_redistributed() {
		let items = [
			FlexItem::new(400.0, 0),
			FlexItem::new(100.0, 8),
			FlexItem::new(100.0, 8),
		];
		let widths = distribute(30, &items);
		assert_eq!(widths, vec![14, 8, 8]);
	}

	#[test]
	fn impossible_minimums_are_ignored() {
		let items = [FlexItem::new(1.0, 20), FlexItem::new(1.0, 20)];
		assert_eq!(distribute(10, &items), vec![5, 5]);
	}

	#[test]
	fn zero_weights_share_evenly() {
		let items = [FlexItem::new(0.0, 0), FlexItem::new(0.0, 0)];
		assert_eq!(distribute(9, &items), vec![5, 4]);
	}

	#[test]
	fn empty_input_is_empty() {
		assert!(distribute(100, &[]).is_empty());
	}
}
