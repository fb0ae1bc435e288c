use folio_carousel::{
	BreakpointRule, Breakpoints, Card, CarouselConfig, ExpandingCards, resolve_breakpoint,
};

fn titled(titles: &[&str]) -> Vec<Card> {
	titles.iter().map(|title| Card::new(*title, "")).collect()
}

fn carousel(len: usize) -> ExpandingCards {
	let cards = (0..len).map(|i| Card::new(format!("card {i}"), "")).collect::<Vec<_>>();
	ExpandingCards::mount(cards, CarouselConfig::default(), 1024)
}

#[test]
fn index_stays_in_range_for_mixed_operation_sequences() {
	for len in 1..=6 {
		let mut carousel = carousel(len);
		for step in 0..50usize {
			match step % 5 {
				0 | 3 => carousel.next(),
				1 => carousel.previous(),
				2 => {
					let _ = carousel.activate((step * 7) % (len + 2));
				}
				_ => {
					carousel.resize((step as u32) * 97);
				}
			}
			assert!(carousel.active_index() < len, "len {len}, step {step}");
		}
	}
}

#[test]
fn a_full_cycle_returns_to_the_start() {
	for len in 1..=5 {
		for start in 0..len {
			let mut carousel = carousel(len);
			carousel.activate(start).unwrap();
			for _ in 0..len {
				carousel.next();
			}
			assert_eq!(carousel.active_index(), start);
			for _ in 0..len {
				carousel.previous();
			}
			assert_eq!(carousel.active_index(), start);
		}
	}
}

#[test]
fn exactly_one_card_is_active_in_every_plan() {
	let mut carousel = carousel(4);
	for index in 0..4 {
		carousel.activate(index).unwrap();
		let plan = carousel.plan();
		let active: Vec<usize> = plan
			.cards
			.iter()
			.filter(|view| view.is_active)
			.map(|view| view.index)
			.collect();
		assert_eq!(active, vec![index]);
		assert_eq!(plan.indicators.iter().filter(|dot| dot.is_active).count(), 1);
	}
}

#[test]
fn breakpoint_selection_is_deterministic() {
	let rules = [
		BreakpointRule::new(1024, 4.0, 1.0, 24, 16),
		BreakpointRule::new(640, 5.0, 1.0, 18, 12),
	];
	assert_eq!(resolve_breakpoint(&rules, 800).max_width, 1024);
	assert_eq!(resolve_breakpoint(&rules, 1200), BreakpointRule::DEFAULT);
}

#[test]
fn indicator_activation_is_a_single_step() {
	let mut carousel = carousel(5);
	carousel.activate(3).unwrap();
	assert_eq!(carousel.active_index(), 3);
	carousel.activate(1).unwrap();
	assert_eq!(carousel.active_index(), 1);
}

#[test]
fn three_card_walkthrough() {
	let mut carousel =
		ExpandingCards::mount(titled(&["A", "B", "C"]), CarouselConfig::default(), 1280);
	let title = |c: &ExpandingCards| c.active_card().map(|card| card.title.clone());

	carousel.next();
	assert_eq!(carousel.active_index(), 1);
	assert_eq!(title(&carousel).as_deref(), Some("B"));

	carousel.next();
	carousel.next();
	assert_eq!(carousel.active_index(), 0);
	assert_eq!(title(&carousel).as_deref(), Some("A"));

	carousel.previous();
	assert_eq!(carousel.active_index(), 2);
	assert_eq!(title(&carousel).as_deref(), Some("C"));
}

#[test]
fn empty_card_list_is_inert() {
	let config = CarouselConfig::default().with_breakpoints(Breakpoints::new(vec![
		BreakpointRule::new(640, 5.0, 1.0, 18, 12),
	]));
	let mut carousel = ExpandingCards::mount(Vec::<Card>::new(), config, 500);
	carousel.next();
	carousel.previous();
	assert!(carousel.activate(0).is_err());

	let plan = carousel.plan();
	assert!(plan.cards.is_empty());
	assert!(plan.indicators.is_empty());
}
