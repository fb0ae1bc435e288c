use folio::Breakpoints;

use super::super::util::display_path;
use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	match &config.portfolio {
		Some(path) => println!("  Portfolio: {}", display_path(path)),
		None => println!("  Portfolio: (bundled demo)"),
	}
	println!("  Gap: {}px", config.carousel.gap);
	println!("  Height: {}px", config.carousel.height);
	println!(
		"  Transition: {:.3}s",
		config.carousel.transition_duration.as_secs_f64()
	);
	for line in breakpoint_lines(&config.carousel.breakpoints) {
		println!("  {line}");
	}
	println!(
		"  Theme: {}",
		config
			.theme
			.map(|mode| mode.to_string())
			.unwrap_or_else(|| "(saved preference)".to_string())
	);
	println!(
		"  Cell size: {}x{}px",
		config.metrics.width, config.metrics.height
	);
	println!("  Log level: {}", config.log_level);
}

fn breakpoint_lines(breakpoints: &Breakpoints) -> Vec<String> {
	if breakpoints.is_empty() {
		return vec!["Breakpoints: (defaults)".to_string()];
	}

	breakpoints
		.rules()
		.iter()
		.map(|rule| {
			let bound = if rule.is_unbounded() {
				"any width".to_string()
			} else {
				format!("<= {}px", rule.max_width)
			};
			format!(
				"Breakpoint {bound}: active {} / inactive {}, titles {} / {}",
				rule.active_width, rule.inactive_width, rule.title_active, rule.title_inactive
			)
		})
		.collect()
}
