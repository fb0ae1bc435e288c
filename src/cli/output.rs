use anyhow::Result;
use folio::ViewerOutcome;

/// Print a plain-text representation of the viewer outcome.
pub(crate) fn print_plain(outcome: &ViewerOutcome) {
	if !outcome.accepted {
		println!("Closed without a selection");
		return;
	}

	match outcome.display_text() {
		Some(text) => println!("{text}"),
		None => println!("No selection"),
	}
}

/// Format the viewer outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &ViewerOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the viewer outcome.
pub(crate) fn print_json(outcome: &ViewerOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
