/// Sections of the screen reachable from the tab row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Panel {
	#[default]
	Projects,
	About,
	Skills,
}

impl Panel {
	pub const ALL: [Self; 3] = [Self::Projects, Self::About, Self::Skills];

	#[must_use]
	pub fn title(self) -> &'static str {
		match self {
			Self::Projects => "Projects",
			Self::About => "About",
			Self::Skills => "Skills",
		}
	}

	#[must_use]
	pub fn index(self) -> usize {
		match self {
			Self::Projects => 0,
			Self::About => 1,
			Self::Skills => 2,
		}
	}

	#[must_use]
	pub fn next(self) -> Self {
		Self::ALL[(self.index() + 1) % Self::ALL.len()]
	}

	#[must_use]
	pub fn previous(self) -> Self {
		Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cycling_wraps_in_both_directions() {
		assert_eq!(Panel::Projects.next(), Panel::About);
		assert_eq!(Panel::Skills.next(), Panel::Projects);
		assert_eq!(Panel::Projects.previous(), Panel::Skills);
		for panel in Panel::ALL {
			assert_eq!(Panel::ALL[panel.index()], panel);
		}
	}
}
