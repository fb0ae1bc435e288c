use thiserror::Error;

/// Errors produced by [`ExpandingCards`](crate::ExpandingCards) operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
	/// `activate` was called with an index outside `0..len`. The active card is
	/// left unchanged.
	#[error("card index {index} is out of range for {len} cards")]
	IndexOutOfRange { index: usize, len: usize },
}
