/// Style variant of a [`Link`](crate::link::Link): a filled button or a
/// plain text link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LinkStyleVariant {
	/// Plain text link. This is the default.
	#[default]
	Plain,
	/// Filled button
	Contained,
}
