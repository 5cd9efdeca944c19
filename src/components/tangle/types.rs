use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq)]
pub struct TangleNode {
	pub name: String,
	pub x: f64,
	pub y: f64,
	pub time: f64,
}

/// A directed approval edge, identified by its `(source, target)` name pair.
/// Two links with the same endpoints share that identity: both are drawn,
/// and approval membership styles them alike.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TangleLink {
	pub source: String,
	pub target: String,
}

/// One fully resolved layout, produced upstream and borrowed for a single
/// render pass. Membership in the three sets is keyed by node name and by
/// link endpoint pair, never by reference.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TangleData {
	pub nodes: Vec<TangleNode>,
	pub links: Vec<TangleLink>,
	pub approved_nodes: HashSet<String>,
	pub approved_links: HashSet<TangleLink>,
	pub tips: HashSet<String>,
}
