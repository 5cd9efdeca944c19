use std::collections::HashMap;

use super::types::{TangleData, TangleNode};

pub const DEFAULT_MARKER_ID: &str = "arrowhead";
pub const APPROVED_MARKER_ID: &str = "arrowhead-approved";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkStyle {
	Default,
	Approved,
}

impl LinkStyle {
	pub fn class(self) -> &'static str {
		match self {
			LinkStyle::Default => "links",
			LinkStyle::Approved => "links approved",
		}
	}

	pub fn marker_end(self) -> &'static str {
		match self {
			LinkStyle::Default => "url(#arrowhead)",
			LinkStyle::Approved => "url(#arrowhead-approved)",
		}
	}
}

/// Approval and tip flags are independent; a node can carry both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NodeStyle {
	pub approved: bool,
	pub tip: bool,
}

impl NodeStyle {
	pub fn class(self) -> &'static str {
		match (self.approved, self.tip) {
			(false, false) => "",
			(true, false) => "approved",
			(false, true) => "tip",
			(true, true) => "approved tip",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinkScene {
	pub source: String,
	pub target: String,
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
	pub style: LinkStyle,
}

impl LinkScene {
	pub fn path_data(&self) -> String {
		format!("M {} {} L {} {}", self.x1, self.y1, self.x2, self.y2)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeScene {
	pub name: String,
	pub x: f64,
	pub y: f64,
	pub style: NodeStyle,
	pub label: Option<String>,
}

/// Straight segments for every link whose endpoints both resolve in the
/// current node set. A link that references an unknown name is dropped
/// rather than drawn from nowhere.
pub fn resolve_links(data: &TangleData) -> Vec<LinkScene> {
	let by_name: HashMap<&str, &TangleNode> =
		data.nodes.iter().map(|n| (n.name.as_str(), n)).collect();

	data.links
		.iter()
		.filter_map(|link| {
			let source = by_name.get(link.source.as_str())?;
			let target = by_name.get(link.target.as_str())?;
			let style = if data.approved_links.contains(link) {
				LinkStyle::Approved
			} else {
				LinkStyle::Default
			};
			Some(LinkScene {
				source: link.source.clone(),
				target: link.target.clone(),
				x1: source.x,
				y1: source.y,
				x2: target.x,
				y2: target.y,
				style,
			})
		})
		.collect()
}

pub fn resolve_nodes(data: &TangleData, show_labels: bool) -> Vec<NodeScene> {
	data.nodes
		.iter()
		.map(|node| NodeScene {
			name: node.name.clone(),
			x: node.x,
			y: node.y,
			style: NodeStyle {
				approved: data.approved_nodes.contains(&node.name),
				tip: data.tips.contains(&node.name),
			},
			label: show_labels.then(|| node.name.clone()),
		})
		.collect()
}

/// Upper bound of the time axis. Fewer than two nodes pin it to 1 so the
/// domain never collapses to an empty maximum.
pub fn time_domain_end(nodes: &[TangleNode]) -> f64 {
	if nodes.len() < 2 {
		1.0
	} else {
		nodes.iter().map(|n| n.time).fold(f64::NEG_INFINITY, f64::max)
	}
}
