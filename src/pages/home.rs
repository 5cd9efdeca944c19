use std::collections::HashSet;

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use crate::components::tangle::{TangleData, TangleLink, TangleNode, TangleView};

const WIDTH: f64 = 900.0;
const HEIGHT: f64 = 420.0;

/// Generate a deterministic sample tangle: each transaction arrives a
/// little after the previous one and approves up to two earlier ones.
fn sample_tangle(n: usize) -> TangleData {
	let mut times = Vec::with_capacity(n);
	let mut time = 0.0;
	for i in 0..n {
		time += 0.2 + rand_simple(i * 5);
		times.push(time);
	}
	let max_time = times.last().copied().unwrap_or(1.0);

	let nodes: Vec<TangleNode> = times
		.iter()
		.enumerate()
		.map(|(i, &t)| TangleNode {
			name: i.to_string(),
			x: 60.0 + t / max_time * (WIDTH - 120.0),
			y: HEIGHT / 2.0 + (rand_simple(i * 5 + 1) - 0.5) * (HEIGHT - 160.0),
			time: t,
		})
		.collect();

	let mut links = Vec::new();
	for i in 1..n {
		let reach = i.min(5);
		let first = i - 1 - (rand_simple(i * 5 + 2) * reach as f64) as usize;
		links.push(TangleLink {
			source: i.to_string(),
			target: first.to_string(),
		});
		if i > 1 {
			let second = i - 1 - (rand_simple(i * 5 + 3) * reach as f64) as usize;
			if second != first {
				links.push(TangleLink {
					source: i.to_string(),
					target: second.to_string(),
				});
			}
		}
	}

	let approved_nodes: HashSet<String> = links.iter().map(|l| l.target.clone()).collect();
	let tips: HashSet<String> = nodes
		.iter()
		.map(|node| node.name.clone())
		.filter(|name| !approved_nodes.contains(name))
		.collect();
	// An approval out of a transaction that is itself confirmed counts as
	// an approved link; approvals straight off a tip do not.
	let approved_links: HashSet<TangleLink> = links
		.iter()
		.filter(|l| approved_nodes.contains(&l.source))
		.cloned()
		.collect();

	TangleData {
		nodes,
		links,
		approved_nodes,
		approved_links,
		tips,
	}
}

/// Simple pseudo-random number generator (deterministic for consistency).
fn rand_simple(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let data = Signal::derive(move || sample_tangle(30));
	let (hovered, set_hovered) = signal(None::<String>);

	let on_enter = move |ev: MouseEvent| {
		let name = ev
			.target()
			.and_then(|target| target.dyn_into::<Element>().ok())
			.and_then(|el| el.get_attribute("name"));
		if let Some(name) = name {
			debug!("pointer entered transaction {name}");
			set_hovered.set(Some(name));
		}
	};
	let on_leave = move |_: MouseEvent| set_hovered.set(None);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="tangle-page">
				<h1>"Tangle"</h1>
				<p class="subtitle">
					{move || match hovered.get() {
						Some(name) => format!("Transaction {name}"),
						None => "Hover a transaction to inspect it.".to_string(),
					}}
				</p>
				<TangleView
					data=data
					width=WIDTH
					height=HEIGHT
					left_margin=30.0
					right_margin=30.0
					node_radius=20.0
					show_labels=true
					on_node_enter=on_enter
					on_node_leave=on_leave
				/>
			</div>
		</ErrorBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sample_links_always_resolve() {
		let data = sample_tangle(30);
		let names: HashSet<&str> = data.nodes.iter().map(|n| n.name.as_str()).collect();
		assert!(data
			.links
			.iter()
			.all(|l| names.contains(l.source.as_str()) && names.contains(l.target.as_str())));
	}

	#[test]
	fn tips_are_exactly_the_unreferenced_nodes() {
		let data = sample_tangle(30);
		for node in &data.nodes {
			let referenced = data.links.iter().any(|l| l.target == node.name);
			assert_eq!(data.tips.contains(&node.name), !referenced);
		}
	}

	#[test]
	fn newer_transactions_approve_older_ones() {
		let data = sample_tangle(30);
		for link in &data.links {
			let source: usize = link.source.parse().unwrap();
			let target: usize = link.target.parse().unwrap();
			assert!(source > target);
		}
	}
}
