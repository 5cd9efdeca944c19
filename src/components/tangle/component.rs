use leptos::prelude::*;
use web_sys::MouseEvent;

use super::axis::TimeAxis;
use super::marker::ArrowheadMarker;
use super::scene::{self, APPROVED_MARKER_ID, DEFAULT_MARKER_ID};
use super::types::TangleData;

#[component]
pub fn TangleView(
	#[prop(into)] data: Signal<TangleData>,
	width: f64,
	height: f64,
	left_margin: f64,
	right_margin: f64,
	node_radius: f64,
	#[prop(optional)] show_labels: bool,
	#[prop(into, strip_option)] on_node_enter: Option<Callback<MouseEvent>>,
	#[prop(into, strip_option)] on_node_leave: Option<Callback<MouseEvent>>,
) -> impl IntoView {
	let end_val = Signal::derive(move || data.with(|d| scene::time_domain_end(&d.nodes)));

	let enter = move |ev: MouseEvent| {
		if let Some(cb) = on_node_enter {
			cb.run(ev);
		}
	};
	let leave = move |ev: MouseEvent| {
		if let Some(cb) = on_node_leave {
			cb.run(ev);
		}
	};

	// The link and node groups are rebuilt wholesale when the layout signal
	// changes: one layout in, one static subtree out.
	view! {
		<div>
			<svg width=width height=height>
				<defs>
					<ArrowheadMarker color="green" id=DEFAULT_MARKER_ID node_radius=node_radius />
					<ArrowheadMarker color="red" id=APPROVED_MARKER_ID node_radius=node_radius />
				</defs>
				<g>
					{move || {
						data.with(scene::resolve_links)
							.into_iter()
							.map(|link| {
								view! {
									<path
										class=link.style.class()
										d=link.path_data()
										stroke-width="2"
										marker-end=link.style.marker_end()
									/>
								}
							})
							.collect_view()
					}}
				</g>
				<g>
					{move || {
						data.with(|d| scene::resolve_nodes(d, show_labels))
							.into_iter()
							.map(|node| {
								let transform = format!("translate({},{})", node.x, node.y);
								let class = node.style.class();
								view! {
									<g transform=transform class=class>
										<rect
											width=node_radius
											height=node_radius
											x={-node_radius / 2.0}
											y={-node_radius / 2.0}
											rx={node_radius / 5.0}
											ry={node_radius / 5.0}
											stroke="black"
											stroke-width="1px"
											fill="white"
											name=node.name
											on:mouseenter=enter
											on:mouseleave=leave
										/>
										{node.label.map(|label| {
											view! {
												<text
													class="unselectable"
													fill="#666"
													font-family="Helvetica"
													alignment-baseline="middle"
													text-anchor="middle"
													pointer-events="none"
												>
													{label}
												</text>
											}
										})}
									</g>
								}
							})
							.collect_view()
					}}
				</g>
				<g>
					<TimeAxis
						x=left_margin
						end_x={width - right_margin}
						y={height - 20.0}
						ticks=8
						start_val=0.0
						end_val=end_val
					/>
				</g>
			</svg>
		</div>
	}
}
