use leptos::prelude::*;

use super::scale::{self, LinearScale};

const TICK_SIZE: f64 = 5.0;

#[component]
pub fn TimeAxis(
	x: f64,
	end_x: f64,
	y: f64,
	start_val: f64,
	#[prop(into)] end_val: Signal<f64>,
	ticks: usize,
) -> impl IntoView {
	// Tick values paired with their pixel position, recomputed whenever the
	// domain end moves.
	let marks = move || {
		let scale = LinearScale::new(start_val, end_val.get(), x, end_x);
		scale
			.ticks(ticks)
			.into_iter()
			.map(|value| (value, scale.scale(value)))
			.collect::<Vec<_>>()
	};

	view! {
		<g fill="none" class="unselectable">
			<text
				stroke="#000"
				font-size="15"
				text-anchor="middle"
				x={(x + end_x) / 2.0}
				y={y - TICK_SIZE}
			>
				"Time"
			</text>
			<line stroke="#000" stroke-width="1" x1=x x2=end_x y1=y y2=y />
			{move || {
				marks()
					.into_iter()
					.map(|(_, px)| {
						view! {
							<line
								stroke="#000"
								stroke-width="2"
								x1=px
								y1=y
								x2=px
								y2={y + TICK_SIZE}
							/>
						}
					})
					.collect_view()
			}}
			{move || {
				marks()
					.into_iter()
					.map(|(value, px)| {
						view! {
							<text
								fill="#000"
								stroke="#000"
								font-size="15"
								text-anchor="middle"
								x=px
								y={y + 3.2 * TICK_SIZE}
							>
								{scale::tick_label(value)}
							</text>
						}
					})
					.collect_view()
			}}
		</g>
	}
}
