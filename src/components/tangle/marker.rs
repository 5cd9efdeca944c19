use leptos::prelude::*;

#[component]
pub fn ArrowheadMarker(
	#[prop(into)] id: String,
	#[prop(into)] color: String,
	node_radius: f64,
) -> impl IntoView {
	// refX pulls the head back along the path so it lands on the edge of a
	// node glyph instead of its center.
	view! {
		<marker
			id=id
			viewBox="0 -5 10 10"
			refX={node_radius + 20.0}
			refY=0
			markerWidth=5
			markerHeight=3
			fill=color
			orient="auto"
		>
			<path d="M0,-5L10,0L0,5" />
		</marker>
	}
}
