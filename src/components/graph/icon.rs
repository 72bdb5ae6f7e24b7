use std::f64::consts::PI;

use leptos::prelude::*;

/// Font Awesome code points for the icon names used by graph nodes.
pub fn glyph(icon: &str) -> char {
	match icon {
		"cloud" => '\u{f0c2}',
		"window-maximize" => '\u{f2d0}',
		"clock" => '\u{f017}',
		"check" => '\u{f00c}',
		"times" => '\u{f00d}',
		"play" => '\u{f04b}',
		"circle-notch" => '\u{f1ce}',
		"stream" => '\u{f550}',
		_ => '\u{f128}',
	}
}

/// SVG path for a clockwise arc starting at twelve o'clock that covers
/// `progress` of a circle of radius `r`.
pub fn progress_arc(progress: f64, r: f64) -> String {
	let progress = progress.clamp(0.0, 1.0);
	if progress >= 1.0 {
		// A single arc cannot close on itself.
		return format!("M 0 {} A {r} {r} 0 1 1 0 {r} A {r} {r} 0 1 1 0 {}", -r, -r);
	}
	let angle = 2.0 * PI * progress;
	let large = if progress > 0.5 { 1 } else { 0 };
	format!(
		"M 0 {} A {r} {r} 0 {large} 1 {} {}",
		-r,
		r * angle.sin(),
		-r * angle.cos()
	)
}

#[component]
pub fn GraphIcon(icon: String, progress: Option<f64>, node_size: f64) -> impl IntoView {
	let font_size = format!("font-size: {}px", node_size * 0.4);
	let arc = progress.map(|p| {
		view! {
			<path
				class="progress"
				d=progress_arc(p, node_size * 0.4)
				stroke-width=(node_size / 16.0).to_string()
				fill="none"
			/>
		}
	});

	view! {
		{arc}
		<text class="icon" style=font_size>
			{glyph(&icon).to_string()}
		</text>
	}
}
