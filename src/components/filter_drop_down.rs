use leptos::prelude::*;

use crate::components::graph::Filters;

/// Checkbox list over a set of filter labels. The empty label is shown as
/// "all".
#[component]
pub fn FilterDropDown(
	#[prop(into)] values: Signal<Filters>,
	on_change: Callback<(String, bool)>,
) -> impl IntoView {
	let open = RwSignal::new(false);

	view! {
		<div class="filter-drop-down">
			<a on:click=move |_| open.update(|o| *o = !*o) title="Filter">
				<i class="fa fa-filter" />
			</a>
			<Show when=move || open.get()>
				<ul class="filter-drop-down__list">
					{move || {
						values
							.get()
							.into_iter()
							.map(|(label, checked)| {
								let caption = if label.is_empty() { "all".to_string() } else { label.clone() };
								view! {
									<li>
										<label>
											<input
												type="checkbox"
												prop:checked=checked
												on:change=move |ev| {
													on_change.run((label.clone(), event_target_checked(&ev)));
												}
											/>
											" "
											{caption}
										</label>
									</li>
								}
							})
							.collect_view()
					}}
				</ul>
			</Show>
		</div>
	}
}
