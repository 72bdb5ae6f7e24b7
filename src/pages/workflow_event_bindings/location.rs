//! The part of the list page's state that lives in the address bar: the
//! namespace in the path and the selected binding in the `selected` query
//! parameter. Reloading or sharing the URL restores both.

use percent_encoding::{AsciiSet, utf8_percent_encode};

use super::id::{escape_segment, unescape_segment};
use super::selection::Selection;
use crate::config::{PATH_SEGMENT_ENCODE_SET, encode_path_segment};

pub const LIST_PATH: &str = "/workflow-event-bindings";
pub const SELECTED_PARAM: &str = "selected";

const QUERY_ENCODE_SET: &AsciiSet = &PATH_SEGMENT_ENCODE_SET.add(b'&').add(b'=').add(b'+');

/// `namespace/name`, with both parts escaped like id segments.
fn encode_selection(selection: &Selection) -> String {
	format!(
		"{}/{}",
		escape_segment(&selection.namespace),
		escape_segment(&selection.name)
	)
}

fn decode_selection(value: &str) -> Option<Selection> {
	let (namespace, name) = value.split_once('/')?;
	if name.is_empty() || name.contains('/') {
		return None;
	}
	Some(Selection::new(unescape_segment(namespace), unescape_segment(name)))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListLocation {
	pub namespace: String,
	pub selected: Option<Selection>,
}

impl ListLocation {
	pub fn new(namespace: impl Into<String>, selected: Option<Selection>) -> Self {
		Self {
			namespace: namespace.into(),
			selected,
		}
	}

	pub fn to_url(&self) -> String {
		let mut url = String::from(LIST_PATH);
		if !self.namespace.is_empty() {
			url.push('/');
			url.push_str(&encode_path_segment(&self.namespace));
		}
		if let Some(selected) = &self.selected {
			url.push('?');
			url.push_str(SELECTED_PARAM);
			url.push('=');
			url.extend(utf8_percent_encode(&encode_selection(selected), QUERY_ENCODE_SET));
		}
		url
	}

	/// Rebuilds the location from router values. The router decodes query
	/// values fully but path params only with `decodeURI`, which leaves `%2F`,
	/// `%23` and `%3F` escaped. Namespaces are DNS labels and never contain
	/// those. An unreadable `selected` value is dropped.
	pub fn from_route(namespace: Option<String>, selected: Option<String>) -> Self {
		Self {
			namespace: namespace.unwrap_or_default(),
			selected: selected.as_deref().and_then(decode_selection),
		}
	}
}

/// Splits a list URL into the `namespace` param and `selected` query value
/// the way the router hands them to the page.
#[cfg(test)]
pub(crate) fn route_values(url: &str) -> Option<(Option<String>, Option<String>)> {
	let (path, query) = url.split_once('?').unwrap_or((url, ""));
	let rest = path.strip_prefix(LIST_PATH)?;
	let namespace = match rest.strip_prefix('/') {
		Some(segment) => Some(decode_uri(segment)),
		None if rest.is_empty() => None,
		None => return None,
	};
	let selected = query
		.split('&')
		.filter_map(|pair| pair.split_once('='))
		.find(|(key, _)| *key == SELECTED_PARAM)
		.map(|(_, value)| percent_encoding::percent_decode_str(value).decode_utf8_lossy().into_owned());
	Some((namespace, selected))
}

/// `decodeURI`: escapes of reserved characters stay as they are.
#[cfg(test)]
fn decode_uri(segment: &str) -> String {
	const RESERVED: &[u8] = b";/?:@&=+$,#";
	let bytes = segment.as_bytes();
	let mut out = Vec::with_capacity(bytes.len());
	let mut i = 0;
	while i < bytes.len() {
		let escaped = (bytes[i] == b'%')
			.then(|| segment.get(i + 1..i + 3))
			.flatten()
			.and_then(|hex| u8::from_str_radix(hex, 16).ok())
			.filter(|b| !RESERVED.contains(b));
		match escaped {
			Some(b) => {
				out.push(b);
				i += 3;
			}
			None => {
				out.push(bytes[i]);
				i += 1;
			}
		}
	}
	String::from_utf8_lossy(&out).into_owned()
}
