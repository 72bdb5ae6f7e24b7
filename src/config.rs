//! Deployment settings read from the hosting page.
//!
//! The console may be served below a path prefix; the page declares it with
//! `<base href="/prefix/">` and every UI and API URL is built relative to it.

use leptos::prelude::*;
use log::warn;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

pub(crate) const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
	.add(b' ')
	.add(b'"')
	.add(b'#')
	.add(b'<')
	.add(b'>')
	.add(b'`')
	.add(b'?')
	.add(b'{')
	.add(b'}')
	.add(b'/')
	.add(b'%');

/// Percent-encodes `segment` for use as a single URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
	utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Console settings shared through the Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleConfig {
	/// Path prefix the console is served under. Always ends with `/`.
	pub base_href: String,
}

impl Default for ConsoleConfig {
	fn default() -> Self {
		Self {
			base_href: "/".to_string(),
		}
	}
}

impl ConsoleConfig {
	/// Builds the config from an absolute or path-only base URI.
	pub fn from_base_uri(base_uri: &str) -> Self {
		let without_origin = match base_uri.split_once("://") {
			Some((_, rest)) => rest.find('/').map_or("/", |i| &rest[i..]),
			None => base_uri,
		};
		let path = without_origin
			.split(['?', '#'])
			.next()
			.unwrap_or_default();
		// A base of `/app/index.html` means `/app/`.
		let dir = path.rfind('/').map_or("", |i| &path[..=i]);
		let mut base_href = String::from(dir);
		if !base_href.starts_with('/') {
			base_href.insert(0, '/');
		}
		Self { base_href }
	}

	/// Reads `document.baseURI`, falling back to `/`.
	pub fn from_document() -> Self {
		let base_uri = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.base_uri().ok().flatten());
		match base_uri {
			Some(uri) => Self::from_base_uri(&uri),
			None => {
				warn!("no document base URI, serving from /");
				Self::default()
			}
		}
	}

	pub fn ui_url(&self, path: &str) -> String {
		format!("{}{}", self.base_href, path.trim_start_matches('/'))
	}

	pub fn api_url(&self, path: &str) -> String {
		self.ui_url(path)
	}
}

/// The config provided by the app root, or the default when none was provided.
pub fn use_config() -> ConsoleConfig {
	use_context::<ConsoleConfig>().unwrap_or_default()
}
