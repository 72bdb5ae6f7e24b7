//! Graph node identifiers for bindings and templates.
//!
//! Ids are `Kind/namespace/name`. Namespace and name are percent-escaped so a
//! `/` inside them cannot shift the segments.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use thiserror::Error;

const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS.add(b'/').add(b'%');

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
	WorkflowEventBinding,
	WorkflowTemplate,
}

impl ResourceKind {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::WorkflowEventBinding => "WorkflowEventBinding",
			Self::WorkflowTemplate => "WorkflowTemplate",
		}
	}
}

impl FromStr for ResourceKind {
	type Err = IdError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"WorkflowEventBinding" => Ok(Self::WorkflowEventBinding),
			"WorkflowTemplate" => Ok(Self::WorkflowTemplate),
			other => Err(IdError::UnknownKind(other.to_string())),
		}
	}
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdError {
	#[error("unknown resource kind {0:?}")]
	UnknownKind(String),
	#[error("id {0:?} does not have the form kind/namespace/name")]
	Malformed(String),
}

pub fn escape_segment(segment: &str) -> Cow<'_, str> {
	utf8_percent_encode(segment, SEGMENT_ENCODE_SET).into()
}

pub fn unescape_segment(segment: &str) -> String {
	percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

pub fn join(kind: ResourceKind, namespace: &str, name: &str) -> String {
	let mut result = String::with_capacity(kind.as_str().len() + namespace.len() + name.len() + 2);
	result.push_str(kind.as_str());
	result.push('/');
	result.push_str(&escape_segment(namespace));
	result.push('/');
	result.push_str(&escape_segment(name));
	result
}

/// Result of [`split`]. Missing segments are `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdParts {
	pub kind: Option<String>,
	pub namespace: Option<String>,
	pub name: Option<String>,
}

/// Lenient decode: takes the first three segments, ignores any extra ones and
/// never fails.
pub fn split(id: &str) -> IdParts {
	let mut segments = id.split('/');
	let mut next = || segments.next().map(unescape_segment);
	IdParts {
		kind: next(),
		namespace: next(),
		name: next(),
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceId {
	pub kind: ResourceKind,
	pub namespace: String,
	pub name: String,
}

impl ResourceId {
	pub fn new(kind: ResourceKind, namespace: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			kind,
			namespace: namespace.into(),
			name: name.into(),
		}
	}
}

impl fmt::Display for ResourceId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&join(self.kind, &self.namespace, &self.name))
	}
}

/// Strict decode: exactly three non-empty segments and a known kind.
impl FromStr for ResourceId {
	type Err = IdError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.split('/').count() != 3 {
			return Err(IdError::Malformed(s.to_string()));
		}
		let IdParts {
			kind: Some(kind),
			namespace: Some(namespace),
			name: Some(name),
		} = split(s)
		else {
			return Err(IdError::Malformed(s.to_string()));
		};
		if namespace.is_empty() || name.is_empty() {
			return Err(IdError::Malformed(s.to_string()));
		}
		Ok(Self {
			kind: kind.parse()?,
			namespace,
			name,
		})
	}
}
