const MAX_LABEL_CHARS: usize = 20;
const KEEP_CHARS: usize = 9;

/// Shortens long labels by eliding the middle, which is where generated
/// names tend to differ least.
pub fn format_label(raw: Option<&str>) -> String {
	let Some(raw) = raw else {
		return String::new();
	};
	let chars: Vec<char> = raw.chars().collect();
	if chars.len() <= MAX_LABEL_CHARS {
		return raw.to_string();
	}
	let head: String = chars[..KEEP_CHARS].iter().collect();
	let tail: String = chars[chars.len() - KEEP_CHARS..].iter().collect();
	format!("{head}..{tail}")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn short_labels_are_kept() {
		assert_eq!(format_label(Some("build")), "build");
		assert_eq!(format_label(Some("12345678901234567890")), "12345678901234567890");
		assert_eq!(format_label(None), "");
	}

	#[test]
	fn long_labels_lose_their_middle() {
		let formatted = format_label(Some("discriminator == \"github-push-main\""));
		assert_eq!(formatted, "discrimin..ush-main\"");
		assert_eq!(formatted.chars().count(), 2 * KEEP_CHARS + 2);
	}

	#[test]
	fn multibyte_labels_do_not_split_chars() {
		let formatted = format_label(Some("äöüäöüäöüäöüäöüäöüäöüäöü"));
		assert!(formatted.starts_with("äöüäöüäöü.."));
	}
}
