// src/infrastructure/front_matter.rs
//! YAML front matter of Markdown content files.

/// Splits a document into its front matter and body.
///
/// The document must open with a `---` line; the front matter ends at the next
/// `---` (or `...`) line. Returns `None` when either delimiter is missing.
pub fn split_front_matter(input: &str) -> Option<(&str, &str)> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let rest = input.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let marker = line.trim_end_matches(['\r', '\n']);
        if marker == "---" || marker == "..." {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}
