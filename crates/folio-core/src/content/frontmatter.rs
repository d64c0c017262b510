//! TOML frontmatter splitting.

/// Split a document into its `+++`-delimited TOML frontmatter and body.
///
/// Returns `(Some(toml), body)` when the document opens with a `+++` fence
/// and a closing fence exists; otherwise `(None, document)` so callers can
/// degrade to an empty-metadata entry instead of failing.
pub fn split_frontmatter(document: &str) -> (Option<&str>, &str) {
    let Some(rest) = document
        .strip_prefix("+++\n")
        .or_else(|| document.strip_prefix("+++\r\n"))
    else {
        return (None, document);
    };

    for fence in ["\n+++\n", "\n+++\r\n"] {
        if let Some(end) = rest.find(fence) {
            return (Some(&rest[..end]), &rest[end + fence.len()..]);
        }
    }
    // A closing fence at end-of-file with no trailing newline.
    if let Some(meta) = rest.strip_suffix("\n+++") {
        return (Some(meta), "");
    }

    (None, document)
}
