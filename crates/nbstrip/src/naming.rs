//! Output file naming.

use crate::render::OutputFormat;

const FALLBACK: &str = "notebook";
const NOTEBOOK_SUFFIX: &str = ".ipynb";

/// Sanitized stem of an input notebook name.
///
/// Drops any directory part (`/` or `\` separated) and a case-insensitive
/// `.ipynb` suffix, maps every character outside `[A-Za-z0-9_-]` to `_`,
/// collapses runs of `_` and trims one `_` from each end. Falls back to
/// `notebook` when nothing usable is left.
#[must_use]
pub fn base_name(original: Option<&str>) -> String {
    let Some(original) = original else {
        return FALLBACK.to_owned();
    };

    let file = original.rsplit('/').next().unwrap_or(original);
    let file = file.rsplit('\\').next().unwrap_or(file);
    let stem = strip_notebook_suffix(file);
    if stem.is_empty() {
        return FALLBACK.to_owned();
    }

    let mut cleaned = String::with_capacity(stem.len());
    for ch in stem.chars() {
        let ch = if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
            ch
        } else {
            '_'
        };
        if ch == '_' && cleaned.ends_with('_') {
            continue;
        }
        cleaned.push(ch);
    }

    let cleaned = cleaned.strip_prefix('_').unwrap_or(&cleaned);
    let cleaned = cleaned.strip_suffix('_').unwrap_or(cleaned);
    if cleaned.is_empty() {
        FALLBACK.to_owned()
    } else {
        cleaned.to_owned()
    }
}

fn strip_notebook_suffix(file: &str) -> &str {
    let split = file.len().saturating_sub(NOTEBOOK_SUFFIX.len());
    match (file.get(..split), file.get(split..)) {
        (Some(stem), Some(suffix)) if suffix.eq_ignore_ascii_case(NOTEBOOK_SUFFIX) => stem,
        _ => file,
    }
}

/// `{base}_extracted.{ext}` for the given input name and format.
#[must_use]
pub fn output_file_name(original: Option<&str>, format: OutputFormat) -> String {
    format!("{}_extracted.{}", base_name(original), format.extension())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::missing(None, "notebook")]
    #[case::plain(Some("analysis.ipynb"), "analysis")]
    #[case::upper_suffix(Some("Report.IPYNB"), "Report")]
    #[case::unix_path(Some("/home/me/work/data-prep.ipynb"), "data-prep")]
    #[case::windows_path(Some(r"C:\Users\me\my notebook.ipynb"), "my_notebook")]
    #[case::specials(Some("  a!!b  (copy).ipynb"), "a_b_copy")]
    #[case::only_suffix(Some(".ipynb"), "notebook")]
    #[case::only_specials(Some("???.ipynb"), "notebook")]
    #[case::non_ascii(Some("données.ipynb"), "donn_es")]
    #[case::other_extension(Some("script.py"), "script_py")]
    #[case::trailing_slash(Some("dir/"), "notebook")]
    fn base_names(#[case] original: Option<&str>, #[case] expected: &str) {
        assert_eq!(base_name(original), expected);
    }

    #[test]
    fn file_names_per_format() {
        assert_eq!(
            output_file_name(Some("demo.ipynb"), OutputFormat::Python),
            "demo_extracted.py"
        );
        assert_eq!(
            output_file_name(None, OutputFormat::Markdown),
            "notebook_extracted.md"
        );
    }
}
