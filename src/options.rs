//! Configuration options for splitting a page into partials.
//!
//! The `Options` struct exposes every depth limit and content threshold the
//! boundary and component heuristics use, so callers can tune how eagerly
//! markup gets carved into partials.

/// Configuration options for splitting.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_partials::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     min_pattern_repeats: 3,
///     format_output: false,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// How many single-child wrapper shells may be skipped below `<body>`
    /// when locating the content root.
    ///
    /// Default: `4`
    pub max_root_depth: usize,

    /// Depth below the content root searched for section boundaries.
    ///
    /// Default: `5`
    pub boundary_depth: usize,

    /// Depth below each boundary searched for nested components.
    ///
    /// Default: `6`
    pub nested_depth: usize,

    /// Occurrences of a pattern key inside one boundary needed before an
    /// unlabeled repeat is considered a component.
    ///
    /// Default: `2`
    pub min_pattern_repeats: usize,

    /// Trimmed text characters that qualify a keyword-matched element with
    /// no element children.
    ///
    /// Default: `10`
    pub keyword_min_text_len: usize,

    /// Element children that make a repeated element "meaningful".
    ///
    /// Default: `2`
    pub meaningful_min_children: usize,

    /// Trimmed text characters that make a repeated element "meaningful".
    ///
    /// Default: `20`
    pub meaningful_min_text_len: usize,

    /// Pretty-print the main document with tab indentation.
    ///
    /// When formatting fails the unformatted render is used instead.
    ///
    /// Default: `true`
    pub format_output: bool,

    /// Pretty-print each partial body as well.
    ///
    /// Partial bodies are compared for deduplication before formatting, so
    /// this never changes which partials exist.
    ///
    /// Default: `false`
    pub format_partials: bool,

    /// Directory prefix used inside include directives and by the view writer.
    ///
    /// Default: `"partials"`
    pub partials_dir: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_root_depth: 4,
            boundary_depth: 5,
            nested_depth: 6,
            min_pattern_repeats: 2,
            keyword_min_text_len: 10,
            meaningful_min_children: 2,
            meaningful_min_text_len: 20,
            format_output: true,
            format_partials: false,
            partials_dir: "partials".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_thresholds() {
        let opts = Options::default();

        assert_eq!(opts.max_root_depth, 4);
        assert_eq!(opts.boundary_depth, 5);
        assert_eq!(opts.nested_depth, 6);
        assert_eq!(opts.min_pattern_repeats, 2);
        assert_eq!(opts.keyword_min_text_len, 10);
        assert_eq!(opts.meaningful_min_children, 2);
        assert_eq!(opts.meaningful_min_text_len, 20);
        assert!(opts.format_output);
        assert!(!opts.format_partials);
        assert_eq!(opts.partials_dir, "partials");
    }

    #[test]
    fn test_custom_thresholds() {
        let opts = Options {
            min_pattern_repeats: 4,
            meaningful_min_text_len: 50,
            nested_depth: 2,
            ..Options::default()
        };

        assert_eq!(opts.min_pattern_repeats, 4);
        assert_eq!(opts.meaningful_min_text_len, 50);
        assert_eq!(opts.nested_depth, 2);
        assert_eq!(opts.boundary_depth, 5);
    }

    #[test]
    fn test_boolean_options_can_be_toggled() {
        let opts = Options {
            format_output: false,
            format_partials: true,
            ..Options::default()
        };

        assert!(!opts.format_output);
        assert!(opts.format_partials);
    }
}
