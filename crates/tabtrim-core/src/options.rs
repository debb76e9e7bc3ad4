// crates/tabtrim-core/src/options.rs
//
// Run configuration for the normalizer. Always passed explicitly; there is
// no ambient/global configuration.

/// Tab width used when the caller does not choose one.
pub const DEFAULT_TAB_WIDTH: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrimOptions {
    /// Columns per tab stop. Must be at least 1.
    pub tab_width: u32,

    /// Emit literal tabs instead of expanding them to spaces.
    pub keep_tabs: bool,

    /// Advance the column to the true next tab stop for a kept tab, instead
    /// of by a single column. Only valid together with `keep_tabs`.
    ///
    /// The single-column advance under-counts the visual width of a kept tab
    /// for later tab-stop math on the same line; it stays the default so
    /// existing pipelines see unchanged output.
    pub exact_tab_stops: bool,
}

impl Default for TrimOptions {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            keep_tabs: false,
            exact_tab_stops: false,
        }
    }
}
