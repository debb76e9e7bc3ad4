use crate::error::{Result, TrimError};
use crate::options::TrimOptions;

pub fn validate_options(opts: &TrimOptions) -> Result<()> {
    // Zero width would make the next-stop computation divide by zero.
    if opts.tab_width == 0 {
        return Err(TrimError::Validation("tab width must be at least 1".into()));
    }

    // Exact stop accounting only changes how kept tabs advance the column.
    if opts.exact_tab_stops && !opts.keep_tabs {
        return Err(TrimError::Validation(
            "exact tab stops require keep-tabs mode".into(),
        ));
    }

    Ok(())
}
