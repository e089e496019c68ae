//! Span definitions per operation: auto-check, intake, edit, transition.

/// Create an auto-check span.
#[macro_export]
macro_rules! autocheck_span {
    ($item_id:expr) => {
        tracing::info_span!("medreview.autocheck", item_id = %$item_id)
    };
}

/// Create an intake span.
#[macro_export]
macro_rules! intake_span {
    ($kind:expr) => {
        tracing::info_span!("medreview.intake", kind = %$kind)
    };
}

/// Create an edit span.
#[macro_export]
macro_rules! edit_span {
    ($item_id:expr) => {
        tracing::info_span!("medreview.edit", item_id = %$item_id)
    };
}

/// Create a status transition span.
#[macro_export]
macro_rules! transition_span {
    ($item_id:expr, $to:expr) => {
        tracing::info_span!("medreview.transition", item_id = %$item_id, to = %$to)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const AUTOCHECK: &str = "medreview.autocheck";
    pub const INTAKE: &str = "medreview.intake";
    pub const EDIT: &str = "medreview.edit";
    pub const TRANSITION: &str = "medreview.transition";
}
