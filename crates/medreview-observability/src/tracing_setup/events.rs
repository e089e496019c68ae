//! Structured events emitted alongside degradation bookkeeping.

pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(component, failure, fallback, "degradation triggered");
}

pub fn degradation_recovered(component: &str) {
    tracing::info!(component, "degradation recovered");
}
