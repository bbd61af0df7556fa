use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use structural_summary::config::LimitsConfig;
use structural_summary::error::AppError;
use structural_summary::{Response, StructuralSummaryCalculator};

#[derive(Clone)]
pub struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) calculator: Arc<StructuralSummaryCalculator>,
    pub(crate) limits: LimitsConfig,
}

impl AppState {
    /// State for a router that reports `initializing` until [`mark_ready`](Self::mark_ready).
    pub fn new(metrics: PrometheusHandle, limits: LimitsConfig) -> Self {
        Self {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(metrics),
            calculator: Arc::new(StructuralSummaryCalculator::new()),
            limits,
        }
    }

    pub fn mark_ready(&self) {
        self.readiness.store(true, Ordering::Release);
    }

    pub(crate) fn is_ready(&self) -> bool {
        self.readiness.load(Ordering::Relaxed)
    }

    pub(crate) fn check_rows(&self, rows: usize) -> Result<(), AppError> {
        if rows > self.limits.max_rows {
            return Err(AppError::Input(format!(
                "{rows} rows submitted, at most {} accepted",
                self.limits.max_rows
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SummaryRequest {
    #[serde(default)]
    pub(crate) responses: Vec<Response>,
}

pub(crate) fn export_filename(date: NaiveDate) -> String {
    format!("structural-summary-{}.csv", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;

    #[test]
    fn export_filename_is_dated() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).expect("valid date");
        assert_eq!(export_filename(date), "structural-summary-2026-03-07.csv");
    }

    #[test]
    fn row_limit_is_inclusive() {
        let handle = PrometheusBuilder::new().build_recorder().handle();
        let state = AppState::new(handle, LimitsConfig { max_rows: 3 });

        assert!(state.check_rows(3).is_ok());
        let err = state.check_rows(4).expect_err("over limit");
        assert_eq!(err.to_string(), "invalid input: 4 rows submitted, at most 3 accepted");
    }
}
