//! # Board metrics
//!
//! Prometheus counters for the two board operations, exposed at `/metrics`.

use prometheus_client::encoding::text::encode;
use prometheus_client::encoding::EncodeLabelSet;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::registry::Registry;

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
struct OutcomeLabels {
    outcome: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Created,
    Rejected,
    Failed,
}

impl SubmissionOutcome {
    fn as_label(self) -> &'static str {
        match self {
            SubmissionOutcome::Created => "created",
            SubmissionOutcome::Rejected => "rejected",
            SubmissionOutcome::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Ok,
    Failed,
}

impl FetchOutcome {
    fn as_label(self) -> &'static str {
        match self {
            FetchOutcome::Ok => "ok",
            FetchOutcome::Failed => "failed",
        }
    }
}

#[derive(Debug)]
pub struct Metrics {
    registry: Registry,
    submissions: Family<OutcomeLabels, Counter>,
    fetches: Family<OutcomeLabels, Counter>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        let submissions = Family::<OutcomeLabels, Counter>::default();
        let fetches = Family::<OutcomeLabels, Counter>::default();

        let mut registry = Registry::default();
        registry.register(
            "listing_submissions",
            "Listing submissions by outcome",
            submissions.clone(),
        );
        registry.register(
            "listing_fetches",
            "Recent-listing retrievals by outcome",
            fetches.clone(),
        );

        Self {
            registry,
            submissions,
            fetches,
        }
    }

    pub fn record_submission(&self, outcome: SubmissionOutcome) {
        self.submissions
            .get_or_create(&OutcomeLabels {
                outcome: outcome.as_label(),
            })
            .inc();
    }

    pub fn record_fetch(&self, outcome: FetchOutcome) {
        self.fetches
            .get_or_create(&OutcomeLabels {
                outcome: outcome.as_label(),
            })
            .inc();
    }

    /// OpenMetrics text exposition of every registered metric.
    pub fn render(&self) -> Result<String, std::fmt::Error> {
        let mut body = String::new();
        encode(&mut body, &self.registry)?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_render_with_outcome_labels() {
        let metrics = Metrics::new();
        metrics.record_submission(SubmissionOutcome::Created);
        metrics.record_submission(SubmissionOutcome::Created);
        metrics.record_submission(SubmissionOutcome::Rejected);
        metrics.record_fetch(FetchOutcome::Failed);

        let body = metrics.render().unwrap();
        assert!(body.contains(r#"listing_submissions_total{outcome="created"} 2"#));
        assert!(body.contains(r#"listing_submissions_total{outcome="rejected"} 1"#));
        assert!(body.contains(r#"listing_fetches_total{outcome="failed"} 1"#));
        assert!(body.ends_with("# EOF\n"));
    }
}
