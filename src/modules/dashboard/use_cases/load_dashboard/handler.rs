// Load and reconcile the dashboard.
//
// Purpose
// - Fetch events and quote requests concurrently, merge them and shape the rows for display.
//
// Responsibilities
// - An expired session on either side fails the whole load.
// - Any other failure degrades that side to an empty list and is reported in the view.
// - Summary counts cover every merged row; filter and search only narrow `rows`.

use std::sync::Arc;

use crate::modules::dashboard::adapters::outbound::backend_api::{BackendApi, BackendError};
use crate::modules::dashboard::core::filter::{DashboardSummary, matches_filter, matches_search};
use crate::modules::dashboard::core::merge::merge;
use crate::modules::dashboard::core::row_view::DashboardRow;
use crate::modules::dashboard::use_cases::errors::ApplicationError;
use crate::modules::dashboard::use_cases::load_dashboard::query::{
    DashboardQuery, DashboardSource, DashboardView,
};
use crate::shared::core::primitives::BearerToken;

pub struct LoadDashboardHandler {
    backend: Arc<dyn BackendApi>,
}

impl LoadDashboardHandler {
    pub fn new(backend: Arc<dyn BackendApi>) -> Self {
        Self { backend }
    }

    pub async fn handle(
        &self,
        token: &BearerToken,
        query: &DashboardQuery,
    ) -> Result<DashboardView, ApplicationError> {
        let (events, quotes) = tokio::join!(
            self.backend.list_events(token),
            self.backend.list_quote_requests(token)
        );

        let mut degraded_sources = Vec::new();
        let events = settle(events, DashboardSource::Events, &mut degraded_sources)?;
        let quotes = settle(quotes, DashboardSource::QuoteRequests, &mut degraded_sources)?;

        let merged = merge(&events, &quotes);
        let summary = DashboardSummary::of(&merged);
        let search = query.search.as_deref().unwrap_or_default();
        let rows = merged
            .iter()
            .filter(|row| matches_filter(row, query.filter))
            .map(DashboardRow::from)
            .filter(|row| matches_search(row, search))
            .collect();

        Ok(DashboardView {
            rows,
            summary,
            degraded_sources,
        })
    }
}

fn settle<T>(
    result: Result<Vec<T>, BackendError>,
    source: DashboardSource,
    degraded: &mut Vec<DashboardSource>,
) -> Result<Vec<T>, ApplicationError> {
    match result {
        Ok(records) => Ok(records),
        Err(BackendError::SessionExpired) => Err(ApplicationError::SessionExpired),
        Err(error) => {
            tracing::warn!(?source, %error, "dashboard source unavailable, continuing without it");
            degraded.push(source);
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod load_dashboard_handler_tests {
    use super::*;
    use crate::modules::dashboard::adapters::outbound::backend_api_in_memory::InMemoryBackend;
    use crate::modules::dashboard::core::filter::DashboardFilter;
    use crate::modules::dashboard::core::status::WorkflowStatus;
    use crate::tests::fixtures::records::{EventRecordBuilder, QuoteRecordBuilder};
    use rstest::{fixture, rstest};

    #[fixture]
    fn token() -> BearerToken {
        BearerToken::new("manager-token").unwrap()
    }

    #[fixture]
    fn backend() -> InMemoryBackend {
        InMemoryBackend::with_records(
            vec![
                EventRecordBuilder::new(1)
                    .name("Summer Gala")
                    .status(WorkflowStatus::Approved)
                    .build(),
                EventRecordBuilder::new(2).name("Launch").build(),
            ],
            vec![
                QuoteRecordBuilder::new(9)
                    .event_id(2)
                    .status(WorkflowStatus::QuotePending)
                    .build(),
                QuoteRecordBuilder::new(5)
                    .event_name("Winter Workshop")
                    .status(WorkflowStatus::Rejected)
                    .build(),
            ],
        )
    }

    fn handler(backend: InMemoryBackend) -> LoadDashboardHandler {
        LoadDashboardHandler::new(Arc::new(backend))
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_merge_both_sources_in_order(backend: InMemoryBackend, token: BearerToken) {
        let view = handler(backend)
            .handle(&token, &DashboardQuery::default())
            .await
            .unwrap();
        let keys: Vec<&str> = view.rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["event:1", "event:2", "quote:5"]);
        assert_eq!(view.rows[1].quote_id, Some(9));
        assert!(view.degraded_sources.is_empty());
        assert_eq!(
            view.summary,
            DashboardSummary {
                total: 3,
                pending: 1,
                approved: 1,
                completed: 1
            }
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_narrow_rows_by_filter_and_search_but_not_the_summary(
        backend: InMemoryBackend,
        token: BearerToken,
    ) {
        let query = DashboardQuery {
            filter: DashboardFilter::Completed,
            search: Some("winter".into()),
        };
        let view = handler(backend).handle(&token, &query).await.unwrap();
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].name, "Winter Workshop");
        assert_eq!(view.summary.total, 3);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_degrade_a_failed_quote_listing(
        mut backend: InMemoryBackend,
        token: BearerToken,
    ) {
        backend.toggle_quotes_offline();
        let view = handler(backend)
            .handle(&token, &DashboardQuery::default())
            .await
            .unwrap();
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.degraded_sources, vec![DashboardSource::QuoteRequests]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_degrade_both_sides_to_an_empty_dashboard(
        mut backend: InMemoryBackend,
        token: BearerToken,
    ) {
        backend.toggle_events_offline();
        backend.toggle_quotes_offline();
        let view = handler(backend)
            .handle(&token, &DashboardQuery::default())
            .await
            .unwrap();
        assert!(view.rows.is_empty());
        assert_eq!(
            view.degraded_sources,
            vec![DashboardSource::Events, DashboardSource::QuoteRequests]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_the_session_expired(
        mut backend: InMemoryBackend,
        token: BearerToken,
    ) {
        backend.expire_session();
        let result = handler(backend)
            .handle(&token, &DashboardQuery::default())
            .await;
        assert_eq!(result, Err(ApplicationError::SessionExpired));
    }
}
