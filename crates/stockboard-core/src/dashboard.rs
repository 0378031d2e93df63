//! Dashboard
//!
//! Summary panel state. Same ticket rule as the entity lists: only the
//! latest requested report may be shown.

use log::debug;

use crate::api::ReportsApi;
use crate::domain::Report;
use crate::error::ApiResult;
use crate::list::{FetchTicket, Fetched, Refresh};
use crate::store::StateStore;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    report: Fetched<Option<Report>>,
}

impl DashboardState {
    /// Last applied report; `None` until the first load succeeds
    pub fn report(&self) -> Option<&Report> {
        self.report.value().as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.report.is_loading()
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.report.begin_fetch()
    }

    pub fn apply(&mut self, ticket: FetchTicket, report: Report) -> bool {
        self.report.apply(ticket, Some(report))
    }

    pub fn abandon(&mut self, ticket: FetchTicket) -> bool {
        self.report.abandon(ticket)
    }
}

/// Fetch `/reports` and overwrite the summary
pub async fn load_report<A, S>(api: &A, store: &S) -> ApiResult<Refresh>
where
    A: ReportsApi + ?Sized,
    S: StateStore<DashboardState>,
{
    let Some(ticket) = store.update(DashboardState::begin_fetch) else {
        return Ok(Refresh::Stale);
    };

    match api.report().await {
        Ok(report) => {
            if store.update(|state| state.apply(ticket, report)).unwrap_or(false) {
                debug!("[reports] fetch {} applied", ticket);
                Ok(Refresh::Applied(report.summary().len()))
            } else {
                Ok(Refresh::Stale)
            }
        }
        Err(err) => {
            store.update(|state| state.abandon(ticket));
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_report_wins() {
        let mut state = DashboardState::default();
        let old = state.begin_fetch();
        let new = state.begin_fetch();

        let fresh = Report {
            total_products: 5,
            completed_products: 2,
            total_tasks: 3,
            completed_tasks: 1,
        };
        assert!(state.apply(new, fresh));
        assert!(!state.apply(old, Report::default()));
        assert_eq!(state.report(), Some(&fresh));
        assert!(!state.is_loading());
    }
}
