//! The one dispatcher for the preview pipeline.
//!
//! Every filter-control event lands here, advances the [`PreviewMachine`],
//! persists the selection, and kicks off a refresh. Components never talk
//! to storage or the network themselves.

use dioxus::prelude::*;
use tracing::{error, info, warn};

use crate::core::config::{ChartType, SubtypeCatalog};
use crate::core::filter::FilterState;
use crate::core::{platform, storage};
use crate::share::columns::columns_for;
use crate::share::fetch::{self, PreviewRequest};
use crate::share::machine::{FetchOutcome, PreviewMachine};
use crate::share::table::PreviewTableModel;

#[derive(Clone, Copy, PartialEq)]
pub struct PreviewController {
    pub filter: Signal<FilterState>,
    pub machine: Signal<PreviewMachine>,
    pub table: Signal<PreviewTableModel>,
    pub error: Signal<Option<String>>,
    pub catalog: &'static SubtypeCatalog,
}

/// Owns the share-preview signals and runs the restore-then-refresh
/// bootstrap once on mount.
pub fn use_preview_controller(catalog: &'static SubtypeCatalog) -> PreviewController {
    let filter = use_signal(FilterState::default);
    let machine = use_signal(PreviewMachine::default);
    let table = use_signal(PreviewTableModel::default);
    let error = use_signal(|| None);

    let controller = PreviewController {
        filter,
        machine,
        table,
        error,
        catalog,
    };

    let _bootstrap = use_future(move || async move { controller.bootstrap().await });

    controller
}

impl PreviewController {
    pub fn set_start_date(mut self, value: String) {
        self.filter.write().start_date = value;
        self.machine.write().form_changed();
        self.refresh();
    }

    pub fn set_end_date(mut self, value: String) {
        self.filter.write().end_date = value;
        self.machine.write().form_changed();
        self.refresh();
    }

    /// Chart-type changes also drop the previous sub-type selection, which
    /// is what regenerating the checkbox list implies.
    pub fn set_chart_type(mut self, raw: &str) {
        self.filter.write().set_chart_type(ChartType::parse(raw));
        self.machine.write().form_changed();
        self.refresh();
    }

    pub fn toggle_subtype(mut self, chart: ChartType, key: &'static str, on: bool) {
        self.filter.write().toggle(chart, key, on);
        self.machine.write().form_changed();
        self.refresh();
    }

    pub fn refresh(self) {
        spawn(self.run_refresh());
    }

    /// Scope collection -> state save -> header -> fetch -> body, with a
    /// generation token so a superseded response can never paint over a
    /// newer one.
    async fn run_refresh(mut self) {
        let filter = self.filter.read().clone();
        let scope = filter.scope();
        self.machine.write().scope_recomputed();

        match storage::save_filter_state(&filter) {
            Ok(()) => info!("filter state saved for this session"),
            Err(err) => warn!("couldn't persist filter state: {err}"),
        }

        let columns = columns_for(&filter, self.catalog);

        let Some(chart) = filter.chart_type else {
            self.table.set(PreviewTableModel::empty(columns));
            self.error.set(None);
            self.machine.write().render_empty();
            return;
        };

        let token = self.machine.write().begin_fetch();
        self.error.set(None);
        self.table.set(PreviewTableModel::empty(columns.clone()));

        let request = PreviewRequest {
            scope,
            timezone: platform::browser_timezone(),
            start_date: filter.start_date.clone(),
            end_date: filter.end_date.clone(),
        };

        match fetch::fetch_preview(&request).await {
            Ok(Some(data)) => {
                let model = PreviewTableModel::build(columns, data.records_for(chart));
                let outcome = if model.is_empty() {
                    FetchOutcome::Empty
                } else {
                    FetchOutcome::Rendered
                };
                if self.machine.write().complete(token, outcome) {
                    self.table.set(model);
                } else {
                    info!("discarding stale preview response");
                }
            }
            Ok(None) => {
                // Soft failure: already logged, show the empty state.
                if self.machine.write().complete(token, FetchOutcome::Empty) {
                    self.table.set(PreviewTableModel::empty(columns));
                }
            }
            Err(err) => {
                if self.machine.write().complete(token, FetchOutcome::Failed) {
                    error!("preview fetch failed: {err}");
                    self.error.set(Some(err.to_string()));
                }
            }
        }
    }

    /// Page-load path: restore the saved selection (if any), paint once,
    /// then after the rebuilt form settles re-apply the sub-type selection
    /// for the restored chart type and refresh again.
    pub async fn bootstrap(mut self) {
        let saved = match storage::load_filter_state() {
            Ok(saved) => saved,
            Err(err) => {
                warn!("couldn't restore filter state: {err}");
                None
            }
        };

        let Some(saved) = saved else {
            self.run_refresh().await;
            return;
        };

        info!("restoring filter state saved earlier this session");
        {
            let mut filter = self.filter.write();
            if !saved.start_date.is_empty() {
                filter.start_date = saved.start_date.clone();
            }
            if !saved.end_date.is_empty() {
                filter.end_date = saved.end_date.clone();
            }
            filter.set_chart_type(saved.chart_type);
        }
        self.machine.write().form_changed();
        self.run_refresh().await;

        if let Some(chart) = saved.chart_type {
            platform::settle().await;
            self.filter
                .write()
                .set_checked(chart, saved.checked_for(chart).to_vec());
            self.machine.write().form_changed();
            self.run_refresh().await;
        }
    }

    /// Delete a share and reload; the full-page reload is the recovery
    /// mechanism, so there is no optimistic removal to roll back.
    pub fn delete_share(self, id: String) {
        if !platform::confirm("Delete this share record?") {
            return;
        }
        spawn(async move {
            match fetch::delete_share(&id).await {
                Ok(()) => platform::reload_page(),
                Err(err) => warn!("share delete failed: {err}"),
            }
        });
    }
}
