//! Browser environment for the panel controller.
//!
//! State lives in a Leptos `RwSignal`, tasks run on the local executor via
//! `spawn_local`, and auto-hide timers are one-shot `gloo-timers` timeouts.

use std::future::Future;

use leptos::prelude::*;

use crate::controller::PanelHost;
use crate::net::api::HttpApi;
use crate::state::panel::PanelState;

#[derive(Clone, Copy)]
pub struct BrowserHost {
    api: HttpApi,
    panel: RwSignal<PanelState>,
}

impl BrowserHost {
    #[must_use]
    pub fn new(panel: RwSignal<PanelState>) -> Self {
        Self { api: HttpApi, panel }
    }
}

impl PanelHost for BrowserHost {
    type Api = HttpApi;

    fn api(&self) -> &HttpApi {
        &self.api
    }

    fn update<R>(&self, f: impl FnOnce(&mut PanelState) -> R) -> Option<R> {
        self.panel.try_update(f)
    }

    fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        leptos::task::spawn_local(task);
    }

    #[cfg(feature = "csr")]
    fn after(&self, delay_ms: u32, task: impl FnOnce() + 'static) {
        gloo_timers::callback::Timeout::new(delay_ms, task).forget();
    }

    #[cfg(not(feature = "csr"))]
    fn after(&self, _delay_ms: u32, _task: impl FnOnce() + 'static) {
        log::debug!("timers are only available in the browser");
    }
}
