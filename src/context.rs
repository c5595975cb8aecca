//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{ApiError, HttpTaskApi};
use crate::config::ApiConfig;
use crate::controller::TaskController;
use crate::store::TaskStore;

/// How long an error notice stays up unless dismissed
const NOTICE_TIMEOUT_MS: u32 = 6_000;

/// User-visible report of a failed backend call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub seq: u32,
    pub message: String,
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Task mirror for the active filter
    store: TaskStore,
    config: StoredValue<ApiConfig>,
    /// Latest error notice - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Latest error notice - write
    set_notice: WriteSignal<Option<Notice>>,
}

impl AppContext {
    pub fn new(
        store: TaskStore,
        config: ApiConfig,
        notice: (ReadSignal<Option<Notice>>, WriteSignal<Option<Notice>>),
    ) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    /// Controller bound to the HTTP backend and the shared store
    pub fn controller(&self) -> TaskController<HttpTaskApi, TaskStore> {
        TaskController::new(HttpTaskApi::new(self.config.get_value()), self.store)
    }

    /// Show a failed operation to the user; local state is left as it was
    pub fn report(&self, action: &str, err: &ApiError) {
        let seq = self.notice.get_untracked().map_or(1, |n| n.seq.wrapping_add(1));
        self.set_notice.set(Some(Notice {
            seq,
            message: format!("Could not {}: {}", action, err),
        }));

        let notice = self.notice;
        let set_notice = self.set_notice;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            if notice.get_untracked().map(|n| n.seq) == Some(seq) {
                set_notice.set(None);
            }
        });
    }

    pub fn dismiss_notice(&self) {
        self.set_notice.set(None);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
