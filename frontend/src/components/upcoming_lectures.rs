use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use shared::api::DashboardResponse;
use web_sys::AbortController;
use yew::prelude::*;

use crate::components::lecture_list::LectureList;
use crate::services::api::{ApiService, FetchError};
use crate::state::{FailurePolicy, LectureView};

#[derive(Properties, PartialEq)]
pub struct UpcomingLecturesProps {
    pub wallet_id: AttrValue,
    /// Base URL of the dashboard API; empty for same-origin requests.
    #[prop_or_default]
    pub api_base_url: AttrValue,
    #[prop_or_default]
    pub failure_policy: FailurePolicy,
    /// Fired when the dashboard request fails, whatever the policy.
    #[prop_or_default]
    pub on_error: Callback<FetchError>,
}

/// Await one dashboard request and hand the settled view to `set_view`.
///
/// Nothing is reported once `cancelled` is set.
async fn load<F>(
    request: F,
    cancelled: Rc<Cell<bool>>,
    policy: FailurePolicy,
    on_error: Callback<FetchError>,
    set_view: impl FnOnce(LectureView),
) where
    F: Future<Output = Result<DashboardResponse, FetchError>>,
{
    let result = request.await;

    if cancelled.get() {
        tracing::debug!("discarding dashboard response after teardown");
        return;
    }

    if let Err(e) = &result {
        on_error.emit(e.clone());
    }
    set_view(LectureView::settle(result, policy));
}

/// Loads the wallet's upcoming lectures once per mount and renders them.
#[function_component(UpcomingLectures)]
pub fn upcoming_lectures(props: &UpcomingLecturesProps) -> Html {
    let view = use_state(LectureView::default);

    {
        let view = view.clone();
        let policy = props.failure_policy;
        let on_error = props.on_error.clone();

        use_effect_with(
            (props.api_base_url.clone(), props.wallet_id.clone()),
            move |(api_base_url, wallet_id)| {
                if !view.is_loading() {
                    view.set(LectureView::Loading);
                }

                let cancelled = Rc::new(Cell::new(false));
                let controller = match AbortController::new() {
                    Ok(controller) => Some(controller),
                    Err(e) => {
                        tracing::warn!("AbortController unavailable: {:?}", e);
                        None
                    }
                };
                let signal = controller.as_ref().map(AbortController::signal);
                let service = ApiService::new(api_base_url.to_string());
                let wallet_id = wallet_id.to_string();

                {
                    let cancelled = cancelled.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let request = service.get_dashboard(&wallet_id, signal.as_ref());
                        load(request, cancelled, policy, on_error, move |next| view.set(next)).await;
                    });
                }

                move || {
                    cancelled.set(true);
                    if let Some(controller) = controller {
                        controller.abort();
                    }
                }
            },
        );
    }

    html! {
        <LectureList view={(*view).clone()} />
    }
}
