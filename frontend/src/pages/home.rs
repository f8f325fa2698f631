use yew::prelude::*;

use crate::components::upcoming_lectures::UpcomingLectures;
use crate::config::AppConfig;
use crate::services::api::FetchError;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub config: AppConfig,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let on_error = Callback::from(|e: FetchError| {
        tracing::warn!("Upcoming lectures unavailable: {}", e);
    });

    html! {
        <div class="container">
            <h2>{ "Upcoming Lectures" }</h2>
            if let Some(wallet_id) = props.config.wallet_id {
                <UpcomingLectures
                    wallet_id={wallet_id}
                    api_base_url={props.config.api_base_url}
                    failure_policy={props.config.failure_policy}
                    on_error={on_error}
                />
            } else {
                <div class="empty-state">
                    <p>{ "No wallet configured." }</p>
                    <p>{ "Set LECTURES_WALLET_ID to load a schedule." }</p>
                </div>
            }
        </div>
    }
}
