use super::api;
use super::model::{result_view, ItemRow, ResultView};
use super::state::DataFormState;
use crate::shared::load_log::use_load_log;
use contracts::enums::integration_type::IntegrationType;
use contracts::usecases::u601_load_integration_data::{Credentials, LoadedData};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Load panel for one integration: trigger, error panel and the item list.
///
/// Credentials come from the host and are forwarded untouched.
#[component]
pub fn DataForm(
    #[prop(into)] integration_type: Signal<IntegrationType>,
    #[prop(into)] credentials: Signal<Credentials>,
) -> impl IntoView {
    let state = RwSignal::new(DataFormState::default());
    let load_log = use_load_log();

    let on_load = move |_| {
        let integration = integration_type.get_untracked();
        let credentials = credentials.get_untracked();
        let load_log = load_log.clone();
        state.update(|s| s.begin_load());

        spawn_local(async move {
            let url = api::integration_url(integration);
            load_log.request(integration, &url, &credentials);

            match api::load_items(&url, &credentials).await {
                Ok(data) => {
                    load_log.received(integration, &data.normalize());
                    state.update(|s| s.finish_ok(data));
                }
                Err(msg) => {
                    load_log.failed(integration, &msg);
                    state.update(|s| s.finish_err(msg.clone()));
                    if let Some(w) = web_sys::window() {
                        let _ = w.alert_with_message(&msg);
                    }
                }
            }
        });
    };

    let on_clear = move |_| state.update(|s| s.clear());

    let loaded = Signal::derive(move || state.with(|s| s.loaded.clone()));

    view! {
        <div
            class="data-form"
            style="display: flex; flex-direction: column; align-items: center; width: 100%;">
            <div style="display: flex; flex-direction: column; width: 100%; gap: 8px; margin-top: 16px;">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_load
                    disabled=Signal::derive(move || state.with(|s| s.loading))
                >
                    {move || state.with(|s| s.load_label())}
                </Button>

                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=on_clear
                    disabled=Signal::derive(move || !state.with(|s| s.can_clear()))
                >
                    "Clear Data"
                </Button>

                {move || state.with(|s| s.error.clone()).map(|err| view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        <span>{format!("Error: {}", err)}</span>
                    </MessageBar>
                })}

                <LoadedDataView data=loaded integration_type=integration_type />
            </div>
        </div>
    }
}

/// Renders a load result; nothing at all while there is no result
#[component]
pub fn LoadedDataView(
    #[prop(into)] data: Signal<Option<LoadedData>>,
    #[prop(into)] integration_type: Signal<IntegrationType>,
) -> impl IntoView {
    move || {
        data.get().map(|data| {
            match result_view(data.normalize(), integration_type.get()) {
                ResultView::Empty { message } => view! {
                    <Card attr:style="margin-top: 16px; padding: 16px;">
                        <div>"No data found"</div>
                        {message.map(|m| view! {
                            <div style="margin-top: 8px; font-size: 13px;">{m}</div>
                        })}
                    </Card>
                }
                .into_any(),
                ResultView::List { header, message, rows } => view! {
                    <Card attr:style="margin-top: 16px; padding: 16px; max-height: 400px; overflow: auto;">
                        <h3 style="margin: 0 0 8px 0;">{header}</h3>
                        {message.map(|m| view! {
                            <div style="margin-bottom: 16px; font-size: 13px; color: var(--color-text-secondary);">
                                {m}
                            </div>
                        })}
                        <ul style="list-style: none; margin: 0; padding: 0;">
                            {rows.into_iter().map(|row| view! { <ItemRowView row=row /> }).collect_view()}
                        </ul>
                    </Card>
                }
                .into_any(),
            }
        })
    }
}

#[component]
fn ItemRowView(row: ItemRow) -> impl IntoView {
    let ItemRow {
        key,
        title,
        id_line,
        created_line,
        modified_line,
        divider_after,
    } = row;

    view! {
        <li data-key=key style="padding: 8px 0;">
            <div style="font-weight: 500;">{title}</div>
            <div style="font-size: 13px; color: var(--color-text-secondary);">
                <div>{id_line}</div>
                {created_line.map(|line| view! { <div>{line}</div> })}
                {modified_line.map(|line| view! { <div>{line}</div> })}
            </div>
            {divider_after.then(|| view! { <Divider attr:style="margin-top: 8px;" /> })}
        </li>
    }
}
