use yew::prelude::*;

mod components;
mod hooks;
mod services;
mod state;

use components::article_upload::ArticleUpload;
use components::record_table::RecordTable;
use components::video_upload::VideoUpload;
use hooks::use_articles::use_articles;
use hooks::use_videos::use_videos;
use services::api::ApiClient;
use state::table::rows;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Articles,
    Videos,
}

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let active_tab = use_state(|| Tab::Articles);

    let articles = use_articles(&api_client);
    let videos = use_videos(&api_client);

    let select_tab = |tab: Tab| {
        let active_tab = active_tab.clone();
        Callback::from(move |_: MouseEvent| active_tab.set(tab))
    };
    let tab_class = |tab: Tab| classes!("tab", (*active_tab == tab).then_some("active"));

    let content = match *active_tab {
        Tab::Articles => html! {
            <>
                <ArticleUpload
                    form={articles.state.form.clone()}
                    submitting={articles.state.submitting}
                    error={articles.state.error.clone()}
                    on_title_change={articles.actions.on_title_change.clone()}
                    on_file_change={articles.actions.on_file_change.clone()}
                    on_submit={articles.actions.submit.clone()}
                    on_cancel={articles.actions.cancel.clone()}
                />
                <RecordTable
                    heading="Articles"
                    detail_heading="File"
                    rows={rows(&articles.state.cache, api_client.base_url())}
                    loading={articles.state.loading}
                    last_synced={articles.state.last_synced.clone()}
                    hidden_count={articles.state.cache.hidden_count()}
                    on_edit={articles.actions.edit.clone()}
                    on_delete={articles.actions.delete.clone()}
                    on_reload={articles.actions.refresh.clone()}
                />
            </>
        },
        Tab::Videos => html! {
            <>
                <VideoUpload
                    form={videos.state.form.clone()}
                    submitting={videos.state.submitting}
                    error={videos.state.error.clone()}
                    on_title_change={videos.actions.on_title_change.clone()}
                    on_url_change={videos.actions.on_url_change.clone()}
                    on_file_change={videos.actions.on_file_change.clone()}
                    on_submit={videos.actions.submit.clone()}
                    on_cancel={videos.actions.cancel.clone()}
                />
                <RecordTable
                    heading="Videos"
                    detail_heading="Link"
                    rows={rows(&videos.state.cache, api_client.base_url())}
                    loading={videos.state.loading}
                    last_synced={videos.state.last_synced.clone()}
                    hidden_count={videos.state.cache.hidden_count()}
                    on_edit={videos.actions.edit.clone()}
                    on_delete={videos.actions.delete.clone()}
                    on_reload={videos.actions.refresh.clone()}
                />
            </>
        },
    };

    html! {
        <div class="app">
            <header class="header">
                <h1>{"Maternal Care Library"}</h1>
                <nav class="tabs">
                    <button class={tab_class(Tab::Articles)} onclick={select_tab(Tab::Articles)}>
                        {"Articles"}
                    </button>
                    <button class={tab_class(Tab::Videos)} onclick={select_tab(Tab::Videos)}>
                        {"Videos"}
                    </button>
                </nav>
            </header>
            <main class="content">
                {content}
            </main>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
