use yew::prelude::*;
use shared::Article;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use crate::services::api::ApiClient;
use crate::services::date_utils::sync_time;
use crate::services::picked_file::SelectedFile;
use crate::state::drafts::ArticleDraft;
use crate::state::form_state::{Draft, FormState, Submission};
use crate::state::record_cache::RecordCache;

pub type ArticleForm = FormState<ArticleDraft<SelectedFile>>;

#[derive(Clone)]
pub struct ArticleState {
    pub cache: RecordCache<Article>,
    pub form: ArticleForm,
    pub loading: bool,
    pub last_synced: Option<String>,
    pub submitting: bool,
    pub error: Option<String>,
}

pub struct UseArticlesResult {
    pub state: ArticleState,
    pub actions: UseArticlesActions,
}

#[derive(Clone)]
pub struct UseArticlesActions {
    pub refresh: Callback<()>,
    pub submit: Callback<()>,
    pub cancel: Callback<()>,
    pub edit: Callback<i64>,
    pub delete: Callback<i64>,
    pub on_title_change: Callback<Event>,
    pub on_file_change: Callback<Event>,
}

#[hook]
pub fn use_articles(api_client: &ApiClient) -> UseArticlesResult {
    let cache = use_state(RecordCache::<Article>::new);
    let form = use_state(ArticleForm::new);
    let loading = use_state(|| true);
    let last_synced = use_state(|| None::<String>);
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);

    // Re-sync the list from the server
    let refresh = {
        let api_client = api_client.clone();
        let cache = cache.clone();
        let loading = loading.clone();
        let last_synced = last_synced.clone();
        let error = error.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let cache = cache.clone();
            let loading = loading.clone();
            let last_synced = last_synced.clone();
            let error = error.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.get_articles().await {
                    Ok(articles) => {
                        cache.set(RecordCache::from_server(articles));
                        last_synced.set(Some(sync_time()));
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to fetch articles:", e.clone());
                        error.set(Some(e));
                    }
                }

                loading.set(false);
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let submit = {
        let api_client = api_client.clone();
        let cache = cache.clone();
        let form = form.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let refresh = refresh.clone();

        Callback::from(move |_| {
            let previous = (*form).clone();
            let mut next = previous.clone();
            let Some(submission) = next.submit() else {
                error.set(Some("Please enter a title and choose a file".to_string()));
                return;
            };
            error.set(None);
            form.set(next);

            match submission {
                Submission::Update { id, draft } => {
                    let mut updated = (*cache).clone();
                    if let Some(current) = updated.get(id).cloned() {
                        updated.apply_local_edit(draft.apply_to(&current));
                        cache.set(updated);
                    }
                }
                Submission::Create(draft) => {
                    let Some(picked) = draft.file else {
                        return;
                    };
                    let api_client = api_client.clone();
                    let form = form.clone();
                    let submitting = submitting.clone();
                    let error = error.clone();
                    let refresh = refresh.clone();
                    let title = draft.title;

                    spawn_local(async move {
                        submitting.set(true);

                        match api_client.upload_article(&title, picked.file()).await {
                            Ok(_) => refresh.emit(()),
                            Err(e) => {
                                gloo::console::error!("Failed to upload article:", e.clone());
                                form.set(previous);
                                error.set(Some(e));
                            }
                        }

                        submitting.set(false);
                    });
                }
            }
        })
    };

    let cancel = {
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |_| {
            let mut next = (*form).clone();
            next.cancel();
            form.set(next);
            error.set(None);
        })
    };

    let edit = {
        let cache = cache.clone();
        let form = form.clone();
        Callback::from(move |id: i64| {
            if let Some(article) = cache.get(id) {
                let mut next = (*form).clone();
                next.begin_edit(id, article);
                form.set(next);
            }
        })
    };

    let delete = {
        let cache = cache.clone();
        let form = form.clone();
        Callback::from(move |id: i64| {
            if !gloo::dialogs::confirm("Remove this article from the list?") {
                return;
            }
            let mut updated = (*cache).clone();
            if updated.remove_local(id).is_some() {
                cache.set(updated);
            }
            let mut next = (*form).clone();
            next.on_deleted(id);
            form.set(next);
        })
    };

    let on_title_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.draft_mut().title = input.value();
            form.set(next);
        })
    };

    let on_file_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.draft_mut().set_file(SelectedFile::from_input(&input));
            form.set(next);
        })
    };

    UseArticlesResult {
        state: ArticleState {
            cache: (*cache).clone(),
            form: (*form).clone(),
            loading: *loading,
            last_synced: (*last_synced).clone(),
            submitting: *submitting,
            error: (*error).clone(),
        },
        actions: UseArticlesActions {
            refresh,
            submit,
            cancel,
            edit,
            delete,
            on_title_change,
            on_file_change,
        },
    }
}
