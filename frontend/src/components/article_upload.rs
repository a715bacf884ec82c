use yew::prelude::*;
use crate::hooks::use_articles::ArticleForm;

#[derive(Properties, PartialEq)]
pub struct ArticleUploadProps {
    // Form state
    pub form: ArticleForm,
    pub submitting: bool,
    pub error: Option<String>,

    // Event handlers
    pub on_title_change: Callback<Event>,
    pub on_file_change: Callback<Event>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ArticleUpload)]
pub fn article_upload(props: &ArticleUploadProps) -> Html {
    let draft = props.form.draft();
    let editing = props.form.is_editing();

    html! {
        <section class="upload-section">
            <h2>{if editing { "Edit Article" } else { "Upload Article" }}</h2>

            {if let Some(error) = props.error.as_ref() {
                html! {
                    <div class="form-message error">
                        {error}
                    </div>
                }
            } else { html! {} }}

            <form class="upload-form" onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <div class="form-group">
                    <label for="article-title">{"Title"}</label>
                    <input
                        type="text"
                        id="article-title"
                        required={true}
                        value={draft.title.clone()}
                        onchange={props.on_title_change.clone()}
                        disabled={props.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="article-file">{"PDF file"}</label>
                    <input
                        type="file"
                        id="article-file"
                        accept="application/pdf"
                        onchange={props.on_file_change.clone()}
                        disabled={props.submitting}
                    />
                    {match (&draft.file, &draft.existing_file_name) {
                        (Some(file), _) => html! {
                            <a class="file-preview" href={file.preview_url()} target="_blank">
                                {"Preview selected file"}
                            </a>
                        },
                        (None, Some(existing)) => html! {
                            <span class="file-current">{format!("Current file: {}", existing)}</span>
                        },
                        (None, None) => html! {},
                    }}
                </div>

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                        {if props.submitting {
                            "Uploading..."
                        } else if editing {
                            "Save Changes"
                        } else {
                            "Upload Article"
                        }}
                    </button>
                    {if editing {
                        let on_cancel = props.on_cancel.clone();
                        html! {
                            <button type="button" class="btn btn-secondary"
                                onclick={Callback::from(move |_| on_cancel.emit(()))}>
                                {"Cancel"}
                            </button>
                        }
                    } else { html! {} }}
                </div>
            </form>
        </section>
    }
}
