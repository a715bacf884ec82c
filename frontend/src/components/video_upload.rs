use yew::prelude::*;
use crate::hooks::use_videos::VideoForm;

#[derive(Properties, PartialEq)]
pub struct VideoUploadProps {
    pub form: VideoForm,
    pub submitting: bool,
    pub error: Option<String>,
    pub on_title_change: Callback<Event>,
    pub on_url_change: Callback<Event>,
    pub on_file_change: Callback<Event>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(VideoUpload)]
pub fn video_upload(props: &VideoUploadProps) -> Html {
    let draft = props.form.draft();
    let editing = props.form.is_editing();

    html! {
        <section class="upload-section">
            <h2>{if editing { "Edit Video" } else { "Add Video" }}</h2>

            {if let Some(error) = props.error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            <form class="upload-form" onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <div class="form-group">
                    <label for="video-title">{"Title"}</label>
                    <input
                        type="text"
                        id="video-title"
                        required={true}
                        value={draft.title.clone()}
                        onchange={props.on_title_change.clone()}
                        disabled={props.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="video-url">{"Video URL"}</label>
                    <input
                        type="url"
                        id="video-url"
                        placeholder="https://www.youtube.com/watch?v=..."
                        value={draft.url.clone()}
                        onchange={props.on_url_change.clone()}
                        disabled={props.submitting || draft.file.is_some()}
                    />
                </div>

                // Only new videos can be uploaded as files
                {if editing { html! {} } else {
                    html! {
                        <div class="form-group">
                            <label for="video-file">{"...or upload a file"}</label>
                            <input
                                type="file"
                                id="video-file"
                                accept="video/*"
                                onchange={props.on_file_change.clone()}
                                disabled={props.submitting}
                            />
                            {if let Some(file) = draft.file.as_ref() {
                                html! { <video class="video-preview" src={file.preview_url()} controls={true} /> }
                            } else { html! {} }}
                        </div>
                    }
                }}

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                        {if props.submitting {
                            "Saving..."
                        } else if editing {
                            "Save Changes"
                        } else {
                            "Add Video"
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
