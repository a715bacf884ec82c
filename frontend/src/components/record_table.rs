use yew::prelude::*;
use crate::state::table::TableRow;

#[derive(Properties, PartialEq)]
pub struct RecordTableProps {
    pub heading: AttrValue,
    pub detail_heading: AttrValue,
    pub rows: Vec<TableRow>,
    pub loading: bool,
    #[prop_or_default]
    pub last_synced: Option<String>,
    /// Rows removed locally that will come back on reload
    #[prop_or_default]
    pub hidden_count: usize,
    pub on_edit: Callback<i64>,
    pub on_delete: Callback<i64>,
    pub on_reload: Callback<()>,
}

#[function_component(RecordTable)]
pub fn record_table(props: &RecordTableProps) -> Html {
    html! {
        <section class="records-section">
            <div class="section-header">
                <h2>{props.heading.to_string()}</h2>
                <button class="btn btn-small" disabled={props.loading} onclick={
                    let on_reload = props.on_reload.clone();
                    Callback::from(move |_| on_reload.emit(()))
                }>
                    {"Reload"}
                </button>
                {if let Some(time) = props.last_synced.as_ref() {
                    html! { <span class="sync-time">{format!("Synced at {}", time)}</span> }
                } else { html! {} }}
            </div>

            {if props.hidden_count > 0 {
                html! {
                    <div class="form-message info">
                        {format!("{} removed locally; they will reappear after a reload.", props.hidden_count)}
                    </div>
                }
            } else { html! {} }}

            {if props.loading {
                html! { <div class="loading">{"Loading..."}</div> }
            } else if props.rows.is_empty() {
                html! { <div class="empty">{"Nothing here yet."}</div> }
            } else {
                html! {
                    <div class="table-container">
                        <table class="records-table">
                            <thead>
                                <tr>
                                    <th>{"Title"}</th>
                                    <th>{props.detail_heading.to_string()}</th>
                                    <th>{"Uploaded"}</th>
                                    <th>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for props.rows.iter().map(|row| {
                                    let id = row.id;
                                    let on_edit = props.on_edit.clone();
                                    let on_delete = props.on_delete.clone();

                                    html! {
                                        <tr key={id.to_string()} class={classes!(row.local_only.then_some("local-only"))}>
                                            <td class="title">
                                                {&row.title}
                                                {if row.local_only {
                                                    html! { <span class="badge">{"local only"}</span> }
                                                } else { html! {} }}
                                            </td>
                                            <td class="detail">
                                                {match &row.href {
                                                    Some(href) => html! {
                                                        <a href={href.clone()} target="_blank">{&row.detail}</a>
                                                    },
                                                    None => html! { {&row.detail} },
                                                }}
                                            </td>
                                            <td class="date">{&row.date}</td>
                                            <td class="actions">
                                                <button class="btn btn-small"
                                                    onclick={Callback::from(move |_| on_edit.emit(id))}>
                                                    {"Edit"}
                                                </button>
                                                <button class="btn btn-small btn-danger"
                                                    onclick={Callback::from(move |_| on_delete.emit(id))}>
                                                    {"Delete"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            }}
        </section>
    }
}
