use contracts::domain::a007_photo::aggregate::{Photo, PhotoFolder, UploadResponse};
use contracts::shared::api_message::ApiMessage;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlInputElement};

use super::viewer::PhotoViewer;
use crate::domain::a007_photo::api;
use crate::shared::api_utils::asset_url;
use crate::shared::components::ui::Select;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::modal_form::{FormHandle, ModalForm};
use crate::shared::modal_frame::ModalSize;
use crate::shared::options;
use crate::shared::screen_state::{after_write, finish_write, load_list, ListState, LoadPhase, ModalState};
use crate::shared::toast::use_toast;

fn selected_files(input: &HtmlInputElement) -> Vec<File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

fn upload_ack(response: UploadResponse, count: usize) -> ApiMessage {
    let message = if response.message.trim().is_empty() {
        match count {
            1 => "Photo uploaded".to_string(),
            n => format!("{n} photos uploaded"),
        }
    } else {
        response.message
    };
    ApiMessage { message }
}

#[component]
pub fn PhotoGallery() -> impl IntoView {
    let toasts = use_toast();
    let list = RwSignal::new(ListState::<Photo>::new());
    let modal = RwSignal::new(ModalState::<Photo>::Closed);
    let folder = RwSignal::new(PhotoFolder::default());
    let uploading = RwSignal::new(false);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let fetch = move || {
        load_list(
            list,
            toasts,
            "photos",
            "Failed to fetch photos",
            api::fetch_photos(folder.get_untracked()),
        )
    };

    // Rows from the previous folder never show under the new label.
    Effect::new(move |_| {
        folder.track();
        list.update(ListState::reset);
        fetch();
    });

    let on_files = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files = selected_files(&input);
        input.set_value("");
        if files.is_empty() {
            return;
        }
        let target = folder.get_untracked();
        let count = files.len();
        uploading.set(true);
        spawn_local(async move {
            let result = api::upload_photos(target, &files)
                .await
                .map(|r| upload_ack(r, count));
            uploading.try_set(false);
            let outcome = after_write(&result, "Photos uploaded", "Failed to upload photos");
            finish_write(outcome, modal, toasts, fetch);
        });
    };

    let close = Callback::new(move |_| modal.set(ModalState::Closed));
    let viewing = Signal::derive(move || modal.with(|m| m.viewing().is_some()));
    let viewer_title = Signal::derive(move || {
        modal.with(|m| m.viewing().map(|p| p.file_name.clone()).unwrap_or_default())
    });
    let failed_empty = move || list.with(|l| l.phase() == LoadPhase::Failed && l.rows().is_empty());

    view! {
        <div class="page">
            <PageHeader title="Photos">
                <Select
                    value=Signal::derive(move || folder.get().as_str().to_string())
                    options=options::photo_folder_options()
                    on_change=Callback::new(move |v: String| {
                        if let Some(f) = PhotoFolder::parse(&v) {
                            folder.set(f);
                        }
                    })
                />
                <input
                    node_ref=file_input
                    type="file"
                    accept="image/*"
                    multiple=true
                    class="visually-hidden"
                    on:change=on_files
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || uploading.get())
                    on_click=move |_| {
                        if let Some(input) = file_input.get_untracked() {
                            input.click();
                        }
                    }
                >
                    {icon("upload")}
                    {move || if uploading.get() { " Uploading..." } else { " Upload" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                <Show when=move || list.with(|l| l.is_loading() && l.rows().is_empty())>
                    <Spinner label="Loading photos..." />
                </Show>

                <Show when=failed_empty>
                    <div class="empty-state">
                        <p>{move || list.with(|l| l.error().unwrap_or_default().to_string())}</p>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                            {icon("refresh")}
                            " Retry"
                        </Button>
                    </div>
                </Show>

                <div class="photo-grid">
                    <For
                        each=move || list.with(|l| l.rows().to_vec())
                        key=|p| p.url.clone()
                        children=move |photo| {
                            let thumb = asset_url(&photo.url);
                            let name = photo.file_name.clone();
                            let title = name.clone();
                            let alt = name.clone();
                            view! {
                                <button
                                    type="button"
                                    class="photo-grid__item"
                                    title=title
                                    on:click=move |_| modal.set(ModalState::Viewing(photo.clone()))
                                >
                                    <img src=thumb alt=alt loading="lazy" />
                                    <span class="photo-grid__name">{name}</span>
                                </button>
                            }
                        }
                    />
                </div>

                <Show when=move || list.with(ListState::is_empty)>
                    <div class="empty-state">"No photos in this folder yet."</div>
                </Show>
            </div>

            <ModalForm
                is_open=viewing
                title=viewer_title
                on_close=close
                is_form=false
                close_on_outside_click=true
                size=ModalSize::Large
                render=Callback::new(move |_: FormHandle| {
                    modal
                        .with_untracked(|m| m.viewing().cloned())
                        .map(|photo| view! { <PhotoViewer photo=photo /> }.into_any())
                        .unwrap_or_else(|| ().into_any())
                })
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_ack_prefers_server_message() {
        let response = UploadResponse {
            message: "Uploaded to staff".into(),
            files: vec!["a.jpg".into()],
        };
        assert_eq!(upload_ack(response, 1).message, "Uploaded to staff");
    }

    #[test]
    fn upload_ack_counts_files() {
        assert_eq!(upload_ack(UploadResponse::default(), 1).message, "Photo uploaded");
        assert_eq!(upload_ack(UploadResponse::default(), 4).message, "4 photos uploaded");
    }
}
