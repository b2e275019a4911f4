//! Full-size photo viewer with an image-load timeout.

use contracts::domain::a007_photo::aggregate::Photo;
use leptos::prelude::*;
use thaw::*;

use crate::shared::api_utils::asset_url;
use crate::shared::date_utils::format_timestamp;
use crate::shared::delayed_task::TaskSlot;
use crate::shared::icons::icon;

/// How long the browser gets to load a full-size photo.
pub const IMAGE_TIMEOUT_MS: u32 = 15_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    TimedOut,
    Failed,
}

/// Load progress of the image shown in the viewer. Each retry starts a new
/// attempt; a timeout belonging to an earlier attempt is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageLoad {
    pub attempt: u32,
    pub status: LoadStatus,
}

impl ImageLoad {
    pub fn loaded(&mut self) {
        self.status = LoadStatus::Loaded;
    }

    pub fn failed(&mut self) {
        self.status = LoadStatus::Failed;
    }

    pub fn time_out(&mut self, attempt: u32) {
        if attempt == self.attempt && self.status == LoadStatus::Loading {
            self.status = LoadStatus::TimedOut;
        }
    }

    pub fn retry(&mut self) {
        self.attempt += 1;
        self.status = LoadStatus::Loading;
    }

    /// Image URL for the current attempt; retries bypass the browser cache.
    pub fn source(&self, base: &str) -> String {
        if self.attempt == 0 {
            base.to_string()
        } else {
            let sep = if base.contains('?') { '&' } else { '?' };
            format!("{base}{sep}retry={}", self.attempt)
        }
    }
}

#[component]
pub fn PhotoViewer(photo: Photo) -> impl IntoView {
    let base = asset_url(&photo.url);
    let state = RwSignal::new(ImageLoad::default());
    let timer = TaskSlot::new();

    let arm = move || {
        let attempt = state.with_untracked(|s| s.attempt);
        timer.schedule(IMAGE_TIMEOUT_MS, move || {
            state.try_update(|s| s.time_out(attempt));
        });
    };
    arm();

    let retry = move |_: leptos::ev::MouseEvent| {
        state.update(ImageLoad::retry);
        arm();
    };

    let status = move || state.with(|s| s.status);
    let src = move || state.with(|s| s.source(&base));

    view! {
        <div class="photo-viewer">
            <img
                class="photo-viewer__image"
                class:photo-viewer__image--hidden=move || status() != LoadStatus::Loaded
                src=src
                alt=photo.file_name.clone()
                on:load=move |_| {
                    timer.cancel();
                    state.update(ImageLoad::loaded);
                }
                on:error=move |_| {
                    timer.cancel();
                    state.update(ImageLoad::failed);
                }
            />
            {move || match status() {
                LoadStatus::Loading => view! { <Spinner label="Loading photo..." /> }.into_any(),
                LoadStatus::Loaded => ().into_any(),
                LoadStatus::TimedOut | LoadStatus::Failed => view! {
                    <div class="photo-viewer__problem">
                        <span>
                            {if status() == LoadStatus::TimedOut {
                                "The photo is taking too long to load."
                            } else {
                                "The photo could not be loaded."
                            }}
                        </span>
                        <Button appearance=ButtonAppearance::Secondary on_click=retry>
                            {icon("refresh")}
                            " Retry"
                        </Button>
                    </div>
                }
                .into_any(),
            }}
            <div class="photo-viewer__caption">
                <span>{photo.file_name.clone()}</span>
                {photo.uploaded_at.as_deref().map(|at| view! {
                    <span class="photo-viewer__date">{format_timestamp(at)}</span>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_only_applies_while_loading() {
        let mut load = ImageLoad::default();
        load.time_out(0);
        assert_eq!(load.status, LoadStatus::TimedOut);

        let mut load = ImageLoad::default();
        load.loaded();
        load.time_out(0);
        assert_eq!(load.status, LoadStatus::Loaded);
    }

    #[test]
    fn stale_timeout_after_retry_is_ignored() {
        let mut load = ImageLoad::default();
        load.failed();
        load.retry();
        load.time_out(0);
        assert_eq!(load.status, LoadStatus::Loading);
        load.time_out(1);
        assert_eq!(load.status, LoadStatus::TimedOut);
    }

    #[test]
    fn retries_bust_the_cache() {
        let mut load = ImageLoad::default();
        assert_eq!(load.source("/uploads/a.jpg"), "/uploads/a.jpg");
        load.retry();
        assert_eq!(load.source("/uploads/a.jpg"), "/uploads/a.jpg?retry=1");
        assert_eq!(load.source("/img?id=4"), "/img?id=4&retry=1");
    }
}
