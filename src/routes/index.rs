use axum::extract::State;
use axum::response::Response;

use crate::config::LoadingConfig;
use crate::content::{self, AudioTrack, BandMember, GalleryImage, Show, VideoSlide};
use crate::filters;
use crate::routes::{AppState, render_template};

use super::booking::BookingFormView;

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub site_name: String,
    pub loading: LoadingConfig,
    pub members: &'static [BandMember],
    pub gallery: &'static [GalleryImage],
    pub shows: &'static [Show],
    pub videos: &'static [VideoSlide],
    pub tracks: &'static [AudioTrack],
    pub form: BookingFormView,
}

/// GET / - the single page: hero, about, members, gallery, shows, music and
/// the booking form.
pub async fn page(State(app): State<AppState>) -> Response {
    render_template(IndexTemplate {
        site_name: app.config.site.name.clone(),
        loading: app.config.site.loading.clone(),
        members: content::BAND_MEMBERS,
        gallery: content::GALLERY_IMAGES,
        shows: content::UPCOMING_SHOWS,
        videos: content::VIDEO_SLIDES,
        tracks: content::AUDIO_TRACKS,
        form: BookingFormView::default(),
    })
}
