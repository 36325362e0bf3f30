// SPDX-License-Identifier: MPL-2.0
//! Application root state and the update loop.
//!
//! `App` owns the gallery screen state, the HTTP client, and the image
//! caches, and translates messages into side effects (list fetches, image
//! fetches). Fetch completions are tagged with a generation at issue time so
//! a late response from a superseded fetch can never overwrite a newer
//! batch; everything else applies in arrival order.

use crate::config;
use crate::error::FetchError;
use crate::gallery::{GalleryClient, PhotoRecord};
use crate::ui::grid;
use crate::ui::overlay;
use crate::ui::state::{self, FetchOutcome, Indicator};
use crate::ui::theme::Preset;
use iced::widget::{image, stack};
use iced::{time, window, Element, Subscription, Task, Theme};
use lru::LruCache;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::num::NonZeroUsize;

/// Root Iced application state.
pub struct App {
    client: GalleryClient,
    gallery: state::State,
    preset: Preset,
    /// Thumbnail bytes by record id; pruned to the current batch on replace.
    thumbnails: HashMap<String, image::Handle>,
    /// Bounded cache of 800x800 detail images, keyed by record id.
    details: LruCache<String, image::Handle>,
    /// Placeholder pulse counter, advanced by the animation tick.
    pulse: usize,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("preset", &self.preset)
            .field("records", &self.gallery.records().len())
            .field("thumbnails", &self.thumbnails.len())
            .finish()
    }
}

/// Top-level messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    Grid(grid::Message),
    Overlay(overlay::Message),
    /// A list fetch completed; only the latest issued generation is applied.
    PhotosLoaded {
        generation: u64,
        result: Result<Vec<PhotoRecord>, FetchError>,
    },
    ThumbnailLoaded {
        id: String,
        result: Result<image::Handle, FetchError>,
    },
    DetailLoaded {
        id: String,
        result: Result<image::Handle, FetchError>,
    },
    Tick(std::time::Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional theme preset name (e.g. `emerald`); overrides the settings
    /// file for this session.
    pub theme: Option<String>,
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 780;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 900;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Interval of the placeholder pulse while thumbnails load.
const PULSE_INTERVAL: std::time::Duration = std::time::Duration::from_millis(450);

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn resolve_preset(flag: Option<&str>, configured: Option<&str>) -> Preset {
    match flag.or(configured) {
        Some(name) => Preset::from_name(name).unwrap_or_else(|| {
            eprintln!(
                "Unknown theme \"{}\", falling back to \"{}\"",
                name,
                Preset::default().theme().name
            );
            Preset::default()
        }),
        None => Preset::default(),
    }
}

/// A valid `--theme` flag becomes the new persisted default. Unknown names
/// and no-ops (the preset already configured) leave the settings file alone.
fn updated_theme_config(config: &config::Config, flag: Option<&str>) -> Option<config::Config> {
    let preset = Preset::from_name(flag?)?;
    if config.theme.as_deref() == Some(preset.theme().name) {
        return None;
    }
    Some(config::Config {
        theme: Some(preset.theme().name.to_string()),
        list_endpoint: config.list_endpoint.clone(),
        image_endpoint: config.image_endpoint.clone(),
    })
}

impl Default for App {
    fn default() -> Self {
        Self {
            client: GalleryClient::default(),
            gallery: state::State::new(),
            preset: Preset::default(),
            thumbnails: HashMap::new(),
            details: LruCache::new(
                NonZeroUsize::new(config::DETAIL_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN),
            ),
            pulse: 0,
        }
    }
}

impl App {
    /// Initializes application state and kicks off the initial list fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let preset = resolve_preset(flags.theme.as_deref(), config.theme.as_deref());

        if let Some(updated) = updated_theme_config(&config, flags.theme.as_deref()) {
            if let Err(err) = config::save(&updated) {
                eprintln!("Failed to persist theme preference: {}", err);
            }
        }

        let client = GalleryClient::new(
            config
                .list_endpoint
                .unwrap_or_else(|| config::DEFAULT_LIST_ENDPOINT.to_string()),
            config
                .image_endpoint
                .unwrap_or_else(|| config::DEFAULT_IMAGE_ENDPOINT.to_string()),
        );

        let mut app = App {
            client,
            preset,
            ..Self::default()
        };
        let task = app.start_fetch();
        (app, task)
    }

    fn title(&self) -> String {
        self.preset.theme().title.to_string()
    }

    fn theme(&self) -> Theme {
        self.preset.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let pending = self.gallery.indicator() != Indicator::Idle
            || self
                .gallery
                .records()
                .iter()
                .any(|record| !self.thumbnails.contains_key(&record.id));

        if self.preset.theme().animations_enabled && pending {
            time::every(PULSE_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Grid(grid::Message::RefreshPressed) => self.start_fetch(),
            Message::Grid(grid::Message::TilePressed(index)) => {
                if !self.gallery.select(index) {
                    return Task::none();
                }
                let Some(record) = self.gallery.selected_record() else {
                    return Task::none();
                };
                let id = record.id.clone();
                if self.details.contains(&id) {
                    Task::none()
                } else {
                    self.fetch_detail(id)
                }
            }
            Message::Overlay(overlay::Message::Dismissed) => {
                self.gallery.dismiss();
                Task::none()
            }
            Message::PhotosLoaded { generation, result } => {
                let error = result.as_ref().err().cloned();
                match self.gallery.apply_fetch(generation, result) {
                    FetchOutcome::Replaced => {
                        self.prune_thumbnails();
                        self.spawn_missing_thumbnails()
                    }
                    FetchOutcome::Failed => {
                        if let Some(err) = error {
                            eprintln!("Failed to fetch photo list: {}", err);
                        }
                        Task::none()
                    }
                    // A superseded completion is discarded silently; its
                    // error, if any, belongs to a fetch that no longer owns
                    // the indicator.
                    FetchOutcome::Stale => Task::none(),
                }
            }
            Message::ThumbnailLoaded { id, result } => {
                match result {
                    Ok(handle) => {
                        // A completion for a record no longer present is dropped.
                        if self.gallery.records().iter().any(|r| r.id == id) {
                            self.thumbnails.insert(id, handle);
                        }
                    }
                    Err(err) => eprintln!("Failed to fetch thumbnail {}: {}", id, err),
                }
                Task::none()
            }
            Message::DetailLoaded { id, result } => {
                match result {
                    Ok(handle) => {
                        self.details.put(id, handle);
                    }
                    Err(err) => eprintln!("Failed to fetch detail image {}: {}", id, err),
                }
                Task::none()
            }
            Message::Tick(_) => {
                self.pulse = self.pulse.wrapping_add(1);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let theme = self.preset.theme();
        let grid_view = grid::view(grid::ViewContext {
            records: self.gallery.records(),
            thumbnails: &self.thumbnails,
            theme,
            indicator: self.gallery.indicator(),
            pulse: self.pulse,
        })
        .map(Message::Grid);

        match self.gallery.selected_record() {
            Some(record) => {
                let overlay_view = overlay::view(overlay::ViewContext {
                    record,
                    detail: self.details.peek(&record.id),
                })
                .map(Message::Overlay);

                stack![grid_view, overlay_view].into()
            }
            None => grid_view,
        }
    }

    /// Issues a list fetch tagged with a fresh generation.
    fn start_fetch(&mut self) -> Task<Message> {
        let generation = self.gallery.begin_fetch();
        let client = self.client.clone();
        Task::perform(
            async move { (generation, client.fetch_list().await) },
            |(generation, result)| Message::PhotosLoaded { generation, result },
        )
    }

    fn fetch_thumbnail(&self, id: String) -> Task<Message> {
        let client = self.client.clone();
        Task::perform(
            async move {
                let result = client.fetch_image(&id, config::THUMBNAIL_SIZE).await;
                (id, result)
            },
            |(id, result)| Message::ThumbnailLoaded {
                id,
                result: result.map(|bytes| image::Handle::from_bytes(bytes)),
            },
        )
    }

    fn fetch_detail(&self, id: String) -> Task<Message> {
        let client = self.client.clone();
        Task::perform(
            async move {
                let result = client.fetch_image(&id, config::DETAIL_SIZE).await;
                (id, result)
            },
            |(id, result)| Message::DetailLoaded {
                id,
                result: result.map(|bytes| image::Handle::from_bytes(bytes)),
            },
        )
    }

    fn prune_thumbnails(&mut self) {
        let live: HashSet<String> = self
            .gallery
            .records()
            .iter()
            .map(|record| record.id.clone())
            .collect();
        self.thumbnails.retain(|id, _| live.contains(id));
    }

    fn spawn_missing_thumbnails(&self) -> Task<Message> {
        let tasks: Vec<_> = self
            .gallery
            .records()
            .iter()
            .filter(|record| !self.thumbnails.contains_key(&record.id))
            .map(|record| self.fetch_thumbnail(record.id.clone()))
            .collect();
        Task::batch(tasks)
    }
}
