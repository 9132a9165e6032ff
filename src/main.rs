use chrono::Utc;
use clap::Parser;
use iced::widget::{button, column, container, scrollable, text, Column};
use iced::{window, Alignment, Element, Length, Size, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod assets;
mod state;
mod ui;

use assets::thumbnail;
use state::card::{CardEffect, CardMessage, CardState};
use state::catalog::Catalog;
use state::navigation::{self, NavigationContext, NavigationState, Route, Section};
use ui::Layout;

/// Initial window size; also decides the starting layout
const INITIAL_SIZE: Size = Size::new(1280.0, 860.0);

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "project-showcase")]
#[command(about = "Project and workflow showcase built from gallery cards")]
struct Args {
    /// Path to a catalog JSON file (defaults to the user data directory,
    /// then the built-in catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Page shown at startup
    #[arg(long, value_enum, default_value_t = StartPage::Projects)]
    start_page: StartPage,

    /// Log card state transitions
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum StartPage {
    Projects,
    Workflows,
}

impl From<StartPage> for Route {
    fn from(page: StartPage) -> Self {
        match page {
            StartPage::Projects => Route::Projects,
            StartPage::Workflows => Route::Workflows,
        }
    }
}

/// Identifies one card across both pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardKey {
    page: Route,
    index: usize,
}

/// Main application state
struct Showcase {
    /// Cards listed on the projects page
    projects: Vec<CardState>,
    /// Cards listed on the workflows page
    workflows: Vec<CardState>,
    /// Active section, last click and current page
    navigation: NavigationState,
    layout: Layout,
    dark: bool,
    /// Last animation frame; drives slide transitions
    now: Instant,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// An input event for one card
    Card(CardKey, CardMessage),
    /// A header link was pressed
    SectionSelected(Section),
    /// "Back to Projects" on the workflows page
    BackToProjects,
    ToggleTheme,
    WindowResized(Size),
    Frame(Instant),
    /// Background thumbnail generation finished for one card
    ThumbnailsReady(CardKey, Vec<Option<PathBuf>>),
}

impl Showcase {
    /// Create the application from a loaded catalog
    fn new(catalog: Catalog, start: Route) -> (Self, Task<Message>) {
        let showcase = Showcase {
            projects: catalog.projects.into_iter().map(CardState::new).collect(),
            workflows: catalog.workflows.into_iter().map(CardState::new).collect(),
            navigation: NavigationState::new(start),
            layout: Layout::from_width(INITIAL_SIZE.width),
            dark: true,
            now: Instant::now(),
        };

        info!(
            "🎨 Showcase initialized with {} projects and {} workflows",
            showcase.projects.len(),
            showcase.workflows.len()
        );

        let tasks = showcase.keys().filter_map(|key| {
            let card = showcase.card(key)?;
            let sources = card.gallery.iter().map(|path| path.to_path_buf()).collect();
            Some(Task::perform(
                thumbnail::generate_for_gallery(sources),
                move |thumbnails| Message::ThumbnailsReady(key, thumbnails),
            ))
        });
        let task = Task::batch(tasks.collect::<Vec<_>>());

        (showcase, task)
    }

    fn cards(&self, page: Route) -> &[CardState] {
        match page {
            Route::Projects => &self.projects,
            Route::Workflows => &self.workflows,
        }
    }

    fn card(&self, key: CardKey) -> Option<&CardState> {
        self.cards(key.page).get(key.index)
    }

    fn card_mut(&mut self, key: CardKey) -> Option<&mut CardState> {
        match key.page {
            Route::Projects => self.projects.get_mut(key.index),
            Route::Workflows => self.workflows.get_mut(key.index),
        }
    }

    fn keys(&self) -> impl Iterator<Item = CardKey> + '_ {
        [Route::Projects, Route::Workflows]
            .into_iter()
            .flat_map(move |page| (0..self.cards(page).len()).map(move |index| CardKey { page, index }))
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Card(key, message) => {
                let effect = match self.card_mut(key) {
                    Some(card) => card.update(message),
                    None => {
                        warn!("No card for {:?}", key);
                        return Task::none();
                    }
                };

                match effect {
                    Some(CardEffect::Navigate(target)) => {
                        navigation::activate(&target, &mut self.navigation, Utc::now());
                    }
                    Some(CardEffect::OpenUrl(url)) => open_url(&url),
                    None => {}
                }
            }
            Message::SectionSelected(section) => {
                navigation::select_section(section, &mut self.navigation, Utc::now());
                if self.navigation.route != Route::Projects {
                    self.navigation.navigate(Route::Projects);
                }
            }
            Message::BackToProjects => {
                navigation::select_section(Section::Projects, &mut self.navigation, Utc::now());
                self.navigation.navigate(Route::Projects);
            }
            Message::ToggleTheme => {
                self.dark = !self.dark;
            }
            Message::WindowResized(size) => {
                let layout = Layout::from_width(size.width);
                if layout != self.layout {
                    info!("Layout changed to {:?} at {}px", layout, size.width);
                    self.layout = layout;

                    // The inline carousel is rebuilt, so no pointer-leave arrives
                    for card in self.projects.iter_mut().chain(self.workflows.iter_mut()) {
                        card.hover.pointer_left();
                    }
                }
            }
            Message::Frame(now) => {
                self.now = now;
                for card in self.projects.iter_mut().chain(self.workflows.iter_mut()) {
                    card.carousel.settle(now);
                }
            }
            Message::ThumbnailsReady(key, thumbnails) => {
                if let Some(card) = self.card_mut(key) {
                    card.set_thumbnails(thumbnails);
                }
            }
        }

        Task::none()
    }

    /// The card on the current page whose lightbox is open, if any
    fn open_lightbox(&self) -> Option<(CardKey, &CardState)> {
        let page = self.navigation.route;
        self.cards(page)
            .iter()
            .enumerate()
            .find(|(_, card)| card.lightbox.is_open())
            .map(|(index, card)| (CardKey { page, index }, card))
    }

    fn is_animating(&self) -> bool {
        self.projects
            .iter()
            .chain(self.workflows.iter())
            .any(|card| card.carousel.is_animating(self.now))
    }

    fn card_list(&self, page: Route) -> Element<'_, Message> {
        Column::with_children(self.cards(page).iter().enumerate().map(|(index, card)| {
            let key = CardKey { page, index };
            ui::card::view(card, self.layout, self.now).map(move |message| Message::Card(key, message))
        }))
        .spacing(24)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
    }

    fn projects_page(&self) -> Element<'_, Message> {
        column![text("My projects").size(32), self.card_list(Route::Projects)]
            .spacing(32)
            .align_x(Alignment::Center)
            .into()
    }

    fn workflows_page(&self) -> Element<'_, Message> {
        let back = button(text("← Back to Projects").size(15))
            .on_press(Message::BackToProjects)
            .padding([6, 12])
            .style(button::text);

        column![
            container(back).width(Length::Fill).max_width(960.0),
            text("N8N WORKFLOWS").size(32),
            self.card_list(Route::Workflows),
        ]
        .spacing(32)
        .align_x(Alignment::Center)
        .into()
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let page = match self.navigation.route {
            Route::Projects => self.projects_page(),
            Route::Workflows => self.workflows_page(),
        };

        let base: Element<'_, Message> = column![
            ui::header::view(&self.navigation, self.dark),
            scrollable(container(page).padding(32).width(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill),
        ]
        .into();

        match self.open_lightbox() {
            Some((key, card)) => ui::lightbox::modal(
                base,
                ui::lightbox::overlay(card, self.now).map(move |message| Message::Card(key, message)),
            ),
            None => base,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let resize = window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        if self.is_animating() {
            Subscription::batch([resize, window::frames().map(Message::Frame)])
        } else {
            resize
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Open an outbound link in the system browser
fn open_url(url: &str) {
    info!("🔗 Opening {}", url);
    if let Err(err) = open::that_detached(url) {
        warn!("⚠️  Could not open {}: {}", url, err);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info,project_showcase=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,wgpu_core=warn,wgpu_hal=warn,naga=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> iced::Result {
    let args = Args::parse();
    init_logging(args.verbose);

    let catalog = Catalog::discover(args.catalog.as_deref()).unwrap_or_else(|err| {
        error!("❌ Built-in catalog is invalid: {}", err);
        Catalog::default()
    });
    let start = Route::from(args.start_page);

    iced::application("Project Showcase", Showcase::update, Showcase::view)
        .subscription(Showcase::subscription)
        .theme(Showcase::theme)
        .window_size(INITIAL_SIZE)
        .centered()
        .run_with(move || Showcase::new(catalog, start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::gallery::TRANSITION_DURATION;
    use crate::state::lightbox::PressRegion;

    const CATALOG: &str = r#"{
        "projects": [
            {
                "title": "N8N Workflows",
                "description": "Automation showcase",
                "image": "n8n.png",
                "navigation": { "section": "Projects", "route": "workflows" }
            },
            {
                "title": "Project AWARE",
                "description": "Disease predictor",
                "image": "aware.png",
                "images": ["aware.png", "pic2.png", "pic3.png"]
            }
        ],
        "workflows": [
            { "title": "Cold Email Outreach", "description": "Outreach", "image": "email.png", "images": [] }
        ]
    }"#;

    fn showcase() -> Showcase {
        let catalog = Catalog::from_json(CATALOG, std::path::Path::new("/assets")).unwrap();
        Showcase::new(catalog, Route::Projects).0
    }

    fn key(page: Route, index: usize) -> CardKey {
        CardKey { page, index }
    }

    #[test]
    fn test_designated_card_navigates_to_workflows() {
        let mut app = showcase();

        let _ = app.update(Message::Card(key(Route::Projects, 0), CardMessage::Activate));

        assert_eq!(app.navigation.route, Route::Workflows);
        assert_eq!(app.navigation.active_section, Section::Projects);
        assert!(app.navigation.last_click.is_some());
    }

    #[test]
    fn test_plain_card_does_not_navigate() {
        let mut app = showcase();

        let _ = app.update(Message::Card(key(Route::Projects, 1), CardMessage::Activate));

        assert_eq!(app.navigation.route, Route::Projects);
        assert_eq!(app.navigation.active_section, Section::Home);
        assert!(app.navigation.last_click.is_none());
    }

    #[test]
    fn test_lightbox_is_scoped_to_one_card() {
        let mut app = showcase();
        let aware = key(Route::Projects, 1);

        let _ = app.update(Message::Card(aware, CardMessage::ThumbnailPressed(2)));

        let (open_key, card) = app.open_lightbox().unwrap();
        assert_eq!(open_key, aware);
        assert_eq!(card.carousel.index(), 2);
        assert!(!app.projects[0].lightbox.is_open());

        let _ = app.update(Message::Card(aware, CardMessage::LightboxPressed(PressRegion::Backdrop)));
        assert!(app.open_lightbox().is_none());
        assert_eq!(app.projects[1].carousel.index(), 2);
    }

    #[test]
    fn test_back_to_projects() {
        let mut app = showcase();
        let _ = app.update(Message::Card(key(Route::Projects, 0), CardMessage::Activate));

        let _ = app.update(Message::BackToProjects);

        assert_eq!(app.navigation.route, Route::Projects);
        assert_eq!(app.navigation.active_section, Section::Projects);
    }

    #[test]
    fn test_section_link_returns_to_projects_page() {
        let mut app = showcase();
        app.navigation.navigate(Route::Workflows);

        let _ = app.update(Message::SectionSelected(Section::Contact));

        assert_eq!(app.navigation.route, Route::Projects);
        assert_eq!(app.navigation.active_section, Section::Contact);
    }

    #[test]
    fn test_resize_switches_layout() {
        let mut app = showcase();
        assert_eq!(app.layout, Layout::Wide);

        let _ = app.update(Message::WindowResized(Size::new(600.0, 800.0)));
        assert_eq!(app.layout, Layout::Narrow);
    }

    #[test]
    fn test_layout_change_clears_hover() {
        let mut app = showcase();
        let aware = key(Route::Projects, 1);

        let _ = app.update(Message::Card(aware, CardMessage::PointerEntered));
        assert!(app.projects[1].hover.reveals_controls());

        let _ = app.update(Message::WindowResized(Size::new(600.0, 800.0)));
        let _ = app.update(Message::WindowResized(Size::new(1400.0, 800.0)));

        assert_eq!(app.layout, Layout::Wide);
        assert!(!app.projects[1].hover.reveals_controls());
    }

    #[test]
    fn test_resize_within_layout_keeps_hover() {
        let mut app = showcase();
        let aware = key(Route::Projects, 1);

        let _ = app.update(Message::Card(aware, CardMessage::PointerEntered));
        let _ = app.update(Message::WindowResized(Size::new(1300.0, 800.0)));

        assert!(app.projects[1].hover.reveals_controls());
    }

    #[test]
    fn test_frames_settle_transitions() {
        let mut app = showcase();
        let aware = key(Route::Projects, 1);

        let _ = app.update(Message::Card(aware, CardMessage::Next));
        assert!(app.is_animating());

        let later = Instant::now() + TRANSITION_DURATION;
        let _ = app.update(Message::Frame(later));
        assert!(!app.is_animating());
        assert!(app.projects[1].carousel.transition().is_none());
    }

    #[test]
    fn test_missing_card_is_ignored() {
        let mut app = showcase();
        let _ = app.update(Message::Card(key(Route::Workflows, 9), CardMessage::Next));

        assert_eq!(app.workflows.len(), 1);
    }

    #[test]
    fn test_thumbnails_ready_updates_card() {
        let mut app = showcase();
        let thumb = PathBuf::from("/cache/thumb.jpg");

        let _ = app.update(Message::ThumbnailsReady(
            key(Route::Workflows, 0),
            vec![Some(thumb.clone())],
        ));

        assert_eq!(app.workflows[0].thumbnail(0), Some(thumb.as_path()));
    }
}
