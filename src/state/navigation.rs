/// Application-level navigation state
///
/// Cards never own navigation. A designated card only carries a
/// `NavigationTarget`; when it is activated the target is dispatched
/// against whatever implements `NavigationContext` (the app's
/// `NavigationState` at runtime, a recorder in tests).

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;

/// Named sections shown in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Section {
    #[default]
    Home,
    Projects,
    Skills,
    Experience,
    Education,
    Contact,
}

impl Section {
    /// All sections in header order
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Projects,
        Section::Skills,
        Section::Experience,
        Section::Education,
        Section::Contact,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }
}

/// Pages the application can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// The main project list
    #[default]
    Projects,
    /// The workflow showcase sub-page
    Workflows,
}

impl Route {
    /// Path this route would have on the web
    pub fn path(&self) -> &'static str {
        match self {
            Route::Projects => "/#projects",
            Route::Workflows => "/n8n-workflows",
        }
    }
}

/// Where activating a designated card leads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavigationTarget {
    /// Section marked active on activation
    pub section: Section,
    /// Page navigated to on activation
    pub route: Route,
}

/// Ambient navigation state a card can write into
pub trait NavigationContext {
    fn set_active_section(&mut self, section: Section);
    fn set_last_click_timestamp(&mut self, at: DateTime<Utc>);
    fn navigate(&mut self, route: Route);
}

/// Navigation state owned by the application
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    pub active_section: Section,
    pub last_click: Option<DateTime<Utc>>,
    pub route: Route,
}

impl NavigationState {
    pub fn new(route: Route) -> Self {
        let active_section = match route {
            Route::Projects => Section::Home,
            Route::Workflows => Section::Projects,
        };

        Self {
            active_section,
            last_click: None,
            route,
        }
    }
}

impl NavigationContext for NavigationState {
    fn set_active_section(&mut self, section: Section) {
        self.active_section = section;
    }

    fn set_last_click_timestamp(&mut self, at: DateTime<Utc>) {
        self.last_click = Some(at);
    }

    fn navigate(&mut self, route: Route) {
        info!("🧭 Navigating to {}", route.path());
        self.route = route;
    }
}

/// Apply a designated card's activation: one section update, one
/// timestamp update, then the route change.
pub fn activate<C: NavigationContext>(target: &NavigationTarget, ctx: &mut C, now: DateTime<Utc>) {
    ctx.set_active_section(target.section);
    ctx.set_last_click_timestamp(now);
    ctx.navigate(target.route);
}

/// Header link behaviour: mark the section and record the click.
pub fn select_section<C: NavigationContext>(section: Section, ctx: &mut C, now: DateTime<Utc>) {
    ctx.set_active_section(section);
    ctx.set_last_click_timestamp(now);
}
