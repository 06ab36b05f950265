use std::collections::{HashMap, HashSet};

use crossterm::event::KeyCode;
use ratatui::text::Line;

use crate::content::{self, Event, NewsItem, TeamMember};
use crate::tui::state::{RuntimeConfig, SystemScheme, Theme, ThemePreference};
use crate::tui::widgets::events::TextInputEvent;
use crate::tui::widgets::{
    AccordionState, CarouselState, RevealController, ScrollDirection, TextInputField,
};

/// One scrollable content block of the page, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Events,
    Teams,
    Resources,
    Announcements,
    Snapshot,
    Contact,
    Footer,
}

impl SectionId {
    pub const ALL: [SectionId; 8] = [
        SectionId::Hero,
        SectionId::Events,
        SectionId::Teams,
        SectionId::Resources,
        SectionId::Announcements,
        SectionId::Snapshot,
        SectionId::Contact,
        SectionId::Footer,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::Events => "Events",
            SectionId::Teams => "Teams",
            SectionId::Resources => "Resources",
            SectionId::Announcements => "Announcements",
            SectionId::Snapshot => "Snapshot",
            SectionId::Contact => "Contact",
            SectionId::Footer => "Footer",
        }
    }

    /// Header nav jump key ('1'-'7'; the footer has no nav entry)
    pub fn jump_key(&self) -> Option<char> {
        let idx = SectionId::ALL.iter().position(|s| s == self)?;
        if *self == SectionId::Footer {
            return None;
        }
        char::from_digit(idx as u32 + 1, 10)
    }
}

/// Contact form fields in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn next(self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }
}

/// Local-only contact form; submit acknowledges without a backend
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: TextInputField,
    pub email: TextInputField,
    pub message: TextInputField,
    pub editing: Option<ContactField>,
    pub submitted: bool,
}

impl ContactForm {
    pub fn is_valid(&self) -> bool {
        !self.name.value.trim().is_empty()
            && !self.email.value.trim().is_empty()
            && !self.message.value.trim().is_empty()
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut TextInputField {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }
}

/// Per-section cache of rendered lines.
///
/// A section's lines are rebuilt only after its model was invalidated or
/// the page width changed; everything else repaints from the cache. The
/// rebuild counters back the "only the changed subtree re-renders"
/// contract in tests.
pub struct ViewCache {
    lines: HashMap<SectionId, Vec<Line<'static>>>,
    dirty: HashSet<SectionId>,
    rebuilds: HashMap<SectionId, usize>,
    width: u16,
}

impl Default for ViewCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewCache {
    pub fn new() -> Self {
        Self {
            lines: HashMap::new(),
            dirty: SectionId::ALL.iter().copied().collect(),
            rebuilds: HashMap::new(),
            width: 0,
        }
    }

    /// Invalidate one section after its model changed
    pub fn invalidate(&mut self, id: SectionId) {
        self.dirty.insert(id);
    }

    /// Invalidate the whole page (theme switch)
    pub fn invalidate_all(&mut self) {
        self.dirty.extend(SectionId::ALL);
    }

    /// Record the layout width, invalidating everything when it changed
    pub fn set_width(&mut self, width: u16) {
        if self.width != width {
            self.width = width;
            self.invalidate_all();
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Fetch a section's lines, rebuilding via `build` only when dirty
    pub fn lines(
        &mut self,
        id: SectionId,
        build: impl FnOnce() -> Vec<Line<'static>>,
    ) -> &[Line<'static>] {
        if self.dirty.remove(&id) || !self.lines.contains_key(&id) {
            self.lines.insert(id, build());
            *self.rebuilds.entry(id).or_insert(0) += 1;
        }
        &self.lines[&id]
    }

    pub fn rebuild_count(&self, id: SectionId) -> usize {
        self.rebuilds.get(&id).copied().unwrap_or(0)
    }
}

pub struct State {
    pub config: RuntimeConfig,
    pub system: Box<dyn SystemScheme + Send>,

    // Page geometry (filled in by the first render)
    pub scroll: usize,
    pub viewport: (u16, u16),
    pub page_height: usize,
    pub section_ranges: HashMap<SectionId, (usize, usize)>,
    pub last_direction: ScrollDirection,

    // Presentation engine models, one per widget
    pub reveal: RevealController<SectionId>,
    pub reveal_progress: HashMap<SectionId, u8>,
    pub events: CarouselState<Event>,
    pub team: CarouselState<TeamMember>,
    pub news: AccordionState<u32>,
    pub news_items: Vec<NewsItem>,
    pub news_cursor: usize,

    // Page-wide theme
    pub theme_pref: ThemePreference,
    pub theme: Theme,

    // Hero typewriter progress (chars typed so far)
    pub typed_chars: usize,

    // Section focus: receives widget keys, pauses the events timer
    pub focused: SectionId,

    pub contact: ContactForm,
    pub cache: ViewCache,
}

impl crate::tui::AppState for State {}

impl State {
    pub fn tagline_done(&self) -> bool {
        self.typed_chars >= content::HERO_TAGLINE.chars().count()
    }

    /// True while any section is mid enter-animation
    pub fn animating(&self) -> bool {
        self.reveal_progress.values().any(|p| *p < 100)
    }
}

#[derive(Clone)]
pub enum Msg {
    // Scrolling
    ScrollDown(usize),
    ScrollUp(usize),
    JumpTo(SectionId),
    FocusNext,
    FocusPrev,

    // Carousels
    EventsNext,
    EventsPrev,
    EventsSelect(usize),
    TeamNext,
    TeamPrev,
    TeamSelect(usize),

    // News accordion
    NewsCursorNext,
    NewsCursorPrev,
    NewsToggle(u32),
    NewsToggleCursor,

    // Theme
    ToggleTheme,
    SchemePoll,
    ThemeSaved(Result<(), String>),

    // Timers
    Tick,
    AutoAdvance,

    // Contact form
    ContactStartEditing,
    ContactStopEditing,
    ContactNextField,
    ContactInput(TextInputEvent),
    ContactSubmit,

    Quit,
}

/// Raw key routing while the contact form captures input
pub fn contact_capture(key: KeyCode) -> Option<Msg> {
    match key {
        KeyCode::Esc => Some(Msg::ContactStopEditing),
        KeyCode::Tab => Some(Msg::ContactNextField),
        KeyCode::Enter => Some(Msg::ContactNextField),
        KeyCode::Char(_)
        | KeyCode::Backspace
        | KeyCode::Delete
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Home
        | KeyCode::End => Some(Msg::ContactInput(TextInputEvent::Changed(key))),
        _ => None,
    }
}
