pub mod app;
pub mod apps;
pub mod command;
pub mod runtime;
pub mod state;
pub mod subscription;
pub mod widgets;

pub use app::{App, AppState};
pub use command::Command;
pub use runtime::Runtime;
pub use state::{RuntimeConfig, Theme, ThemeMode, ThemePreference, ThemeVariant};
pub use subscription::{KeyBinding, Subscription};
pub use widgets::{
    AccordionState, CarouselState, RevealController, RevealState, TriggerZone,
};
