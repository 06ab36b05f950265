use ratatui::Frame;

use crate::tui::command::Command;
use crate::tui::subscription::Subscription;

/// Marker trait for app state types
pub trait AppState {}

/// Elm-style application contract driven by the runtime.
///
/// `update` is the only place state mutates, and it runs synchronously
/// per message; `view` draws from state; `subscriptions` declares the
/// inputs (keys, timers) the app currently listens for.
pub trait App {
    type State: AppState;
    type Msg: Clone + Send + 'static;
    type InitParams;

    fn init(params: Self::InitParams) -> (Self::State, Command<Self::Msg>);

    fn update(state: &mut Self::State, msg: Self::Msg) -> Command<Self::Msg>;

    fn view(state: &mut Self::State, frame: &mut Frame);

    fn subscriptions(state: &Self::State) -> Vec<Subscription<Self::Msg>>;

    fn title() -> &'static str;
}
