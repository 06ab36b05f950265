//! Terminal runtime.
//!
//! Owns the terminal, the event loop, interval timers, and teardown.
//! Messages mutate state synchronously through `App::update`; interval
//! subscriptions are re-synced against app state after every batch of
//! messages, so dropping a subscription cancels its timer and no timer
//! outlives the runtime.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use futures::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};

use crate::tui::app::App;
use crate::tui::command::Command;
use crate::tui::subscription::Subscription;

struct IntervalSlot {
    period: Duration,
    next_due: Instant,
}

pub struct Runtime<A: App> {
    state: A::State,
    msg_tx: mpsc::UnboundedSender<A::Msg>,
    msg_rx: Option<mpsc::UnboundedReceiver<A::Msg>>,
    slots: Vec<IntervalSlot>,
    dirty: bool,
    quit: bool,
}

impl<A: App> Runtime<A> {
    pub fn new(params: A::InitParams) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (state, cmd) = A::init(params);
        let mut runtime = Self {
            state,
            msg_tx,
            msg_rx: Some(msg_rx),
            slots: Vec::new(),
            dirty: true,
            quit: false,
        };
        runtime.execute(cmd);
        runtime
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = setup_terminal(A::title())?;
        let result = self.event_loop(&mut terminal).await;
        restore_terminal()?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        let mut events = EventStream::new();
        let mut msg_rx = self.msg_rx.take().expect("event loop started twice");
        self.sync_intervals();

        while !self.quit {
            if self.dirty {
                terminal.draw(|frame| A::view(&mut self.state, frame))?;
                self.dirty = false;
            }

            let deadline = self.slots.iter().map(|s| s.next_due).min();
            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        self.on_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => {
                        self.dirty = true;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                },
                Some(msg) = msg_rx.recv() => {
                    self.dispatch(msg);
                }
                _ = sleep_until_deadline(deadline) => {
                    self.fire_due_intervals();
                }
            }

            // Drain messages that arrived during this event so a user
            // action and its follow-ups land in the same frame, ahead of
            // the next timer-driven check
            while let Ok(msg) = msg_rx.try_recv() {
                self.dispatch(msg);
            }
            self.sync_intervals();
        }

        Ok(())
    }

    fn on_key(&mut self, key: KeyEvent) {
        let subs = A::subscriptions(&self.state);

        // A capture subscription (focused input widget) wins over
        // keyboard bindings
        for sub in &subs {
            if let Subscription::Capture { handler } = sub {
                if let Some(msg) = handler(key) {
                    self.dispatch(msg);
                }
                return;
            }
        }

        let mut matched = Vec::new();
        for sub in subs {
            if let Subscription::Keyboard {
                binding,
                description,
                msg,
            } = sub
            {
                if binding.matches(&key) {
                    log::trace!("key {:?}: {}", key.code, description);
                    matched.push(msg);
                }
            }
        }
        for msg in matched {
            self.dispatch(msg);
        }
    }

    fn dispatch(&mut self, msg: A::Msg) {
        let cmd = A::update(&mut self.state, msg);
        self.dirty = true;
        self.execute(cmd);
    }

    fn execute(&mut self, cmd: Command<A::Msg>) {
        match cmd {
            Command::None => {}
            Command::Quit => self.quit = true,
            Command::Batch(cmds) => {
                for cmd in cmds {
                    self.execute(cmd);
                }
            }
            Command::Perform(future) => {
                let tx = self.msg_tx.clone();
                tokio::spawn(async move {
                    // Receiver may be gone if the runtime shut down; the
                    // message is dropped rather than delivered late
                    let _ = tx.send(future.await);
                });
            }
        }
    }

    /// Align interval timers with the app's current subscription set
    fn sync_intervals(&mut self) {
        let periods: Vec<Duration> = A::subscriptions(&self.state)
            .iter()
            .filter_map(|s| match s {
                Subscription::Interval { period, .. } => Some(*period),
                _ => None,
            })
            .collect();

        let unchanged = self.slots.len() == periods.len()
            && self.slots.iter().zip(&periods).all(|(s, p)| s.period == *p);
        if unchanged {
            return;
        }

        let now = Instant::now();
        self.slots = periods
            .into_iter()
            .map(|period| IntervalSlot {
                period,
                next_due: now + period,
            })
            .collect();
    }

    fn fire_due_intervals(&mut self) {
        let now = Instant::now();
        let mut due = Vec::new();
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if slot.next_due <= now {
                slot.next_due = now + slot.period;
                due.push(idx);
            }
        }
        if due.is_empty() {
            return;
        }

        let interval_msgs: Vec<A::Msg> = A::subscriptions(&self.state)
            .into_iter()
            .filter_map(|s| match s {
                Subscription::Interval { msg, .. } => Some(msg),
                _ => None,
            })
            .collect();
        for idx in due {
            if let Some(msg) = interval_msgs.get(idx) {
                self.dispatch(msg.clone());
            }
        }
    }
}

async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(at) => sleep_until(at).await,
        None => std::future::pending().await,
    }
}

fn setup_terminal(title: &str) -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(title))?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
