use std::future::Future;
use std::pin::Pin;

/// Effect requested by an app's `update`.
///
/// Commands are executed by the runtime after the state mutation that
/// produced them; `Perform` futures resolve on the tokio runtime and
/// feed their message back through the event loop.
pub enum Command<Msg> {
    None,
    Quit,
    Batch(Vec<Command<Msg>>),
    Perform(Pin<Box<dyn Future<Output = Msg> + Send>>),
}

impl<Msg: Send + 'static> Command<Msg> {
    /// Run an async task and map its output into a message
    pub fn perform<T, Fut, F>(future: Fut, map: F) -> Self
    where
        T: Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
        F: FnOnce(T) -> Msg + Send + 'static,
    {
        Command::Perform(Box::pin(async move { map(future.await) }))
    }

    pub fn batch(commands: Vec<Command<Msg>>) -> Self {
        Command::Batch(commands)
    }

    pub fn quit() -> Self {
        Command::Quit
    }
}

impl<Msg> std::fmt::Debug for Command<Msg> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::None => write!(f, "Command::None"),
            Command::Quit => write!(f, "Command::Quit"),
            Command::Batch(cmds) => write!(f, "Command::Batch({} commands)", cmds.len()),
            Command::Perform(_) => write!(f, "Command::Perform(..)"),
        }
    }
}
