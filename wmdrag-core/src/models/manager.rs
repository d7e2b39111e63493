use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::models::Handle;
use crate::state::State;

/// Owns the drag session and the collaborators it talks to, and dispatches
/// display events into the drag handlers.
#[derive(Debug)]
pub struct Manager<H: Handle, C, SERVER> {
    pub state: State<H>,
    pub config: C,
    pub display_server: SERVER,
}

impl<H, C, SERVER> Manager<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    pub fn new(config: C) -> Self {
        let display_server = SERVER::new(&config);

        Self {
            state: State::default(),
            config,
            display_server,
        }
    }

    /// Hand every queued action to the display server, in order.
    pub fn flush_actions(&mut self) {
        while let Some(act) = self.state.actions.pop_front() {
            tracing::trace!("DisplayAction: {:?}", act);
            self.display_server.execute_action(act);
        }
    }
}

#[cfg(test)]
impl
    Manager<
        crate::models::MockHandle,
        crate::config::tests::TestConfig,
        crate::display_servers::MockDisplayServer<crate::models::MockHandle>,
    >
{
    pub fn new_test(config: crate::config::tests::TestConfig) -> Self {
        Self::new(config)
    }
}
