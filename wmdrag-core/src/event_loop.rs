use crate::errors::Result;
use crate::models::Handle;
use crate::{Config, DisplayServer, Manager};

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Pull the pending events from the display server and handle them in
    /// order, flushing queued actions after each one.
    /// Returns the number of events handled.
    ///
    /// # Errors
    ///
    /// Stops at the first fatal error. Any keyboard grab has already been
    /// released by then; the caller is expected to shut down.
    pub fn process_events(&mut self) -> Result<usize> {
        let events = self.display_server.get_next_events();
        let count = events.len();
        for event in events {
            tracing::trace!("DisplayEvent: {:?}", event);
            let result = self.display_event_handler(event);
            self.flush_actions();
            result?;
        }
        self.display_server.flush();
        Ok(count)
    }

    /// Keep processing until the display server has nothing left to report.
    ///
    /// # Errors
    ///
    /// See [`Manager::process_events`].
    pub fn event_loop(&mut self) -> Result<()> {
        while self.process_events()? > 0 {}
        Ok(())
    }
}
