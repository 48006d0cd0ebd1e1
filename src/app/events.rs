//! Event processing from backend

use super::StoatApp;
use crate::events;

impl StoatApp {
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            events::process_single_event(&mut self.state, &mut self.dialogs, event);
        }
    }
}
