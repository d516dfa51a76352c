use std::sync::Arc;

use crate::modules::activities::adapters::outbound::roster_in_memory::InMemoryRoster;
use crate::modules::activities::core::seed::default_roster;
use crate::shell::state::AppState;

pub fn seeded_state() -> AppState {
    AppState::new(Arc::new(InMemoryRoster::new(
        default_roster().expect("default seed must be valid"),
    )))
}

pub fn offline_state() -> AppState {
    let mut roster = InMemoryRoster::new(default_roster().expect("default seed must be valid"));
    roster.toggle_offline();
    AppState::new(Arc::new(roster))
}
