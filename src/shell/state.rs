use std::sync::Arc;

use crate::modules::activities::adapters::outbound::roster_in_memory::InMemoryRoster;
use crate::modules::activities::use_cases::list_activities::handler::ListActivitiesHandler;
use crate::modules::activities::use_cases::sign_up_for_activity::handler::SignUpForActivityHandler;
use crate::modules::activities::use_cases::unregister_from_activity::handler::UnregisterFromActivityHandler;

#[derive(Clone)]
pub struct AppState {
    pub list_handler: Arc<ListActivitiesHandler<InMemoryRoster>>,
    pub sign_up_handler: Arc<SignUpForActivityHandler<InMemoryRoster>>,
    pub unregister_handler: Arc<UnregisterFromActivityHandler<InMemoryRoster>>,
}

impl AppState {
    pub fn new(roster: Arc<InMemoryRoster>) -> Self {
        Self {
            list_handler: Arc::new(ListActivitiesHandler::new(roster.clone())),
            sign_up_handler: Arc::new(SignUpForActivityHandler::new(roster.clone())),
            unregister_handler: Arc::new(UnregisterFromActivityHandler::new(roster)),
        }
    }
}
