// The activity roster: every activity and who is enrolled in it.
//
// Mutations look the activity up by exact name, run the matching decider and
// fold the resulting event into the activity with `evolve`. A rejected
// command leaves the roster untouched. Activities are never added or removed
// after construction.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decider::decision::DecideError;
use crate::modules::activities::core::decider::sign_up::{
    command::SignUpForActivity, decide::decide_sign_up,
};
use crate::modules::activities::core::decider::unregister::{
    command::UnregisterFromActivity, decide::decide_unregister,
};
use crate::modules::activities::core::events::RosterEvent;
use crate::modules::activities::core::evolve::evolve;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("Activity not found")]
    NotFound { activity_name: String },

    #[error(transparent)]
    Rejected(#[from] DecideError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterErrorKind {
    NotFound,
    AlreadyRegistered,
    NotRegistered,
    CapacityExceeded,
}

impl RosterError {
    pub fn kind(&self) -> RosterErrorKind {
        match self {
            RosterError::NotFound { .. } => RosterErrorKind::NotFound,
            RosterError::Rejected(DecideError::AlreadyRegistered) => {
                RosterErrorKind::AlreadyRegistered
            }
            RosterError::Rejected(DecideError::NotRegistered) => RosterErrorKind::NotRegistered,
            RosterError::Rejected(DecideError::CapacityExceeded) => {
                RosterErrorKind::CapacityExceeded
            }
        }
    }
}

impl RosterErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            RosterErrorKind::NotFound => "NOT_FOUND",
            RosterErrorKind::AlreadyRegistered => "ALREADY_REGISTERED",
            RosterErrorKind::NotRegistered => "NOT_REGISTERED",
            RosterErrorKind::CapacityExceeded => "CAPACITY_EXCEEDED",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityRoster {
    activities: BTreeMap<String, Activity>,
}

impl ActivityRoster {
    pub fn new(activities: BTreeMap<String, Activity>) -> Self {
        Self { activities }
    }

    pub fn list_activities(&self) -> &BTreeMap<String, Activity> {
        &self.activities
    }

    pub fn activity(&self, activity_name: &str) -> Option<&Activity> {
        self.activities.get(activity_name)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn signup(&mut self, command: SignUpForActivity) -> Result<RosterEvent, RosterError> {
        let activity = Self::lookup(&mut self.activities, &command.activity_name)?;
        let event = decide_sign_up(activity, command)?;
        evolve(activity, &event);
        Ok(event)
    }

    pub fn unregister(
        &mut self,
        command: UnregisterFromActivity,
    ) -> Result<RosterEvent, RosterError> {
        let activity = Self::lookup(&mut self.activities, &command.activity_name)?;
        let event = decide_unregister(activity, command)?;
        evolve(activity, &event);
        Ok(event)
    }

    fn lookup<'a>(
        activities: &'a mut BTreeMap<String, Activity>,
        activity_name: &str,
    ) -> Result<&'a mut Activity, RosterError> {
        activities
            .get_mut(activity_name)
            .ok_or_else(|| RosterError::NotFound {
                activity_name: activity_name.to_string(),
            })
    }
}

#[cfg(test)]
mod activity_roster_tests {
    use super::*;
    use crate::test_support::fixtures::activities::{ActivityBuilder, roster_with};
    use rstest::{fixture, rstest};

    const CHESS: &str = "Chess Club";

    #[fixture]
    fn chess_club() -> ActivityRoster {
        roster_with(CHESS, ActivityBuilder::new().max_participants(2).build())
    }

    fn participants(roster: &ActivityRoster) -> Vec<String> {
        roster.activity(CHESS).unwrap().participants.clone()
    }

    #[rstest]
    fn it_should_walk_the_chess_club_scenario(mut chess_club: ActivityRoster) {
        chess_club
            .signup(SignUpForActivity::new(CHESS, "a@x.com"))
            .expect("first signup");
        assert_eq!(participants(&chess_club), vec!["a@x.com"]);

        let duplicate = chess_club.signup(SignUpForActivity::new(CHESS, "a@x.com"));
        assert_eq!(
            duplicate.unwrap_err().kind(),
            RosterErrorKind::AlreadyRegistered
        );

        chess_club
            .signup(SignUpForActivity::new(CHESS, "b@x.com"))
            .expect("second signup");
        assert_eq!(participants(&chess_club), vec!["a@x.com", "b@x.com"]);

        let overflow = chess_club.signup(SignUpForActivity::new(CHESS, "c@x.com"));
        assert_eq!(
            overflow.unwrap_err().kind(),
            RosterErrorKind::CapacityExceeded
        );

        chess_club
            .unregister(UnregisterFromActivity::new(CHESS, "a@x.com"))
            .expect("unregister");
        assert_eq!(participants(&chess_club), vec!["b@x.com"]);

        let again = chess_club.unregister(UnregisterFromActivity::new(CHESS, "a@x.com"));
        assert_eq!(again.unwrap_err().kind(), RosterErrorKind::NotRegistered);
    }

    #[rstest]
    fn it_should_return_the_applied_event(mut chess_club: ActivityRoster) {
        let event = chess_club
            .signup(SignUpForActivity::new(CHESS, "a@x.com"))
            .unwrap();
        assert!(matches!(event, RosterEvent::ParticipantSignedUp(_)));
        assert_eq!(event.activity_name(), CHESS);
        assert_eq!(event.email(), "a@x.com");
    }

    #[rstest]
    #[case("nonexistent")]
    #[case("chess club")]
    #[case("Chess Club ")]
    #[case("")]
    fn it_should_fail_with_not_found_for_unknown_names(
        mut chess_club: ActivityRoster,
        #[case] name: &str,
    ) {
        let before = chess_club.clone();
        let signup = chess_club.signup(SignUpForActivity::new(name, "a@x.com"));
        let unregister = chess_club.unregister(UnregisterFromActivity::new(name, "a@x.com"));
        assert_eq!(
            signup,
            Err(RosterError::NotFound {
                activity_name: name.to_string()
            })
        );
        assert_eq!(unregister.unwrap_err().kind(), RosterErrorKind::NotFound);
        assert_eq!(chess_club, before, "unknown names must not create activities");
    }

    #[rstest]
    fn it_should_prefer_not_found_over_other_rejections() {
        let mut roster = ActivityRoster::default();
        let result = roster.signup(SignUpForActivity::new(CHESS, "a@x.com"));
        assert_eq!(result.unwrap_err().kind(), RosterErrorKind::NotFound);
        assert!(roster.is_empty());
    }

    #[rstest]
    fn it_should_leave_state_unchanged_by_failed_calls(mut chess_club: ActivityRoster) {
        chess_club
            .signup(SignUpForActivity::new(CHESS, "a@x.com"))
            .unwrap();
        let snapshot = chess_club.list_activities().clone();

        let _ = chess_club.signup(SignUpForActivity::new(CHESS, "a@x.com"));
        let _ = chess_club.unregister(UnregisterFromActivity::new(CHESS, "z@x.com"));
        let _ = chess_club.signup(SignUpForActivity::new("nonexistent", "a@x.com"));

        assert_eq!(chess_club.list_activities(), &snapshot);
    }

    #[rstest]
    fn it_should_fill_an_activity_exactly_to_capacity() {
        let mut roster = roster_with(CHESS, ActivityBuilder::new().max_participants(12).build());
        for i in 0..12 {
            roster
                .signup(SignUpForActivity::new(CHESS, format!("student{i}@mergington.edu")))
                .unwrap_or_else(|e| panic!("signup {i} failed: {e}"));
        }
        assert_eq!(roster.activity(CHESS).unwrap().participants.len(), 12);
        let overflow = roster.signup(SignUpForActivity::new(CHESS, "overflow@mergington.edu"));
        assert_eq!(
            overflow.unwrap_err().kind(),
            RosterErrorKind::CapacityExceeded
        );
    }

    #[rstest]
    fn it_should_allow_a_freed_spot_to_be_taken(mut chess_club: ActivityRoster) {
        chess_club.signup(SignUpForActivity::new(CHESS, "a@x.com")).unwrap();
        chess_club.signup(SignUpForActivity::new(CHESS, "b@x.com")).unwrap();
        chess_club
            .unregister(UnregisterFromActivity::new(CHESS, "a@x.com"))
            .unwrap();
        assert!(chess_club.signup(SignUpForActivity::new(CHESS, "c@x.com")).is_ok());
        assert_eq!(participants(&chess_club), vec!["b@x.com", "c@x.com"]);
    }

    #[rstest]
    fn it_should_let_one_student_join_many_activities() {
        let mut roster = roster_with(CHESS, ActivityBuilder::new().build());
        let mut activities = roster.list_activities().clone();
        activities.insert("Drama Club".into(), ActivityBuilder::new().build());
        roster = ActivityRoster::new(activities);

        for name in [CHESS, "Drama Club"] {
            roster
                .signup(SignUpForActivity::new(name, "multi@mergington.edu"))
                .unwrap();
        }
        assert!(roster.activity(CHESS).unwrap().is_enrolled("multi@mergington.edu"));
        assert!(
            roster
                .activity("Drama Club")
                .unwrap()
                .is_enrolled("multi@mergington.edu")
        );
    }

    #[rstest]
    fn it_should_map_every_error_to_a_distinct_code() {
        let codes = [
            RosterErrorKind::NotFound,
            RosterErrorKind::AlreadyRegistered,
            RosterErrorKind::NotRegistered,
            RosterErrorKind::CapacityExceeded,
        ]
        .map(RosterErrorKind::code);
        for (i, code) in codes.iter().enumerate() {
            assert!(!codes[..i].contains(code), "duplicate code {code}");
        }
    }
}
