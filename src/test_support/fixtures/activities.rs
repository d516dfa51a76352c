// Shared builders for activities and rosters used across unit tests.

use std::collections::BTreeMap;

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::roster::ActivityRoster;

pub struct ActivityBuilder {
    inner: Activity,
}

impl Default for ActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ActivityBuilder {
    pub fn new() -> Self {
        Self {
            inner: Activity {
                description: "Learn strategies and compete in chess tournaments".to_string(),
                schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
                max_participants: 12,
                participants: Vec::new(),
            },
        }
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn schedule(mut self, v: impl Into<String>) -> Self {
        self.inner.schedule = v.into();
        self
    }

    pub fn max_participants(mut self, v: u32) -> Self {
        self.inner.max_participants = v;
        self
    }

    pub fn participants<I, S>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.participants = v.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Activity {
        self.inner
    }
}

pub fn roster_with(activity_name: &str, activity: Activity) -> ActivityRoster {
    ActivityRoster::new(BTreeMap::from([(activity_name.to_string(), activity)]))
}
