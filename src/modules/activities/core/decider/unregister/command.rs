use chrono::Utc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnregisterFromActivity {
    pub activity_name: String,
    pub email: String,
    pub requested_at: i64,
}

impl UnregisterFromActivity {
    pub fn new(activity_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            activity_name: activity_name.into(),
            email: email.into(),
            requested_at: Utc::now().timestamp_millis(),
        }
    }
}
