use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult, SimpleObject};

use crate::modules::activities::core::activity::Activity;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(name = "Activity")]
pub struct GqlActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
    pub spots_left: u32,
}

impl GqlActivity {
    fn from_entry(name: String, activity: Activity) -> Self {
        let spots_left = activity.spots_left() as u32;
        Self {
            name,
            description: activity.description,
            schedule: activity.schedule,
            max_participants: activity.max_participants,
            participants: activity.participants,
            spots_left,
        }
    }
}

#[derive(Default)]
pub struct ListActivitiesQuery;

#[Object]
impl ListActivitiesQuery {
    async fn activities(&self, context: &Context<'_>) -> GqlResult<Vec<GqlActivity>> {
        let state = context.data_unchecked::<AppState>();
        let activities = state.list_handler.handle().await.map_err(|e| e.extend())?;
        Ok(activities
            .into_iter()
            .map(|(name, activity)| GqlActivity::from_entry(name, activity))
            .collect())
    }

    async fn activity(&self, context: &Context<'_>, name: String) -> GqlResult<Option<GqlActivity>> {
        let state = context.data_unchecked::<AppState>();
        let activity = state.list_handler.find(&name).await.map_err(|e| e.extend())?;
        Ok(activity.map(|activity| GqlActivity::from_entry(name, activity)))
    }
}
