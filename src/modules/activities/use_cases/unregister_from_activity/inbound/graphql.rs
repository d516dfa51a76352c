use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::activities::core::decider::unregister::command::UnregisterFromActivity;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UnregisterFromActivityMutation;

#[Object]
impl UnregisterFromActivityMutation {
    async fn unregister_from_activity(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let event = state
            .unregister_handler
            .handle(UnregisterFromActivity::new(activity_name, email))
            .await
            .map_err(|e| e.extend())?;
        Ok(event.message())
    }
}
