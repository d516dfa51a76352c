use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::activities::core::decider::sign_up::command::SignUpForActivity;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SignUpForActivityMutation;

#[Object]
impl SignUpForActivityMutation {
    async fn sign_up_for_activity(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let event = state
            .sign_up_handler
            .handle(SignUpForActivity::new(activity_name, email))
            .await
            .map_err(|e| e.extend())?;
        Ok(event.message())
    }
}
