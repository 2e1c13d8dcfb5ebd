//! GenerateSuggestionsHandler - Command handler for text-based reply generation.
//!
//! Order of operations:
//! 1. Load the optional partner profile (must belong to the caller)
//! 2. Consume one unit through the usage gate
//! 3. Build prompts and call the model on the tier matching the plan
//! 4. Parse suggestions and record them in history
//!
//! A unit consumed before a failed model call is not refunded.

use std::sync::Arc;

use crate::application::handlers::subscription::{ConsumeUsageCommand, ConsumeUsageHandler};
use crate::domain::foundation::{DomainError, ErrorCode, ProfileId, Timestamp, UserId};
use crate::domain::profile::Profile;
use crate::domain::subscription::UsageSummary;
use crate::domain::suggestion::{
    build_system_prompt, build_user_prompt, parse_suggestions, Conversation, MessageHistory,
    SuggestionContext,
};
use crate::ports::{
    AIProvider, CompletionRequest, MessageHistoryRepository, MessageRole, ModelTier,
    ProfileRepository, RequestMetadata, SubscriptionRepository,
};

/// Sampling parameters passed to the model on every call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: 0.8,
            max_tokens: 512,
        }
    }
}

/// Command to generate replies for a conversation.
#[derive(Debug, Clone)]
pub struct GenerateSuggestionsCommand {
    pub user_id: UserId,
    pub conversation: Conversation,
    pub context: SuggestionContext,
    pub profile_id: Option<ProfileId>,
}

/// Generated replies and the quota left afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSuggestions {
    pub suggestions: Vec<String>,
    pub usage: UsageSummary,
}

/// Handler for reply generation.
pub struct GenerateSuggestionsHandler {
    usage_gate: ConsumeUsageHandler,
    profiles: Arc<dyn ProfileRepository>,
    history: Arc<dyn MessageHistoryRepository>,
    ai: Arc<dyn AIProvider>,
    settings: GenerationSettings,
}

impl GenerateSuggestionsHandler {
    pub fn new(
        subscriptions: Arc<dyn SubscriptionRepository>,
        profiles: Arc<dyn ProfileRepository>,
        history: Arc<dyn MessageHistoryRepository>,
        ai: Arc<dyn AIProvider>,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            usage_gate: ConsumeUsageHandler::new(subscriptions),
            profiles,
            history,
            ai,
            settings,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateSuggestionsCommand,
    ) -> Result<GeneratedSuggestions, DomainError> {
        // 1. Profile lookup is validation, so it happens before quota is spent
        let profile = match cmd.profile_id {
            Some(profile_id) => Some(self.load_owned_profile(&cmd.user_id, &profile_id).await?),
            None => None,
        };

        // 2. Usage gate
        let usage = self
            .usage_gate
            .handle(ConsumeUsageCommand {
                user_id: cmd.user_id,
            })
            .await?;

        // 3. Model call
        let request = CompletionRequest::new(RequestMetadata::new(
            cmd.user_id,
            uuid::Uuid::new_v4().to_string(),
        ))
        .with_system_prompt(build_system_prompt())
        .with_message(
            MessageRole::User,
            build_user_prompt(&cmd.conversation, &cmd.context, profile.as_ref()),
        )
        .with_temperature(self.settings.temperature)
        .with_max_tokens(self.settings.max_tokens)
        .with_model_tier(ModelTier::for_premium(usage.is_premium));

        let trace_id = request.metadata.trace_id.clone();
        let response = self.ai.complete(request).await.map_err(|e| {
            tracing::error!(user_id = %cmd.user_id, trace_id = %trace_id, error = %e, "LLM call failed");
            DomainError::from(e)
        })?;

        // 4. Parse and record
        let suggestions = parse_suggestions(&response.content, cmd.context.num_suggestions);
        if suggestions.is_empty() {
            tracing::error!(user_id = %cmd.user_id, trace_id = %trace_id, "LLM returned no usable suggestions");
            return Err(DomainError::new(
                ErrorCode::AIProviderError,
                "model returned no usable suggestions",
            ));
        }

        let entry = MessageHistory::record(
            cmd.user_id,
            cmd.conversation.into_inner(),
            suggestions.clone(),
            Timestamp::now(),
        );
        if let Err(e) = self.history.append(&entry).await {
            tracing::warn!(user_id = %cmd.user_id, error = %e, "Failed to record suggestion history");
        }

        tracing::info!(
            user_id = %cmd.user_id,
            count = suggestions.len(),
            model = %response.model,
            remaining = usage.remaining,
            "Suggestions generated"
        );

        Ok(GeneratedSuggestions { suggestions, usage })
    }

    async fn load_owned_profile(
        &self,
        user_id: &UserId,
        profile_id: &ProfileId,
    ) -> Result<Profile, DomainError> {
        self.profiles
            .find_by_id(profile_id)
            .await?
            .filter(|p| p.is_owned_by(user_id))
            .ok_or_else(|| DomainError::new(ErrorCode::ProfileNotFound, "Profile not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::profile::ProfileDraft;
    use crate::domain::subscription::{PlanType, Subscription, FREE_DAILY_LIMIT, UNLIMITED};
    use crate::domain::user::User;
    use crate::ports::UserRepository;

    struct Fixture {
        store: InMemoryStore,
        ai: MockAIProvider,
        user_id: UserId,
        handler: GenerateSuggestionsHandler,
    }

    async fn fixture(ai: MockAIProvider) -> Fixture {
        let store = InMemoryStore::new();
        let now = Timestamp::now();
        let user = User::new_anonymous(now);
        store
            .create_with_subscription(&user, &Subscription::new_free(user.id, now))
            .await
            .unwrap();
        let handler = GenerateSuggestionsHandler::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(ai.clone()),
            GenerationSettings::default(),
        );
        Fixture {
            store,
            ai,
            user_id: user.id,
            handler,
        }
    }

    fn command(user_id: UserId) -> GenerateSuggestionsCommand {
        GenerateSuggestionsCommand {
            user_id,
            conversation: Conversation::from_text("상대: 이번 주말에 뭐해?").unwrap(),
            context: SuggestionContext::default(),
            profile_id: None,
        }
    }

    async fn used_today(store: &InMemoryStore, user_id: &UserId) -> i32 {
        SubscriptionRepository::find_by_user_id(store, user_id)
            .await
            .unwrap()
            .unwrap()
            .daily_usage_count
    }

    #[tokio::test]
    async fn generates_parses_and_records_history() {
        let f = fixture(MockAIProvider::new().with_response("영화 볼래?\n\n카페 갈래?\n산책할래?\n")).await;

        let result = f
            .handler
            .handle(GenerateSuggestionsCommand {
                context: SuggestionContext {
                    num_suggestions: 2,
                    ..SuggestionContext::default()
                },
                ..command(f.user_id)
            })
            .await
            .unwrap();

        assert_eq!(result.suggestions, vec!["영화 볼래?", "카페 갈래?"]);
        assert_eq!(result.usage.remaining, FREE_DAILY_LIMIT - 1);
        let history = f.store.list_recent(&f.user_id, 10).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].suggestions, result.suggestions);
        assert_eq!(history[0].conversation, "상대: 이번 주말에 뭐해?");
    }

    #[tokio::test]
    async fn free_user_runs_on_standard_tier_with_configured_sampling() {
        let f = fixture(MockAIProvider::new()).await;

        f.handler.handle(command(f.user_id)).await.unwrap();

        let call = &f.ai.get_calls()[0];
        assert_eq!(call.model_tier, ModelTier::Standard);
        assert_eq!(call.temperature, Some(0.8));
        assert_eq!(call.max_tokens, Some(512));
        assert!(call.system_prompt.is_some());
    }

    #[tokio::test]
    async fn premium_user_runs_on_premium_tier() {
        let f = fixture(MockAIProvider::new()).await;
        let mut sub = SubscriptionRepository::find_by_user_id(&f.store, &f.user_id)
            .await
            .unwrap()
            .unwrap();
        sub.activate(PlanType::Weekly, Timestamp::now());
        f.store.update_plan(&sub).await.unwrap();

        let result = f.handler.handle(command(f.user_id)).await.unwrap();

        assert_eq!(result.usage.remaining, UNLIMITED);
        assert_eq!(f.ai.get_calls()[0].model_tier, ModelTier::Premium);
    }

    #[tokio::test]
    async fn quota_exhaustion_skips_the_model() {
        let f = fixture(MockAIProvider::new()).await;
        for _ in 0..FREE_DAILY_LIMIT {
            f.handler.handle(command(f.user_id)).await.unwrap();
        }

        let err = f.handler.handle(command(f.user_id)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::QuotaExceeded);
        assert_eq!(f.ai.call_count(), FREE_DAILY_LIMIT as usize);
        assert_eq!(used_today(&f.store, &f.user_id).await, FREE_DAILY_LIMIT);
    }

    #[tokio::test]
    async fn model_failure_keeps_the_consumed_unit() {
        let f = fixture(MockAIProvider::new().with_error(MockError::Unavailable {
            message: "overloaded".to_string(),
        }))
        .await;

        let err = f.handler.handle(command(f.user_id)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::AIProviderError);
        assert_eq!(used_today(&f.store, &f.user_id).await, 1);
        assert_eq!(f.store.history_count().await, 0);
    }

    #[tokio::test]
    async fn blank_model_output_is_an_upstream_error() {
        let f = fixture(MockAIProvider::new().with_response("  \n \n")).await;

        let err = f.handler.handle(command(f.user_id)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::AIProviderError);
    }

    #[tokio::test]
    async fn profile_of_another_user_is_not_found_and_costs_nothing() {
        let f = fixture(MockAIProvider::new()).await;
        let now = Timestamp::now();
        let other = User::new_anonymous(now);
        f.store
            .create_with_subscription(&other, &Subscription::new_free(other.id, now))
            .await
            .unwrap();
        let foreign = Profile::create(
            other.id,
            ProfileDraft {
                name: "Someone".to_string(),
                ..ProfileDraft::default()
            },
            now,
        )
        .unwrap();
        ProfileRepository::save(&f.store, &foreign).await.unwrap();

        let err = f
            .handler
            .handle(GenerateSuggestionsCommand {
                profile_id: Some(foreign.id),
                ..command(f.user_id)
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ProfileNotFound);
        assert_eq!(used_today(&f.store, &f.user_id).await, 0);
        assert_eq!(f.ai.call_count(), 0);
    }

    #[tokio::test]
    async fn owned_profile_is_included_in_the_prompt() {
        let f = fixture(MockAIProvider::new()).await;
        let profile = Profile::create(
            f.user_id,
            ProfileDraft {
                name: "Haeun".to_string(),
                memo: Some("loves jazz".to_string()),
                ..ProfileDraft::default()
            },
            Timestamp::now(),
        )
        .unwrap();
        ProfileRepository::save(&f.store, &profile).await.unwrap();

        f.handler
            .handle(GenerateSuggestionsCommand {
                profile_id: Some(profile.id),
                ..command(f.user_id)
            })
            .await
            .unwrap();

        let prompt = &f.ai.get_calls()[0].messages[0].content;
        assert!(prompt.contains("Haeun"));
        assert!(prompt.contains("loves jazz"));
    }

    #[tokio::test]
    async fn unknown_user_has_no_subscription() {
        let f = fixture(MockAIProvider::new()).await;

        let err = f.handler.handle(command(UserId::new())).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::SubscriptionNotFound);
    }
}
