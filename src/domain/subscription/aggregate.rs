//! Subscription aggregate.
//!
//! Every user owns exactly one Subscription, created together with the
//! user. It carries both the paid-plan state and the free-tier daily
//! counter, and is the only place where the quota and expiry rules live.
//!
//! # Design Decisions
//!
//! - **UTC days**: `last_reset_date` and the caller-supplied `today` are UTC
//!   calendar dates.
//! - **Permanent grants**: `is_premium` with no `expires_at` never lapses.
//! - **Informational premium counter**: premium use still increments the
//!   counter but is never limited by it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

use super::{PlanType, SubscriptionError, UsageSummary, FREE_DAILY_LIMIT};

/// Per-user plan and quota state.
///
/// # Invariants
///
/// - `plan_type` is `Some` only while `is_premium` is true
/// - `daily_usage_count >= 0`
/// - Through `consume`, a free-tier counter never passes `FREE_DAILY_LIMIT`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Owning user; unique.
    pub user_id: UserId,

    /// True while a paid term holds.
    pub is_premium: bool,

    /// Active plan, absent for the free tier.
    pub plan_type: Option<PlanType>,

    /// End of the paid term. Absent while premium means a permanent grant.
    pub expires_at: Option<Timestamp>,

    /// Units consumed on `last_reset_date`.
    pub daily_usage_count: i32,

    /// UTC date the counter was last zeroed.
    pub last_reset_date: NaiveDate,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Subscription {
    /// Default free-tier subscription for a freshly issued user.
    pub fn new_free(user_id: UserId, now: Timestamp) -> Self {
        Self {
            user_id,
            is_premium: false,
            plan_type: None,
            expires_at: None,
            daily_usage_count: 0,
            last_reset_date: now.utc_date(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether a premium term has run out at `now`.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        match (self.is_premium, self.expires_at) {
            (true, Some(expires_at)) => !now.is_before(&expires_at),
            _ => false,
        }
    }

    /// Downgrades an expired premium subscription to the free tier.
    ///
    /// Returns `true` when the subscription lapsed and must be persisted.
    pub fn lapse_if_expired(&mut self, now: Timestamp) -> bool {
        if !self.is_expired_at(now) {
            return false;
        }
        self.is_premium = false;
        self.plan_type = None;
        self.expires_at = None;
        self.updated_at = now;
        true
    }

    /// Zeroes the counter when `today` differs from the last reset date.
    ///
    /// Returns `true` when a reset happened.
    pub fn reset_if_new_day(&mut self, today: NaiveDate) -> bool {
        if self.last_reset_date == today {
            return false;
        }
        self.daily_usage_count = 0;
        self.last_reset_date = today;
        true
    }

    /// Units consumed today, treating a stale counter as zero.
    pub fn used_on(&self, today: NaiveDate) -> i32 {
        if self.last_reset_date == today {
            self.daily_usage_count
        } else {
            0
        }
    }

    /// Admits one unit of consumption and records it.
    ///
    /// Runs expiry first, then the daily reset. A rejected call still leaves
    /// any lapse or reset applied, so callers persist the record either way.
    ///
    /// # Errors
    ///
    /// `QuotaExceeded` when a free-tier user already used today's allowance.
    /// The counter is not incremented in that case.
    pub fn consume(
        &mut self,
        now: Timestamp,
        today: NaiveDate,
    ) -> Result<UsageSummary, SubscriptionError> {
        self.lapse_if_expired(now);
        self.reset_if_new_day(today);

        if !self.is_premium && self.daily_usage_count >= FREE_DAILY_LIMIT {
            return Err(SubscriptionError::quota_exceeded(FREE_DAILY_LIMIT));
        }

        self.daily_usage_count += 1;
        self.updated_at = now;

        Ok(self.summary_after_admission())
    }

    /// Quota snapshot for `today` without consuming anything.
    ///
    /// Callers are expected to have applied `lapse_if_expired` already.
    pub fn usage_on(&self, today: NaiveDate) -> UsageSummary {
        if self.is_premium {
            UsageSummary::unlimited()
        } else {
            UsageSummary::free(self.used_on(today))
        }
    }

    /// Grants premium for one term of `plan`, starting at `now`.
    ///
    /// Re-activation restarts the term from `now`; terms never stack.
    pub fn activate(&mut self, plan: PlanType, now: Timestamp) {
        self.is_premium = true;
        self.plan_type = Some(plan);
        self.expires_at = Some(now.add_days(plan.term_days()));
        self.updated_at = now;
    }

    fn summary_after_admission(&self) -> UsageSummary {
        if self.is_premium {
            UsageSummary::unlimited()
        } else {
            UsageSummary::free(self.daily_usage_count)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use proptest::prelude::*;

    fn test_user_id() -> UserId {
        "550e8400-e29b-41d4-a716-446655440000".parse().unwrap()
    }

    fn at(rfc3339: &str) -> Timestamp {
        Timestamp::from_datetime(
            DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&Utc),
        )
    }

    fn noon() -> Timestamp {
        at("2024-03-10T12:00:00Z")
    }

    fn free_subscription() -> Subscription {
        Subscription::new_free(test_user_id(), noon())
    }

    fn premium_until(expires_at: Option<Timestamp>) -> Subscription {
        let mut sub = free_subscription();
        sub.is_premium = true;
        sub.plan_type = Some(PlanType::Weekly);
        sub.expires_at = expires_at;
        sub
    }

    // ============================================================
    // Creation
    // ============================================================

    #[test]
    fn new_free_starts_without_plan_and_zero_usage() {
        let sub = free_subscription();
        assert!(!sub.is_premium);
        assert_eq!(sub.plan_type, None);
        assert_eq!(sub.expires_at, None);
        assert_eq!(sub.daily_usage_count, 0);
        assert_eq!(sub.last_reset_date, noon().utc_date());
    }

    // ============================================================
    // Expiry
    // ============================================================

    #[test]
    fn free_subscription_never_lapses() {
        let mut sub = free_subscription();
        let before = sub.clone();
        assert!(!sub.lapse_if_expired(noon().add_days(400)));
        assert_eq!(sub, before);
    }

    #[test]
    fn premium_without_expiry_is_permanent() {
        let mut sub = premium_until(None);
        let before = sub.clone();
        assert!(!sub.lapse_if_expired(noon().add_days(10_000)));
        assert_eq!(sub, before);
    }

    #[test]
    fn premium_lapses_exactly_at_expiry() {
        let mut sub = premium_until(Some(noon()));
        assert!(sub.lapse_if_expired(noon()));
        assert!(!sub.is_premium);
        assert_eq!(sub.plan_type, None);
        assert_eq!(sub.expires_at, None);
    }

    #[test]
    fn premium_stays_active_one_second_before_expiry() {
        let mut sub = premium_until(Some(noon()));
        assert!(!sub.lapse_if_expired(noon().minus_secs(1)));
        assert!(sub.is_premium);
    }

    #[test]
    fn lapse_keeps_usage_counter() {
        let mut sub = premium_until(Some(noon()));
        sub.daily_usage_count = 3;
        sub.lapse_if_expired(noon());
        assert_eq!(sub.daily_usage_count, 3);
    }

    // ============================================================
    // Usage gate
    // ============================================================

    #[test]
    fn free_tier_admits_five_per_day_then_rejects() {
        let mut sub = free_subscription();
        let today = noon().utc_date();

        for expected_remaining in (0..5).rev() {
            let summary = sub.consume(noon(), today).unwrap();
            assert_eq!(summary.remaining, expected_remaining);
            assert_eq!(summary.limit, 5);
            assert!(!summary.is_premium);
        }

        let err = sub.consume(noon(), today).unwrap_err();
        assert_eq!(err, SubscriptionError::quota_exceeded(5));
        assert_eq!(sub.daily_usage_count, 5);
    }

    #[test]
    fn new_day_resets_exhausted_counter() {
        let mut sub = free_subscription();
        sub.daily_usage_count = 5;
        let tomorrow = noon().add_days(1);

        let summary = sub.consume(tomorrow, tomorrow.utc_date()).unwrap();

        assert_eq!(summary.remaining, 4);
        assert_eq!(sub.daily_usage_count, 1);
        assert_eq!(sub.last_reset_date, tomorrow.utc_date());
    }

    #[test]
    fn premium_is_admitted_past_the_free_limit() {
        let mut sub = premium_until(Some(noon().add_days(7)));
        sub.daily_usage_count = 42;

        let summary = sub.consume(noon(), noon().utc_date()).unwrap();

        assert_eq!(summary, UsageSummary::unlimited());
        assert_eq!(sub.daily_usage_count, 43);
    }

    #[test]
    fn expired_premium_is_gated_as_free_tier() {
        let mut sub = premium_until(Some(noon().minus_secs(1)));
        sub.daily_usage_count = 5;

        let err = sub.consume(noon(), noon().utc_date()).unwrap_err();

        assert!(matches!(err, SubscriptionError::QuotaExceeded { limit: 5 }));
        assert!(!sub.is_premium, "lapse must be applied even on rejection");
    }

    #[test]
    fn expired_premium_from_yesterday_gets_fresh_free_quota() {
        let yesterday = noon().minus_days(1);
        let mut sub = premium_until(Some(yesterday));
        sub.last_reset_date = yesterday.utc_date();
        sub.daily_usage_count = 30;

        let summary = sub.consume(noon(), noon().utc_date()).unwrap();

        assert_eq!(summary, UsageSummary::free(1));
    }

    #[test]
    fn usage_on_treats_stale_counter_as_zero() {
        let mut sub = free_subscription();
        sub.daily_usage_count = 4;
        assert_eq!(sub.usage_on(noon().utc_date()).remaining, 1);
        assert_eq!(sub.usage_on(noon().add_days(1).utc_date()).remaining, 5);
    }

    #[test]
    fn usage_on_reports_unlimited_for_premium() {
        let sub = premium_until(None);
        assert_eq!(sub.usage_on(noon().utc_date()), UsageSummary::unlimited());
    }

    // ============================================================
    // Activation
    // ============================================================

    #[test]
    fn weekly_activation_sets_seven_day_term() {
        let mut sub = free_subscription();
        sub.activate(PlanType::Weekly, noon());

        assert!(sub.is_premium);
        assert_eq!(sub.plan_type, Some(PlanType::Weekly));
        assert_eq!(sub.expires_at, Some(noon().add_days(7)));
    }

    #[test]
    fn monthly_activation_sets_thirty_day_term() {
        let mut sub = free_subscription();
        sub.activate(PlanType::Monthly, noon());
        assert_eq!(sub.expires_at, Some(noon().add_days(30)));
    }

    #[test]
    fn reactivation_restarts_term_instead_of_stacking() {
        let mut sub = free_subscription();
        sub.activate(PlanType::Monthly, noon());
        let later = noon().add_days(3);
        sub.activate(PlanType::Monthly, later);

        assert_eq!(sub.expires_at, Some(later.add_days(30)));
    }

    #[test]
    fn activation_does_not_touch_counter() {
        let mut sub = free_subscription();
        sub.daily_usage_count = 5;
        sub.activate(PlanType::Weekly, noon());
        assert_eq!(sub.daily_usage_count, 5);
    }

    // ============================================================
    // Properties
    // ============================================================

    proptest! {
        #![proptest_config(ProptestConfig { failure_persistence: None, ..ProptestConfig::default() })]

        #[test]
        fn free_counter_never_exceeds_limit(calls in 0usize..40, start in 0i32..=5) {
            let mut sub = free_subscription();
            sub.daily_usage_count = start;
            let today = noon().utc_date();

            let mut admitted = 0;
            for _ in 0..calls {
                if sub.consume(noon(), today).is_ok() {
                    admitted += 1;
                }
            }

            prop_assert!(sub.daily_usage_count <= FREE_DAILY_LIMIT);
            prop_assert_eq!(admitted, calls.min((FREE_DAILY_LIMIT - start) as usize));
        }

        #[test]
        fn past_expiry_always_lapses_fully(secs_past in 0i64..10_000_000) {
            let mut sub = premium_until(Some(noon()));
            let now = Timestamp::from_datetime(*noon().as_datetime() + chrono::Duration::seconds(secs_past));

            sub.lapse_if_expired(now);

            prop_assert!(!sub.is_premium);
            prop_assert_eq!(sub.plan_type, None);
            prop_assert_eq!(sub.expires_at, None);
        }

        #[test]
        fn premium_summary_is_always_unlimited(count in 0i32..1000) {
            let mut sub = premium_until(None);
            sub.daily_usage_count = count;

            let summary = sub.consume(noon(), noon().utc_date()).unwrap();

            prop_assert_eq!(summary.remaining, -1);
            prop_assert_eq!(summary.limit, -1);
        }
    }
}
