//! Profile aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProfileId, Timestamp, UserId, ValidationError};

pub const NAME_MAX_CHARS: usize = 100;
pub const GENDER_MAX_CHARS: usize = 10;
pub const AGE_MIN: i32 = 1;
pub const AGE_MAX: i32 = 150;

/// A conversation partner owned by one user.
///
/// # Invariants
///
/// - `name` is trimmed, non-empty, at most `NAME_MAX_CHARS` characters
/// - `age`, when present, lies in `AGE_MIN..=AGE_MAX`
/// - `gender`, when present, is at most `GENDER_MAX_CHARS` characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub user_id: UserId,
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub memo: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fields supplied when creating a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub memo: Option<String>,
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub memo: Option<String>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.gender.is_none() && self.memo.is_none()
    }
}

impl Profile {
    /// Validates a draft and creates a new profile for `user_id`.
    pub fn create(
        user_id: UserId,
        draft: ProfileDraft,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let name = validate_name(&draft.name)?;
        if let Some(age) = draft.age {
            validate_age(age)?;
        }
        let gender = draft.gender.map(validate_gender).transpose()?;

        Ok(Self {
            id: ProfileId::new(),
            user_id,
            name,
            age: draft.age,
            gender,
            memo: draft.memo,
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies a partial update. Nothing changes if any field is invalid.
    pub fn apply(&mut self, changes: ProfileChanges, now: Timestamp) -> Result<(), ValidationError> {
        let name = changes.name.as_deref().map(validate_name).transpose()?;
        if let Some(age) = changes.age {
            validate_age(age)?;
        }
        let gender = changes.gender.map(validate_gender).transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(age) = changes.age {
            self.age = Some(age);
        }
        if let Some(gender) = gender {
            self.gender = Some(gender);
        }
        if let Some(memo) = changes.memo {
            self.memo = Some(memo);
        }
        self.updated_at = now;
        Ok(())
    }

    /// Whether `user_id` owns this profile.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}

fn validate_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::empty_field("name"));
    }
    let len = name.chars().count();
    if len > NAME_MAX_CHARS {
        return Err(ValidationError::too_long("name", NAME_MAX_CHARS, len));
    }
    Ok(name.to_string())
}

fn validate_age(age: i32) -> Result<(), ValidationError> {
    if !(AGE_MIN..=AGE_MAX).contains(&age) {
        return Err(ValidationError::out_of_range("age", AGE_MIN, AGE_MAX, age));
    }
    Ok(())
}

fn validate_gender(raw: String) -> Result<String, ValidationError> {
    let len = raw.chars().count();
    if len > GENDER_MAX_CHARS {
        return Err(ValidationError::too_long("gender", GENDER_MAX_CHARS, len));
    }
    Ok(raw)
}
