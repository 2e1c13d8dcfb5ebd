//! Prompt construction for reply suggestions.

use std::fmt::Write;

use crate::domain::profile::Profile;

use super::{Conversation, SuggestionContext};

/// Persona and safety rules shared by every request.
pub fn build_system_prompt() -> String {
    "You are Syrano, an assistant that helps people write dating messages in Korean and English. \
     Write short, natural messenger-style replies of one or two sentences. \
     Always follow the requested speech level (banmal or honorific) and tone. \
     Reply in the same language as the conversation. \
     Never be pushy, aggressive, or sexually explicit; stay warm, friendly, and respectful."
        .to_string()
}

/// Request-specific prompt: tone settings, optional partner profile, and the transcript.
pub fn build_user_prompt(
    conversation: &Conversation,
    context: &SuggestionContext,
    profile: Option<&Profile>,
) -> String {
    let mut prompt = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(prompt, "[Platform]\n{}\n", context.platform);
    let _ = writeln!(prompt, "[Relationship]\n{}\n", context.relationship);
    let _ = writeln!(prompt, "[Speech level]\n{}\n", context.style);
    let _ = writeln!(prompt, "[Tone]\n{}\n", context.tone);

    if let Some(profile) = profile {
        let _ = writeln!(prompt, "[About the other person]");
        let _ = writeln!(prompt, "- Name: {}", profile.name);
        let _ = writeln!(
            prompt,
            "- Age: {}",
            profile
                .age
                .map(|age| age.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        );
        let _ = writeln!(prompt, "- Gender: {}", profile.gender.as_deref().unwrap_or("unknown"));
        let _ = writeln!(prompt, "- Notes: {}\n", profile.memo.as_deref().unwrap_or("none"));
    }

    let _ = writeln!(
        prompt,
        "[Conversation] (may come from OCR and contain typos)\n{}\n",
        conversation.as_str()
    );

    let _ = writeln!(
        prompt,
        "Suggest {} replies I could send next.",
        context.num_suggestions
    );
    prompt.push_str(
        "Rules:\n\
         - Detect the conversation language and answer in it.\n\
         - Match the other person's register (casual or formal) and the mood of the chat.\n\
         - Keep each reply to one or two short sentences.\n\
         - Where natural, end with a question or topic that keeps the conversation going.\n",
    );
    if profile.is_some() {
        prompt.push_str("- Weave in the other person's details only where it feels natural.\n");
    }
    prompt.push_str("- Put each reply on its own line, without numbering or bullets.\n");

    prompt
}
