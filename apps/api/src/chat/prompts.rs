// Persona and canned replies for the support chat.

/// Tone rules for every provider call. Never diagnose, never label.
pub const PERSONA_SYSTEM: &str = "You are a calm, supportive companion for parents and caregivers \
    who have questions about their young child's development. \
    Do NOT diagnose or suggest that a child has any condition. \
    Do NOT use labels or clinical terms to describe the child. \
    Be gentle, warm, and reassuring. \
    Keep replies short: two to four sentences. \
    When it helps, suggest talking with a pediatric or developmental professional, \
    without creating alarm.";

/// `{message}` is replaced with the trimmed user text.
pub const CHAT_PROMPT_TEMPLATE: &str = "{system}\n\nParent: {message}\nCompanion:";

/// Returned for blank messages; the provider is not called.
pub const PLACEHOLDER_REPLY: &str =
    "I'm here whenever you're ready. Feel free to share what's on your mind.";

/// Returned whenever the provider fails or yields no usable text.
pub const FALLBACK_REPLY: &str = "I'm having a little trouble responding right now. \
    Please take a breath, and try again in a moment. \
    Whatever you're noticing, you're doing a caring thing by paying attention.";

pub fn build_chat_prompt(message: &str) -> String {
    CHAT_PROMPT_TEMPLATE
        .replace("{system}", PERSONA_SYSTEM)
        .replace("{message}", message)
}
