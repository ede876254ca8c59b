/// Text shown before the first tip is requested.
pub const GREETING: &str =
    "I'm the old watchmaker! Rest your pointer on a gear and I'll show you which layer it lives on.";

/// Text shown while a request is in flight.
pub const LOADING_TIP: &str = "Studying the blueprints...";

/// Text shown when a request fails for any reason.
pub const FALLBACK_TIP: &str =
    "The watchmaker's bench is a little busy right now. Try asking again in a moment!";

/// A canned question offered as a button in the tip panel.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TipTopic {
    /// Button caption.
    pub label: &'static str,
    /// Question sent to the tip source.
    pub prompt: &'static str,
}

/// Questions offered in the tip panel, top to bottom.
pub const PRESET_TOPICS: [TipTopic; 2] = [
    TipTopic {
        label: "How the rhythm keeper saves energy",
        prompt: "How does the rhythm keeper (the escapement) conserve energy?",
    },
    TipTopic {
        label: "Why the minute wheel sits in the middle",
        prompt: "Why is the minute wheel sandwiched in the middle layer?",
    },
];
