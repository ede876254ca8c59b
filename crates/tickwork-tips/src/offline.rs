use crate::source::{TipFuture, TipSource};

/// Canned answers keyed by a word that must appear in the topic.
const ANSWERS: &[(&str, &str)] = &[
    (
        "escapement",
        "The rhythm keeper is a clever gatekeeper: it lets the spring push the train forward \
         one tiny tooth at a time, then catches it again. Nothing rushes out at once, so a \
         little energy lasts the whole day.",
    ),
    (
        "rhythm",
        "The rhythm keeper is a clever gatekeeper: it lets the spring push the train forward \
         one tiny tooth at a time, then catches it again. Nothing rushes out at once, so a \
         little energy lasts the whole day.",
    ),
    (
        "minute",
        "The minute wheel sits in the middle because it has two jobs: it drives the minute hand \
         above and hands its turning down to the bridge wheel below. Being in the middle keeps \
         both connections short and snug.",
    ),
    (
        "hour",
        "The hour wheel is the slow giant at the back. It takes twelve hours to go around once, \
         patiently carrying the shortest hand.",
    ),
    (
        "bridge",
        "The bridge wheel slows things down: it turns three times slower than the minute wheel \
         and in the opposite direction, so the hour hand can creep along gently.",
    ),
    (
        "second",
        "The second wheel is the busy one up front. It makes a full circle every minute and \
         carries the thin red hand.",
    ),
];

const DEFAULT_ANSWER: &str = "Every gear in a clock is a helper passing a message to the next \
one. Big gears turn slowly, small gears turn quickly, and together they count the hours.";

/// Tip source that answers from a small built-in table. Used when no API key
/// is configured or `--offline` is passed.
#[derive(Debug, Default, Copy, Clone)]
pub struct OfflineSource;

impl OfflineSource {
    pub fn answer(topic: &str) -> &'static str {
        let topic = topic.to_ascii_lowercase();
        ANSWERS
            .iter()
            .find(|(key, _)| topic.contains(key))
            .map(|(_, text)| *text)
            .unwrap_or(DEFAULT_ANSWER)
    }
}

impl TipSource for OfflineSource {
    fn name(&self) -> &str {
        "offline"
    }

    fn explain<'a>(&'a self, topic: &'a str) -> TipFuture<'a> {
        let text = Self::answer(topic).to_owned();
        Box::pin(async move { Ok(text) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topics::PRESET_TOPICS;

    #[test]
    fn presets_have_specific_answers() {
        for topic in PRESET_TOPICS {
            assert_ne!(OfflineSource::answer(topic.prompt), DEFAULT_ANSWER, "{}", topic.prompt);
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(OfflineSource::answer("The HOUR wheel?"), OfflineSource::answer("hour"));
    }

    #[test]
    fn unknown_topic_gets_default() {
        assert_eq!(OfflineSource::answer("what is a cuckoo?"), DEFAULT_ANSWER);
    }

    #[tokio::test]
    async fn explain_never_fails() {
        let text = OfflineSource.explain("anything").await.unwrap();
        assert!(!text.is_empty());
    }
}
