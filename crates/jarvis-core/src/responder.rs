//! Responder service: message text in, reply and emotion out.
//!
//! Generic over the [`Clock`] and [`RandomSource`] ports so tests can pin
//! the time and the random picks. Each call is independent; the
//! conversation history is accepted for future use but not read.

use jarvis_types::chat::ChatReply;
use jarvis_types::emotion::Emotion;
use jarvis_types::message::Message;

use crate::clock::Clock;
use crate::emotion::classify_emotion;
use crate::random::{RandomSource, choose};
use crate::replies;
use crate::rules::{ReplyKind, Rule, Tone, extract_app, match_rule};

const TIME_FORMAT: &str = "%-I:%M:%S %p";
const DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Outcome of one turn, including which rule produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub rule: &'static str,
    pub reply: ChatReply,
}

/// Keyword responder.
pub struct Responder<C: Clock, R: RandomSource> {
    clock: C,
    random: R,
}

impl<C: Clock, R: RandomSource> Responder<C, R> {
    pub fn new(clock: C, random: R) -> Self {
        Self { clock, random }
    }

    /// Access the random source (shared with the thinking delay).
    pub fn random(&self) -> &R {
        &self.random
    }

    /// Produce the reply for a message.
    pub fn respond(&self, message: &str, history: &[Message]) -> ChatReply {
        self.evaluate(message, history).reply
    }

    /// Produce the reply for a message along with the name of the rule
    /// that fired.
    pub fn evaluate(&self, message: &str, _history: &[Message]) -> Evaluation {
        let lower = message.to_lowercase();
        let rule = match_rule(&lower);
        tracing::debug!(rule = rule.name, "Reply rule matched");

        Evaluation {
            rule: rule.name,
            reply: ChatReply::new(self.render(rule, message, &lower), self.tone(rule, message)),
        }
    }

    fn render(&self, rule: &Rule, message: &str, lower: &str) -> String {
        match rule.reply {
            ReplyKind::Fixed(text) => text.to_string(),
            ReplyKind::CurrentTime => {
                let now = self.clock.now();
                replies::CURRENT_TIME
                    .replace("{time}", &now.format(TIME_FORMAT).to_string())
                    .replace("{date}", &now.format(DATE_FORMAT).to_string())
            }
            ReplyKind::LaunchApp => replies::LAUNCH_APP.replace("{app}", &extract_app(lower)),
            ReplyKind::Joke => {
                let joke = choose(&self.random, &replies::JOKES);
                format!("{joke} {}", replies::JOKE_SUFFIX)
            }
            ReplyKind::Filler => choose(&self.random, &replies::FILLERS).replace("{message}", message),
        }
    }

    fn tone(&self, rule: &Rule, message: &str) -> Emotion {
        match rule.tone {
            Tone::Fixed(emotion) => emotion,
            Tone::Classified => classify_emotion(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;

    struct FixedClock(NaiveDateTime);

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    /// Returns the scripted values in order, then repeats the last one.
    struct ScriptedRandom(Mutex<Vec<u64>>);

    impl ScriptedRandom {
        fn new(values: &[u64]) -> Self {
            let mut values = values.to_vec();
            values.reverse();
            Self(Mutex::new(values))
        }
    }

    impl RandomSource for ScriptedRandom {
        fn below(&self, bound: u64) -> u64 {
            let mut values = self.0.lock().unwrap();
            let value = if values.len() > 1 { values.pop().unwrap() } else { values[0] };
            value % bound.max(1)
        }
    }

    fn responder(picks: &[u64]) -> Responder<FixedClock, ScriptedRandom> {
        let now = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 7)
            .unwrap();
        Responder::new(FixedClock(now), ScriptedRandom::new(picks))
    }

    fn fixed(message: &str) -> ChatReply {
        responder(&[0]).respond(message, &[])
    }

    #[test]
    fn test_greeting_ignores_case_and_trailing_text() {
        for message in ["hi", "Hello Jarvis", "HEY!!!", "Good Morning, how are you?", "good afternoon"] {
            let reply = fixed(message);
            assert_eq!(reply.response, replies::GREETING, "{message}");
            assert_eq!(reply.emotion, Emotion::Cheerful);
        }
    }

    #[test]
    fn test_how_are_you() {
        let reply = fixed("Jarvis, how are you?");
        assert_eq!(reply.response, replies::HOW_ARE_YOU);
        assert_eq!(reply.emotion, Emotion::Cheerful);
    }

    #[test]
    fn test_time_quotes_clock() {
        let reply = fixed("What time is it?");
        assert_eq!(
            reply.response,
            "It's currently 2:05:07 PM on 3/9/2024. Is there something you'd like to schedule?"
        );
        assert_eq!(reply.emotion, Emotion::Calm);
    }

    #[test]
    fn test_stub_replies() {
        let cases = [
            ("How's the weather?", replies::WEATHER, Emotion::Calm),
            ("any new email", replies::EMAIL, Emotion::Calm),
            ("check my calendar", replies::CALENDAR, Emotion::Cheerful),
            ("put on some music", replies::MUSIC, Emotion::Cheerful),
            ("search file notes.txt", replies::FILE_SEARCH, Emotion::Calm),
            ("What are you?", replies::IDENTITY, Emotion::Cheerful),
            ("What can you do?", replies::CAPABILITIES, Emotion::Cheerful),
            ("Good night", replies::FAREWELL, Emotion::Cheerful),
            ("See you later", replies::FAREWELL, Emotion::Cheerful),
            ("Don't forget my keys", replies::REMEMBER, Emotion::Calm),
        ];
        for (message, expected, emotion) in cases {
            let reply = fixed(message);
            assert_eq!(reply.response, expected, "{message}");
            assert_eq!(reply.emotion, emotion, "{message}");
        }
    }

    #[test]
    fn test_help_rule_is_calm_while_classifier_says_serious() {
        let reply = fixed("I need help");
        assert_eq!(reply.response, replies::HELP);
        assert_eq!(reply.emotion, Emotion::Calm);
        assert_eq!(classify_emotion("I need help"), Emotion::Serious);
    }

    #[test]
    fn test_thanks() {
        let reply = fixed("Thank you so much");
        assert_eq!(reply.response, replies::THANKS);
        assert_eq!(reply.emotion, Emotion::Cheerful);
    }

    #[test]
    fn test_open_spotify_echoes_lowercased_app() {
        let reply = fixed("open Spotify");
        assert_eq!(
            reply.response,
            "I would open spotify for you on a desktop system. This feature works best in the native application with system permissions."
        );
        assert_eq!(reply.emotion, Emotion::Calm);
    }

    #[test]
    fn test_launch_without_target() {
        let reply = fixed("Launch");
        assert!(reply.response.starts_with("I would open  for you"));
    }

    #[test]
    fn test_joke_uses_random_pick() {
        for (pick, joke) in replies::JOKES.iter().enumerate() {
            let reply = responder(&[pick as u64]).respond("tell me a joke", &[]);
            assert_eq!(reply.response, format!("{joke} {}", replies::JOKE_SUFFIX));
            assert_eq!(reply.emotion, Emotion::Cheerful);
        }
    }

    #[test]
    fn test_repeated_jokes_can_differ() {
        let responder = responder(&[0, 2]);
        let first = responder.respond("something funny", &[]);
        let second = responder.respond("something funny", &[]);
        assert_ne!(first, second);
    }

    #[test]
    fn test_fallback_quotes_original_message() {
        for pick in 0..3u64 {
            let reply = responder(&[pick]).respond("Xyzzy Plugh", &[]);
            assert_eq!(
                reply.response,
                replies::FILLERS[pick as usize].replace("{message}", "Xyzzy Plugh")
            );
            assert_eq!(reply.emotion, Emotion::Calm);
        }
    }

    #[test]
    fn test_fallback_uses_classifier() {
        assert_eq!(fixed("that is so wrong").emotion, Emotion::Serious);
        assert_eq!(fixed("awesome stuff").emotion, Emotion::Cheerful);
        assert_eq!(fixed("wow!").emotion, Emotion::Cheerful);
    }

    #[test]
    fn test_history_is_ignored() {
        let history = vec![
            Message::from_user("tell me a joke"),
            Message::from_agent("Why did...", Emotion::Cheerful),
        ];
        let with_history = responder(&[1]).respond("xyzzy", &history);
        let without = responder(&[1]).respond("xyzzy", &[]);
        assert_eq!(with_history, without);
    }

    #[test]
    fn test_evaluate_reports_rule_name() {
        let evaluation = responder(&[0]).evaluate("open Spotify", &[]);
        assert_eq!(evaluation.rule, "launch_app");
        let evaluation = responder(&[0]).evaluate("xyzzy plugh", &[]);
        assert_eq!(evaluation.rule, "fallback");
    }
}
