//! The ordered reply rule table.
//!
//! Rules are evaluated top-to-bottom against the lower-cased message and the
//! first match wins. Each rule fixes its own emotion, except the final
//! fallback which defers to [`classify_emotion`](crate::emotion::classify_emotion).
//!
//! Note the "help" rule answers `calm` even though the classifier treats
//! "help" as `serious`. The two lists are independent and that discrepancy
//! is reproduced as-is.

use std::borrow::Cow;
use std::sync::LazyLock;

use jarvis_types::emotion::Emotion;
use regex::Regex;

use crate::emotion::contains_any;
use crate::replies;

/// When a rule fires.
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    /// Message starts with one of the prefixes.
    Prefix(&'static [&'static str]),
    /// Message contains one of the substrings.
    Contains(&'static [&'static str]),
    /// Always matches. Only valid as the last rule.
    Always,
}

impl Trigger {
    /// Test the trigger against an already lower-cased message.
    pub fn matches(&self, lower: &str) -> bool {
        match self {
            Trigger::Prefix(prefixes) => prefixes.iter().any(|p| lower.starts_with(p)),
            Trigger::Contains(needles) => contains_any(lower, needles),
            Trigger::Always => true,
        }
    }
}

/// How the reply text is produced.
#[derive(Debug, Clone, Copy)]
pub enum ReplyKind {
    Fixed(&'static str),
    /// Quote the local wall-clock time and date.
    CurrentTime,
    /// Echo the application named after "open"/"launch"/"start".
    LaunchApp,
    /// A random joke followed by [`replies::JOKE_SUFFIX`].
    Joke,
    /// A random filler template quoting the original message.
    Filler,
}

/// Where the emotion tag comes from.
#[derive(Debug, Clone, Copy)]
pub enum Tone {
    Fixed(Emotion),
    /// Run the keyword classifier on the original message.
    Classified,
}

/// A single entry of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub trigger: Trigger,
    pub reply: ReplyKind,
    pub tone: Tone,
}

pub static RULES: [Rule; 17] = [
    Rule {
        name: "greeting",
        trigger: Trigger::Prefix(&[
            "hi",
            "hello",
            "hey",
            "good morning",
            "good evening",
            "good afternoon",
        ]),
        reply: ReplyKind::Fixed(replies::GREETING),
        tone: Tone::Fixed(Emotion::Cheerful),
    },
    Rule {
        name: "how_are_you",
        trigger: Trigger::Contains(&["how are you"]),
        reply: ReplyKind::Fixed(replies::HOW_ARE_YOU),
        tone: Tone::Fixed(Emotion::Cheerful),
    },
    Rule {
        name: "time",
        trigger: Trigger::Contains(&["time", "date"]),
        reply: ReplyKind::CurrentTime,
        tone: Tone::Fixed(Emotion::Calm),
    },
    Rule {
        name: "weather",
        trigger: Trigger::Contains(&["weather"]),
        reply: ReplyKind::Fixed(replies::WEATHER),
        tone: Tone::Fixed(Emotion::Calm),
    },
    Rule {
        name: "email",
        trigger: Trigger::Contains(&["email", "mail"]),
        reply: ReplyKind::Fixed(replies::EMAIL),
        tone: Tone::Fixed(Emotion::Calm),
    },
    Rule {
        name: "calendar",
        trigger: Trigger::Contains(&["calendar", "schedule", "appointment"]),
        reply: ReplyKind::Fixed(replies::CALENDAR),
        tone: Tone::Fixed(Emotion::Cheerful),
    },
    Rule {
        name: "music",
        trigger: Trigger::Contains(&["music", "song", "play"]),
        reply: ReplyKind::Fixed(replies::MUSIC),
        tone: Tone::Fixed(Emotion::Cheerful),
    },
    Rule {
        name: "launch_app",
        trigger: Trigger::Contains(&["open", "launch", "start"]),
        reply: ReplyKind::LaunchApp,
        tone: Tone::Fixed(Emotion::Calm),
    },
    Rule {
        name: "file_search",
        trigger: Trigger::Contains(&["find file", "search file"]),
        reply: ReplyKind::Fixed(replies::FILE_SEARCH),
        tone: Tone::Fixed(Emotion::Calm),
    },
    Rule {
        name: "identity",
        trigger: Trigger::Contains(&["who are you", "what are you"]),
        reply: ReplyKind::Fixed(replies::IDENTITY),
        tone: Tone::Fixed(Emotion::Cheerful),
    },
    Rule {
        name: "capabilities",
        trigger: Trigger::Contains(&["what can you do", "capabilities", "features"]),
        reply: ReplyKind::Fixed(replies::CAPABILITIES),
        tone: Tone::Fixed(Emotion::Cheerful),
    },
    Rule {
        name: "help",
        trigger: Trigger::Contains(&["help"]),
        reply: ReplyKind::Fixed(replies::HELP),
        tone: Tone::Fixed(Emotion::Calm),
    },
    Rule {
        name: "thanks",
        trigger: Trigger::Contains(&["thank"]),
        reply: ReplyKind::Fixed(replies::THANKS),
        tone: Tone::Fixed(Emotion::Cheerful),
    },
    Rule {
        name: "farewell",
        trigger: Trigger::Prefix(&["bye", "goodbye", "see you", "good night"]),
        reply: ReplyKind::Fixed(replies::FAREWELL),
        tone: Tone::Fixed(Emotion::Cheerful),
    },
    Rule {
        name: "remember",
        trigger: Trigger::Contains(&["remember", "don't forget"]),
        reply: ReplyKind::Fixed(replies::REMEMBER),
        tone: Tone::Fixed(Emotion::Calm),
    },
    Rule {
        name: "joke",
        trigger: Trigger::Contains(&["joke", "funny"]),
        reply: ReplyKind::Joke,
        tone: Tone::Fixed(Emotion::Cheerful),
    },
    Rule {
        name: "fallback",
        trigger: Trigger::Always,
        reply: ReplyKind::Filler,
        tone: Tone::Classified,
    },
];

/// First rule whose trigger matches the lower-cased message.
pub fn match_rule(lower: &str) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| rule.trigger.matches(lower))
        .unwrap_or(&RULES[RULES.len() - 1])
}

const LAUNCH_VERBS: [&str; 3] = ["open", "launch", "start"];

static LAUNCH_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i).*?(open|launch|start)\s+").expect("launch prefix pattern is valid")
});

/// Remove the first "...verb " span from the message, keeping whatever
/// surrounds it.
///
/// When no verb is followed by whitespace the message is echoed whole,
/// unless it ends with a bare verb ("open", "please launch"), in which
/// case there is no app name at all.
pub fn extract_app(lower: &str) -> Cow<'_, str> {
    if LAUNCH_PREFIX.is_match(lower) {
        return LAUNCH_PREFIX.replace(lower, "");
    }
    if LAUNCH_VERBS.iter().any(|verb| lower.trim_end().ends_with(verb)) {
        return Cow::Borrowed("");
    }
    Cow::Borrowed(lower)
}
