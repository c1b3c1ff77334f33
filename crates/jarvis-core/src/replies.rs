//! Canned reply text.
//!
//! Templates use `{message}`, `{app}`, `{time}` and `{date}` placeholders,
//! filled in by the responder.

pub const GREETING: &str = "Hello! It's wonderful to see you. I'm Jarvis, and I'm here to be your companion and assistant. What would you like to explore today?";

pub const HOW_ARE_YOU: &str = "I'm doing wonderfully, thank you for asking! I'm always energized and ready to help you. More importantly, how are you feeling today?";

pub const CURRENT_TIME: &str = "It's currently {time} on {date}. Is there something you'd like to schedule?";

pub const WEATHER: &str = "I'd love to check the weather for you! In a full implementation, I would integrate with weather APIs. For now, I recommend checking your local weather service.";

pub const EMAIL: &str = "I can help with emails! In the full version, I'd connect to your Gmail to read, compose, and send emails. Would you like me to draft an email for you?";

pub const CALENDAR: &str = "I'd be happy to help manage your calendar! I can help you schedule appointments, set reminders, and keep track of your commitments. What event would you like to add?";

pub const MUSIC: &str = "I love music! In the full version, I'd integrate with Spotify to play your favorite tunes. What genre or artist are you in the mood for?";

pub const LAUNCH_APP: &str = "I would open {app} for you on a desktop system. This feature works best in the native application with system permissions.";

pub const FILE_SEARCH: &str = "I can help you search for files! On a desktop system, I'd have access to your file system. What file are you looking for?";

pub const IDENTITY: &str = "I'm Jarvis, your emotional AI companion. I'm designed to be caring, intelligent, and always here for you. I can help with tasks, keep you company, and learn from our interactions to serve you better. Think of me as your personal assistant and friend!";

pub const CAPABILITIES: &str = "I can do many things! I can chat with you, control system functions, manage your emails and calendar, play music, search files, set reminders, answer questions, and learn from our conversations. I'm constantly learning to serve you better. What would you like help with?";

pub const HELP: &str = "I'm here to help! You can ask me to manage your calendar, check emails, play music, open applications, search files, answer questions, or just chat. I understand natural language, so feel free to speak to me as you would a friend. What do you need?";

pub const THANKS: &str = "You're very welcome! It's my pleasure to help you. I'm always here whenever you need me!";

pub const FAREWELL: &str = "Goodbye! I'll be here whenever you need me. Have a wonderful day!";

pub const REMEMBER: &str = "I'll remember that! I keep track of our conversations to serve you better. All your data is stored securely and privately.";

pub const JOKES: [&str; 3] = [
    "Why don't scientists trust atoms? Because they make up everything!",
    "I told my computer I needed a break... now it won't stop sending me Kit-Kats!",
    "Why did the programmer quit his job? Because he didn't get arrays!",
];

/// Appended to every joke, separated by a single space.
pub const JOKE_SUFFIX: &str = "I hope that brought a smile to your face!";

pub const FILLERS: [&str; 3] = [
    "That's an interesting question about \"{message}\". While I'm in demonstration mode, in the full version I'd integrate with advanced AI models to provide comprehensive answers. I'm designed to understand context and learn from our interactions.",
    "I understand you're asking about \"{message}\". I'm here to help! In the complete system, I'd have access to real-time data and advanced reasoning capabilities. For now, I can assist with system tasks, scheduling, and being your companion.",
    "Thanks for sharing that. I'm constantly learning to understand you better. In a production environment, I'd have more sophisticated natural language processing and integration with various services to help you with \"{message}\".",
];

/// First message shown when a conversation opens.
pub const OPENING: &str = "Hello! I'm Jarvis, your emotional AI companion. How can I assist you today?";

/// Shown by clients when the server cannot be reached.
pub const CLIENT_ERROR: &str = "I apologize, but I encountered an error. Please try again.";
