//! # Chat Widget
//!
//! The landing page's support chat. Replies come from a fixed keyword table;
//! there is no live agent behind it.

/// Reply used when no rule matches.
pub const FALLBACK_REPLY: &str =
    "Thanks for reaching out! A member of our team will get back to you shortly. \
     You can also use the contact form below.";

/// Greeting shown when the chat opens.
pub const GREETING: &str = "Hi! I'm the Forex King assistant. How can I help you today?";

// Most specific topics first: a message naming both "account" and
// "password" is a sign-in question, and "upload a csv file" is an upload
// question, not a reports one. Greetings come last so "hi, ..." still
// reaches the topic.
const DEFAULT_RULES: &[(&[&str], &str)] = &[
    (
        &["password", "login", "log in", "sign in", "locked out"],
        "Use the Sign In page with the email you registered. If you're locked out, contact support.",
    ),
    (
        &["sign up", "signup", "register", "account", "accounts"],
        "You can create an account from the Register page. Sign in afterwards to reach your dashboard.",
    ),
    (
        &["upload", "file", "files", "pdf"],
        "Daily deal files (PDF, Excel or CSV) can be uploaded from the Reports view.",
    ),
    (
        &["report", "reports", "export", "download", "csv", "excel"],
        "Reports live in your dashboard. Each one can be downloaded as CSV from the Reports view.",
    ),
    (
        &["deal", "deals", "profit", "performance"],
        "The Deal Performance page lists every deal with its amount and profit, plus running totals.",
    ),
    (
        &["agreement", "contract", "sign the"],
        "The customer agreement can be completed and signed online from your dashboard.",
    ),
    (
        &["contact", "email", "phone", "support"],
        "Send us a message through the contact form and we'll reply by email.",
    ),
    (
        &["hello", "hi", "hey"],
        "Hello! Ask me about our trading plans, deals, reports or your account.",
    ),
];

/// Ordered keyword rules; the first rule with a matching keyword answers.
///
/// Keywords match whole words (or whole word sequences) case-insensitively,
/// so `hey` does not fire on "they".
#[derive(Debug, Clone)]
pub struct AutoResponder {
    rules: Vec<(Vec<String>, String)>,
    fallback: String,
}

impl Default for AutoResponder {
    fn default() -> Self {
        let rules = DEFAULT_RULES
            .iter()
            .map(|(keywords, reply)| {
                (
                    keywords.iter().map(|k| k.to_string()).collect(),
                    reply.to_string(),
                )
            })
            .collect();

        Self {
            rules,
            fallback: FALLBACK_REPLY.to_string(),
        }
    }
}

impl AutoResponder {
    /// An empty rule table that always answers with `fallback`.
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            rules: Vec::new(),
            fallback: fallback.into(),
        }
    }

    /// Append a rule. Keywords are matched case-insensitively on word boundaries.
    pub fn rule(mut self, keywords: &[&str], reply: impl Into<String>) -> Self {
        self.rules.push((
            keywords.iter().map(|k| k.to_string()).collect(),
            reply.into(),
        ));
        self
    }

    pub fn reply(&self, message: &str) -> &str {
        let haystack = word_padded(message);
        self.rules
            .iter()
            .find(|(keywords, _)| {
                keywords
                    .iter()
                    .any(|k| haystack.contains(word_padded(k).as_str()))
            })
            .map(|(_, reply)| reply.as_str())
            .unwrap_or(&self.fallback)
    }
}

/// Lowercase words separated by single spaces, with a space at each end.
fn word_padded(text: &str) -> String {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    format!(" {} ", words.join(" "))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

/// Chat transcript.
#[derive(Debug, Clone)]
pub struct ChatWidget {
    responder: AutoResponder,
    messages: Vec<ChatMessage>,
    open: bool,
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new(AutoResponder::default())
    }
}

impl ChatWidget {
    pub fn new(responder: AutoResponder) -> Self {
        Self {
            responder,
            messages: Vec::new(),
            open: false,
        }
    }

    /// Open the chat; the greeting is added the first time only.
    pub fn open(&mut self) {
        self.open = true;
        if self.messages.is_empty() {
            self.messages.push(ChatMessage {
                sender: Sender::Bot,
                text: GREETING.to_string(),
            });
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Post a user message and the bot's answer. Blank input is ignored.
    pub fn send(&mut self, text: &str) -> Option<&str> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let reply = self.responder.reply(text).to_string();
        self.messages.push(ChatMessage {
            sender: Sender::User,
            text: text.to_string(),
        });
        self.messages.push(ChatMessage {
            sender: Sender::Bot,
            text: reply,
        });

        self.messages.last().map(|m| m.text.as_str())
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}
