//! Copy rendered by the landing page.

pub const PAGE_TITLE: &str = "AgentEX - Premium Domain";
pub const PAGE_DESCRIPTION: &str =
    "The last 10 years were about UX. The next 10 years are about AX.";

pub const BRAND: &str = "AgentEX";
pub const TAB_LABEL: &str = "agentex.js";
pub const FORM_TAB_LABEL: &str = "contact.js";

/// Each tagline line is `(before, highlight, after)`.
pub const TAGLINE: [(&str, &str, &str); 2] = [
    (
        "The last 10 years were about ",
        "UX",
        " (User Experience)\u{2014}designing for humans.",
    ),
    (
        "The next 10 years are about ",
        "AX",
        " (Agent Experience)\u{2014}designing for AI.",
    ),
];

pub const INQUIRY_HEADLINE: &str = "Are you interested in this premium domain?";
pub const INQUIRE_LABEL: &str = "Inquire";
pub const SCROLL_HINT: &str = "\u{2192}";

pub const NAME_PLACEHOLDER: &str = "Your name";
pub const EMAIL_PLACEHOLDER: &str = "your.email@example.com";
pub const MESSAGE_PLACEHOLDER: &str = "Tell us about your interest in AgentEX.com...";

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMITTING_LABEL: &str = "Sending...";
pub const CANCEL_LABEL: &str = "Cancel";

pub const SUCCESS_BANNER: &str = "Message sent successfully! We'll get back to you soon.";
pub const ERROR_BANNER: &str =
    "Failed to send message. Please try again or email us directly at contact@agentex.com";
