// UI constants
pub const BRAND_NAME: &str = "NyaySahayak";
pub const BRAND_TAGLINE: &str = "AI Legal Assistant (Demo)";
pub const INPUT_PLACEHOLDER: &str = "Type a question (bail, summons, verify...)";
pub const DEMO_DISCLAIMER: &str = "This is a UI demo. Real AI integration coming soon.";
pub const CONTACT_NOTICE: &str = "Demo form only. Nothing was sent.";

// Scripted chat constants
pub const GREETING: &str =
    "Hello! I am NyaySahayak (demo). Ask me about bail, summons, or verification.";
pub const DEFAULT_REPLY: &str =
    "This is a demo — the full AI assistant will explain documents, bail rules, and more.";
pub const BAIL_REPLY: &str =
    "Bail allows an accused person to be temporarily released while awaiting trial.";
pub const SUMMONS_REPLY: &str =
    "A summons is a legal document requiring someone to appear in court or respond to a case.";
pub const VERIFY_REPLY: &str =
    "Document verification checks for seals, signatures, and authenticity markers.";

pub const DEFAULT_REPLY_DELAY_MS: u64 = 700;
