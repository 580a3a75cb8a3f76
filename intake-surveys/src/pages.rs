//! Fixed copy of the landing and completion views.

pub const LANDING_TITLE: &str = "Property & Services Insights Survey";

pub const LANDING_INTRO: &str = "Help us understand your needs in the real estate and home \
services market. Your insights will shape the future of property search and service discovery \
in Nigeria.";

pub const LANDING_PROMPT: &str = "Which best describes you?";

pub const LANDING_SUBTITLE: &str = "Choose your category to get a personalized survey experience";

pub const WHY_TITLE: &str = "Why Your Input Matters";

pub const WHY_BODY: &str = "We're building a comprehensive platform that connects property \
seekers with verified service providers. Your responses will help us create features that truly \
serve your needs in the Nigerian real estate market.";

/// Short facts shown under the landing explanation.
pub const WHY_FACTS: &[&str] = &["5-10 minutes", "Anonymous", "Secure"];

pub const COMPLETION_TITLE: &str = "Survey Complete!";

pub const COMPLETION_MESSAGE: &str = "Thank you for taking the time to share your valuable \
insights with us. Your feedback is crucial in helping us build a platform that truly serves the \
Nigerian real estate and home services market.";

pub const COMPLETION_USE: &str = "We'll use your responses to create features that address your \
specific needs and challenges, making property search and service discovery more efficient and \
reliable for everyone.";

pub const COMPLETION_NEXT: &str = "We'll analyze all survey responses and share key insights \
with our community. Stay tuned for updates on our platform development!";

pub const CONTACT_EMAIL: &str = "uceewebdev@gmail.com";
