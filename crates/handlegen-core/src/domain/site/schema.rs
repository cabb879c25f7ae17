//! JSON-LD structured data for search engines.
//!
//! The landing page embeds a two-element array, `[WebSite, FAQPage]`, in a
//! `<script type="application/ld+json">` tag.

use serde::Serialize;

use crate::domain::{error::DomainError, site::SiteConfig};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Route the site search action points at.
pub const SEARCH_ROUTE: &str = "/username-generator";

/// A question shown in the FAQ section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [FaqEntry; 4] = [
    FaqEntry {
        question: "Is availability guaranteed?",
        answer: "The username generator shows quick availability hints to help you scan fast, \
                 but no tool can guarantee a handle or domain is free. Always check the \
                 platform, registrar, and trademarks directly before launching a brand or \
                 creator profile.",
    },
    FaqEntry {
        question: "Can I use these names commercially?",
        answer: "Generated usernames are creative suggestions. If you plan to use a handle for \
                 business, register domains, or publish on social platforms, perform trademark \
                 searches and check for similar brands to avoid conflicts.",
    },
    FaqEntry {
        question: "Do you store my inputs?",
        answer: "Inputs are processed in the username generator to create suggestions and are \
                 not stored long term. No sign-up is required, and you can refresh or clear \
                 your keyword and style at any time.",
    },
    FaqEntry {
        question: "How do I improve results?",
        answer: "Add a niche keyword plus a style, then regenerate until you see unique \
                 usernames you like. Try short length for TikTok and Instagram, medium for \
                 YouTube and Twitch, and keep brand words consistent across social profiles.",
    },
];

// ── WebSite ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebSite {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
    #[serde(rename = "potentialAction")]
    pub potential_action: SearchAction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchAction {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub target: String,
    #[serde(rename = "query-input")]
    pub query_input: &'static str,
}

impl WebSite {
    pub fn for_site(site: &SiteConfig) -> Self {
        Self {
            context: SCHEMA_CONTEXT,
            kind: "WebSite",
            name: site.name().to_string(),
            url: site.url().to_string(),
            potential_action: SearchAction {
                kind: "SearchAction",
                target: format!(
                    "{}?keyword={{search_term_string}}",
                    site.absolute_url(SEARCH_ROUTE)
                ),
                query_input: "required name=search_term_string",
            },
        }
    }
}

// ── FAQPage ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqPage {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "mainEntity")]
    pub main_entity: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(rename = "acceptedAnswer")]
    pub accepted_answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub text: String,
}

impl FaqPage {
    pub fn from_entries(entries: &[FaqEntry]) -> Self {
        Self {
            context: SCHEMA_CONTEXT,
            kind: "FAQPage",
            main_entity: entries
                .iter()
                .map(|entry| Question {
                    kind: "Question",
                    name: entry.question.to_string(),
                    accepted_answer: Answer {
                        kind: "Answer",
                        text: entry.answer.to_string(),
                    },
                })
                .collect(),
        }
    }
}

// ── Document ────────────────────────────────────────────────────────────────

/// The embedded JSON-LD document. Serialises as a JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredData(pub WebSite, pub FaqPage);

impl StructuredData {
    pub fn for_site(site: &SiteConfig) -> Self {
        Self(WebSite::for_site(site), FaqPage::from_entries(&FAQS))
    }

    pub fn to_json(&self) -> Result<String, DomainError> {
        serde_json::to_string(self).map_err(serialization_error)
    }

    pub fn to_json_pretty(&self) -> Result<String, DomainError> {
        serde_json::to_string_pretty(self).map_err(serialization_error)
    }

    /// `<script>` tag ready to embed in a page head.
    pub fn to_script_tag(&self) -> Result<String, DomainError> {
        // "</" would close the script element early.
        let json = self.to_json()?.replace("</", "<\\/");
        Ok(format!("<script type=\"application/ld+json\">{json}</script>"))
    }
}

fn serialization_error(e: serde_json::Error) -> DomainError {
    DomainError::SerializationFailed {
        document: "json-ld",
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn document() -> Value {
        let json = StructuredData::for_site(&SiteConfig::default())
            .to_json()
            .unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn serialises_as_two_element_array() {
        let doc = document();
        let items = doc.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["@type"], "WebSite");
        assert_eq!(items[1]["@type"], "FAQPage");
        assert!(items.iter().all(|i| i["@context"] == "https://schema.org"));
    }

    #[test]
    fn website_search_action_targets_generator_route() {
        let doc = document();
        let website = &doc[0];
        assert_eq!(website["name"], "Username Generator");
        assert_eq!(website["url"], "https://username-generator.app");
        assert_eq!(
            website["potentialAction"]["target"],
            "https://username-generator.app/username-generator?keyword={search_term_string}"
        );
        assert_eq!(
            website["potentialAction"]["query-input"],
            "required name=search_term_string"
        );
    }

    #[test]
    fn faq_page_lists_every_question() {
        let doc = document();
        let questions = doc[1]["mainEntity"].as_array().unwrap();
        assert_eq!(questions.len(), FAQS.len());
        assert_eq!(questions[0]["@type"], "Question");
        assert_eq!(questions[0]["name"], "Is availability guaranteed?");
        assert_eq!(questions[0]["acceptedAnswer"]["@type"], "Answer");
        assert!(
            questions[3]["acceptedAnswer"]["text"]
                .as_str()
                .unwrap()
                .contains("regenerate")
        );
    }

    #[test]
    fn script_tag_wraps_json() {
        let tag = StructuredData::for_site(&SiteConfig::default())
            .to_script_tag()
            .unwrap();
        assert!(tag.starts_with("<script type=\"application/ld+json\">["));
        assert!(tag.ends_with("]</script>"));
    }
}
