//! Connector link discovery on the release notes index.
//!
//! Link texts on the index are inconsistent ("HTTP Connector Release Notes",
//! "Salesforce Connector", "sockets"), so a requested artifact id is expanded
//! into name variations and matched against every anchor with an ordered list
//! of rules. The first rule that hits anywhere on the page wins.

use super::document::Link;

/// Every spelling of a connector name tried against link texts.
pub fn name_variations(artifact_id: &str) -> Vec<String> {
    let lower = artifact_id.to_lowercase();
    vec![
        lower.clone(),
        format!("{lower} connector"),
        format!("{lower} connector release notes"),
        artifact_id.to_string(),
        format!("{artifact_id} Connector"),
        format!("{artifact_id} Connector Release Notes"),
        format!("{} Connector Release Notes", artifact_id.to_uppercase()),
        format!("{} Connector Release Notes", capitalize(artifact_id)),
    ]
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// One way a link text may match a name variation. Both sides are compared
/// lower-cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// Link text equals the variation.
    Exact,
    /// Link text equals the variation once a trailing " release notes" is
    /// removed.
    SuffixStripped,
}

impl MatchRule {
    /// Rules in precedence order.
    pub const RANKED: [Self; 2] = [Self::Exact, Self::SuffixStripped];

    pub fn matches(self, link_text: &str, variation: &str) -> bool {
        let text = link_text.trim().to_lowercase();
        let variation = variation.to_lowercase();
        match self {
            Self::Exact => text == variation,
            Self::SuffixStripped => text.replace(" release notes", "").trim() == variation,
        }
    }
}

/// A link chosen for the requested connector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorMatch {
    pub href: String,
    /// Link text with any " Release Notes" suffix removed.
    pub connector_name: String,
    pub rule: MatchRule,
}

/// Find the link for `variations`.
///
/// Rules are tried in rank order; within a rule, links are tried in document
/// order and, for each link, variations in list order.
pub fn find_connector_link(links: &[Link], variations: &[String]) -> Option<ConnectorMatch> {
    MatchRule::RANKED.iter().find_map(|&rule| {
        links.iter().find_map(|link| {
            variations
                .iter()
                .any(|v| rule.matches(&link.text, v))
                .then(|| ConnectorMatch {
                    href: link.href.clone(),
                    connector_name: link.text.replace(" Release Notes", ""),
                    rule,
                })
        })
    })
}

/// Turn an index link into an absolute connector page URL.
pub fn resolve_connector_url(href: &str, site_root: &str, connectors_url: &str) -> String {
    if let Some(rest) = href.strip_prefix("../../") {
        if href.contains("/release-notes/connector/") {
            format!("{site_root}/{rest}")
        } else {
            format!("{connectors_url}{rest}")
        }
    } else if let Some(rest) = href.strip_prefix("../") {
        format!("{connectors_url}introduction/{rest}")
    } else if href.starts_with('/') {
        format!("{site_root}{href}")
    } else if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{connectors_url}introduction/{href}")
    }
}

/// Maven artifact id published for a connector.
pub fn maven_artifact_id(artifact_id: &str) -> String {
    match artifact_id {
        "http" => "mule-http-connector".to_string(),
        "email" => "mule-email-connector".to_string(),
        "sockets" => "mule-sockets-connector".to_string(),
        other => format!("mule-{other}-connector"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = "https://docs.mulesoft.com";
    const CONNECTORS: &str = "https://docs.mulesoft.com/connectors/";

    fn link(text: &str, href: &str) -> Link {
        Link {
            text: text.to_string(),
            href: href.to_string(),
        }
    }

    #[test]
    fn test_name_variations() {
        let v = name_variations("http");
        assert_eq!(v.len(), 8);
        assert_eq!(v[0], "http");
        assert_eq!(v[2], "http connector release notes");
        assert_eq!(v[6], "HTTP Connector Release Notes");
        assert_eq!(v[7], "Http Connector Release Notes");
    }

    #[test]
    fn test_exact_match_beats_earlier_suffix_match() {
        let links = vec![
            link("Sockets Release Notes", "../../release-notes/connector/sockets-a.adoc"),
            link("Sockets Connector Release Notes", "sockets-b"),
        ];
        let found = find_connector_link(&links, &name_variations("sockets")).unwrap();
        assert_eq!(found.rule, MatchRule::Exact);
        assert_eq!(found.href, "sockets-b");
        assert_eq!(found.connector_name, "Sockets Connector");
    }

    #[test]
    fn test_suffix_stripped_match() {
        let links = vec![
            link("Salesforce Marketing Cloud", "x"),
            link("Email Release Notes", "../email-connector-release-notes"),
        ];
        let found = find_connector_link(&links, &name_variations("email")).unwrap();
        assert_eq!(found.rule, MatchRule::SuffixStripped);
        assert_eq!(found.connector_name, "Email");
    }

    #[test]
    fn test_no_substring_matches() {
        let links = vec![link("HTTP Connector Release Notes for Mule 3", "x")];
        assert!(find_connector_link(&links, &name_variations("http")).is_none());
    }

    #[test]
    fn test_resolve_connector_url() {
        assert_eq!(
            resolve_connector_url("../../release-notes/connector/http.adoc", SITE, CONNECTORS),
            "https://docs.mulesoft.com/release-notes/connector/http.adoc"
        );
        assert_eq!(
            resolve_connector_url("../../http/http-connector", SITE, CONNECTORS),
            "https://docs.mulesoft.com/connectors/http/http-connector"
        );
        assert_eq!(
            resolve_connector_url("../email-rn", SITE, CONNECTORS),
            "https://docs.mulesoft.com/connectors/introduction/email-rn"
        );
        assert_eq!(
            resolve_connector_url("/release-notes/x", SITE, CONNECTORS),
            "https://docs.mulesoft.com/release-notes/x"
        );
        assert_eq!(
            resolve_connector_url("https://other.example/x", SITE, CONNECTORS),
            "https://other.example/x"
        );
        assert_eq!(
            resolve_connector_url("sockets-rn", SITE, CONNECTORS),
            "https://docs.mulesoft.com/connectors/introduction/sockets-rn"
        );
    }

    #[test]
    fn test_maven_artifact_id() {
        assert_eq!(maven_artifact_id("http"), "mule-http-connector");
        assert_eq!(maven_artifact_id("salesforce"), "mule-salesforce-connector");
    }
}
