//! Episode form parsing - topics, hosts, and station style.
//!
//! The form mirrors the station's creation page: topics one per line,
//! hosts one per line in `Name|Persona` form, and a free-text style. The
//! raw text lands here and comes out as typed values ready for the
//! generation request.

use serde::Serialize;
use thiserror::Error;

/// Seed topics shown on first launch
pub const DEFAULT_TOPICS: &str = "AI ethics\nIndie film picks";
/// Seed hosts shown on first launch
pub const DEFAULT_HOSTS: &str = "Maya|sarcastic film geek\nRowan|calm tech nerd";
/// Seed station style shown on first launch
pub const DEFAULT_STYLE: &str = "chill night radio";

/// A show host with a persona the generator writes dialogue for
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Host {
    pub name: String,
    pub persona: String,
}

/// Validated form contents
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EpisodeDraft {
    pub topics: Vec<String>,
    pub hosts: Vec<Host>,
    pub style: String,
}

/// Why a form submission was refused
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("enter at least one topic")]
    NoTopics,
    #[error("enter at least one host")]
    NoHosts,
}

impl EpisodeDraft {
    /// Parse the three raw inputs into a draft, rejecting empty lists
    pub fn from_inputs(topics: &str, hosts: &str, style: &str) -> Result<Self, FormError> {
        let topics = parse_topics(topics);
        if topics.is_empty() {
            return Err(FormError::NoTopics);
        }
        let hosts = parse_hosts(hosts);
        if hosts.is_empty() {
            return Err(FormError::NoHosts);
        }
        Ok(Self {
            topics,
            hosts,
            style: style.trim().to_string(),
        })
    }
}

/// One topic per line, blank lines dropped
pub fn parse_topics(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// One host per line as `Name|Persona`.
///
/// A line without a `|` is a host with an empty persona; extra `|`
/// characters belong to the persona text.
pub fn parse_hosts(raw: &str) -> Vec<Host> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let mut parts = line.splitn(2, '|');
            let name = parts.next()?.trim();
            if name.is_empty() {
                return None;
            }
            let persona = parts.next().unwrap_or("").trim();
            Some(Host {
                name: name.to_string(),
                persona: persona.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_topics_skips_blank_lines() {
        let topics = parse_topics("AI ethics\n\n  \nIndie film picks\n");
        assert_eq!(topics, vec!["AI ethics", "Indie film picks"]);
    }

    #[test]
    fn test_parse_hosts_name_and_persona() {
        let hosts = parse_hosts(DEFAULT_HOSTS);

        assert_eq!(hosts.len(), 2);
        assert_eq!(hosts[0].name, "Maya");
        assert_eq!(hosts[0].persona, "sarcastic film geek");
        assert_eq!(hosts[1].name, "Rowan");
        assert_eq!(hosts[1].persona, "calm tech nerd");
    }

    #[test]
    fn test_parse_hosts_missing_persona() {
        let hosts = parse_hosts("Maya\nRowan|calm tech nerd");

        assert_eq!(hosts[0].persona, "");
        assert_eq!(hosts[1].persona, "calm tech nerd");
    }

    #[test]
    fn test_parse_hosts_persona_keeps_extra_pipes() {
        let hosts = parse_hosts("Maya|film geek | vinyl collector");

        assert_eq!(hosts.len(), 1);
        assert_eq!(hosts[0].persona, "film geek | vinyl collector");
    }

    #[test]
    fn test_parse_hosts_drops_nameless_lines() {
        let hosts = parse_hosts("|ghost persona\nMaya|film geek");

        assert_eq!(hosts.len(), 1);
        assert_eq!(hosts[0].name, "Maya");
    }

    #[test]
    fn test_draft_rejects_empty_inputs() {
        assert_eq!(
            EpisodeDraft::from_inputs("", DEFAULT_HOSTS, DEFAULT_STYLE),
            Err(FormError::NoTopics)
        );
        assert_eq!(
            EpisodeDraft::from_inputs(DEFAULT_TOPICS, "\n  \n", DEFAULT_STYLE),
            Err(FormError::NoHosts)
        );
    }

    #[test]
    fn test_draft_from_defaults() {
        let draft = EpisodeDraft::from_inputs(DEFAULT_TOPICS, DEFAULT_HOSTS, DEFAULT_STYLE).unwrap();

        assert_eq!(draft.topics.len(), 2);
        assert_eq!(draft.hosts.len(), 2);
        assert_eq!(draft.style, "chill night radio");
    }
}
