use std::collections::{BTreeMap, HashMap};

use crate::models::Resume;

/// Raw comma-separated text → tags: split on ',', trim, drop empties.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// What the user last typed into a tag field, keyed by entity id.
///
/// Parsing is lossy (`"Go, "` parses to `["Go"]`), so the raw text is kept
/// alongside the entity and shown back while it still parses to the stored tags.
#[derive(Debug, Clone, Default)]
pub struct InputDrafts {
    raw: HashMap<String, String>,
}

impl InputDrafts {
    pub fn set(&mut self, id: &str, raw: impl Into<String>) {
        self.raw.insert(id.to_string(), raw.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.raw.get(id).map(String::as_str)
    }

    pub fn discard(&mut self, id: &str) {
        self.raw.remove(id);
    }

    /// The draft if one exists, else the tags joined with ", ".
    pub fn display_value(&self, id: &str, tags: &[String]) -> String {
        match self.get(id) {
            Some(raw) => raw.to_string(),
            None => tags.join(", "),
        }
    }

    /// Tag field text for every experience, project and skill category in `resume`.
    pub fn display_values(&self, resume: &Resume) -> BTreeMap<String, String> {
        tag_fields(resume)
            .map(|(id, tags)| (id.to_string(), self.display_value(id, tags)))
            .collect()
    }

    /// Drops drafts whose entity is gone from `resume`, and drafts that no longer
    /// parse to the entity's tags because the tags were replaced wholesale.
    pub fn reconcile(&mut self, resume: &Resume) {
        let live: HashMap<&str, &[String]> = tag_fields(resume).collect();
        self.raw.retain(|id, raw| {
            live.get(id.as_str())
                .is_some_and(|tags| parse_tags(raw).as_slice() == *tags)
        });
    }
}

fn tag_fields(resume: &Resume) -> impl Iterator<Item = (&str, &[String])> {
    resume
        .experiences
        .iter()
        .map(|e| (e.id.as_str(), e.technologies.as_slice()))
        .chain(resume.projects.iter().map(|p| (p.id.as_str(), p.technologies.as_slice())))
        .chain(resume.skills.iter().map(|s| (s.id.as_str(), s.items.as_slice())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Experience;

    #[test]
    fn test_parse_tags_trims_and_drops_empties() {
        assert_eq!(parse_tags(" React,  Node.js ,,AWS, "), vec!["React", "Node.js", "AWS"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }

    #[test]
    fn test_display_value_prefers_draft() {
        let mut drafts = InputDrafts::default();
        let tags = vec!["Go".to_string(), "Rust".to_string()];
        assert_eq!(drafts.display_value("1", &tags), "Go, Rust");

        drafts.set("1", "Go, Rust, ");
        assert_eq!(drafts.display_value("1", &tags), "Go, Rust, ");

        drafts.discard("1");
        assert_eq!(drafts.display_value("1", &tags), "Go, Rust");
    }

    #[test]
    fn test_reconcile_drops_orphans() {
        let mut resume = Resume::default();
        resume.experiences.push(Experience::blank("x1".to_string()));

        let mut drafts = InputDrafts::default();
        drafts.set("x1", "Go");
        drafts.set("gone", "Rust");
        drafts.set("default-tools", "");
        drafts.reconcile(&resume);

        // x1 has no technologies yet, so its "Go" draft is stale too
        assert!(drafts.get("x1").is_none());
        assert_eq!(drafts.get("default-tools"), Some(""));
        assert!(drafts.get("gone").is_none());
    }

    #[test]
    fn test_reconcile_keeps_drafts_matching_tags() {
        let mut resume = Resume::default();
        resume.experiences.push(Experience {
            technologies: vec!["Go".to_string()],
            ..Experience::blank("x1".to_string())
        });

        let mut drafts = InputDrafts::default();
        drafts.set("x1", "Go, ");
        drafts.reconcile(&resume);
        assert_eq!(drafts.get("x1"), Some("Go, "));

        resume.experiences[0].technologies = vec!["Rust".to_string()];
        drafts.reconcile(&resume);
        assert!(drafts.get("x1").is_none());
    }

    #[test]
    fn test_display_values_cover_every_tag_field() {
        let mut resume = Resume::default();
        resume.skills[0].items = vec!["Rust".to_string(), "Go".to_string()];
        resume.projects.push(crate::models::Project::blank("p1".to_string()));

        let mut drafts = InputDrafts::default();
        drafts.set("p1", "Axum, ");
        let values = drafts.display_values(&resume);

        assert_eq!(values.len(), 4);
        assert_eq!(values["default-languages"], "Rust, Go");
        assert_eq!(values["default-tools"], "");
        assert_eq!(values["p1"], "Axum, ");
    }
}
