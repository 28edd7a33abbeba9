use serde::{Deserialize, Serialize};

/// Contact details and the free-text summary. An empty string means "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub portfolio: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    /// Free-text label, e.g. "Jan 2020". Not parsed.
    pub start_date: String,
    pub end_date: String,
    /// When set the end date reads "Present". The stored `end_date` is kept as-is.
    pub current: bool,
    pub location: String,
    /// Bullet points. Editors always keep at least one element.
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

impl Experience {
    /// A freshly added entry: blank fields, one empty bullet, no technologies.
    pub fn blank(id: String) -> Self {
        Self {
            id,
            description: vec![String::new()],
            ..Default::default()
        }
    }

    /// "start - end", with "Present" standing in for the end date of a current role.
    pub fn date_range(&self) -> String {
        let end = if self.current {
            "Present"
        } else {
            self.end_date.as_str()
        };
        format!("{} - {}", self.start_date, end)
    }

    /// Restores the single empty bullet when `description` arrives empty.
    pub fn ensure_bullet(&mut self) {
        ensure_one(&mut self.description);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    pub highlights: Vec<String>,
}

impl Project {
    pub fn blank(id: String) -> Self {
        Self {
            id,
            highlights: vec![String::new()],
            ..Default::default()
        }
    }

    pub fn ensure_bullet(&mut self) {
        ensure_one(&mut self.highlights);
    }

    pub fn github_url(&self) -> Option<&str> {
        non_empty(self.github.as_deref())
    }

    pub fn demo_url(&self) -> Option<&str> {
        non_empty(self.demo.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub graduation_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    pub location: String,
}

impl Education {
    pub fn blank(id: String) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn gpa_label(&self) -> Option<&str> {
        non_empty(self.gpa.as_deref())
    }
}

/// A skill category. Older saved data has no `id`; see [`Resume::assign_missing_skill_ids`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(default)]
    pub id: String,
    pub category: String,
    pub items: Vec<String>,
}

impl Skill {
    pub fn new(id: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            items: Vec::new(),
        }
    }
}

/// Aggregate root. List order is user-controlled and preserved everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl Default for Resume {
    /// The resume a new user starts from: three empty skill categories, nothing else.
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            experiences: Vec::new(),
            projects: Vec::new(),
            education: Vec::new(),
            skills: vec![
                Skill::new("default-languages", "Programming Languages"),
                Skill::new("default-frameworks", "Frameworks & Libraries"),
                Skill::new("default-tools", "Tools & Technologies"),
            ],
        }
    }
}

impl Resume {
    /// Gives every skill without an identifier a freshly minted one.
    /// Returns true if anything changed.
    pub fn assign_missing_skill_ids(&mut self, mut mint: impl FnMut() -> String) -> bool {
        let mut changed = false;
        for skill in self.skills.iter_mut().filter(|s| s.id.is_empty()) {
            skill.id = mint();
            changed = true;
        }
        changed
    }

    /// Applies [`Experience::ensure_bullet`] and [`Project::ensure_bullet`] to every entry.
    pub fn ensure_bullets(&mut self) {
        self.experiences.iter_mut().for_each(Experience::ensure_bullet);
        self.projects.iter_mut().for_each(Project::ensure_bullet);
    }
}

fn ensure_one(bullets: &mut Vec<String>) {
    if bullets.is_empty() {
        bullets.push(String::new());
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
