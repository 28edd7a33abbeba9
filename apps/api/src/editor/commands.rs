use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::editor::entities::{self, find_mut};
use crate::editor::{move_item, EditError, InputDrafts, ListKind};
use crate::ids::mint_id;
use crate::models::{Education, Experience, PersonalInfo, Project, Resume};

const BULLET: &str = "bullet point";
const HIGHLIGHT: &str = "highlight";

/// One editor action, as sent by a client: `{"op": "add_experience"}`,
/// `{"op": "set_skill_items", "id": "...", "raw": "Rust, Go"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ResumeEdit {
    SetPersonalInfo { personal_info: PersonalInfo },

    AddExperience,
    UpdateExperience { experience: Experience },
    RemoveExperience { id: String },
    AddDescriptionPoint { id: String },
    UpdateDescriptionPoint { id: String, index: usize, value: String },
    RemoveDescriptionPoint { id: String, index: usize },
    SetExperienceTechnologies { id: String, raw: String },

    AddProject,
    UpdateProject { project: Project },
    RemoveProject { id: String },
    AddHighlight { id: String },
    UpdateHighlight { id: String, index: usize, value: String },
    RemoveHighlight { id: String, index: usize },
    SetProjectTechnologies { id: String, raw: String },

    AddEducation,
    UpdateEducation { education: Education },
    RemoveEducation { id: String },

    AddSkillCategory,
    RenameSkillCategory { id: String, category: String },
    SetSkillItems { id: String, raw: String },
    RemoveSkillCategory { id: String },

    Move { list: ListKind, from: usize, to: usize },
}

/// Result of a successful edit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditOutcome {
    pub resume: Resume,
    /// Id of the entity an `add_*` op created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_id: Option<String>,
    /// Text to show in the tag field the op touched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_value: Option<String>,
    /// Tag field text for every tagged entity, keyed by id.
    pub input_values: BTreeMap<String, String>,
}

impl EditOutcome {
    fn plain(resume: Resume) -> Self {
        Self {
            resume,
            created_id: None,
            input_value: None,

            input_values: BTreeMap::new(),
        }
    }

    fn created(resume: Resume, id: String, input_value: Option<String>) -> Self {
        Self {
            resume,
            created_id: Some(id),
            input_value,

            input_values: BTreeMap::new(),
        }
    }

    fn with_input(resume: Resume, input_value: String) -> Self {
        Self {
            resume,
            created_id: None,
            input_value: Some(input_value),

            input_values: BTreeMap::new(),
        }
    }
}

/// Applies `edit` to `resume`. Draft text for tag fields is recorded in `drafts`;
/// removing an entity, or replacing its tags, discards its draft in the same step.
///
/// On error `drafts` is unchanged and the caller still owns its previous resume.
pub fn apply_edit(
    mut resume: Resume,
    edit: ResumeEdit,
    drafts: &mut InputDrafts,
) -> Result<EditOutcome, EditError> {
    use ResumeEdit::*;

    let mut outcome = match edit {
        SetPersonalInfo { personal_info } => {
            entities::set_personal_info(&mut resume, personal_info);
            EditOutcome::plain(resume)
        }

        AddExperience => {
            let id = entities::add_experience(&mut resume, mint_id()).id.clone();
            drafts.set(&id, "");
            EditOutcome::created(resume, id, Some(String::new()))
        }
        UpdateExperience { mut experience } => {
            experience.ensure_bullet();
            entities::replace(&mut resume.experiences, experience)?;
            EditOutcome::plain(resume)
        }
        RemoveExperience { id } => {
            entities::remove(&mut resume.experiences, &id)?;
            drafts.discard(&id);
            EditOutcome::plain(resume)
        }
        AddDescriptionPoint { id } => {
            entities::add_point(&mut find_mut(&mut resume.experiences, &id)?.description);
            EditOutcome::plain(resume)
        }
        UpdateDescriptionPoint { id, index, value } => {
            let experience = find_mut(&mut resume.experiences, &id)?;
            entities::update_point(&mut experience.description, index, value)?;
            EditOutcome::plain(resume)
        }
        RemoveDescriptionPoint { id, index } => {
            let experience = find_mut(&mut resume.experiences, &id)?;
            entities::remove_point(&mut experience.description, index, BULLET)?;
            EditOutcome::plain(resume)
        }
        SetExperienceTechnologies { id, raw } => {
            entities::set_experience_technologies(&mut resume, &id, &raw)?;
            drafts.set(&id, raw.as_str());
            EditOutcome::with_input(resume, raw)
        }

        AddProject => {
            let id = entities::add_project(&mut resume, mint_id()).id.clone();
            drafts.set(&id, "");
            EditOutcome::created(resume, id, Some(String::new()))
        }
        UpdateProject { mut project } => {
            project.ensure_bullet();
            entities::replace(&mut resume.projects, project)?;
            EditOutcome::plain(resume)
        }
        RemoveProject { id } => {
            entities::remove(&mut resume.projects, &id)?;
            drafts.discard(&id);
            EditOutcome::plain(resume)
        }
        AddHighlight { id } => {
            entities::add_point(&mut find_mut(&mut resume.projects, &id)?.highlights);
            EditOutcome::plain(resume)
        }
        UpdateHighlight { id, index, value } => {
            let project = find_mut(&mut resume.projects, &id)?;
            entities::update_point(&mut project.highlights, index, value)?;
            EditOutcome::plain(resume)
        }
        RemoveHighlight { id, index } => {
            let project = find_mut(&mut resume.projects, &id)?;
            entities::remove_point(&mut project.highlights, index, HIGHLIGHT)?;
            EditOutcome::plain(resume)
        }
        SetProjectTechnologies { id, raw } => {
            entities::set_project_technologies(&mut resume, &id, &raw)?;
            drafts.set(&id, raw.as_str());
            EditOutcome::with_input(resume, raw)
        }

        AddEducation => {
            let id = entities::add_education(&mut resume, mint_id()).id.clone();
            EditOutcome::created(resume, id, None)
        }
        UpdateEducation { education } => {
            entities::replace(&mut resume.education, education)?;
            EditOutcome::plain(resume)
        }
        RemoveEducation { id } => {
            entities::remove(&mut resume.education, &id)?;
            EditOutcome::plain(resume)
        }

        AddSkillCategory => {
            let id = entities::add_skill_category(&mut resume, mint_id()).id.clone();
            drafts.set(&id, "");
            EditOutcome::created(resume, id, Some(String::new()))
        }
        RenameSkillCategory { id, category } => {
            entities::rename_skill_category(&mut resume, &id, category)?;
            EditOutcome::plain(resume)
        }
        SetSkillItems { id, raw } => {
            entities::set_skill_items(&mut resume, &id, &raw)?;
            drafts.set(&id, raw.as_str());
            EditOutcome::with_input(resume, raw)
        }
        RemoveSkillCategory { id } => {
            entities::remove(&mut resume.skills, &id)?;
            drafts.discard(&id);
            EditOutcome::plain(resume)
        }

        Move { list, from, to } => {
            match list {
                ListKind::Experiences => {
                    resume.experiences = move_item(std::mem::take(&mut resume.experiences), from, to)?
                }
                ListKind::Projects => {
                    resume.projects = move_item(std::mem::take(&mut resume.projects), from, to)?
                }
                ListKind::Education => {
                    resume.education = move_item(std::mem::take(&mut resume.education), from, to)?
                }
                ListKind::Skills => {
                    resume.skills = move_item(std::mem::take(&mut resume.skills), from, to)?
                }
            }
            EditOutcome::plain(resume)
        }
    };

    drafts.reconcile(&outcome.resume);
    outcome.input_values = drafts.display_values(&outcome.resume);
    Ok(outcome)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
