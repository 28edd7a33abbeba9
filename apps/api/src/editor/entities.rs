//! Per-entity edits. Each works on a `&mut Resume` the caller owns and either
//! applies fully or fails without touching it.

use crate::editor::{parse_tags, EditError};
use crate::models::{Education, Experience, PersonalInfo, Project, Resume, Skill};

/// A list entry addressed by id.
pub trait Identified {
    const KIND: &'static str;
    fn id(&self) -> &str;
}

impl Identified for Experience {
    const KIND: &'static str = "experience";
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Project {
    const KIND: &'static str = "project";
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Education {
    const KIND: &'static str = "education";
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Skill {
    const KIND: &'static str = "skill category";
    fn id(&self) -> &str {
        &self.id
    }
}

fn unknown<T: Identified>(id: &str) -> EditError {
    EditError::UnknownEntity {
        kind: T::KIND,
        id: id.to_string(),
    }
}

pub fn find_mut<'a, T: Identified>(list: &'a mut [T], id: &str) -> Result<&'a mut T, EditError> {
    list.iter_mut()
        .find(|item| item.id() == id)
        .ok_or_else(|| unknown::<T>(id))
}

/// Replaces the entry sharing `item`'s id, keeping its position.
pub fn replace<T: Identified>(list: &mut [T], item: T) -> Result<(), EditError> {
    let id = item.id().to_string();
    *find_mut(list, &id)? = item;
    Ok(())
}

pub fn remove<T: Identified>(list: &mut Vec<T>, id: &str) -> Result<T, EditError> {
    let index = list
        .iter()
        .position(|item| item.id() == id)
        .ok_or_else(|| unknown::<T>(id))?;
    Ok(list.remove(index))
}

// ────────────────────────────────────────────────────────────────────────────
// Bullet lists (experience description, project highlights)
// ────────────────────────────────────────────────────────────────────────────

pub fn add_point(points: &mut Vec<String>) {
    points.push(String::new());
}

pub fn update_point(points: &mut [String], index: usize, value: String) -> Result<(), EditError> {
    let len = points.len();
    let slot = points
        .get_mut(index)
        .ok_or(EditError::IndexOutOfRange { index, len })?;
    *slot = value;
    Ok(())
}

/// Removes one bullet. Refuses to remove the last one so the editor always
/// has a field to type into.
pub fn remove_point(
    points: &mut Vec<String>,
    index: usize,
    what: &'static str,
) -> Result<(), EditError> {
    let len = points.len();
    if index >= len {
        return Err(EditError::IndexOutOfRange { index, len });
    }
    if len <= 1 {
        return Err(EditError::LastBullet(what));
    }
    points.remove(index);
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Resume-level operations
// ────────────────────────────────────────────────────────────────────────────

pub fn set_personal_info(resume: &mut Resume, info: PersonalInfo) {
    resume.personal_info = info;
}

pub fn add_experience(resume: &mut Resume, id: String) -> &Experience {
    resume.experiences.push(Experience::blank(id));
    &resume.experiences[resume.experiences.len() - 1]
}

pub fn add_project(resume: &mut Resume, id: String) -> &Project {
    resume.projects.push(Project::blank(id));
    &resume.projects[resume.projects.len() - 1]
}

pub fn add_education(resume: &mut Resume, id: String) -> &Education {
    resume.education.push(Education::blank(id));
    &resume.education[resume.education.len() - 1]
}

pub fn add_skill_category(resume: &mut Resume, id: String) -> &Skill {
    resume.skills.push(Skill::new(id, ""));
    &resume.skills[resume.skills.len() - 1]
}

pub fn rename_skill_category(
    resume: &mut Resume,
    id: &str,
    category: String,
) -> Result<(), EditError> {
    find_mut(&mut resume.skills, id)?.category = category;
    Ok(())
}

/// Parses `raw` into the technologies of an experience.
pub fn set_experience_technologies<'a>(
    resume: &'a mut Resume,
    id: &str,
    raw: &str,
) -> Result<&'a [String], EditError> {
    let experience = find_mut(&mut resume.experiences, id)?;
    experience.technologies = parse_tags(raw);
    Ok(&experience.technologies)
}

pub fn set_project_technologies<'a>(
    resume: &'a mut Resume,
    id: &str,
    raw: &str,
) -> Result<&'a [String], EditError> {
    let project = find_mut(&mut resume.projects, id)?;
    project.technologies = parse_tags(raw);
    Ok(&project.technologies)
}

pub fn set_skill_items<'a>(
    resume: &'a mut Resume,
    id: &str,
    raw: &str,
) -> Result<&'a [String], EditError> {
    let skill = find_mut(&mut resume.skills, id)?;
    skill.items = parse_tags(raw);
    Ok(&skill.items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut list = vec![
            Education::blank("a".to_string()),
            Education::blank("b".to_string()),
        ];
        let updated = Education {
            institution: "MIT".to_string(),
            ..Education::blank("b".to_string())
        };
        replace(&mut list, updated).unwrap();
        assert_eq!(list[1].institution, "MIT");
        assert_eq!(list[0].id, "a");
    }

    #[test]
    fn test_unknown_id_is_reported_with_kind() {
        let mut list = vec![Project::blank("p1".to_string())];
        assert_eq!(
            remove(&mut list, "p2"),
            Err(EditError::UnknownEntity {
                kind: "project",
                id: "p2".to_string()
            })
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_point_refuses_last() {
        let mut bullets = points(&["only"]);
        assert_eq!(
            remove_point(&mut bullets, 0, "bullet point"),
            Err(EditError::LastBullet("bullet point"))
        );
        assert_eq!(bullets, points(&["only"]));
    }

    #[test]
    fn test_remove_point_by_index() {
        let mut bullets = points(&["a", "b", "c"]);
        remove_point(&mut bullets, 1, "bullet point").unwrap();
        assert_eq!(bullets, points(&["a", "c"]));
    }

    #[test]
    fn test_update_point_out_of_range() {
        let mut bullets = points(&["a"]);
        assert_eq!(
            update_point(&mut bullets, 1, "b".to_string()),
            Err(EditError::IndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_added_experience_is_blank_with_one_bullet() {
        let mut resume = Resume::default();
        let added = add_experience(&mut resume, "42".to_string());
        assert_eq!(added.description, vec![String::new()]);
        assert!(added.technologies.is_empty());
        assert!(!added.current);
    }

    #[test]
    fn test_skill_items_from_raw_text() {
        let mut resume = Resume::default();
        let items = set_skill_items(&mut resume, "default-languages", "Rust, Go,").unwrap();
        assert_eq!(items, ["Rust".to_string(), "Go".to_string()]);
    }
}
