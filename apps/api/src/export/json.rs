use crate::export::ExportError;
use crate::models::Resume;

pub const JSON_FILE_NAME: &str = "resume-data.json";

/// Pretty-printed JSON backup of the resume, in the same shape the store and API use.
pub fn to_pretty_json(resume: &Resume) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(resume)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Experience;

    #[test]
    fn test_export_reimports_losslessly() {
        let mut resume = Resume::default();
        resume.personal_info.full_name = "Jane Doe".to_string();
        resume.experiences.push(Experience {
            company: "Acme".to_string(),
            technologies: vec!["Go".to_string()],
            ..Experience::blank("1".to_string())
        });

        let json = to_pretty_json(&resume).unwrap();
        assert!(json.contains("\n  \"personalInfo\": {"));
        let back: Resume = serde_json::from_str(&json).unwrap();
        assert_eq!(back, resume);
    }
}
