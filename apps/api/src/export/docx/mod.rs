//! Word export.
//!
//! [`build_document`] lays the resume out as a flat list of blocks (paragraphs
//! and borderless tables). [`xml`] turns blocks into WordprocessingML and
//! [`package`] zips the parts into a `.docx`. Unlike the preview, the layout
//! here is fixed: skills come right after the summary.

pub mod package;
pub mod xml;

use crate::models::{PersonalInfo, Resume};

pub use package::package_docx;

// Spacing values are twentieths of a point.
const AFTER_HEADING: u32 = 120;
const AFTER_SECTION: u32 = 240;
const AFTER_LINE: u32 = 60;
const BETWEEN_ENTRIES: u32 = 180;

// Run sizes are half-points.
const ENTRY_TITLE_SIZE: u32 = 24;

const LINKEDIN_PREFIX: &str = "https://www.linkedin.com/in/";
const GITHUB_PREFIX: &str = "https://github.com/";
const WEB_PREFIX: &str = "https://";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    Title,
    Section,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub size: Option<u32>,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            italic: true,
            ..Self::plain(text)
        }
    }

    pub fn bold(text: impl Into<String>, size: u32) -> Self {
        Self {
            bold: true,
            size: Some(size),
            ..Self::plain(text)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub heading: Option<HeadingLevel>,
    pub align: Align,
    pub bullet: bool,
    /// Thin grey rule under the paragraph.
    pub divider: bool,
    pub spacing_before: u32,
    pub spacing_after: u32,
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn text(text: impl Into<String>) -> Self {
        Self::runs(vec![Run::plain(text)])
    }

    pub fn runs(runs: Vec<Run>) -> Self {
        Self {
            runs,
            ..Default::default()
        }
    }

    pub fn blank(spacing_after: u32) -> Self {
        Self {
            spacing_after,
            ..Default::default()
        }
    }

    pub fn heading(mut self, level: HeadingLevel) -> Self {
        self.heading = Some(level);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn bullet(mut self) -> Self {
        self.bullet = true;
        self
    }

    pub fn after(mut self, twips: u32) -> Self {
        self.spacing_after = twips;
        self
    }

    #[cfg(test)]
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub paragraph: Paragraph,
    /// Percent of the table width.
    pub width_pct: Option<u32>,
}

/// Full-width, fixed-layout table without borders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub column_pct: Vec<u32>,
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

impl From<Paragraph> for Block {
    fn from(paragraph: Paragraph) -> Self {
        Block::Paragraph(paragraph)
    }
}

impl From<Table> for Block {
    fn from(table: Table) -> Self {
        Block::Table(table)
    }
}

/// Each whitespace run becomes one `_`, edges included: ` Jane  Doe` → `_Jane_Doe_Resume.docx`.
pub fn docx_file_name(full_name: &str) -> String {
    let mut stem = String::with_capacity(full_name.len());
    let mut in_space = false;
    for ch in full_name.chars() {
        if !ch.is_whitespace() {
            stem.push(ch);
        } else if !in_space {
            stem.push('_');
        }
        in_space = ch.is_whitespace();
    }
    format!("{stem}_Resume.docx")
}

fn display_url<'a>(url: &'a str, prefix: &str) -> &'a str {
    url.strip_prefix(prefix).unwrap_or(url)
}

/// The resume as Word blocks, in document order.
pub fn build_document(resume: &Resume) -> Vec<Block> {
    let info = &resume.personal_info;
    let mut blocks: Vec<Block> = vec![
        Paragraph::text(info.full_name.as_str())
            .heading(HeadingLevel::Title)
            .align(Align::Center)
            .after(AFTER_HEADING)
            .into(),
        Paragraph::text(info.title.as_str())
            .align(Align::Center)
            .after(AFTER_SECTION)
            .into(),
        Paragraph {
            divider: true,
            spacing_before: AFTER_HEADING,
            spacing_after: AFTER_SECTION,
            ..Default::default()
        }
        .into(),
    ];

    let contacts = contact_table(info);
    if !contacts.rows.is_empty() {
        blocks.push(contacts.into());
    }

    if !info.summary.is_empty() {
        blocks.push(section_heading("PROFESSIONAL SUMMARY"));
        blocks.push(Paragraph::text(info.summary.as_str()).after(AFTER_SECTION).into());
    }

    push_skills(resume, &mut blocks);
    push_experience(resume, &mut blocks);
    push_projects(resume, &mut blocks);
    push_education(resume, &mut blocks);

    blocks
}

fn section_heading(text: &str) -> Block {
    Paragraph::text(text)
        .heading(HeadingLevel::Section)
        .after(AFTER_HEADING)
        .into()
}

fn contact_cell(label: &str, value: &str, align: Align) -> Option<Cell> {
    (!value.is_empty()).then(|| Cell {
        paragraph: Paragraph::text(format!("{label}: {value}")).align(align),
        width_pct: None,
    })
}

/// Rows: email | phone, LinkedIn | GitHub, location | portfolio.
/// A row with both sides empty is left out.
fn contact_table(info: &PersonalInfo) -> Table {
    let rows = [
        [
            contact_cell("Email", &info.email, Align::Left),
            contact_cell("Phone", &info.phone, Align::Right),
        ],
        [
            contact_cell("LinkedIn", display_url(&info.linkedin, LINKEDIN_PREFIX), Align::Left),
            contact_cell("GitHub", display_url(&info.github, GITHUB_PREFIX), Align::Right),
        ],
        [
            contact_cell("Location", &info.location, Align::Left),
            contact_cell("Portfolio", display_url(&info.portfolio, WEB_PREFIX), Align::Right),
        ],
    ]
    .into_iter()
    .map(|row| row.into_iter().flatten().collect::<Vec<_>>())
    .filter(|row| !row.is_empty())
    .collect();

    Table {
        column_pct: vec![50, 50],
        rows,
    }
}

fn push_skills(resume: &Resume, blocks: &mut Vec<Block>) {
    let rows: Vec<Vec<Cell>> = resume
        .skills
        .iter()
        .filter(|s| !s.items.is_empty())
        .map(|s| {
            vec![
                Cell {
                    paragraph: Paragraph::text(s.category.as_str()),
                    width_pct: Some(30),
                },
                Cell {
                    paragraph: Paragraph::text(s.items.join(", ")),
                    width_pct: Some(70),
                },
            ]
        })
        .collect();

    if rows.is_empty() {
        return;
    }

    blocks.push(section_heading("TECHNICAL SKILLS"));
    blocks.push(
        Table {
            column_pct: vec![30, 70],
            rows,
        }
        .into(),
    );
    blocks.push(Paragraph::blank(AFTER_SECTION).into());
}

fn push_bullets(points: &[String], blocks: &mut Vec<Block>) {
    blocks.extend(
        points
            .iter()
            .filter(|p| !p.trim().is_empty())
            .map(|p| Block::from(Paragraph::text(p.as_str()).bullet().after(AFTER_LINE))),
    );
}

/// Closing "Technologies:" line, or a spacer between entries when there are none.
fn push_technologies(technologies: &[String], is_last: bool, blocks: &mut Vec<Block>) {
    let after = if is_last { AFTER_HEADING } else { BETWEEN_ENTRIES };
    if !technologies.is_empty() {
        blocks.push(
            Paragraph::runs(vec![
                Run::italic("Technologies: "),
                Run::plain(technologies.join(", ")),
            ])
            .after(after)
            .into(),
        );
    } else if !is_last {
        blocks.push(Paragraph::blank(BETWEEN_ENTRIES).into());
    }
}

fn push_experience(resume: &Resume, blocks: &mut Vec<Block>) {
    if resume.experiences.is_empty() {
        return;
    }
    blocks.push(section_heading("WORK EXPERIENCE"));

    let last = resume.experiences.len() - 1;
    for (i, exp) in resume.experiences.iter().enumerate() {
        blocks.push(
            Paragraph::runs(vec![Run::bold(exp.position.as_str(), ENTRY_TITLE_SIZE)])
                .after(AFTER_LINE)
                .into(),
        );

        let mut meta = vec![
            Run::italic(exp.company.as_str()),
            Run::plain(format!(" | {}", exp.date_range())),
        ];
        if !exp.location.is_empty() {
            meta.push(Run::plain(format!(" | {}", exp.location)));
        }
        blocks.push(Paragraph::runs(meta).after(AFTER_HEADING).into());

        push_bullets(&exp.description, blocks);
        push_technologies(&exp.technologies, i == last, blocks);
    }
}

fn push_projects(resume: &Resume, blocks: &mut Vec<Block>) {
    if resume.projects.is_empty() {
        return;
    }
    blocks.push(section_heading("PROJECTS"));

    let last = resume.projects.len() - 1;
    for (i, project) in resume.projects.iter().enumerate() {
        blocks.push(
            Paragraph::runs(vec![Run::bold(project.name.as_str(), ENTRY_TITLE_SIZE)])
                .after(AFTER_LINE)
                .into(),
        );

        let links: Vec<String> = [
            project
                .github_url()
                .map(|url| format!("GitHub: {}", display_url(url, GITHUB_PREFIX))),
            project
                .demo_url()
                .map(|url| format!("Demo: {}", display_url(url, WEB_PREFIX))),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !links.is_empty() {
            blocks.push(Paragraph::text(links.join(" | ")).after(AFTER_LINE).into());
        }

        if !project.description.is_empty() {
            blocks.push(
                Paragraph::text(project.description.as_str())
                    .after(AFTER_HEADING)
                    .into(),
            );
        }

        push_bullets(&project.highlights, blocks);
        push_technologies(&project.technologies, i == last, blocks);
    }
}

fn push_education(resume: &Resume, blocks: &mut Vec<Block>) {
    if resume.education.is_empty() {
        return;
    }
    blocks.push(section_heading("EDUCATION"));

    let last = resume.education.len() - 1;
    for (i, edu) in resume.education.iter().enumerate() {
        blocks.push(
            Paragraph::runs(vec![Run::bold(
                format!("{} in {}", edu.degree, edu.field),
                ENTRY_TITLE_SIZE,
            )])
            .after(AFTER_LINE)
            .into(),
        );

        let mut meta = vec![
            Run::italic(edu.institution.as_str()),
            Run::plain(format!(" | {}", edu.graduation_date)),
        ];
        if !edu.location.is_empty() {
            meta.push(Run::plain(format!(" | {}", edu.location)));
        }
        if let Some(gpa) = edu.gpa_label() {
            meta.push(Run::plain(format!(" | GPA: {gpa}")));
        }
        let after = if i == last { 0 } else { BETWEEN_ENTRIES };
        blocks.push(Paragraph::runs(meta).after(after).into());
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
