//! Résumé assembler: lays out one `ResumeRecord` in a fixed section order.
//!
//! # Section order
//! 1. Header: name, headline, location, contact bar
//! 2. Summary
//! 3. Experience
//! 4. Education
//! 5. Courses (only when present and non-empty)
//! 6. Skills (only when present and non-empty)
//!
//! The pass is straight-line: no reordering, no lookahead, one page break check per line.

use tracing::info;

use crate::layout::contact_bar::contact_items;
use crate::layout::cursor::MARGIN;
use crate::layout::primitives::{BULLET_INDENT, BULLET_MARKER_COLUMN};
use crate::layout::{FontVariant, LayoutFrame, StandardMetrics, TextMetrics};
use crate::models::resume::{
    Course, DateRange, DocumentIdentity, EducationItem, Job, ResumeRecord, SkillGroup,
};
use crate::render::document::{Document, SUBTLE};
use crate::render::pdf::{write_pdf, DocumentInfo};
use crate::render::RenderError;

const NAME_SIZE: f32 = 24.0;
const HEADLINE_SIZE: f32 = 12.0;
const LOCATION_SIZE: f32 = 10.0;

const SUMMARY_SIZE: f32 = 11.0;

const ROLE_ROW_SIZE: f32 = 11.5;
const COURSE_ROW_SIZE: f32 = 11.0;
const DETAIL_SIZE: f32 = 10.0;
const BODY_SIZE: f32 = 10.5;

const JOB_TRAILING_GAP: f32 = 6.0;
const ENTRY_TRAILING_GAP: f32 = 3.0;

const DATE_SEPARATOR: &str = " \u{2013} ";
const CURRENT_POSITION: &str = "Present";

/// Lays out and serializes the résumé. Fails on the first error; no partial output.
pub fn render_resume(
    record: &ResumeRecord,
    identity: &DocumentIdentity,
) -> Result<Vec<u8>, RenderError> {
    let document = assemble(record, identity, &StandardMetrics)?;
    let info = DocumentInfo {
        title: format!("{} \u{2013} Résumé", identity.name),
        author: identity.name.clone(),
    };
    let bytes = write_pdf(&document, &info)?;
    info!(
        pages = document.page_count(),
        links = document.annotation_count(),
        bytes = bytes.len(),
        "Rendered résumé PDF"
    );
    Ok(bytes)
}

/// Runs the layout pass and returns the page model.
pub fn assemble(
    record: &ResumeRecord,
    identity: &DocumentIdentity,
    metrics: &dyn TextMetrics,
) -> Result<Document, RenderError> {
    let mut frame = LayoutFrame::new(metrics);

    render_header(&mut frame, record, identity)?;
    render_summary(&mut frame, &record.summary)?;
    render_experience(&mut frame, &record.experience)?;
    render_education(&mut frame, &record.education)?;

    if let Some(courses) = record.courses.as_deref().filter(|c| !c.is_empty()) {
        render_courses(&mut frame, courses)?;
    }
    if let Some(skills) = record.skills.as_deref().filter(|s| !s.is_empty()) {
        render_skills(&mut frame, skills)?;
    }

    Ok(frame.into_document())
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

fn render_header(
    frame: &mut LayoutFrame<'_>,
    record: &ResumeRecord,
    identity: &DocumentIdentity,
) -> Result<(), RenderError> {
    frame.centered(&identity.name, FontVariant::Bold, NAME_SIZE, 0.0)?;
    frame.centered(&identity.title, FontVariant::Italic, HEADLINE_SIZE, 2.0)?;
    frame.centered(&record.location, FontVariant::Regular, LOCATION_SIZE, 4.0)?;

    if let Some(contact) = &record.contact {
        frame.contact_bar(&contact_items(contact))?;
    }
    Ok(())
}

fn render_summary(frame: &mut LayoutFrame<'_>, summary: &str) -> Result<(), RenderError> {
    frame.section_header("Summary")?;
    frame.wrapped(summary, FontVariant::Regular, SUMMARY_SIZE, 0.0, 0.0)
}

fn render_experience(frame: &mut LayoutFrame<'_>, jobs: &[Job]) -> Result<(), RenderError> {
    frame.section_header("Experience")?;
    for job in jobs {
        frame.two_column(
            &format!("{}, {}", job.title, job.company),
            FontVariant::Bold,
            &job_date_range(job),
            FontVariant::Regular,
            ROLE_ROW_SIZE,
            1.0,
        )?;
        frame.line(&job.location, FontVariant::Italic, DETAIL_SIZE, MARGIN, SUBTLE, 4.0)?;
        if let Some(description) = &job.description {
            frame.wrapped(description, FontVariant::Regular, BODY_SIZE, 0.0, 3.0)?;
        }
        for bullet in &job.bullets {
            frame.bulleted_paragraph(
                bullet,
                FontVariant::Regular,
                BODY_SIZE,
                BULLET_INDENT,
                BULLET_MARKER_COLUMN,
            )?;
        }
        frame.skip(JOB_TRAILING_GAP);
    }
    Ok(())
}

fn render_education(
    frame: &mut LayoutFrame<'_>,
    items: &[EducationItem],
) -> Result<(), RenderError> {
    frame.section_header("Education")?;
    for item in items {
        render_dated_entry(frame, &item.degree, ROLE_ROW_SIZE, item.into())?;
    }
    Ok(())
}

fn render_courses(frame: &mut LayoutFrame<'_>, courses: &[Course]) -> Result<(), RenderError> {
    frame.section_header("Courses")?;
    for course in courses {
        render_dated_entry(frame, &course.title, COURSE_ROW_SIZE, course.into())?;
    }
    Ok(())
}

fn render_skills(frame: &mut LayoutFrame<'_>, groups: &[SkillGroup]) -> Result<(), RenderError> {
    frame.section_header("Skills")?;
    for group in groups {
        frame.labeled_list(
            &format!("{}: ", group.category),
            FontVariant::Bold,
            &group.skills.join(", "),
            FontVariant::Regular,
            BODY_SIZE,
        )?;
        frame.skip(ENTRY_TRAILING_GAP);
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Shared entry shape for education and courses
// ────────────────────────────────────────────────────────────────────────────

/// The parts of an education or course entry below its heading.
struct EntryDetails<'a> {
    institution: &'a str,
    location: &'a str,
    dates: &'a DateRange,
    description: Option<&'a str>,
}

impl<'a> From<&'a EducationItem> for EntryDetails<'a> {
    fn from(item: &'a EducationItem) -> Self {
        EntryDetails {
            institution: &item.institution,
            location: &item.location,
            dates: &item.dates,
            description: item.description.as_deref(),
        }
    }
}

impl<'a> From<&'a Course> for EntryDetails<'a> {
    fn from(course: &'a Course) -> Self {
        EntryDetails {
            institution: &course.institution,
            location: &course.location,
            dates: &course.dates,
            description: course.description.as_deref(),
        }
    }
}

fn render_dated_entry(
    frame: &mut LayoutFrame<'_>,
    heading: &str,
    heading_size: f32,
    details: EntryDetails<'_>,
) -> Result<(), RenderError> {
    frame.two_column(
        heading,
        FontVariant::Bold,
        &date_label(details.dates),
        FontVariant::Regular,
        heading_size,
        1.0,
    )?;
    frame.line(
        &format!("{}, {}", details.institution, details.location),
        FontVariant::Italic,
        DETAIL_SIZE,
        MARGIN,
        SUBTLE,
        3.0,
    )?;
    if let Some(description) = details.description {
        frame.wrapped(description, FontVariant::Regular, DETAIL_SIZE, 0.0, 3.0)?;
    }
    frame.skip(ENTRY_TRAILING_GAP);
    Ok(())
}

/// `"{start} – {end}"`, or `"{start} – Present"` for a current position.
pub fn job_date_range(job: &Job) -> String {
    let end = job.end.as_deref().unwrap_or(CURRENT_POSITION);
    format!("{}{DATE_SEPARATOR}{end}", job.start)
}

/// `"{start} – {end}"`, or just `"{start}"` when there is no end date.
pub fn date_label(dates: &DateRange) -> String {
    match &dates.end {
        Some(end) => format!("{}{DATE_SEPARATOR}{end}", dates.start),
        None => dates.start.clone(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::primitives::BULLET_GLYPH;
    use crate::models::resume::Contact;
    use crate::render::document::{DrawOp, TextRun};

    fn identity() -> DocumentIdentity {
        DocumentIdentity {
            name: "Ada Lovelace".to_string(),
            title: "Software Engineer".to_string(),
        }
    }

    fn job(end: Option<&str>, bullets: Vec<String>) -> Job {
        Job {
            title: "Engineer".to_string(),
            company: "Analytical Engines Ltd".to_string(),
            location: "London, UK".to_string(),
            start: "Jan 2021".to_string(),
            end: end.map(str::to_string),
            description: None,
            bullets,
        }
    }

    fn minimal_record(experience: Vec<Job>) -> ResumeRecord {
        ResumeRecord {
            summary: "Engineer who enjoys building reliable systems and tools.".to_string(),
            location: "London, UK".to_string(),
            contact: None,
            education: vec![],
            experience,
            courses: None,
            skills: None,
        }
    }

    fn all_runs(doc: &Document) -> Vec<&TextRun> {
        doc.pages().iter().flat_map(|p| p.text_runs()).collect()
    }

    fn texts(doc: &Document) -> Vec<String> {
        all_runs(doc).iter().map(|r| r.text.clone()).collect()
    }

    fn rule_count(doc: &Document) -> usize {
        doc.pages()
            .iter()
            .flat_map(|p| p.ops())
            .filter(|op| matches!(op, DrawOp::Rule(_)))
            .count()
    }

    /// A deterministic 200-character bullet.
    fn long_bullet(seed: usize) -> String {
        let words = [
            "designed", "scalable", "pipelines", "for", "ingesting", "telemetry", "across",
            "regions", "while", "reducing", "operational", "cost",
        ];
        let mut text = String::new();
        let mut i = seed;
        while text.len() < 200 {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(words[i % words.len()]);
            i += 1;
        }
        text.truncate(200);
        text.trim_end().to_string()
    }

    #[test]
    fn test_job_date_range_open_and_closed() {
        assert_eq!(job_date_range(&job(None, vec![])), "Jan 2021 – Present");
        assert_eq!(job_date_range(&job(Some("Mar 2023"), vec![])), "Jan 2021 – Mar 2023");
    }

    #[test]
    fn test_education_date_label_omits_dash_without_end() {
        let open = DateRange { start: "2016".to_string(), end: None };
        let closed = DateRange { start: "2016".to_string(), end: Some("2020".to_string()) };
        assert_eq!(date_label(&open), "2016");
        assert_eq!(date_label(&closed), "2016 – 2020");
    }

    #[test]
    fn test_header_block_order() {
        let doc = assemble(&minimal_record(vec![]), &identity(), &StandardMetrics).unwrap();
        let texts = texts(&doc);
        assert_eq!(&texts[..4], &["Ada Lovelace", "Software Engineer", "London, UK", "SUMMARY"]);
    }

    #[test]
    fn test_contact_bar_rendered_when_present() {
        let mut record = minimal_record(vec![]);
        record.contact = Some(Contact {
            email: Some("ada@example.com".to_string()),
            website: None,
            linkedin: Some("https://linkedin.com/in/ada".to_string()),
            github: Some("https://github.com/ada".to_string()),
        });
        let doc = assemble(&record, &identity(), &StandardMetrics).unwrap();
        assert_eq!(doc.annotation_count(), 3);
        let targets: Vec<_> = doc.pages()[0].annotations().iter().map(|a| a.target.as_str()).collect();
        assert_eq!(
            targets,
            vec!["mailto:ada@example.com", "https://linkedin.com/in/ada", "https://github.com/ada"]
        );
    }

    #[test]
    fn test_scenario_bullets_wrap_with_single_marker_each() {
        let bullets: Vec<String> = (0..3).map(long_bullet).collect();
        let record = minimal_record(vec![job(None, bullets.clone())]);
        let doc = assemble(&record, &identity(), &StandardMetrics).unwrap();

        assert_eq!(doc.page_count(), 1, "one short job fits on a single page");
        let runs = all_runs(&doc);
        let markers: Vec<usize> = runs
            .iter()
            .enumerate()
            .filter(|(_, r)| r.text == BULLET_GLYPH)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(markers.len(), 3, "one marker per bullet");

        for (&marker, bullet) in markers.iter().zip(&bullets) {
            let first_line = runs[marker + 1];
            assert_eq!(runs[marker].y, first_line.y, "marker sits on the first wrapped line");
            assert!(bullet.starts_with(&first_line.text));
        }
    }

    #[test]
    fn test_scenario_long_experience_spills_to_more_pages() {
        let jobs: Vec<Job> = (0..12)
            .map(|i| job(None, (0..4).map(|b| long_bullet(i + b)).collect()))
            .collect();
        let doc = assemble(&minimal_record(jobs), &identity(), &StandardMetrics).unwrap();
        assert!(doc.page_count() > 1);
        let markers = all_runs(&doc).iter().filter(|r| r.text == BULLET_GLYPH).count();
        assert_eq!(markers, 48);
    }

    #[test]
    fn test_scenario_present_vs_end_date() {
        let record = minimal_record(vec![job(None, vec![]), job(Some("Dec 2020"), vec![])]);
        let texts = texts(&assemble(&record, &identity(), &StandardMetrics).unwrap());
        assert!(texts.contains(&"Jan 2021 – Present".to_string()));
        assert!(texts.contains(&"Jan 2021 – Dec 2020".to_string()));
        assert!(texts.contains(&"Engineer, Analytical Engines Ltd".to_string()));
    }

    #[test]
    fn test_scenario_empty_courses_and_skills_are_omitted() {
        let mut without = minimal_record(vec![]);
        without.courses = Some(vec![]);
        without.skills = Some(vec![]);
        let baseline = minimal_record(vec![]);

        let a = assemble(&without, &identity(), &StandardMetrics).unwrap();
        let b = assemble(&baseline, &identity(), &StandardMetrics).unwrap();

        let texts_a = texts(&a);
        assert!(!texts_a.contains(&"COURSES".to_string()));
        assert!(!texts_a.contains(&"SKILLS".to_string()));
        assert_eq!(rule_count(&a), 3, "summary, experience, education");
        assert_eq!(texts_a, texts(&b));
        assert_eq!(a.pages()[0].ops(), b.pages()[0].ops(), "no vertical space reserved");
    }

    #[test]
    fn test_courses_and_skills_rendered_when_present() {
        let mut record = minimal_record(vec![]);
        record.education = vec![EducationItem {
            degree: "BSc Computer Science".to_string(),
            institution: "University".to_string(),
            location: "La Plata".to_string(),
            dates: DateRange { start: "2016".to_string(), end: Some("2021".to_string()) },
            description: Some("Thesis on distributed systems.".to_string()),
        }];
        record.courses = Some(vec![Course {
            title: "Machine Learning".to_string(),
            institution: "Online".to_string(),
            location: "Remote".to_string(),
            dates: DateRange { start: "2022".to_string(), end: None },
            description: None,
        }]);
        record.skills = Some(vec![SkillGroup {
            category: "Languages".to_string(),
            skills: vec!["Rust".to_string(), "TypeScript".to_string(), "Go".to_string()],
        }]);

        let doc = assemble(&record, &identity(), &StandardMetrics).unwrap();
        let texts = texts(&doc);
        for expected in [
            "EDUCATION",
            "2016 – 2021",
            "University, La Plata",
            "Thesis on distributed systems.",
            "COURSES",
            "2022",
            "Online, Remote",
            "SKILLS",
            "Languages: ",
            "Rust, TypeScript, Go",
        ] {
            assert!(texts.contains(&expected.to_string()), "missing {expected:?}");
        }
        assert_eq!(rule_count(&doc), 5);

        // Skills label and first line share a baseline.
        let runs = all_runs(&doc);
        let label = runs.iter().position(|r| r.text == "Languages: ").unwrap();
        assert_eq!(runs[label].y, runs[label + 1].y);
    }

    #[test]
    fn test_section_order_is_fixed() {
        let mut record = minimal_record(vec![job(None, vec![])]);
        record.skills = Some(vec![SkillGroup { category: "Tools".to_string(), skills: vec![] }]);
        record.courses = Some(vec![Course {
            title: "Course".to_string(),
            institution: "I".to_string(),
            location: "L".to_string(),
            dates: DateRange { start: "2020".to_string(), end: None },
            description: None,
        }]);
        let texts = texts(&assemble(&record, &identity(), &StandardMetrics).unwrap());
        let headers: Vec<_> = texts
            .iter()
            .filter(|t| ["SUMMARY", "EXPERIENCE", "EDUCATION", "COURSES", "SKILLS"].contains(&t.as_str()))
            .cloned()
            .collect();
        assert_eq!(headers, vec!["SUMMARY", "EXPERIENCE", "EDUCATION", "COURSES", "SKILLS"]);
    }

    #[test]
    fn test_render_resume_produces_pdf_bytes() {
        let bytes = render_resume(&minimal_record(vec![job(None, vec![long_bullet(0)])]), &identity())
            .unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        let parsed = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(parsed.get_pages().len(), 1);
    }

    #[test]
    fn test_render_resume_document_title_keeps_en_dash() {
        let bytes = render_resume(&minimal_record(vec![]), &identity()).unwrap();
        let parsed = lopdf::Document::load_mem(&bytes).unwrap();
        let info_id = parsed.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let info = parsed.get_object(info_id).unwrap().as_dict().unwrap();
        let title = lopdf::decode_text_string(info.get(b"Title").unwrap()).unwrap();
        assert_eq!(title, "Ada Lovelace – Résumé");
    }

    #[test]
    fn test_render_resume_fails_on_unencodable_text() {
        let mut record = minimal_record(vec![]);
        record.location = "東京".to_string();
        assert!(matches!(
            render_resume(&record, &identity()),
            Err(RenderError::Unencodable { .. })
        ));
    }
}
