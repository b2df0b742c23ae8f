//! JSON catalog parsing.
//!
//! Deserializes the wire-format catalog with Serde, converts `"HH:MM"`
//! meeting times into minute-of-day values, and validates the structural
//! invariants the engine relies on: every interval has `start < end` and
//! every dependent section's parent reference resolves to a primary
//! section of the same course.

use crate::models::{Catalog, Course, Section, SectionKind, TimeSlot, Weekday};
use anyhow::{Context, Result};
use chrono::{NaiveTime, Timelike};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

/// Catalog validation failure, raised at load time before any generation.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("course {course}, section {section}: invalid meeting time '{value}', expected HH:MM")]
    InvalidTime {
        course: String,
        section: String,
        value: String,
    },

    #[error("course {course}, section {section}: time slot {start}-{end} does not satisfy start < end")]
    InvalidTimeSlot {
        course: String,
        section: String,
        start: String,
        end: String,
    },

    #[error("course {course}, section {section}: parent reference '{parent}' does not resolve to a primary section of the same course")]
    UnresolvedParent {
        course: String,
        section: String,
        parent: String,
    },

    #[error("course {course}, section {section}: dependent section is missing a parent reference")]
    MissingParent { course: String, section: String },
}

#[derive(Deserialize)]
struct CatalogInput {
    #[serde(default)]
    term: String,
    courses: Vec<CourseInput>,
}

#[derive(Deserialize)]
struct CourseInput {
    code: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    term: String,
    #[serde(default)]
    sections: Vec<SectionInput>,
}

#[derive(Deserialize)]
struct SectionInput {
    id: String,
    kind: SectionKind,
    #[serde(default)]
    parent: Option<String>,
    #[serde(default)]
    meetings: Vec<MeetingInput>,
}

#[derive(Deserialize)]
struct MeetingInput {
    day: Weekday,
    start: String,
    end: String,
}

/// Parses and validates a catalog from a JSON string.
///
/// Deserialization failures carry the JSON path to the offending field;
/// validation failures carry a [`CatalogError`]. Courses without sections
/// pass the loader (generation over them yields an empty result, which is
/// not an error).
pub fn load_catalog_str(json: &str) -> Result<Catalog> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let input: CatalogInput = serde_path_to_error::deserialize(&mut deserializer)
        .context("Invalid catalog JSON")?;

    let term = input.term;
    let courses = input
        .courses
        .into_iter()
        .map(|course| convert_course(course, &term))
        .collect::<Result<Vec<Course>, CatalogError>>()?;

    log::debug!("loaded catalog with {} course(s)", courses.len());

    Ok(Catalog { term, courses })
}

fn convert_course(input: CourseInput, catalog_term: &str) -> Result<Course, CatalogError> {
    let primary_ids: HashSet<&str> = input
        .sections
        .iter()
        .filter(|s| s.kind == SectionKind::Primary)
        .map(|s| s.id.as_str())
        .collect();

    let mut sections = Vec::with_capacity(input.sections.len());
    for section in &input.sections {
        if section.kind == SectionKind::Dependent {
            match section.parent.as_deref() {
                None => {
                    return Err(CatalogError::MissingParent {
                        course: input.code.clone(),
                        section: section.id.clone(),
                    })
                }
                Some(parent) if !primary_ids.contains(parent) => {
                    return Err(CatalogError::UnresolvedParent {
                        course: input.code.clone(),
                        section: section.id.clone(),
                        parent: parent.to_string(),
                    })
                }
                Some(_) => {}
            }
        }

        let mut slots = Vec::with_capacity(section.meetings.len());
        for meeting in &section.meetings {
            let start = parse_time_of_day(&meeting.start, &input.code, &section.id)?;
            let end = parse_time_of_day(&meeting.end, &input.code, &section.id)?;
            if start >= end {
                return Err(CatalogError::InvalidTimeSlot {
                    course: input.code.clone(),
                    section: section.id.clone(),
                    start: meeting.start.clone(),
                    end: meeting.end.clone(),
                });
            }
            slots.push(TimeSlot::new(meeting.day, start, end));
        }

        sections.push(Section {
            id: section.id.clone(),
            kind: section.kind,
            parent_id: section.parent.clone(),
            slots,
        });
    }

    let term = if input.term.is_empty() {
        catalog_term.to_string()
    } else {
        input.term
    };

    Ok(Course {
        code: input.code,
        title: input.title,
        term,
        sections,
    })
}

/// Parses an `"HH:MM"` token into a minute-of-day value.
fn parse_time_of_day(value: &str, course: &str, section: &str) -> Result<u32, CatalogError> {
    let time = NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| CatalogError::InvalidTime {
        course: course.to_string(),
        section: section.to_string(),
        value: value.to_string(),
    })?;
    Ok(time.hour() * 60 + time.minute())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_CATALOG: &str = r#"{
        "term": "2026-fall",
        "courses": [
            {
                "code": "CS101",
                "title": "Intro to Computer Science",
                "sections": [
                    {
                        "id": "L1",
                        "kind": "primary",
                        "meetings": [
                            { "day": "mon", "start": "09:00", "end": "10:15" },
                            { "day": "wed", "start": "09:00", "end": "10:15" }
                        ]
                    },
                    {
                        "id": "T1",
                        "kind": "dependent",
                        "parent": "L1",
                        "meetings": [
                            { "day": "fri", "start": "14:00", "end": "15:00" }
                        ]
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_load_minimal_catalog() {
        let catalog = load_catalog_str(MINIMAL_CATALOG).expect("catalog should load");
        assert_eq!(catalog.term, "2026-fall");
        assert_eq!(catalog.courses.len(), 1);

        let course = &catalog.courses[0];
        assert_eq!(course.code, "CS101");
        assert_eq!(course.term, "2026-fall");
        assert_eq!(course.sections.len(), 2);

        let lecture = &course.sections[0];
        assert_eq!(lecture.slots[0], TimeSlot::new(Weekday::Mon, 540, 615));

        let tutorial = &course.sections[1];
        assert_eq!(tutorial.kind, SectionKind::Dependent);
        assert_eq!(tutorial.parent_id.as_deref(), Some("L1"));
        assert_eq!(tutorial.slots[0], TimeSlot::new(Weekday::Fri, 840, 900));
    }

    #[test]
    fn test_invalid_json_fails() {
        assert!(load_catalog_str("not json {").is_err());
    }

    #[test]
    fn test_unknown_weekday_fails_with_path() {
        let json = r#"{
            "courses": [
                {
                    "code": "CS101",
                    "sections": [
                        { "id": "L1", "kind": "primary",
                          "meetings": [ { "day": "funday", "start": "09:00", "end": "10:00" } ] }
                    ]
                }
            ]
        }"#;
        let err = load_catalog_str(json).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid catalog JSON"));
    }

    #[test]
    fn test_malformed_time_token_rejected() {
        let json = r#"{
            "courses": [
                {
                    "code": "CS101",
                    "sections": [
                        { "id": "L1", "kind": "primary",
                          "meetings": [ { "day": "mon", "start": "9 o'clock", "end": "10:00" } ] }
                    ]
                }
            ]
        }"#;
        let err = load_catalog_str(json).unwrap_err();
        let catalog_err = err.downcast_ref::<CatalogError>().expect("typed error");
        assert!(matches!(catalog_err, CatalogError::InvalidTime { .. }));
    }

    #[test]
    fn test_start_not_before_end_rejected() {
        let json = r#"{
            "courses": [
                {
                    "code": "CS101",
                    "sections": [
                        { "id": "L1", "kind": "primary",
                          "meetings": [ { "day": "mon", "start": "10:00", "end": "10:00" } ] }
                    ]
                }
            ]
        }"#;
        let err = load_catalog_str(json).unwrap_err();
        let catalog_err = err.downcast_ref::<CatalogError>().expect("typed error");
        assert!(matches!(catalog_err, CatalogError::InvalidTimeSlot { .. }));
    }

    #[test]
    fn test_unresolvable_parent_rejected() {
        let json = r#"{
            "courses": [
                {
                    "code": "CS101",
                    "sections": [
                        { "id": "L1", "kind": "primary", "meetings": [] },
                        { "id": "T1", "kind": "dependent", "parent": "L9", "meetings": [] }
                    ]
                }
            ]
        }"#;
        let err = load_catalog_str(json).unwrap_err();
        let catalog_err = err.downcast_ref::<CatalogError>().expect("typed error");
        assert!(matches!(catalog_err, CatalogError::UnresolvedParent { .. }));
    }

    #[test]
    fn test_parent_must_resolve_within_same_course() {
        // L1 exists, but in a different course.
        let json = r#"{
            "courses": [
                {
                    "code": "CS101",
                    "sections": [ { "id": "L1", "kind": "primary", "meetings": [] } ]
                },
                {
                    "code": "MATH100",
                    "sections": [ { "id": "T1", "kind": "dependent", "parent": "L1", "meetings": [] } ]
                }
            ]
        }"#;
        assert!(load_catalog_str(json).is_err());
    }

    #[test]
    fn test_dependent_without_parent_rejected() {
        let json = r#"{
            "courses": [
                {
                    "code": "CS101",
                    "sections": [
                        { "id": "L1", "kind": "primary", "meetings": [] },
                        { "id": "T1", "kind": "dependent", "meetings": [] }
                    ]
                }
            ]
        }"#;
        let err = load_catalog_str(json).unwrap_err();
        let catalog_err = err.downcast_ref::<CatalogError>().expect("typed error");
        assert!(matches!(catalog_err, CatalogError::MissingParent { .. }));
    }

    #[test]
    fn test_course_without_sections_is_allowed() {
        // Generation over such a course yields an empty result, which is
        // not a load failure.
        let json = r#"{ "courses": [ { "code": "CS101", "sections": [] } ] }"#;
        let catalog = load_catalog_str(json).expect("should load");
        assert!(catalog.courses[0].sections.is_empty());
    }

    #[test]
    fn test_course_term_overrides_catalog_term() {
        let json = r#"{
            "term": "2026-fall",
            "courses": [
                { "code": "CS101", "term": "2027-spring",
                  "sections": [ { "id": "L1", "kind": "primary", "meetings": [] } ] }
            ]
        }"#;
        let catalog = load_catalog_str(json).unwrap();
        assert_eq!(catalog.courses[0].term, "2027-spring");
    }
}
