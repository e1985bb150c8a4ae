//! Integration tests for contact block extraction.

use resumark::parser::{ContactExtractor, ContactKind};
use resumark::{
    parse_text, parse_text_with_options, ParseOptions, SectionMap, CONTACT_INFORMATION,
    RESUME_CONTENT,
};

#[test]
fn test_name_and_email_move_to_contact_section() {
    let doc = parse_text("Jane Doe, India\njane@example.com\nEducation\nMIT 2020");

    let contact = doc.contact().unwrap();
    assert_eq!(contact.lines, vec!["- Jane Doe, India", "- jane@example.com"]);
    assert!(doc.section(RESUME_CONTENT).is_none());
    assert_eq!(doc.titles(), vec![CONTACT_INFORMATION, "Education"]);
}

#[test]
fn test_contact_block_stops_at_first_other_line() {
    let doc = parse_text("jane@example.com\nLoves distributed systems\n9876543210\nSkills\nRust");

    assert_eq!(doc.contact().unwrap().lines, vec!["- jane@example.com"]);
    // Later contact-looking lines stay where they were
    assert_eq!(
        doc.section(RESUME_CONTENT).unwrap().lines,
        vec!["- Loves distributed systems", "- 9876543210"]
    );
}

#[test]
fn test_contact_links() {
    let extractor = ContactExtractor::default();
    let kinds: Vec<ContactKind> = extractor
        .scan(&[
            "Ravi Kumar (He), India",
            "+919876543210",
            "ravi.k@mail.co.in",
            "linkedin.com/in/ravi-k",
            "https://github.com/ravik/",
            "https://ravik.vercel.app",
        ])
        .into_iter()
        .map(|c| c.kind)
        .collect();

    assert_eq!(
        kinds,
        vec![
            ContactKind::NameLocation,
            ContactKind::Phone,
            ContactKind::Email,
            ContactKind::LinkedIn,
            ContactKind::GitHub,
            ContactKind::Portfolio,
        ]
    );
}

#[test]
fn test_non_contact_lines_rejected() {
    let extractor = ContactExtractor::default();
    for line in [
        "12345",
        "http://github.com/ravik",
        "https://gitlab.com/ravik",
        "Jane Doe, Germany",
        "jane at example dot com",
    ] {
        assert!(extractor.classify(line).is_none(), "{} matched", line);
    }
}

#[test]
fn test_named_sections_keep_contact_lines() {
    // Only the pre-heading bucket is deduplicated
    let doc = parse_text("jane@example.com\nSummary\njane@example.com");
    assert_eq!(doc.contact().unwrap().lines, vec!["- jane@example.com"]);
    assert_eq!(doc.section("Summary").unwrap().lines, vec!["- jane@example.com"]);
}

#[test]
fn test_existing_contact_section_replaced() {
    let mut sections = SectionMap::new();
    sections.entry("Skills").push("- Rust");
    sections.entry(CONTACT_INFORMATION).push("- old@example.com");

    let outcome = ContactExtractor::default().apply(&["new@example.com"], &mut sections);
    assert_eq!(outcome.captured, 1);
    assert_eq!(sections.titles(), vec![CONTACT_INFORMATION, "Skills"]);
    assert_eq!(
        sections.get(CONTACT_INFORMATION).unwrap().lines,
        vec!["- new@example.com"]
    );
}

#[test]
fn test_custom_region() {
    let options = ParseOptions::new().with_region("Germany");
    let doc =
        parse_text_with_options("Max Muster, Germany\n+491511234567\nSkills\nRust", options)
            .unwrap();
    assert_eq!(
        doc.contact().unwrap().lines,
        vec!["- Max Muster, Germany", "- +491511234567"]
    );
}

#[test]
fn test_stats_report_contacts() {
    let doc = parse_text("Jane Doe, India\njane@example.com\nSkills\nRust");
    assert_eq!(doc.stats.contact_line_count, 2);
    assert_eq!(doc.stats.duplicate_contact_count, 2);
    assert!(doc.metadata.has_contact_block);
}
