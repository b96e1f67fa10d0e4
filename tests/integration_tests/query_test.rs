// tests/integration_tests/query_test.rs
use super::common::{create_test_file, report_xml};
use anyhow::Result;
use sffu::{MetadataKind, QUERY_TEMPLATES, UsageQuery, build_query, find_field_usage, in_clause};
use tempfile::TempDir;

#[test]
fn test_in_clause_format() {
    assert_eq!(in_clause(&["A", "B"]), "('A','B')");
}

#[test]
fn test_single_report_query() -> Result<()> {
    assert_eq!(
        build_query(&["Q1"], MetadataKind::Report)?,
        "SELECT Id, DeveloperName, LastRunDate FROM Report WHERE DeveloperName IN \n('Q1')\nORDER BY LastRunDate DESC"
    );
    Ok(())
}

#[test]
fn test_templates_cover_each_kind_once() {
    for kind in MetadataKind::ALL {
        let count = QUERY_TEMPLATES.iter().filter(|t| t.kind == kind).count();
        assert_eq!(count, 1, "kind {kind}");
    }
}

#[test]
fn test_query_lists_every_match() -> Result<()> {
    let temp_dir = TempDir::new()?;
    for name in ["Alpha", "Beta", "Gamma"] {
        create_test_file(
            temp_dir.path(),
            &format!("reports/{name}.report-meta.xml"),
            &report_xml("<columns><field>Lead.LeadSource</field></columns>"),
        )?;
    }

    let report = find_field_usage(
        temp_dir.path(),
        MetadataKind::Report,
        &UsageQuery::new("Lead", "LeadSource", false),
    )?;

    assert_eq!(report.count, 3);
    for name in ["'Alpha'", "'Beta'", "'Gamma'"] {
        assert!(report.query.contains(name), "missing {name}");
    }
    assert_eq!(report.query, build_query(&report.names, MetadataKind::Report)?);
    Ok(())
}
