// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn report_xml(body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Report xmlns=\"http://soap.sforce.com/2006/04/metadata\">\n{body}\n</Report>\n"
    )
}

pub fn dashboard_xml(body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Dashboard xmlns=\"http://soap.sforce.com/2006/04/metadata\">\n{body}\n</Dashboard>\n"
    )
}

/// A project in the usual `force-app` layout with reports and dashboards
/// that reference `Opportunity.StageName` in different places.
pub fn setup_test_project() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    create_test_file(
        root,
        "force-app/main/default/reports/Pipeline/By_Stage.report-meta.xml",
        &report_xml(
            "    <groupingsDown>\n        <groupingColumn>Opportunity.StageName</groupingColumn>\n    </groupingsDown>",
        ),
    )?;
    create_test_file(
        root,
        "force-app/main/default/reports/Pipeline/Open_Deals.report-meta.xml",
        &report_xml(
            "    <filter>\n        <criteriaItems>\n            <column>Opportunity.StageName</column>\n            <operator>notEqual</operator>\n            <value>Closed Won</value>\n        </criteriaItems>\n    </filter>",
        ),
    )?;
    create_test_file(
        root,
        "force-app/main/default/reports/Pipeline/Stage_Listing.report-meta.xml",
        &report_xml("    <columns>\n        <field>Opportunity.StageName</field>\n    </columns>"),
    )?;
    create_test_file(
        root,
        "force-app/main/default/reports/Cases/Case_Aging.report-meta.xml",
        &report_xml("    <columns>\n        <field>Case.Status</field>\n    </columns>"),
    )?;
    create_test_file(
        root,
        "force-app/main/default/reports/Pipeline-meta.xml",
        "<ReportFolder><name>Pipeline</name></ReportFolder>",
    )?;

    create_test_file(
        root,
        "force-app/main/default/dashboards/Sales/Pipeline_Overview.dashboard-meta.xml",
        &dashboard_xml(
            "    <dashboardFilters>\n        <dashboardFilterOptions/>\n        <name>Stage</name>\n    </dashboardFilters>\n    <leftSection>\n        <components>\n            <groupingColumn>Opportunity.StageName</groupingColumn>\n        </components>\n    </leftSection>",
        ),
    )?;
    create_test_file(
        root,
        "force-app/main/default/dashboards/Sales/Leaderboard.dashboard-meta.xml",
        &dashboard_xml("    <title>Top reps by StageName progression</title>"),
    )?;

    Ok(temp_dir)
}
