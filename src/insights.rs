//! Heuristic project observations derived from accumulated totals.

use crate::core::ProjectSnapshot;

/// Insight, recommendation, security and performance notes generated from
/// fixed thresholds over the snapshot's totals.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InsightSet {
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub security_findings: Vec<String>,
    pub performance_insights: Vec<String>,
}

pub fn generate(snapshot: &ProjectSnapshot) -> InsightSet {
    let mut set = InsightSet::default();

    // Project scale
    if snapshot.total_files > 1000 {
        set.insights
            .push(format!("Large-scale project with {} files", snapshot.total_files));
        set.recommendations
            .push("Consider implementing code organization strategies".to_string());
    } else if snapshot.total_files > 100 {
        set.insights
            .push(format!("Medium-scale project with {} files", snapshot.total_files));
    } else {
        set.insights
            .push(format!("Small project with {} files", snapshot.total_files));
    }

    // Code volume
    if snapshot.total_lines_of_code > 100_000 {
        set.insights.push(format!(
            "Substantial codebase with {} lines of code",
            snapshot.total_lines_of_code
        ));
        set.recommendations
            .push("Implement comprehensive testing strategy".to_string());
    } else if snapshot.total_lines_of_code > 10_000 {
        set.insights.push(format!(
            "Moderate codebase with {} lines of code",
            snapshot.total_lines_of_code
        ));
        set.recommendations
            .push("Implement automated testing".to_string());
    }

    // Technology diversity
    let tech_count = snapshot.technologies.len();
    if tech_count > 15 {
        set.insights.push(format!(
            "Highly diverse technology stack with {tech_count} technologies"
        ));
        set.recommendations
            .push("Document technology choices and maintain expertise".to_string());
    } else if tech_count > 8 {
        set.insights
            .push(format!("Multi-technology project using {tech_count} technologies"));
    }

    if !snapshot.frameworks.is_empty() {
        set.insights.push(format!(
            "Uses modern frameworks: {}",
            snapshot.frameworks.join(", ")
        ));
        set.recommendations
            .push("Keep frameworks updated for security".to_string());
    }

    // Dependency weight
    let total_deps = snapshot.total_dependency_count();
    if total_deps > 100 {
        set.insights
            .push(format!("Heavy dependency usage: {total_deps} total dependencies"));
        set.recommendations
            .push("Regularly audit dependencies for vulnerabilities".to_string());
        set.security_findings
            .push("Large number of dependencies increases attack surface".to_string());
    } else if total_deps > 50 {
        set.insights
            .push(format!("Moderate dependency usage: {total_deps} dependencies"));
    }

    if !snapshot.testing_frameworks.is_empty() {
        set.insights.push(format!(
            "Testing frameworks: {}",
            snapshot.testing_frameworks.join(", ")
        ));
    } else {
        set.recommendations
            .push("Consider implementing automated testing".to_string());
    }

    if snapshot.technologies.iter().any(|t| t == "Docker") {
        set.insights
            .push("Containerized application using Docker".to_string());
        set.security_findings
            .push("Ensure Docker images are regularly updated".to_string());
    }

    // Documentation coverage uses doc-suffix entries from the scanned tree.
    let doc_count = snapshot
        .file_structure
        .keys()
        .filter(|path| {
            let lower = path.to_lowercase();
            lower.ends_with(".md")
                || lower.ends_with(".txt")
                || lower.ends_with(".rst")
                || lower.ends_with(".adoc")
        })
        .count();
    if doc_count > 5 {
        set.insights.push(format!(
            "Well-documented project with {doc_count} documentation files"
        ));
    } else {
        set.recommendations
            .push("Consider adding more documentation".to_string());
    }

    // Average file length as a cheap hotspot signal.
    let text_files = snapshot
        .file_structure
        .values()
        .filter(|record| record.lines.is_some())
        .count();
    if text_files > 0 {
        let avg = snapshot.total_lines_of_code / text_files;
        if avg > 500 {
            set.performance_insights.push(format!(
                "Average source file length is {avg} lines; large files slow tooling and review"
            ));
        }
    }

    set
}
