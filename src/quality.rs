//! Weighted boolean quality-factor model.

use crate::core::QualityMetrics;
use std::collections::BTreeMap;

/// One scored factor. Weights across [`FACTORS`] sum to 1.0, so a project
/// with every factor true scores exactly 10.0.
pub struct QualityFactor {
    pub name: &'static str,
    pub weight: f64,
    pub recommendation: &'static str,
}

pub static FACTORS: &[QualityFactor] = &[
    QualityFactor {
        name: "hasTests",
        weight: 0.20,
        recommendation: "Consider implementing automated testing",
    },
    QualityFactor {
        name: "hasDocumentation",
        weight: 0.15,
        recommendation: "Consider adding more documentation",
    },
    QualityFactor {
        name: "hasVersionControl",
        weight: 0.10,
        recommendation: "Initialize version control to track changes",
    },
    QualityFactor {
        name: "hasBuildSystem",
        weight: 0.15,
        recommendation: "Add a build system or package manifest",
    },
    QualityFactor {
        name: "moderateDependencies",
        weight: 0.10,
        recommendation: "Regularly audit dependencies for vulnerabilities",
    },
    QualityFactor {
        name: "hasFrameworks",
        weight: 0.10,
        recommendation: "Consider adopting an established framework",
    },
    QualityFactor {
        name: "fileTypeDiversity",
        weight: 0.10,
        recommendation: "Separate concerns across source, config and docs",
    },
    QualityFactor {
        name: "typeSafeLanguage",
        weight: 0.10,
        recommendation: "Consider a statically typed language for core logic",
    },
];

/// Dependency totals at or above this count flip `moderateDependencies` off.
pub const DEPENDENCY_THRESHOLD: usize = 100;
/// Distinct file extensions above this count flip `fileTypeDiversity` on.
pub const FILE_TYPE_THRESHOLD: usize = 5;

static TYPE_SAFE_LANGUAGES: &[&str] = &[
    "Rust", "TypeScript", "Java", "Go", "C#", "Kotlin", "Swift", "Scala",
];

/// Signals collected from the rest of the pipeline, evaluated once.
#[derive(Clone, Debug, Default)]
pub struct QualityInputs {
    pub has_tests: bool,
    pub has_documentation: bool,
    pub has_version_control: bool,
    pub has_build_system: bool,
    /// Number of manifest files found; the dependency factor only scores
    /// when at least one manifest exists, so an empty tree stays at 0.0.
    pub manifest_count: usize,
    pub dependency_total: usize,
    pub has_frameworks: bool,
    pub file_type_count: usize,
    pub languages: Vec<String>,
}

impl QualityInputs {
    fn indicator(&self, name: &str) -> bool {
        match name {
            "hasTests" => self.has_tests,
            "hasDocumentation" => self.has_documentation,
            "hasVersionControl" => self.has_version_control,
            "hasBuildSystem" => self.has_build_system,
            "moderateDependencies" => {
                self.manifest_count > 0 && self.dependency_total < DEPENDENCY_THRESHOLD
            }
            "hasFrameworks" => self.has_frameworks,
            "fileTypeDiversity" => self.file_type_count > FILE_TYPE_THRESHOLD,
            "typeSafeLanguage" => self
                .languages
                .iter()
                .any(|lang| TYPE_SAFE_LANGUAGES.contains(&lang.as_str())),
            _ => false,
        }
    }
}

/// Score the factor model: `(Σ weight·indicator) × 10` rounded to one
/// decimal, plus one fixed recommendation per false factor.
pub fn score(inputs: &QualityInputs) -> (QualityMetrics, Vec<String>) {
    let mut factors = BTreeMap::new();
    let mut recommendations = Vec::new();
    let mut weighted = 0.0;

    for factor in FACTORS {
        let value = inputs.indicator(factor.name);
        factors.insert(factor.name.to_string(), value);
        if value {
            weighted += factor.weight;
        } else {
            recommendations.push(factor.recommendation.to_string());
        }
    }

    let overall_score = (weighted * 10.0 * 10.0).round() / 10.0;
    (
        QualityMetrics {
            overall_score,
            factors,
            complexity: 0,
        },
        recommendations,
    )
}
