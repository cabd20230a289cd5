//! Project archetype scoring from accumulated scan signals.

/// A candidate project-type label with its indicator keywords. Declaration
/// order is the tie-break precedence, so this table must stay an ordered
/// slice rather than a map.
pub struct Archetype {
    pub label: &'static str,
    pub indicators: &'static [&'static str],
}

pub static ARCHETYPES: &[Archetype] = &[
    Archetype {
        label: "Web Application",
        indicators: &["package.json", "index.html", "react", "vue.js", "angular", "express.js"],
    },
    Archetype {
        label: "API/Backend Service",
        indicators: &["express.js", "django", "flask", "fastapi", "spring framework"],
    },
    Archetype {
        label: "Desktop Application",
        indicators: &["electron", "tauri", "pyqt", "tkinter"],
    },
    Archetype {
        label: "Library/Package",
        indicators: &["setup.py", "pyproject.toml", "lib/", "src/"],
    },
    Archetype {
        label: "Documentation",
        indicators: &["docs/", "readme.md", ".md"],
    },
];

/// Returned when signals exist but no archetype scores above zero.
pub const GENERIC_LABEL: &str = "General Software Project";
/// Returned when nothing at all was scanned.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Signals feeding the archetype haystack.
#[derive(Clone, Debug, Default)]
pub struct ArchetypeSignals<'a> {
    pub technologies: &'a [String],
    pub config_files: &'a [String],
    pub paths: &'a [String],
    pub project_name: &'a str,
}

/// Pick the archetype with the strictly highest indicator count. Ties keep
/// the earlier-declared archetype. An empty signal set (nothing scanned)
/// yields [`UNKNOWN_LABEL`]; an all-zero score yields [`GENERIC_LABEL`].
pub fn classify(signals: &ArchetypeSignals) -> String {
    if signals.technologies.is_empty()
        && signals.config_files.is_empty()
        && signals.paths.is_empty()
    {
        return UNKNOWN_LABEL.to_string();
    }

    let mut haystack = String::new();
    for part in signals
        .technologies
        .iter()
        .chain(signals.config_files.iter())
        .chain(signals.paths.iter())
    {
        haystack.push_str(part);
        haystack.push(' ');
    }
    haystack.push_str(signals.project_name);
    let haystack = haystack.to_lowercase();

    let mut best: Option<(&'static str, usize)> = None;
    for archetype in ARCHETYPES {
        let score = archetype
            .indicators
            .iter()
            .filter(|indicator| haystack.contains(*indicator))
            .count();
        // Strictly-greater keeps the earliest declaration on ties.
        if score > best.map_or(0, |(_, s)| s) {
            best = Some((archetype.label, score));
        }
    }

    best.map(|(label, _)| label.to_string())
        .unwrap_or_else(|| GENERIC_LABEL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_signals_are_unknown() {
        let signals = ArchetypeSignals {
            project_name: "demo",
            ..ArchetypeSignals::default()
        };
        assert_eq!(classify(&signals), UNKNOWN_LABEL);
    }

    #[test]
    fn zero_score_with_signals_is_generic() {
        let paths = strings(&["notes.org"]);
        let signals = ArchetypeSignals {
            paths: &paths,
            project_name: "demo",
            ..ArchetypeSignals::default()
        };
        assert_eq!(classify(&signals), GENERIC_LABEL);
    }

    #[test]
    fn web_signals_score_web_application() {
        let techs = strings(&["React", "Express.js"]);
        let configs = strings(&["package.json"]);
        let paths = strings(&["index.html", "src/App.jsx"]);
        let signals = ArchetypeSignals {
            technologies: &techs,
            config_files: &configs,
            paths: &paths,
            project_name: "shop",
        };
        assert_eq!(classify(&signals), "Web Application");
    }

    #[test]
    fn ties_resolve_to_earliest_declared() {
        // "express.js" appears in both Web Application and API/Backend
        // Service; with only that indicator both score 1.
        let techs = strings(&["Express.js"]);
        let signals = ArchetypeSignals {
            technologies: &techs,
            project_name: "svc",
            ..ArchetypeSignals::default()
        };
        for _ in 0..5 {
            assert_eq!(classify(&signals), "Web Application");
        }
    }
}
