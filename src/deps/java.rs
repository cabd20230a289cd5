//! Java manifest parsing: Maven POM and Gradle build scripts.

use super::CommandHints;
use crate::core::DependencyRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;

static POM_DEPENDENCY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?s)<dependency>.*?<groupId>(.*?)</groupId>.*?<artifactId>(.*?)</artifactId>.*?<version>(.*?)</version>.*?</dependency>",
    )
    .expect("static POM pattern is valid")
});

static GRADLE_COORDINATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"['"]([^:'"]+):([^:'"]+):([^'"]+)['"]"#)
        .expect("static Gradle pattern is valid")
});

/// Structural matching over `<dependency>` blocks; no XML parser needed for
/// the shape of data we extract.
pub fn parse_pom(content: &str, _root: &Path, hints: &mut CommandHints) -> DependencyRecord {
    let mut dependencies = BTreeMap::new();
    for captures in POM_DEPENDENCY.captures_iter(content) {
        let group = captures[1].trim();
        let artifact = captures[2].trim();
        let version = captures[3].trim();
        dependencies.insert(format!("{group}:{artifact}"), version.to_string());
    }

    hints.setup("mvn compile");
    hints.setup("mvn test");

    DependencyRecord {
        dependencies,
        ..DependencyRecord::default()
    }
    .with_count()
}

/// Line scan of the `dependencies { ... }` block for coordinate strings on
/// `implementation`/`api`/`compile` style declarations.
pub fn parse_gradle(content: &str, _root: &Path, hints: &mut CommandHints) -> DependencyRecord {
    let mut dependencies = BTreeMap::new();
    let mut dev_dependencies = BTreeMap::new();
    let mut in_block = false;

    for line in content.lines() {
        let line = line.trim();
        if line.starts_with("dependencies") && line.contains('{') {
            in_block = true;
            continue;
        }
        if in_block && line.contains('}') {
            in_block = false;
            continue;
        }
        if !in_block {
            continue;
        }
        let is_test_scope = line.starts_with("testImplementation") || line.starts_with("testCompile");
        let is_main_scope = line.starts_with("implementation")
            || line.starts_with("api")
            || line.starts_with("compile");
        if !is_test_scope && !is_main_scope {
            continue;
        }
        if let Some(captures) = GRADLE_COORDINATE.captures(line) {
            let key = format!("{}:{}", &captures[1], &captures[2]);
            let version = captures[3].to_string();
            if is_test_scope {
                dev_dependencies.insert(key, version);
            } else {
                dependencies.insert(key, version);
            }
        }
    }

    hints.setup("./gradlew build");

    DependencyRecord {
        dependencies,
        dev_dependencies,
        ..DependencyRecord::default()
    }
    .with_count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pom_dependency_blocks_are_matched_structurally() {
        let content = r#"
<project>
  <dependencies>
    <dependency>
      <groupId>org.springframework.boot</groupId>
      <artifactId>spring-boot-starter-web</artifactId>
      <version>3.2.0</version>
    </dependency>
    <dependency>
      <groupId>com.google.guava</groupId>
      <artifactId>guava</artifactId>
      <version>32.1.3-jre</version>
    </dependency>
  </dependencies>
</project>
"#;
        let mut hints = CommandHints::default();
        let record = parse_pom(content, Path::new("."), &mut hints);
        assert_eq!(record.total_count, 2);
        assert_eq!(
            record.dependencies["org.springframework.boot:spring-boot-starter-web"],
            "3.2.0"
        );
        assert!(hints.setup_instructions.contains(&"mvn compile".to_string()));
    }

    #[test]
    fn gradle_block_scan_separates_test_scope() {
        let content = r#"
plugins { id 'java' }

dependencies {
    implementation 'org.springframework.boot:spring-boot-starter:3.2.0'
    api "com.google.guava:guava:32.1.3-jre"
    testImplementation 'org.junit.jupiter:junit-jupiter:5.10.0'
}
"#;
        let mut hints = CommandHints::default();
        let record = parse_gradle(content, Path::new("."), &mut hints);
        assert_eq!(record.dependencies.len(), 2);
        assert_eq!(record.dev_dependencies.len(), 1);
        assert_eq!(record.total_count, 3);
        assert_eq!(
            record.dev_dependencies["org.junit.jupiter:junit-jupiter"],
            "5.10.0"
        );
    }

    #[test]
    fn coordinates_outside_dependency_block_are_ignored() {
        let content = r#"compile 'a:b:1.0'"#;
        let mut hints = CommandHints::default();
        let record = parse_gradle(content, Path::new("."), &mut hints);
        assert!(record.dependencies.is_empty());
    }
}
