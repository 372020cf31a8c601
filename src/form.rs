use std::collections::HashMap;

const HEADING_PREFIX: &str = "### ";

/// Field values of a GitHub issue-form body, keyed by their `### ` heading.
///
/// Values are kept verbatim apart from the blank lines around them, so
/// markdown inside an answer reaches the validators untouched.
#[derive(Debug, Default)]
pub struct IssueForm {
    sections: HashMap<String, String>,
}

impl IssueForm {
    pub fn parse(body: &str) -> Self {
        let mut sections = HashMap::new();
        let mut current: Option<(&str, Vec<&str>)> = None;

        for line in body.lines() {
            if let Some(heading) = line.strip_prefix(HEADING_PREFIX) {
                if let Some((name, lines)) = current.take() {
                    sections.insert(name.to_string(), join_lines(&lines));
                }
                current = Some((heading.trim(), Vec::new()));
            } else if let Some((_, lines)) = current.as_mut() {
                lines.push(line);
            }
        }

        if let Some((name, lines)) = current {
            sections.insert(name.to_string(), join_lines(&lines));
        }

        tracing::debug!(sections = sections.len(), "issue form parsed");
        Self { sections }
    }

    /// The raw answer for `section`, or `""` when the form has no such heading.
    pub fn get(&self, section: &str) -> &str {
        self.sections.get(section).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }
}

fn join_lines(lines: &[&str]) -> String {
    let start = lines.iter().position(|l| !l.trim().is_empty());
    let end = lines.iter().rposition(|l| !l.trim().is_empty());

    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].join("\n"),
        _ => String::new(),
    }
}
