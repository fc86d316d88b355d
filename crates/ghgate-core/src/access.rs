//! Access rule lists over classified resources.
//!
//! Rules come from config as `author` or `author/repo` lines. An author-only
//! rule covers every repository of that author; `*` as the author covers the
//! named repository under any author.

/// One parsed rule line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub author: String,
    pub repo: Option<String>,
}

impl Rule {
    /// Parses `author` or `author/repo`. Blank or author-less lines yield no
    /// rule.
    pub fn parse(line: &str) -> Option<Rule> {
        let line = line.trim();
        let mut parts = line.splitn(2, '/');
        let author = parts.next()?.trim();
        if author.is_empty() {
            return None;
        }
        let repo = parts
            .next()
            .map(|r| r.trim())
            .filter(|r| !r.is_empty())
            .map(str::to_string);
        Some(Rule {
            author: author.to_string(),
            repo,
        })
    }

    /// Whether this rule covers the resource owned by `author`/`repo`.
    pub fn matches(&self, author: &str, repo: Option<&str>) -> bool {
        match &self.repo {
            None => self.author == author,
            Some(rule_repo) => {
                let Some(repo) = repo else { return false };
                (self.author == "*" || self.author == author) && rule_repo == repo
            }
        }
    }
}

/// An ordered list of rules; a resource matches when any rule does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Parses one rule per line, skipping blanks.
    pub fn parse_lines(lines: &[String]) -> Self {
        Self {
            rules: lines.iter().filter_map(|l| Rule::parse(l)).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn matches(&self, author: &str, repo: Option<&str>) -> bool {
        self.rules.iter().any(|r| r.matches(author, repo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(lines: &[&str]) -> RuleSet {
        RuleSet::parse_lines(&lines.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn author_rule_covers_all_repos() {
        let rules = set(&["torvalds"]);
        assert!(rules.matches("torvalds", Some("linux")));
        assert!(rules.matches("torvalds", Some("anything")));
        assert!(rules.matches("torvalds", None));
        assert!(!rules.matches("rust-lang", Some("rust")));
    }

    #[test]
    fn author_repo_rule_is_exact() {
        let rules = set(&["rust-lang/rust"]);
        assert!(rules.matches("rust-lang", Some("rust")));
        assert!(!rules.matches("rust-lang", Some("cargo")));
        assert!(!rules.matches("other", Some("rust")));
        assert!(!rules.matches("rust-lang", None));
    }

    #[test]
    fn wildcard_author_matches_repo_anywhere() {
        let rules = set(&["*/awesome-list"]);
        assert!(rules.matches("alice", Some("awesome-list")));
        assert!(rules.matches("bob", Some("awesome-list")));
        assert!(!rules.matches("alice", Some("other")));
    }

    #[test]
    fn blank_and_padded_lines() {
        let rules = set(&["", "   ", "  alice / wonderland  "]);
        assert!(rules.matches("alice", Some("wonderland")));
        assert!(!rules.matches("", Some("")));
    }

    #[test]
    fn empty_set_matches_nothing() {
        let rules = RuleSet::default();
        assert!(rules.is_empty());
        assert!(!rules.matches("anyone", Some("anything")));
    }
}
