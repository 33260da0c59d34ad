use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static MEMBER_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    // first "(...)" group, non-greedy
    Regex::new(r"\((.*?)\)").expect("valid member id regex")
});

/// Short member identifier, e.g. `jdoe` in `"Jane Doe (jdoe)"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberId(String);

impl MemberId {
    /// Extract the identifier from a member display field.
    /// Returns `None` when the field carries no parenthesized token.
    pub fn extract(member_field: &str) -> Option<Self> {
        MEMBER_ID_RE
            .captures(member_field)
            .and_then(|c| c.get(1))
            .map(|m| MemberId(m.as_str().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact, case-sensitive comparison.
    pub fn is(&self, member: &str) -> bool {
        self.0 == member
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
