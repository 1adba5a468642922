/// Report severity for one link issue.
///
/// Switch-to-switch links carry traffic for many nodes and are always
/// critical; a single server link is a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    Warning,
}

impl Severity {
    /// Bracketed label as printed in the report table.
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "[CRITICAL]",
            Self::Warning => "[WARNING]",
        }
    }
}

/// Direction marker for a report row. `BothDown` marks a link whose two
/// endpoints are simultaneously reported non-active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkDirection {
    OneWay,
    BothDown,
}

impl LinkDirection {
    pub fn arrow(self) -> &'static str {
        match self {
            Self::OneWay => " --->",
            Self::BothDown => "<--->",
        }
    }
}

/// One deduplicated, classified link problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthIssue {
    pub severity: Severity,
    /// Formatted source descriptor, `Name(p<P>/v<V>)`.
    pub source: String,
    /// Raw state text as reported by the status tool.
    pub state: String,
    pub direction: LinkDirection,
    /// Formatted target descriptor.
    pub target: String,
}

/// Outcome of one health scan. Each physical link appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthReport {
    pub issues: Vec<HealthIssue>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.issues.is_empty()
    }
}
