//! Error types for graph queries.

/// Orientation a query requires of its input graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Directed,
    Undirected,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Directed => f.write_str("directed"),
            Self::Undirected => f.write_str("undirected"),
        }
    }
}

/// Errors from graph queries.
///
/// These are usage errors: the caller handed a query a graph it cannot
/// operate on. Absent vertices are never reported here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetricsError {
    /// The query only works on graphs of the other orientation.
    #[error("{operation} is only defined for {expected} graphs")]
    WrongOrientation {
        operation: &'static str,
        expected: Orientation,
    },
}

impl MetricsError {
    /// Fail with [`MetricsError::WrongOrientation`] unless `directed` matches
    /// what `operation` expects.
    pub(crate) const fn require(
        operation: &'static str,
        expected: Orientation,
        directed: bool,
    ) -> Result<(), Self> {
        let ok = match expected {
            Orientation::Directed => directed,
            Orientation::Undirected => !directed,
        };
        if ok {
            Ok(())
        } else {
            Err(Self::WrongOrientation {
                operation,
                expected,
            })
        }
    }
}
