use serde::{Deserialize, Serialize};
use std::fmt;

/// The four quantities of the dilution relation C1·V1 = C2·V2.
///
/// A field left at 0 marks the unknown; a solvable request has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DilutionInputs {
    #[serde(default)]
    pub c1: f64,
    #[serde(default)]
    pub v1: f64,
    #[serde(default)]
    pub c2: f64,
    #[serde(default)]
    pub v2: f64,
}

impl DilutionInputs {
    pub fn new(c1: f64, v1: f64, c2: f64, v2: f64) -> Self {
        Self { c1, v1, c2, v2 }
    }

    pub fn fields(&self) -> [(Variable, f64); 4] {
        [
            (Variable::C1, self.c1),
            (Variable::V1, self.v1),
            (Variable::C2, self.c2),
            (Variable::V2, self.v2),
        ]
    }

    /// Number of fields left at 0.
    pub fn unknowns(&self) -> usize {
        self.fields().iter().filter(|(_, value)| *value == 0.0).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variable {
    C1,
    V1,
    C2,
    V2,
}

impl Variable {
    pub fn name(&self) -> &'static str {
        match self {
            Variable::C1 => "c1",
            Variable::V1 => "v1",
            Variable::C2 => "c2",
            Variable::V2 => "v2",
        }
    }

    /// Parses the wire name used by the calculation service.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "c1" => Some(Variable::C1),
            "v1" => Some(Variable::V1),
            "c2" => Some(Variable::C2),
            "v2" => Some(Variable::V2),
            _ => None,
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Full-precision solver output; formatting is left to the presentation side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DilutionResult {
    pub value: f64,
    pub variable: Variable,
}

/// Where a solved dilution value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputeOrigin {
    Remote,
    /// The remote service was unreachable and the local solver stepped in.
    Local,
}

/// Outcome of a calculation request. Every failure mode collapses into one
/// of the displayable variants; transport faults never escape the client.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationOutcome {
    Solved {
        value: f64,
        variable: Variable,
        origin: ComputeOrigin,
    },
    /// The service rejected the inputs (or the local solver did).
    Rejected,
    /// The service could not be reached and no local fallback applied.
    Unavailable,
}

impl fmt::Display for CalculationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationOutcome::Solved {
                value, variable, ..
            } => write!(f, "Result: {} {}", format_quantity(*value), variable),
            CalculationOutcome::Rejected => f.write_str("Error: Check inputs"),
            CalculationOutcome::Unavailable => f.write_str("Backend not connected"),
        }
    }
}

/// Rounds to at most four decimal places for display, matching what the
/// calculation service itself reports.
pub fn format_quantity(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    format!("{rounded}")
}

/// Normalized SOP text, or the error the cleanup service reported.
#[derive(Debug, Clone, PartialEq)]
pub enum CleanupOutcome {
    Sop(String),
    RemoteError(String),
}

/// Paper analysis text, or the error the analysis service reported.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Analysis(String),
    RemoteError(String),
}

/// One tool invocation. Each arm carries only the fields its tool needs.
#[derive(Debug, Clone)]
pub enum ToolRequest {
    Dilution(DilutionInputs),
    ProtocolCleanup {
        notes: String,
    },
    PaperAnalysis {
        payload: Vec<u8>,
        filename: String,
    },
}

/// What the workbench hands back for a [`ToolRequest`].
#[derive(Debug, Clone, PartialEq)]
pub enum ToolReport {
    Calculation(CalculationOutcome),
    ProtocolCleanup(CleanupOutcome),
    PaperAnalysis(AnalysisOutcome),
}
