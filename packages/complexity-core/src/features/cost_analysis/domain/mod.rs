//! Domain models for cost analysis
//!
//! Pure business logic with no external dependencies.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Big-O complexity classes produced by the heuristic estimator
///
/// Ordered by computational cost (ascending).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplexityClass {
    /// O(1) - Constant time
    Constant,
    /// O(log n) - Logarithmic time
    Logarithmic,
    /// O(n) - Linear time
    Linear,
    /// O(n log n) - Linearithmic time
    Linearithmic,
    /// O(n²) - Quadratic time
    Quadratic,
    /// O(n³) - Cubic time
    Cubic,
    /// O(2^n) - Exponential time
    Exponential,
}

impl ComplexityClass {
    pub const ALL: [ComplexityClass; 7] = [
        Self::Constant,
        Self::Logarithmic,
        Self::Linear,
        Self::Linearithmic,
        Self::Quadratic,
        Self::Cubic,
        Self::Exponential,
    ];

    /// Get string representation (e.g., "O(n)")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Constant => "O(1)",
            Self::Logarithmic => "O(log n)",
            Self::Linear => "O(n)",
            Self::Linearithmic => "O(n log n)",
            Self::Quadratic => "O(n²)",
            Self::Cubic => "O(n³)",
            Self::Exponential => "O(2^n)",
        }
    }

    /// Parse a label such as `O(n log n)`.
    ///
    /// Whitespace is ignored and `^2`/`^3` are accepted for `²`/`³`, so
    /// labels echoed by an external analyzer still map onto a known class.
    pub fn from_label(label: &str) -> Option<Self> {
        let compact: String = label
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .replace("^2", "²")
            .replace("^3", "³");

        match compact.as_str() {
            "O(1)" => Some(Self::Constant),
            "O(logn)" => Some(Self::Logarithmic),
            "O(n)" => Some(Self::Linear),
            "O(nlogn)" => Some(Self::Linearithmic),
            "O(n²)" => Some(Self::Quadratic),
            "O(n³)" => Some(Self::Cubic),
            "O(2^n)" => Some(Self::Exponential),
            _ => None,
        }
    }

    /// Is this considered slow? (>= O(n²))
    pub fn is_slow(&self) -> bool {
        matches!(self, Self::Quadratic | Self::Cubic | Self::Exponential)
    }

    /// Classification by loop nesting depth alone
    pub fn from_nesting_depth(depth: usize) -> Self {
        match depth {
            0 | 1 => Self::Linear,
            2 => Self::Quadratic,
            _ => Self::Cubic,
        }
    }

    /// Get ordering index for comparison
    fn order_index(&self) -> u8 {
        match self {
            Self::Constant => 0,
            Self::Logarithmic => 1,
            Self::Linear => 2,
            Self::Linearithmic => 3,
            Self::Quadratic => 4,
            Self::Cubic => 5,
            Self::Exponential => 6,
        }
    }
}

impl PartialOrd for ComplexityClass {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ComplexityClass {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order_index().cmp(&other.order_index())
    }
}

impl fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complexity label as seen by consumers.
///
/// The estimator only emits `Known` labels; `Other` carries free-form text
/// reported by an external analyzer (e.g. `O(V + E)`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComplexityLabel {
    Known(ComplexityClass),
    Other(String),
}

impl ComplexityLabel {
    pub fn parse(label: &str) -> Self {
        match ComplexityClass::from_label(label) {
            Some(class) => Self::Known(class),
            None => Self::Other(label.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(class) => class.as_str(),
            Self::Other(text) => text,
        }
    }

    pub fn color_band(&self) -> ColorBand {
        ColorBand::for_label(self.as_str())
    }
}

impl From<ComplexityClass> for ComplexityLabel {
    fn from(class: ComplexityClass) -> Self {
        Self::Known(class)
    }
}

impl fmt::Display for ComplexityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display colour band for a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBand {
    /// O(1), O(log n)
    Fast,
    /// Plain O(n)
    Linear,
    /// O(n²), O(n log n)
    Slow,
    /// Anything else
    Fallback,
}

impl ColorBand {
    /// Pick a band by substring match on the label text.
    pub fn for_label(label: &str) -> Self {
        if label.contains("O(1)") || label.contains("O(log n)") {
            Self::Fast
        } else if label.contains("O(n²)") || label.contains("O(n log n)") {
            Self::Slow
        } else if label.contains("O(n)") {
            Self::Linear
        } else {
            Self::Fallback
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Fast => "complexity-fast",
            Self::Linear => "complexity-linear",
            Self::Slow => "complexity-slow",
            Self::Fallback => "complexity-other",
        }
    }
}

/// Identifies which classification rule produced an estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    /// `while` loop with low/high/mid bookkeeping and halving
    IterativeBinarySearch,
    /// Self-recursive fibonacci-style function
    ExponentialRecursion,
    /// Self-recursive merge/partition function
    DivideAndConquer,
    /// Single self-recursive call with halving
    RecursiveBinarySearch,
    /// `.sort(` or `sorted(`
    BuiltinSort,
    /// Linear membership test inside a loop
    MembershipInLoop,
    /// Loop nesting depth >= 1
    NestingDepth,
    /// No loop keyword at all
    NoLoops,
    /// Loop keyword present but no structure recognized
    Default,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IterativeBinarySearch => "iterative_binary_search",
            Self::ExponentialRecursion => "exponential_recursion",
            Self::DivideAndConquer => "divide_and_conquer",
            Self::RecursiveBinarySearch => "recursive_binary_search",
            Self::BuiltinSort => "builtin_sort",
            Self::MembershipInLoop => "membership_in_loop",
            Self::NestingDepth => "nesting_depth",
            Self::NoLoops => "no_loops",
            Self::Default => "default",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::IterativeBinarySearch => "while loop halving a low/high search window",
            Self::ExponentialRecursion => "fibonacci-style function with multiple recursive calls",
            Self::DivideAndConquer => "recursive merge/partition over split input",
            Self::RecursiveBinarySearch => "single recursive call on a halved range",
            Self::BuiltinSort => "call to a built-in sort",
            Self::MembershipInLoop => "linear membership test inside a loop",
            Self::NestingDepth => "loop nesting depth",
            Self::NoLoops => "no loops",
            Self::Default => "loop keyword without recognizable structure",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heuristic estimation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    /// Complexity class (O(n), O(n²))
    pub complexity: ComplexityClass,

    /// Rule that decided the class
    pub rule: RuleId,

    /// Maximum loop nesting depth seen in the snippet
    pub max_depth: usize,
}

impl Estimate {
    pub fn label(&self) -> &'static str {
        self.complexity.as_str()
    }

    /// Is this snippet slow? (>= O(n²))
    pub fn is_slow(&self) -> bool {
        self.complexity.is_slow()
    }

    pub fn explanation(&self) -> String {
        match self.rule {
            RuleId::NestingDepth | RuleId::MembershipInLoop => format!(
                "{} via {} (max loop depth {})",
                self.complexity,
                self.rule.description(),
                self.max_depth
            ),
            _ => format!("{} via {}", self.complexity, self.rule.description()),
        }
    }
}
