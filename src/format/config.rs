//! Formatting configuration for minic

/// Formatting configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
    /// Number of blank lines between top-level declarations
    pub blank_lines_top_level: usize,
    /// Whether binary and assignment operators are surrounded by spaces (`a + b` vs `a+b`)
    pub space_around_binary_ops: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            blank_lines_top_level: 1,
            space_around_binary_ops: true,
        }
    }
}

impl FormatConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    pub fn with_blank_lines_top_level(mut self, count: usize) -> Self {
        self.blank_lines_top_level = count;
        self
    }

    pub fn with_space_around_binary_ops(mut self, enabled: bool) -> Self {
        self.space_around_binary_ops = enabled;
        self
    }
}
