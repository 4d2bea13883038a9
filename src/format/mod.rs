//! minic code formatter
//!
//! Prints a parsed program back as canonical C:
//! - 4-space indentation
//! - opening braces on the header line
//! - one blank line between top-level groups
//! - every nested operator expression parenthesized
//!
//! Source with syntax errors is never formatted.

mod config;
mod formatter;
mod writer;

pub use config::FormatConfig;
pub use formatter::Formatter;
pub use writer::FormatWriter;

use thiserror::Error;

use crate::frontend::diagnostics::CompileError;
use crate::frontend::parser;

#[derive(Debug, Error)]
pub enum FormatError {
    /// The source did not parse cleanly.
    #[error("cannot format source with {} syntax error(s)", .errors.len())]
    Syntax { errors: Vec<CompileError> },
}

impl FormatError {
    pub fn errors(&self) -> &[CompileError] {
        match self {
            FormatError::Syntax { errors } => errors,
        }
    }
}

/// Format minic source code with default settings
pub fn format_source(source: &str) -> Result<String, FormatError> {
    format_source_with_config(source, FormatConfig::default())
}

/// Format minic source code with custom configuration
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn format_source_with_config(source: &str, config: FormatConfig) -> Result<String, FormatError> {
    let program = parser::parse_source(source)
        .into_result()
        .map_err(|errors| FormatError::Syntax { errors })?;
    Ok(Formatter::new(config).format(&program))
}

/// Check if source code is already formatted
pub fn check_formatted(source: &str) -> Result<bool, FormatError> {
    let formatted = format_source(source)?;
    Ok(source == formatted)
}

/// Line-by-line diff between the source and its formatted form; `None` when already formatted.
pub fn format_diff(source: &str) -> Result<Option<String>, FormatError> {
    let formatted = format_source(source)?;
    if source == formatted {
        return Ok(None);
    }

    let mut diff = String::new();
    let original_lines: Vec<&str> = source.lines().collect();
    let formatted_lines: Vec<&str> = formatted.lines().collect();
    for i in 0..original_lines.len().max(formatted_lines.len()) {
        let orig = original_lines.get(i).copied().unwrap_or("");
        let fmt = formatted_lines.get(i).copied().unwrap_or("");
        if orig != fmt {
            if !orig.is_empty() {
                diff.push_str(&format!("-{:4} | {}\n", i + 1, orig));
            }
            if !fmt.is_empty() {
                diff.push_str(&format!("+{:4} | {}\n", i + 1, fmt));
            }
        }
    }
    Ok(Some(diff))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_source_simple_function() {
        let result = format_source("int main() { return 42; }");
        assert_eq!(result.ok().as_deref(), Some("int main() {\n    return 42;\n}\n"));
    }

    #[test]
    fn test_format_source_invalid_syntax() {
        let err = format_source("int main( {").expect_err("expected a syntax error");
        assert!(!err.errors().is_empty());
        assert!(err.to_string().starts_with("cannot format source with"));
    }

    #[test]
    fn test_format_source_empty() {
        assert_eq!(format_source("").ok().as_deref(), Some(""));
    }

    #[test]
    fn test_format_is_idempotent() {
        let once = format_source("int f(int a){while(a>0){a=a-1;}return a;}").expect("format failed");
        let twice = format_source(&once).expect("format failed");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_check_formatted() {
        assert_eq!(check_formatted("int x;\n").ok(), Some(true));
        assert_eq!(check_formatted("int  x ;").ok(), Some(false));
        assert!(check_formatted("int").is_err());
    }

    #[test]
    fn test_format_whole_program_snapshot() {
        let source = r#"#include <stdio.h>
static const float PI=3.14;int counter;
float area(float r){return PI*r*r;}
int main(void){int i=0;while(i<10){if(i%2==0)counter=counter+1;else{continue;}i=i+1;}
printf("%d\n",counter);return counter>5?1:0;}"#;
        let formatted = format_source(source).expect("format failed");
        insta::assert_snapshot!(formatted, @r#"
        #include <stdio.h>

        static const float PI = 3.14;
        int counter;

        float area(float r) {
            return (PI * r) * r;
        }

        int main() {
            int i = 0;
            while (i < 10) {
                if ((i % 2) == 0)
                    counter = (counter + 1);
                else {
                    continue;
                }
                i = (i + 1);
            }
            printf("%d\n", counter);
            return (counter > 5) ? 1 : 0;
        }
        "#);
    }

    #[test]
    fn test_format_diff() {
        assert_eq!(format_diff("int x;\n").ok(), Some(None));
        let diff = format_diff("int  x ;\n").expect("diff failed").expect("expected changes");
        assert_eq!(diff, "-   1 | int  x ;\n+   1 | int x;\n");
    }
}
