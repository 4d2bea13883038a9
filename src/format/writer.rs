//! Output writer with indentation tracking

use super::config::FormatConfig;

/// Writer that tracks indentation and builds formatted output
pub struct FormatWriter {
    output: String,
    indent_level: usize,
    config: FormatConfig,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl FormatWriter {
    pub fn new(config: FormatConfig) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            config,
            at_line_start: true,
        }
    }

    /// Get the formatted output
    pub fn finish(self) -> String {
        self.output
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level; saturates at zero.
    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    fn write_indent(&mut self) {
        if self.at_line_start {
            let width = self.indent_level * self.config.indent_width;
            self.output.extend(std::iter::repeat_n(' ', width));
            self.at_line_start = false;
        }
    }

    /// Write a string, indenting first if this starts a line
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
    }

    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Write `count` empty lines (for spacing between declarations)
    pub fn blank_lines(&mut self, count: usize) {
        for _ in 0..count {
            self.newline();
        }
    }

    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_writer() -> FormatWriter {
        FormatWriter::new(FormatConfig::default())
    }

    #[test]
    fn test_new_writer_empty_output() {
        assert_eq!(default_writer().finish(), "");
    }

    #[test]
    fn test_write_and_writeln() {
        let mut writer = default_writer();
        writer.write("int x");
        writer.write("");
        writer.writeln(";");
        writer.writeln("");
        assert_eq!(writer.finish(), "int x;\n\n");
    }

    #[test]
    fn test_indent_applies_at_line_start_only() {
        let mut writer = default_writer();
        writer.writeln("{");
        writer.indent();
        writer.write("return");
        writer.write(" 0;");
        writer.newline();
        writer.dedent();
        writer.writeln("}");
        assert_eq!(writer.finish(), "{\n    return 0;\n}\n");
    }

    #[test]
    fn test_dedent_at_zero_stays_zero() {
        let mut writer = default_writer();
        writer.dedent();
        assert_eq!(writer.current_indent(), 0);
    }

    #[test]
    fn test_custom_indent_width() {
        let mut writer = FormatWriter::new(FormatConfig::new().with_indent_width(2));
        writer.indent();
        writer.indent();
        writer.write("x");
        assert_eq!(writer.finish(), "    x");
    }

    #[test]
    fn test_blank_lines() {
        let mut writer = default_writer();
        writer.writeln("a");
        writer.blank_lines(2);
        writer.write("b");
        assert_eq!(writer.finish(), "a\n\n\nb");
    }
}
