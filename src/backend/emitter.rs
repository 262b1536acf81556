//! Source emitter - builds generated source code strings
//!
//! This module provides the low-level buffer for rendering well-formatted
//! source text. Output uses 4-space indentation and `\n` line endings only,
//! so identical inputs always render byte-identical text.

/// A buffer for building source code with proper indentation
#[derive(Debug, Default)]
pub struct SourceEmitter {
    buffer: String,
    indent_level: usize,
}

const INDENT: &str = "    ";

impl SourceEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the generated code
    pub fn finish(self) -> String {
        self.buffer
    }

    /// Get current buffer as string slice
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Write a line with current indentation
    pub fn line(&mut self, s: &str) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }

    /// Write a blank line
    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    /// Increase indent level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indent level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write a block with braces
    pub fn block<F>(&mut self, header: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line(&format!("{} {{", header));
        self.indent();
        f(self);
        self.dedent();
        self.line("}");
    }

    /// Write a comment
    pub fn comment(&mut self, text: &str) {
        if text.is_empty() {
            self.line("//");
        } else {
            self.line(&format!("// {}", text));
        }
    }

    /// Write a doc comment
    pub fn doc_comment(&mut self, text: &str) {
        self.line(&format!("/// {}", text));
    }
}
