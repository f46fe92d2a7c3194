//! Indenting Java source writer.

use super::{java_return_type, java_type};
use crate::method::MethodSpec;

/// Accumulates Java source text with block indentation.
#[derive(Debug, Clone)]
pub struct JavaWriter {
    output: String,
    indent: String,
    depth: usize,
}

impl JavaWriter {
    /// Creates a writer indenting each block by `indent` spaces.
    #[must_use]
    pub fn new(indent: usize) -> Self {
        Self {
            output: String::new(),
            indent: " ".repeat(indent),
            depth: 0,
        }
    }

    /// Emits one line at the current indentation.
    pub fn emit_line(&mut self, line: &str) -> &mut Self {
        if !line.is_empty() {
            for _ in 0..self.depth {
                self.output.push_str(&self.indent);
            }
            self.output.push_str(line);
        }
        self.output.push('\n');
        self
    }

    /// Emits an empty line.
    pub fn emit_empty_line(&mut self) -> &mut Self {
        self.output.push('\n');
        self
    }

    /// Emits a statement, adding the terminating semicolon.
    pub fn emit_statement(&mut self, statement: &str) -> &mut Self {
        self.emit_line(&format!("{statement};"))
    }

    /// Emits a Javadoc block; `\n` in `text` starts a new line.
    pub fn emit_javadoc(&mut self, text: &str) -> &mut Self {
        self.emit_line("/**");
        for line in text.lines() {
            let line = line.replace("*/", "*&#47;");
            if line.is_empty() {
                self.emit_line(" *");
            } else {
                self.emit_line(&format!(" * {line}"));
            }
        }
        self.emit_line(" */")
    }

    /// Opens a block with `{` and increases indentation.
    pub fn begin_block(&mut self, header: &str) -> &mut Self {
        self.emit_line(&format!("{header} {{"));
        self.depth += 1;
        self
    }

    /// Closes the current block.
    pub fn end_block(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self.emit_line("}")
    }

    /// Emits a complete public method.
    pub fn emit_method(&mut self, method: &MethodSpec) -> &mut Self {
        if let Some(doc) = &method.doc {
            self.emit_javadoc(doc);
        }

        let parameters = method
            .parameters
            .iter()
            .map(|p| format!("{} {}", java_type(p.ty), p.name))
            .collect::<Vec<_>>()
            .join(", ");

        self.begin_block(&format!(
            "public {} {}({})",
            java_return_type(&method.return_type),
            method.name,
            parameters
        ));
        for statement in &method.body {
            self.emit_statement(statement);
        }
        self.end_block()
    }

    /// Returns the accumulated source text.
    #[must_use]
    pub fn finish(self) -> String {
        self.output
    }
}

impl Default for JavaWriter {
    fn default() -> Self {
        Self::new(4)
    }
}
