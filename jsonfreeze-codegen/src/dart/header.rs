//! File header code generation.

use crate::document::DocumentWriter;
use crate::options::GeneratorOptions;

/// Generator for the import and `part` directives at the top of the file.
pub struct HeaderGenerator<'a> {
    options: &'a GeneratorOptions,
}

impl<'a> HeaderGenerator<'a> {
    /// Creates a new header generator.
    #[must_use]
    pub fn new(options: &'a GeneratorOptions) -> Self {
        Self { options }
    }

    /// Writes the header, without a trailing newline.
    pub fn generate(&self, writer: &mut DocumentWriter) {
        let base = &self.options.file_base_name;
        let ext = &self.options.extension;

        writer.push_str(&format!("import '{}';\n", self.options.import_package));
        writer.push_str(&format!("part '{base}.freezed.{ext}';\n"));
        writer.push_str(&format!("part '{base}.g.{ext}';"));
    }
}
