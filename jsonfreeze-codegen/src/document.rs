//! Generated documents and their class symbol tables.
//!
//! While emitting, every place a class identifier is written is recorded as a
//! [`SymbolSpan`]. Renaming a class then rewrites exactly those byte ranges
//! instead of searching the text.

use crate::error::CodegenError;
use jsonfreeze_schema::ir::is_dart_identifier;
use std::ops::Range;

/// Syntactic role of a class reference in the generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// `class <Name>`
    Declaration,
    /// `with _$<Name>`
    Mixin,
    /// `const factory <Name>({`
    Constructor,
    /// `= _<Name>;`
    BackingClass,
    /// `factory <Name>.fromJson`
    FromJsonFactory,
    /// `_$<Name>FromJson(json)`
    FromJsonHelper,
    /// A field type such as `<Name>?` or `List<<Name>>?`.
    FieldType,
}

/// A byte range of the document text that holds a class identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSpan {
    /// Class referenced by the span.
    pub class: String,
    /// Role of the reference.
    pub kind: SymbolKind,
    /// Start offset in bytes.
    pub start: usize,
    /// Length in bytes.
    pub len: usize,
}

impl SymbolSpan {
    /// Returns the byte range of the span.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }
}

/// Text buffer that records class references as they are written.
#[derive(Debug, Default)]
pub struct DocumentWriter {
    text: String,
    symbols: Vec<SymbolSpan>,
}

impl DocumentWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends plain text.
    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    /// Appends a class identifier and records its span.
    pub fn push_symbol(&mut self, class: &str, kind: SymbolKind) {
        let start = self.text.len();
        self.text.push_str(class);
        self.symbols.push(SymbolSpan {
            class: class.to_string(),
            kind,
            start,
            len: class.len(),
        });
    }

    /// Returns the text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Finishes the document.
    #[must_use]
    pub fn finish(self, class_names: Vec<String>) -> GeneratedDocument {
        GeneratedDocument {
            text: self.text,
            class_names,
            symbols: self.symbols,
        }
    }
}

/// Output of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    text: String,
    class_names: Vec<String>,
    symbols: Vec<SymbolSpan>,
}

impl GeneratedDocument {
    /// Returns the document text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the document, returning its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// Returns the class identifiers in output order (root first).
    #[must_use]
    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    /// Returns every recorded class reference, in text order.
    #[must_use]
    pub fn symbols(&self) -> &[SymbolSpan] {
        &self.symbols
    }

    /// Returns the references to one class.
    pub fn references<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a SymbolSpan> + 'a {
        self.symbols.iter().filter(move |s| s.class == class)
    }

    /// Renames a class everywhere it is referenced.
    ///
    /// Only recorded spans are rewritten, so a class whose name is a substring
    /// of another class name is handled correctly. Returns the number of
    /// rewritten references.
    ///
    /// # Errors
    /// Returns `CodegenError` if `old` is not a generated class, `new` is not a
    /// valid identifier, or `new` is already used by another class.
    pub fn rename_class(&mut self, old: &str, new: &str) -> Result<usize, CodegenError> {
        let index = self
            .class_names
            .iter()
            .position(|n| n == old)
            .ok_or_else(|| CodegenError::unknown_class(old))?;

        if old == new {
            return Ok(0);
        }
        if !is_dart_identifier(new) {
            return Err(CodegenError::InvalidClassName {
                name: new.to_string(),
            });
        }
        if self.class_names.iter().any(|n| n == new) {
            return Err(CodegenError::DuplicateClassName {
                name: new.to_string(),
            });
        }

        let mut text = String::with_capacity(self.text.len());
        let mut cursor = 0;
        let mut rewritten = 0;

        for span in &mut self.symbols {
            let range = span.range();
            text.push_str(&self.text[cursor..range.start]);
            let start = text.len();
            if span.class == old {
                text.push_str(new);
                span.class = new.to_string();
                rewritten += 1;
            } else {
                text.push_str(&self.text[range.clone()]);
            }
            span.start = start;
            span.len = text.len() - start;
            cursor = range.end;
        }
        text.push_str(&self.text[cursor..]);

        self.text = text;
        self.class_names[index] = new.to_string();
        tracing::debug!(old, new, rewritten, "renamed class");
        Ok(rewritten)
    }
}
