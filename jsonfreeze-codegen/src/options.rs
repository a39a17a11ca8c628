//! Generator options and field modes.

use crate::error::CodegenError;
use jsonfreeze_schema::ir::to_pascal_case;
use std::fmt;
use std::str::FromStr;

/// File base name used when none is supplied.
pub const DEFAULT_FILE_BASE_NAME: &str = "your_name_model";

/// Serialization annotation package imported by every generated file.
pub const DEFAULT_IMPORT_PACKAGE: &str = "package:freezed_annotation/freezed_annotation.dart";

/// Extension of the generated source and its derived part files.
pub const DEFAULT_EXTENSION: &str = "dart";

/// Modifier placed in front of every generated field.
///
/// The field type is nullable in every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldMode {
    /// `final <Type>? name;`
    #[default]
    Final,
    /// `required <Type>? name;`
    Required,
    /// `<Type>? name;`
    Optional,
}

impl FieldMode {
    /// All modes in declaration order.
    pub const ALL: [FieldMode; 3] = [Self::Final, Self::Required, Self::Optional];

    /// Returns the text placed before the field type, including the trailing space.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Final => "final ",
            Self::Required => "required ",
            Self::Optional => "",
        }
    }

    /// Returns the mode keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Final => "final",
            Self::Required => "required",
            Self::Optional => "optional",
        }
    }
}

impl fmt::Display for FieldMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldMode {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "final" => Ok(Self::Final),
            "required" => Ok(Self::Required),
            "optional" => Ok(Self::Optional),
            other => Err(CodegenError::invalid_field_mode(other)),
        }
    }
}

/// Options controlling one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Base name of the generated file, used in the `part` directives.
    pub file_base_name: String,
    /// Field modifier mode.
    pub field_mode: FieldMode,
    /// Package imported at the top of the file.
    pub import_package: String,
    /// Extension of the generated file and its part files.
    pub extension: String,
}

impl GeneratorOptions {
    /// Creates options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            file_base_name: DEFAULT_FILE_BASE_NAME.to_string(),
            field_mode: FieldMode::default(),
            import_package: DEFAULT_IMPORT_PACKAGE.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Returns a builder starting from the defaults.
    #[must_use]
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    /// Returns the root class name, the PascalCase form of the file base name.
    #[must_use]
    pub fn root_class_name(&self) -> String {
        to_pascal_case(&self.file_base_name)
    }

    /// Returns the name of the generated file, e.g. `user_profile.dart`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.file_base_name, self.extension)
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for configuring generator options.
#[derive(Debug, Clone)]
pub struct GeneratorBuilder {
    options: GeneratorOptions,
}

impl GeneratorBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: GeneratorOptions::new(),
        }
    }

    /// Sets the file base name. Blank names keep the default.
    #[must_use]
    pub fn file_base_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        if !trimmed.is_empty() {
            self.options.file_base_name = trimmed.to_string();
        }
        self
    }

    /// Sets the field mode.
    #[must_use]
    pub fn field_mode(mut self, mode: FieldMode) -> Self {
        self.options.field_mode = mode;
        self
    }

    /// Sets the imported serialization package.
    #[must_use]
    pub fn import_package(mut self, package: impl Into<String>) -> Self {
        self.options.import_package = package.into();
        self
    }

    /// Sets the file extension.
    #[must_use]
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.options.extension = extension.into();
        self
    }

    /// Builds the options.
    #[must_use]
    pub fn build(self) -> GeneratorOptions {
        self.options
    }
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
