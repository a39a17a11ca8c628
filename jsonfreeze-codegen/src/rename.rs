//! Text-level class renaming.
//!
//! These functions work on any document text, including text edited by hand
//! after generation, with no symbol table. They rewrite:
//! - `class`, `factory` and `fromJson` followed by whitespace and the name
//! - `_<Name>` (backing class)
//! - `$<Name>` and `$<Name>FromJson` (generated mixin and helper)
//!
//! Each match must be followed by a character that cannot continue a Dart
//! identifier, so renaming `User` leaves `UserDetail` and `User$` alone. Field type references (`User?`, `List<User>?`) are not
//! rewritten; use [`GeneratedDocument::rename_class`] to keep those in sync.
//!
//! [`GeneratedDocument::rename_class`]: crate::document::GeneratedDocument::rename_class

use crate::error::CodegenError;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static CLASS_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bclass\s+([\w$]+)").expect("class pattern is valid"));

/// Character after a matched name, or the end of the text. Re-emitted as-is.
const NAME_END: &str = r"(?P<end>[^\w$]|\z)";

/// Renames a class throughout `document` by pattern substitution.
///
/// # Errors
/// Returns `CodegenError::Pattern` if a pattern built from `old` cannot be
/// compiled (for example when it exceeds the regex size limit).
pub fn rename_in_text(document: &str, old: &str, new: &str) -> Result<String, CodegenError> {
    if old.is_empty() || old == new {
        return Ok(document.to_string());
    }

    let escaped = regex::escape(old);
    let keyword = Regex::new(&format!(
        r"\b(class|factory|fromJson)(\s+){escaped}{NAME_END}"
    ))?;
    let backing = Regex::new(&format!(r"_{escaped}{NAME_END}"))?;
    let generated = Regex::new(&format!(r"\${escaped}(FromJson)?{NAME_END}"))?;

    let text = keyword.replace_all(document, |caps: &Captures<'_>| {
        format!("{}{}{new}{}", &caps[1], &caps[2], &caps["end"])
    });
    let text = backing.replace_all(&text, |caps: &Captures<'_>| {
        format!("_{new}{}", &caps["end"])
    });
    let text = generated.replace_all(&text, |caps: &Captures<'_>| {
        let suffix = caps.get(1).map_or("", |m| m.as_str());
        format!("${new}{suffix}{}", &caps["end"])
    });

    Ok(text.into_owned())
}

/// Returns the names of every `class <Name>` declaration, in text order.
#[must_use]
pub fn class_names_in(document: &str) -> Vec<String> {
    CLASS_DECLARATION
        .captures_iter(document)
        .map(|caps| caps[1].to_string())
        .collect()
}
