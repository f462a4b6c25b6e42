//! Validated inputs for the mutating operations.
//!
//! Each operation takes a dedicated input type that can only be constructed from valid data,
//! so a request to the store is never issued for input the user still has to fix.
//! Destructive tag operations additionally require a [`Confirmed`] wrapper.

use crate::vocabulary::Tags;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("No vocabulary with the word '{0}'")]
    UnknownWord(String),
    #[error("Nothing to change for '{0}'")]
    NothingToEdit(String),
    #[error("The new tag name must differ from '{0}'")]
    UnchangedTag(String),
}

fn non_empty(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::Empty { field })
    } else {
        Ok(value.to_string())
    }
}

/// A new vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVocabulary {
    word: String,
    english: String,
    farsi: String,
    tags: Tags,
}

impl NewVocabulary {
    pub fn new(word: &str, english: &str, farsi: &str, tags: Tags) -> Result<Self, ValidationError> {
        Ok(Self {
            word: non_empty("word", word)?,
            english: non_empty("english", english)?,
            farsi: non_empty("farsi", farsi)?,
            tags,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn english(&self) -> &str {
        &self.english
    }

    pub fn farsi(&self) -> &str {
        &self.farsi
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }
}

/// Changes to an existing entry, unset fields keep their current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyEdit {
    word: String,
    english: Option<String>,
    farsi: Option<String>,
    tags: Option<Tags>,
}

impl VocabularyEdit {
    pub fn new(word: &str) -> Self {
        Self {
            word: word.trim().to_string(),
            english: None,
            farsi: None,
            tags: None,
        }
    }

    pub fn english(mut self, english: &str) -> Self {
        self.english = Some(english.trim().to_string());
        self
    }

    pub fn farsi(mut self, farsi: &str) -> Self {
        self.farsi = Some(farsi.trim().to_string());
        self
    }

    pub fn tags(mut self, tags: Tags) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn new_english(&self) -> Option<&str> {
        self.english.as_deref()
    }

    pub fn new_farsi(&self) -> Option<&str> {
        self.farsi.as_deref()
    }

    pub fn new_tags(&self) -> Option<&Tags> {
        self.tags.as_ref()
    }

    /// Checks the fields on their own. Whether the word exists is up to the caller.
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_empty("word", &self.word)?;
        if let Some(english) = &self.english {
            non_empty("english", english)?;
        }
        if let Some(farsi) = &self.farsi {
            non_empty("farsi", farsi)?;
        }
        if self.english.is_none() && self.farsi.is_none() && self.tags.is_none() {
            return Err(ValidationError::NothingToEdit(self.word.clone()));
        }
        Ok(())
    }
}

/// Raw CSV text with the columns `word,eng,fa,tags`.
///
/// The content is passed to the store as is, only emptiness is checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkImport {
    csv: String,
}

impl BulkImport {
    pub fn new(csv: impl Into<String>) -> Result<Self, ValidationError> {
        let csv = csv.into();
        non_empty("csv", &csv)?;
        Ok(Self { csv })
    }

    pub fn csv(&self) -> &str {
        &self.csv
    }
}

/// Renames a tag on every record carrying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRename {
    old: String,
    new: String,
}

impl TagRename {
    pub fn new(old: &str, new: &str) -> Result<Self, ValidationError> {
        let old = non_empty("old tag", old)?;
        let new = non_empty("new tag", new)?;
        if old == new {
            return Err(ValidationError::UnchangedTag(old));
        }
        Ok(Self { old, new })
    }

    pub fn old(&self) -> &str {
        &self.old
    }

    pub fn new_name(&self) -> &str {
        &self.new
    }
}

/// Removes a tag from every record carrying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDeletion {
    tag: String,
}

impl TagDeletion {
    pub fn new(tag: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            tag: non_empty("tag", tag)?,
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// An input the user has explicitly confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmed<T>(T);

impl<T> std::ops::Deref for Confirmed<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Implemented by inputs that need confirmation before they can be sent.
pub trait Confirm: Sized {
    /// The question to put to the user.
    fn prompt(&self) -> String;

    /// Call only after the user has agreed to [`Confirm::prompt`].
    fn confirm(self) -> Confirmed<Self> {
        Confirmed(self)
    }
}

impl Confirm for TagRename {
    fn prompt(&self) -> String {
        format!(
            "Rename tag '{}' to '{}' on every vocabulary?",
            self.old, self.new
        )
    }
}

impl Confirm for TagDeletion {
    fn prompt(&self) -> String {
        format!("Delete tag '{}' from every vocabulary?", self.tag)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn trims_new_vocabulary() {
        let new = NewVocabulary::new(" star ", "star\n", " ستاره", Tags::new()).unwrap();
        assert_eq!(new.word(), "star");
        assert_eq!(new.english(), "star");
        assert_eq!(new.farsi(), "ستاره");
        assert!(new.tags().is_empty());
    }

    #[test]
    fn rejects_blank_fields() {
        let err = NewVocabulary::new("star", "  ", "ستاره", Tags::new()).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "english" });
        let err = NewVocabulary::new("", "star", "ستاره", Tags::new()).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "word" });
    }

    #[test]
    fn validates_edit() {
        assert!(VocabularyEdit::new("sky").english("heaven").validate().is_ok());
        assert!(VocabularyEdit::new("sky").tags(Tags::new()).validate().is_ok());
        assert_eq!(
            VocabularyEdit::new("sky").farsi(" ").validate(),
            Err(ValidationError::Empty { field: "farsi" })
        );
        assert_eq!(
            VocabularyEdit::new("sky").validate(),
            Err(ValidationError::NothingToEdit("sky".to_string()))
        );
    }

    #[test]
    fn keeps_csv_untrimmed() {
        let import = BulkImport::new("word,eng,fa,tags\nsky,sky,آسمان,\n").unwrap();
        assert!(import.csv().ends_with('\n'));
        assert_eq!(
            BulkImport::new(" \n "),
            Err(ValidationError::Empty { field: "csv" })
        );
    }

    #[test]
    fn rejects_unchanged_rename() {
        assert_eq!(
            TagRename::new("nature", " nature "),
            Err(ValidationError::UnchangedTag("nature".to_string()))
        );
        assert_eq!(
            TagRename::new("nature", ""),
            Err(ValidationError::Empty { field: "new tag" })
        );
        let rename = TagRename::new("nature", "natural").unwrap();
        assert_eq!(rename.old(), "nature");
        assert_eq!(rename.new_name(), "natural");
    }

    #[test]
    fn confirms_tag_deletion() {
        let deletion = TagDeletion::new("nature").unwrap();
        assert_eq!(deletion.prompt(), "Delete tag 'nature' from every vocabulary?");
        let confirmed = deletion.confirm();
        assert_eq!(confirmed.tag(), "nature");
    }
}
