//! Built-in document templates.
//!
//! Storing user templates is the host's business; [`Template`] derives serde traits so a host
//! can persist it however it likes.

use serde::{Deserialize, Serialize};

/// Category a template is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateCategory {
    /// Pseudo-category listing every template.
    AllTemplates,
    /// Plain starting points.
    Basic,
    /// Posts and articles.
    Blogging,
    /// READMEs and technical documentation.
    Developer,
    /// Templates saved by the user.
    User,
}

impl TemplateCategory {
    /// Every category, in sidebar order.
    pub const ALL: [TemplateCategory; 5] = [
        TemplateCategory::AllTemplates,
        TemplateCategory::Basic,
        TemplateCategory::Blogging,
        TemplateCategory::Developer,
        TemplateCategory::User,
    ];

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            TemplateCategory::AllTemplates => "All Templates",
            TemplateCategory::Basic => "Basic",
            TemplateCategory::Blogging => "Blogging",
            TemplateCategory::Developer => "Developer",
            TemplateCategory::User => "User",
        }
    }

    /// Whether `template` is listed under this category.
    pub fn contains(self, template: &Template) -> bool {
        self == TemplateCategory::AllTemplates || template.category == self
    }
}

/// A named document body that a new document can start from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Category the template belongs to.
    pub category: TemplateCategory,
    /// Display name, unique among the presets.
    pub name: String,
    /// Markdown body.
    pub document: String,
}

impl Template {
    /// Create a template.
    pub fn new(
        category: TemplateCategory,
        name: impl Into<String>,
        document: impl Into<String>,
    ) -> Self {
        Self {
            category,
            name: name.into(),
            document: document.into(),
        }
    }

    /// A user template, typically built from the current document.
    pub fn user(name: impl Into<String>, document: impl Into<String>) -> Self {
        Self::new(TemplateCategory::User, name, document)
    }
}

const NOTE_TAKING: &str = "# Notes\n\n## Subject 1\n\n- Note 1\n\n- Note 2\n\n- Note 3";

const BLOG_POST: &str = "# Title

## Subtitle

### Author

Start writing... maybe insert [some links](https://example.com)";

const README: &str = "# README

## About The Project

Lorem ipsum...

## Getting Started

Lorem ipsum...";

const DOCUMENTATION: &str = "# Feature Name

### Author

A paragraph describing the feature...

```
Example
block
of
code
```";

/// The built-in templates.
pub fn presets() -> Vec<Template> {
    vec![
        Template::new(TemplateCategory::Basic, "Empty", ""),
        Template::new(TemplateCategory::Basic, "Note Taking", NOTE_TAKING),
        Template::new(TemplateCategory::Blogging, "Blog Post", BLOG_POST),
        Template::new(TemplateCategory::Developer, "README.md", README),
        Template::new(TemplateCategory::Developer, "Documentation", DOCUMENTATION),
    ]
}

/// Look a preset up by exact name.
pub fn find(name: &str) -> Option<Template> {
    presets().into_iter().find(|t| t.name == name)
}
