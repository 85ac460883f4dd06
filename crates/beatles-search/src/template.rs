//! Output templates with named record placeholders.
//!
//! Templates use brace placeholders such as `{title} - {vocals}, {year}`.
//! `{{` and `}}` produce literal braces. Placeholder names are checked when
//! the template is compiled, so rendering can never fail.

use std::fmt;
use std::str::FromStr;

use beatles_core::Record;

use crate::error::TemplateError;

/// The template used when none is configured.
pub const DEFAULT_TEMPLATE: &str = "{title} - {vocals}, {year}";

/// A record field that can appear in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Contributors,
    Group,
    Vocals,
    Year,
    Notes,
}

impl Field {
    pub const ALL: [Self; 6] = [
        Self::Title,
        Self::Contributors,
        Self::Group,
        Self::Vocals,
        Self::Year,
        Self::Notes,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Contributors => "contributors",
            Self::Group => "group",
            Self::Vocals => "vocals",
            Self::Year => "year",
            Self::Notes => "notes",
        }
    }

    /// Resolve a placeholder name. The song table's own column names
    /// (`songwriters`, `album`) are accepted as aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "songwriters" => Some(Self::Contributors),
            "album" => Some(Self::Group),
            _ => Self::ALL.into_iter().find(|field| field.name() == name),
        }
    }

    pub fn value(self, record: &Record) -> &str {
        match self {
            Self::Title => &record.title,
            Self::Contributors => &record.contributors,
            Self::Group => &record.group,
            Self::Vocals => &record.vocals,
            Self::Year => &record.year,
            Self::Notes => &record.notes,
        }
    }

    fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|f| f.name())
            .chain(["songwriters", "album"])
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// A compiled output template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            match c {
                '{' if chars.next_if(|&(_, next)| next == '{').is_some() => literal.push('{'),
                '}' if chars.next_if(|&(_, next)| next == '}').is_some() => literal.push('}'),
                '}' => return Err(TemplateError::UnmatchedBrace(offset)),
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, '{')) | None => {
                                return Err(TemplateError::UnclosedPlaceholder(offset))
                            }
                            Some((_, ch)) => name.push(ch),
                        }
                    }
                    if name.is_empty() {
                        return Err(TemplateError::EmptyPlaceholder(offset));
                    }
                    let field = Field::from_name(&name).ok_or_else(|| {
                        TemplateError::UnknownPlaceholder {
                            name: name.clone(),
                            valid: Field::valid_names(),
                        }
                    })?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(field));
                }
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The template text as configured.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn render(&self, record: &Record) -> String {
        let mut out = String::with_capacity(self.source.len() + record.title.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(field) => out.push_str(field.value(record)),
            }
        }
        out
    }
}

impl Default for Template {
    fn default() -> Self {
        Self {
            source: DEFAULT_TEMPLATE.to_string(),
            segments: vec![
                Segment::Field(Field::Title),
                Segment::Literal(" - ".to_string()),
                Segment::Field(Field::Vocals),
                Segment::Literal(", ".to_string()),
                Segment::Field(Field::Year),
            ],
        }
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
