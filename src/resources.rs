//! Android `strings.xml` document model and pruning.
//!
//! A document is parsed once into its source text plus the byte spans of
//! its top-level `<string>` entries. Pruning removes entries as a separate
//! pass over that list, and serialization splices the retained spans back
//! together, so every node that is not a removed entry (comments,
//! `<plurals>`, `<string-array>`, nested markup inside kept entries)
//! survives verbatim.

use std::{fs, ops::Range, path::Path};

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::{error::Error, scanner::ReferenceSet};

const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>";

/// One `<string>` entry: its `name` attribute, if present, and the byte
/// span covering the element together with the text that trails it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringEntry {
    name: Option<String>,
    span: Range<usize>,
}

impl StringEntry {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// An in-memory strings.xml document.
#[derive(Debug)]
pub struct ResourceDocument {
    source: String,
    has_decl: bool,
    has_root: bool,
    entries: Vec<StringEntry>,
    pruned_spans: Vec<Range<usize>>,
}

impl ResourceDocument {
    /// Load and parse a strings.xml document from disk.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let source = fs::read_to_string(path)?;
        Self::parse(source)
    }

    /// Parse a strings.xml document from its full text.
    ///
    /// Fails if the document is not well-formed. A document with no root
    /// element or no `<string>` entries parses to an empty entry list.
    pub fn parse(source: impl Into<String>) -> Result<Self, Error> {
        let source = source.into();
        let mut reader = Reader::from_str(&source);

        let mut entries: Vec<StringEntry> = Vec::new();
        let mut has_decl = false;
        let mut has_root = false;
        let mut depth = 0usize;
        // Set right after an entry is recorded so that a directly following
        // text node is folded into its span. Tree-based removal drops an
        // element together with its tail, and the splice must match that.
        let mut awaiting_tail = false;

        loop {
            let start = reader.buffer_position() as usize;
            match reader.read_event()? {
                Event::Start(e) => {
                    if depth == 1 && e.name().as_ref() == b"string" {
                        let name = name_attribute(&e)?;
                        reader.read_to_end(e.name())?;
                        let end = reader.buffer_position() as usize;
                        entries.push(StringEntry {
                            name,
                            span: start..end,
                        });
                        awaiting_tail = true;
                        continue;
                    }
                    if depth == 0 {
                        has_root = true;
                    }
                    depth += 1;
                    awaiting_tail = false;
                }
                Event::Empty(e) => {
                    if depth == 1 && e.name().as_ref() == b"string" {
                        let name = name_attribute(&e)?;
                        let end = reader.buffer_position() as usize;
                        entries.push(StringEntry {
                            name,
                            span: start..end,
                        });
                        awaiting_tail = true;
                        continue;
                    }
                    if depth == 0 {
                        has_root = true;
                    }
                    awaiting_tail = false;
                }
                Event::End(_) => {
                    depth = depth.saturating_sub(1);
                    awaiting_tail = false;
                }
                Event::Text(_) => {
                    if awaiting_tail {
                        if let Some(last) = entries.last_mut() {
                            last.span.end = reader.buffer_position() as usize;
                        }
                        awaiting_tail = false;
                    }
                }
                Event::Decl(_) => {
                    has_decl = true;
                }
                Event::Eof => break,
                _ => awaiting_tail = false,
            }
        }

        Ok(Self {
            source,
            has_decl,
            has_root,
            entries,
            pruned_spans: Vec::new(),
        })
    }

    /// Number of `<string>` entries currently in the document.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Names of the current entries, in document order.
    pub fn entry_names(&self) -> impl Iterator<Item = Option<&str>> {
        self.entries.iter().map(StringEntry::name)
    }

    /// Remove every entry whose `name` is absent from `referenced`, and
    /// return the removed entries in document order.
    ///
    /// Entries without a `name` attribute never match the set and are
    /// always removed. Entries with duplicate names are evaluated
    /// independently.
    pub fn prune(&mut self, referenced: &ReferenceSet) -> Vec<StringEntry> {
        let (kept, removed): (Vec<_>, Vec<_>) = self
            .entries
            .drain(..)
            .partition(|entry| matches!(entry.name(), Some(name) if referenced.contains(name)));
        self.entries = kept;
        self.pruned_spans
            .extend(removed.iter().map(|entry| entry.span.clone()));
        removed
    }

    /// Serialize the document, splicing out pruned entries.
    ///
    /// An existing declaration header is preserved verbatim; a standard
    /// one is prepended when the source has a root element but no
    /// declaration.
    pub fn to_xml(&self) -> String {
        let mut spans: Vec<&Range<usize>> = self.pruned_spans.iter().collect();
        spans.sort_by_key(|span| span.start);

        let mut out = String::with_capacity(self.source.len() + XML_DECL.len() + 1);
        if !self.has_decl && self.has_root {
            out.push_str(XML_DECL);
            out.push('\n');
        }
        let mut pos = 0;
        for span in spans {
            out.push_str(&self.source[pos..span.start]);
            pos = span.end;
        }
        out.push_str(&self.source[pos..]);
        out
    }

    /// Rewrite the document at `path`, overwriting it.
    ///
    /// The output buffer is fully assembled before a single write, so a
    /// parse failure can never leave a partial file behind.
    pub fn write_to_path(&self, path: &Path) -> Result<(), Error> {
        fs::write(path, self.to_xml())?;
        Ok(())
    }
}

fn name_attribute(e: &BytesStart) -> Result<Option<String>, Error> {
    for attr in e.attributes().with_checks(false) {
        let attr = attr.map_err(|e| Error::InvalidResource(e.to_string()))?;
        if attr.key.as_ref() == b"name" {
            return Ok(Some(attr.unescape_value()?.to_string()));
        }
    }
    Ok(None)
}
