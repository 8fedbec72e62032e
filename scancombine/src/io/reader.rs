//! Reading scanned input PDFs.
//!
//! A [`SourceDocument`] wraps a parsed PDF together with its page-number
//! lookup table. Pages are addressed by 1-based page number and resolved to
//! [`PageHandle`]s, which pair the page's object id with its effective media
//! box. Resolving a page never mutates the document.

use lopdf::{Document, Object, ObjectId};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{CombineError, Result};

/// A page's bounding rectangle in PDF points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaBox {
    /// Lower-left x coordinate.
    pub llx: f32,
    /// Lower-left y coordinate.
    pub lly: f32,
    /// Upper-right x coordinate.
    pub urx: f32,
    /// Upper-right y coordinate.
    pub ury: f32,
}

impl MediaBox {
    /// US Letter, the fallback when a page declares no media box at all.
    pub fn letter() -> Self {
        Self {
            llx: 0.0,
            lly: 0.0,
            urx: 612.0,
            ury: 792.0,
        }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f32 {
        self.urx - self.llx
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f32 {
        self.ury - self.lly
    }

    /// Convert to a PDF array object.
    pub(crate) fn to_object(self) -> Object {
        Object::Array(vec![
            Object::Real(self.llx),
            Object::Real(self.lly),
            Object::Real(self.urx),
            Object::Real(self.ury),
        ])
    }

    fn from_object(document: &Document, object: &Object) -> Option<Self> {
        let resolved = match object {
            Object::Reference(id) => document.get_object(*id).ok()?,
            other => other,
        };
        let Object::Array(values) = resolved else {
            return None;
        };
        if values.len() != 4 {
            return None;
        }

        let mut coords = [0.0_f32; 4];
        for (slot, value) in coords.iter_mut().zip(values) {
            *slot = number(document, value)?;
        }
        Some(Self {
            llx: coords[0],
            lly: coords[1],
            urx: coords[2],
            ury: coords[3],
        })
    }
}

/// Resolve a numeric PDF object, following at most one reference.
fn number(document: &Document, object: &Object) -> Option<f32> {
    match object {
        Object::Integer(value) => Some(*value as f32),
        Object::Real(value) => Some(*value),
        Object::Reference(id) => match document.get_object(*id).ok()? {
            Object::Integer(value) => Some(*value as f32),
            Object::Real(value) => Some(*value),
            _ => None,
        },
        _ => None,
    }
}

/// Look up a page attribute, following PDF inheritance through the page's
/// `Parent` chain. The walk is bounded; real page trees are shallow.
pub(crate) fn inherited_page_entry<'a>(
    document: &'a Document,
    page_id: ObjectId,
    key: &[u8],
) -> Option<&'a Object> {
    let mut current = page_id;
    for _ in 0..32 {
        let dict = document.get_dictionary(current).ok()?;
        if let Ok(value) = dict.get(key) {
            return Some(value);
        }
        current = dict.get(b"Parent").and_then(Object::as_reference).ok()?;
    }
    None
}

/// A read-only reference to one page of a [`SourceDocument`].
///
/// Never outlives the document it came from.
#[derive(Debug, Clone, Copy)]
pub struct PageHandle<'a> {
    document: &'a Document,
    id: ObjectId,
    media_box: MediaBox,
}

impl<'a> PageHandle<'a> {
    /// The page's effective bounding rectangle.
    pub fn media_box(&self) -> MediaBox {
        self.media_box
    }

    pub(crate) fn document(&self) -> &'a Document {
        self.document
    }

    pub(crate) fn id(&self) -> ObjectId {
        self.id
    }
}

/// A scanned input PDF, opened once and read page by page.
#[derive(Debug)]
pub struct SourceDocument {
    document: Document,
    path: PathBuf,
    pages: BTreeMap<u32, ObjectId>,
    page_count: u32,
}

impl SourceDocument {
    /// Open the PDF at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CombineError::OpenFailed`] if the file is missing,
    /// unreadable, encrypted, or not parsable as a PDF. A valid document
    /// with zero pages opens successfully.
    pub fn open(path: &Path) -> Result<Self> {
        let document = Document::load(path).map_err(|err| {
            log::debug!("failed to load {}: {err}", path.display());
            CombineError::open_failed(path)
        })?;

        if document.trailer.get(b"Encrypt").is_ok() {
            log::debug!("{} is encrypted", path.display());
            return Err(CombineError::open_failed(path));
        }

        let source = Self::from_document(document, path.to_path_buf());
        log::debug!(
            "opened {} ({} pages)",
            source.path.display(),
            source.page_count
        );
        Ok(source)
    }

    pub(crate) fn from_document(document: Document, path: PathBuf) -> Self {
        let pages = document.get_pages();
        let page_count = pages.len() as u32;
        Self {
            document,
            path,
            pages,
            page_count,
        }
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Path the document was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve a 1-based page number to a handle.
    ///
    /// Returns `None` for numbers outside `1..=page_count`.
    pub fn page(&self, number: u32) -> Option<PageHandle<'_>> {
        let id = *self.pages.get(&number)?;
        let media_box = inherited_page_entry(&self.document, id, b"MediaBox")
            .and_then(|object| MediaBox::from_object(&self.document, object))
            .unwrap_or_else(MediaBox::letter);

        Some(PageHandle {
            document: &self.document,
            id,
            media_box,
        })
    }

    /// Highest object id in use.
    pub(crate) fn max_id(&self) -> u32 {
        self.document.max_id
    }

    /// Move every object id at or above `starting_id`, so this document's
    /// id range is disjoint from another document loaded alongside it.
    /// Must be called before any page handle is resolved.
    pub(crate) fn shift_object_ids(&mut self, starting_id: u32) {
        self.document.renumber_objects_with(starting_id);
        self.pages = self.document.get_pages();
    }
}
