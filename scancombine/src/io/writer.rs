//! Writing the combined output PDF.
//!
//! A [`PdfSink`] accumulates pages into a new document, one
//! begin/draw/end cycle per page, and persists the result on [`close`].
//! Until `close` succeeds, the file at the output location is not a valid
//! document; a canceled run calls [`discard`] instead, which removes it.
//!
//! [`close`]: PdfSink::close
//! [`discard`]: PdfSink::discard

use lopdf::{Dictionary, Document, Object, ObjectId, dictionary};
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{CombineError, Result};
use crate::io::reader::{MediaBox, PageHandle, inherited_page_entry};

/// Page-accumulating destination for the combined document.
#[derive(Debug)]
pub struct PdfSink {
    path: PathBuf,
    document: Document,
    pages_id: ObjectId,
    page_ids: Vec<ObjectId>,
    current: Option<(ObjectId, Dictionary)>,
}

impl PdfSink {
    /// Create the output file and an empty document behind it.
    ///
    /// `last_reserved_id` is the highest object id in use across the input
    /// documents; the sink allocates its own ids above it so that source
    /// objects can be copied in under their original ids.
    ///
    /// # Errors
    ///
    /// Returns [`CombineError::CreateFailed`] if the file cannot be created.
    pub fn open(path: &Path, last_reserved_id: u32) -> Result<Self> {
        File::create(path).map_err(|err| {
            log::debug!("failed to create {}: {err}", path.display());
            CombineError::create_failed(path)
        })?;

        let mut document = Document::with_version("1.5");
        document.max_id = last_reserved_id;
        let pages_id = document.new_object_id();

        Ok(Self {
            path: path.to_path_buf(),
            document,
            pages_id,
            page_ids: Vec::new(),
            current: None,
        })
    }

    /// Start a new output page with the given bounding rectangle.
    pub fn begin_page(&mut self, media_box: MediaBox) {
        let id = self.document.new_object_id();
        let dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => media_box.to_object(),
        };
        self.current = Some((id, dict));
    }

    /// Copy a source page's content into the page begun by [`begin_page`].
    ///
    /// Copies every entry of the source page dictionary except its tree
    /// linkage, materializes attributes the page inherited from its old
    /// parent chain, and pulls every transitively referenced object into the
    /// output document.
    ///
    /// [`begin_page`]: PdfSink::begin_page
    pub fn draw_page(&mut self, page: &PageHandle<'_>) {
        let Some((_, dict)) = self.current.as_mut() else {
            return;
        };

        let source = page.document();
        let Ok(source_dict) = source.get_dictionary(page.id()) else {
            return;
        };

        let mut copied = Vec::new();
        for (key, value) in source_dict.iter() {
            if let b"Type" | b"Parent" | b"MediaBox" = key.as_slice() {
                continue;
            }
            dict.set(key.clone(), value.clone());
            copied.push(value.clone());
        }

        // The output page has a fresh parent, so inherited attributes must
        // be written onto the page itself.
        for key in [b"Resources".as_slice(), b"Rotate".as_slice()] {
            if !dict.has(key)
                && let Some(value) = inherited_page_entry(source, page.id(), key)
            {
                dict.set(key.to_vec(), value.clone());
                copied.push(value.clone());
            }
        }

        for value in &copied {
            copy_references(&mut self.document, source, value);
        }
    }

    /// Commit the current page to the sink.
    pub fn end_page(&mut self) {
        if let Some((id, dict)) = self.current.take() {
            self.document.objects.insert(id, Object::Dictionary(dict));
            self.page_ids.push(id);
            log::debug!("committed output page {}", self.page_ids.len());
        }
    }

    /// Number of pages committed so far.
    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Assemble the page tree and persist the document.
    ///
    /// # Errors
    ///
    /// Returns [`CombineError::CreateFailed`] if the document cannot be
    /// written at the output location.
    pub fn close(mut self) -> Result<()> {
        let kids: Vec<Object> = self
            .page_ids
            .iter()
            .map(|&id| Object::Reference(id))
            .collect();
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => self.page_ids.len() as i64,
        };
        self.document
            .objects
            .insert(self.pages_id, Object::Dictionary(pages));

        let catalog_id = self.document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.document.trailer.set("Root", catalog_id);

        self.document.compress();
        self.document.renumber_objects();

        self.document.save(&self.path).map_err(|err| {
            log::debug!("failed to save {}: {err}", self.path.display());
            CombineError::create_failed(&self.path)
        })?;
        log::debug!(
            "closed {} with {} pages",
            self.path.display(),
            self.page_ids.len()
        );
        Ok(())
    }

    /// Remove whatever was written at the output location. Best effort; a
    /// deletion failure is logged and swallowed.
    pub fn discard(self) {
        if let Err(err) = std::fs::remove_file(&self.path) {
            log::debug!(
                "could not remove partial output {}: {err}",
                self.path.display()
            );
        }
    }
}

/// Walk an object and copy every object it references from `source` into
/// `target`, recursively, keeping the original ids. Ids already present in
/// `target` are left alone.
fn copy_references(target: &mut Document, source: &Document, object: &Object) {
    match object {
        Object::Reference(id) => {
            if !target.objects.contains_key(id)
                && let Ok(referenced) = source.get_object(*id)
            {
                target.objects.insert(*id, referenced.clone());
                copy_references(target, source, referenced);
            }
        }
        Object::Dictionary(dict) => {
            for (_, value) in dict.iter() {
                copy_references(target, source, value);
            }
        }
        Object::Array(values) => {
            for value in values {
                copy_references(target, source, value);
            }
        }
        Object::Stream(stream) => {
            copy_references(target, source, &Object::Dictionary(stream.dict.clone()));
        }
        _ => {}
    }
}
