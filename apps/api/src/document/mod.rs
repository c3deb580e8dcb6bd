// Output document: an in-memory tree of sections, blocks and runs, and its
// WordprocessingML (.docx) packaging.
// Packaging is CPU-bound and runs inside tokio::task::spawn_blocking.

pub mod docx;
pub mod model;

pub use docx::{write_docx, DocxError, DOCX_MIME};
pub use model::{
    Alignment, Block, Border, Document, PageMargins, PageSetup, Run, Section, SectionKind,
    TabStop,
};
