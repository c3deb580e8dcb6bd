// ATS résumé generation.
// Implements: field normalization, skill classification, summary synthesis,
// per-section block builders and document assembly.
// Pure and synchronous up to serialization; see assembler for the async edge.

pub mod assembler;
pub mod dates;
pub mod handlers;
pub mod normalize;
pub mod sections;
pub mod skills;
pub mod summary;
