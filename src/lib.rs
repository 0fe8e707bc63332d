//! Exact-match phrase dictionary over a balanced ternary trie.
//!
//! This crate builds an immutable byte-keyed set from a newline-delimited
//! dictionary buffer and answers three questions about it: is this key
//! present, what value (if any) rides along with it, and which known phrases
//! occur in a piece of running text. Lookups walk a ternary search tree laid
//! out in one flat arena; the greedy scanner probes every word position with
//! its widest n-gram first, so `"new york"` wins over `"new"` wherever both
//! are known.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌────────────┐     ┌────────────┐
//! │  parse.rs  │────▶│  tree.rs   │◀────│  scan.rs   │
//! │ (dictionary│     │ (balanced  │     │ (greedy    │
//! │   records) │     │  ternary   │     │  n-gram    │
//! │            │     │   trie)    │     │  windows)  │
//! └────────────┘     └────────────┘     └────────────┘
//!        │                 │                  │
//!        ▼                 ▼                  ▼
//! ┌──────────────────────────────────────────────────┐
//! │                      set.rs                      │
//! │    (PhraseSet - owns the tree and answers        │
//! │     contains / get / find_all_matches)           │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! `tokenize.rs` slices scan text into word ranges and `shape.rs` carries
//! the text-or-bytes tag across the API boundary.
//!
//! # Input shapes
//!
//! Every query enters as either text or raw bytes ([`Query`]), decided once
//! when the argument crosses the boundary, and every result comes back in
//! the same shape ([`Hit`]). Byte queries never pay a UTF-8 check; text
//! results decode lossily when the stored bytes are not valid UTF-8.
//!
//! # Usage
//!
//! ```
//! use tupaia::{Fetched, Hit, PhraseSet};
//!
//! let set = PhraseSet::new("new york\tNYC\nnew jersey\nyork");
//!
//! assert!(set.contains("new york"));
//! assert_eq!(set.get("new york"), Fetched::Value(Hit::Text("NYC".into())));
//!
//! let hits = set.find_all_matches("flights to new york and new jersey", 2)?;
//! assert_eq!(
//!     hits,
//!     vec![
//!         Hit::Text("new york".into()),
//!         Hit::Text("york".into()),
//!         Hit::Text("new jersey".into()),
//!     ]
//! );
//! # Ok::<(), tupaia::ScanError>(())
//! ```

// Module declarations
mod parse;
mod scan;
mod set;
mod shape;
mod tokenize;
mod tree;
mod types;

// Re-exports for public API
pub use set::PhraseSet;
pub use shape::{Hit, Query};
pub use types::{Fetched, ScanError};
