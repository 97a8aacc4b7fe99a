//! Parallel encoding of independent values.
//!
//! Each item gets its own session and its own tree; nothing is shared
//! between items, so the rayon pool can run them in any order.
use rayon::prelude::*;

use crate::error::Result;
use crate::write::{Write, Writer};

/// Encode every item with `writer`. Output order matches `items`.
pub fn encode_batch<T>(items: &[T], writer: &Writer) -> Result<Vec<String>>
where
    T: Write + Sync,
{
    items.par_iter().map(|item| writer.text(item)).collect()
}
