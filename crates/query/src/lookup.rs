//! Identifier lookup over entity collections.

use catalog::{Movie, Screening, Theater};

/// Anything addressable by its string identifier.
///
/// Implemented by all three entity types so lookup and grouping code can
/// be written once.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Movie {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Theater {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Screening {
    fn id(&self) -> &str {
        &self.id
    }
}

/// First element whose identifier equals `id`, in collection order.
///
/// Identifiers are unique per collection, so "first" only matters if the
/// invariant is violated upstream; absence is `None`, never an error.
pub fn find_by_id<'a, T: Identified>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}
