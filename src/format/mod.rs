//! Console output rendering for bestseller listings.

use crate::amazon::Listing;

/// Formats a single listing as a two-line text block.
pub fn format_listing(listing: &Listing) -> String {
    format!("{} {} {}\n{}", listing.title, listing.author, listing.price, listing.link)
}

/// Formats listings one block per entry, separated by blank lines.
pub fn format_listings(listings: &[Listing]) -> String {
    if listings.is_empty() {
        return "No listings found.".to_string();
    }

    listings.iter().map(format_listing).collect::<Vec<_>>().join("\n\n")
}
