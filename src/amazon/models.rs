//! Data models for bestseller listings.

/// One entry extracted from the bestsellers listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// Price text as shown on the page (e.g. "$14.99")
    pub price: String,
    /// Book title, taken from the cover image alt text
    pub title: String,
    /// Author credit
    pub author: String,
    /// Product link href
    pub link: String,
}
