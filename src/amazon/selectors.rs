//! CSS selectors for Amazon HTML parsing.
//!
//! This file contains all CSS selectors used for parsing the
//! bestsellers listing page. Update this file when Amazon changes
//! their HTML structure.
//!
//! **Update process**: When parsing fails, capture HTML sample,
//! update selectors, and add test fixture.

use scraper::Selector;
use std::sync::LazyLock;

/// Selectors for the bestsellers listing page.
pub mod bestsellers {
    use super::*;

    /// Bestseller item container.
    pub static ITEM: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".zg_itemWrapper").unwrap());

    /// Product link inside an item.
    pub static LINK: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".a-link-normal").unwrap());

    /// Cover image inside the product link; the title is its alt text.
    pub static COVER: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").unwrap());

    /// Price text.
    pub static PRICE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".a-size-base.a-color-price").unwrap());

    /// Author credit link.
    pub static AUTHOR: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".a-size-small.a-link-child").unwrap());
}
