//! HTML parser for the bestsellers listing page.

use crate::amazon::models::Listing;
use crate::amazon::selectors::bestsellers;
use anyhow::{Context, Result};
use scraper::{ElementRef, Html};
use tracing::{debug, trace};

/// Parser for the bestsellers listing page.
#[derive(Default)]
pub struct Parser;

impl Parser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses the bestsellers listing HTML into structured data.
    ///
    /// Listings appear in document order. Items without a price or an
    /// author are skipped; missing link structure is an error.
    pub fn parse_bestsellers(&self, html: &str) -> Result<Vec<Listing>> {
        let document = Html::parse_document(html);

        let mut listings = Vec::new();

        for element in document.select(&bestsellers::ITEM) {
            if let Some(listing) = self.parse_item(element)? {
                trace!("Parsed listing: {}", listing.title);
                listings.push(listing);
            }
        }

        debug!("Parsed {} listings", listings.len());

        Ok(listings)
    }

    /// Parses a single bestseller item.
    fn parse_item(&self, element: ElementRef) -> Result<Option<Listing>> {
        // Items without a visible price are skipped
        let price = match element.select(&bestsellers::PRICE).next() {
            Some(e) => e.text().collect::<String>().trim().to_string(),
            None => return Ok(None),
        };

        let link = element
            .select(&bestsellers::LINK)
            .next()
            .context("Bestseller item has no product link")?;

        let href = link
            .value()
            .attr("href")
            .context("Product link has no href")?
            .trim()
            .to_string();

        // The title is carried by the cover image alt text
        let title = link
            .select(&bestsellers::COVER)
            .next()
            .and_then(|img| img.value().attr("alt"))
            .context("Product link has no cover image alt text")?
            .trim()
            .to_string();

        // Some items carry no author credit; those are skipped too
        let author = match element.select(&bestsellers::AUTHOR).next() {
            Some(e) => e.text().collect::<String>().trim().to_string(),
            None => return Ok(None),
        };

        Ok(Some(Listing { price, title, author, link: href }))
    }
}
