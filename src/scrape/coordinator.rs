//! Scrape coordinator - main run orchestration
//!
//! The control flow is strictly sequential: fetch the root page, collect
//! every hyperlink target, then for each target fetch the page, extract each
//! product card, fan records out by colour, and append them unless an exact
//! duplicate already exists. All accumulated records are returned at the end
//! in discovery order.

use crate::extract::{extract_product, Selectors};
use crate::product::ProductRecord;
use crate::scrape::{build_http_client, fetch_page};
use crate::url::{to_absolute_url, BASE_URL, ROOT_URL};
use crate::Result;
use chrono::{Local, NaiveDate};
use reqwest::Client;
use scraper::{ElementRef, Html};

/// Sequential scraper that accumulates product records across pages
pub struct Scraper {
    client: Client,
    selectors: Selectors,
    root_url: String,
    base_url: String,
    products: Vec<ProductRecord>,
}

impl Scraper {
    /// Creates a scraper for the given root and base URLs
    ///
    /// The binary always uses [`ROOT_URL`] and [`BASE_URL`] via
    /// [`run_scrape`]; the parameters exist so tests can point the scraper
    /// at a mock server.
    pub fn new(root_url: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: build_http_client()?,
            selectors: Selectors::new()?,
            root_url: root_url.into(),
            base_url: base_url.into(),
            products: Vec::new(),
        })
    }

    /// Runs the full scrape and returns the accumulated records
    ///
    /// Every link discovered on the root page is fetched in document order.
    /// Targets are collected without filtering or dedup, so a link that
    /// appears twice is fetched twice and a non-page target fails the run
    /// when its fetch fails.
    pub async fn run(mut self) -> Result<Vec<ProductRecord>> {
        tracing::info!("Fetching listing root: {}", self.root_url);
        let root_body = fetch_page(&self.client, &self.root_url).await?;
        let page_links = collect_page_links(&root_body, &self.selectors);
        tracing::info!("Discovered {} page links", page_links.len());

        let today = Local::now().date_naive();
        for page_link in page_links {
            let page_url = to_absolute_url(&self.base_url, &page_link);
            let body = fetch_page(&self.client, &page_url).await?;

            let before = self.products.len();
            self.process_page(&body, today);
            tracing::info!(
                "{}: {} new records",
                page_url,
                self.products.len() - before
            );
        }

        tracing::info!("Scrape complete: {} product records", self.products.len());
        Ok(self.products)
    }

    /// Extracts every product card on a page
    ///
    /// A page with no product cards simply contributes zero records.
    fn process_page(&mut self, html: &str, today: NaiveDate) {
        let document = Html::parse_document(html);
        let nodes: Vec<_> = document.select(&self.selectors.product).collect();
        for node in nodes {
            self.process_product(node, today);
        }
    }

    /// Fans one product node out into per-colour records
    ///
    /// Extraction of the shared fields happens once; the colour list then
    /// yields one record per entry. An empty colour list produces no records.
    fn process_product(&mut self, node: ElementRef<'_>, today: NaiveDate) {
        let fields = extract_product(node, &self.selectors, &self.base_url, today);

        for colour in &fields.colours {
            let record = ProductRecord {
                title: fields.title.clone(),
                price: fields.price,
                image_url: fields.image_url.clone(),
                capacity_mb: fields.capacity_mb.clone(),
                colour: colour.clone(),
                availability_text: fields.availability_text.clone(),
                is_available: fields.is_available,
                shipping_text: fields.shipping_text.clone(),
                shipping_date: fields.shipping_date.clone(),
            };

            // The first duplicate ends this product node entirely: remaining
            // colours are dropped, not skipped. Intentionally preserved
            // behavior, see DESIGN.md.
            if self.is_duplicate(&record) {
                tracing::debug!(
                    colour = %record.colour,
                    "Duplicate record, dropping remaining colours for this product"
                );
                return;
            }

            log_record(&record);
            self.products.push(record);
        }
    }

    /// Full structural comparison against every accumulated record
    fn is_duplicate(&self, candidate: &ProductRecord) -> bool {
        self.products.iter().any(|existing| existing == candidate)
    }
}

/// Collects every hyperlink target on the root page, in document order
///
/// No filtering and no dedup: mailto links, anchors and repeated targets all
/// come through, and an `<a>` without an href contributes an empty string.
fn collect_page_links(html: &str, selectors: &Selectors) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&selectors.link)
        .map(|anchor| anchor.value().attr("href").unwrap_or("").to_string())
        .collect()
}

/// Per-record debug output, one event per extracted record
fn log_record(record: &ProductRecord) {
    tracing::debug!(
        title = %record.title,
        price = record.price,
        image_url = %record.image_url,
        capacity_mb = %record.capacity_mb,
        colour = %record.colour,
        availability_text = %record.availability_text,
        is_available = record.is_available,
        shipping_text = %record.shipping_text,
        shipping_date = %record.shipping_date,
        "Extracted product record"
    );
}

/// Runs the full scrape against the fixed challenge-site URLs
pub async fn run_scrape() -> Result<Vec<ProductRecord>> {
    Scraper::new(ROOT_URL, BASE_URL)?.run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Extracted;

    fn test_scraper() -> Scraper {
        Scraper::new("http://localhost/smartphones", "http://localhost/").unwrap()
    }

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_collect_links_in_document_order_without_filtering() {
        let selectors = Selectors::new().unwrap();
        let html = r##"
            <html><body>
                <a href="smartphones?page=1">1</a>
                <a href="mailto:someone@example.com">mail</a>
                <a href="#top">top</a>
                <a>no href</a>
                <a href="smartphones?page=1">1 again</a>
            </body></html>
        "##;
        let links = collect_page_links(html, &selectors);
        assert_eq!(
            links,
            vec![
                "smartphones?page=1",
                "mailto:someone@example.com",
                "#top",
                "",
                "smartphones?page=1",
            ]
        );
    }

    #[test]
    fn test_page_without_products_yields_nothing() {
        let mut scraper = test_scraper();
        scraper.process_page("<html><body><p>Nothing here</p></body></html>", fixed_today());
        assert!(scraper.products.is_empty());
    }

    #[test]
    fn test_colour_fan_out_shares_fields() {
        let mut scraper = test_scraper();
        scraper.process_page(
            r#"<div class="product">
                <h3 class="product-name">Phone X</h3>
                <div class="text-lg">£399.99</div>
                <span data-colour="Red"></span>
                <span data-colour="Blue"></span>
            </div>"#,
            fixed_today(),
        );

        assert_eq!(scraper.products.len(), 2);
        assert_eq!(scraper.products[0].colour, "Red");
        assert_eq!(scraper.products[1].colour, "Blue");
        // All other fields are identical copies
        assert_eq!(
            scraper.products[0].title,
            Extracted::Known("Phone X".to_string())
        );
        assert_eq!(scraper.products[0].title, scraper.products[1].title);
        assert_eq!(scraper.products[0].price, scraper.products[1].price);
    }

    #[test]
    fn test_no_colours_no_records() {
        let mut scraper = test_scraper();
        scraper.process_page(
            r#"<div class="product">
                <h3 class="product-name">Phone X</h3>
            </div>"#,
            fixed_today(),
        );
        assert!(scraper.products.is_empty());
    }

    #[test]
    fn test_duplicate_aborts_remaining_colours_of_node() {
        let mut scraper = test_scraper();
        // A repeated colour makes the second Red an exact duplicate; Blue
        // comes after it in the list and must be dropped, not just the
        // duplicate skipped.
        scraper.process_page(
            r#"<div class="product">
                <h3 class="product-name">Phone X</h3>
                <span data-colour="Red"></span>
                <span data-colour="Red"></span>
                <span data-colour="Blue"></span>
            </div>"#,
            fixed_today(),
        );

        assert_eq!(scraper.products.len(), 1);
        assert_eq!(scraper.products[0].colour, "Red");
    }

    #[test]
    fn test_duplicate_across_pages_aborts_node() {
        let mut scraper = test_scraper();
        let first_page = r#"<div class="product">
            <h3 class="product-name">Phone X</h3>
            <span data-colour="Black"></span>
        </div>"#;
        // Same product listed again with an extra colour behind the
        // duplicate: the extra colour is lost to the early abort.
        let second_page = r#"<div class="product">
            <h3 class="product-name">Phone X</h3>
            <span data-colour="Black"></span>
            <span data-colour="Gold"></span>
        </div>"#;

        scraper.process_page(first_page, fixed_today());
        scraper.process_page(second_page, fixed_today());

        assert_eq!(scraper.products.len(), 1);
        assert_eq!(scraper.products[0].colour, "Black");
    }

    #[test]
    fn test_differing_field_is_not_a_duplicate() {
        let mut scraper = test_scraper();
        scraper.process_page(
            r#"<div class="product">
                <h3 class="product-name">Phone X</h3>
                <span class="product-capacity">64GB</span>
                <span data-colour="Black"></span>
            </div>
            <div class="product">
                <h3 class="product-name">Phone X</h3>
                <span class="product-capacity">128GB</span>
                <span data-colour="Black"></span>
            </div>"#,
            fixed_today(),
        );

        assert_eq!(scraper.products.len(), 2);
        assert_eq!(scraper.products[0].capacity_mb, Extracted::Known(64000.0));
        assert_eq!(scraper.products[1].capacity_mb, Extracted::Known(128000.0));
    }

    #[test]
    fn test_records_keep_discovery_order() {
        let mut scraper = test_scraper();
        scraper.process_page(
            r#"<div class="product">
                <h3 class="product-name">Phone A</h3>
                <span data-colour="Red"></span>
            </div>
            <div class="product">
                <h3 class="product-name">Phone B</h3>
                <span data-colour="Blue"></span>
            </div>"#,
            fixed_today(),
        );

        let titles: Vec<String> = scraper
            .products
            .iter()
            .map(|p| p.title.to_string())
            .collect();
        assert_eq!(titles, vec!["Phone A", "Phone B"]);
    }
}
