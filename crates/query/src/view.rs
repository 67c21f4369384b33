//! Caller-held view state for the catalog table.
//!
//! Changing the page size or any filter resets the page to 1 so the caller
//! never renders a stale page against a reshaped sequence.

use pricebook_catalog::{Catalog, ChangeSet, ProductRecord};

use crate::filter::{filter, StockFilter};
use crate::page::paginate;

const DEFAULT_PAGE_SIZE: usize = 10;

/// Current filter/search/pagination selections of one catalog view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    stock: StockFilter,
    search: String,
    changed_only: bool,
    page: usize,
    page_size: usize,
}

/// Rendered rows plus pagination bookkeeping for one view pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView<'a> {
    pub rows: Vec<&'a ProductRecord>,
    pub page: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl Default for CatalogView {
    fn default() -> Self {
        Self {
            stock: StockFilter::Any,
            search: String::new(),
            changed_only: false,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn stock_filter(&self) -> StockFilter {
        self.stock
    }

    pub fn changed_only(&self) -> bool {
        self.changed_only
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_stock_filter(&mut self, stock: StockFilter) {
        self.stock = stock;
        self.page = 1;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_changed_only(&mut self, changed_only: bool) {
        self.changed_only = changed_only;
        self.page = 1;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Select a page; clamping to the real page count happens at render time.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Filter, search, and paginate in one pass.
    pub fn render<'a>(&self, catalog: &'a Catalog, changed: &ChangeSet) -> RenderedView<'a> {
        let filtered = filter(catalog, self.stock, &self.search, self.changed_only, changed);
        let page = paginate(&filtered, self.page, self.page_size);
        RenderedView {
            page: page.page,
            start_index: page.start_index,
            end_index: page.end_index,
            total_pages: page.total_pages,
            total_items: page.total_items,
            rows: page.items.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricebook_catalog::{PriceEntry, PriceHistory, StockStatus};

    fn record(i: usize) -> ProductRecord {
        ProductRecord {
            sku: format!("SKU-{i:03}"),
            name: format!("Product {i}"),
            description: String::new(),
            category: "General".into(),
            fulfillment_time: "2 days".into(),
            status: if i % 2 == 0 {
                StockStatus::InStock
            } else {
                StockStatus::OutOfStock
            },
            suppliers: vec!["Acme Imports".into()],
            main_image: String::new(),
            price_history: PriceHistory::seeded(PriceEntry::new("$1.00", "2025-01-01")),
            gallery: None,
            templates: None,
            videos: None,
        }
    }

    fn sample_catalog(n: usize) -> Catalog {
        Catalog::from_records((0..n).map(record).collect())
    }

    #[test]
    fn defaults_to_first_page_of_everything() {
        let catalog = sample_catalog(25);
        let view = CatalogView::new();
        let rendered = view.render(&catalog, &ChangeSet::new());
        assert_eq!(rendered.page, 1);
        assert_eq!(rendered.total_pages, 3);
        assert_eq!(rendered.rows.len(), 10);
    }

    #[test]
    fn changing_any_filter_resets_page() {
        let mut view = CatalogView::new();
        view.set_page(3);
        view.set_stock_filter(StockFilter::InStock);
        assert_eq!(view.page(), 1);

        view.set_page(2);
        view.set_search("mug");
        assert_eq!(view.page(), 1);

        view.set_page(2);
        view.set_changed_only(true);
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn changing_page_size_resets_page() {
        let mut view = CatalogView::new();
        view.set_page(3);
        view.set_page_size(25);
        assert_eq!(view.page(), 1);
        assert_eq!(view.page_size(), 25);
    }

    #[test]
    fn render_clamps_out_of_range_page() {
        let catalog = sample_catalog(25);
        let mut view = CatalogView::new();
        view.set_page(9);
        let rendered = view.render(&catalog, &ChangeSet::new());
        assert_eq!(rendered.page, 3);
        assert_eq!(rendered.rows.len(), 5);
    }

    #[test]
    fn changed_only_view_renders_only_the_change_set() {
        let catalog = sample_catalog(25);
        let mut view = CatalogView::new();
        view.set_changed_only(true);
        let changed = ChangeSet::from(["SKU-003".to_string(), "SKU-010".to_string()]);
        let rendered = view.render(&catalog, &changed);
        let skus: Vec<_> = rendered.rows.iter().map(|r| r.sku.as_str()).collect();
        assert_eq!(skus, vec!["SKU-003", "SKU-010"]);
    }
}
