//! Built-in seed catalog.
//!
//! Used when the backing store is empty, and as the donor for filling the
//! optional collections on legacy records that predate those fields.

use pricebook_catalog::{PriceEntry, PriceHistory, ProductRecord, StockStatus};

/// The records a fresh installation starts with.
pub fn seed_records() -> Vec<ProductRecord> {
    vec![
        ProductRecord {
            sku: "MUG-11".into(),
            name: "Ceramic Mug 11oz".into(),
            description: "White ceramic mug, dishwasher safe, full-wrap print area.".into(),
            category: "Drinkware".into(),
            fulfillment_time: "3-5 business days".into(),
            status: StockStatus::InStock,
            suppliers: vec!["Acme Imports".into(), "Westline Trading".into()],
            main_image: "images/mug-11.png".into(),
            price_history: PriceHistory::from_entries(vec![
                PriceEntry::new("$4.20", "2024-11-01"),
                PriceEntry::new("$4.50", "2025-02-15"),
            ]),
            gallery: Some(vec![
                "images/mug-11-front.png".into(),
                "images/mug-11-side.png".into(),
            ]),
            templates: Some(vec!["templates/mug-11-wrap.psd".into()]),
            videos: Some(vec!["https://video.example.com/mug-11-360".into()]),
        },
        ProductRecord {
            sku: "TEE-01".into(),
            name: "Cotton Tee".into(),
            description: "180gsm combed cotton tee, unisex sizing S-3XL.".into(),
            category: "Apparel".into(),
            fulfillment_time: "5-7 business days".into(),
            status: StockStatus::InStock,
            suppliers: vec!["Northway Textiles".into()],
            main_image: "images/tee-01.png".into(),
            price_history: PriceHistory::from_entries(vec![PriceEntry::new(
                "$7.00",
                "2025-01-10",
            )]),
            gallery: Some(vec!["images/tee-01-flat.png".into()]),
            templates: Some(vec![
                "templates/tee-01-front.ai".into(),
                "templates/tee-01-back.ai".into(),
            ]),
            videos: None,
        },
        ProductRecord {
            sku: "PEN-05".into(),
            name: "Gel Pen 0.5mm".into(),
            description: "Retractable gel pen, barrel print, black ink.".into(),
            category: "Stationery".into(),
            fulfillment_time: "2-3 business days".into(),
            status: StockStatus::OutOfStock,
            suppliers: vec!["Westline Trading".into(), "Acme Imports".into()],
            main_image: "images/pen-05.png".into(),
            price_history: PriceHistory::from_entries(vec![
                PriceEntry::new("$0.80", "2024-09-01"),
                PriceEntry::new("$0.75", "2025-01-20"),
                PriceEntry::new("$0.85", "2025-04-02"),
            ]),
            gallery: None,
            templates: Some(vec!["templates/pen-05-barrel.pdf".into()]),
            videos: None,
        },
    ]
}
