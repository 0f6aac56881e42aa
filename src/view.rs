//! View-model derivation.
//!
//! Pure functions that compute presentation fields from fetched entities.
//! Nothing here performs I/O or mutates its input.

use crate::config::SITE_NAME;
use crate::models::{Product, Review};

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

/// True when the product has a positive sale price strictly below its list
/// price. A zero or negative sale price means no sale.
pub fn has_discount(product: &Product) -> bool {
    match product.metadata.sale_price {
        Some(sale) => sale > 0.0 && sale < product.metadata.price,
        None => false,
    }
}

/// Percentage saved, rounded half up. `None` unless [`has_discount`] holds.
///
/// A real discount always reads between 1% and 99%, even when rounding
/// would land on 0 or 100.
pub fn discount_percent(product: &Product) -> Option<u32> {
    let price = product.metadata.price;
    if !has_discount(product) || price <= 0.0 {
        return None;
    }
    let sale = product.metadata.sale_price?;
    let pct = ((1.0 - sale / price) * 100.0 + 0.5).floor();
    Some(pct.clamp(1.0, 99.0) as u32)
}

/// The price a shopper pays: the sale price when discounted, else the list price.
pub fn display_price(product: &Product) -> f64 {
    if has_discount(product) {
        product.metadata.sale_price.unwrap_or(product.metadata.price)
    } else {
        product.metadata.price
    }
}

/// Format an amount as dollars with two decimals, e.g. `$19.99`.
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

// ---------------------------------------------------------------------------
// Ratings
// ---------------------------------------------------------------------------

/// Mean star rating across `reviews`, or `0.0` for an empty list.
///
/// Reviews whose rating key is not a star count from 1 to 5 are left out of
/// both the sum and the count.
pub fn average_rating(reviews: &[Review]) -> f64 {
    let scores: Vec<u8> = reviews
        .iter()
        .filter_map(|r| r.metadata.rating.score())
        .collect();
    if scores.is_empty() {
        return 0.0;
    }
    let sum: u32 = scores.iter().map(|&s| u32::from(s)).sum();
    f64::from(sum) / scores.len() as f64
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

/// Fixed image sizes per usage context.
///
/// `request` is what the transformation service is asked for; `display` is
/// the rendered box (requests are oversampled for dense screens).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub request: (u32, u32),
    pub display: (u32, u32),
}

impl ImageSize {
    pub const PRODUCT_CARD: ImageSize = ImageSize {
        request: (600, 600),
        display: (300, 300),
    };
    pub const GALLERY_MAIN: ImageSize = ImageSize {
        request: (1200, 1200),
        display: (600, 600),
    };
    pub const GALLERY_THUMB: ImageSize = ImageSize {
        request: (200, 200),
        display: (80, 80),
    };
    pub const REVIEW_PRODUCT: ImageSize = ImageSize {
        request: (100, 100),
        display: (50, 50),
    };
    pub const CATEGORY_BANNER: ImageSize = ImageSize {
        request: (800, 400),
        display: (400, 200),
    };
}

/// Append the transformation parameters for `size` to an image base URL.
pub fn sized_image_url(base: &str, size: ImageSize) -> String {
    let (w, h) = size.request;
    format!("{}?w={}&h={}&fit=crop&auto=format,compress", base, w, h)
}

fn non_empty(s: &str) -> Option<&str> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

/// The product's main image: `product_image`, then `thumbnail`, else none.
pub fn primary_image_url(product: &Product) -> Option<&str> {
    product
        .metadata
        .product_image
        .as_ref()
        .and_then(|img| non_empty(&img.imgix_url))
        .or_else(|| product.thumbnail.as_deref().and_then(non_empty))
}

/// Every image for the detail gallery, primary first.
pub fn gallery_images(product: &Product) -> Vec<String> {
    let mut images = Vec::with_capacity(product.metadata.gallery.len() + 1);
    if let Some(primary) = primary_image_url(product) {
        images.push(primary.to_string());
    }
    images.extend(
        product
            .metadata
            .gallery
            .iter()
            .filter_map(|img| non_empty(&img.imgix_url))
            .map(str::to_string),
    );
    images
}

// ---------------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------------

/// Gallery images plus the currently selected index.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    pub images: Vec<String>,
    pub selected: usize,
}

impl Gallery {
    pub fn for_product(product: &Product) -> Self {
        Self {
            images: gallery_images(product),
            selected: 0,
        }
    }

    /// Select an image; out-of-range indexes fall back to the first image.
    pub fn select(mut self, index: usize) -> Self {
        self.selected = if index < self.images.len() { index } else { 0 };
        self
    }

    pub fn selected_image(&self) -> Option<&str> {
        self.images.get(self.selected).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

pub const IN_STOCK: &str = "In Stock";
pub const OUT_OF_STOCK: &str = "Out of Stock";

pub fn stock_label(product: &Product) -> &'static str {
    if product.metadata.in_stock {
        IN_STOCK
    } else {
        OUT_OF_STOCK
    }
}

fn count_label(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, plural)
    }
}

/// "1 review" / "3 reviews".
pub fn review_count_label(n: usize) -> String {
    count_label(n, "review", "reviews")
}

/// "1 product" / "3 products".
pub fn product_count_label(n: usize) -> String {
    count_label(n, "product", "products")
}

/// `"{title} | ShopCosmic"`.
pub fn page_title(title: &str) -> String {
    format!("{} | {}", title, SITE_NAME)
}

const META_DESCRIPTION_LIMIT: usize = 160;

/// First 160 characters of the description, or a generic shop line.
pub fn meta_description(product: &Product) -> String {
    match product.metadata.description.as_deref().and_then(non_empty) {
        Some(desc) => desc.chars().take(META_DESCRIPTION_LIMIT).collect(),
        None => format!("Shop {} at {}", product.metadata.name, SITE_NAME),
    }
}
