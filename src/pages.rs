//! Page assemblers, one per route.
//!
//! Each assembler fetches what its page needs, running independent requests
//! concurrently with `try_join!` and sequencing requests that depend on an
//! earlier lookup. The first failed request aborts the whole page; there is
//! no partial rendering.

use futures::try_join;
use tracing::debug;

use crate::config::SITE_NAME;
use crate::error::Result;
use crate::models::{Category, Product, Review};
use crate::view::{self, Gallery};
use crate::StorefrontSdk;

/// Reviews shown on the home page, taken in store order.
pub const FEATURED_REVIEW_COUNT: usize = 3;

// ---------------------------------------------------------------------------
// Shared page types
// ---------------------------------------------------------------------------

/// Result of a route that resolves a single entity by slug.
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome<T> {
    Found(T),
    NotFound,
}

impl<T> PageOutcome<T> {
    pub fn found(self) -> Option<T> {
        match self {
            PageOutcome::Found(page) => Some(page),
            PageOutcome::NotFound => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PageOutcome::NotFound)
    }
}

/// Document title and meta description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

/// What a not-found page failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    Product,
    Category,
    Page,
}

impl Missing {
    fn noun(self) -> &'static str {
        match self {
            Missing::Product => "Product",
            Missing::Category => "Category",
            Missing::Page => "Page",
        }
    }

    /// e.g. "Product Not Found".
    pub fn heading(self) -> String {
        format!("{} Not Found", self.noun())
    }

    pub fn meta(self) -> PageMeta {
        PageMeta {
            title: view::page_title(&self.heading()),
            description: format!(
                "The {} you are looking for does not exist.",
                self.noun().to_lowercase()
            ),
        }
    }
}

/// One step of a breadcrumb trail. The last crumb has no link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: Option<String>,
}

impl Crumb {
    fn link(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: Some(href.to_string()),
        }
    }

    fn current(label: &str) -> Self {
        Self {
            label: label.to_string(),
            href: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct HomePage {
    pub meta: PageMeta,
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub featured_reviews: Vec<Review>,
}

/// Assemble the home page: products, categories and reviews in parallel.
pub async fn home(sdk: &StorefrontSdk) -> Result<HomePage> {
    let product_q = sdk.products();
    let category_q = sdk.categories();
    let review_q = sdk.reviews();

    let (products, categories, mut reviews) =
        try_join!(product_q.list(), category_q.list(), review_q.list())?;

    reviews.truncate(FEATURED_REVIEW_COUNT);
    debug!(
        products = products.len(),
        categories = categories.len(),
        reviews = reviews.len(),
        "assembled home page"
    );

    Ok(HomePage {
        meta: PageMeta {
            title: SITE_NAME.to_string(),
            description: "Shop our curated collection of electronics, clothing, and home essentials."
                .to_string(),
        },
        products,
        categories,
        featured_reviews: reviews,
    })
}

// ---------------------------------------------------------------------------
// Product listing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ProductsPage {
    pub meta: PageMeta,
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
}

/// Assemble the all-products page. No filtering or pagination.
pub async fn products(sdk: &StorefrontSdk) -> Result<ProductsPage> {
    let product_q = sdk.products();
    let category_q = sdk.categories();

    let (products, categories) = try_join!(product_q.list(), category_q.list())?;
    debug!(products = products.len(), "assembled product listing");

    Ok(ProductsPage {
        meta: PageMeta {
            title: view::page_title("All Products"),
            description: "Browse our complete collection of products across all categories."
                .to_string(),
        },
        products,
        categories,
    })
}

// ---------------------------------------------------------------------------
// Category listing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPage {
    pub meta: PageMeta,
    pub category: Category,
    pub products: Vec<Product>,
    /// Every category, for the sidebar.
    pub categories: Vec<Category>,
}

impl CategoryPage {
    /// Whether `other` is the category this page shows (by id).
    pub fn is_current(&self, other: &Category) -> bool {
        other.id == self.category.id
    }

    pub fn breadcrumb(&self) -> Vec<Crumb> {
        vec![
            Crumb::link("Home", "/"),
            Crumb::link("Products", "/products"),
            Crumb::current(&self.category.metadata.name),
        ]
    }
}

/// Assemble a category page.
///
/// The slug lookup runs first; its id then drives the product filter, which
/// runs alongside the sidebar's category list.
pub async fn category(sdk: &StorefrontSdk, slug: &str) -> Result<PageOutcome<CategoryPage>> {
    let category_q = sdk.categories();
    let product_q = sdk.products();

    let category = match category_q.get_by_slug(slug).await? {
        Some(c) => c,
        None => return Ok(PageOutcome::NotFound),
    };

    let (products, categories) = try_join!(
        product_q.list_by_category(&category.id),
        category_q.list()
    )?;
    debug!(slug, products = products.len(), "assembled category page");

    let name = &category.metadata.name;
    let description = category
        .metadata
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| format!("Browse {} products at {}", name, SITE_NAME));

    Ok(PageOutcome::Found(CategoryPage {
        meta: PageMeta {
            title: view::page_title(name),
            description,
        },
        category,
        products,
        categories,
    }))
}

// ---------------------------------------------------------------------------
// Product detail
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub meta: PageMeta,
    pub product: Product,
    pub reviews: Vec<Review>,
    pub average_rating: f64,
    pub discount_percent: Option<u32>,
    pub gallery: Gallery,
    pub stock_label: &'static str,
    pub breadcrumb: Vec<Crumb>,
}

impl ProductPage {
    /// The purchase button is inert; it is only disabled when out of stock.
    pub fn can_purchase(&self) -> bool {
        self.product.metadata.in_stock
    }
}

/// Assemble a product detail page with `selected_image` highlighted in the
/// gallery (out-of-range indexes select the first image).
pub async fn product(
    sdk: &StorefrontSdk,
    slug: &str,
    selected_image: usize,
) -> Result<PageOutcome<ProductPage>> {
    let product = match sdk.products().get_by_slug(slug).await? {
        Some(p) => p,
        None => return Ok(PageOutcome::NotFound),
    };

    let reviews = sdk.reviews().list_by_product(&product.id).await?;
    debug!(slug, reviews = reviews.len(), "assembled product page");

    let mut breadcrumb = vec![Crumb::link("Home", "/"), Crumb::link("Products", "/products")];
    if let Some(category) = product.metadata.category.as_ref().and_then(|c| c.resolved()) {
        breadcrumb.push(Crumb::link(
            &category.metadata.name,
            &format!("/categories/{}", category.slug),
        ));
    }
    breadcrumb.push(Crumb::current(&product.metadata.name));

    Ok(PageOutcome::Found(ProductPage {
        meta: PageMeta {
            title: view::page_title(&product.metadata.name),
            description: view::meta_description(&product),
        },
        average_rating: view::average_rating(&reviews),
        discount_percent: view::discount_percent(&product),
        gallery: Gallery::for_product(&product).select(selected_image),
        stock_label: view::stock_label(&product),
        breadcrumb,
        reviews,
        product,
    }))
}
