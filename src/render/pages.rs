//! Full-page renderers, one per assembled page.

use super::components::{
    breadcrumb, category_card, category_icon, category_sidebar, empty_state, gallery,
    product_card, review_card, star_rating,
};
use super::{escape_html, format_description, layout};
use crate::models::{Category, Product};
use crate::pages::{CategoryPage, HomePage, Missing, ProductPage, ProductsPage};
use crate::view;

fn product_grid(products: &[Product]) -> String {
    let cards: Vec<String> = products.iter().map(product_card).collect();
    format!(r#"<div class="product-grid">{}</div>"#, cards.join("\n"))
}

fn category_grid(categories: &[Category]) -> String {
    let cards: Vec<String> = categories.iter().map(category_card).collect();
    format!(r#"<div class="category-grid">{}</div>"#, cards.join("\n"))
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

pub fn render_home(page: &HomePage) -> String {
    let categories = if page.categories.is_empty() {
        r#"<p class="empty-message">No categories available.</p>"#.to_string()
    } else {
        category_grid(&page.categories)
    };

    let products = if page.products.is_empty() {
        r#"<p class="empty-message">No products available.</p>"#.to_string()
    } else {
        product_grid(&page.products)
    };

    let reviews = if page.featured_reviews.is_empty() {
        r#"<p class="empty-message">No reviews yet.</p>"#.to_string()
    } else {
        let cards: Vec<String> = page
            .featured_reviews
            .iter()
            .map(|r| review_card(r, true))
            .collect();
        format!(r#"<div class="review-grid">{}</div>"#, cards.join("\n"))
    };

    let body = format!(
        r##"<section class="hero">
    <h1>Discover Amazing Products</h1>
    <p>Shop our curated collection of electronics, clothing, and home essentials.</p>
    <a href="/products" class="btn">Shop Now</a>
    <a href="#categories" class="btn btn-outline">Browse Categories</a>
</section>
<section id="categories" class="home-categories">
    <h2>Shop by Category</h2>
    {categories}
</section>
<section class="home-products">
    <h2>Featured Products</h2>
    <a href="/products" class="view-all">View All</a>
    {products}
</section>
<section class="home-reviews">
    <h2>What Our Customers Say</h2>
    {reviews}
</section>
<section class="cta">
    <h2>Ready to Start Shopping?</h2>
    <a href="/products" class="btn">Explore All Products</a>
</section>"##,
        categories = categories,
        products = products,
        reviews = reviews
    );

    layout(&page.meta, &body)
}

// ---------------------------------------------------------------------------
// Product listing
// ---------------------------------------------------------------------------

pub fn render_products(page: &ProductsPage) -> String {
    let listing = if page.products.is_empty() {
        empty_state("📦", "No Products Found", "Check back later for new arrivals!")
    } else {
        product_grid(&page.products)
    };

    let body = format!(
        r#"<div class="page-header">
    <h1>All Products</h1>
    <p>Browse our complete collection of {count}</p>
</div>
<div class="catalog">
{sidebar}
<div class="catalog-main">
{listing}
</div>
</div>"#,
        count = view::product_count_label(page.products.len()),
        sidebar = category_sidebar(&page.categories, None),
        listing = listing
    );

    layout(&page.meta, &body)
}

// ---------------------------------------------------------------------------
// Category listing
// ---------------------------------------------------------------------------

pub fn render_category(page: &CategoryPage) -> String {
    let category = &page.category;

    let description = category
        .metadata
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .map(|d| format!(r#"<p class="category-description">{}</p>"#, escape_html(d)))
        .unwrap_or_default();

    let listing = if page.products.is_empty() {
        format!(
            "{}\n<a href=\"/products\" class=\"browse-all\">Browse All Products</a>",
            empty_state(
                "📦",
                "No Products Found",
                "There are no products in this category yet."
            )
        )
    } else {
        product_grid(&page.products)
    };

    let body = format!(
        r#"<div class="page-header">
    {breadcrumb}
    <span class="category-icon">{icon}</span>
    <h1>{name}</h1>
    {description}
</div>
<div class="catalog">
{sidebar}
<div class="catalog-main">
<p class="result-count">Showing {count}</p>
{listing}
</div>
</div>"#,
        breadcrumb = breadcrumb(&page.breadcrumb()),
        icon = category_icon(category),
        name = escape_html(&category.metadata.name),
        description = description,
        sidebar = category_sidebar(&page.categories, Some(&category.id)),
        count = view::product_count_label(page.products.len()),
        listing = listing
    );

    layout(&page.meta, &body)
}

// ---------------------------------------------------------------------------
// Product detail
// ---------------------------------------------------------------------------

pub fn render_product(page: &ProductPage) -> String {
    let product = &page.product;
    let meta = &product.metadata;

    let category_badge = meta
        .category
        .as_ref()
        .and_then(|c| c.resolved())
        .map(|c| {
            format!(
                r#"<a href="/categories/{}" class="category-badge">{} {}</a>"#,
                escape_html(&c.slug),
                category_icon(c),
                escape_html(&c.metadata.name)
            )
        })
        .unwrap_or_default();

    let rating = if page.reviews.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="product-rating">{} <span>({})</span></div>"#,
            star_rating(page.average_rating),
            view::review_count_label(page.reviews.len())
        )
    };

    let price = match page.discount_percent {
        Some(pct) => format!(
            r#"<div class="product-price price--sale">
        <span class="price-current">{}</span>
        <span class="price-original">{}</span>
        <span class="price-save">Save {}%</span>
    </div>"#,
            view::format_price(view::display_price(product)),
            view::format_price(meta.price),
            pct
        ),
        None => format!(
            r#"<div class="product-price"><span class="price-current">{}</span></div>"#,
            view::format_price(meta.price)
        ),
    };

    let stock_class = if meta.in_stock { "in-stock" } else { "out-of-stock" };

    let sku = meta
        .sku
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(|s| format!(r#"<p class="product-sku">SKU: {}</p>"#, escape_html(s)))
        .unwrap_or_default();

    let description = meta
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .map(|d| format!(r#"<div class="product-description">{}</div>"#, format_description(d)))
        .unwrap_or_default();

    let button = if page.can_purchase() {
        r#"<button class="btn-purchase" type="button">Add to Cart</button>"#.to_string()
    } else {
        format!(
            r#"<button class="btn-purchase" type="button" disabled>{}</button>"#,
            view::OUT_OF_STOCK
        )
    };

    let reviews = if page.reviews.is_empty() {
        empty_state("💬", "No Reviews Yet", "Be the first to review this product!")
    } else {
        let cards: Vec<String> = page.reviews.iter().map(|r| review_card(r, false)).collect();
        format!(r#"<div class="review-grid">{}</div>"#, cards.join("\n"))
    };

    let body = format!(
        r#"{breadcrumb}
<div class="product-detail">
{gallery}
<div class="product-info">
    {category_badge}
    <h1>{name}</h1>
    {rating}
    {price}
    <p class="stock-status {stock_class}">{stock_label}</p>
    {sku}
    {description}
    {button}
</div>
</div>
<section class="product-reviews">
    <h2>Customer Reviews ({review_total})</h2>
    {reviews}
</section>"#,
        breadcrumb = breadcrumb(&page.breadcrumb),
        gallery = gallery(&page.gallery, &meta.name, &product.slug),
        category_badge = category_badge,
        name = escape_html(&meta.name),
        rating = rating,
        price = price,
        stock_class = stock_class,
        stock_label = page.stock_label,
        sku = sku,
        description = description,
        button = button,
        review_total = page.reviews.len(),
        reviews = reviews
    );

    layout(&page.meta, &body)
}

// ---------------------------------------------------------------------------
// Not found
// ---------------------------------------------------------------------------

pub fn render_not_found(missing: Missing) -> String {
    let meta = missing.meta();
    let body = format!(
        r#"<div class="not-found">
    <h1>{}</h1>
    <p>{}</p>
    <a href="/products" class="btn">Browse All Products</a>
</div>"#,
        escape_html(&missing.heading()),
        escape_html(&meta.description)
    );
    layout(&meta, &body)
}
