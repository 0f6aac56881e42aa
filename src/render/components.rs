//! Reusable presentation components.

use super::escape_html;
use crate::models::{Category, Product, Review};
use crate::pages::Crumb;
use crate::view::{self, Gallery, ImageSize};

const DEFAULT_CATEGORY_ICON: &str = "📁";
const ALL_PRODUCTS_ICON: &str = "🛍️";
const PLACEHOLDER_ICON: &str = "📦";

/// The category's icon, or a folder when it has none.
pub fn category_icon(category: &Category) -> String {
    let icon = category
        .metadata
        .icon
        .as_deref()
        .filter(|i| !i.trim().is_empty())
        .unwrap_or(DEFAULT_CATEGORY_ICON);
    escape_html(icon)
}

fn img(base: &str, size: ImageSize, alt: &str, class: &str) -> String {
    let (w, h) = size.display;
    format!(
        r#"<img src="{src}" alt="{alt}" width="{w}" height="{h}" class="{class}" loading="lazy">"#,
        src = escape_html(&view::sized_image_url(base, size)),
        alt = escape_html(alt),
        w = w,
        h = h,
        class = class
    )
}

/// Five-star display; half a star is shown from .5 up.
pub fn star_rating(rating: f64) -> String {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as usize;
    let half = if rating.fract() >= 0.5 { 1 } else { 0 };
    let empty = 5 - full - half;

    format!(
        r#"<span class="star-rating" aria-label="{rating:.1} out of 5 stars">{full}{half}{empty}</span>"#,
        rating = rating,
        full = "★".repeat(full),
        half = if half > 0 { "⯨" } else { "" },
        empty = "☆".repeat(empty)
    )
}

/// Price block: sale and struck-through list price when discounted.
pub fn price(product: &Product) -> String {
    if view::has_discount(product) {
        format!(
            r#"<div class="price price--sale">
        <span class="price-current">{sale}</span>
        <span class="price-original">{original}</span>
    </div>"#,
            sale = view::format_price(view::display_price(product)),
            original = view::format_price(product.metadata.price)
        )
    } else {
        format!(
            r#"<div class="price">
        <span class="price-current">{}</span>
    </div>"#,
            view::format_price(product.metadata.price)
        )
    }
}

pub fn product_card(product: &Product) -> String {
    let name = &product.metadata.name;

    let image = view::primary_image_url(product)
        .map(|url| img(url, ImageSize::PRODUCT_CARD, name, "product-card-image"))
        .unwrap_or_default();

    let badge = view::discount_percent(product)
        .map(|pct| format!(r#"<span class="sale-badge">-{}%</span>"#, pct))
        .unwrap_or_default();

    let stock = if product.metadata.in_stock {
        String::new()
    } else {
        format!(
            r#"<div class="stock-overlay"><span>{}</span></div>"#,
            view::OUT_OF_STOCK
        )
    };

    let category = product
        .metadata
        .category
        .as_ref()
        .and_then(|c| c.resolved())
        .map(|c| {
            format!(
                r#"<span class="product-card-category">{} {}</span>"#,
                category_icon(c),
                escape_html(&c.metadata.name)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<a href="/products/{slug}" class="product-card">
    <div class="product-card-media">
        {image}
        {badge}
        {stock}
    </div>
    <div class="product-card-body">
        {category}
        <h3 class="product-card-title">{name}</h3>
        {price}
    </div>
</a>"#,
        slug = escape_html(&product.slug),
        image = image,
        badge = badge,
        stock = stock,
        category = category,
        name = escape_html(name),
        price = price(product)
    )
}

pub fn category_card(category: &Category) -> String {
    let name = &category.metadata.name;

    let banner = category
        .thumbnail
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .map(|url| img(url, ImageSize::CATEGORY_BANNER, name, "category-card-image"))
        .unwrap_or_default();

    let description = category
        .metadata
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .map(|d| format!(r#"<p class="category-card-description">{}</p>"#, escape_html(d)))
        .unwrap_or_default();

    format!(
        r#"<a href="/categories/{slug}" class="category-card">
    {banner}
    <div class="category-card-body">
        <span class="category-card-icon">{icon}</span>
        <h3 class="category-card-title">{name}</h3>
        {description}
        <span class="category-card-cta">Shop Now →</span>
    </div>
</a>"#,
        slug = escape_html(&category.slug),
        banner = banner,
        icon = category_icon(category),
        name = escape_html(name),
        description = description
    )
}

/// A review card. With `show_product`, links to the reviewed product when the
/// store resolved it.
pub fn review_card(review: &Review, show_product: bool) -> String {
    let meta = &review.metadata;
    let stars = f64::from(meta.rating.score().unwrap_or(0));

    let verified = if meta.verified_purchase.unwrap_or(false) {
        r#"<span class="verified-badge">Verified</span>"#
    } else {
        ""
    };

    let product_link = if show_product {
        meta.product
            .as_ref()
            .and_then(|p| p.resolved())
            .map(review_product_link)
            .unwrap_or_default()
    } else {
        String::new()
    };

    format!(
        r#"<article class="review-card">
    <header class="review-header">
        <span class="review-author">{author}</span>
        {verified}
        {stars}
    </header>
    <p class="review-text">{text}</p>
    {product_link}
</article>"#,
        author = escape_html(&meta.reviewer_name),
        verified = verified,
        stars = star_rating(stars),
        text = escape_html(&meta.review_text),
        product_link = product_link
    )
}

fn review_product_link(product: &Product) -> String {
    let name = &product.metadata.name;
    let thumb = product
        .metadata
        .product_image
        .as_ref()
        .filter(|img| !img.imgix_url.trim().is_empty())
        .map(|i| img(&i.imgix_url, ImageSize::REVIEW_PRODUCT, name, "review-product-image"))
        .unwrap_or_default();

    format!(
        r#"<a href="/products/{slug}" class="review-product">
        {thumb}
        <span class="review-product-name">{name}</span>
        <span class="review-product-price">{price}</span>
    </a>"#,
        slug = escape_html(&product.slug),
        thumb = thumb,
        name = escape_html(name),
        price = view::format_price(view::display_price(product))
    )
}

/// Category navigation. `current` is the id of the highlighted category;
/// `None` highlights "All Products".
pub fn category_sidebar(categories: &[Category], current: Option<&str>) -> String {
    let active = |on: bool| if on { " active" } else { "" };

    let mut links = format!(
        r#"<a href="/products" class="sidebar-link{}"><span>{}</span> All Products</a>"#,
        active(current.is_none()),
        ALL_PRODUCTS_ICON
    );
    for c in categories {
        links.push_str(&format!(
            "\n        <a href=\"/categories/{slug}\" class=\"sidebar-link{active}\"><span>{icon}</span> {name}</a>",
            slug = escape_html(&c.slug),
            active = active(current == Some(c.id.as_str())),
            icon = category_icon(c),
            name = escape_html(&c.metadata.name)
        ));
    }

    format!(
        r#"<aside class="category-sidebar">
    <h2>Categories</h2>
    <nav>
        {}
    </nav>
</aside>"#,
        links
    )
}

pub fn breadcrumb(crumbs: &[Crumb]) -> String {
    let items: Vec<String> = crumbs
        .iter()
        .map(|c| match &c.href {
            Some(href) => format!(
                r#"<a href="{}">{}</a>"#,
                escape_html(href),
                escape_html(&c.label)
            ),
            None => format!(r#"<span class="current">{}</span>"#, escape_html(&c.label)),
        })
        .collect();

    format!(
        r#"<nav class="breadcrumb">{}</nav>"#,
        items.join(r#" <span class="sep">›</span> "#)
    )
}

/// Product gallery: the selected image large, thumbnails linking to
/// `?image=N` when there is more than one, or a placeholder icon when empty.
pub fn gallery(gallery: &Gallery, product_name: &str, product_slug: &str) -> String {
    let main = match gallery.selected_image() {
        Some(url) => img(url, ImageSize::GALLERY_MAIN, product_name, "gallery-main-image"),
        None => {
            return format!(
                r#"<div class="product-gallery product-gallery--empty"><span class="placeholder-icon">{}</span></div>"#,
                PLACEHOLDER_ICON
            )
        }
    };

    let thumbs = if gallery.images.len() > 1 {
        let items: String = gallery
            .images
            .iter()
            .enumerate()
            .map(|(i, url)| {
                format!(
                    r#"<a href="/products/{slug}?image={i}" class="gallery-thumb{selected}">{img}</a>"#,
                    slug = escape_html(product_slug),
                    i = i,
                    selected = if i == gallery.selected { " selected" } else { "" },
                    img = img(
                        url,
                        ImageSize::GALLERY_THUMB,
                        &format!("{} - Image {}", product_name, i + 1),
                        "gallery-thumb-image"
                    )
                )
            })
            .collect();
        format!(r#"<div class="gallery-thumbs">{}</div>"#, items)
    } else {
        String::new()
    };

    format!(
        r#"<div class="product-gallery">
    <div class="gallery-main">{main}</div>
    {thumbs}
</div>"#,
        main = main,
        thumbs = thumbs
    )
}

/// Empty-state panel with an icon, heading and message.
pub fn empty_state(icon: &str, heading: &str, message: &str) -> String {
    format!(
        r#"<div class="empty-state">
    <div class="empty-state-icon">{}</div>
    <h3>{}</h3>
    <p>{}</p>
</div>"#,
        icon, heading, message
    )
}
