//! Plain-text rendering of API responses

use std::fmt::Write as _;
use storefront_models::{
    format_currency, format_discount, Cart, Price, Product, ProductDetail, ProductSummary,
    SearchResponse,
};

/// Pages shown in the pager line
pub const PAGE_WINDOW: usize = 5;

/// One line per product: id, title, price and badges.
pub fn product_line(summary: &ProductSummary) -> String {
    let product = Product::from(summary.clone());
    let mut line = format!(
        "{:<14} {}  {}",
        product.id,
        product.title,
        format_currency(product.price, product.currency)
    );
    if product.has_discount() {
        let _ = write!(line, "  {}", format_discount(product.discount_percentage()));
    }
    if product.has_free_shipping() {
        line.push_str("  [Envío gratis]");
    }
    if !product.is_new() {
        let _ = write!(line, "  ({})", product.condition.as_str());
    }
    line
}

pub fn search_page(response: &SearchResponse) -> String {
    let paging = &response.paging;
    if response.results.is_empty() {
        return format!("No results for \"{}\"\n", response.query);
    }

    let mut out = format!(
        "Results for \"{}\": {}\n\n",
        response.query,
        paging.results_range_text()
    );
    for summary in &response.results {
        let _ = writeln!(out, "{}", product_line(summary));
    }

    let pages: Vec<String> = paging
        .page_range(PAGE_WINDOW)
        .into_iter()
        .map(|page| {
            if page == paging.current_page() {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect();
    let _ = writeln!(
        out,
        "\nPage {} of {}: {}",
        paging.current_page(),
        paging.total_pages(),
        pages.join(" ")
    );

    if let Some(offset) = paging.previous_page_offset() {
        let _ = writeln!(out, "Previous: --offset {offset}");
    }
    if let Some(offset) = paging.next_page_offset() {
        let _ = writeln!(out, "Next: --offset {offset}");
    }
    out
}

pub fn suggestions(products: &[ProductSummary]) -> String {
    if products.is_empty() {
        return "No suggestions\n".to_string();
    }
    products
        .iter()
        .map(|summary| format!("{}\n", product_line(summary)))
        .collect()
}

pub fn product_detail(detail: &ProductDetail) -> String {
    let product = Product::from(detail.clone());
    let mut out = format!("{}\n{}\n\n", product.title, product.id);

    match Price::of(&product) {
        Ok(price) => {
            let _ = write!(out, "Price: {}", price.formatted());
            if let (true, Some(original)) = (price.has_discount(), price.formatted_original()) {
                let _ = write!(
                    out,
                    "  (was {original}, {})",
                    format_discount(price.discount_percentage())
                );
            }
        }
        Err(_) => {
            let _ = write!(
                out,
                "Price: {}",
                format_currency(product.price, product.currency)
            );
        }
    }
    out.push('\n');

    if let Some(installments) = product.installment_text() {
        let _ = writeln!(out, "Installments: {installments}");
    }
    if product.has_free_shipping() {
        out.push_str("Shipping: free\n");
    }
    let _ = writeln!(out, "Condition: {}", product.condition.as_str());
    let _ = writeln!(out, "Availability: {}", product.availability_status());
    if let Some(rating) = product.average_rating() {
        let stars = product.rating_stars() as usize;
        let _ = writeln!(
            out,
            "Rating: {:.1} {}{}",
            rating,
            "★".repeat(stars),
            "☆".repeat(5usize.saturating_sub(stars))
        );
    }
    if let Some(brand) = product.brand() {
        let _ = writeln!(out, "Brand: {brand}");
    }
    if let Some(location) = product.seller_location() {
        let _ = writeln!(out, "Seller: {location}");
    }
    if let Some(warranty) = &product.warranty {
        let _ = writeln!(out, "Warranty: {warranty}");
    }
    if let Some(description) = &product.description {
        let _ = writeln!(out, "\n{description}");
    }
    out
}

pub fn cart(cart: &Cart) -> String {
    if cart.is_empty() {
        return "Cart is empty\n".to_string();
    }

    let mut out = String::new();
    for item in cart.items() {
        let _ = writeln!(
            out,
            "{:<14} {} x{}  {}",
            item.id,
            item.title,
            item.quantity,
            format_currency(item.subtotal(), item.currency_id)
        );
    }

    // Cart lines share a currency in practice; the first one labels the total
    let currency = cart.items()[0].currency_id;
    let _ = writeln!(
        out,
        "\n{} items, total {}",
        cart.total_items(),
        format_currency(cart.total_amount(), currency)
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use storefront_models::{Condition, Currency, Paging, Shipping};

    fn summary(id: &str, price: i64) -> ProductSummary {
        ProductSummary {
            id: id.to_string(),
            title: format!("Product {id}"),
            price: Decimal::from(price),
            currency_id: Currency::Ars,
            condition: Condition::New,
            thumbnail: None,
            shipping: None,
            installments: None,
            reviews: None,
        }
    }

    fn response(total: usize, offset: usize, limit: usize, count: usize) -> SearchResponse {
        SearchResponse {
            query: "iphone".to_string(),
            results: (0..count).map(|i| summary(&format!("MLA{i}"), 1000)).collect(),
            paging: Paging::new(total, offset, limit).unwrap(),
        }
    }

    #[test]
    fn product_line_shows_formatted_price_and_badges() {
        let mut item = summary("MLA1446234567", 1_367_999);
        item.shipping = Some(Shipping {
            free_shipping: true,
            mode: None,
            logistic_type: None,
            store_pick_up: None,
        });
        let line = product_line(&item);
        assert!(line.contains("$ 1.367.999"), "{line}");
        assert!(line.contains("[Envío gratis]"), "{line}");

        item.condition = Condition::Used;
        assert!(product_line(&item).contains("(used)"));
    }

    #[test]
    fn search_page_shows_range_pager_and_offsets() {
        let out = search_page(&response(120, 30, 10, 10));
        assert!(out.contains("31-40 de 120"), "{out}");
        assert!(out.contains("Page 4 of 12: 2 3 [4] 5 6"), "{out}");
        assert!(out.contains("Previous: --offset 20"), "{out}");
        assert!(out.contains("Next: --offset 40"), "{out}");
    }

    #[test]
    fn first_and_last_pages_omit_missing_links() {
        let first = search_page(&response(12, 0, 10, 10));
        assert!(first.contains("Page 1 of 2: [1] 2"), "{first}");
        assert!(!first.contains("Previous"));

        let last = search_page(&response(12, 10, 10, 2));
        assert!(last.contains("11-12 de 12"), "{last}");
        assert!(!last.contains("Next"));
    }

    #[test]
    fn empty_search_page() {
        let out = search_page(&response(0, 0, 10, 0));
        assert_eq!(out, "No results for \"iphone\"\n");
    }

    #[test]
    fn cart_totals() {
        let mut cart = Cart::new();
        let product = Product::from(summary("MLA1", 1500));
        cart.add(&product);
        cart.add(&product);
        let out = super::cart(&cart);
        assert!(out.contains("x2  $ 3.000"), "{out}");
        assert!(out.contains("2 items, total $ 3.000"), "{out}");
        assert_eq!(super::cart(&Cart::new()), "Cart is empty\n");
    }
}
