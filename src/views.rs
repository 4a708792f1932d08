//! HTML fragments for the htmx front end.
//!
//! A single [`Renderer`] is built at startup and shared through the app state.
//! Every value interpolated into markup goes through [`escape`].

use std::fmt::Write;

use axum::response::Html;

use crate::{
    dto::{
        cart::{CartUpdateView, CartView},
        products::ProductPage,
    },
    models::{Product, format_price},
};

pub struct Renderer {
    uploads_url: String,
}

impl Renderer {
    pub fn new(uploads_url: impl Into<String>) -> Self {
        Self {
            uploads_url: uploads_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn image_url(&self, product: &Product) -> String {
        format!("{}/{}", self.uploads_url, escape(&product.image))
    }

    /// `homepage`: storefront shell, items and cart load themselves.
    pub fn homepage(&self, cart_count: usize) -> Html<String> {
        let body = format!(
            r##"<nav class="navbar">
  <a href="/">MX Store</a>
  <button hx-get="/gotocart" hx-target="#content">Cart ({cart_count})</button>
</nav>
<main class="shop">
  <section id="content" hx-get="/shoppingitems" hx-trigger="load">
    <p class="loading">Loading products...</p>
  </section>
  <aside id="cart-items" hx-get="/cartitems" hx-trigger="load"></aside>
</main>"##
        );
        Html(layout("Shop", &body))
    }

    /// `shoppingItems`
    pub fn shopping_items(&self, products: &[Product]) -> Html<String> {
        let mut out = String::from(r#"<div class="product-grid">"#);
        for product in products {
            let _ = write!(
                out,
                r##"
  <div class="card">
    <img src="{image}" alt="{name}">
    <h5>{name}</h5>
    <p class="price">${price}</p>
    <button hx-post="/addtocart/{id}" hx-target="#cart-items">Add to cart</button>
  </div>"##,
                image = self.image_url(product),
                name = escape(&product.name),
                price = product.display_price(),
                id = product.id,
            );
        }
        if products.is_empty() {
            out.push_str(r#"<p class="empty">No products yet.</p>"#);
        }
        out.push_str("\n</div>");
        Html(out)
    }

    /// `cartItems`
    pub fn cart_items(&self, view: &CartView) -> Html<String> {
        let mut out = alert(&view.message, &view.alert_type);
        out.push_str(r#"<ul class="cart-items">"#);
        for item in &view.order_items {
            let _ = write!(
                out,
                "\n  <li>{name} x {quantity} <span>${total}</span></li>",
                name = escape(&item.product.name),
                quantity = item.quantity,
                total = format_price(item.line_total()),
            );
        }
        let _ = write!(
            out,
            "\n</ul>\n<p class=\"cart-total\">Total: ${}</p>",
            format_price(view.total_cost)
        );
        Html(out)
    }

    /// `shoppingCart`: editable cart table.
    pub fn shopping_cart(&self, view: &CartView) -> Html<String> {
        let mut out = String::from(
            r#"<div id="cart-update"></div>
<table class="cart">
  <thead><tr><th>Product</th><th>Price</th><th>Quantity</th><th></th></tr></thead>
  <tbody>"#,
        );
        for item in &view.order_items {
            let id = item.product_id;
            let _ = write!(
                out,
                r##"
    <tr id="item-{id}">
      <td>{name}</td>
      <td>${price}</td>
      <td>
        <button hx-put="/updateorderitem?product_id={id}&action=subtract" hx-target="#cart-update">-</button>
        <span id="quantity-{id}">{quantity}</span>
        <button hx-put="/updateorderitem?product_id={id}&action=add" hx-target="#cart-update">+</button>
      </td>
      <td><button hx-put="/updateorderitem?product_id={id}&action=remove" hx-target="#cart-update">Remove</button></td>
    </tr>"##,
                name = escape(&item.product.name),
                price = item.product.display_price(),
                quantity = item.quantity,
            );
        }
        if view.order_items.is_empty() {
            out.push_str("\n    <tr><td colspan=\"4\">Your cart is empty.</td></tr>");
        }
        let _ = write!(
            out,
            "\n  </tbody>\n</table>\n<p>Total: $<span id=\"cart-total\">{}</span></p>",
            format_price(view.total_cost)
        );
        Html(out)
    }

    /// `updateShoppingCart`: out-of-band swaps, or a reload of the table.
    pub fn update_shopping_cart(&self, view: &CartUpdateView) -> Html<String> {
        let mut out = alert(&view.message, &view.alert_type);
        if view.refresh_cart_items {
            out.push_str(r##"<div hx-get="/gotocart" hx-trigger="load" hx-target="#content"></div>"##);
        } else if let Some(quantity) = view.quantity {
            let _ = write!(
                out,
                r#"<span id="quantity-{}" hx-swap-oob="true">{quantity}</span>"#,
                view.product_id
            );
        }
        let _ = write!(
            out,
            r#"<span id="cart-total" hx-swap-oob="true">{}</span>"#,
            format_price(view.total_cost)
        );
        Html(out)
    }

    /// `manageProducts`: admin shell.
    pub fn manage_products(&self) -> Html<String> {
        let body = r##"<nav class="navbar"><a href="/manageproducts">Manage products</a><a href="/">Shop</a></nav>
<div class="toolbar">
  <button hx-get="/createproduct" hx-target="#admin-content">New product</button>
  <button hx-post="/seed-products" hx-target="#messages">Seed products</button>
  <button hx-get="/allproducts" hx-target="#admin-content">All products</button>
</div>
<div id="messages"></div>
<section id="admin-content" hx-get="/allproducts" hx-trigger="load"></section>"##;
        Html(layout("Manage products", body))
    }

    /// `allProducts`
    pub fn all_products(&self) -> Html<String> {
        Html(
            r#"<div id="product-table" hx-get="/products?page=1&limit=10" hx-trigger="load"></div>"#
                .to_string(),
        )
    }

    pub fn product_row(&self, product: &Product) -> String {
        let id = product.id;
        let image = if product.has_image() {
            format!(r#"<img class="thumb" src="{}" alt="">"#, self.image_url(product))
        } else {
            String::new()
        };
        format!(
            r##"<tr id="product-{id}">
  <td>{image}</td>
  <td>{name}</td>
  <td>${price}</td>
  <td>
    <button hx-get="/products/{id}" hx-target="#admin-content">View</button>
    <button hx-get="/editproduct/{id}" hx-target="#admin-content">Edit</button>
    <button hx-delete="/products/{id}" hx-target="#product-{id}" hx-swap="outerHTML" hx-confirm="Delete this product?">Delete</button>
  </td>
</tr>"##,
            name = escape(&product.name),
            price = product.display_price(),
        )
    }

    /// `productRows`: one page of the table plus its page buttons.
    pub fn product_rows(&self, page: &ProductPage) -> Html<String> {
        let mut out = String::from(
            "<table class=\"products\">\n<thead><tr><th></th><th>Name</th><th>Price</th><th></th></tr></thead>\n<tbody>\n",
        );
        for product in &page.products {
            out.push_str(&self.product_row(product));
            out.push('\n');
        }
        out.push_str("</tbody>\n</table>\n<nav class=\"pagination\">");

        let limit = page.meta.per_page.unwrap_or_default();
        let current = page.meta.page.unwrap_or_default();
        if let Some(previous) = page.meta.previous_page() {
            let _ = write!(out, "{}", page_button(previous, limit, "Previous", false));
        }
        for number in page.meta.page_buttons() {
            let _ = write!(
                out,
                "{}",
                page_button(number, limit, &number.to_string(), number == current)
            );
        }
        if let Some(next) = page.meta.next_page() {
            let _ = write!(out, "{}", page_button(next, limit, "Next", false));
        }
        out.push_str("\n</nav>");
        Html(out)
    }

    /// `productDetail`
    pub fn product_detail(&self, product: &Product) -> Html<String> {
        let image = if product.has_image() {
            format!(r#"<img src="{}" alt="{}">"#, self.image_url(product), escape(&product.name))
        } else {
            String::new()
        };
        Html(format!(
            r##"<article class="product-detail" id="product-detail-{id}">
  {image}
  <h3>{name}</h3>
  <p class="price">${price}</p>
  <p>{description}</p>
  <button hx-get="/editproduct/{id}" hx-target="#admin-content">Edit</button>
  <button hx-get="/allproducts" hx-target="#admin-content">Back</button>
</article>"##,
            id = product.id,
            name = escape(&product.name),
            price = product.display_price(),
            description = escape(&product.description),
        ))
    }

    /// `createProduct`
    pub fn create_product(&self) -> Html<String> {
        Html(
            r##"<form hx-post="/products" hx-encoding="multipart/form-data" hx-target="#messages">
  <label>Name <input type="text" name="product_name"></label>
  <label>Price <input type="text" name="price" inputmode="decimal"></label>
  <label>Description <textarea name="description"></textarea></label>
  <label>Image <input type="file" name="product_image" accept="image/*"></label>
  <button type="submit">Create</button>
</form>"##
                .to_string(),
        )
    }

    /// `editProduct`
    pub fn edit_product(&self, product: &Product) -> Html<String> {
        Html(format!(
            r##"<form hx-put="/products/{id}" hx-encoding="multipart/form-data" hx-target="#messages">
  <label>Name <input type="text" name="product_name" value="{name}"></label>
  <label>Price <input type="text" name="price" value="{price}" inputmode="decimal"></label>
  <label>Description <textarea name="description">{description}</textarea></label>
  <label>Replace image <input type="file" name="product_image" accept="image/*"></label>
  <button type="submit">Save</button>
</form>"##,
            id = product.id,
            name = escape(&product.name),
            price = product.display_price(),
            description = escape(&product.description),
        ))
    }

    /// `messages`
    pub fn messages(&self, messages: &[String], alert_type: &str) -> Html<String> {
        let mut out = format!(r#"<div class="alert alert-{}">"#, escape(alert_type));
        for message in messages {
            let _ = write!(out, "<p>{}</p>", escape(message));
        }
        out.push_str("</div>");
        Html(out)
    }
}

fn page_button(page: i64, limit: i64, label: &str, active: bool) -> String {
    let class = if active { "page active" } else { "page" };
    format!(
        r##"<button class="{class}" hx-get="/products?page={page}&limit={limit}" hx-target="#product-table">{label}</button>"##
    )
}

fn alert(message: &str, alert_type: &str) -> String {
    if message.is_empty() {
        return String::new();
    }
    format!(
        r#"<div class="alert alert-{}">{}</div>"#,
        escape(alert_type),
        escape(message)
    )
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title} | MX Store</title>
  <link rel="stylesheet" href="/static/css/app.css">
  <script src="https://unpkg.com/htmx.org@1.9.12"></script>
</head>
<body>
{body}
</body>
</html>"#,
        title = escape(title),
    )
}

pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
