//! Server-rendered HTML for the product views.
//!
//! Plain string templates; every interpolated value goes through `escape`.

use std::fmt::Write;

use crate::product::{Product, ProductForm, ProductId, ValidationErrors};

pub(super) fn index(products: &[Product]) -> String {
    let mut rows = String::new();
    for p in products {
        let _ = write!(
            rows,
            "<tr><td>{id}</td><td>{name}</td><td>{price}</td><td>{stock}</td>\
             <td><a href=\"/product/{id}\">Details</a> | \
             <a href=\"/product/edit/{id}\">Edit</a> | \
             <a href=\"/product/delete/{id}\">Delete</a></td></tr>",
            id = p.id,
            name = escape(&p.name),
            price = p.price,
            stock = yes_no(p.in_stock),
        );
    }
    if products.is_empty() {
        rows.push_str("<tr><td colspan=\"5\">No products yet.</td></tr>");
    }

    let body = format!(
        "<h1>Products</h1>\
         <p><a href=\"/product/create\">Create new</a></p>\
         <table><thead><tr><th>Id</th><th>Name</th><th>Price</th><th>In stock</th><th></th></tr></thead>\
         <tbody>{rows}</tbody></table>"
    );
    layout("Products", &body)
}

pub(super) fn details(product: &Product) -> String {
    let body = format!(
        "<h1>{name}</h1>{fields}\
         <p><a href=\"/product/edit/{id}\">Edit</a> | <a href=\"/product\">Back to list</a></p>",
        name = escape(&product.name),
        fields = definition_list(product),
        id = product.id,
    );
    layout("Product details", &body)
}

pub(super) fn create_form(form: &ProductForm, errors: Option<&ValidationErrors>) -> String {
    let body = format!(
        "<h1>Create product</h1>{}",
        product_form("/product/create", form, errors)
    );
    layout("Create product", &body)
}

pub(super) fn edit_form(
    id: ProductId,
    form: &ProductForm,
    errors: Option<&ValidationErrors>,
) -> String {
    let body = format!(
        "<h1>Edit product</h1>{}",
        product_form(&format!("/product/edit/{id}"), form, errors)
    );
    layout("Edit product", &body)
}

pub(super) fn delete_confirm(product: &Product) -> String {
    let body = format!(
        "<h1>Delete product</h1>\
         <p>Are you sure you want to delete this product?</p>{fields}\
         <form method=\"post\" action=\"/product/delete/{id}\">\
         <button type=\"submit\">Delete</button> <a href=\"/product\">Back to list</a>\
         </form>",
        fields = definition_list(product),
        id = product.id,
    );
    layout("Delete product", &body)
}

pub(super) fn not_found() -> String {
    layout(
        "Not found",
        "<h1>Not found</h1><p>No such product.</p><p><a href=\"/product\">Back to list</a></p>",
    )
}

pub(super) fn server_error() -> String {
    layout(
        "Error",
        "<h1>Error</h1><p>An error occurred while processing your request.</p>",
    )
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{}</title></head>\
         <body><main>{}</main></body></html>",
        escape(title),
        body
    )
}

fn definition_list(product: &Product) -> String {
    format!(
        "<dl><dt>Name</dt><dd>{}</dd><dt>Description</dt><dd>{}</dd>\
         <dt>Price</dt><dd>{}</dd><dt>In stock</dt><dd>{}</dd></dl>",
        escape(&product.name),
        escape(&product.description),
        product.price,
        yes_no(product.in_stock),
    )
}

fn product_form(action: &str, form: &ProductForm, errors: Option<&ValidationErrors>) -> String {
    let value = |v: &Option<String>| escape(v.as_deref().unwrap_or(""));
    let error = |field: &str| match errors.and_then(|e| e.message_for(field)) {
        Some(message) => format!("<span class=\"error\">{}</span>", escape(message)),
        None => String::new(),
    };
    let checked = match form.in_stock.as_deref() {
        Some(v) if v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("on") => " checked",
        _ => "",
    };
    let id_field = match &form.id {
        Some(_) => format!("<input type=\"hidden\" name=\"id\" value=\"{}\">", value(&form.id)),
        None => String::new(),
    };

    format!(
        "<form method=\"post\" action=\"{action}\">{id_field}\
         <label>Name <input name=\"name\" value=\"{name}\"></label>{name_error}\
         <label>Description <input name=\"description\" value=\"{description}\"></label>{description_error}\
         <label>Price <input name=\"price\" value=\"{price}\"></label>{price_error}\
         <label><input type=\"checkbox\" name=\"in_stock\" value=\"true\"{checked}> In stock</label>{stock_error}\
         <button type=\"submit\">Save</button> <a href=\"/product\">Back to list</a>\
         </form>",
        action = escape(action),
        name = value(&form.name),
        name_error = error("name"),
        description = value(&form.description),
        description_error = error("description"),
        price = value(&form.price),
        price_error = error("price"),
        stock_error = error("in_stock"),
    )
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

pub(super) fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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
