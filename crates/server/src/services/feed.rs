//! RSS 2.0 product feed rendering.
//!
//! Renders the normalized catalog projection as a Google Merchant compatible
//! feed (`g:` namespace). Rendering is pure string composition; the source
//! query and row normalization live in `db::products`. XML escaping is the
//! last transformation applied to every free-text field, after all other
//! string composition, so values can never be double-escaped.

use crate::models::CatalogItem;

/// Channel title advertised to the feed consumer.
const CHANNEL_TITLE: &str = "Shuk Online Store";

/// Static channel description.
const CHANNEL_DESCRIPTION: &str = "Product feed for the Shuk online storefront";

/// Currency suffix for all feed prices.
const PRICE_CURRENCY: &str = "ILS";

/// Escape a string for embedding in XML text or attribute content.
#[must_use]
pub fn xml_escape(value: &str) -> String {
    // Ampersand first so already-produced entities are not re-escaped.
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Render the complete feed document.
///
/// Items appear in the order given (the source query is reverse
/// chronological). An empty slice still yields a full channel envelope.
#[must_use]
pub fn render_feed(items: &[CatalogItem], base_url: &str) -> String {
    let mut doc = String::with_capacity(512 + items.len() * 512);

    doc.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    doc.push_str("<rss version=\"2.0\" xmlns:g=\"http://base.google.com/ns/1.0\">\n");
    doc.push_str("<channel>\n");
    doc.push_str(&format!("<title>{}</title>\n", xml_escape(CHANNEL_TITLE)));
    doc.push_str(&format!("<link>{}</link>\n", xml_escape(base_url)));
    doc.push_str(&format!(
        "<description>{}</description>\n",
        xml_escape(CHANNEL_DESCRIPTION)
    ));

    for item in items {
        render_item(&mut doc, item, base_url);
    }

    doc.push_str("</channel>\n");
    doc.push_str("</rss>\n");
    doc
}

/// Append one `<item>` block.
fn render_item(doc: &mut String, item: &CatalogItem, base_url: &str) {
    let link = format!("{base_url}/product/{}", item.id);

    doc.push_str("<item>\n");
    doc.push_str(&format!("<g:id>{}</g:id>\n", xml_escape(&item.id)));
    doc.push_str(&format!("<title>{}</title>\n", xml_escape(&item.name)));
    doc.push_str(&format!(
        "<description>{}</description>\n",
        xml_escape(&item.description)
    ));
    doc.push_str(&format!("<link>{}</link>\n", xml_escape(&link)));
    doc.push_str(&format!("<g:brand>{}</g:brand>\n", xml_escape(&item.brand)));
    doc.push_str("<g:condition>new</g:condition>\n");
    doc.push_str(&format!(
        "<g:availability>{}</g:availability>\n",
        item.availability()
    ));
    doc.push_str(&format!(
        "<g:price>{} {PRICE_CURRENCY}</g:price>\n",
        item.price
    ));
    if let Some(image_url) = &item.image_url {
        doc.push_str(&format!(
            "<g:image_link>{}</g:image_link>\n",
            xml_escape(image_url)
        ));
    }
    if let Some(product_type) = item
        .product_type
        .as_deref()
        .filter(|value| !value.is_empty())
    {
        doc.push_str(&format!(
            "<g:custom_label_0>{}</g:custom_label_0>\n",
            xml_escape(product_type)
        ));
    }
    doc.push_str("</item>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> CatalogItem {
        CatalogItem {
            id: "42".to_string(),
            name: "Widget".to_string(),
            brand: "Generic".to_string(),
            product_type: Some("Hardware".to_string()),
            description: "A widget".to_string(),
            price: "9.50".to_string(),
            image_url: Some("https://www.shuk-online.co.il/img/w.png".to_string()),
            quantity: 2,
        }
    }

    #[test]
    fn test_renders_required_item_fields() {
        let feed = render_feed(&[widget()], "https://www.shuk-online.co.il");

        assert!(feed.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(feed.contains("<g:id>42</g:id>"));
        assert!(feed.contains("<title>Widget</title>"));
        assert!(feed.contains("<description>A widget</description>"));
        assert!(feed.contains("<link>https://www.shuk-online.co.il/product/42</link>"));
        assert!(feed.contains("<g:brand>Generic</g:brand>"));
        assert!(feed.contains("<g:condition>new</g:condition>"));
        assert!(feed.contains("<g:availability>in stock</g:availability>"));
        assert!(feed.contains("<g:price>9.50 ILS</g:price>"));
        assert!(feed.contains("<g:image_link>https://www.shuk-online.co.il/img/w.png</g:image_link>"));
        assert!(feed.contains("<g:custom_label_0>Hardware</g:custom_label_0>"));
    }

    #[test]
    fn test_out_of_stock_and_optional_fields_omitted() {
        let item = CatalogItem {
            product_type: None,
            image_url: None,
            quantity: 0,
            ..widget()
        };
        let feed = render_feed(&[item], "https://www.shuk-online.co.il");

        assert!(feed.contains("<g:availability>out of stock</g:availability>"));
        assert!(!feed.contains("<g:image_link>"));
        assert!(!feed.contains("<g:custom_label_0>"));
    }

    #[test]
    fn test_empty_product_type_omits_custom_label() {
        let item = CatalogItem {
            product_type: Some(String::new()),
            ..widget()
        };
        let feed = render_feed(&[item], "https://www.shuk-online.co.il");
        assert!(!feed.contains("<g:custom_label_0>"));
    }

    #[test]
    fn test_empty_catalog_still_yields_envelope() {
        let feed = render_feed(&[], "https://www.shuk-online.co.il");

        assert!(feed.contains("<rss version=\"2.0\""));
        assert!(feed.contains("<channel>"));
        assert!(feed.contains("</channel>"));
        assert!(feed.contains("<title>Shuk Online Store</title>"));
        assert!(!feed.contains("<item>"));
    }

    #[test]
    fn test_items_keep_source_order() {
        let first = CatalogItem {
            id: "newest".to_string(),
            ..widget()
        };
        let second = CatalogItem {
            id: "older".to_string(),
            ..widget()
        };
        let feed = render_feed(&[first, second], "https://www.shuk-online.co.il");

        let newest = feed.find("<g:id>newest</g:id>").expect("newest present");
        let older = feed.find("<g:id>older</g:id>").expect("older present");
        assert!(newest < older);
    }

    #[test]
    fn test_xml_escape_covers_all_five_entities() {
        assert_eq!(
            xml_escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&apos;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_xml_escape_replaces_ampersand_first() {
        // '&' is replaced before the other entities, so entity text produced
        // by later replacements is never re-escaped.
        assert_eq!(xml_escape("<"), "&lt;");
        assert_eq!(xml_escape("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_hostile_name_round_trips_as_entities() {
        let item = CatalogItem {
            name: r#"5" bolts <& "nuts">"#.to_string(),
            ..widget()
        };
        let feed = render_feed(&[item], "https://www.shuk-online.co.il");

        assert!(
            feed.contains("<title>5&quot; bolts &lt;&amp; &quot;nuts&quot;&gt;</title>"),
            "feed was: {feed}"
        );
        // No raw markup characters may survive inside the title.
        let title_start = feed.find("<title>5").expect("title present");
        let title_end = feed[title_start..].find("</title>").expect("title closed") + title_start;
        let inner = feed.get(title_start + "<title>".len()..title_end).expect("in bounds");
        assert!(!inner.contains('<') && !inner.contains('>') && !inner.contains('"'));
    }
}
