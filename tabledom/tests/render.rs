use tabledom::{to_html, Element, HtmlWriter};

#[test]
fn test_nested_markup() {
    let root = Element::div()
        .class("wrapper")
        .marker("body")
        .child(Element::paragraph("No rows"))
        .child(Element::button("Reset"));

    assert_eq!(
        to_html(&root),
        concat!(
            r#"<div class="wrapper" data-element="body">"#,
            "<p>No rows</p>",
            r#"<button type="button">Reset</button>"#,
            "</div>"
        )
    );
}

#[test]
fn test_text_is_escaped_raw_is_not() {
    let text = Element::div().text("<b>bold</b>");
    let raw = Element::div().raw("<b>bold</b>");
    assert_eq!(to_html(&text), "<div>&lt;b&gt;bold&lt;/b&gt;</div>");
    assert_eq!(to_html(&raw), "<div><b>bold</b></div>");
}

#[test]
fn test_attribute_values_escaped() {
    let link = Element::anchor("/search?a=1&b=\"2\"").text("go");
    assert_eq!(
        to_html(&link),
        r#"<a href="/search?a=1&amp;b=&quot;2&quot;">go</a>"#
    );
}

#[test]
fn test_writer_with_ids() {
    let el = Element::span().id("arrow-1");
    assert_eq!(HtmlWriter::new().with_ids(true).write(&el), r#"<span id="arrow-1"></span>"#);
    assert_eq!(HtmlWriter::new().write(&el), "<span></span>");
}

#[test]
fn test_child_replaces_text_content() {
    let el = Element::div().text("old").child(Element::span());
    assert_eq!(to_html(&el), "<div><span></span></div>");
}
