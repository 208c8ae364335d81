use std::cell::RefCell;
use std::rc::Rc;

use htmllegend_dom::{DomError, MemoryDocument, RenderSurface};
use htmllegend_eventstream::{DomEvent, DomEventType, EventTarget};
use rstest::rstest;

fn sample_document() -> MemoryDocument {
    // <body><div id="chart" class="chart"><div class="legend"><span class="label"/></div></div></body>
    let mut doc = MemoryDocument::new();
    let chart = doc.append_child(doc.body(), "div").unwrap();
    doc.set_attribute(chart, "id", "chart").unwrap();
    doc.set_attribute(chart, "class", "chart").unwrap();
    let legend = doc.append_child(chart, "div").unwrap();
    doc.set_attribute(legend, "class", "legend").unwrap();
    let label = doc.append_child(legend, "span").unwrap();
    doc.set_attribute(label, "class", "label").unwrap();
    doc
}

#[rstest]
#[case("#chart", Some("div"))]
#[case("div.chart", Some("div"))]
#[case("#chart .label", Some("span"))]
#[case("body span", Some("span"))]
#[case("div.legend div", None)]
#[case("p, span.label", Some("span"))]
#[case("section", None)]
fn test_select(#[case] selector: &str, #[case] expected_tag: Option<&str>) {
    let doc = sample_document();
    let found = doc.select(selector).unwrap();
    assert_eq!(found.map(|node| doc.tag(node).unwrap()), expected_tag);
}

#[test]
fn test_select_all_is_scoped_and_ordered() {
    let doc = sample_document();
    let chart = doc.select("#chart").unwrap().unwrap();
    let all = doc.select_all(chart, "*").unwrap();
    let tags: Vec<_> = all.iter().map(|node| doc.tag(*node).unwrap()).collect();
    assert_eq!(tags, vec!["div", "span"]);

    // The scope itself is never included
    assert!(doc.select_all(chart, "#chart").unwrap().is_empty());
}

#[test]
fn test_invalid_selector_is_error() {
    let doc = sample_document();
    assert_eq!(
        doc.select("div > span"),
        Err(DomError::InvalidSelector("div > span".to_string()))
    );
}

#[test]
fn test_remove_detaches_subtree() {
    let mut doc = sample_document();
    let legend = doc.select(".legend").unwrap().unwrap();
    let label = doc.select(".label").unwrap().unwrap();

    doc.remove(legend).unwrap();

    assert!(!doc.contains(legend));
    assert!(!doc.contains(label));
    assert_eq!(doc.select(".label").unwrap(), None);
    assert_eq!(
        doc.set_text(label, "x"),
        Err(DomError::UnknownNode(label))
    );
    assert_eq!(doc.remove(legend), Err(DomError::UnknownNode(legend)));
}

#[test]
fn test_style_attribute_and_properties_share_state() {
    let mut doc = MemoryDocument::new();
    let div = doc.append_child(doc.body(), "div").unwrap();

    doc.set_attribute(div, "style", "max-width:300px; color : red").unwrap();
    assert_eq!(doc.style(div, "max-width").unwrap().as_deref(), Some("300px"));
    assert_eq!(doc.style(div, "color").unwrap().as_deref(), Some("red"));

    doc.set_style(div, "color", "blue").unwrap();
    assert_eq!(
        doc.attribute(div, "style").unwrap().as_deref(),
        Some("max-width: 300px; color: blue;")
    );

    // Declarations without a value are dropped
    doc.set_attribute(div, "style", "max-width:").unwrap();
    assert_eq!(doc.attribute(div, "style").unwrap(), None);
}

#[test]
fn test_set_text_replaces_children() {
    let mut doc = sample_document();
    let legend = doc.select(".legend").unwrap().unwrap();
    doc.set_text(legend, "a < b").unwrap();

    assert!(doc.children(legend).unwrap().is_empty());
    assert_eq!(doc.text(legend).unwrap(), Some("a < b"));
    assert_eq!(
        doc.to_html(legend).unwrap(),
        r#"<div class="legend">a &lt; b</div>"#
    );
}

#[test]
fn test_to_html_escapes_attributes() {
    let mut doc = MemoryDocument::new();
    let span = doc.append_child(doc.body(), "span").unwrap();
    doc.set_attribute(span, "title", "\"quoted\" & more").unwrap();
    doc.set_style(span, "background-color", "red").unwrap();

    assert_eq!(
        doc.to_html(span).unwrap(),
        r#"<span title="&quot;quoted&quot; &amp; more" style="background-color: red;"></span>"#
    );
}

#[test]
fn test_events_bubble_to_ancestors() {
    let mut doc = sample_document();
    let legend = doc.select(".legend").unwrap().unwrap();
    let label = doc.select(".label").unwrap().unwrap();

    let seen = Rc::new(RefCell::new(Vec::new()));
    for (node, name) in [(legend, "legend"), (label, "label")] {
        let seen = seen.clone();
        doc.bind(
            node,
            DomEventType::Click,
            Rc::new(move |event: &DomEvent| seen.borrow_mut().push((name, event.target))),
        )
        .unwrap();
    }

    doc.dispatch_event(&DomEvent::new(DomEventType::Click, label));
    doc.dispatch_event(&DomEvent::new(DomEventType::MouseOver, label));

    assert_eq!(*seen.borrow(), vec![("label", label), ("legend", label)]);
}

#[test]
fn test_bind_replaces_listener() {
    let mut doc = sample_document();
    let legend = doc.select(".legend").unwrap().unwrap();
    let count = Rc::new(RefCell::new(0));

    let first = count.clone();
    doc.bind(
        legend,
        DomEventType::Click,
        Rc::new(move |_: &DomEvent| *first.borrow_mut() += 1),
    )
    .unwrap();
    let second = count.clone();
    doc.bind(
        legend,
        DomEventType::Click,
        Rc::new(move |_: &DomEvent| *second.borrow_mut() += 10),
    )
    .unwrap();

    doc.dispatch_event(&DomEvent::new(DomEventType::Click, legend));
    assert_eq!(*count.borrow(), 10);
    assert!(doc.has_listener(legend, DomEventType::Click).unwrap());
    assert!(!doc.has_listener(legend, DomEventType::MouseOut).unwrap());
}
