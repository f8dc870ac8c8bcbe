use std::cell::RefCell;
use std::rc::Rc;

use magdom::{Key, NodeId};
use mag_component::{
    shared, Button, ComponentBase, ComponentError, Context, Descriptor, EventResult, ItemRef,
    LayoutItem, LayoutList, LayoutListConfig, List, ListEvent, ListEventKind, SharedWidget,
};
use serde_json::json;

fn row(list: &LayoutList, index: usize) -> NodeId {
    list.items()
        .into_iter()
        .find(|item| item.index == index)
        .map(|item| item.node)
        .unwrap()
}

fn text_rows(texts: &[&str]) -> Vec<Descriptor> {
    texts.iter().map(|t| Descriptor::new([*t])).collect()
}

fn button(cx: &mut Context, value: &str) -> SharedWidget {
    shared(Button::new(cx, value).unwrap())
}

fn log() -> Rc<RefCell<Vec<String>>> {
    Rc::new(RefCell::new(Vec::new()))
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn test_structure() {
    let mut cx = Context::new();
    let list = LayoutList::new(
        &mut cx,
        LayoutListConfig::new()
            .size(3)
            .class_name("channels")
            .data(text_rows(&["a", "b"])),
    )
    .unwrap();

    assert_eq!(
        cx.dom.class_name(list.node()),
        "component list vertical layoutList channels"
    );
    assert_eq!(cx.dom.children(list.node()), &[list.body(), list.no_data_node()]);
    assert!(cx.dom.has_class(list.body(), "body"));
    assert!(cx.dom.has_class(list.no_data_node(), "noData"));

    let slots = cx.dom.children(list.body()).to_vec();
    assert_eq!(slots.len(), 3);
    for slot in &slots[..2] {
        let layout = list.row_layout(*slot).unwrap();
        assert_eq!(cx.dom.children(*slot), &[layout.node()]);
        assert!(cx.dom.has_class(layout.node(), "layout"));
        assert_eq!(layout.parent_item(), Some(*slot));
        assert!(!layout.base().focusable());
    }
    assert!(!list.is_ready(slots[2]));
    assert_eq!(cx.dom.text_content(slots[2]), "\u{a0}");
}

#[test]
fn test_with_engine() {
    let mut cx = Context::new();
    let config = LayoutListConfig::new().size(2).data(text_rows(&["a", "b", "c"]));
    let engine: List<Descriptor> = List::new(&mut cx, &config.list_options(), None).unwrap();
    let list = LayoutList::with_engine(&mut cx, engine, config).unwrap();

    assert_eq!(cx.dom.children(list.node()), &[list.body(), list.no_data_node()]);
    assert_eq!(list.list().size(), 2);
    assert_eq!(list.items().len(), 2);
    assert!(list.is_ready(row(&list, 1)));
}

#[test]
fn test_row_class_name_reaches_layout() {
    let mut cx = Context::new();
    let list = LayoutList::new(
        &mut cx,
        LayoutListConfig::new().data(vec![Descriptor::new(["a"]).class_name("wide")]),
    )
    .unwrap();

    let layout = list.row_layout(row(&list, 0)).unwrap();
    assert!(cx.dom.has_class(layout.node(), "wide"));
}

// ============================================================================
// No-data placeholder
// ============================================================================

#[test]
fn test_placeholder_hidden_only_with_data() {
    let mut cx = Context::new();
    let mut list = LayoutList::new(
        &mut cx,
        LayoutListConfig::new().data(text_rows(&["a"])),
    )
    .unwrap();
    let placeholder = list.no_data_node();
    assert!(cx.dom.has_class(placeholder, "hidden"));

    list.set_data(&mut cx, Vec::new(), 0).unwrap();
    assert!(!cx.dom.has_class(placeholder, "hidden"));

    list.set_data(&mut cx, text_rows(&["a", "b"]), 0).unwrap();
    assert!(cx.dom.has_class(placeholder, "hidden"));

    let absent = LayoutList::new(&mut cx, LayoutListConfig::new()).unwrap();
    assert!(!cx.dom.has_class(absent.no_data_node(), "hidden"));
}

#[test]
fn test_empty_then_set_data() {
    let mut cx = Context::new();
    let mut list = LayoutList::new(
        &mut cx,
        LayoutListConfig::new().data(Vec::new()).no_data("Empty"),
    )
    .unwrap();
    let placeholder = list.no_data_node();

    assert!(!cx.dom.has_class(placeholder, "hidden"));
    assert_eq!(cx.dom.text_content(placeholder), "Empty");
    assert!(list.items().is_empty());

    list.set_data(&mut cx, text_rows(&["a"]), 0).unwrap();

    assert!(cx.dom.has_class(placeholder, "hidden"));
    let items = list.items();
    assert_eq!(items.len(), 1);
    assert!(list.is_ready(items[0].node));
    assert_eq!(cx.dom.text_content(items[0].node), "a");
}

#[test]
fn test_no_data_text_is_wrapped() {
    let mut cx = Context::new();
    let list = LayoutList::new(&mut cx, LayoutListConfig::new().no_data("No channels")).unwrap();

    let content = cx.dom.children(list.no_data_node()).to_vec();
    assert_eq!(content.len(), 1);
    assert_eq!(cx.dom.text_content(content[0]), "No channels");
}

#[test]
fn test_no_data_node_is_inserted_as_is() {
    let mut cx = Context::new();
    let custom = cx.dom.create_element_with_class("div", "empty-art");
    let list = LayoutList::new(&mut cx, LayoutListConfig::new().no_data(custom)).unwrap();

    assert_eq!(cx.dom.children(list.no_data_node()), &[custom]);
}

#[test]
fn test_empty_no_data_string_adds_nothing() {
    let mut cx = Context::new();
    let list = LayoutList::new(&mut cx, LayoutListConfig::new().no_data("")).unwrap();
    assert!(cx.dom.children(list.no_data_node()).is_empty());
}

#[cfg(debug_assertions)]
#[test]
fn test_no_data_missing_node_is_rejected() {
    let mut cx = Context::new();
    let gone = cx.dom.create_element("div");
    cx.dom.remove(gone).unwrap();

    let err = LayoutList::new(&mut cx, LayoutListConfig::new().no_data(gone)).unwrap_err();
    assert!(matches!(
        err,
        ComponentError::InvalidConfig {
            module: "mag-component-layout-list",
            field: "noData",
            expected: "string or element",
        }
    ));
    assert_eq!(
        err.to_string(),
        "mag-component-layout-list: wrong config.noData type, expected string or element"
    );
}

// ============================================================================
// Row rendering
// ============================================================================

#[test]
fn test_fixed_data_keeps_nodes() {
    let mut cx = Context::new();
    let mut list = LayoutList::new(
        &mut cx,
        LayoutListConfig::new().fixed_data(true).data(vec![Descriptor::new(vec![
            LayoutItem::text("News"),
            LayoutItem::cell("HD", "badge"),
        ])]),
    )
    .unwrap();
    let slot = row(&list, 0);
    let layout_node = list.row_layout(slot).unwrap().node();
    let children = cx.dom.children(layout_node).to_vec();

    list.set_data(
        &mut cx,
        vec![Descriptor::new(vec![
            LayoutItem::text("Sport"),
            LayoutItem::cell("SD", "plain"),
        ])],
        0,
    )
    .unwrap();

    assert_eq!(list.row_layout(slot).unwrap().node(), layout_node);
    assert_eq!(cx.dom.children(layout_node), children.as_slice());
    assert_eq!(cx.dom.text_content(children[0]), "Sport");
    assert_eq!(cx.dom.text_content(children[1]), "SD");
    assert_eq!(cx.dom.class_name(children[1]), "plain");
}

#[test]
fn test_fixed_data_leaves_widgets_and_skips_extra_items() {
    let mut cx = Context::new();
    let play = button(&mut cx, "Play");
    let mut list = LayoutList::new(
        &mut cx,
        LayoutListConfig::new().fixed_data(true).data(vec![Descriptor::new(vec![
            LayoutItem::text("News"),
            LayoutItem::Widget(play.clone()),
        ])]),
    )
    .unwrap();
    let slot = row(&list, 0);
    let layout_node = list.row_layout(slot).unwrap().node();

    let other = button(&mut cx, "Other");
    list.set_data(
        &mut cx,
        vec![Descriptor::new(vec![
            LayoutItem::text("Sport"),
            LayoutItem::Widget(other),
            LayoutItem::text("extra"),
        ])],
        0,
    )
    .unwrap();

    let children = cx.dom.children(layout_node).to_vec();
    assert_eq!(children.len(), 2);
    assert_eq!(children[1], play.borrow().node());
    assert_eq!(cx.dom.text_content(layout_node), "SportPlay");
}

#[test]
fn test_rebuild_replaces_layout() {
    let mut cx = Context::new();
    let data = text_rows(&["a"]);
    let mut list = LayoutList::new(&mut cx, LayoutListConfig::new().data(data.clone())).unwrap();
    let slot = row(&list, 0);
    let old = list.row_layout(slot).unwrap().node();
    let old_id = list.row_layout(slot).unwrap().id();

    list.set_data(&mut cx, data, 0).unwrap();

    let layout = list.row_layout(slot).unwrap();
    assert_ne!(layout.id(), old_id);
    assert_ne!(layout.node(), old);
    assert!(!cx.dom.contains(old));
    assert_eq!(cx.dom.children(slot), &[layout.node()]);
}

#[test]
fn test_widgets_survive_rebuild() {
    let mut cx = Context::new();
    let play = button(&mut cx, "Play");
    let data = vec![Descriptor::new(vec![LayoutItem::text("News"), LayoutItem::Widget(play.clone())])];
    let mut list = LayoutList::new(&mut cx, LayoutListConfig::new().data(data.clone())).unwrap();

    list.set_data(&mut cx, data, 0).unwrap();

    let slot = row(&list, 0);
    let layout = list.row_layout(slot).unwrap();
    let play_node = play.borrow().node();
    assert_eq!(cx.dom.parent(play_node), Some(layout.node()));
    assert_eq!(layout.children().len(), 1);
}

#[test]
fn test_missing_node_item_fails_render() {
    let mut cx = Context::new();
    let gone = cx.dom.create_element("span");
    cx.dom.remove(gone).unwrap();

    let err = LayoutList::new(
        &mut cx,
        LayoutListConfig::new().data(vec![Descriptor::new(vec![LayoutItem::Node(gone)])]),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ComponentError::Dom(magdom::DomError::NodeNotFound(node)) if node == gone
    ));
}

#[test]
fn test_shrinking_clears_slots() {
    let mut cx = Context::new();
    let mut list = LayoutList::new(
        &mut cx,
        LayoutListConfig::new().size(3).data(text_rows(&["a", "b", "c"])),
    )
    .unwrap();
    let slots = cx.dom.children(list.body()).to_vec();
    let old = list.row_layout(slots[2]).unwrap().node();

    list.set_data(&mut cx, text_rows(&["a"]), 0).unwrap();

    assert!(list.is_ready(slots[0]));
    for slot in &slots[1..] {
        assert!(!list.is_ready(*slot));
        assert!(list.row_layout(*slot).is_none());
        assert_eq!(cx.dom.text_content(*slot), "\u{a0}");
    }
    assert!(!cx.dom.contains(old));
}

#[test]
fn test_value_defaults_to_empty_object() {
    let mut cx = Context::new();
    let list = LayoutList::new(
        &mut cx,
        LayoutListConfig::new().data(vec![
            Descriptor::new(["a"]),
            Descriptor::new(["b"]).value(json!({ "uri": "udp://239.0.0.1:1234" })),
        ]),
    )
    .unwrap();

    assert_eq!(list.row_value(row(&list, 0)), Some(&json!({})));
    assert_eq!(
        list.row_value(row(&list, 1)).unwrap()["uri"],
        "udp://239.0.0.1:1234"
    );

    let item = list.items()[1];
    assert_eq!(list.row_ref(item).value["uri"], "udp://239.0.0.1:1234");
}

#[test]
fn test_stale_handlers_are_dropped() {
    let mut cx = Context::new();
    let with_click = |text: &str| Descriptor::new([text]).on_click(|_| {});

    for fixed in [false, true] {
        let mut list = LayoutList::new(
            &mut cx,
            LayoutListConfig::new()
                .fixed_data(fixed)
                .data(vec![with_click("a"), with_click("b")]),
        )
        .unwrap();
        assert!(list.has_handler(0));
        assert!(list.has_handler(1));

        list.set_data(&mut cx, vec![Descriptor::new(["a"]), with_click("b")], 0)
            .unwrap();
        assert!(!list.has_handler(0));
        assert!(list.has_handler(1));
    }
}

// ============================================================================
// Clicks and focus delegation
// ============================================================================

#[test]
fn test_handler_runs_once_after_delegation() {
    let mut cx = Context::new();
    let calls = log();
    let sink = Rc::clone(&calls);
    let mut list = LayoutList::new(
        &mut cx,
        LayoutListConfig::new().data(vec![
            Descriptor::new(["a"]),
            Descriptor::new(["b"])
                .value(json!({ "id": 7 }))
                .on_click(move |row| sink.borrow_mut().push(format!("handler {}", row.value["id"]))),
        ]),
    )
    .unwrap();
    for (kind, label) in [(ListEventKind::FocusItem, "focus"), (ListEventKind::ClickItem, "listener")] {
        let sink = Rc::clone(&calls);
        list.add_listener(kind, move |_| sink.borrow_mut().push(label.to_string()));
    }

    let target = row(&list, 1);
    list.click_inner(&mut cx, target, None).unwrap();

    assert_eq!(*calls.borrow(), ["focus", "handler 7", "listener"]);
}

#[test]
fn test_handler_receives_row() {
    let mut cx = Context::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut list = LayoutList::new(
        &mut cx,
        LayoutListConfig::new().data(vec![
            Descriptor::new(["a"]),
            Descriptor::new(["b"]).on_click(move |row| sink.borrow_mut().push(row.clone())),
        ]),
    )
    .unwrap();

    let target = row(&list, 1);
    list.click_item(&mut cx, target).unwrap();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].node, target);
    assert_eq!(seen[0].index, 1);
    assert_eq!(seen[0].value, json!({}));
    assert_eq!(list.focused_item().map(|i| i.node), Some(target));
}

#[test]
fn test_inner_click_focuses_list_and_row() {
    let mut cx = Context::new();
    let play = button(&mut cx, "Play");
    let mut list = LayoutList::new(
        &mut cx,
        LayoutListConfig::new().data(vec![
            Descriptor::new(["a"]),
            Descriptor::new(vec![LayoutItem::text("b"), LayoutItem::Widget(play.clone())]),
        ]),
    )
    .unwrap();
    let clicks = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&clicks);
    list.add_listener(ListEventKind::ClickItem, move |e| sink.borrow_mut().push(*e));

    let target = row(&list, 1);
    play.borrow_mut().focus(&mut cx);
    list.click_inner(&mut cx, target, Some(0)).unwrap();

    assert!(cx.is_focused(list.id()));
    assert!(!cx.is_focused(play.borrow().id()));
    assert_eq!(list.focused_item(), Some(ItemRef { node: target, index: 1 }));
    assert_eq!(
        *clicks.borrow(),
        vec![ListEvent::ClickItem {
            item: ItemRef { node: target, index: 1 },
            inner: true,
        }]
    );
}

#[test]
fn test_outer_click_cascades_into_layout() {
    let mut cx = Context::new();
    let watch = button(&mut cx, "Watch");
    let info = button(&mut cx, "Info");
    let mut list = LayoutList::new(
        &mut cx,
        LayoutListConfig::new().data(vec![
            Descriptor::new(["a"]),
            Descriptor::new(vec![
                LayoutItem::text("b"),
                LayoutItem::Widget(watch.clone()),
                LayoutItem::Widget(info.clone()),
            ]),
        ]),
    )
    .unwrap();
    list.focus(&mut cx);

    let plain = row(&list, 0);
    list.click_item(&mut cx, plain).unwrap();
    assert!(cx.is_focused(list.id()));

    let target = row(&list, 1);
    list.with_row_layout(&mut cx, target, |layout, cx| layout.focus_child(cx, 1))
        .unwrap();
    list.focus(&mut cx);

    list.click_item(&mut cx, target).unwrap();
    assert!(cx.is_focused(info.borrow().id()));
    assert!(cx.dom.has_class(info.borrow().node(), "focus"));
    assert!(!cx.is_focused(watch.borrow().id()));
}

#[test]
fn test_layout_click_dispatches_immediately() {
    let mut cx = Context::new();
    let calls = Rc::new(RefCell::new(Vec::new()));
    let play = button(&mut cx, "Play");
    let (first, second) = (Rc::clone(&calls), Rc::clone(&calls));
    let mut list = LayoutList::new(
        &mut cx,
        LayoutListConfig::new().data(vec![
            Descriptor::new(["a"]).on_click(move |row| first.borrow_mut().push(row.index)),
            Descriptor::new(vec![LayoutItem::text("b"), LayoutItem::Widget(play.clone())])
                .on_click(move |row| second.borrow_mut().push(row.index)),
        ]),
    )
    .unwrap();

    let target = row(&list, 0);
    list.with_row_layout(&mut cx, target, |layout, cx| layout.click(cx, None))
        .unwrap();
    assert_eq!(*calls.borrow(), [0]);
    assert!(cx.is_focused(list.id()));

    // later clicks on another row only report that row
    list.focus_index(&mut cx, 1).unwrap();
    list.handle_key(&mut cx, Key::Ok).unwrap();
    assert!(cx.is_focused(play.borrow().id()));
    list.handle_key(&mut cx, Key::Ok).unwrap();
    assert_eq!(*calls.borrow(), [0, 1, 1]);
}

#[test]
fn test_rebuild_returns_focus_from_destroyed_widget() {
    let mut cx = Context::new();
    let play = button(&mut cx, "Play");
    let mut list = LayoutList::new(
        &mut cx,
        LayoutListConfig::new().data(vec![Descriptor::new(vec![
            LayoutItem::text("News"),
            LayoutItem::Widget(play.clone()),
        ])]),
    )
    .unwrap();
    list.focus(&mut cx);
    list.handle_key(&mut cx, Key::Ok).unwrap();
    assert!(cx.is_focused(play.borrow().id()));

    list.set_data(&mut cx, text_rows(&["plain"]), 0).unwrap();

    let play_node = play.borrow().node();
    assert_eq!(cx.dom.parent(play_node), None);
    assert!(!cx.is_focused(play.borrow().id()));
    assert!(!cx.dom.has_class(play_node, "focus"));
    assert!(cx.is_focused(list.id()));
}

#[test]
fn test_fixed_rows_keep_widget_focus() {
    let mut cx = Context::new();
    let play = button(&mut cx, "Play");
    let data = vec![Descriptor::new(vec![LayoutItem::text("News"), LayoutItem::Widget(play.clone())])];
    let mut list = LayoutList::new(
        &mut cx,
        LayoutListConfig::new().fixed_data(true).data(data.clone()),
    )
    .unwrap();
    list.focus(&mut cx);
    list.handle_key(&mut cx, Key::Ok).unwrap();

    list.set_data(&mut cx, data, 0).unwrap();

    assert!(cx.is_focused(play.borrow().id()));
}

#[test]
fn test_click_on_empty_slot_is_an_error() {
    let mut cx = Context::new();
    let mut list = LayoutList::new(
        &mut cx,
        LayoutListConfig::new().size(3).data(text_rows(&["a"])),
    )
    .unwrap();
    let empty = cx.dom.children(list.body())[2];

    let err = list.click_item(&mut cx, empty).unwrap_err();
    assert!(matches!(err, ComponentError::MissingRow(node) if node == empty));
    assert!(matches!(
        list.click_inner(&mut cx, empty, None),
        Err(ComponentError::MissingRow(_))
    ));
}

// ============================================================================
// Keys
// ============================================================================

#[test]
fn test_key_routing_through_nested_layout() {
    let mut cx = Context::new();
    let calls = log();
    let watch = button(&mut cx, "Watch");
    let info = button(&mut cx, "Info");
    let handler_log = Rc::clone(&calls);
    let mut list = LayoutList::new(
        &mut cx,
        LayoutListConfig::new().data(vec![Descriptor::new(vec![
            LayoutItem::text("News"),
            LayoutItem::Widget(watch.clone()),
            LayoutItem::Widget(info.clone()),
        ])
        .on_click(move |_| handler_log.borrow_mut().push("handler".to_string()))]),
    )
    .unwrap();
    let inner_flags = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&inner_flags);
    list.add_listener(ListEventKind::ClickItem, move |e| {
        if let ListEvent::ClickItem { inner, .. } = e {
            sink.borrow_mut().push(*inner);
        }
    });
    list.focus(&mut cx);

    // outer Ok: into the row
    assert_eq!(list.handle_key(&mut cx, Key::Ok).unwrap(), EventResult::Consumed);
    assert!(cx.is_focused(watch.borrow().id()));

    // Right moves between the row's widgets
    list.handle_key(&mut cx, Key::Right).unwrap();
    assert!(cx.is_focused(info.borrow().id()));

    // Back leaves the row
    list.handle_key(&mut cx, Key::Back).unwrap();
    assert!(cx.is_focused(list.id()));

    // Ok goes back to the remembered widget, a second Ok clicks it
    list.handle_key(&mut cx, Key::Ok).unwrap();
    assert!(cx.is_focused(info.borrow().id()));
    list.handle_key(&mut cx, Key::Ok).unwrap();
    assert!(cx.is_focused(list.id()));

    assert_eq!(*inner_flags.borrow(), [false, false, true]);
    assert_eq!(calls.borrow().len(), 3);
}

#[test]
fn test_navigation_keys_reach_the_list() {
    let mut cx = Context::new();
    let mut list = LayoutList::new(
        &mut cx,
        LayoutListConfig::new().size(2).data(text_rows(&["a", "b", "c"])),
    )
    .unwrap();

    assert_eq!(list.handle_key(&mut cx, Key::Down).unwrap(), EventResult::Consumed);
    list.handle_key(&mut cx, Key::Down).unwrap();

    let focused = list.focused_item().unwrap();
    assert_eq!(focused.index, 2);
    assert_eq!(cx.dom.text_content(focused.node), "c");
    assert_eq!(list.handle_key(&mut cx, Key::Info).unwrap(), EventResult::Ignored);
}

#[test]
fn test_ok_on_empty_list_is_ignored() {
    let mut cx = Context::new();
    let mut list = LayoutList::new(&mut cx, LayoutListConfig::new()).unwrap();
    assert_eq!(list.handle_key(&mut cx, Key::Ok).unwrap(), EventResult::Ignored);
}

// ============================================================================
// Configuration and propagation
// ============================================================================

#[test]
fn test_from_json() {
    let mut cx = Context::new();
    let config = LayoutListConfig::from_json(
        r#"{
            "size": 4,
            "noData": "No channels",
            "focusIndex": 1,
            "data": [
                { "items": ["News", { "value": "HD", "className": "badge" }] },
                { "items": ["Sport"], "value": { "uri": "udp://239.0.0.2:1234" } }
            ]
        }"#,
    )
    .unwrap();
    let list = LayoutList::new(&mut cx, config).unwrap();

    assert!(cx.dom.has_class(list.no_data_node(), "hidden"));
    assert_eq!(cx.dom.text_content(list.no_data_node()), "No channels");
    assert_eq!(cx.dom.text_content(row(&list, 0)), "NewsHD");
    let focused = list.focused_item().unwrap();
    assert_eq!(focused.index, 1);
    assert_eq!(list.row_value(focused.node).unwrap()["uri"], "udp://239.0.0.2:1234");
}

#[test]
fn test_descriptor_from_json_value() {
    let descriptor: Descriptor = serde_json::from_value(json!({
        "items": [{ "className": "star" }, "Channel 1"],
        "className": "fav"
    }))
    .unwrap();

    assert_eq!(descriptor.items.len(), 2);
    assert_eq!(descriptor.class_name.as_deref(), Some("fav"));
    assert_eq!(descriptor.items[0].plain_text(), Some(("", "star")));
    assert!(descriptor.click.is_none());
}

#[test]
fn test_numeric_no_data_is_rejected() {
    let err = LayoutListConfig::from_json(r#"{ "noData": 1 }"#).unwrap_err();
    assert!(matches!(err, ComponentError::Config(_)));
}

#[test]
fn test_click_propagates_to_parent() {
    let mut cx = Context::new();
    let parent = ComponentBase::new(&mut cx, "parent", "parent").id();
    let mut list = LayoutList::new(&mut cx, LayoutListConfig::new().data(text_rows(&["a", "b"]))).unwrap();
    list.set_parent(Some(parent));

    let first = row(&list, 0);
    list.click_item(&mut cx, first).unwrap();
    let second = row(&list, 1);
    list.click_item(&mut cx, second).unwrap();

    let events: Vec<_> = cx.take_propagated().into_iter().map(|p| p.event).collect();
    assert_eq!(events, ["click:item", "focus:item", "click:item"]);
}

#[test]
fn test_propagation_can_be_disabled() {
    let mut cx = Context::new();
    let parent = ComponentBase::new(&mut cx, "parent", "parent").id();
    let mut list = LayoutList::new(
        &mut cx,
        LayoutListConfig::new().propagate(false).data(text_rows(&["a"])),
    )
    .unwrap();
    list.set_parent(Some(parent));

    let first = row(&list, 0);
    list.click_item(&mut cx, first).unwrap();
    assert!(cx.take_propagated().is_empty());
}
