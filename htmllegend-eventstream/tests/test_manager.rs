use htmllegend_common::NodeId;
use htmllegend_eventstream::{
    DomEvent, DomEventType, EventStreamManager, EventTarget, MouseButton, PointerEvent,
};
use rstest::rstest;

#[derive(Default)]
struct Recorder {
    events: Vec<DomEvent>,
}

impl EventTarget for Recorder {
    fn dispatch_event(&mut self, event: &DomEvent) {
        self.events.push(event.clone());
    }
}

fn moved(node: usize) -> PointerEvent {
    PointerEvent::Moved {
        target: Some(NodeId(node)),
    }
}

#[test]
fn test_hover_enter_and_leave() {
    let mut manager = EventStreamManager::new();
    let mut recorder = Recorder::default();

    manager.dispatch(&moved(1), &mut recorder);
    // Moving within the same element does not repeat mouseover
    manager.dispatch(&moved(1), &mut recorder);
    manager.dispatch(&moved(2), &mut recorder);
    manager.dispatch(&PointerEvent::Moved { target: None }, &mut recorder);

    assert_eq!(
        recorder.events,
        vec![
            DomEvent::new(DomEventType::MouseOver, NodeId(1)),
            DomEvent::new(DomEventType::MouseOut, NodeId(1)),
            DomEvent::new(DomEventType::MouseOver, NodeId(2)),
            DomEvent::new(DomEventType::MouseOut, NodeId(2)),
        ]
    );
    assert_eq!(manager.hovered(), None);
}

#[test]
fn test_cursor_leaving_page_emits_mouseout() {
    let mut manager = EventStreamManager::new();
    let mut recorder = Recorder::default();

    manager.dispatch(&moved(4), &mut recorder);
    manager.dispatch(&PointerEvent::Left, &mut recorder);

    assert_eq!(
        recorder.events.last(),
        Some(&DomEvent::new(DomEventType::MouseOut, NodeId(4)))
    );
}

#[test]
fn test_click_on_same_element() {
    let mut manager = EventStreamManager::new();
    let mut recorder = Recorder::default();

    manager.dispatch(&moved(3), &mut recorder);
    manager.dispatch(
        &PointerEvent::Pressed {
            target: Some(NodeId(3)),
            button: MouseButton::Left,
        },
        &mut recorder,
    );
    manager.dispatch(
        &PointerEvent::Released {
            target: Some(NodeId(3)),
            button: MouseButton::Left,
        },
        &mut recorder,
    );

    assert_eq!(
        recorder.events,
        vec![
            DomEvent::new(DomEventType::MouseOver, NodeId(3)),
            DomEvent::new(DomEventType::Click, NodeId(3)),
        ]
    );
}

#[rstest]
#[case(NodeId(1), NodeId(2), MouseButton::Left)]
#[case(NodeId(1), NodeId(1), MouseButton::Right)]
fn test_no_click(#[case] down: NodeId, #[case] up: NodeId, #[case] button: MouseButton) {
    let mut manager = EventStreamManager::new();
    let mut recorder = Recorder::default();

    manager.dispatch(
        &PointerEvent::Pressed {
            target: Some(down),
            button,
        },
        &mut recorder,
    );
    manager.dispatch(
        &PointerEvent::Released {
            target: Some(up),
            button,
        },
        &mut recorder,
    );

    assert!(recorder
        .events
        .iter()
        .all(|event| event.event_type != DomEventType::Click));
}

#[test]
fn test_press_outside_elements_cancels_earlier_press() {
    let mut manager = EventStreamManager::new();
    let mut recorder = Recorder::default();

    manager.dispatch(
        &PointerEvent::Pressed {
            target: Some(NodeId(1)),
            button: MouseButton::Left,
        },
        &mut recorder,
    );
    manager.dispatch(
        &PointerEvent::Pressed {
            target: None,
            button: MouseButton::Left,
        },
        &mut recorder,
    );
    manager.dispatch(
        &PointerEvent::Released {
            target: Some(NodeId(1)),
            button: MouseButton::Left,
        },
        &mut recorder,
    );

    let types: Vec<_> = recorder.events.iter().map(|event| event.event_type).collect();
    assert_eq!(
        types,
        vec![
            DomEventType::MouseOver,
            DomEventType::MouseOut,
            DomEventType::MouseOver,
        ]
    );
}
