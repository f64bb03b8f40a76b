use flowdesk::canvas::{
    CanvasEvent, EditorChange, EditorSettings, FlowEditor, InteractionMode, Modifiers, PaletteItem,
    PointerButton,
};
use flowdesk::graph::{FlowGraph, FlowNode, NodeConfig, NodeId, NodeKind, Point, Tone, Vec2};

/// Two nodes: "a" at (0,0) and "b" at (400,0), both 280x160.
fn editor() -> FlowEditor {
    let graph = FlowGraph::from_parts(
        vec![
            FlowNode::new(NodeId::new("a"), "A", Point::new(0.0, 0.0), NodeConfig::Action),
            FlowNode::new(NodeId::new("b"), "B", Point::new(400.0, 0.0), NodeConfig::Condition),
        ],
        Vec::new(),
    );
    FlowEditor::new(graph, EditorSettings::default())
}

fn down(editor: &mut FlowEditor, x: f32, y: f32, button: PointerButton) -> EditorChange {
    editor.handle(CanvasEvent::PointerDown {
        pos: Point::new(x, y),
        button,
    })
}

fn move_to(editor: &mut FlowEditor, x: f32, y: f32) -> EditorChange {
    editor.handle(CanvasEvent::PointerMove { pos: Point::new(x, y) })
}

fn position(editor: &FlowEditor, id: &str) -> Point {
    editor.graph().node(&NodeId::new(id)).expect("node exists").position()
}

#[test]
fn test_drag_moves_node_and_selects_it() {
    let mut editor = editor();
    assert_eq!(
        down(&mut editor, 100.0, 40.0, PointerButton::Primary),
        EditorChange::Selected(NodeId::new("a"))
    );
    assert_eq!(editor.controller().mode(), &InteractionMode::DraggingNode(NodeId::new("a")));
    assert_eq!(move_to(&mut editor, 130.0, 60.0), EditorChange::NodeMoved);
    move_to(&mut editor, 140.0, 50.0);
    editor.handle(CanvasEvent::PointerUp);

    assert_eq!(position(&editor, "a"), Point::new(40.0, 10.0));
    assert_eq!(position(&editor, "b"), Point::new(400.0, 0.0));
    assert!(editor.controller().is_idle());
    // the inspector snapshot follows the drag
    assert_eq!(editor.inspector().selected().map(|n| n.position()), Some(Point::new(40.0, 10.0)));
}

#[test]
fn test_drag_is_scaled_by_zoom() {
    let mut editor = editor();
    editor.handle(CanvasEvent::Wheel {
        delta_y: -1000.0,
        modifiers: Modifiers {
            ctrl: true,
            command: false,
        },
    });
    assert_eq!(editor.viewport().zoom(), 2.0);

    // node "a" spans (0,0)-(560,320) on screen at zoom 2
    down(&mut editor, 100.0, 100.0, PointerButton::Primary);
    move_to(&mut editor, 160.0, 80.0);
    editor.handle(CanvasEvent::PointerUp);
    assert_eq!(position(&editor, "a"), Point::new(30.0, -10.0));
}

#[test]
fn test_zero_movement_drag_changes_nothing() {
    let mut editor = editor();
    let before = editor.graph().clone();
    down(&mut editor, 450.0, 20.0, PointerButton::Primary);
    assert_eq!(move_to(&mut editor, 450.0, 20.0), EditorChange::None);
    editor.handle(CanvasEvent::PointerUp);
    assert_eq!(editor.graph(), &before);
}

#[test]
fn test_pan_on_empty_canvas_keeps_selection() {
    let mut editor = editor();
    down(&mut editor, 10.0, 10.0, PointerButton::Primary);
    editor.handle(CanvasEvent::PointerUp);
    assert_eq!(editor.inspector().selected_id(), Some(&NodeId::new("a")));

    assert_eq!(down(&mut editor, 350.0, 600.0, PointerButton::Middle), EditorChange::None);
    assert_eq!(editor.controller().mode(), &InteractionMode::PanningCanvas);
    assert_eq!(move_to(&mut editor, 375.0, 590.0), EditorChange::ViewChanged);
    editor.handle(CanvasEvent::PointerUp);

    assert_eq!(editor.viewport().pan(), Vec2::new(25.0, -10.0));
    assert_eq!(editor.viewport().zoom(), 1.0);
    assert_eq!(position(&editor, "a"), Point::ZERO);
    assert_eq!(editor.inspector().selected_id(), Some(&NodeId::new("a")));
}

#[test]
fn test_secondary_button_and_ports_start_nothing() {
    let mut editor = editor();
    down(&mut editor, 100.0, 40.0, PointerButton::Secondary);
    assert!(editor.controller().is_idle());
    down(&mut editor, 350.0, 600.0, PointerButton::Secondary);
    assert!(editor.controller().is_idle());

    // output port of "a" is at (280, 80)
    down(&mut editor, 282.0, 79.0, PointerButton::Primary);
    assert!(editor.controller().is_idle());
    assert!(editor.inspector().selected().is_none());
}

#[test]
fn test_topmost_node_wins_overlap() {
    let mut graph = FlowGraph::new();
    graph.add_node("under", Point::new(0.0, 0.0), NodeConfig::Action);
    let top = graph.add_node("over", Point::new(100.0, 50.0), NodeConfig::Action).id().clone();
    let mut editor = FlowEditor::new(graph, EditorSettings::default());
    assert_eq!(
        down(&mut editor, 150.0, 100.0, PointerButton::Primary),
        EditorChange::Selected(top)
    );
}

#[test]
fn test_selection_is_exclusive() {
    let mut editor = editor();
    down(&mut editor, 10.0, 10.0, PointerButton::Primary);
    editor.handle(CanvasEvent::PointerUp);
    down(&mut editor, 410.0, 10.0, PointerButton::Primary);
    editor.handle(CanvasEvent::PointerUp);
    assert_eq!(editor.inspector().selected_id(), Some(&NodeId::new("b")));
    assert_eq!(editor.inspector().selected().map(|n| n.label()), Some("B"));
}

#[test]
fn test_pointer_up_outside_keeps_drag_result() {
    let mut editor = editor();
    down(&mut editor, 10.0, 10.0, PointerButton::Primary);
    move_to(&mut editor, -5000.0, 9000.0);
    editor.handle(CanvasEvent::PointerUp);
    assert_eq!(position(&editor, "a"), Point::new(-5010.0, 8990.0));
}

#[test]
fn test_wheel_without_modifier_does_not_zoom_or_interrupt_drag() {
    let mut editor = editor();
    down(&mut editor, 10.0, 10.0, PointerButton::Primary);
    assert_eq!(
        editor.handle(CanvasEvent::Wheel {
            delta_y: 240.0,
            modifiers: Modifiers::default(),
        }),
        EditorChange::None
    );
    assert_eq!(editor.viewport().zoom(), 1.0);
    editor.handle(CanvasEvent::Wheel {
        delta_y: 240.0,
        modifiers: Modifiers {
            ctrl: false,
            command: true,
        },
    });
    assert!((editor.viewport().zoom() - 0.76).abs() < 1e-6);
    assert_eq!(editor.controller().mode(), &InteractionMode::DraggingNode(NodeId::new("a")));
}

#[test]
fn test_drop_trigger_centres_node_on_pointer() {
    let mut editor = FlowEditor::default();
    let change = editor.handle(CanvasEvent::Drop {
        pos: Point::new(400.0, 300.0),
        item: PaletteItem::Trigger,
    });
    let EditorChange::Created(id) = change else {
        panic!("drop should create a node, got {:?}", change);
    };
    let node = editor.graph().node(&id).expect("created node");
    assert_eq!(node.kind(), NodeKind::Trigger);
    assert_eq!(node.label(), "New Trigger");
    assert_eq!(node.position(), Point::new(400.0 - 140.0, 300.0 - 80.0));
    // dropping does not select
    assert!(editor.inspector().selected().is_none());
}

#[test]
fn test_drop_under_pan_and_zoom() {
    let mut editor = FlowEditor::default();
    editor.tone = Tone::Playful;
    move_to(&mut editor, 0.0, 0.0);
    down(&mut editor, 0.0, 0.0, PointerButton::Primary);
    move_to(&mut editor, 100.0, 100.0);
    editor.handle(CanvasEvent::PointerUp);
    editor.zoom_in();
    editor.zoom_in();
    assert!((editor.viewport().zoom() - 1.2).abs() < 1e-6);

    let EditorChange::Created(id) = editor.handle(CanvasEvent::Drop {
        pos: Point::new(340.0, 340.0),
        item: PaletteItem::AiAgent,
    }) else {
        panic!("drop should create a node");
    };
    let node = editor.graph().node(&id).expect("created node");
    assert_eq!(node.config(), &NodeConfig::AiProcess { tone: Tone::Playful });
    let p = node.position();
    assert!((p.x - 60.0).abs() < 1e-3 && (p.y - 120.0).abs() < 1e-3, "{:?}", p);
}

#[test]
fn test_zoom_buttons_clamp_and_reset() {
    let mut editor = FlowEditor::default();
    for _ in 0..30 {
        editor.zoom_out();
    }
    assert_eq!(editor.viewport().zoom(), 0.4);
    for _ in 0..30 {
        editor.zoom_in();
    }
    assert_eq!(editor.viewport().zoom(), 2.0);
    editor.reset_view();
    assert_eq!(editor.viewport().zoom(), 1.0);
    assert_eq!(editor.viewport().pan(), Vec2::ZERO);
}
