//! Canvas widget: renders a `FlowEditor` and feeds it egui input.

use egui::{self, Pos2, Rect, Vec2};
use flowdesk::canvas::{
    CanvasEvent, EditorChange, FlowEditor, InteractionMode, Modifiers, PaletteItem, PointerButton,
};
use flowdesk::graph::Point;
use log::trace;

use crate::drawing::{draw_grid, draw_polyline};
use crate::node_rendering::{self, NodeLayout};
use crate::theme::FlowEditorTheme;

/// Changes produced while showing the canvas this frame.
#[derive(Default)]
pub struct CanvasResponse {
    pub changes: Vec<EditorChange>,
}

impl CanvasResponse {
    pub fn created(&self) -> impl Iterator<Item = &flowdesk::NodeId> {
        self.changes.iter().filter_map(|c| match c {
            EditorChange::Created(id) => Some(id),
            _ => None,
        })
    }
}

pub struct FlowCanvas<'a> {
    editor: &'a mut FlowEditor,
    theme: &'a FlowEditorTheme,
}

impl<'a> FlowCanvas<'a> {
    pub fn new(editor: &'a mut FlowEditor, theme: &'a FlowEditorTheme) -> Self {
        Self { editor, theme }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> CanvasResponse {
        let available = ui.available_rect_before_wrap();
        let (canvas_response, painter) =
            ui.allocate_painter(available.size(), egui::Sense::click_and_drag());
        let canvas_rect = canvas_response.rect;

        let mut response = CanvasResponse::default();
        for event in collect_events(ui, &canvas_response, canvas_rect) {
            trace!("Canvas event {:?}", event);
            let change = self.editor.handle(event);
            if change != EditorChange::None {
                response.changes.push(change);
            }
        }
        if !self.editor.controller().is_idle() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        }

        self.paint(ui, &painter, canvas_rect);
        response
    }

    fn paint(&self, ui: &egui::Ui, painter: &egui::Painter, canvas_rect: Rect) {
        let viewport = self.editor.viewport();
        let zoom = viewport.zoom();
        let pan = viewport.pan();
        let to_screen = |p: Point| {
            let s = viewport.to_screen_space(p);
            canvas_rect.min + Vec2::new(s.x, s.y)
        };

        painter.rect_filled(canvas_rect, 0.0, self.theme.background_color);
        draw_grid(
            painter,
            canvas_rect,
            Vec2::new(pan.x, pan.y),
            self.theme.grid_color,
            self.theme.grid_spacing * zoom,
        );

        let segments = self.editor.settings().route_style.segments;
        for route in self.editor.edge_routes() {
            let points = route.curve.flatten(segments).into_iter().map(to_screen).collect();
            draw_polyline(
                painter,
                points,
                self.theme.connection_color,
                self.theme.connection_width * zoom,
            );
        }

        let metrics = self.editor.metrics();
        let selected = self.editor.inspector().selected_id();
        let dragging = match self.editor.controller().mode() {
            InteractionMode::DraggingNode(id) => Some(id),
            _ => None,
        };
        let hover = ui.input(|i| i.pointer.hover_pos());
        for node in self.editor.graph().nodes() {
            let min = to_screen(node.position());
            let layout = NodeLayout {
                rect: Rect::from_min_size(min, Vec2::new(metrics.width, metrics.height) * zoom),
                zoom,
            };
            if !layout.rect.expand(self.theme.port_radius * zoom).intersects(canvas_rect) {
                continue;
            }
            let is_selected = selected == Some(node.id());
            let is_dragging = dragging == Some(node.id());
            node_rendering::draw_node_card(
                painter,
                &layout,
                self.theme,
                node,
                is_selected,
                is_dragging,
            );
            let hovered = hover.is_some_and(|p| layout.rect.contains(p));
            node_rendering::draw_ports(painter, &layout, self.theme, hovered);
        }
    }
}

/// Translates this frame's pointer, wheel and drag-and-drop input into
/// canvas-local events. Presses only count inside the canvas; releases and
/// moves count anywhere so a gesture always ends.
fn collect_events(
    ui: &egui::Ui,
    canvas_response: &egui::Response,
    canvas_rect: Rect,
) -> Vec<CanvasEvent> {
    let local = |p: Pos2| Point::new(p.x - canvas_rect.min.x, p.y - canvas_rect.min.y);
    let mut events = Vec::new();

    if let Some(item) = canvas_response.dnd_release_payload::<PaletteItem>() {
        // hover_pos() stays None while a drag source owns the pointer
        if let Some(pos) = ui.input(|i| i.pointer.latest_pos()) {
            events.push(CanvasEvent::Drop {
                pos: local(pos),
                item: *item,
            });
        }
    }

    ui.input(|i| {
        let pointer = &i.pointer;
        if let Some(pos) = pointer.latest_pos() {
            if pointer.delta() != egui::Vec2::ZERO {
                events.push(CanvasEvent::PointerMove { pos: local(pos) });
            }
        }
        if let Some(pos) = pointer.press_origin().filter(|_| pointer.any_pressed()) {
            if canvas_response.hovered() && canvas_rect.contains(pos) {
                for (egui_button, button) in [
                    (egui::PointerButton::Primary, PointerButton::Primary),
                    (egui::PointerButton::Middle, PointerButton::Middle),
                    (egui::PointerButton::Secondary, PointerButton::Secondary),
                ] {
                    if pointer.button_pressed(egui_button) {
                        events.push(CanvasEvent::PointerDown {
                            pos: local(pos),
                            button,
                        });
                    }
                }
            }
        }
        if pointer.any_released() {
            events.push(CanvasEvent::PointerUp);
        }

        let scroll = i.raw_scroll_delta.y;
        if scroll != 0.0 && canvas_response.hovered() {
            events.push(CanvasEvent::Wheel {
                // egui scrolls up with positive y; wheel zoom expects the browser sign
                delta_y: -scroll,
                modifiers: Modifiers {
                    ctrl: i.modifiers.ctrl,
                    command: i.modifiers.command,
                },
            });
        }
    });
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::show_palette;
    use egui::{Event, MouseWheelUnit, UiBuilder, pos2, vec2};
    use egui_kittest::Harness;
    use flowdesk::canvas::EditorSettings;
    use flowdesk::{FlowGraph, NodeId};

    const PALETTE_RECT: Rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(800.0, 60.0));
    const CANVAS_RECT: Rect = Rect::from_min_max(pos2(0.0, 100.0), pos2(800.0, 600.0));

    struct Fixture {
        editor: FlowEditor,
        theme: FlowEditorTheme,
        created: Vec<NodeId>,
    }

    fn harness() -> Harness<'static, Fixture> {
        let fixture = Fixture {
            editor: FlowEditor::new(FlowGraph::new(), EditorSettings::default()),
            theme: FlowEditorTheme::default(),
            created: Vec::new(),
        };
        Harness::builder()
            .with_size(vec2(800.0, 600.0))
            .build_ui_state(
                |ui, fixture: &mut Fixture| {
                    ui.scope_builder(UiBuilder::new().max_rect(PALETTE_RECT), |ui| {
                        show_palette(ui, &fixture.theme);
                    });
                    ui.scope_builder(UiBuilder::new().max_rect(CANVAS_RECT), |ui| {
                        let response =
                            FlowCanvas::new(&mut fixture.editor, &fixture.theme).show(ui);
                        fixture.created.extend(response.created().cloned());
                    });
                },
                fixture,
            )
    }

    fn push(harness: &mut Harness<'static, Fixture>, event: Event) {
        harness.input_mut().events.push(event);
        harness.run();
    }

    fn button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn wheel(harness: &mut Harness<'static, Fixture>, modifiers: egui::Modifiers) {
        push(harness, Event::PointerMoved(pos2(300.0, 300.0)));
        harness.input_mut().modifiers = modifiers;
        // positive y is a wheel turned away from the user
        push(
            harness,
            Event::MouseWheel {
                unit: MouseWheelUnit::Point,
                delta: vec2(0.0, 100.0),
                modifiers,
            },
        );
        harness.input_mut().modifiers = egui::Modifiers::NONE;
    }

    #[test]
    fn ctrl_wheel_up_zooms_in() {
        let mut harness = harness();
        wheel(&mut harness, egui::Modifiers::CTRL);
        let zoom = harness.state().editor.viewport().zoom();
        assert!((zoom - 1.1).abs() < 1e-4, "zoom was {}", zoom);
    }

    #[test]
    fn plain_wheel_leaves_zoom_alone() {
        let mut harness = harness();
        wheel(&mut harness, egui::Modifiers::NONE);
        assert_eq!(harness.state().editor.viewport().zoom(), 1.0);
    }

    #[test]
    fn palette_drop_centres_node_under_pointer() {
        let mut harness = harness();
        // first palette entry is Trigger
        let source = pos2(20.0, 12.0);
        let target = pos2(300.0, 300.0);
        push(&mut harness, Event::PointerMoved(source));
        push(&mut harness, button(source, true));
        push(&mut harness, Event::PointerMoved(pos2(120.0, 200.0)));
        push(&mut harness, Event::PointerMoved(target));
        push(&mut harness, button(target, false));

        let fixture = harness.state();
        assert_eq!(fixture.created.len(), 1);
        let node = fixture.editor.graph().node(&fixture.created[0]).expect("dropped node");
        assert_eq!(node.label(), "New Trigger");
        // (300, 300) on screen is (300, 200) on the canvas; the card is 280 x 160
        assert_eq!(node.position(), Point::new(160.0, 120.0));
    }

    #[test]
    fn release_outside_canvas_ends_pan() {
        let mut harness = harness();
        push(&mut harness, Event::PointerMoved(pos2(300.0, 300.0)));
        push(&mut harness, button(pos2(300.0, 300.0), true));
        assert!(!harness.state().editor.controller().is_idle());

        push(&mut harness, Event::PointerMoved(pos2(340.0, 320.0)));
        let pan = harness.state().editor.viewport().pan();
        assert_eq!((pan.x, pan.y), (40.0, 20.0));

        // release over the palette, outside the canvas
        push(&mut harness, Event::PointerMoved(pos2(340.0, 30.0)));
        push(&mut harness, button(pos2(340.0, 30.0), false));
        assert!(harness.state().editor.controller().is_idle());
    }

    #[test]
    fn press_outside_canvas_is_ignored() {
        let mut harness = harness();
        push(&mut harness, Event::PointerMoved(pos2(600.0, 80.0)));
        push(&mut harness, button(pos2(600.0, 80.0), true));
        assert!(harness.state().editor.controller().is_idle());
        push(&mut harness, button(pos2(600.0, 80.0), false));
    }
}
