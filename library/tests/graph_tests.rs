use flowdesk::graph::templates;
use flowdesk::graph::{
    FlowGraph, IntegrationCategory, IntegrationConfig, NodeConfig, NodeId, NodeKind, Point, Tone,
    keys,
};
use serde_json::json;

fn integration_graph() -> (FlowGraph, NodeId) {
    let mut graph = FlowGraph::new();
    let id = graph
        .add_node(
            "Sync to Alto",
            Point::new(0.0, 0.0),
            NodeConfig::Integration(IntegrationConfig::new("Alto", IntegrationCategory::Leads)),
        )
        .id()
        .clone();
    (graph, id)
}

#[test]
fn test_add_node_generates_unique_ids() {
    let mut graph = FlowGraph::new();
    let a = graph.add_node("A", Point::ZERO, NodeConfig::Action).id().clone();
    let b = graph.add_node("B", Point::ZERO, NodeConfig::Action).id().clone();
    assert_ne!(a, b);
    assert_eq!(graph.len(), 2);
    assert_eq!(graph.node(&a).map(|n| n.label()), Some("A"));
}

#[test]
fn test_add_edge_does_not_validate_endpoints() {
    let mut graph = FlowGraph::new();
    let a = graph.add_node("A", Point::ZERO, NodeConfig::Action).id().clone();
    let edge_id = graph.add_edge(a.clone(), NodeId::new("missing")).id.clone();
    assert!(graph.edge(&edge_id).is_some());
    assert_eq!(graph.dangling_edges().count(), 1);

    let self_loop = graph.add_edge(a.clone(), a.clone()).clone();
    assert!(self_loop.is_self_loop());
    graph.add_edge(a.clone(), a);
    assert_eq!(graph.duplicate_edges().len(), 1);
}

#[test]
fn test_unknown_ids_are_no_ops() {
    let (mut graph, _) = integration_graph();
    let before = graph.clone();
    let ghost = NodeId::new("ghost");
    assert!(!graph.update_node_position(&ghost, Point::new(5.0, 5.0)));
    assert!(graph.update_node_attribute(&ghost, keys::LABEL, json!("x")).is_none());
    assert!(graph.node(&ghost).is_none());
    assert_eq!(graph, before);
}

#[test]
fn test_update_node_position() {
    let (mut graph, id) = integration_graph();
    assert!(graph.update_node_position(&id, Point::new(12.0, -4.0)));
    assert_eq!(graph.node(&id).map(|n| n.position()), Some(Point::new(12.0, -4.0)));
}

#[test]
fn test_category_change_resets_action_for_every_category() {
    let (mut graph, id) = integration_graph();
    for category in IntegrationCategory::ALL {
        // move away from the category's default first so the reset is observable
        let other_action = category.actions().last().copied().unwrap_or_default();
        graph.update_node_attribute(&id, keys::CATEGORY, json!(category.name()));
        graph.update_node_attribute(&id, keys::ACTION, json!(other_action));

        let next = IntegrationCategory::ALL
            .into_iter()
            .find(|c| *c != category)
            .expect("more than one category");
        let node = graph
            .update_node_attribute(&id, keys::CATEGORY, json!(next.name()))
            .expect("node exists");
        assert_eq!(node.attribute(keys::ACTION), Some(json!(next.actions()[0])));

        let node = graph
            .update_node_attribute(&id, keys::CATEGORY, json!(category.name()))
            .expect("node exists");
        assert_eq!(node.attribute(keys::CATEGORY), Some(json!(category.name())));
        assert_eq!(node.attribute(keys::ACTION), Some(json!(category.actions()[0])));
    }
}

#[test]
fn test_unknown_category_is_rejected() {
    let (mut graph, id) = integration_graph();
    let node = graph
        .update_node_attribute(&id, keys::CATEGORY, json!("Helicopters"))
        .expect("node exists");
    assert_eq!(node.attribute(keys::CATEGORY), Some(json!("Leads")));
}

#[test]
fn test_label_edit_and_extra_attributes() {
    let (mut graph, id) = integration_graph();
    graph.update_node_attribute(&id, keys::LABEL, json!("Push listing"));
    graph.update_node_attribute(&id, "retries", json!(3));
    let node = graph.node(&id).expect("node exists");
    assert_eq!(node.label(), "Push listing");
    assert_eq!(node.attributes().get("retries"), Some(&json!(3)));
    assert_eq!(node.attributes().get("provider"), Some(&json!("Alto")));
}

#[test]
fn test_lead_capture_template() {
    let graph = templates::lead_capture(Tone::Friendly);
    assert_eq!(graph.len(), 5);
    assert_eq!(graph.edges().len(), 4);
    assert_eq!(graph.dangling_edges().count(), 0);
    let parse = graph.node(&NodeId::new("2")).expect("template node");
    assert_eq!(parse.kind(), NodeKind::AiProcess);
    assert_eq!(parse.config(), &NodeConfig::AiProcess { tone: Tone::Friendly });

    let blank = templates::blank();
    assert_eq!(blank.len(), 1);
    assert_eq!(blank.nodes()[0].kind(), NodeKind::Trigger);
}

#[test]
fn test_provider_badge_from_label() {
    let (graph, id) = integration_graph();
    let badge = graph.node(&id).and_then(|n| n.provider_badge()).expect("alto badge");
    assert_eq!(badge.name, "Alto");
}
