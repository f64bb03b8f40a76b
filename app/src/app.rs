use anyhow::Context as _;
use eframe::egui::{self, Visuals};
use egui_flow_editor::{FlowCanvas, FlowEditorTheme, InspectorAction, show_inspector, show_palette};
use flowdesk::assistant::worker::Notifier;
use flowdesk::assistant::{
    AssistantEvent, AssistantJob, AssistantWorker, FALLBACK_DESCRIPTION, FlowAnalysis,
    FlowAnalysisRequest, FlowGenerationRequest, HttpAssistant, generation_reply,
};
use flowdesk::graph::{Tone, WorkflowCategory, templates};
use flowdesk::{FlowEditor, FlowStore, StoredFlow};
use log::{error, info, warn};
use std::sync::Arc;

use crate::config::{self, AppConfig};

pub struct FlowDeskApp {
    editor: FlowEditor,
    theme: FlowEditorTheme,
    worker: Option<AssistantWorker>,
    store: Option<FlowStore>,
    flow_name: String,
    requirement: String,
    generating: bool,
    assistant_reply: Option<String>,
    analysis: Option<FlowAnalysis>,
    status: String,
    confirm_delete: bool,
}

fn start_worker(config: &AppConfig, ctx: &egui::Context) -> anyhow::Result<AssistantWorker> {
    let assistant = HttpAssistant::new(config.assistant_config()).context("building HTTP client")?;
    let ctx = ctx.clone();
    let notifier: Notifier = Arc::new(move || ctx.request_repaint());
    let worker = AssistantWorker::spawn(Arc::new(assistant), Some(notifier))
        .context("starting assistant worker")?;
    Ok(worker)
}

impl FlowDeskApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(Visuals::light());

        let config = config::load_config();
        let worker = match start_worker(&config, &cc.egui_ctx) {
            Ok(worker) => Some(worker),
            Err(e) => {
                error!("AI assistant unavailable: {:#}", e);
                None
            }
        };
        let store = config.store_path().map(FlowStore::new);
        Self::with_services(&config, worker, store)
    }

    fn with_services(
        config: &AppConfig,
        worker: Option<AssistantWorker>,
        store: Option<FlowStore>,
    ) -> Self {
        let mut editor = FlowEditor::new(
            templates::lead_capture(config.flow.tone),
            config.editor_settings(),
        );
        editor.category = config.flow.category;
        editor.tone = config.flow.tone;

        let mut app = Self {
            editor,
            theme: FlowEditorTheme::default(),
            worker,
            store,
            flow_name: "Portal Lead Capture".to_string(),
            requirement: String::new(),
            generating: false,
            assistant_reply: None,
            analysis: None,
            status: String::new(),
            confirm_delete: false,
        };
        app.load_flow();
        app
    }

    fn load_flow(&mut self) {
        let Some(store) = &self.store else {
            return;
        };
        match store.load() {
            Ok(Some(flow)) => {
                info!("Loaded flow '{}' from {}", flow.name, store.path().display());
                self.editor.replace_graph(flow.to_graph());
                self.editor.category = flow.category;
                self.editor.tone = flow.tone;
                self.status = format!("Loaded \"{}\"", flow.name);
                self.flow_name = flow.name;
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Could not load stored flow: {}", e);
                self.status = format!("Could not load flow: {}", e);
            }
        }
    }

    fn save_flow(&mut self) {
        let Some(store) = &self.store else {
            self.status = "No storage location available".to_string();
            return;
        };
        let flow = StoredFlow::from_graph(
            self.flow_name.clone(),
            self.editor.category,
            self.editor.tone,
            self.editor.graph(),
        );
        self.status = match store.save(&flow) {
            Ok(()) => format!("Published \"{}\"", flow.name),
            Err(e) => {
                error!("Saving flow failed: {}", e);
                format!("Save failed: {}", e)
            }
        };
    }

    fn start_blank(&mut self) {
        self.editor.replace_graph(templates::blank());
        self.flow_name = "Untitled Flow".to_string();
        self.analysis = None;
        self.status = "Started a blank flow".to_string();
    }

    /// Deletes the published flow file. The canvas is left as it is.
    fn delete_saved_flow(&mut self) {
        let Some(store) = &self.store else {
            return;
        };
        self.status = match store.clear() {
            Ok(()) => "Deleted the published flow".to_string(),
            Err(e) => {
                error!("Clearing stored flow failed: {}", e);
                format!("Delete failed: {}", e)
            }
        };
        self.confirm_delete = false;
    }

    fn submit(&mut self, job: AssistantJob) -> bool {
        match &self.worker {
            Some(worker) => {
                worker.submit(job);
                true
            }
            None => false,
        }
    }

    fn request_insight(&mut self) {
        let (category, tone) = (self.editor.category, self.editor.tone);
        let inspector = self.editor.inspector_mut();
        let Some((ticket, request)) = inspector.begin_insight(category, tone) else {
            return;
        };
        if !self.submit(AssistantJob::Describe {
            ticket: ticket.clone(),
            request,
        }) {
            self.editor
                .inspector_mut()
                .apply_insight(&ticket, FALLBACK_DESCRIPTION.to_string());
        }
    }

    fn request_generation(&mut self) {
        let requirement = self.requirement.trim().to_string();
        if requirement.is_empty() || self.generating {
            return;
        }
        let job = AssistantJob::Generate(FlowGenerationRequest {
            requirement,
            category: self.editor.category.to_string(),
        });
        if self.submit(job) {
            self.generating = true;
            self.requirement.clear();
        } else {
            self.assistant_reply = Some("The AI assistant is not available.".to_string());
        }
    }

    fn request_analysis(&mut self) {
        let request = FlowAnalysisRequest::for_graph(self.editor.graph());
        if !self.submit(AssistantJob::Analyze(request)) {
            self.analysis = Some(FlowAnalysis::default());
        }
    }

    fn poll_assistant(&mut self) {
        let Some(worker) = &self.worker else {
            return;
        };
        let mut events = Vec::new();
        while let Some(event) = worker.try_next() {
            events.push(event);
        }
        for event in events {
            match event {
                AssistantEvent::Described { ticket, description } => {
                    self.editor.inspector_mut().apply_insight(&ticket, description);
                }
                AssistantEvent::Generated(result) => {
                    self.generating = false;
                    self.assistant_reply = Some(generation_reply(&result));
                    match result {
                        Ok(flow) => {
                            self.editor.replace_graph(flow.to_graph(self.editor.tone));
                            self.flow_name = flow.flow_name;
                            self.analysis = None;
                        }
                        Err(e) => warn!("Flow generation failed: {}", e),
                    }
                }
                AssistantEvent::Analyzed(analysis) => {
                    self.analysis = Some(analysis);
                }
            }
        }
    }

    fn apply_inspector_actions(&mut self, actions: Vec<InspectorAction>) {
        for action in actions {
            match action {
                InspectorAction::SetAttribute(key, value) => {
                    self.editor.set_attribute(key, value);
                }
                InspectorAction::GenerateInsight => self.request_insight(),
                InspectorAction::Close => self.editor.deselect(),
            }
        }
    }

    fn top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add(egui::TextEdit::singleline(&mut self.flow_name).desired_width(220.0));

            let mut category = self.editor.category;
            egui::ComboBox::from_id_salt("flow_category")
                .selected_text(category.as_str())
                .show_ui(ui, |ui| {
                    for c in WorkflowCategory::ALL {
                        ui.selectable_value(&mut category, c, c.as_str());
                    }
                });
            self.editor.category = category;

            let mut tone = self.editor.tone;
            egui::ComboBox::from_id_salt("flow_tone")
                .selected_text(tone.as_str())
                .show_ui(ui, |ui| {
                    for t in Tone::ALL {
                        ui.selectable_value(&mut tone, t, t.as_str());
                    }
                });
            self.editor.tone = tone;

            ui.separator();
            if ui.button("Blank").clicked() {
                self.start_blank();
            }
            if ui.button("Lead capture").clicked() {
                self.editor.replace_graph(templates::lead_capture(self.editor.tone));
                self.flow_name = "Portal Lead Capture".to_string();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Publish").clicked() {
                    self.save_flow();
                }
                if ui.button("Reload").clicked() {
                    self.load_flow();
                }
                if self.confirm_delete {
                    if ui.button("Cancel").clicked() {
                        self.confirm_delete = false;
                    }
                    if ui.button("Really delete?").clicked() {
                        self.delete_saved_flow();
                    }
                } else if ui.button("Delete saved").clicked() {
                    self.confirm_delete = true;
                }
                if ui.button("Check flow").clicked() {
                    self.request_analysis();
                }
                ui.separator();
                if ui.button("+").on_hover_text("Zoom in").clicked() {
                    self.editor.zoom_in();
                }
                if ui.button("\u{2725}").on_hover_text("Reset view").clicked() {
                    self.editor.reset_view();
                }
                if ui.button("\u{2212}").on_hover_text("Zoom out").clicked() {
                    self.editor.zoom_out();
                }
                ui.label(format!("{:.0}%", self.editor.viewport().zoom() * 100.0));
            });
        });
    }

    fn bottom_dock(&mut self, ui: &mut egui::Ui) {
        show_palette(ui, &self.theme);
        ui.horizontal(|ui| {
            let input = ui.add(
                egui::TextEdit::singleline(&mut self.requirement)
                    .hint_text("Describe an automation and let the AI build it...")
                    .desired_width(ui.available_width() - 120.0),
            );
            let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if self.generating {
                ui.spinner();
            } else if ui.button("Generate flow").clicked() || submitted {
                self.request_generation();
            }
        });
        if let Some(reply) = &self.assistant_reply {
            ui.label(reply.as_str());
        }
        if let Some(analysis) = &self.analysis {
            if analysis.missing.is_empty() && analysis.suggestions.is_empty() {
                ui.label("No suggestions for this flow.");
            }
            for missing in &analysis.missing {
                let red = egui::Color32::from_rgb(220, 38, 38);
                ui.colored_label(red, format!("Missing: {}", missing));
            }
            for suggestion in &analysis.suggestions {
                ui.label(format!("Suggestion: {}", suggestion));
            }
        }
        if !self.status.is_empty() {
            ui.small(self.status.as_str());
        }
    }
}

impl eframe::App for FlowDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_assistant();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| self.top_bar(ui));
        egui::TopBottomPanel::bottom("dock").show(ctx, |ui| self.bottom_dock(ui));

        if self.editor.inspector().selected().is_some() {
            let mut actions = Vec::new();
            egui::SidePanel::right("inspector")
                .default_width(320.0)
                .show(ctx, |ui| {
                    actions = show_inspector(ui, &self.editor, &self.theme);
                });
            self.apply_inspector_actions(actions);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let response = FlowCanvas::new(&mut self.editor, &self.theme).show(ui);
                for id in response.created() {
                    info!("Created node {}", id);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_store(name: &str) -> (PathBuf, FlowStore) {
        let path = std::env::temp_dir()
            .join(format!("flowdesk-app-{}-{}", std::process::id(), name))
            .join("flow.json");
        (path.clone(), FlowStore::new(path))
    }

    #[test]
    fn test_blank_template_keeps_published_flow() {
        let (path, store) = temp_store("blank");
        let mut app = FlowDeskApp::with_services(&AppConfig::default(), None, Some(store));
        app.save_flow();
        assert!(path.exists());

        app.start_blank();
        assert_eq!(app.editor.graph().nodes().len(), 1);
        assert!(path.exists());

        app.delete_saved_flow();
        assert!(!path.exists());
        // the canvas is untouched by deleting the file
        assert_eq!(app.editor.graph().nodes().len(), 1);
    }
}
