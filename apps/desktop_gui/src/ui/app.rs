use std::time::Duration;

use client_core::{FormStatus, LandingView};
use eframe::egui;
use shared::{
    domain::{ContactField, Section, SequenceStep},
    landing,
};

use crate::ui::theme;

const REPAINT_INTERVAL: Duration = Duration::from_millis(100);
const TITLE_SIZE: f32 = 72.0;
const TAGLINE_SIZE: f32 = 22.0;

/// Follows the horizontal offset so the section marker only tracks the
/// user while no auto-scroll is animating.
#[derive(Debug, Default)]
struct ScrollTracker {
    auto_target: Option<Section>,
    frames_waiting: u32,
}

impl ScrollTracker {
    /// Frames after which an unfinished auto-scroll stops masking the offset.
    const MAX_SETTLE_FRAMES: u32 = 120;

    fn auto_scroll_to(&mut self, section: Section) {
        self.auto_target = Some(section);
        self.frames_waiting = 0;
    }

    /// Section under the viewport, or `None` while an auto-scroll is still
    /// moving towards its target.
    fn observe(&mut self, offset: f32, page_width: f32) -> Option<Section> {
        if let Some(target) = self.auto_target {
            let target_offset = target.index() as f32 * page_width;
            let arrived = (offset - target_offset).abs() < 1.0;
            self.frames_waiting += 1;
            if !arrived && self.frames_waiting < Self::MAX_SETTLE_FRAMES {
                return None;
            }
            self.auto_target = None;
        }
        Some(Section::ALL[section_index_for_offset(offset, page_width)])
    }
}

pub struct LandingApp {
    view: LandingView,
    scroll: ScrollTracker,
}

impl LandingApp {
    pub fn new(mut view: LandingView) -> Self {
        view.load();
        Self {
            view,
            scroll: ScrollTracker::default(),
        }
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(landing::TAB_LABEL).monospace());
                ui.separator();
                for section in Section::ALL {
                    let marker = if section == self.view.current_section() {
                        "\u{25cf}"
                    } else {
                        "\u{25cb}"
                    };
                    ui.label(marker);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(theme::toggle_label(self.view.display_mode()))
                        .clicked()
                    {
                        self.view.toggle_display_mode();
                    }
                });
            });
        });
    }

    fn show_sections(&mut self, ctx: &egui::Context) {
        let scroll_target = self.view.take_scroll_target();
        egui::CentralPanel::default().show(ctx, |ui| {
            let page = ui.available_size();
            let output = egui::ScrollArea::horizontal()
                .id_salt("landing_sections")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 0.0;
                        for section in Section::ALL {
                            let rect = ui
                                .allocate_ui(page, |ui| {
                                    ui.set_min_size(page);
                                    ui.vertical_centered(|ui| {
                                        ui.add_space(page.y * 0.3);
                                        self.show_section(ui, section);
                                    });
                                })
                                .response
                                .rect;
                            if scroll_target == Some(section) {
                                ui.scroll_to_rect(rect, Some(egui::Align::Min));
                            }
                        }
                    });
                });

            if let Some(section) = scroll_target {
                self.scroll.auto_scroll_to(section);
            }
            if let Some(section) = self.scroll.observe(output.state.offset.x, page.x) {
                self.view.user_scrolled_to(section);
            }
        });
    }

    fn show_section(&mut self, ui: &mut egui::Ui, section: Section) {
        let step = self.view.reveal_step();
        match section {
            Section::Intro => show_intro(ui, step),
            Section::Inquiry => {
                ui.label(egui::RichText::new(landing::INQUIRY_HEADLINE).size(36.0).strong());
            }
            Section::Inquire => {
                let button = egui::Button::new(
                    egui::RichText::new(landing::INQUIRE_LABEL).size(28.0).strong(),
                )
                .min_size(egui::vec2(220.0, 64.0));
                if ui.add(button).clicked() {
                    self.view.open_contact();
                }
            }
        }
    }

    fn show_contact_window(&mut self, ctx: &egui::Context) {
        if !self.view.form().is_open() {
            return;
        }

        let mut keep_open = true;
        egui::Window::new(landing::FORM_TAB_LABEL)
            .open(&mut keep_open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                let enabled = !self.view.form().is_in_flight();
                self.field_input(ui, ContactField::Name, landing::NAME_PLACEHOLDER, enabled);
                self.field_input(ui, ContactField::Email, landing::EMAIL_PLACEHOLDER, enabled);
                self.field_input(ui, ContactField::Message, landing::MESSAGE_PLACEHOLDER, enabled);

                match self.view.form().status() {
                    FormStatus::Success => {
                        ui.colored_label(egui::Color32::from_rgb(152, 195, 121), landing::SUCCESS_BANNER);
                    }
                    FormStatus::Error => {
                        ui.colored_label(egui::Color32::from_rgb(224, 108, 117), landing::ERROR_BANNER);
                        if let Some(detail) = self.view.form().last_error() {
                            ui.label(egui::RichText::new(detail).small().weak());
                        }
                    }
                    FormStatus::Idle | FormStatus::Submitting => {}
                }

                ui.horizontal(|ui| {
                    let label = if self.view.form().is_in_flight() {
                        landing::SUBMITTING_LABEL
                    } else {
                        landing::SUBMIT_LABEL
                    };
                    if ui
                        .add_enabled(self.view.form().can_submit(), egui::Button::new(label))
                        .clicked()
                    {
                        self.view.submit();
                    }
                    if ui.button(landing::CANCEL_LABEL).clicked() {
                        self.view.close_contact();
                    }
                });
            });

        if !keep_open {
            self.view.close_contact();
        }
    }

    fn field_input(&mut self, ui: &mut egui::Ui, field: ContactField, hint: &str, enabled: bool) {
        let mut value = self.view.form().draft().field(field).to_string();
        let edit = match field {
            ContactField::Message => egui::TextEdit::multiline(&mut value).desired_rows(6),
            ContactField::Name | ContactField::Email => egui::TextEdit::singleline(&mut value),
        };
        let response = ui.add_enabled(enabled, edit.hint_text(hint).desired_width(f32::INFINITY));
        if response.changed() {
            self.view.edit(field, value);
        }
    }
}

impl eframe::App for LandingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.view.pump();
        ctx.set_visuals(theme::visuals_for(self.view.display_mode()));

        self.show_top_bar(ctx);
        self.show_sections(ctx);
        self.show_contact_window(ctx);

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}

fn show_intro(ui: &mut egui::Ui, step: SequenceStep) {
    if step.shows_title() {
        ui.label(
            egui::RichText::new(landing::BRAND)
                .size(TITLE_SIZE)
                .strong()
                .color(theme::ACCENT),
        )
        .on_hover_text(landing::PAGE_DESCRIPTION);
    }
    if step.shows_tagline() {
        ui.add_space(16.0);
        for (before, highlight, after) in landing::TAGLINE {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                ui.label(egui::RichText::new(before).size(TAGLINE_SIZE));
                ui.label(
                    egui::RichText::new(highlight)
                        .size(TAGLINE_SIZE)
                        .strong()
                        .color(theme::ACCENT),
                );
                ui.label(egui::RichText::new(after).size(TAGLINE_SIZE));
            });
        }
    }
    if step.shows_scroll_hint() {
        ui.add_space(24.0);
        ui.label(egui::RichText::new(landing::SCROLL_HINT).size(TAGLINE_SIZE * 2.0));
    }
}

/// Section whose page is nearest to the horizontal scroll offset.
fn section_index_for_offset(offset: f32, page_width: f32) -> usize {
    if page_width <= 0.0 || !offset.is_finite() {
        return 0;
    }
    let last = Section::ALL.len() - 1;
    ((offset / page_width).round().max(0.0) as usize).min(last)
}
