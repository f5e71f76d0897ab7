use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use eframe::egui::{self, Align2, Color32, FontId, Rect, RichText, Stroke};
use glam::Vec2 as SimVec2;

use portfolio_canvas::assets;
use portfolio_canvas::config::AppConfig;
use portfolio_canvas::content::SiteContent;
use portfolio_canvas::filter::TabFilter;
use portfolio_canvas::motion::{self, MotionCapability};
use portfolio_canvas::nav::NavHighlighter;
use portfolio_canvas::particles::ParticleField;
use portfolio_canvas::reveal::{RevealDispatcher, RevealHandle, RevealState, RevealStyle};
use portfolio_canvas::theme::{MemoryStore, PreferenceStore, ThemeManager, ThemeMode, THEME_KEY};
use portfolio_canvas::typewriter::Typewriter;

const ACCENT: Color32 = Color32::from_rgb(0, 194, 168);
const SECTION_LABELS: [&str; 4] = ["About", "Projects", "Skills", "Contact"];
const HERO_HEIGHT: f32 = 340.0;
// the light palette tones the canvas down, as the original stylesheet did
const LIGHT_CANVAS_ALPHA: f32 = 0.3;

type VisibilityBatch = Vec<(RevealHandle, f32)>;

/// Adapts `eframe::Storage` to the theme manager's preference store.
struct EframeStore<'a>(&'a mut dyn eframe::Storage);

impl PreferenceStore for EframeStore<'_> {
    fn load(&self) -> Option<String> {
        self.0.get_string(THEME_KEY)
    }

    fn save(&mut self, value: &str) {
        self.0.set_string(THEME_KEY, value.to_owned());
    }
}

struct SectionHandles {
    about: RevealHandle,
    projects: Vec<RevealHandle>,
    skills: RevealHandle,
    skill_bars: Vec<RevealHandle>,
    contact: RevealHandle,
}

struct PortfolioApp {
    content: SiteContent,
    theme: ThemeManager,
    fallback_store: MemoryStore,
    field: ParticleField,
    hero_size: egui::Vec2,
    reveals: RevealDispatcher,
    handles: SectionHandles,
    filter: TabFilter,
    typewriter: Typewriter,
    nav: NavHighlighter,
    pending_scroll: Option<usize>,
    textures: HashMap<String, egui::TextureHandle>,
}

impl PortfolioApp {
    fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let content = SiteContent::built_in();
        let motion: Arc<dyn MotionCapability> = motion::select(config.reduced_motion);

        // eframe seeds the visuals from the host's reported color scheme,
        // so the startup visuals stand in for the environment preference
        let environment = if cc.egui_ctx.style().visuals.dark_mode {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        };
        let saved = cc.storage.and_then(|s| s.get_string(THEME_KEY));
        let theme = ThemeManager::restore(saved.as_deref(), Some(environment), motion.clone());

        let mut reveals = RevealDispatcher::new(motion.clone());
        let handles = SectionHandles {
            about: reveals.register(RevealStyle::SlideLeft, 0.3),
            projects: content
                .projects
                .iter()
                .map(|_| reveals.register(RevealStyle::ScaleIn, 0.3))
                .collect(),
            skills: reveals.register(RevealStyle::SlideUp, 0.3),
            skill_bars: content
                .skill_categories
                .iter()
                .map(|_| reveals.register(RevealStyle::FadeIn, 0.5))
                .collect(),
            contact: reveals.register(RevealStyle::SlideRight, 0.3),
        };

        let categories: Vec<&str> = content
            .skill_categories
            .iter()
            .map(|c| c.key.as_str())
            .collect();
        let filter = TabFilter::new(&categories);

        Self {
            typewriter: Typewriter::new(content.typewriter_titles.clone(), 0.0),
            field: ParticleField::new(800.0, HERO_HEIGHT, config.particle_count),
            content,
            theme,
            fallback_store: MemoryStore::default(),
            hero_size: egui::Vec2::ZERO,
            reveals,
            handles,
            filter,
            nav: NavHighlighter::new(),
            pending_scroll: None,
            textures: HashMap::new(),
        }
    }

    fn toggle_theme(&mut self, frame: &mut eframe::Frame, now: f64) {
        match frame.storage_mut() {
            Some(storage) => {
                let mut store = EframeStore(storage);
                self.theme.toggle(&mut store, now);
            }
            None => self.theme.toggle(&mut self.fallback_store, now),
        }
    }

    fn texture(&mut self, ctx: &egui::Context, path: &str, width: usize, height: usize) -> egui::TextureHandle {
        if let Some(handle) = self.textures.get(path) {
            return handle.clone();
        }
        let pixels = assets::load_or_placeholder(Path::new(path), width, height);
        let image =
            egui::ColorImage::from_rgba_unmultiplied([pixels.width, pixels.height], &pixels.pixels);
        let handle = ctx.load_texture(path.to_owned(), image, egui::TextureOptions::LINEAR);
        self.textures.insert(path.to_owned(), handle.clone());
        handle
    }

    /// Record a section's visibility for the scroll-spy and honor a
    /// pending nav click by scrolling the section into view.
    fn after_section(
        &mut self,
        ui: &mut egui::Ui,
        index: usize,
        rect: Rect,
        nav_batch: &mut Vec<(usize, f32)>,
    ) {
        nav_batch.push((index, visible_fraction(ui.clip_rect(), rect)));
        if self.pending_scroll == Some(index) {
            ui.scroll_to_rect(rect, Some(egui::Align::TOP));
            self.pending_scroll = None;
        }
    }

    fn hero_section(&mut self, ui: &mut egui::Ui, now: f64) -> Rect {
        let width = ui.available_width();
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(width, HERO_HEIGHT), egui::Sense::hover());

        if self.hero_size != rect.size() {
            self.field.resize(rect.width(), rect.height());
            self.hero_size = rect.size();
        }
        if let Some(pos) = response.hover_pos() {
            self.field
                .set_pointer(SimVec2::new(pos.x - rect.min.x, pos.y - rect.min.y));
        }
        self.field.update();

        let painter = ui.painter_at(rect);
        let canvas_alpha = if self.theme.dark() { 1.0 } else { LIGHT_CANVAS_ALPHA };
        let particles = self.field.particles();
        for particle in particles {
            let [r, g, b] = particle.color;
            painter.circle_filled(
                rect.min + egui::vec2(particle.position.x, particle.position.y),
                particle.radius,
                Color32::from_rgba_unmultiplied(
                    r,
                    g,
                    b,
                    (particle.opacity * canvas_alpha * 255.0) as u8,
                ),
            );
        }
        for link in self.field.links() {
            let a = particles[link.a].position;
            let b = particles[link.b].position;
            painter.line_segment(
                [
                    rect.min + egui::vec2(a.x, a.y),
                    rect.min + egui::vec2(b.x, b.y),
                ],
                Stroke::new(
                    1.0,
                    ACCENT.gamma_multiply(link.alpha * canvas_alpha),
                ),
            );
        }

        let strong = ui.visuals().strong_text_color();
        let weak = ui.visuals().weak_text_color();
        painter.text(
            rect.center() - egui::vec2(0.0, 34.0),
            Align2::CENTER_CENTER,
            &self.content.profile.name,
            FontId::proportional(36.0),
            strong,
        );
        let title = self.typewriter.tick(now);
        painter.text(
            rect.center() + egui::vec2(0.0, 8.0),
            Align2::CENTER_CENTER,
            title,
            FontId::proportional(22.0),
            ACCENT,
        );
        painter.text(
            rect.center_bottom() - egui::vec2(0.0, 16.0),
            Align2::CENTER_BOTTOM,
            &self.content.profile.tagline,
            FontId::proportional(14.0),
            weak,
        );
        rect
    }

    fn about_section(&mut self, ui: &mut egui::Ui, now: f64, batch: &mut VisibilityBatch) {
        ui.add_space(28.0);
        let photo_path = self.content.profile.photo.clone();
        let photo = self.texture(ui.ctx(), &photo_path, 280, 280);
        let profile = &self.content.profile;
        revealed(ui, &self.reveals, self.handles.about, now, batch, |ui, _state| {
            ui.heading("About");
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.add(
                    egui::Image::new(&photo)
                        .fit_to_exact_size(egui::vec2(140.0, 140.0))
                        .rounding(8.0),
                );
                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.set_max_width(480.0);
                    ui.label(&profile.about);
                    ui.add_space(6.0);
                    ui.hyperlink_to(&profile.email, format!("mailto:{}", profile.email));
                });
            });
            Vec::new()
        });
    }

    fn projects_section(&mut self, ui: &mut egui::Ui, now: f64, batch: &mut VisibilityBatch) {
        ui.add_space(32.0);
        ui.heading("Projects");
        ui.add_space(8.0);

        let thumb_paths: Vec<String> = self.content.projects.iter().map(|p| p.image.clone()).collect();
        let thumbs: Vec<egui::TextureHandle> = thumb_paths
            .iter()
            .map(|path| self.texture(ui.ctx(), path, 320, 180))
            .collect();

        let projects = &self.content.projects;
        let handles = &self.handles.projects;
        for (row_index, (row, row_handles)) in projects.chunks(2).zip(handles.chunks(2)).enumerate()
        {
            ui.horizontal(|ui| {
                for (offset, (project, handle)) in row.iter().zip(row_handles).enumerate() {
                    let thumb = &thumbs[row_index * 2 + offset];
                    revealed(ui, &self.reveals, *handle, now, batch, |ui, state| {
                        egui::Frame::group(ui.style()).rounding(8.0).show(ui, |ui| {
                            ui.set_width(320.0);
                            ui.vertical(|ui| {
                                ui.add(
                                    egui::Image::new(thumb)
                                        .fit_to_exact_size(egui::vec2(
                                            304.0 * state.scale,
                                            150.0 * state.scale,
                                        ))
                                        .rounding(6.0),
                                );
                                ui.strong(&project.name);
                                ui.label(
                                    RichText::new(format!("#{}", project.category))
                                        .small()
                                        .color(ACCENT),
                                );
                                ui.label(&project.summary);
                                ui.hyperlink_to("View project", &project.link);
                            });
                        });
                        Vec::new()
                    });
                }
            });
            ui.add_space(10.0);
        }
    }

    fn skills_section(&mut self, ui: &mut egui::Ui, now: f64, batch: &mut VisibilityBatch) {
        ui.add_space(32.0);
        let content = &self.content;
        let filter = &mut self.filter;
        let reveals = &self.reveals;
        let bar_handles = &self.handles.skill_bars;
        let inner = revealed(ui, reveals, self.handles.skills, now, batch, |ui, state| {
            ui.heading("Skills");
            ui.add_space(8.0);

            let tabs = filter.tabs().to_vec();
            let mut clicked = None;
            // tabs inherit the reveal fade, so keep them inert until the
            // section has actually faded in
            ui.add_enabled_ui(state.opacity > 0.0, |ui| {
                ui.horizontal(|ui| {
                    for key in &tabs {
                        if ui
                            .selectable_label(filter.active() == key, title_case(key))
                            .clicked()
                        {
                            clicked = Some(key.clone());
                        }
                    }
                });
            });
            if let Some(key) = clicked {
                filter.select(&key, now);
            }
            ui.add_space(8.0);

            let mut bar_batch = Vec::new();
            for (category, bar_handle) in content.skill_categories.iter().zip(bar_handles) {
                let display = filter.display(&category.key, now);
                if !display.in_layout {
                    continue;
                }
                let block = ui.scope(|ui| {
                    ui.set_opacity(display.opacity);
                    ui.add_space(display.offset_y.max(0.0));
                    ui.strong(&category.title);
                    let progress = reveals.progress(*bar_handle, now);
                    for skill in &category.skills {
                        level_bar(ui, &skill.name, skill.level, progress);
                    }
                    ui.add_space(10.0);
                });
                let fraction = visible_fraction(ui.clip_rect(), block.response.rect);
                bar_batch.push((*bar_handle, fraction));
            }
            bar_batch
        });
        batch.extend(inner);
    }

    fn contact_section(&mut self, ui: &mut egui::Ui, now: f64, batch: &mut VisibilityBatch) {
        ui.add_space(32.0);
        let profile = &self.content.profile;
        let social = &self.content.social;
        revealed(ui, &self.reveals, self.handles.contact, now, batch, |ui, _state| {
            ui.heading("Contact");
            ui.add_space(8.0);
            ui.label("Always happy to talk about new projects.");
            ui.hyperlink_to(&profile.email, format!("mailto:{}", profile.email));
            ui.horizontal(|ui| {
                for link in social {
                    ui.hyperlink_to(&link.label, &link.url);
                }
            });
            ui.hyperlink_to("Resume (PDF)", &profile.resume);
            Vec::new()
        });
        ui.add_space(48.0);
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        let shortcut = ctx.input_mut(|i| {
            i.consume_key(
                egui::Modifiers {
                    command: true,
                    shift: true,
                    ..Default::default()
                },
                egui::Key::T,
            )
        });
        if shortcut {
            self.toggle_theme(frame, now);
        }

        ctx.set_visuals(if self.theme.dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        let mut toggle_clicked = false;
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong(&self.content.profile.name);
                // section links appear once the hero has scrolled away
                if self.nav.visible() {
                    ui.separator();
                    for (index, label) in SECTION_LABELS.iter().enumerate() {
                        if ui
                            .selectable_label(self.nav.active() == Some(index), *label)
                            .clicked()
                        {
                            self.pending_scroll = Some(index);
                        }
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = if self.theme.dark() { "☀" } else { "🌙" };
                    if ui
                        .button(icon)
                        .on_hover_text("Toggle theme (Ctrl+Shift+T)")
                        .clicked()
                    {
                        toggle_clicked = true;
                    }
                });
            });
        });
        if toggle_clicked {
            self.toggle_theme(frame, now);
        }

        let mut batch: VisibilityBatch = Vec::new();
        let mut nav_batch: Vec<(usize, f32)> = Vec::new();
        let mut hero_fraction = 0.0;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let hero_rect = self.hero_section(ui, now);
                hero_fraction = visible_fraction(ui.clip_rect(), hero_rect);

                let rect = ui
                    .scope(|ui| self.about_section(ui, now, &mut batch))
                    .response
                    .rect;
                self.after_section(ui, 0, rect, &mut nav_batch);

                let rect = ui
                    .scope(|ui| self.projects_section(ui, now, &mut batch))
                    .response
                    .rect;
                self.after_section(ui, 1, rect, &mut nav_batch);

                let rect = ui
                    .scope(|ui| self.skills_section(ui, now, &mut batch))
                    .response
                    .rect;
                self.after_section(ui, 2, rect, &mut nav_batch);

                let rect = ui
                    .scope(|ui| self.contact_section(ui, now, &mut batch))
                    .response
                    .rect;
                self.after_section(ui, 3, rect, &mut nav_batch);
            });
        });
        self.reveals.observe(&batch, now);
        self.nav.observe_hero(hero_fraction);
        self.nav.observe_sections(&nav_batch);

        let overlay_alpha = self.theme.overlay_alpha(now);
        if overlay_alpha > 0.0 {
            // flash toward the palette we are leaving behind
            let color = if self.theme.dark() {
                Color32::WHITE
            } else {
                Color32::from_rgb(10, 10, 10)
            };
            let painter = ctx.layer_painter(egui::LayerId::new(
                egui::Order::Foreground,
                egui::Id::new("theme_crossfade"),
            ));
            painter.rect_filled(ctx.screen_rect(), 0.0, color.gamma_multiply(overlay_alpha));
        }

        // the particle field never idles
        ctx.request_repaint();
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        storage.set_string(THEME_KEY, self.theme.mode().as_str().to_owned());
    }
}

/// Render a registered element under its current reveal state and record
/// its visible fraction for the post-layout notification batch. The
/// closure may return extra notifications gathered from nested elements.
fn revealed(
    ui: &mut egui::Ui,
    reveals: &RevealDispatcher,
    handle: RevealHandle,
    now: f64,
    batch: &mut VisibilityBatch,
    add_contents: impl FnOnce(&mut egui::Ui, RevealState) -> VisibilityBatch,
) -> VisibilityBatch {
    let state = reveals.state(handle, now);
    let inner = ui.scope(|ui| {
        ui.set_opacity(state.opacity);
        ui.add_space(state.offset.y.max(0.0));
        if state.offset.x > 0.0 {
            ui.horizontal(|ui| {
                ui.add_space(state.offset.x);
                ui.vertical(|ui| add_contents(ui, state)).inner
            })
            .inner
        } else {
            add_contents(ui, state)
        }
    });
    let fraction = visible_fraction(ui.clip_rect(), inner.response.rect);
    batch.push((handle, fraction));
    inner.inner
}

fn visible_fraction(clip: Rect, rect: Rect) -> f32 {
    if rect.height() <= 0.0 {
        return 0.0;
    }
    let overlap = clip.intersect(rect);
    if overlap.is_negative() {
        0.0
    } else {
        overlap.height() / rect.height()
    }
}

fn level_bar(ui: &mut egui::Ui, name: &str, level: u8, progress: f32) {
    ui.label(name);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(260.0, 8.0), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);
    let width = rect.width() * (level as f32 / 100.0) * progress;
    if width > 0.0 {
        painter.rect_filled(
            Rect::from_min_size(rect.min, egui::vec2(width, rect.height())),
            4.0,
            ACCENT,
        );
    }
    ui.add_space(4.0);
}

fn title_case(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let config = AppConfig::load(Path::new("portfolio.json"));
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([config.window_width, config.window_height])
        .with_title("Portfolio");
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "portfolio-canvas",
        options,
        Box::new(move |cc| Ok(Box::new(PortfolioApp::new(cc, config)))),
    )
}
