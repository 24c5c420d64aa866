//! # App
//!
//! Owns every piece of page state and runs the dispatch pipeline:
//!
//! ```text
//! Command ──► apply (SiteEditor / carousel / contact form)
//!                 │ Effects { sections, content_changed, fragments, notice }
//!                 ▼
//!         rebuild search index (if content changed)
//!                 ▼
//!         render affected sections ──► Update { patches, admin_bar, ... }
//! ```

use std::collections::BTreeSet;
use std::time::Duration;

use inkspire_content::{Section, ServiceTaxonomy, SiteConfig};
use inkspire_editor::{
    Carousel, Confirm, ContactInquiry, ContactState, ContentStorage, EditError, Outcome,
    SiteEditor,
};
use inkspire_render::{
    editor_modal, image_editor_modal, login_modal, render_page_html, render_section,
    search_results, to_html, HtmlOptions, RenderContext,
};
use inkspire_search::{SearchEntry, SearchIndex};
use tracing::{debug, info, instrument};

use crate::command::Command;
use crate::errors::AppError;
use crate::update::{AdminBarState, FragmentPatch, ImageEditorView, Notice, SectionPatch, Update};

pub const EDIT_MODAL: &str = "edit-modal";
pub const IMAGE_EDIT_MODAL: &str = "image-edit-modal";
pub const LOGIN_MODAL: &str = "admin-login-modal";
pub const SEARCH_RESULTS: &str = "search-results";

const SAVED: &str = "All changes have been saved successfully!";
const DISCARDED: &str = "All changes have been discarded.";
const RESET: &str = "Site data has been reset to default.";

/// Side effects collected while applying one command
#[derive(Default)]
struct Effects {
    sections: BTreeSet<Section>,
    content_changed: bool,
    fragments: Vec<FragmentPatch>,
    search_results: Vec<SearchEntry>,
    notice: Option<Notice>,
}

impl Effects {
    fn content(&mut self, sections: impl IntoIterator<Item = Section>) {
        self.sections.extend(sections);
        self.content_changed = true;
    }

    fn outcome(&mut self, outcome: &Outcome) -> bool {
        match outcome {
            Outcome::Applied { sections } => {
                self.content(sections.iter().copied());
                true
            }
            Outcome::Cancelled | Outcome::NoChanges => false,
        }
    }
}

pub struct App {
    editor: SiteEditor,
    taxonomy: ServiceTaxonomy,
    index: SearchIndex,
    carousel: Carousel,
    contact: ContactState,
    inquiries: Vec<ContactInquiry>,
    admin_bar: AdminBarState,
}

impl App {
    /// Load content from `storage` and build the search index
    pub fn new(config: SiteConfig, storage: Box<dyn ContentStorage>) -> Self {
        let editor = SiteEditor::open(config, storage);
        let taxonomy = ServiceTaxonomy::builtin();
        let config = editor.config();

        let index = SearchIndex::rebuild(editor.current(), &taxonomy)
            .with_min_query_len(config.min_query_len);
        let carousel = Carousel::new(
            editor.current().site.testimonials.len(),
            Duration::from_millis(config.testimonial_interval_ms),
        );
        let admin_bar = AdminBarState::new(editor.is_admin(), editor.has_unsaved_changes());

        info!(entries = index.len(), admin = editor.is_admin(), "App started");

        Self {
            editor,
            taxonomy,
            index,
            carousel,
            contact: ContactState::Form,
            inquiries: Vec::new(),
            admin_bar,
        }
    }

    /// Parse config JSON (absent or blank means defaults) and start
    pub fn from_config_json(
        config_json: Option<&str>,
        storage: Box<dyn ContentStorage>,
    ) -> Result<Self, AppError> {
        Ok(Self::new(SiteConfig::from_optional_json(config_json)?, storage))
    }

    pub fn editor(&self) -> &SiteEditor {
        &self.editor
    }

    pub fn search_index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn contact_state(&self) -> ContactState {
        self.contact
    }

    /// Contact submissions accepted this session
    pub fn inquiries(&self) -> &[ContactInquiry] {
        &self.inquiries
    }

    pub fn admin_bar(&self) -> AdminBarState {
        self.admin_bar
    }

    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext::public(self.editor.current(), &self.taxonomy, self.editor.config())
            .with_admin(self.editor.is_admin(), self.editor.has_unsaved_changes())
            .with_contact(self.contact)
            .with_testimonial(self.carousel.index())
    }

    /// The whole page as an HTML document
    pub fn render_page(&self) -> String {
        render_page_html(&self.render_context(), HtmlOptions::default())
    }

    /// Apply one command and report what changed
    #[instrument(skip_all, fields(action = command.action()))]
    pub fn dispatch(
        &mut self,
        command: Command,
        confirm: &mut dyn Confirm,
    ) -> Result<Update, AppError> {
        let effects = self.apply(command, confirm)?;
        Ok(self.finish(effects))
    }

    fn apply(&mut self, command: Command, confirm: &mut dyn Confirm) -> Result<Effects, AppError> {
        let mut fx = Effects::default();

        match command {
            Command::Login { username, password } => {
                match self.editor.login(&username, &password) {
                    Ok(outcome) => {
                        fx.outcome(&outcome);
                        fx.fragments.push(FragmentPatch::hide(LOGIN_MODAL));
                    }
                    // Shown inline in the dialog; no lockout
                    Err(_) => fx
                        .fragments
                        .push(FragmentPatch::show(LOGIN_MODAL, to_html(&login_modal(true)))),
                }
            }

            Command::Logout => {
                if fx.outcome(&self.editor.logout(confirm)) {
                    fx.fragments.push(FragmentPatch::hide(EDIT_MODAL));
                    fx.fragments.push(FragmentPatch::hide(IMAGE_EDIT_MODAL));
                }
            }

            Command::Save => {
                if fx.outcome(&self.editor.save(confirm)) {
                    fx.notice = Some(Notice::info(SAVED));
                }
            }

            Command::Discard => {
                if fx.outcome(&self.editor.discard(confirm)) {
                    fx.fragments.push(FragmentPatch::hide(EDIT_MODAL));
                    fx.fragments.push(FragmentPatch::hide(IMAGE_EDIT_MODAL));
                    fx.notice = Some(Notice::info(DISCARDED));
                }
            }

            Command::Reset => {
                if fx.outcome(&self.editor.reset_to_default(confirm)) {
                    fx.fragments.push(FragmentPatch::hide(EDIT_MODAL));
                    fx.fragments.push(FragmentPatch::hide(IMAGE_EDIT_MODAL));
                    fx.notice = Some(Notice::info(RESET));
                }
            }

            Command::OpenEditor { kind, index } => {
                let form = self.editor.open_editor(kind, index)?;
                fx.fragments
                    .push(FragmentPatch::show(EDIT_MODAL, to_html(&editor_modal(form))));
                fx.fragments.push(FragmentPatch::hide(IMAGE_EDIT_MODAL));
            }

            Command::SubmitEditor { values } => match self.editor.submit_editor(&values) {
                Ok(sections) => {
                    fx.content(sections);
                    fx.fragments.push(FragmentPatch::hide(EDIT_MODAL));
                }
                Err(e @ (EditError::Validation { .. } | EditError::InvalidEmail)) => {
                    fx.notice = Some(Notice::error(e.to_string()))
                }
                Err(e) => return Err(e.into()),
            },

            Command::CancelEditor => {
                self.editor.cancel_editor();
                fx.fragments.push(FragmentPatch::hide(EDIT_MODAL));
            }

            Command::DeleteEntity { kind, index } => {
                fx.outcome(&self.editor.delete_entity(kind, index, confirm)?);
            }

            Command::OpenImageEditor { image_id } => {
                let editor = self.editor.open_image_editor(&image_id)?;
                fx.fragments.push(FragmentPatch::show(
                    IMAGE_EDIT_MODAL,
                    to_html(&image_editor_modal(editor)),
                ));
                fx.fragments.push(FragmentPatch::hide(EDIT_MODAL));
            }

            // Preview tracks the input client-side; only the snapshot changes
            Command::SetImageUrl { url } => {
                self.editor.set_image_url(&url)?;
            }

            Command::LoadImageFile { name, mime, bytes } => {
                let editor = self.editor.load_image_file(name.as_deref(), &mime, &bytes)?;
                fx.fragments.push(FragmentPatch::show(
                    IMAGE_EDIT_MODAL,
                    to_html(&image_editor_modal(editor)),
                ));
            }

            Command::SaveImage => {
                fx.content(self.editor.save_image()?);
                fx.fragments.push(FragmentPatch::hide(IMAGE_EDIT_MODAL));
            }

            Command::RemoveImage => {
                if fx.outcome(&self.editor.remove_image(confirm)?) {
                    fx.fragments.push(FragmentPatch::hide(IMAGE_EDIT_MODAL));
                }
            }

            Command::CloseImageEditor => {
                self.editor.close_image_editor();
                fx.fragments.push(FragmentPatch::hide(IMAGE_EDIT_MODAL));
            }

            Command::Search { query } => {
                let searched = query.chars().count() >= self.editor.config().min_query_len;
                fx.search_results = self
                    .index
                    .search_limited(&query, self.editor.config().search_result_limit)
                    .into_iter()
                    .cloned()
                    .collect();
                fx.fragments.push(FragmentPatch::show(
                    SEARCH_RESULTS,
                    to_html(&search_results(&fx.search_results, searched)),
                ));
            }

            Command::SelectTestimonial { index } => {
                if self.carousel.select(index) {
                    fx.sections.insert(Section::Testimonials);
                }
            }

            Command::Tick { elapsed_ms } => {
                if self.carousel.tick(Duration::from_millis(elapsed_ms)) {
                    fx.sections.insert(Section::Testimonials);
                }
            }

            Command::SubmitContact { values } => match ContactInquiry::from_values(&values) {
                Ok(inquiry) => {
                    info!(service = %inquiry.service, "Contact inquiry received");
                    self.inquiries.push(inquiry);
                    self.contact = ContactState::ThankYou;
                    fx.sections.insert(Section::Contact);
                }
                Err(e) => fx.notice = Some(Notice::error(e.to_string())),
            },
        }

        Ok(fx)
    }

    fn finish(&mut self, mut fx: Effects) -> Update {
        if fx.content_changed {
            self.index = SearchIndex::rebuild(self.editor.current(), &self.taxonomy)
                .with_min_query_len(self.editor.config().min_query_len);
            self.carousel
                .set_len(self.editor.current().site.testimonials.len());
        }

        let admin_bar =
            AdminBarState::new(self.editor.is_admin(), self.editor.has_unsaved_changes());
        if admin_bar != self.admin_bar {
            fx.sections.insert(Section::AdminBar);
            self.admin_bar = admin_bar;
        }

        let ctx = self.render_context();
        let patches = Section::ALL
            .iter()
            .filter(|s| fx.sections.contains(s))
            .map(|&section| SectionPatch {
                section,
                anchor: section.anchor(),
                html: to_html(&render_section(section, &ctx)),
            })
            .collect::<Vec<_>>();

        debug!(
            patches = patches.len(),
            reindexed = fx.content_changed,
            "Dispatch finished"
        );

        Update {
            patches,
            fragments: fx.fragments,
            admin_bar,
            form: self.editor.form().cloned(),
            image_editor: self.editor.image_editor().map(ImageEditorView::from),
            search_results: fx.search_results,
            notice: fx.notice,
        }
    }
}
