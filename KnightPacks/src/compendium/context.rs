//! Per-run build context

use std::collections::HashMap;
use std::path::PathBuf;

use serde_json::{Map, Value};

use super::EntityKind;
use crate::assets::AssetIndex;
use crate::config::Config;
use crate::error::Result;
use crate::markup::{self, CommonMarkRenderer, MarkdownRenderer};
use crate::record::Record;
use crate::template::TemplateLoader;

/// State shared by every builder during one run: templates, the Markdown
/// renderer and the per-type asset indexes.
pub struct BuildContext {
    templates: TemplateLoader,
    renderer: Box<dyn MarkdownRenderer>,
    files_dir: PathBuf,
    asset_prefix: String,
    assets: HashMap<EntityKind, AssetIndex>,
}

impl BuildContext {
    pub fn new(
        templates: TemplateLoader,
        renderer: Box<dyn MarkdownRenderer>,
        files_dir: impl Into<PathBuf>,
        asset_prefix: impl Into<String>,
    ) -> Self {
        Self {
            templates,
            renderer,
            files_dir: files_dir.into(),
            asset_prefix: asset_prefix.into(),
            assets: HashMap::new(),
        }
    }

    /// Context reading templates and assets from the configured directories.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            TemplateLoader::new(&config.data_dir),
            Box::new(CommonMarkRenderer),
            &config.files_dir,
            &config.asset_prefix,
        )
    }

    pub fn templates_mut(&mut self) -> &mut TemplateLoader {
        &mut self.templates
    }

    /// Scan the asset directory of `kind` unless already indexed.
    pub fn prepare_assets(&mut self, kind: EntityKind) -> Result<()> {
        if !self.assets.contains_key(&kind) {
            let index = AssetIndex::scan(&self.files_dir, kind.plural(), &self.asset_prefix)?;
            self.assets.insert(kind, index);
        }
        Ok(())
    }

    /// Replace the asset index of `kind` (for testing)
    pub fn set_assets(&mut self, kind: EntityKind, index: AssetIndex) {
        self.assets.insert(kind, index);
    }

    /// Module image path for `slug`, if its source image was pre-placed.
    #[must_use]
    pub fn img(&self, kind: EntityKind, slug: &str) -> Option<String> {
        self.assets.get(&kind).and_then(|index| index.img_for(slug))
    }

    /// Render Markdown and turn links into emphasis.
    #[must_use]
    pub fn clean(&self, markdown: &str) -> String {
        markup::clean_description(self.renderer.as_ref(), markdown)
    }

    pub fn template(&mut self, kind: EntityKind) -> Result<Record> {
        self.templates.load_template(kind)
    }

    pub fn custom_effect_template(&mut self) -> Result<Map<String, Value>> {
        self.templates.load_custom_effect_template()
    }

    pub fn data(&mut self, file_name: &str) -> Result<Map<String, Value>> {
        self.templates.load_data(file_name)
    }
}

impl std::fmt::Debug for BuildContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuildContext")
            .field("templates", &self.templates)
            .field("files_dir", &self.files_dir)
            .field("asset_prefix", &self.asset_prefix)
            .field("assets", &self.assets.len())
            .finish_non_exhaustive()
    }
}
