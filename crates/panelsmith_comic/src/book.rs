//! Panel books: named collections of panel prompts sharing one configuration.

use derive_getters::Getters;
use panelsmith_core::{AspectRatio, DEFAULT_MODEL, GenerationSettings, JobDefinition};
use panelsmith_error::{ConfigError, ConfigErrorKind, PanelsmithError, PanelsmithResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, instrument};

/// One panel in a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct PanelEntry {
    /// Panel name and output file stem
    name: String,
    /// Requested aspect ratio
    #[serde(default)]
    aspect_ratio: AspectRatio,
    /// Prompt text
    prompt: String,
}

impl PanelEntry {
    /// Creates a panel entry.
    pub fn new(
        name: impl Into<String>,
        aspect_ratio: AspectRatio,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            aspect_ratio,
            prompt: prompt.into(),
        }
    }
}

const INTRO_COMIC: [(&str, AspectRatio, &str); 3] = [
    (
        "panel_2_spaghetti_monster",
        AspectRatio::Portrait3x4,
        "\nLow angle, imposing. A \"Spaghetti Monster\" looms over the viewer. It is a chaotic, tangled knot of multi-colored wires and cables with glowing red LED eyes. It drips black oil/grease.\nStyle: Dark comic book style, menacing, high contrast shadows.\n",
    ),
    (
        "panel_4_hotfix_strike",
        AspectRatio::Widescreen,
        "\nDynamic action shot. Nubus (cute white puffy cloud with headphones) is mid-air, slicing through a \"Cable Snake\" with a glowing blue energy blade (representing a Hotfix). \"Impact frame\" style\u{2014}high contrast, black and white background with neon blue accents.\nStyle: Manga action style, impact frame, high energy, neon accents.\n",
    ),
    (
        "panel_5_the_uplink",
        AspectRatio::Square,
        "\nNubus lands, looking up. A single beam of pristine, white light pierces through the rusty ceiling tiles above. It looks like a divine spotlight in the dark server room.\nStyle: Dramatic lighting, hopeful, high contrast between dark room and bright light.\n",
    ),
];

#[derive(Deserialize)]
struct BookFile {
    #[serde(default = "default_model")]
    model: String,
    #[serde(default)]
    generation: GenerationSettings,
    #[serde(default)]
    panels: Vec<PanelEntry>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

/// A validated set of panels that all share a model and generation settings.
///
/// Panel names are unique, since each one names an output file.
///
/// # Examples
///
/// ```
/// use panelsmith_comic::PanelBook;
///
/// let book: PanelBook = r#"
///     [[panels]]
///     name = "cover"
///     aspect_ratio = "2:3"
///     prompt = "A cloud wearing headphones."
/// "#
/// .parse()
/// .unwrap();
///
/// let jobs = book.jobs().unwrap();
/// assert_eq!(jobs[0].image_file_name(), "cover.png");
/// ```
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct PanelBook {
    /// Model every panel is sent to
    model: String,
    /// Settings every panel uses
    settings: GenerationSettings,
    /// Panels in book order
    panels: Vec<PanelEntry>,
}

impl PanelBook {
    /// Creates a book, rejecting empty books and duplicate or empty names.
    ///
    /// # Errors
    ///
    /// Returns a configuration error describing the first problem found.
    pub fn new(
        model: impl Into<String>,
        settings: GenerationSettings,
        panels: Vec<PanelEntry>,
    ) -> PanelsmithResult<Self> {
        if panels.is_empty() {
            return Err(ConfigError::new(ConfigErrorKind::EmptyBook).into());
        }

        let mut seen = HashSet::new();
        for panel in &panels {
            if panel.name.trim().is_empty() {
                return Err(ConfigError::new(ConfigErrorKind::EmptyJobName).into());
            }
            if !seen.insert(panel.name.as_str()) {
                return Err(
                    ConfigError::new(ConfigErrorKind::DuplicatePanel(panel.name.clone())).into(),
                );
            }
        }

        let book = Self {
            model: model.into(),
            settings,
            panels,
        };
        book.jobs()?;
        Ok(book)
    }

    /// The three-panel intro comic.
    pub fn intro_comic() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            settings: GenerationSettings::default(),
            panels: INTRO_COMIC
                .iter()
                .map(|(name, ratio, prompt)| PanelEntry::new(*name, *ratio, *prompt))
                .collect(),
        }
    }

    /// Loads a book from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file<P: AsRef<Path>>(path: P) -> PanelsmithResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(ConfigErrorKind::BookRead {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        })?;

        let book: Self = content.parse()?;
        debug!(panels = book.panels.len(), model = %book.model, "Loaded panel book");
        Ok(book)
    }

    /// Replaces the model for every panel.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Job definitions for every panel, in book order.
    ///
    /// # Errors
    ///
    /// Returns an error if a panel cannot form a valid job.
    pub fn jobs(&self) -> PanelsmithResult<Vec<JobDefinition>> {
        self.panels.iter().map(|panel| self.job_for(panel)).collect()
    }

    /// Job definitions for the named panels, in book order.
    ///
    /// # Errors
    ///
    /// Fails on the first name that is not in the book.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> PanelsmithResult<Vec<JobDefinition>> {
        let wanted: HashSet<&str> = names.iter().map(|name| name.as_ref()).collect();
        if let Some(unknown) = names
            .iter()
            .map(|name| name.as_ref())
            .find(|name| !self.panels.iter().any(|panel| panel.name == *name))
        {
            return Err(ConfigError::new(ConfigErrorKind::UnknownPanel(unknown.to_string())).into());
        }

        self.panels
            .iter()
            .filter(|panel| wanted.contains(panel.name.as_str()))
            .map(|panel| self.job_for(panel))
            .collect()
    }

    fn job_for(&self, panel: &PanelEntry) -> PanelsmithResult<JobDefinition> {
        JobDefinition::builder()
            .name(panel.name.clone())
            .prompt(panel.prompt.clone())
            .model(self.model.clone())
            .aspect_ratio(panel.aspect_ratio)
            .settings(self.settings.clone())
            .build()
            .map_err(|e| ConfigError::new(ConfigErrorKind::InvalidJob(e.to_string())).into())
    }
}

impl FromStr for PanelBook {
    type Err = PanelsmithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let file: BookFile = toml::from_str(s)
            .map_err(|e| ConfigError::new(ConfigErrorKind::BookParse(e.to_string())))?;
        Self::new(file.model, file.generation, file.panels)
    }
}
