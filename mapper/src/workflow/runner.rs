use crate::render::overlay::{load_layout, resize_for_display, OverlayRenderer};
use crate::store::config_store::{load_config, save_config};
use anyhow::{anyhow, Context};
use image::GenericImageView;
use rfidcore::coverage::CoverageModel;
use rfidcore::editor::{CanvasPayload, EditorSession, MAX_DISPLAY_WIDTH};
use rfidcore::model::{Floor, FloorRegistry, ReaderPosition};
use rfidcore::telemetry::{LogManager, RunRecorder};
use std::fs;
use std::path::{Path, PathBuf};

/// Executes the per-floor view and edit workflows.
///
/// Every operation is scoped to one floor: a load or save failure halts that
/// floor only, and batch runs continue past it.
pub struct Runner {
    registry: FloorRegistry,
    layout_dir: PathBuf,
    data_dir: PathBuf,
    out_dir: PathBuf,
    model: CoverageModel,
    renderer: OverlayRenderer,
    logger: LogManager,
}

impl Runner {
    pub fn new(
        registry: FloorRegistry,
        layout_dir: PathBuf,
        data_dir: PathBuf,
        out_dir: PathBuf,
    ) -> Self {
        Self {
            registry,
            layout_dir,
            data_dir,
            out_dir,
            model: CoverageModel::new(),
            renderer: OverlayRenderer::new(),
            logger: LogManager::new(),
        }
    }

    fn floor(&self, key: &str) -> anyhow::Result<&Floor> {
        self.registry
            .get(key)
            .ok_or_else(|| anyhow!("unknown floor key {key:?}; try --list"))
    }

    fn layout_path(&self, key: &str) -> PathBuf {
        self.layout_dir.join(format!("{key}.png"))
    }

    fn data_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }

    /// View mode: compute the coverage field and write the overlay PNG.
    pub fn render_floor(&self, key: &str) -> anyhow::Result<PathBuf> {
        let floor = self.floor(key)?;
        let layout = load_layout(&self.layout_path(key))
            .with_context(|| format!("loading layout for {}", floor.name))?;
        let config = load_config(&self.data_path(key))
            .with_context(|| format!("loading record for {}", floor.name))?;

        let field = self
            .model
            .compute(
                layout.width(),
                layout.height(),
                &config.readers,
                config.pixels_per_meter,
            )
            .with_context(|| format!("computing coverage field for {}", floor.name))?;

        for (index, reader) in config.readers.iter().enumerate() {
            self.logger.record(&format!(
                "{}: {} at ({}, {})",
                floor.name,
                ReaderPosition::label(index),
                reader.x,
                reader.y
            ));
        }

        let overlay = self.renderer.render(&layout, &field, &config.readers);
        fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("creating output directory {}", self.out_dir.display()))?;
        let out = self.out_dir.join(format!("{key}.png"));
        overlay
            .save(&out)
            .with_context(|| format!("saving overlay {}", out.display()))?;
        Ok(out)
    }

    /// Renders every floor in the registry, continuing past failures.
    pub fn render_all(&self, recorder: &RunRecorder) {
        for floor in self.registry.iter() {
            match self.render_floor(&floor.key) {
                Ok(path) => {
                    recorder.record_rendered();
                    self.logger
                        .record(&format!("{} -> {}", floor.name, path.display()));
                }
                Err(err) => {
                    recorder.record_error();
                    self.logger.flag(&format!("{}: {:#}", floor.name, err));
                }
            }
        }
        let (rendered, errors) = recorder.snapshot();
        self.logger.record(&format!(
            "batch render done: {} ok, {} failed",
            rendered, errors
        ));
    }

    /// Edit mode: map a drawing-surface dump to canonical reader positions.
    ///
    /// The floor's existing record supplies `pixels_per_meter`; on `save` the
    /// working list replaces the persisted one wholesale. A failed save keeps
    /// the returned working list intact so the caller can retry.
    pub fn edit_floor(
        &self,
        key: &str,
        annotations: Option<&Path>,
        save: bool,
        background: Option<&Path>,
    ) -> anyhow::Result<Vec<ReaderPosition>> {
        let floor = self.floor(key)?;
        let layout = load_layout(&self.layout_path(key))
            .with_context(|| format!("loading layout for {}", floor.name))?;
        let config = load_config(&self.data_path(key))
            .with_context(|| format!("loading record for {}", floor.name))?;

        let mut session = EditorSession::new(layout.width(), layout.height(), MAX_DISPLAY_WIDTH);

        if let Some(path) = background {
            let resized = resize_for_display(&layout, session.scale());
            resized
                .save(path)
                .with_context(|| format!("saving edit background {}", path.display()))?;
            self.logger.record(&format!(
                "edit background for {} at {}x{}",
                floor.name,
                session.scale().display_width(),
                session.scale().display_height()
            ));
        }

        if let Some(path) = annotations {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading annotation dump {}", path.display()))?;
            let payload = CanvasPayload::from_json(&raw)
                .with_context(|| format!("decoding annotation dump {}", path.display()))?;
            session.ingest_payload(&payload);
        }

        let readers = session.readers().to_vec();
        for (index, reader) in readers.iter().enumerate() {
            self.logger.record(&format!(
                "{}: working {} at ({}, {})",
                floor.name,
                ReaderPosition::label(index),
                reader.x,
                reader.y
            ));
        }
        if save {
            let updated = session
                .to_config(config.pixels_per_meter)
                .with_context(|| format!("building updated record for {}", floor.name))?;
            save_config(&self.data_path(key), &updated)
                .with_context(|| format!("saving readers for {}", floor.name))?;
            self.logger.record(&format!(
                "saved {} readers for {}",
                readers.len(),
                floor.name
            ));
        }
        Ok(readers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use rfidcore::model::{Floor, FloorConfig};
    use tempfile::{tempdir, TempDir};

    struct Fixture {
        _dir: TempDir,
        runner: Runner,
        data_path: PathBuf,
    }

    fn fixture(width: u32, height: u32, config: &FloorConfig) -> Fixture {
        let dir = tempdir().unwrap();
        let layout_dir = dir.path().join("floor_layouts");
        let data_dir = dir.path().join("floor_data");
        let out_dir = dir.path().join("coverage_maps");
        fs::create_dir_all(&layout_dir).unwrap();
        fs::create_dir_all(&data_dir).unwrap();

        RgbImage::new(width, height)
            .save(layout_dir.join("ground.png"))
            .unwrap();
        let data_path = data_dir.join("ground.json");
        fs::write(&data_path, serde_json::to_string_pretty(config).unwrap()).unwrap();

        let registry =
            FloorRegistry::from_floors(vec![Floor::new("Ground Floor", "ground")]).unwrap();
        let runner = Runner::new(registry, layout_dir, data_dir, out_dir);
        Fixture {
            _dir: dir,
            runner,
            data_path,
        }
    }

    #[test]
    fn render_floor_writes_an_overlay_with_layout_dimensions() {
        let config = FloorConfig::new(2.0, vec![ReaderPosition::new(5, 5)]);
        let fix = fixture(40, 30, &config);

        let out = fix.runner.render_floor("ground").unwrap();
        let overlay = image::open(&out).unwrap();
        assert_eq!((overlay.width(), overlay.height()), (40, 30));
    }

    #[test]
    fn render_floor_rejects_an_unknown_key() {
        let config = FloorConfig::new(2.0, Vec::new());
        let fix = fixture(8, 8, &config);
        assert!(fix.runner.render_floor("penthouse").is_err());
    }

    #[test]
    fn render_floor_halts_on_an_invalid_record() {
        let config = FloorConfig::new(2.0, Vec::new());
        let fix = fixture(8, 8, &config);
        fs::write(&fix.data_path, r#"{"pixels_per_meter": -1.0, "readers": []}"#).unwrap();
        assert!(fix.runner.render_floor("ground").is_err());
    }

    #[test]
    fn render_all_counts_successes_and_failures() {
        let config = FloorConfig::new(2.0, Vec::new());
        let fix = fixture(8, 8, &config);
        let registry = FloorRegistry::from_floors(vec![
            Floor::new("Ground Floor", "ground"),
            Floor::new("Mezzanine", "mezz"),
        ])
        .unwrap();
        let runner = Runner::new(
            registry,
            fix.runner.layout_dir.clone(),
            fix.runner.data_dir.clone(),
            fix.runner.out_dir.clone(),
        );

        let recorder = RunRecorder::new();
        runner.render_all(&recorder);
        // "mezz" has no layout or record on disk
        assert_eq!(recorder.snapshot(), (1, 1));
    }

    #[test]
    fn edit_floor_maps_annotations_and_saves_a_full_replacement() {
        let config = FloorConfig::new(2.0, vec![ReaderPosition::new(30, 30)]);
        let fix = fixture(40, 30, &config);
        let dump = fix._dir.path().join("dump.json");
        fs::write(
            &dump,
            r#"{"objects": [
                {"type": "circle", "left": 4.0, "top": 6.0, "radius": 2.0},
                {"type": "rect", "left": 0.0, "top": 0.0, "width": 5.0, "height": 5.0}
            ]}"#,
        )
        .unwrap();

        let readers = fix
            .runner
            .edit_floor("ground", Some(&dump), true, None)
            .unwrap();
        assert_eq!(readers, vec![ReaderPosition::new(6, 8)]);

        let saved = load_config(&fix.data_path).unwrap();
        assert_eq!(saved.pixels_per_meter, 2.0);
        assert_eq!(saved.readers, vec![ReaderPosition::new(6, 8)]);
    }

    #[test]
    fn edit_floor_without_save_leaves_the_record_alone() {
        let config = FloorConfig::new(2.0, vec![ReaderPosition::new(30, 30)]);
        let fix = fixture(40, 30, &config);
        let dump = fix._dir.path().join("dump.json");
        fs::write(&dump, r#"{"objects": []}"#).unwrap();

        let readers = fix
            .runner
            .edit_floor("ground", Some(&dump), false, None)
            .unwrap();
        assert!(readers.is_empty());

        let saved = load_config(&fix.data_path).unwrap();
        assert_eq!(saved.readers, vec![ReaderPosition::new(30, 30)]);
    }

    #[test]
    fn edit_floor_emits_a_downscaled_background() {
        let config = FloorConfig::new(2.0, Vec::new());
        let fix = fixture(2000, 1000, &config);
        let background = fix._dir.path().join("background.png");

        fix.runner
            .edit_floor("ground", None, false, Some(&background))
            .unwrap();
        let emitted = image::open(&background).unwrap();
        assert_eq!((emitted.width(), emitted.height()), (1000, 500));
    }
}
