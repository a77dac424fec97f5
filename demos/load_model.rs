//! Loads a small in-memory model and logs every step of the load.
//!
//! Run with `RUST_LOG=debug` to also see what the loader does internally.

use meshview::{
    log::{LogSettings, error, info},
    prelude::*,
    scene::ShaderPrecision,
    tasks::yield_now,
};

/// A model made of named parts, each with a triangle count.
#[derive(Debug)]
struct PartsModel {
    parts: Vec<(String, usize)>,
}

/// Reads `name triangles` lines from every `.parts` file.
struct PartsImporter;

impl Importer for PartsImporter {
    type Model = PartsModel;

    async fn import_files(
        &self,
        files: &[InputFile],
        _settings: &ImportSettings,
        context: &mut ImportContext<'_, PartsModel>,
    ) -> Result<ImportResult<PartsModel>, ImportError> {
        context.load_started();
        for (index, _) in files.iter().enumerate() {
            context.file_list_progress(index + 1, files.len());
            context.file_load_progress(index + 1, files.len());
            yield_now().await;
        }
        context.import_started();

        let candidates: Vec<&InputFile> = files
            .iter()
            .filter(|file| file.extension().as_deref() == Some("parts"))
            .collect();
        let names = candidates
            .iter()
            .map(|file| file.name().to_string())
            .collect();
        let main_file = candidates[context.select_main_file(names).await?];

        let meshview::asset::FileSource::Memory(bytes) = main_file.source() else {
            return Err(ImportError::FailedToLoadFile {
                name: main_file.name().to_string(),
                message: "not in memory".to_string(),
            });
        };
        let parts: Vec<(String, usize)> = String::from_utf8_lossy(bytes)
            .lines()
            .filter_map(|line| {
                let (name, triangles) = line.split_once(' ')?;
                Some((name.to_string(), triangles.trim().parse().ok()?))
            })
            .collect();

        Ok(ImportResult {
            model: PartsModel { parts },
            main_file: main_file.name().to_string(),
            up_vector: Direction::Z,
        })
    }
}

/// Builds one mesh per part, all sharing the default material.
struct PartsConverter;

impl Converter for PartsConverter {
    type Model = PartsModel;

    async fn convert(
        &self,
        model: &PartsModel,
        params: &ConversionParams,
        context: &mut ConvertContext<'_, PartsModel>,
    ) -> Result<ConvertedModel, ConversionError> {
        let precision = if params.force_mediump_for_materials {
            ShaderPrecision::Medium
        } else {
            ShaderPrecision::Default
        };
        let material = Material::new(RgbColor::new(200, 200, 200))
            .with_name("default")
            .with_precision(precision)
            .into_shared();

        let mut object = SceneObject::new().with_name("parts");
        for (name, triangles) in &model.parts {
            context.create_resource_url(name.as_bytes().to_vec(), "text/plain");
            object.add_mesh(MeshNode::new(*triangles, material.clone()).with_name(name.clone()));
            yield_now().await;
            context.texture_loaded();
        }

        Ok(ConvertedModel {
            object,
            default_material: Some(material),
        })
    }
}

/// Logs every callback.
struct LogProgress;

impl LoadCallbacks<PartsModel> for LogProgress {
    fn on_load_start(&mut self) {
        info!("load started");
    }

    fn on_file_list_progress(&mut self, current: usize, total: usize) {
        info!("listed {current}/{total} files");
    }

    fn on_file_load_progress(&mut self, current: usize, total: usize) {
        info!("read {current}/{total} files");
    }

    fn on_import_start(&mut self) {
        info!("importing");
    }

    fn on_select_main_file(&mut self, candidates: &[String], selection: MainFileSelection) {
        info!("choosing {} out of {:?}", candidates[0], candidates);
        selection.select(0);
    }

    fn on_visualization_start(&mut self) {
        info!("building the scene");
    }

    fn on_texture_loaded(&mut self) {
        info!("resource ready");
    }

    fn on_model_finished(&mut self, result: ImportResult<PartsModel>, object: SceneObject) {
        info!(
            "loaded {} with {} meshes, rotated by {}",
            result.main_file,
            object.mesh_count(),
            object.transform.rotation
        );
    }

    fn on_load_error(&mut self, load_error: LoadError) {
        error!("load failed: {load_error}");
    }
}

fn main() {
    if let Err(log_error) = meshview::log::init(&LogSettings::default()) {
        error!("{log_error}");
    }

    let settings =
        match ModelLoaderSettings::from_ron("(driver: (high_float_precision: 23))") {
            Ok(settings) => settings,
            Err(settings_error) => {
                error!("{settings_error}");
                return;
            }
        };
    let mut loader = ModelLoader::new(
        PartsImporter,
        PartsConverter,
        &settings,
        LocalTaskPool::new(),
        ResourceRegistry::global(),
    );

    loader.load_model(
        vec![
            InputFile::from_bytes("robot.parts", b"head 120\nbody 480\nlegs 260\n".to_vec()),
            InputFile::from_bytes("robot-lowpoly.parts", b"body 40\n".to_vec()),
        ],
        ImportSettings::default(),
        LogProgress,
    );
    let ticks = loader.task_pool().tick_until_stalled();
    info!(
        "load settled after {ticks} ticks, {} resources held",
        loader.registry().len()
    );

    loader.replace_default_material_color(RgbColor::new(255, 128, 0));
    if let Some(material) = loader.default_material() {
        info!("default material is now {:?}", material.borrow().color);
    }

    loader.destroy();
    info!("{} resources left", ResourceRegistry::global().len());
}
