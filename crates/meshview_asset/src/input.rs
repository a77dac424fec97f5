use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use percent_encoding::percent_decode_str;

/// Where the bytes of an [`InputFile`] come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// A remote file, fetched by the importer.
    Url(String),
    /// A file on the local filesystem.
    Path(PathBuf),
    /// A file already held in memory, for example one picked in a file dialog.
    Memory(Arc<[u8]>),
}

/// One of the files handed to an import.
///
/// A model may span several files (a mesh file plus its material library and textures). The
/// importer picks the main file among them and resolves the others by [`InputFile::name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    name: String,
    source: FileSource,
}

impl InputFile {
    /// Creates an input file with an explicit name.
    pub fn new(name: impl Into<String>, source: FileSource) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }

    /// Creates an input file for `url`, naming it after the URL's last path segment.
    pub fn from_url(url: impl Into<String>) -> Self {
        let url = url.into();
        Self::new(file_name_from_url(&url), FileSource::Url(url))
    }

    /// Creates an input file for a local path, naming it after the path's file name.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(name, FileSource::Path(path))
    }

    /// Creates an input file from bytes already in memory.
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self::new(name, FileSource::Memory(bytes.into()))
    }

    /// The file name, including its extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the file's bytes come from.
    pub fn source(&self) -> &FileSource {
        &self.source
    }

    /// Returns the lowercase extension of the file name, without the preceding dot.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .map(|extension| extension.to_string_lossy().to_lowercase())
    }
}

/// Returns the decoded last path segment of `url`, ignoring any query or fragment.
pub fn file_name_from_url(url: &str) -> String {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    let path = &url[..end];
    let segment = path.rsplit('/').next().unwrap_or(path);
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

/// Turns a list of URLs into input files.
pub fn input_files_from_urls<I>(urls: I) -> Vec<InputFile>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    urls.into_iter().map(InputFile::from_url).collect()
}

/// Turns a list of local paths into input files.
pub fn input_files_from_paths<I>(paths: I) -> Vec<InputFile>
where
    I: IntoIterator,
    I::Item: Into<PathBuf>,
{
    paths.into_iter().map(InputFile::from_path).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_names_drop_query_and_fragment() {
        assert_eq!(
            file_name_from_url("https://example.com/models/teapot.obj?raw=true#top"),
            "teapot.obj"
        );
        assert_eq!(file_name_from_url("teapot.stl"), "teapot.stl");
    }

    #[test]
    fn url_names_are_percent_decoded() {
        assert_eq!(
            file_name_from_url("https://example.com/my%20model.3ds"),
            "my model.3ds"
        );
    }

    #[test]
    fn extension_is_lowercase() {
        let file = InputFile::from_url("https://example.com/Scene.GLB");
        assert_eq!(file.name(), "Scene.GLB");
        assert_eq!(file.extension().as_deref(), Some("glb"));
        assert_eq!(InputFile::from_bytes("README", Vec::<u8>::new()).extension(), None);
    }

    #[test]
    fn builds_lists_from_urls_and_paths() {
        let urls = input_files_from_urls(["https://a.org/x.obj", "https://a.org/x.mtl"]);
        assert_eq!(
            urls.iter().map(InputFile::name).collect::<Vec<_>>(),
            ["x.obj", "x.mtl"]
        );
        assert_eq!(
            urls[0].source(),
            &FileSource::Url("https://a.org/x.obj".to_string())
        );

        let paths = input_files_from_paths(["assets/models/cube.off"]);
        assert_eq!(paths[0].name(), "cube.off");
        assert!(matches!(paths[0].source(), FileSource::Path(_)));
    }
}
