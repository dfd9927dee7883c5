use crate::{IndexArtifacts, RankVector, RelevanceTable, TitleMap};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{create_dir_all, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Locations of the three index artifacts.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub titles: PathBuf,
    pub ranks: PathBuf,
    pub relevance: PathBuf,
}

impl ArtifactPaths {
    pub fn new<P: AsRef<Path>>(titles: P, ranks: P, relevance: P) -> Self {
        Self {
            titles: titles.as_ref().to_path_buf(),
            ranks: ranks.as_ref().to_path_buf(),
            relevance: relevance.as_ref().to_path_buf(),
        }
    }

    /// Conventional file names under one directory.
    pub fn in_dir<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref();
        Self::new(root.join("titles.bin"), root.join("ranks.bin"), root.join("relevance.bin"))
    }
}

/// Serialize into a temp file next to `path`, then rename it into place.
fn write_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let dir = match path.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };
    create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temp file in {}", dir.display()))?;
    {
        let mut w = BufWriter::new(tmp.as_file());
        bincode::serialize_into(&mut w, value)
            .with_context(|| format!("encoding {}", path.display()))?;
        w.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn read<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let value = bincode::deserialize_from(BufReader::new(f))
        .with_context(|| format!("decoding {}", path.display()))?;
    Ok(value)
}

pub fn save_titles(paths: &ArtifactPaths, titles: &TitleMap) -> Result<()> {
    write_atomic(&paths.titles, titles)
}

pub fn load_titles(paths: &ArtifactPaths) -> Result<TitleMap> {
    read(&paths.titles)
}

pub fn save_ranks(paths: &ArtifactPaths, ranks: &RankVector) -> Result<()> {
    write_atomic(&paths.ranks, ranks)
}

pub fn load_ranks(paths: &ArtifactPaths) -> Result<RankVector> {
    read(&paths.ranks)
}

pub fn save_relevance(paths: &ArtifactPaths, relevance: &RelevanceTable) -> Result<()> {
    write_atomic(&paths.relevance, relevance)
}

pub fn load_relevance(paths: &ArtifactPaths) -> Result<RelevanceTable> {
    read(&paths.relevance)
}

pub fn save_artifacts(paths: &ArtifactPaths, artifacts: &IndexArtifacts) -> Result<()> {
    save_titles(paths, &artifacts.titles)?;
    save_ranks(paths, &artifacts.ranks)?;
    save_relevance(paths, &artifacts.relevance)?;
    Ok(())
}

/// Load everything the query phase needs.
pub fn load_artifacts(paths: &ArtifactPaths) -> Result<IndexArtifacts> {
    let titles = load_titles(paths)?;
    let ranks = load_ranks(paths)?;
    let relevance = load_relevance(paths)?;
    Ok(IndexArtifacts { titles, ranks, relevance })
}
