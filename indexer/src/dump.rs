use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use wikisearch_core::DocId;

/// One record of the source dump, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDoc {
    pub id: DocId,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct XmlDump {
    #[serde(rename = "page", default)]
    pages: Vec<XmlPage>,
}

#[derive(Debug, Deserialize)]
struct XmlPage {
    id: String,
    title: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JsonDoc {
    id: DocId,
    title: String,
    #[serde(default, alias = "text")]
    body: String,
}

impl From<JsonDoc> for SourceDoc {
    fn from(d: JsonDoc) -> Self {
        Self { id: d.id, title: d.title, text: d.body }
    }
}

const EXTENSIONS: &[&str] = &["xml", "json", "jsonl"];

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|s| s.to_str())
}

/// Dump files under `input`: the file itself, or every supported file in a directory, sorted.
pub fn collect_input_files(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.is_dir() {
        bail!("input {} does not exist", input.display());
    }
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(input).into_iter().filter_map(|e| e.ok()) {
        let p = entry.path();
        if p.is_file() && extension(p).is_some_and(|ext| EXTENSIONS.contains(&ext)) {
            files.push(p.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// Read every record from one dump file, dispatching on its extension.
pub fn read_file(file: &Path) -> Result<Vec<SourceDoc>> {
    let docs = match extension(file) {
        Some("jsonl") => read_jsonl(file),
        Some("json") => read_json(file),
        _ => read_xml(file),
    };
    docs.with_context(|| format!("reading {}", file.display()))
}

pub fn parse_xml(xml: &str) -> Result<Vec<SourceDoc>> {
    let dump: XmlDump = quick_xml::de::from_str(xml)?;
    dump.pages
        .into_iter()
        .map(|page| {
            let id = page.id.trim();
            let id: DocId = id.parse().with_context(|| format!("invalid page id {id:?}"))?;
            Ok(SourceDoc { id, title: page.title, text: page.text.unwrap_or_default() })
        })
        .collect()
}

fn read_xml(file: &Path) -> Result<Vec<SourceDoc>> {
    let xml = std::fs::read_to_string(file)?;
    parse_xml(&xml)
}

fn read_jsonl(file: &Path) -> Result<Vec<SourceDoc>> {
    let reader = BufReader::new(File::open(file)?);
    let mut docs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let doc: JsonDoc = serde_json::from_str(&line)?;
        docs.push(doc.into());
    }
    Ok(docs)
}

fn read_json(file: &Path) -> Result<Vec<SourceDoc>> {
    let reader = BufReader::new(File::open(file)?);
    let json: serde_json::Value = serde_json::from_reader(reader)?;
    let docs = match json {
        serde_json::Value::Array(arr) => arr
            .into_iter()
            .map(|v| serde_json::from_value::<JsonDoc>(v).map(SourceDoc::from))
            .collect::<Result<Vec<_>, _>>()?,
        serde_json::Value::Object(_) => vec![serde_json::from_value::<JsonDoc>(json)?.into()],
        _ => bail!("expected a JSON object or array"),
    };
    Ok(docs)
}
