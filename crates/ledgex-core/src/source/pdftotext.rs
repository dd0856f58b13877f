use crate::error::ExtractError;
use crate::source::{PageSource, Word};
use std::io::Write;
use std::process::Command;

/// Word source backed by pdftotext (from poppler-utils).
///
/// Runs `pdftotext -bbox` once per document and keeps the parsed per-page
/// word lists in memory; `page_words` never touches the subprocess again.
pub struct PdftotextSource {
    pages: Vec<Vec<Word>>,
}

impl PdftotextSource {
    /// Open a document from raw PDF bytes, decrypting with `password` when
    /// one is given.
    pub fn open(pdf_bytes: &[u8], password: Option<&str>) -> Result<Self, ExtractError> {
        // pdftotext reads from a file path, so hand the bytes over via a
        // temp file that lives for the duration of the subprocess.
        let mut tmpfile = tempfile::NamedTempFile::new()?;
        tmpfile.write_all(pdf_bytes)?;

        let mut cmd = Command::new("pdftotext");
        cmd.arg("-bbox");
        if let Some(pw) = password {
            cmd.arg("-upw").arg(pw);
        }
        cmd.arg(tmpfile.path()).arg("-"); // output to stdout

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ExtractError::PdftotextNotFound
            } else {
                ExtractError::Io(e)
            }
        })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            if stderr.contains("Incorrect password") {
                let reason = if password.is_some() {
                    "incorrect password"
                } else {
                    "password required"
                };
                return Err(ExtractError::Password(reason.to_string()));
            }
            return Err(ExtractError::PdftotextFailed { code, stderr });
        }

        let xml = String::from_utf8_lossy(&output.stdout);
        Ok(PdftotextSource {
            pages: parse_bbox_xml(&xml),
        })
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl PageSource for PdftotextSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_words(&self, index: usize) -> Result<Vec<Word>, ExtractError> {
        self.pages
            .get(index)
            .cloned()
            .ok_or_else(|| ExtractError::Page {
                page: index + 1,
                reason: "page index out of range".to_string(),
            })
    }

    fn source_name(&self) -> &str {
        "pdftotext"
    }
}

/// Parse the XHTML emitted by `pdftotext -bbox`: one `<page>` element per
/// page, each containing `<word xMin=.. yMin=.. xMax=.. yMax=..>` tokens.
fn parse_bbox_xml(xml: &str) -> Vec<Vec<Word>> {
    let mut pages: Vec<Vec<Word>> = Vec::new();
    let mut current: Option<Vec<Word>> = None;

    for raw in xml.lines() {
        let line = raw.trim();

        if line.starts_with("<page") {
            current = Some(Vec::new());
            continue;
        }

        if line.starts_with("</page>") {
            if let Some(words) = current.take() {
                pages.push(words);
            }
            continue;
        }

        if line.starts_with("<word ") {
            let word = (|| {
                Some(Word {
                    text: decode_xml_entities(parse_word_text(line)?.trim()),
                    x_min: parse_attr_f32(line, "xMin")?,
                    x_max: parse_attr_f32(line, "xMax")?,
                    top: parse_attr_f32(line, "yMin")?,
                })
            })();
            if let (Some(words), Some(w)) = (current.as_mut(), word) {
                if !w.text.is_empty() {
                    words.push(w);
                }
            }
        }
    }

    pages
}

fn parse_attr_f32(tag: &str, name: &str) -> Option<f32> {
    let needle = format!("{}=\"", name);
    let start = tag.find(&needle)? + needle.len();
    let rest = &tag[start..];
    let end = rest.find('"')?;
    rest[..end].parse().ok()
}

fn parse_word_text(word_tag: &str) -> Option<&str> {
    let start = word_tag.find('>')? + 1;
    let end = word_tag.rfind("</word>")?;
    Some(&word_tag[start..end])
}

fn decode_xml_entities(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}
