use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;

const DELIMITER: &str = "---";

/// Front-matter block and Markdown body of a content file
#[derive(Debug, PartialEq, Eq)]
pub struct Document<'a> {
    pub front_matter: &'a str,
    pub body: &'a str,
}

/// Splits a Markdown file into its YAML front-matter and body.
///
/// The front-matter must open on the first line with `---` and close with a
/// line holding only `---`.
pub fn split(source: &str) -> Result<Document<'_>> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let Some(rest) = strip_delimiter_line(source) else {
        bail!("missing opening '---' front-matter delimiter");
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            return Ok(Document {
                front_matter: &rest[..offset],
                body: &rest[offset + line.len()..],
            });
        }
        offset += line.len();
    }

    bail!("missing closing '---' front-matter delimiter")
}

/// Parses the front-matter of `source` into `T`
pub fn parse<T: DeserializeOwned>(source: &str) -> Result<T> {
    let document = split(source)?;
    serde_yaml::from_str(document.front_matter).context("Failed to parse front-matter YAML")
}

fn strip_delimiter_line(source: &str) -> Option<&str> {
    let rest = source.strip_prefix(DELIMITER)?;
    let rest = rest.trim_start_matches([' ', '\t']);
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_front_matter_and_body() {
        let source = "---\ntitle: Open\nrounds: 5\n---\n# Heading\nBody text\n";
        let document = split(source).unwrap();
        assert_eq!(document.front_matter, "title: Open\nrounds: 5\n");
        assert_eq!(document.body, "# Heading\nBody text\n");
    }

    #[test]
    fn test_split_handles_crlf_and_empty_body() {
        let source = "---\r\ntitle: Open\r\n---\r\n";
        let document = split(source).unwrap();
        assert_eq!(document.front_matter, "title: Open\r\n");
        assert_eq!(document.body, "");
    }

    #[test]
    fn test_split_rejects_missing_delimiters() {
        assert!(split("title: Open\n").is_err());
        assert!(split("---\ntitle: Open\n").is_err());
    }

    #[test]
    fn test_dashes_inside_values_do_not_close_block() {
        let source = "---\ntitle: U-10 --- Rapid\n---\n";
        let document = split(source).unwrap();
        assert_eq!(document.front_matter, "title: U-10 --- Rapid\n");
    }
}
