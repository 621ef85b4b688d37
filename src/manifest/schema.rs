// src/manifest/schema.rs
// =============================================================================
// The shape of a resource manifest and how to load one from disk.
//
// A manifest looks like this:
//
//   years:
//     - name: L1
//       ue:
//         - name: Networks
//           resources:
//             - name: Course notes
//               type: pdf
//               volume: 2h
//               url: https://example.com/notes.pdf
//
// Only `url` matters to the checker. Every field is optional so that a
// half-filled manifest still loads: missing or null lists are empty, missing
// strings are None.
// =============================================================================

use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::ManifestError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub years: Vec<Year>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Year {
    #[serde(default)]
    pub name: Option<String>,
    /// Teaching units ("unités d'enseignement") of this year
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ue: Vec<Unit>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Unit {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub volume: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

// `key:` with nothing after it is null in YAML; treat it like a missing key
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Manifest {
    // Parses manifest text
    //
    // An empty document is a valid, empty manifest (serde_yaml would
    // otherwise reject it as "EOF while parsing a value").
    pub fn from_yaml(text: &str, path: &Path) -> Result<Self, ManifestError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str::<Option<Manifest>>(text)
            .map(Option::unwrap_or_default)
            .map_err(|source| ManifestError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    // Reads and parses one manifest file
    pub async fn load(path: &Path) -> Result<Self, ManifestError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ManifestError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_yaml(&text, path)
    }

    // Every URL string in the manifest, years -> units -> resources, in file
    // order. No filtering and no deduplication happens here.
    pub fn urls(&self) -> impl Iterator<Item = &str> + '_ {
        self.years
            .iter()
            .flat_map(|year| year.ue.iter())
            .flat_map(|unit| unit.resources.iter())
            .filter_map(|resource| resource.url.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
years:
  - name: L1
    ue:
      - name: Networks
        resources:
          - name: Notes
            type: pdf
            volume: 2h
            url: https://example.com/notes.pdf
          - name: Whiteboard session
            type: live
  - name: L2
    ue:
      - name: Databases
        resources:
          - name: Slides
            url: not a url
          - name: Slides again
            url: https://example.com/notes.pdf
"#;

    #[test]
    fn test_urls_in_file_order_with_duplicates() {
        let manifest = Manifest::from_yaml(SAMPLE, Path::new("sample.yml")).unwrap();
        let urls: Vec<&str> = manifest.urls().collect();
        assert_eq!(
            urls,
            vec![
                "https://example.com/notes.pdf",
                "not a url",
                "https://example.com/notes.pdf",
            ]
        );
    }

    #[test]
    fn test_resource_fields() {
        let manifest = Manifest::from_yaml(SAMPLE, Path::new("sample.yml")).unwrap();
        let notes = &manifest.years[0].ue[0].resources[0];
        assert_eq!(notes.kind.as_deref(), Some("pdf"));
        assert_eq!(notes.volume.as_deref(), Some("2h"));
        assert_eq!(manifest.years[1].name.as_deref(), Some("L2"));
    }

    #[test]
    fn test_empty_and_partial_documents() {
        let empty = Manifest::from_yaml("", Path::new("empty.yml")).unwrap();
        assert_eq!(empty.urls().count(), 0);

        let no_years = Manifest::from_yaml("title: nothing here\n", Path::new("a.yml")).unwrap();
        assert_eq!(no_years.urls().count(), 0);

        let no_units = Manifest::from_yaml("years:\n  - name: L3\n", Path::new("b.yml")).unwrap();
        assert_eq!(no_units.urls().count(), 0);

        let null_lists = Manifest::from_yaml(
            "years:\n  - name: L3\n    ue:\n      - name: A\n        resources:\n",
            Path::new("c.yml"),
        )
        .unwrap();
        assert_eq!(null_lists.years[0].ue.len(), 1);
        assert_eq!(null_lists.urls().count(), 0);

        let bare = Manifest::from_yaml("years:\n", Path::new("d.yml")).unwrap();
        assert!(bare.years.is_empty());
    }

    #[test]
    fn test_parse_error_keeps_path() {
        let err = Manifest::from_yaml("years: [unclosed", Path::new("broken.yml")).unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
        assert_eq!(err.path(), Path::new("broken.yml"));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = Manifest::load(Path::new("/definitely/not/here.yml"))
            .await
            .unwrap_err();
        assert!(matches!(err, ManifestError::Read { .. }));
    }
}
